use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::listing::{ActivityItem, ActivityKind, QuickStat, TipCarousel, TIPS};
use crate::profile::ArtisanProfile;

/// Sidebar menu entries, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Home,
    MyProducts,
    AddProduct,
    Insights,
    Community,
    Orders,
    Settings,
}

impl MenuItem {
    pub fn all() -> &'static [MenuItem] {
        &[
            MenuItem::Home,
            MenuItem::MyProducts,
            MenuItem::AddProduct,
            MenuItem::Insights,
            MenuItem::Community,
            MenuItem::Orders,
            MenuItem::Settings,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Home => "Home",
            MenuItem::MyProducts => "My Products",
            MenuItem::AddProduct => "Add New Product",
            MenuItem::Insights => "Insights & Analytics",
            MenuItem::Community => "Community",
            MenuItem::Orders => "Orders",
            MenuItem::Settings => "Settings",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            MenuItem::Home => "⌂",
            MenuItem::MyProducts => "▤",
            MenuItem::AddProduct => "+",
            MenuItem::Insights => "▲",
            MenuItem::Community => "☺",
            MenuItem::Orders => "▣",
            MenuItem::Settings => "⚙",
        }
    }

    /// Entries that only show a "coming soon" notice
    pub fn is_placeholder(&self) -> bool {
        matches!(
            self,
            MenuItem::Insights | MenuItem::Community | MenuItem::Orders | MenuItem::Settings
        )
    }
}

pub struct SidebarPanel {
    pub state: ListState,
}

impl SidebarPanel {
    pub fn new() -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        Self { state }
    }

    pub fn selected(&self) -> MenuItem {
        let items = MenuItem::all();
        items[self.state.selected().unwrap_or(0).min(items.len() - 1)]
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, profile: &ArtisanProfile) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Brand
                Constraint::Length(4), // Profile
                Constraint::Min(5),    // Menu
            ])
            .split(area);

        let brand = Paragraph::new(Line::from(vec![
            Span::styled(
                " ✿ Artisan Hub",
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::Gray),
            ),
        ]))
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(brand, chunks[0]);

        let initials = profile.initials();
        let avatar = if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        };
        let profile_block = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", avatar),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    profile.display_name().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!("     {}", profile.specialty()),
                Style::default().fg(Color::Gray),
            )),
        ])
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(profile_block, chunks[1]);

        let items: Vec<ListItem> = MenuItem::all()
            .iter()
            .map(|item| {
                let style = if item.is_placeholder() {
                    Style::default().fg(Color::Gray)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", item.glyph()), Style::default().fg(Color::Yellow)),
                    Span::styled(item.label(), style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Menu ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, chunks[2], &mut self.state);
    }
}

pub struct QuickStatsPanel<'a> {
    pub stats: &'a [QuickStat],
}

impl QuickStatsPanel<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if self.stats.is_empty() {
            return;
        }
        let constraints: Vec<Constraint> = self
            .stats
            .iter()
            .map(|_| Constraint::Ratio(1, self.stats.len() as u32))
            .collect();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (stat, column) in self.stats.iter().zip(columns.iter()) {
            let card = Paragraph::new(vec![
                Line::from(Span::styled(
                    stat.value,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(stat.change, Style::default().fg(Color::Green))),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(format!(" {} ", stat.title))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Gray)),
            );
            frame.render_widget(card, *column);
        }
    }
}

fn activity_color(kind: ActivityKind) -> Color {
    match kind {
        ActivityKind::Added => Color::Green,
        ActivityKind::Sold => Color::Yellow,
        ActivityKind::Viewed => Color::Cyan,
        ActivityKind::Liked => Color::LightRed,
    }
}

pub struct ActivityPanel {
    pub items: Vec<ActivityItem>,
    pub title: String,
}

impl ActivityPanel {
    pub fn new(items: Vec<ActivityItem>) -> Self {
        Self {
            items,
            title: "Recent Activity".to_string(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|a| {
                let color = activity_color(a.kind);
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(format!("{} ", a.kind.glyph()), Style::default().fg(color)),
                        Span::raw(format!("{} ", a.action)),
                        Span::styled(a.item, Style::default().add_modifier(Modifier::BOLD)),
                    ]),
                    Line::from(Span::styled(
                        format!("  {}", a.timestamp),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let title = format!(" {} ({}) ", self.title, self.items.len());
        let list = List::new(items).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        );

        frame.render_widget(list, area);
    }
}

pub struct TipsPanel<'a> {
    pub carousel: &'a TipCarousel,
}

impl TipsPanel<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let tip = self.carousel.current();
        let dots: Vec<Span> = (0..TIPS.len())
            .map(|i| {
                if i == self.carousel.index() {
                    Span::styled("● ", Style::default().fg(Color::Yellow))
                } else {
                    Span::styled("○ ", Style::default().fg(Color::DarkGray))
                }
            })
            .collect();

        let content = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("[{}]", tip.category),
                Style::default().fg(Color::Magenta),
            )),
            Line::from(Span::styled(
                tip.title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(tip.description),
            Line::from(""),
            Line::from(dots),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Artisan Tips  [ ◀  ▶ ] ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        );

        frame.render_widget(content, area);
    }
}

pub struct StatusBar<'a> {
    pub notice: Option<&'a str>,
}

impl StatusBar<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        if let Some(notice) = self.notice {
            spans.push(Span::styled(
                format!("{}  ", notice),
                Style::default().fg(Color::Yellow),
            ));
        }
        spans.push(Span::styled(
            "[a]dd product [m]y products [Enter]open [←/→]tips [?]help [q]uit",
            Style::default().fg(Color::DarkGray),
        ));

        let bar = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));
        frame.render_widget(bar, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_placeholders() {
        let placeholders: Vec<&str> = MenuItem::all()
            .iter()
            .filter(|m| m.is_placeholder())
            .map(|m| m.label())
            .collect();
        assert_eq!(
            placeholders,
            vec!["Insights & Analytics", "Community", "Orders", "Settings"]
        );
    }

    #[test]
    fn test_sidebar_starts_on_home() {
        let sidebar = SidebarPanel::new();
        assert_eq!(sidebar.selected(), MenuItem::Home);
    }

    #[test]
    fn test_every_activity_kind_has_a_distinct_color() {
        let kinds = [
            ActivityKind::Added,
            ActivityKind::Sold,
            ActivityKind::Viewed,
            ActivityKind::Liked,
        ];
        let colors: std::collections::HashSet<_> =
            kinds.iter().map(|k| format!("{:?}", activity_color(*k))).collect();
        assert_eq!(colors.len(), kinds.len());
    }
}
