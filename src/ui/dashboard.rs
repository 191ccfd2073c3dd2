use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::panels::{ActivityPanel, MenuItem, QuickStatsPanel, SidebarPanel, StatusBar, TipsPanel};
use crate::listing::{greeting, ActivityItem, QuickStat, TipCarousel};
use crate::profile::ArtisanProfile;

/// What the host should do after a dashboard action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    Stay,
    OpenProducts,
    OpenWizard,
}

pub struct Dashboard {
    pub sidebar: SidebarPanel,
    pub activity_panel: ActivityPanel,
    pub stats: Vec<QuickStat>,
    pub tips: TipCarousel,
    pub profile: ArtisanProfile,
    /// One-line notice in the status bar, e.g. for unfinished menu entries
    pub notice: Option<String>,
}

impl Dashboard {
    pub fn new(
        profile: ArtisanProfile,
        activity: Vec<ActivityItem>,
        stats: impl IntoIterator<Item = QuickStat>,
    ) -> Self {
        Self {
            sidebar: SidebarPanel::new(),
            activity_panel: ActivityPanel::new(activity),
            stats: stats.into_iter().collect(),
            tips: TipCarousel::default(),
            profile,
            notice: None,
        }
    }

    pub fn selected_item(&self) -> MenuItem {
        self.sidebar.selected()
    }

    pub fn select_next(&mut self) {
        let len = MenuItem::all().len();
        let i = self
            .sidebar
            .state
            .selected()
            .map_or(0, |i| if i >= len - 1 { 0 } else { i + 1 });
        self.sidebar.state.select(Some(i));
    }

    pub fn select_prev(&mut self) {
        let len = MenuItem::all().len();
        let i = self
            .sidebar
            .state
            .selected()
            .map_or(0, |i| if i == 0 { len - 1 } else { i - 1 });
        self.sidebar.state.select(Some(i));
    }

    pub fn next_tip(&mut self) {
        self.tips.next();
    }

    pub fn prev_tip(&mut self) {
        self.tips.prev();
    }

    /// Open the highlighted menu entry
    pub fn activate(&mut self) -> DashboardAction {
        self.open(self.selected_item())
    }

    pub fn open(&mut self, item: MenuItem) -> DashboardAction {
        self.notice = None;
        match item {
            MenuItem::Home => DashboardAction::Stay,
            MenuItem::MyProducts => DashboardAction::OpenProducts,
            MenuItem::AddProduct => DashboardAction::OpenWizard,
            placeholder => {
                tracing::debug!(item = placeholder.label(), "menu entry not available yet");
                self.notice = Some(format!("{} is coming soon", placeholder.label()));
                DashboardAction::Stay
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Sidebar + main
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(28), Constraint::Min(40)])
            .split(rows[0]);

        self.sidebar.render(frame, columns[0], &self.profile);

        let main = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Greeting
                Constraint::Length(4), // Quick stats
                Constraint::Min(6),    // Activity + tips
            ])
            .split(columns[1]);

        let greeting = Paragraph::new(vec![
            Line::from(Span::styled(
                greeting(self.profile.display_name()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Here's what's happening with your craft business today.",
                Style::default().fg(Color::Gray),
            )),
        ]);
        frame.render_widget(greeting, main[0]);

        QuickStatsPanel { stats: &self.stats }.render(frame, main[1]);

        let lower = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main[2]);
        self.activity_panel.render(frame, lower[0]);
        TipsPanel {
            carousel: &self.tips,
        }
        .render(frame, lower[1]);

        StatusBar {
            notice: self.notice.as_deref(),
        }
        .render(frame, rows[1]);
    }
}
