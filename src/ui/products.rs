//! My Products screen: search, category filter and a paged product list

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph},
    Frame,
};

use super::form_field::FormField;
use super::paginated_list::{render_paginated_list, PaginatedList};
use crate::listing::{Product, ProductFilter, ProductStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductsResult {
    Continue,
    /// Return to the dashboard
    Back,
    /// Open the add-product wizard
    AddProduct,
}

pub fn status_color(status: ProductStatus) -> Color {
    match status {
        ProductStatus::Live => Color::Green,
        ProductStatus::Draft => Color::Yellow,
        ProductStatus::Sold => Color::Blue,
    }
}

pub struct ProductsScreen {
    catalog: Vec<Product>,
    pub filter: ProductFilter,
    pub search: FormField,
    /// Keys go to the search box while set
    pub searching: bool,
    pub list: PaginatedList<Product>,
    pub notice: Option<String>,
}

impl ProductsScreen {
    pub fn new(catalog: Vec<Product>, page_size: usize) -> Self {
        let mut screen = Self {
            catalog,
            filter: ProductFilter::default(),
            search: FormField::text_input("Search products..."),
            searching: false,
            list: PaginatedList::new(page_size),
            notice: None,
        };
        screen.refresh();
        screen
    }

    /// Re-apply the filter; always lands on page 1
    fn refresh(&mut self) {
        let matching: Vec<Product> = self
            .filter
            .apply(&self.catalog)
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!(
            search = %self.filter.search,
            category = self.filter.category.label(),
            matches = matching.len(),
            "product filter applied"
        );
        self.list.set_items(matching);
    }

    pub fn set_search(&mut self, text: &str) {
        self.search.set_value(text);
        self.filter.search = text.to_string();
        self.refresh();
    }

    /// Back to every product on page 1
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.filter = ProductFilter::default();
        self.refresh();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ProductsResult {
        if self.searching {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => self.searching = false,
                _ => {
                    if self.search.handle_key(key) {
                        let value = self.search.value();
                        if value != self.filter.search {
                            self.filter.search = value;
                            self.refresh();
                        }
                    }
                }
            }
            return ProductsResult::Continue;
        }

        self.notice = None;
        match key.code {
            KeyCode::Esc => return ProductsResult::Back,
            KeyCode::Char('a') => return ProductsResult::AddProduct,
            KeyCode::Char('j') | KeyCode::Down => self.list.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.list.select_prev(),
            KeyCode::Char('n') | KeyCode::Right => self.list.next_page(),
            KeyCode::Char('p') | KeyCode::Left => self.list.prev_page(),
            KeyCode::Char('/') => self.searching = true,
            KeyCode::Char('c') => {
                self.filter.category = self.filter.category.next();
                self.refresh();
            }
            KeyCode::Char('C') => {
                self.filter.category = self.filter.category.prev();
                self.refresh();
            }
            KeyCode::Char('x') if self.filter.is_active() => self.clear_filters(),
            KeyCode::Char('e') => self.notice_for_selected("Editing"),
            KeyCode::Char('d') => self.notice_for_selected("Deleting"),
            _ => {}
        }
        ProductsResult::Continue
    }

    fn notice_for_selected(&mut self, action: &str) {
        if let Some(product) = self.list.selected_item() {
            self.notice = Some(format!(
                "{} \"{}\" is not available in this preview",
                action, product.title
            ));
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(3), // Search + category
                Constraint::Min(6),    // List
                Constraint::Length(1), // Pagination footer
                Constraint::Length(1), // Notice / hints
            ])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    "My Products",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Manage and track your handcrafted items",
                    Style::default().fg(Color::Gray),
                )),
            ]),
            chunks[0],
        );

        let controls = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(chunks[1]);
        self.search
            .render(frame, controls[0], "Search  [/]", self.searching);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    self.filter.category.label(),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
            ]))
            .block(
                Block::default()
                    .title(" Category  [c/C] ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Gray)),
            ),
            controls[1],
        );

        let title = format!("Products ({})", self.list.len());
        render_paginated_list(frame, chunks[2], &mut self.list, &title, |p, _| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("[{}] ", p.status.label()),
                        Style::default().fg(status_color(p.status)),
                    ),
                    Span::styled(p.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  {}", p.price), Style::default().fg(Color::Green)),
                ]),
                Line::from(Span::styled(
                    format!(
                        "    {} · {} views · {} likes · added {}",
                        p.category, p.views, p.likes, p.date_added
                    ),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        });

        if self.list.is_empty() {
            let hint = if self.filter.is_active() {
                "No products found. Try adjusting your search or filter criteria."
            } else {
                "No products found. You haven't added any products yet."
            };
            frame.render_widget(
                Paragraph::new(hint).style(Style::default().fg(Color::Gray)),
                chunks[3],
            );
        } else {
            frame.render_widget(Paragraph::new(self.list.footer_line()), chunks[3]);
        }

        let bottom = match self.notice {
            Some(ref notice) => Line::from(Span::styled(
                notice.clone(),
                Style::default().fg(Color::Yellow),
            )),
            None => {
                let clear = if self.filter.is_active() { " [x]clear filters" } else { "" };
                Line::from(Span::styled(
                    format!(
                        "[Esc]back [/]search [c]ategory{} [n/p]page [e]dit [d]elete [a]dd [?]help",
                        clear
                    ),
                    Style::default().fg(Color::DarkGray),
                ))
            }
        };
        frame.render_widget(Paragraph::new(bottom), chunks[4]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{sample_products, Category, CategoryFilter};
    use crossterm::event::KeyModifiers;

    fn press(screen: &mut ProductsScreen, code: KeyCode) -> ProductsResult {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn screen() -> ProductsScreen {
        ProductsScreen::new(sample_products(), 6)
    }

    #[test]
    fn test_initial_listing_pages() {
        let screen = screen();
        assert_eq!(screen.list.len(), 8);
        assert_eq!(screen.list.total_pages(), 2);
        assert_eq!(screen.list.current_page_items().len(), 6);
    }

    #[test]
    fn test_search_resets_page() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char('n'));
        assert_eq!(screen.list.current_page(), 2);

        press(&mut screen, KeyCode::Char('/'));
        assert!(screen.searching);
        for c in "ceramic".chars() {
            press(&mut screen, KeyCode::Char(c));
        }
        assert_eq!(screen.filter.search, "ceramic");
        assert_eq!(screen.list.current_page(), 1);
        assert!(screen.list.len() < 8);

        press(&mut screen, KeyCode::Enter);
        assert!(!screen.searching);
    }

    #[test]
    fn test_keys_go_to_search_while_searching() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char('/'));
        assert_eq!(press(&mut screen, KeyCode::Char('a')), ProductsResult::Continue);
        assert_eq!(screen.search.value(), "a");
    }

    #[test]
    fn test_category_cycle_filters() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char('c'));
        assert_eq!(screen.filter.category, CategoryFilter::Only(Category::Pottery));
        assert!(screen
            .list
            .current_page_items()
            .iter()
            .all(|p| p.category == Category::Pottery));

        press(&mut screen, KeyCode::Char('C'));
        assert_eq!(screen.filter.category, CategoryFilter::All);
        assert_eq!(screen.list.len(), 8);
    }

    #[test]
    fn test_no_matches_is_empty() {
        let mut screen = screen();
        screen.set_search("zzzz-nothing");
        assert!(screen.list.is_empty());
        assert_eq!(screen.list.total_pages(), 1);
    }

    #[test]
    fn test_clear_filters_restores_full_catalog() {
        let mut screen = screen();
        screen.set_search("mug");
        press(&mut screen, KeyCode::Char('c'));
        assert!(screen.filter.is_active());
        assert!(screen.list.len() < 8);

        press(&mut screen, KeyCode::Char('x'));
        assert!(!screen.filter.is_active());
        assert_eq!(screen.filter, ProductFilter::default());
        assert!(screen.search.is_blank());
        assert_eq!(screen.list.current_page(), 1);
        assert_eq!(screen.list.len(), 8);
    }

    #[test]
    fn test_clear_filters_ignored_without_filter() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char('n'));
        press(&mut screen, KeyCode::Char('x'));
        assert_eq!(screen.list.current_page(), 2);
    }

    #[test]
    fn test_edit_and_delete_only_notify() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char('d'));
        assert!(screen.notice.as_deref().unwrap().starts_with("Deleting"));
        assert_eq!(screen.list.len(), 8);

        press(&mut screen, KeyCode::Char('e'));
        assert!(screen.notice.as_deref().unwrap().starts_with("Editing"));
    }

    #[test]
    fn test_navigation_results() {
        let mut screen = screen();
        assert_eq!(press(&mut screen, KeyCode::Esc), ProductsResult::Back);
        assert_eq!(
            press(&mut screen, KeyCode::Char('a')),
            ProductsResult::AddProduct
        );
    }
}
