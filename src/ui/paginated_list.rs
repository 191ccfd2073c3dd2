//! Paginated list widget with 1-indexed, clamped page navigation
//!
//! Used by the My Products screen. Replacing the items always returns to
//! the first page.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::listing::{page_slice, total_pages};

pub struct PaginatedList<T> {
    items: Vec<T>,
    /// Current page, 1-indexed
    page: usize,
    page_size: usize,
    /// Selected row within the current page
    selected: usize,
    list_state: ListState,
}

impl<T> PaginatedList<T> {
    pub fn new(page_size: usize) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            items: Vec::new(),
            page: 1,
            page_size: page_size.max(1),
            selected: 0,
            list_state,
        }
    }

    /// Replace the items and go back to page 1
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.page = 1;
        self.select_row(0);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Pages needed for the items, at least 1 for display
    pub fn total_pages(&self) -> usize {
        total_pages(self.items.len(), self.page_size).max(1)
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn current_page_items(&self) -> &[T] {
        page_slice(&self.items, self.page, self.page_size)
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.current_page_items().get(self.selected)
    }

    fn select_row(&mut self, row: usize) {
        self.selected = row;
        self.list_state.select(Some(row));
    }

    /// Next row; continues onto the next page and wraps at the end
    pub fn select_next(&mut self) {
        let rows = self.current_page_items().len();
        if rows == 0 {
            return;
        }
        if self.selected + 1 < rows {
            self.select_row(self.selected + 1);
        } else if self.page < self.total_pages() {
            self.page += 1;
            self.select_row(0);
        } else {
            self.page = 1;
            self.select_row(0);
        }
    }

    pub fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.selected > 0 {
            self.select_row(self.selected - 1);
            return;
        }
        self.page = if self.page > 1 {
            self.page - 1
        } else {
            self.total_pages()
        };
        let last = self.current_page_items().len().saturating_sub(1);
        self.select_row(last);
    }

    /// Jump to a page, clamped to `1..=total_pages()`
    pub fn go_to_page(&mut self, page: usize) {
        let page = page.clamp(1, self.total_pages());
        if page != self.page {
            self.page = page;
            self.select_row(0);
        }
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }

    /// "Showing 1-6 of 8 products" plus the page indicator
    pub fn footer_line(&self) -> Line<'static> {
        let shown = self.current_page_items().len();
        let start = (self.page - 1) * self.page_size;
        let range = if shown == 0 {
            "No products".to_string()
        } else {
            format!(
                "Showing {}-{} of {} products",
                start + 1,
                start + shown,
                self.items.len()
            )
        };

        let mut spans = vec![Span::styled(range, Style::default().fg(Color::DarkGray))];
        if self.total_pages() > 1 {
            spans.extend([
                Span::raw("  "),
                Span::styled(
                    format!("Page {}/{}", self.page, self.total_pages()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw("  "),
                Span::styled("[n]", Style::default().fg(Color::Yellow)),
                Span::styled(" next  ", Style::default().fg(Color::DarkGray)),
                Span::styled("[p]", Style::default().fg(Color::Yellow)),
                Span::styled(" prev", Style::default().fg(Color::DarkGray)),
            ]);
        }
        Line::from(spans)
    }
}

/// Render a paginated list with a custom item renderer
pub fn render_paginated_list<T, F>(
    frame: &mut Frame,
    area: Rect,
    list: &mut PaginatedList<T>,
    title: &str,
    item_renderer: F,
) where
    F: Fn(&T, bool) -> ListItem<'static>,
{
    let items: Vec<ListItem> = list
        .current_page_items()
        .iter()
        .enumerate()
        .map(|(i, item)| item_renderer(item, i == list.selected))
        .collect();

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let list_widget = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, list.list_state_mut());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_still_has_one_page() {
        let list: PaginatedList<String> = PaginatedList::new(6);
        assert!(list.is_empty());
        assert_eq!(list.total_pages(), 1);
        assert_eq!(list.current_page(), 1);
        assert!(list.selected_item().is_none());
    }

    #[test]
    fn test_pages_are_one_indexed() {
        let mut list: PaginatedList<i32> = PaginatedList::new(3);
        list.set_items(vec![1, 2, 3, 4, 5, 6, 7]);

        assert_eq!(list.total_pages(), 3);
        assert_eq!(list.current_page_items(), &[1, 2, 3]);

        list.next_page();
        assert_eq!(list.current_page(), 2);
        assert_eq!(list.current_page_items(), &[4, 5, 6]);

        list.next_page();
        assert_eq!(list.current_page_items(), &[7]);
    }

    #[test]
    fn test_page_navigation_is_clamped() {
        let mut list: PaginatedList<i32> = PaginatedList::new(3);
        list.set_items(vec![1, 2, 3, 4, 5]);

        list.prev_page();
        assert_eq!(list.current_page(), 1);

        list.go_to_page(99);
        assert_eq!(list.current_page(), 2);
        list.next_page();
        assert_eq!(list.current_page(), 2);

        list.go_to_page(0);
        assert_eq!(list.current_page(), 1);
    }

    #[test]
    fn test_set_items_resets_to_first_page() {
        let mut list: PaginatedList<i32> = PaginatedList::new(2);
        list.set_items(vec![1, 2, 3, 4, 5]);
        list.go_to_page(3);
        list.set_items(vec![1, 2, 3]);
        assert_eq!(list.current_page(), 1);
        assert_eq!(list.selected_item(), Some(&1));
    }

    #[test]
    fn test_selection_crosses_pages() {
        let mut list: PaginatedList<&str> = PaginatedList::new(3);
        list.set_items(vec!["a", "b", "c", "d", "e"]);

        list.select_next();
        list.select_next();
        list.select_next();
        assert_eq!(list.current_page(), 2);
        assert_eq!(list.selected_item(), Some(&"d"));

        list.select_next();
        list.select_next();
        // Wraps back to the start
        assert_eq!(list.current_page(), 1);
        assert_eq!(list.selected_item(), Some(&"a"));
    }

    #[test]
    fn test_select_prev_wraps_to_last_item() {
        let mut list: PaginatedList<i32> = PaginatedList::new(3);
        list.set_items(vec![1, 2, 3, 4, 5]);
        list.select_prev();
        assert_eq!(list.current_page(), 2);
        assert_eq!(list.selected_item(), Some(&5));
    }

    #[test]
    fn test_footer_shows_range() {
        let mut list: PaginatedList<i32> = PaginatedList::new(6);
        list.set_items((1..=8).collect());
        let text: String = list
            .footer_line()
            .spans
            .iter()
            .map(|s| s.content.to_string())
            .collect();
        assert!(text.contains("Showing 1-6 of 8 products"));
        assert!(text.contains("Page 1/2"));
    }
}
