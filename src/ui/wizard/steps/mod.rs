//! Per-step rendering for the add-product wizard

mod export;
mod processing;
mod results;
mod review;
mod upload;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::listing::ListingStep;
use crate::ui::wizard::ListingWizardScreen;
use crate::wizard::StepProgress;

/// Marker and style for one step in the progress row
pub(crate) fn progress_marker(step: ListingStep, progress: StepProgress) -> (String, Style) {
    match progress {
        StepProgress::Completed => (
            "✓".to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        StepProgress::Active => (
            step.glyph().to_string(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ),
        StepProgress::Upcoming => (step.glyph().to_string(), Style::default().fg(Color::DarkGray)),
    }
}

/// Footer line with key hints; `hints` are (key, action) pairs
pub(crate) fn key_hints(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  |  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Green)));
        spans.push(Span::raw(format!(" {}", action)));
    }
    Line::from(spans)
}

pub(crate) fn section_block(title: &str, focused: bool) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Cyan } else { Color::Gray }))
}

impl ListingWizardScreen {
    /// Draw the title bar and step indicator; returns the area left for the step
    pub(crate) fn render_progress_header(&self, frame: &mut Frame, area: Rect) -> Rect {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title and back hint
                Constraint::Length(4), // Step row
                Constraint::Min(10),   // Step body
            ])
            .split(area);

        let mut title = vec![
            Span::styled(
                "AI Marketplace Assistant",
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  For Local Artisans", Style::default().fg(Color::Gray)),
        ];
        if !self.wizard.is_first() {
            title.push(Span::styled("    Esc ", Style::default().fg(Color::Yellow)));
            title.push(Span::raw("Back"));
        }
        frame.render_widget(
            Paragraph::new(vec![Line::from(title), Line::from("")]),
            chunks[0],
        );

        let steps = self.wizard.len() as u32;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..steps).map(|_| Constraint::Ratio(1, steps)))
            .split(chunks[1]);

        for ((step, progress), column) in self.wizard.progress().zip(columns.iter()) {
            let (marker, marker_style) = progress_marker(step.id, progress);
            let label_style = match progress {
                StepProgress::Active => Style::default().add_modifier(Modifier::BOLD),
                StepProgress::Completed => Style::default().fg(Color::Green),
                StepProgress::Upcoming => Style::default().fg(Color::DarkGray),
            };
            let cell = Paragraph::new(vec![
                Line::from(Span::styled(format!(" {} ", marker), marker_style)),
                Line::from(Span::styled(step.label.clone(), label_style)),
                Line::from(Span::styled(
                    step.description.clone(),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(cell, *column);
        }

        let counter = Paragraph::new(Line::from(Span::styled(
            self.wizard.step_counter(),
            Style::default().fg(Color::Cyan),
        )))
        .alignment(Alignment::Center);
        let counter_area = Rect {
            y: chunks[1].y + chunks[1].height.saturating_sub(1),
            height: 1,
            ..chunks[1]
        };
        frame.render_widget(counter, counter_area);

        chunks[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_marker_is_check() {
        let (marker, _) = progress_marker(ListingStep::Upload, StepProgress::Completed);
        assert_eq!(marker, "✓");
        let (marker, _) = progress_marker(ListingStep::Review, StepProgress::Upcoming);
        assert_eq!(marker, ListingStep::Review.glyph());
    }

    #[test]
    fn test_key_hints_join() {
        let line = key_hints(&[("Enter", "continue"), ("Esc", "back")]);
        assert_eq!(line.to_string(), "Enter continue  |  Esc back");
    }
}
