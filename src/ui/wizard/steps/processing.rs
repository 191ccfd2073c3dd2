//! AI processing step rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

use super::{key_hints, section_block};
use crate::listing::PROCESSING_STAGES;
use crate::ui::wizard::ListingWizardScreen;

impl ListingWizardScreen {
    pub(crate) fn render_processing_step(&self, frame: &mut Frame, area: Rect) {
        let processing = &self.views.processing;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Heading
                Constraint::Length(3), // Gauge
                Constraint::Length(1), // Spacer
                Constraint::Min(6),    // Stage checklist
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let heading = Paragraph::new(vec![
            Line::from(Span::styled(
                "AI is working its magic",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("{}...", processing.stage())),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(heading, chunks[0]);

        let gauge = Gauge::default()
            .block(section_block("Progress", true))
            .gauge_style(Style::default().fg(Color::LightRed))
            .percent(processing.percent());
        frame.render_widget(gauge, chunks[1]);

        let done = processing.completed_stages();
        let lines: Vec<Line> = PROCESSING_STAGES
            .iter()
            .enumerate()
            .map(|(i, stage)| {
                if i < done {
                    Line::from(vec![
                        Span::styled("  ✓ ", Style::default().fg(Color::Green)),
                        Span::styled(*stage, Style::default().fg(Color::Green)),
                    ])
                } else if i == done {
                    Line::from(vec![
                        Span::styled("  ⋯ ", Style::default().fg(Color::Yellow)),
                        Span::styled(*stage, Style::default().add_modifier(Modifier::BOLD)),
                    ])
                } else {
                    Line::from(vec![
                        Span::styled("    ", Style::default()),
                        Span::styled(*stage, Style::default().fg(Color::DarkGray)),
                    ])
                }
            })
            .collect();
        frame.render_widget(
            Paragraph::new(lines).block(section_block("Stages", false)),
            chunks[3],
        );

        frame.render_widget(
            Paragraph::new(key_hints(&[("Esc", "back to upload")])).alignment(Alignment::Center),
            chunks[4],
        );
    }
}
