//! Export step rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{key_hints, section_block};
use crate::listing::ExportFormat;
use crate::ui::wizard::ListingWizardScreen;

impl ListingWizardScreen {
    pub(crate) fn render_export_step(&self, frame: &mut Frame, area: Rect) {
        let export = &self.views.export;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Heading
                Constraint::Length(3), // Format choice
                Constraint::Length(1), // Spacer
                Constraint::Min(4),    // Result
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let title = self
            .views
            .review
            .as_ref()
            .map(|r| r.title.value())
            .unwrap_or_default();
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    "Ready to publish",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(title, Style::default().fg(Color::Gray))),
            ])
            .alignment(Alignment::Center),
            chunks[0],
        );

        let option = |format: ExportFormat| {
            let selected = export.format == format;
            Span::styled(
                format!(" {} {} ", if selected { "●" } else { "○" }, format),
                if selected {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                },
            )
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                option(ExportFormat::Json),
                Span::raw("   "),
                option(ExportFormat::Text),
            ]))
            .alignment(Alignment::Center)
            .block(section_block("Format", true)),
            chunks[1],
        );

        let result: Vec<Line> = match (&export.written, &export.error) {
            (_, Some(error)) => vec![
                Line::from(Span::styled(
                    "Export failed",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(error.clone()),
            ],
            (Some(path), None) => vec![
                Line::from(Span::styled(
                    "✓ Listing exported",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(path.display().to_string()),
                Line::from(""),
                Line::from("Press c to complete and start a new product."),
            ],
            (None, None) => vec![Line::from(Span::styled(
                "Press Enter to write the listing file.",
                Style::default().fg(Color::Gray),
            ))],
        };
        frame.render_widget(
            Paragraph::new(result)
                .wrap(Wrap { trim: false })
                .block(section_block("Export", false)),
            chunks[3],
        );

        frame.render_widget(
            Paragraph::new(key_hints(&[
                ("Enter", "export"),
                ("f", "format"),
                ("c", "complete"),
                ("Esc", "back"),
            ]))
            .alignment(Alignment::Center),
            chunks[4],
        );
    }
}
