//! Upload step rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{key_hints, section_block};
use crate::listing::VoiceNote;
use crate::ui::wizard::{ListingWizardScreen, UploadFocus};
use crate::wizard::StepView;

impl ListingWizardScreen {
    pub(crate) fn render_upload_step(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Heading
                Constraint::Length(3), // Image path
                Constraint::Length(1), // Image hint
                Constraint::Min(5),    // Keywords
                Constraint::Length(3), // Voice note
                Constraint::Length(1), // Readiness
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let heading = Paragraph::new(vec![
            Line::from(Span::styled(
                "Tell us about your product",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from("Upload a photo and describe it in a few words or with a voice note."),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(heading, chunks[0]);

        let upload = &mut self.views.upload;
        let focus = upload.focus;

        upload.image.render(
            frame,
            chunks[1],
            "Product Image",
            focus == UploadFocus::ImagePath,
        );

        let draft = upload.draft();
        let hint = if !draft.has_image() {
            Span::styled(
                "  High-quality photos work best: natural light, plain background",
                Style::default().fg(Color::DarkGray),
            )
        } else if draft.image_exists() {
            Span::styled("  ✓ Image found", Style::default().fg(Color::Green))
        } else {
            Span::styled(
                "  File not found; the path will be used as entered",
                Style::default().fg(Color::Yellow),
            )
        };
        frame.render_widget(Paragraph::new(Line::from(hint)), chunks[2]);

        upload.keywords.render(
            frame,
            chunks[3],
            "Keywords & Description",
            focus == UploadFocus::Keywords,
        );

        let voice_focused = focus == UploadFocus::VoiceNote;
        let (status, status_style) = match upload.voice_note {
            VoiceNote::None => ("No voice note", Style::default().fg(Color::DarkGray)),
            VoiceNote::Recording => (
                "● Recording...",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            VoiceNote::Recorded => ("✓ Voice note recorded", Style::default().fg(Color::Green)),
        };
        let voice = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("[{}]", upload.voice_note.label()),
                if voice_focused {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Cyan)
                },
            ),
            Span::raw("  "),
            Span::styled(status, status_style),
        ]))
        .block(section_block("Voice Note", voice_focused));
        frame.render_widget(voice, chunks[4]);

        let readiness = match (self.notice, upload.blocked_reason()) {
            (Some(notice), _) => Span::styled(
                format!("✓ {}", notice),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            (None, Some(reason)) => Span::styled(reason, Style::default().fg(Color::Yellow)),
            (None, None) => Span::styled(
                "Ready! Press Enter to generate your listing",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        };
        frame.render_widget(
            Paragraph::new(Line::from(readiness)).alignment(Alignment::Center),
            chunks[5],
        );

        let hints: &[(&str, &str)] = if voice_focused {
            &[
                ("Space", "record"),
                ("Tab", "next field"),
                ("Enter", "continue"),
                ("Esc", "dashboard"),
            ]
        } else {
            &[
                ("Tab", "next field"),
                ("Enter", "continue"),
                ("Esc", "dashboard"),
            ]
        };
        frame.render_widget(
            Paragraph::new(key_hints(hints)).alignment(Alignment::Center),
            chunks[6],
        );
    }
}
