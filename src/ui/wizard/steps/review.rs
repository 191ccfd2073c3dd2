//! Review step rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{key_hints, section_block};
use crate::ui::wizard::{ListingWizardScreen, ReviewField, EDITING_TIPS};

impl ListingWizardScreen {
    pub(crate) fn render_review_step(&mut self, frame: &mut Frame, area: Rect) {
        let Some(review) = self.views.review.as_mut() else {
            frame.render_widget(
                Paragraph::new("Nothing to review yet").alignment(Alignment::Center),
                area,
            );
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Mode / notice
                Constraint::Length(3), // Locked image
                Constraint::Length(3), // Title
                Constraint::Min(8),    // Description and story
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let status = match (review.editing, review.notice) {
            (true, _) => Span::styled(
                "Editing: Tab switches field, Esc saves",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            (false, Some(notice)) => Span::styled(notice, Style::default().fg(Color::Cyan)),
            (false, None) if review.is_edited() => {
                Span::styled("Changes saved", Style::default().fg(Color::Green))
            }
            (false, None) => Span::styled(
                "Review your listing before publishing",
                Style::default().fg(Color::Gray),
            ),
        };
        frame.render_widget(
            Paragraph::new(Line::from(status)).alignment(Alignment::Center),
            chunks[0],
        );

        let image = Paragraph::new(vec![
            Line::from(Span::styled(
                review.enhanced_image().to_string(),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(Span::styled(
                "Locked: image enhancement cannot be edited manually. Use regenerate for a new version.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(section_block("Enhanced Image (locked)", false));
        frame.render_widget(image, chunks[1]);

        let editing = review.editing;
        let focus = review.focus;
        let focused = |field: ReviewField| editing && focus == field;

        render_field(
            review,
            frame,
            chunks[2],
            ReviewField::Title,
            focused(ReviewField::Title),
        );

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[3]);
        render_field(
            review,
            frame,
            columns[0],
            ReviewField::Description,
            focused(ReviewField::Description),
        );
        let story = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(6)])
            .split(columns[1]);
        render_field(
            review,
            frame,
            story[0],
            ReviewField::BrandStory,
            focused(ReviewField::BrandStory),
        );
        let tips: Vec<Line> = EDITING_TIPS
            .iter()
            .map(|tip| Line::from(format!("• {}", tip)))
            .collect();
        frame.render_widget(
            Paragraph::new(tips)
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true })
                .block(section_block("Editing Tips", false)),
            story[1],
        );

        let hints: &[(&str, &str)] = if editing {
            &[("Tab", "next field"), ("Esc", "save changes")]
        } else {
            &[
                ("e", "edit"),
                ("r", "regenerate all"),
                ("Enter", "accept & continue"),
                ("Esc", "back"),
            ]
        };
        frame.render_widget(
            Paragraph::new(key_hints(hints)).alignment(Alignment::Center),
            chunks[4],
        );
    }
}

/// Editable field while editing, wrapped read-only text otherwise
fn render_field(
    review: &mut crate::ui::wizard::ReviewView,
    frame: &mut Frame,
    area: Rect,
    field: ReviewField,
    focused: bool,
) {
    if review.editing {
        let widget = match field {
            ReviewField::Title => &mut review.title,
            ReviewField::Description => &mut review.description,
            ReviewField::BrandStory => &mut review.brand_story,
        };
        widget.render(frame, area, field.label(), focused);
        return;
    }

    let text = match field {
        ReviewField::Title => review.title.value(),
        ReviewField::Description => review.description.value(),
        ReviewField::BrandStory => review.brand_story.value(),
    };
    let lines: Vec<Line> = text.lines().map(|l| Line::from(l.to_string())).collect();
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(section_block(field.label(), false)),
        area,
    );
}
