//! Results step rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{key_hints, section_block};
use crate::ui::wizard::ListingWizardScreen;

fn badges(labels: &[String]) -> Line<'static> {
    let mut spans = Vec::new();
    for label in labels {
        spans.push(Span::styled(
            format!(" {} ", label),
            Style::default().fg(Color::Black).bg(Color::LightGreen),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

impl ListingWizardScreen {
    pub(crate) fn render_results_step(&self, frame: &mut Frame, area: Rect) {
        let Some(generated) = self.generated() else {
            frame.render_widget(
                Paragraph::new("No results yet").alignment(Alignment::Center),
                area,
            );
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Heading
                Constraint::Length(4), // Enhanced image
                Constraint::Min(6),    // Description and story
                Constraint::Length(3), // Stats
                Constraint::Length(1), // Footer
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Your AI-generated listing is ready!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            chunks[0],
        );

        let image = Paragraph::new(vec![
            Line::from(Span::styled(
                generated.listing.enhanced_image.clone(),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(Span::styled(
                generated.enhancement_notes.clone(),
                Style::default().fg(Color::Gray),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(section_block("Enhanced Image", false));
        frame.render_widget(image, chunks[1]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);

        let mut description = vec![
            Line::from(Span::styled(
                generated.listing.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            badges(&generated.description_badges),
            Line::from(""),
        ];
        description.extend(generated.listing.description.lines().map(|l| Line::from(l.to_string())));
        frame.render_widget(
            Paragraph::new(description)
                .wrap(Wrap { trim: false })
                .block(section_block("Product Description", false)),
            columns[0],
        );

        let mut story = vec![badges(&generated.story_badges), Line::from("")];
        story.extend(generated.listing.brand_story.lines().map(|l| Line::from(l.to_string())));
        frame.render_widget(
            Paragraph::new(story)
                .wrap(Wrap { trim: false })
                .block(section_block("Brand Story", false)),
            columns[1],
        );

        let stats = &generated.stats;
        let stat_line = Line::from(vec![
            Span::styled(
                format!("{}%", stats.quality_score_pct),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Quality Score     "),
            Span::styled(
                stats.keywords_used.to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" SEO Keywords     "),
            Span::styled(
                format!("{:.1}", stats.engagement_score),
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Engagement Score"),
        ]);
        frame.render_widget(
            Paragraph::new(stat_line)
                .alignment(Alignment::Center)
                .block(section_block("Listing Stats", false)),
            chunks[3],
        );

        frame.render_widget(
            Paragraph::new(key_hints(&[("Enter", "review & edit"), ("Esc", "back")]))
                .alignment(Alignment::Center),
            chunks[4],
        );
    }
}
