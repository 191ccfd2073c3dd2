use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::ui::keybindings::{shortcuts_by_category_for_context, ShortcutContext};

pub struct HelpDialog {
    pub visible: bool,
}

impl HelpDialog {
    pub fn new() -> Self {
        Self { visible: false }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Contexts listed for a screen; the wizard also shows text field keys
    pub fn contexts_for(context: ShortcutContext) -> Vec<ShortcutContext> {
        match context {
            ShortcutContext::Wizard | ShortcutContext::Editing => {
                vec![ShortcutContext::Wizard, ShortcutContext::Editing]
            }
            other => vec![other],
        }
    }

    fn lines_for(context: ShortcutContext) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for ctx in Self::contexts_for(context) {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                format!("{}:", ctx.display_name()),
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Cyan),
            )));

            for (category, shortcuts) in shortcuts_by_category_for_context(ctx) {
                lines.push(Line::from(Span::styled(
                    format!(" {}", category.display_name()),
                    Style::default().fg(Color::Gray),
                )));
                for shortcut in shortcuts {
                    lines.push(Line::from(vec![
                        Span::raw("   "),
                        Span::styled(
                            shortcut.key_display_padded(),
                            Style::default().fg(Color::Yellow),
                        ),
                        Span::raw(shortcut.description),
                    ]));
                }
            }
        }
        lines
    }

    pub fn render(&self, frame: &mut Frame, context: ShortcutContext) {
        if !self.visible {
            return;
        }

        let area = centered_rect(60, 80, frame.area());
        frame.render_widget(Clear, area);

        let mut help_text = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Cyan),
            )),
            Line::from(""),
        ];
        help_text.extend(Self::lines_for(context));
        help_text.push(Line::from(""));
        help_text.push(Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::Gray),
        )));

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .alignment(Alignment::Left);

        frame.render_widget(help, area);
    }
}
