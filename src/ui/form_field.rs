//! Text entry widgets shared by the wizard steps and the product search

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_textarea::TextArea;

pub enum FormField {
    /// Single-line input; `cursor` counts chars, not bytes
    TextInput {
        value: String,
        cursor: usize,
        placeholder: String,
    },
    TextArea {
        textarea: Box<TextArea<'static>>,
        placeholder: String,
    },
}

impl FormField {
    pub fn text_input(placeholder: impl Into<String>) -> Self {
        FormField::TextInput {
            value: String::new(),
            cursor: 0,
            placeholder: placeholder.into(),
        }
    }

    pub fn text_area(placeholder: impl Into<String>) -> Self {
        FormField::TextArea {
            textarea: Box::new(TextArea::default()),
            placeholder: placeholder.into(),
        }
    }

    pub fn value(&self) -> String {
        match self {
            FormField::TextInput { value, .. } => value.clone(),
            FormField::TextArea { textarea, .. } => textarea.lines().join("\n"),
        }
    }

    pub fn set_value(&mut self, new_value: &str) {
        match self {
            FormField::TextInput { value, cursor, .. } => {
                *value = new_value.to_string();
                *cursor = value.chars().count();
            }
            FormField::TextArea { textarea, .. } => {
                let lines: Vec<String> = new_value.lines().map(str::to_string).collect();
                let mut fresh = TextArea::new(if lines.is_empty() {
                    vec![String::new()]
                } else {
                    lines
                });
                fresh.move_cursor(tui_textarea::CursorMove::Bottom);
                fresh.move_cursor(tui_textarea::CursorMove::End);
                **textarea = fresh;
            }
        }
    }

    pub fn clear(&mut self) {
        self.set_value("");
    }

    pub fn is_blank(&self) -> bool {
        match self {
            FormField::TextInput { value, .. } => value.trim().is_empty(),
            FormField::TextArea { textarea, .. } => {
                textarea.lines().iter().all(|l| l.trim().is_empty())
            }
        }
    }

    /// Returns true if the key was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self {
            FormField::TextInput { value, cursor, .. } => {
                handle_text_input_key(value, cursor, key.code)
            }
            FormField::TextArea { textarea, .. } => {
                if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
                    return false;
                }
                textarea.input(key);
                true
            }
        }
    }

    /// Plain key press without modifiers
    pub fn handle_code(&mut self, code: KeyCode) -> bool {
        self.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, title: &str, focused: bool) {
        let border_color = if focused { Color::Cyan } else { Color::Gray };
        let block = Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        match self {
            FormField::TextInput {
                value,
                cursor,
                placeholder,
            } => {
                let content = if value.is_empty() && !focused {
                    Line::from(Span::styled(
                        placeholder.as_str(),
                        Style::default().fg(Color::DarkGray),
                    ))
                } else if focused {
                    let byte_pos = byte_index(value, *cursor);
                    let (before, after) = value.split_at(byte_pos);
                    Line::from(vec![
                        Span::raw(before.to_string()),
                        Span::styled("|", Style::default().fg(Color::Cyan)),
                        Span::raw(after.to_string()),
                    ])
                } else {
                    Line::from(value.as_str())
                };

                let para = Paragraph::new(content).block(block).style(Style::default().fg(
                    if focused {
                        Color::White
                    } else {
                        Color::Gray
                    },
                ));
                frame.render_widget(para, area);
            }
            FormField::TextArea {
                textarea,
                placeholder,
            } => {
                textarea.set_cursor_line_style(Style::default());
                textarea.set_cursor_style(if focused {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                });
                textarea.set_block(block);
                textarea.set_placeholder_text(placeholder.clone());
                textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));

                frame.render_widget(&**textarea, area);
            }
        }
    }
}

fn byte_index(value: &str, char_pos: usize) -> usize {
    value
        .char_indices()
        .nth(char_pos)
        .map_or(value.len(), |(i, _)| i)
}

fn handle_text_input_key(value: &mut String, cursor: &mut usize, code: KeyCode) -> bool {
    let len = value.chars().count();
    match code {
        KeyCode::Char(c) => {
            value.insert(byte_index(value, *cursor), c);
            *cursor += 1;
            true
        }
        KeyCode::Backspace => {
            if *cursor > 0 {
                *cursor -= 1;
                value.remove(byte_index(value, *cursor));
            }
            true
        }
        KeyCode::Delete => {
            if *cursor < len {
                value.remove(byte_index(value, *cursor));
            }
            true
        }
        KeyCode::Left => {
            *cursor = cursor.saturating_sub(1);
            true
        }
        KeyCode::Right => {
            if *cursor < len {
                *cursor += 1;
            }
            true
        }
        KeyCode::Home => {
            *cursor = 0;
            true
        }
        KeyCode::End => {
            *cursor = len;
            true
        }
        _ => false,
    }
}
