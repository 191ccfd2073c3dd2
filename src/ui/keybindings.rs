//! Central registry of keyboard shortcuts.
//!
//! The help overlay renders straight from [`SHORTCUTS`], so anything bound in
//! the event loop should be listed here as well.

use crossterm::event::KeyCode;

#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: KeyCode,
    /// Alternative key, e.g. an arrow next to a letter
    pub alt_key: Option<KeyCode>,
    pub description: &'static str,
    pub category: ShortcutCategory,
    pub context: ShortcutContext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutCategory {
    General,
    Navigation,
    Actions,
}

/// Where a shortcut applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutContext {
    Dashboard,
    Products,
    Wizard,
    /// While a text field inside the wizard has focus
    Editing,
}

impl ShortcutCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ShortcutCategory::General => "General",
            ShortcutCategory::Navigation => "Navigation",
            ShortcutCategory::Actions => "Actions",
        }
    }

    pub fn all() -> &'static [ShortcutCategory] {
        &[
            ShortcutCategory::General,
            ShortcutCategory::Navigation,
            ShortcutCategory::Actions,
        ]
    }
}

impl ShortcutContext {
    pub fn display_name(&self) -> &'static str {
        match self {
            ShortcutContext::Dashboard => "Dashboard",
            ShortcutContext::Products => "My Products",
            ShortcutContext::Wizard => "Add New Product",
            ShortcutContext::Editing => "Text Fields",
        }
    }

    pub fn all() -> &'static [ShortcutContext] {
        &[
            ShortcutContext::Dashboard,
            ShortcutContext::Products,
            ShortcutContext::Wizard,
            ShortcutContext::Editing,
        ]
    }
}

impl Shortcut {
    /// e.g. "q", "Tab", "j/↓"
    pub fn key_display(&self) -> String {
        let primary = format_keycode(&self.key);
        match &self.alt_key {
            Some(alt) => format!("{}/{}", primary, format_keycode(alt)),
            None => primary,
        }
    }

    pub fn key_display_padded(&self) -> String {
        format!("{:<11}", self.key_display())
    }

    pub fn matches(&self, code: KeyCode) -> bool {
        self.key == code || self.alt_key == Some(code)
    }
}

fn format_keycode(key: &KeyCode) -> String {
    match key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => format!("{:?}", key),
    }
}

const fn shortcut(
    key: KeyCode,
    alt_key: Option<KeyCode>,
    description: &'static str,
    category: ShortcutCategory,
    context: ShortcutContext,
) -> Shortcut {
    Shortcut {
        key,
        alt_key,
        description,
        category,
        context,
    }
}

use ShortcutCategory::{Actions, General, Navigation};
use ShortcutContext::{Dashboard, Editing, Products, Wizard};

pub static SHORTCUTS: &[Shortcut] = &[
    // Dashboard
    shortcut(KeyCode::Char('q'), None, "Quit", General, Dashboard),
    shortcut(KeyCode::Char('?'), None, "Toggle help", General, Dashboard),
    shortcut(KeyCode::Char('j'), Some(KeyCode::Down), "Next menu item", Navigation, Dashboard),
    shortcut(KeyCode::Char('k'), Some(KeyCode::Up), "Previous menu item", Navigation, Dashboard),
    shortcut(KeyCode::Char(']'), Some(KeyCode::Right), "Next tip", Navigation, Dashboard),
    shortcut(KeyCode::Char('['), Some(KeyCode::Left), "Previous tip", Navigation, Dashboard),
    shortcut(KeyCode::Enter, None, "Open menu item", Actions, Dashboard),
    shortcut(KeyCode::Char('a'), None, "Add new product", Actions, Dashboard),
    shortcut(KeyCode::Char('m'), None, "My products", Actions, Dashboard),
    // My Products
    shortcut(KeyCode::Esc, None, "Back to dashboard", General, Products),
    shortcut(KeyCode::Char('j'), Some(KeyCode::Down), "Next product", Navigation, Products),
    shortcut(KeyCode::Char('k'), Some(KeyCode::Up), "Previous product", Navigation, Products),
    shortcut(KeyCode::Char('n'), Some(KeyCode::Right), "Next page", Navigation, Products),
    shortcut(KeyCode::Char('p'), Some(KeyCode::Left), "Previous page", Navigation, Products),
    shortcut(KeyCode::Char('/'), None, "Search (Enter/Esc to finish)", Actions, Products),
    shortcut(KeyCode::Char('c'), None, "Next category", Actions, Products),
    shortcut(KeyCode::Char('C'), None, "Previous category", Actions, Products),
    shortcut(KeyCode::Char('x'), None, "Clear search and category filters", Actions, Products),
    shortcut(KeyCode::Char('e'), None, "Edit product", Actions, Products),
    shortcut(KeyCode::Char('d'), None, "Delete product", Actions, Products),
    shortcut(KeyCode::Char('a'), None, "Add new product", Actions, Products),
    // Wizard
    shortcut(KeyCode::Esc, None, "Back (leaves on the first step)", General, Wizard),
    shortcut(KeyCode::Enter, None, "Continue (export on the last step)", Navigation, Wizard),
    shortcut(KeyCode::Tab, Some(KeyCode::BackTab), "Switch field", Navigation, Wizard),
    shortcut(KeyCode::Char(' '), None, "Toggle voice note (when focused)", Actions, Wizard),
    shortcut(KeyCode::Char('e'), None, "Review: edit content", Actions, Wizard),
    shortcut(KeyCode::Char('r'), None, "Review: regenerate all", Actions, Wizard),
    shortcut(KeyCode::Char('f'), None, "Export: switch format", Actions, Wizard),
    shortcut(KeyCode::Char('c'), None, "Export: complete and start over", Actions, Wizard),
    // Editing
    shortcut(KeyCode::Tab, Some(KeyCode::BackTab), "Next / previous field", Navigation, Editing),
    shortcut(KeyCode::Esc, None, "Save changes and stop editing", General, Editing),
];

pub fn shortcuts_for_context(context: ShortcutContext) -> impl Iterator<Item = &'static Shortcut> {
    SHORTCUTS.iter().filter(move |s| s.context == context)
}

pub fn shortcuts_by_category_for_context(
    context: ShortcutContext,
) -> Vec<(ShortcutCategory, Vec<&'static Shortcut>)> {
    let mut result = Vec::new();
    for category in ShortcutCategory::all() {
        let shortcuts: Vec<&Shortcut> = shortcuts_for_context(context)
            .filter(|s| s.category == *category)
            .collect();
        if !shortcuts.is_empty() {
            result.push((*category, shortcuts));
        }
    }
    result
}
