use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::listing::{quick_stats, recent_activity, sample_products, MockGenerator};
use crate::profile::ArtisanProfile;
use crate::ui::dialogs::HelpDialog;
use crate::ui::keybindings::ShortcutContext;
use crate::ui::terminal_guard::{install_panic_hook, TerminalGuard};
use crate::ui::wizard::{ListingWizardScreen, WizardResult};
use crate::ui::{Dashboard, DashboardAction, ProductsResult, ProductsScreen};

/// Top-level screen currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Products,
    Wizard,
}

pub struct App {
    config: Config,
    screen: Screen,
    dashboard: Dashboard,
    products: ProductsScreen,
    wizard: ListingWizardScreen,
    help_dialog: HelpDialog,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, profile: ArtisanProfile) -> Self {
        let wizard = ListingWizardScreen::new(
            Box::new(MockGenerator),
            config.exports_path(),
            profile.display_name(),
            Duration::from_millis(config.ui.processing_duration_ms),
        );
        let products = ProductsScreen::new(sample_products(), config.ui.products_per_page);
        let dashboard = Dashboard::new(profile, recent_activity(), quick_stats());

        Self {
            config,
            screen: Screen::Dashboard,
            dashboard,
            products,
            wizard,
            help_dialog: HelpDialog::new(),
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn run(&mut self) -> Result<()> {
        install_panic_hook();
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

        let tick_rate = Duration::from_millis(self.config.ui.tick_rate_ms);
        let mut last_tick = Instant::now();
        tracing::info!(?tick_rate, "entering main loop");

        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            let now = Instant::now();
            self.on_tick(now.duration_since(last_tick));
            last_tick = now;
        }

        terminal.show_cursor()?;
        drop(guard);
        tracing::info!("main loop finished");
        Ok(())
    }

    /// Advance time-driven state; only the processing step uses it
    pub fn on_tick(&mut self, elapsed: Duration) {
        if self.screen == Screen::Wizard {
            self.wizard.tick(elapsed);
        }
    }

    /// Whether printable keys currently belong to a text field
    fn captures_text(&self) -> bool {
        match self.screen {
            Screen::Dashboard => false,
            Screen::Products => self.products.searching,
            Screen::Wizard => self.wizard.is_editing(),
        }
    }

    pub fn shortcut_context(&self) -> ShortcutContext {
        match self.screen {
            Screen::Dashboard => ShortcutContext::Dashboard,
            Screen::Products => ShortcutContext::Products,
            Screen::Wizard => self.wizard.shortcut_context(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // Help overlay swallows everything until closed
        if self.help_dialog.visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.help_dialog.toggle();
            }
            return;
        }
        if key.code == KeyCode::Char('?') && !self.captures_text() {
            self.help_dialog.toggle();
            return;
        }

        match self.screen {
            Screen::Dashboard => self.handle_dashboard_key(key.code),
            Screen::Products => match self.products.handle_key(key) {
                ProductsResult::Continue => {}
                ProductsResult::Back => self.switch_to(Screen::Dashboard),
                ProductsResult::AddProduct => self.open_wizard(),
            },
            Screen::Wizard => match self.wizard.handle_key(key) {
                WizardResult::Continue | WizardResult::Failed(_) => {}
                WizardResult::Exit => self.switch_to(Screen::Dashboard),
                WizardResult::Exported(path) => {
                    tracing::info!(path = %path.display(), "listing ready to publish");
                }
                WizardResult::Completed => {
                    tracing::debug!("wizard restarted after completion");
                }
            },
        }
    }

    fn handle_dashboard_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.dashboard.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.dashboard.select_prev(),
            KeyCode::Char(']') | KeyCode::Right => self.dashboard.next_tip(),
            KeyCode::Char('[') | KeyCode::Left => self.dashboard.prev_tip(),
            KeyCode::Char('a') => self.open_wizard(),
            KeyCode::Char('m') => self.switch_to(Screen::Products),
            KeyCode::Enter => match self.dashboard.activate() {
                DashboardAction::Stay => {}
                DashboardAction::OpenProducts => self.switch_to(Screen::Products),
                DashboardAction::OpenWizard => self.open_wizard(),
            },
            _ => {}
        }
    }

    /// The wizard always starts from a fresh session
    fn open_wizard(&mut self) {
        self.wizard.reset();
        self.switch_to(Screen::Wizard);
    }

    fn switch_to(&mut self, screen: Screen) {
        if self.screen != screen {
            tracing::info!(from = ?self.screen, to = ?screen, "switching screen");
            self.screen = screen;
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        match self.screen {
            Screen::Dashboard => self.dashboard.render(frame),
            Screen::Products => self.products.render(frame),
            Screen::Wizard => self.wizard.render(frame),
        }
        self.help_dialog.render(frame, self.shortcut_context());
    }
}
