//! Add-product wizard screen.
//!
//! Hosts the listing flow: the [`Wizard`] controller owns navigation, one
//! view per step owns its local input, and this screen moves the controller
//! only when the active view reports ready.

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;

use crate::listing::{
    listing_wizard, GeneratedListing, ListingExport, ListingGenerator, ListingStep,
};
use crate::ui::keybindings::ShortcutContext;
use crate::wizard::{advance_when_ready, StepView, Transition, Wizard};

pub mod steps;
pub mod types;
mod views;

pub use types::*;
pub use views::{ExportView, ProcessingView, ResultsView, ReviewView, StepViews, UploadView};


pub struct ListingWizardScreen {
    pub wizard: Wizard<ListingStep>,
    pub views: StepViews,
    generator: Box<dyn ListingGenerator>,
    exports_dir: PathBuf,
    artisan: String,
    processing_duration: Duration,
    /// Shown on the upload step until the next key press
    notice: Option<&'static str>,
}

pub const COMPLETED_NOTICE: &str = "Listing completed. Ready for the next one!";

impl ListingWizardScreen {
    pub fn new(
        generator: Box<dyn ListingGenerator>,
        exports_dir: PathBuf,
        artisan: impl Into<String>,
        processing_duration: Duration,
    ) -> Self {
        Self {
            wizard: listing_wizard(),
            views: StepViews::new(processing_duration),
            generator,
            exports_dir,
            artisan: artisan.into(),
            processing_duration,
            notice: None,
        }
    }

    pub fn current_step(&self) -> ListingStep {
        self.wizard.current_id()
    }

    pub fn generated(&self) -> Option<&GeneratedListing> {
        self.views.results.generated.as_ref()
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    pub fn active_view(&self) -> &dyn StepView {
        self.views.active(self.current_step())
    }

    /// Whether keystrokes currently go into a text field
    pub fn is_editing(&self) -> bool {
        match self.current_step() {
            ListingStep::Upload => self.views.upload.focus.is_text(),
            ListingStep::Review => self.views.review.as_ref().is_some_and(|r| r.editing),
            _ => false,
        }
    }

    pub fn shortcut_context(&self) -> ShortcutContext {
        if self.is_editing() {
            ShortcutContext::Editing
        } else {
            ShortcutContext::Wizard
        }
    }

    /// Start over from an empty upload step
    pub fn reset(&mut self) {
        self.wizard.reset();
        self.views = StepViews::new(self.processing_duration);
        self.notice = None;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> WizardResult {
        self.notice = None;
        match key.code {
            KeyCode::Esc => return self.go_back(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.cycle_focus(key.code == KeyCode::Tab);
                return WizardResult::Continue;
            }
            _ => {}
        }

        if self.route_to_field(key) {
            return WizardResult::Continue;
        }

        match (self.current_step(), key.code) {
            (_, KeyCode::Enter) => self.confirm(),
            (ListingStep::Upload, KeyCode::Char(' ')) => {
                if self.views.upload.focus == UploadFocus::VoiceNote {
                    self.views.upload.toggle_voice_note();
                }
                WizardResult::Continue
            }
            (ListingStep::Review, KeyCode::Char('e')) => {
                if let Some(review) = self.views.review.as_mut() {
                    review.toggle_editing();
                }
                WizardResult::Continue
            }
            (ListingStep::Review, KeyCode::Char('r')) => {
                if let Some(review) = self.views.review.as_mut() {
                    review.regenerate();
                }
                WizardResult::Continue
            }
            (ListingStep::Export, KeyCode::Char('f')) => {
                self.views.export.toggle_format();
                WizardResult::Continue
            }
            (ListingStep::Export, KeyCode::Char('c')) => self.complete(),
            _ => WizardResult::Continue,
        }
    }

    /// Hand the key to a focused text field; false if it was not consumed
    fn route_to_field(&mut self, key: KeyEvent) -> bool {
        match self.current_step() {
            // Enter always means "continue" here, keywords are comma separated
            ListingStep::Upload if key.code == KeyCode::Enter => false,
            ListingStep::Upload => self
                .views
                .upload
                .focused_field()
                .is_some_and(|field| field.handle_key(key)),
            ListingStep::Review => match self.views.review.as_mut() {
                Some(review) if review.editing => review.focused_field().handle_key(key),
                _ => false,
            },
            _ => false,
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        match self.current_step() {
            ListingStep::Upload => self.views.upload.cycle_focus(forward),
            ListingStep::Review => {
                if let Some(review) = self.views.review.as_mut().filter(|r| r.editing) {
                    review.cycle_focus(forward);
                }
            }
            _ => {}
        }
    }

    /// Enter: advance if the active view allows it
    pub fn confirm(&mut self) -> WizardResult {
        let step = self.current_step();
        match step {
            // Processing finishes on its own through `tick`
            ListingStep::Processing => WizardResult::Continue,
            ListingStep::Export => self.export_listing(),
            _ => {
                if let Some(transition) =
                    advance_when_ready(&mut self.wizard, self.views.active(step))
                {
                    self.on_transition(transition);
                }
                WizardResult::Continue
            }
        }
    }

    /// Esc: leave an edit, step back, or exit from the first step
    pub fn go_back(&mut self) -> WizardResult {
        if let Some(review) = self.views.review.as_mut().filter(|r| r.editing) {
            review.toggle_editing();
            return WizardResult::Continue;
        }
        if self.wizard.is_first() {
            return WizardResult::Exit;
        }
        let transition = self.wizard.retreat();
        self.on_transition(transition);
        WizardResult::Continue
    }

    /// Drive the processing simulation; advances once it completes
    pub fn tick(&mut self, delta: Duration) -> Option<Transition> {
        if self.current_step() != ListingStep::Processing {
            return None;
        }
        self.views.processing.tick(delta);
        let transition = advance_when_ready(&mut self.wizard, &self.views.processing)?;
        self.on_transition(transition);
        Some(transition)
    }

    /// Prepare the view being entered
    fn on_transition(&mut self, transition: Transition) {
        if !transition.changed() {
            return;
        }
        let entered = self.current_step();
        tracing::info!(step = %entered, "{}", self.wizard.step_counter());

        match entered {
            ListingStep::Processing => self.views.processing.restart(),
            ListingStep::Results if transition.to > transition.from => {
                let generated = self.generator.generate(&self.views.upload.draft());
                self.views.results.generated = Some(generated);
                // Fresh content replaces any earlier review
                self.views.review = None;
            }
            ListingStep::Review => {
                if self.views.review.is_none() {
                    self.views.review = self
                        .generated()
                        .map(|g| ReviewView::new(g.listing.clone()));
                }
            }
            ListingStep::Export => {
                self.views.export.written = None;
                self.views.export.error = None;
            }
            _ => {}
        }
    }

    /// Write the reviewed listing in the selected format
    pub fn export_listing(&mut self) -> WizardResult {
        let Some(listing) = self.views.review.as_ref().map(ReviewView::listing) else {
            let message = "Nothing to export yet".to_string();
            self.views.export.error = Some(message.clone());
            return WizardResult::Failed(message);
        };

        let export = ListingExport::new(listing, &self.artisan);
        match export.write_to_dir(&self.exports_dir, self.views.export.format) {
            Ok(path) => {
                self.views.export.written = Some(path.clone());
                self.views.export.error = None;
                WizardResult::Exported(path)
            }
            Err(e) => {
                tracing::warn!(error = %e, "listing export failed");
                let message = format!("{:#}", e);
                self.views.export.error = Some(message.clone());
                WizardResult::Failed(message)
            }
        }
    }

    /// Finish the flow and start a fresh session at the first step
    pub fn complete(&mut self) -> WizardResult {
        tracing::info!(
            exported = self.views.export.written.is_some(),
            "listing flow completed"
        );
        self.reset();
        self.notice = Some(COMPLETED_NOTICE);
        WizardResult::Completed
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let body = self.render_progress_header(frame, area);
        match self.current_step() {
            ListingStep::Upload => self.render_upload_step(frame, body),
            ListingStep::Processing => self.render_processing_step(frame, body),
            ListingStep::Results => self.render_results_step(frame, body),
            ListingStep::Review => self.render_review_step(frame, body),
            ListingStep::Export => self.render_export_step(frame, body),
        }
    }
}
