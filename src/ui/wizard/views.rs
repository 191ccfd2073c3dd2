//! Local state of each step, and the readiness each one reports

use std::time::Duration;

use super::types::{cycle, ReviewField, UploadFocus, REGENERATE_NOTICE};
use crate::listing::{
    ExportFormat, GeneratedListing, Listing, ListingStep, ProductDraft, VoiceNote,
    PROCESSING_STAGES,
};
use crate::ui::form_field::FormField;
use crate::wizard::StepView;
use std::path::PathBuf;

pub struct UploadView {
    pub image: FormField,
    pub keywords: FormField,
    pub voice_note: VoiceNote,
    pub focus: UploadFocus,
}

impl Default for UploadView {
    fn default() -> Self {
        Self {
            image: FormField::text_input("Path to a product photo, e.g. ~/photos/mug.jpg"),
            keywords: FormField::text_area(
                "e.g. handmade ceramic mug, blue glaze, kitchen decor, gift idea",
            ),
            voice_note: VoiceNote::None,
            focus: UploadFocus::ImagePath,
        }
    }
}

impl UploadView {
    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            image_path: self.image.value().trim().to_string(),
            keywords: self.keywords.value(),
            voice_note: self.voice_note,
        }
    }

    pub fn focused_field(&mut self) -> Option<&mut FormField> {
        match self.focus {
            UploadFocus::ImagePath => Some(&mut self.image),
            UploadFocus::Keywords => Some(&mut self.keywords),
            UploadFocus::VoiceNote => None,
        }
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        self.focus = cycle(UploadFocus::all(), self.focus, forward);
    }

    pub fn toggle_voice_note(&mut self) {
        self.voice_note = self.voice_note.toggled();
        tracing::debug!(state = ?self.voice_note, "voice note toggled");
    }
}

impl StepView for UploadView {
    fn is_ready(&self) -> bool {
        self.draft().is_complete()
    }

    fn blocked_reason(&self) -> Option<&'static str> {
        let draft = self.draft();
        if !draft.has_image() {
            Some("Add a product image to continue")
        } else if !draft.has_description_input() {
            Some("Add keywords or record a voice note")
        } else {
            None
        }
    }
}

/// Simulated processing, advanced by host ticks
pub struct ProcessingView {
    elapsed: Duration,
    duration: Duration,
}

impl ProcessingView {
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    pub fn tick(&mut self, delta: Duration) {
        self.elapsed = (self.elapsed + delta).min(self.duration);
    }

    /// 0..=100
    pub fn percent(&self) -> u16 {
        if self.duration.is_zero() {
            return 100;
        }
        let ratio = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (ratio * 100.0).round().min(100.0) as u16
    }

    pub fn stage(&self) -> &'static str {
        let count = PROCESSING_STAGES.len();
        let idx = (usize::from(self.percent()) * count / 100).min(count - 1);
        PROCESSING_STAGES[idx]
    }

    /// Stages already passed, for the checklist
    pub fn completed_stages(&self) -> usize {
        usize::from(self.percent()) * PROCESSING_STAGES.len() / 100
    }
}

impl StepView for ProcessingView {
    fn is_ready(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn blocked_reason(&self) -> Option<&'static str> {
        Some("Processing is still running")
    }
}

/// Generated package shown on the results step
pub struct ResultsView {
    pub generated: Option<GeneratedListing>,
}

impl StepView for ResultsView {
    fn is_ready(&self) -> bool {
        true
    }
}

pub struct ReviewView {
    generated: Listing,
    pub title: FormField,
    pub description: FormField,
    pub brand_story: FormField,
    pub editing: bool,
    pub focus: ReviewField,
    pub notice: Option<&'static str>,
}

impl ReviewView {
    pub fn new(generated: Listing) -> Self {
        let mut view = Self {
            title: FormField::text_input("Product title"),
            description: FormField::text_area("Product description"),
            brand_story: FormField::text_area("Brand story"),
            generated,
            editing: false,
            focus: ReviewField::Title,
            notice: None,
        };
        view.restore();
        view
    }

    fn restore(&mut self) {
        self.title.set_value(&self.generated.title);
        self.description.set_value(&self.generated.description);
        self.brand_story.set_value(&self.generated.brand_story);
    }

    /// The listing as currently edited; image and keywords stay as generated
    pub fn listing(&self) -> Listing {
        Listing {
            title: self.title.value(),
            description: self.description.value(),
            brand_story: self.brand_story.value(),
            ..self.generated.clone()
        }
    }

    pub fn enhanced_image(&self) -> &str {
        &self.generated.enhanced_image
    }

    pub fn toggle_editing(&mut self) {
        self.editing = !self.editing;
        self.notice = None;
        if self.editing {
            self.focus = ReviewField::Title;
        }
    }

    /// Throw away edits and show the generated content again
    pub fn regenerate(&mut self) {
        self.restore();
        self.editing = false;
        self.notice = Some(REGENERATE_NOTICE);
        tracing::info!("review content regenerated");
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        self.focus = cycle(ReviewField::all(), self.focus, forward);
    }

    pub fn focused_field(&mut self) -> &mut FormField {
        match self.focus {
            ReviewField::Title => &mut self.title,
            ReviewField::Description => &mut self.description,
            ReviewField::BrandStory => &mut self.brand_story,
        }
    }

    pub fn is_edited(&self) -> bool {
        self.listing() != self.generated
    }
}

impl StepView for ReviewView {
    fn is_ready(&self) -> bool {
        !self.editing
    }

    fn blocked_reason(&self) -> Option<&'static str> {
        self.editing.then_some("Save your changes before continuing")
    }
}

#[derive(Default)]
pub struct ExportView {
    pub format: ExportFormat,
    pub written: Option<PathBuf>,
    pub error: Option<String>,
}

impl ExportView {
    pub fn toggle_format(&mut self) {
        self.format = self.format.toggled();
    }
}

impl StepView for ExportView {
    fn is_ready(&self) -> bool {
        true
    }
}

/// One view per step, kept apart from the controller so both can be
/// borrowed at once
pub struct StepViews {
    pub upload: UploadView,
    pub processing: ProcessingView,
    pub results: ResultsView,
    /// Created when the results are first accepted
    pub review: Option<ReviewView>,
    pub export: ExportView,
}

impl StepViews {
    pub fn new(processing_duration: Duration) -> Self {
        Self {
            upload: UploadView::default(),
            processing: ProcessingView::new(processing_duration),
            results: ResultsView { generated: None },
            review: None,
            export: ExportView::default(),
        }
    }

    /// The view mounted for `step`
    pub fn active(&self, step: ListingStep) -> &dyn StepView {
        match step {
            ListingStep::Upload => &self.upload,
            ListingStep::Processing => &self.processing,
            ListingStep::Results => &self.results,
            ListingStep::Review => match self.review {
                Some(ref review) => review,
                None => &self.results,
            },
            ListingStep::Export => &self.export,
        }
    }
}
