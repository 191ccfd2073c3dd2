//! Type definitions for the add-product wizard screen

use std::path::PathBuf;

/// Outcome of a key handled by the wizard screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardResult {
    /// Stay on the wizard; state may have changed
    Continue,
    /// Backed out of the first step; return to the dashboard
    Exit,
    /// Listing written to disk
    Exported(PathBuf),
    /// Flow finished and reset to the first step
    Completed,
    /// Export failed; message is shown on the export step
    Failed(String),
}

/// Focusable elements of the upload step, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFocus {
    ImagePath,
    Keywords,
    VoiceNote,
}

impl UploadFocus {
    pub fn all() -> &'static [UploadFocus] {
        &[
            UploadFocus::ImagePath,
            UploadFocus::Keywords,
            UploadFocus::VoiceNote,
        ]
    }

    pub fn is_text(&self) -> bool {
        !matches!(self, UploadFocus::VoiceNote)
    }
}

/// Editable fields of the review step, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewField {
    Title,
    Description,
    BrandStory,
}

impl ReviewField {
    pub fn all() -> &'static [ReviewField] {
        &[
            ReviewField::Title,
            ReviewField::Description,
            ReviewField::BrandStory,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReviewField::Title => "Product Title",
            ReviewField::Description => "Product Description",
            ReviewField::BrandStory => "Brand Story",
        }
    }
}

/// Step through a fixed Tab order, wrapping at both ends
pub(crate) fn cycle<T: Copy + PartialEq>(order: &[T], current: T, forward: bool) -> T {
    let len = order.len();
    let idx = order.iter().position(|x| *x == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    order[next]
}

pub const REGENERATE_NOTICE: &str =
    "Regenerated content. A real assistant would run a new AI pass here.";

/// Shown beside the brand story on the review step
pub const EDITING_TIPS: [&str; 4] = [
    "Keep your product title under 60 characters for better SEO",
    "Include key features and benefits in your description",
    "Make your story personal and emotional to connect with buyers",
    "Use bullet points to highlight important features",
];
