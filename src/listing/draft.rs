//! Raw product input gathered on the upload step

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Simulated voice note state; nothing is actually captured
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoiceNote {
    #[default]
    None,
    Recording,
    Recorded,
}

impl VoiceNote {
    /// Record button toggle: start, stop, start over
    pub fn toggled(self) -> Self {
        match self {
            VoiceNote::None | VoiceNote::Recorded => VoiceNote::Recording,
            VoiceNote::Recording => VoiceNote::Recorded,
        }
    }

    pub fn is_present(self) -> bool {
        !matches!(self, VoiceNote::None)
    }

    pub fn label(self) -> &'static str {
        match self {
            VoiceNote::None => "Record Voice Note",
            VoiceNote::Recording => "Stop Recording",
            VoiceNote::Recorded => "Re-record Voice Note",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub image_path: String,
    pub keywords: String,
    pub voice_note: VoiceNote,
}

impl ProductDraft {
    pub fn has_image(&self) -> bool {
        !self.image_path.trim().is_empty()
    }

    pub fn has_description_input(&self) -> bool {
        !self.keywords.trim().is_empty() || self.voice_note.is_present()
    }

    /// An image plus either keywords or a voice note
    pub fn is_complete(&self) -> bool {
        self.has_image() && self.has_description_input()
    }

    /// Whether the entered image path points at an existing file
    pub fn image_exists(&self) -> bool {
        self.has_image() && PathBuf::from(self.image_path.trim()).is_file()
    }

    /// Comma separated keywords, trimmed, empties dropped
    pub fn keyword_list(&self) -> Vec<String> {
        self.keywords
            .split([',', '\n'])
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(image: &str, keywords: &str, voice: VoiceNote) -> ProductDraft {
        ProductDraft {
            image_path: image.to_string(),
            keywords: keywords.to_string(),
            voice_note: voice,
        }
    }

    #[test]
    fn test_requires_image() {
        assert!(!draft("", "mug", VoiceNote::None).is_complete());
        assert!(!draft("   ", "mug", VoiceNote::Recorded).is_complete());
    }

    #[test]
    fn test_requires_keywords_or_voice_note() {
        assert!(!draft("mug.jpg", "", VoiceNote::None).is_complete());
        assert!(!draft("mug.jpg", "  ", VoiceNote::None).is_complete());
        assert!(draft("mug.jpg", "blue glaze", VoiceNote::None).is_complete());
        assert!(draft("mug.jpg", "", VoiceNote::Recording).is_complete());
        assert!(draft("mug.jpg", "", VoiceNote::Recorded).is_complete());
    }

    #[test]
    fn test_voice_note_toggle_cycle() {
        let v = VoiceNote::None.toggled();
        assert_eq!(v, VoiceNote::Recording);
        let v = v.toggled();
        assert_eq!(v, VoiceNote::Recorded);
        assert_eq!(v.toggled(), VoiceNote::Recording);
    }

    #[test]
    fn test_keyword_list_splits_and_trims() {
        let d = draft(
            "x",
            "handmade ceramic mug, blue glaze,, kitchen decor\ngift idea",
            VoiceNote::None,
        );
        assert_eq!(
            d.keyword_list(),
            vec!["handmade ceramic mug", "blue glaze", "kitchen decor", "gift idea"]
        );
    }

    #[test]
    fn test_image_exists_for_missing_path() {
        assert!(!draft("/definitely/not/here.png", "", VoiceNote::None).image_exists());
    }
}
