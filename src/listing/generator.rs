//! Listing content generation.
//!
//! Only a canned generator exists: every draft produces the same ceramic mug
//! package. The trait keeps screens independent of where content comes from.

use serde::{Deserialize, Serialize};

use super::draft::ProductDraft;

/// Editable listing content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    pub description: String,
    pub brand_story: String,
    pub enhanced_image: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingStats {
    pub quality_score_pct: u8,
    pub keywords_used: u32,
    pub engagement_score: f32,
}

/// Everything the results step shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedListing {
    pub listing: Listing,
    pub enhancement_notes: String,
    pub description_badges: Vec<String>,
    pub story_badges: Vec<String>,
    pub stats: ListingStats,
}

pub trait ListingGenerator {
    fn generate(&self, draft: &ProductDraft) -> GeneratedListing;
}

pub const MOCK_ENHANCED_IMAGE: &str =
    "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400&h=400&fit=crop";

const MOCK_TITLE: &str = "Handcrafted Ceramic Coffee Mug - Ocean Blue Glaze";

const MOCK_DESCRIPTION: &str = "\
This beautiful ceramic mug is handcrafted with love and attention to detail. The stunning ocean blue glaze creates a unique, one-of-a-kind piece that brings tranquility to your morning coffee ritual.

✨ Features:
• Premium stoneware construction for durability
• Microwave and dishwasher safe
• Comfortable ergonomic handle
• 12oz capacity - perfect for coffee or tea
• Food-safe, lead-free glaze

Each mug is individually hand-thrown on the potter's wheel, making every piece slightly unique. The ocean blue glaze reminds you of peaceful waves and clear skies with every sip.";

const MOCK_BRAND_STORY: &str = "\
In a small studio overlooking the coast, this mug was born from a moment of inspiration. The artisan, watching the morning waves crash against the shore, was captivated by the way the ocean's blue merged with the sky.

This ceramic piece carries that very essence - the calming blue of endless horizons and the warmth of a craftsperson's hands. Each curve was shaped with intention, each glaze stroke applied with care.

When you hold this mug, you're not just holding a vessel for your favorite beverage. You're holding a piece of coastal serenity, a moment of peace crafted just for you. It's the perfect companion for quiet mornings, creative afternoons, or cozy evenings by the fire.

This isn't just a mug - it's a daily reminder to pause, breathe, and appreciate the simple beauty in life.";

const MOCK_ENHANCEMENTS: &str =
    "Improved lighting, color saturation, and background optimization for marketplace appeal.";

/// Stage messages cycled through while processing runs
pub const PROCESSING_STAGES: &[&str] = &[
    "Enhancing image",
    "Writing description",
    "Crafting brand story",
    "Optimizing for marketplaces",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct MockGenerator;

impl ListingGenerator for MockGenerator {
    fn generate(&self, draft: &ProductDraft) -> GeneratedListing {
        tracing::info!(
            image = %draft.image_path,
            keywords = draft.keyword_list().len(),
            voice_note = draft.voice_note.is_present(),
            "generating mock listing"
        );

        GeneratedListing {
            listing: Listing {
                title: MOCK_TITLE.to_string(),
                description: MOCK_DESCRIPTION.to_string(),
                brand_story: MOCK_BRAND_STORY.to_string(),
                enhanced_image: MOCK_ENHANCED_IMAGE.to_string(),
                keywords: draft.keyword_list(),
            },
            enhancement_notes: MOCK_ENHANCEMENTS.to_string(),
            description_badges: vec!["SEO Optimized".to_string(), "Marketplace Ready".to_string()],
            story_badges: vec![
                "Emotional Connection".to_string(),
                "Brand Building".to_string(),
            ],
            stats: ListingStats {
                quality_score_pct: 98,
                keywords_used: 156,
                engagement_score: 8.9,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::VoiceNote;

    #[test]
    fn test_mock_content_is_fixed() {
        let a = MockGenerator.generate(&ProductDraft::default());
        let b = MockGenerator.generate(&ProductDraft {
            image_path: "bowl.png".to_string(),
            keywords: "wooden bowl".to_string(),
            voice_note: VoiceNote::Recorded,
        });
        assert_eq!(a.listing.title, b.listing.title);
        assert_eq!(a.listing.description, b.listing.description);
        assert_eq!(a.stats, b.stats);
    }

    #[test]
    fn test_keywords_recorded_on_listing() {
        let generated = MockGenerator.generate(&ProductDraft {
            image_path: "mug.jpg".to_string(),
            keywords: "blue glaze, gift idea".to_string(),
            voice_note: VoiceNote::None,
        });
        assert_eq!(generated.listing.keywords, vec!["blue glaze", "gift idea"]);
    }

    #[test]
    fn test_mock_stats() {
        let generated = MockGenerator.generate(&ProductDraft::default());
        assert_eq!(generated.stats.quality_score_pct, 98);
        assert_eq!(generated.stats.keywords_used, 156);
        assert!((generated.stats.engagement_score - 8.9).abs() < f32::EPSILON);
        assert_eq!(generated.description_badges.len(), 2);
    }
}
