//! Product listing domain: the add-product flow and the dashboard data it
//! sits next to.

mod activity;
mod catalog;
mod draft;
mod export;
mod flow;
mod generator;

pub use activity::{
    greeting, greeting_for_hour, quick_stats, recent_activity, ActivityItem, ActivityKind,
    QuickStat, Tip, TipCarousel, TIPS,
};
pub use catalog::{
    page_slice, sample_products, total_pages, Category, CategoryFilter, Product, ProductFilter,
    ProductStatus,
};
pub use draft::{ProductDraft, VoiceNote};
pub use export::{ExportFormat, ListingExport};
pub use flow::{listing_registry, listing_wizard, ListingStep};
pub use generator::{
    GeneratedListing, Listing, ListingGenerator, ListingStats, MockGenerator, MOCK_ENHANCED_IMAGE,
    PROCESSING_STAGES,
};
