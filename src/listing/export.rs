//! Writing a reviewed listing to disk

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use super::generator::Listing;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Text,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ExportFormat::Json => ExportFormat::Text,
            ExportFormat::Text => ExportFormat::Json,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => f.write_str("JSON"),
            ExportFormat::Text => f.write_str("Text"),
        }
    }
}

/// What gets written for a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingExport {
    pub id: String,
    pub generated_at: DateTime<Utc>,
    pub artisan: String,
    #[serde(flatten)]
    pub listing: Listing,
}

impl ListingExport {
    pub fn new(listing: Listing, artisan: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            artisan: artisan.to_string(),
            listing,
        }
    }

    /// `listing-{timestamp}-{first 8 of id}.{ext}`
    pub fn file_name(&self, format: ExportFormat) -> String {
        let short_id: String = self.id.chars().take(8).collect();
        format!(
            "listing-{}-{}.{}",
            self.generated_at.format("%Y%m%dT%H%M%SZ"),
            short_id,
            format.extension()
        )
    }

    pub fn render(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize listing")
            }
            ExportFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.listing.title);
        out.push('\n');
        out.push_str(&"=".repeat(self.listing.title.chars().count()));
        out.push_str("\n\n");

        out.push_str("DESCRIPTION\n-----------\n");
        out.push_str(&self.listing.description);
        out.push_str("\n\n");

        out.push_str("BRAND STORY\n-----------\n");
        out.push_str(&self.listing.brand_story);
        out.push_str("\n\n");

        if !self.listing.keywords.is_empty() {
            out.push_str("KEYWORDS\n--------\n");
            out.push_str(&self.listing.keywords.join(", "));
            out.push_str("\n\n");
        }

        out.push_str(&format!("Image: {}\n", self.listing.enhanced_image));
        out.push_str(&format!("Artisan: {}\n", self.artisan));
        out.push_str(&format!("Generated: {}\n", self.generated_at.to_rfc3339()));
        out
    }

    /// Write into `dir` (created if missing) and return the file path
    pub fn write_to_dir(&self, dir: &Path, format: ExportFormat) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create export directory {}", dir.display()))?;
        let path = dir.join(self.file_name(format));
        self.write_to(&path, format)?;
        Ok(path)
    }

    pub fn write_to(&self, path: &Path, format: ExportFormat) -> Result<()> {
        let contents = self.render(format)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write listing to {}", path.display()))?;
        tracing::info!(path = %path.display(), %format, "exported listing");
        Ok(())
    }
}
