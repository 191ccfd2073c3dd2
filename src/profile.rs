//! Artisan profile read from the stored user record.
//!
//! The record is optional and purely cosmetic: a missing or unreadable file
//! yields an empty profile and the UI falls back to placeholders.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::ProfileConfig;

const PLACEHOLDER_NAME: &str = "Artisan";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtisanProfile {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl ArtisanProfile {
    /// Best-effort read of a JSON user record
    pub fn load(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no stored user record");
                return Self::default();
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read user record");
                return Self::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed user record");
                Self::default()
            }
        }
    }

    /// Load the stored record and apply config overrides on top
    pub fn resolve(path: &Path, overrides: &ProfileConfig) -> Self {
        let mut profile = Self::load(path);
        if let Some(ref name) = overrides.display_name {
            profile.full_name = Some(name.clone());
        }
        if profile.specialty.is_none() {
            profile.specialty = Some(overrides.specialty.clone());
        }
        profile
    }

    fn name(&self) -> Option<&str> {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    pub fn display_name(&self) -> &str {
        self.name().unwrap_or(PLACEHOLDER_NAME)
    }

    pub fn has_name(&self) -> bool {
        self.name().is_some()
    }

    /// First letter of each word, upper-cased; empty when no name is stored
    pub fn initials(&self) -> String {
        self.name()
            .map(|n| {
                n.split_whitespace()
                    .filter_map(|word| word.chars().next())
                    .flat_map(char::to_uppercase)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn specialty(&self) -> &str {
        self.specialty.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn named(name: &str) -> ArtisanProfile {
        ArtisanProfile {
            full_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_initials_from_full_name() {
        assert_eq!(named("maya patel").initials(), "MP");
        assert_eq!(named("Jean  Luc   Picard").initials(), "JLP");
        assert_eq!(named("Cher").initials(), "C");
    }

    #[test]
    fn test_missing_name_uses_placeholder() {
        let profile = ArtisanProfile::default();
        assert_eq!(profile.display_name(), "Artisan");
        assert_eq!(profile.initials(), "");
        assert!(!profile.has_name());

        let blank = named("   ");
        assert_eq!(blank.display_name(), "Artisan");
        assert_eq!(blank.initials(), "");
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let profile = ArtisanProfile::load(&temp_dir.path().join("user.json"));
        assert_eq!(profile, ArtisanProfile::default());
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("user.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(ArtisanProfile::load(&path), ArtisanProfile::default());
    }

    #[test]
    fn test_load_ignores_unknown_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("user.json");
        std::fs::write(
            &path,
            r#"{"full_name": "Maya Patel", "email": "maya@example.com", "token": "x"}"#,
        )
        .unwrap();

        let profile = ArtisanProfile::load(&path);
        assert_eq!(profile.display_name(), "Maya Patel");
        assert_eq!(profile.email.as_deref(), Some("maya@example.com"));
    }

    #[test]
    fn test_resolve_applies_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("user.json");
        std::fs::write(&path, r#"{"full_name": "Maya Patel"}"#).unwrap();

        let overrides = ProfileConfig {
            display_name: Some("Ravi Kumar".to_string()),
            specialty: "Woodworker".to_string(),
        };
        let profile = ArtisanProfile::resolve(&path, &overrides);
        assert_eq!(profile.display_name(), "Ravi Kumar");
        assert_eq!(profile.initials(), "RK");
        assert_eq!(profile.specialty(), "Woodworker");
    }
}
