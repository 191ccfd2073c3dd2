//! End-to-end add-product flow through the public API

use std::time::Duration;

use artisan_assistant::config::ProfileConfig;
use artisan_assistant::listing::{
    page_slice, sample_products, total_pages, Category, CategoryFilter, ListingStep,
    MockGenerator, ProductFilter,
};
use artisan_assistant::profile::ArtisanProfile;
use artisan_assistant::ui::{ListingWizardScreen, WizardResult};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;

fn press(screen: &mut ListingWizardScreen, code: KeyCode) -> WizardResult {
    screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(screen: &mut ListingWizardScreen, text: &str) {
    for c in text.chars() {
        press(screen, KeyCode::Char(c));
    }
}

#[test]
fn test_full_flow_exports_edited_listing() {
    let temp_dir = TempDir::new().unwrap();
    let exports = temp_dir.path().join("exports");
    let mut screen = ListingWizardScreen::new(
        Box::new(MockGenerator),
        exports.clone(),
        "Maya Patel",
        Duration::from_millis(500),
    );

    // Upload
    type_text(&mut screen, "photos/mug.jpg");
    press(&mut screen, KeyCode::Tab);
    type_text(&mut screen, "handmade, ocean blue");
    press(&mut screen, KeyCode::Enter);
    assert_eq!(screen.current_step(), ListingStep::Processing);

    // Processing finishes after enough ticks
    for _ in 0..4 {
        screen.tick(Duration::from_millis(100));
        assert_eq!(screen.current_step(), ListingStep::Processing);
    }
    let transition = screen.tick(Duration::from_millis(100)).unwrap();
    assert_eq!(transition.to, 2);
    assert_eq!(screen.current_step(), ListingStep::Results);

    // Results -> Review, edit the title
    press(&mut screen, KeyCode::Enter);
    press(&mut screen, KeyCode::Char('e'));
    type_text(&mut screen, " - Limited");
    press(&mut screen, KeyCode::Esc);
    press(&mut screen, KeyCode::Enter);
    assert_eq!(screen.current_step(), ListingStep::Export);

    let WizardResult::Exported(path) = press(&mut screen, KeyCode::Enter) else {
        panic!("export did not succeed");
    };
    assert!(path.starts_with(&exports));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(json["title"].as_str().unwrap().ends_with(" - Limited"));
    assert_eq!(json["artisan"], "Maya Patel");
    assert_eq!(json["keywords"], serde_json::json!(["handmade", "ocean blue"]));
    assert!(json["id"].as_str().is_some());
    assert!(json["generated_at"].as_str().is_some());

    // Complete starts a fresh session on the first step
    assert_eq!(press(&mut screen, KeyCode::Char('c')), WizardResult::Completed);
    assert_eq!(screen.current_step(), ListingStep::Upload);
    assert!(screen.generated().is_none());
}

#[test]
fn test_catalog_search_and_paging() {
    let catalog = sample_products();
    assert_eq!(catalog.len(), 8);
    assert_eq!(total_pages(catalog.len(), 6), 2);
    assert_eq!(page_slice(&catalog, 2, 6).len(), 2);
    assert!(page_slice(&catalog, 3, 6).is_empty());

    let filter = ProductFilter {
        search: "bowl".to_string(),
        category: CategoryFilter::Only(Category::Pottery),
    };
    let titles: Vec<&str> = filter
        .apply(&catalog)
        .into_iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Handcrafted Ceramic Bowl"]);
}

#[test]
fn test_profile_from_stored_record() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("user.json");
    std::fs::write(&path, r#"{"full_name": "maya patel", "email": "maya@example.com"}"#).unwrap();

    let profile = ArtisanProfile::resolve(&path, &ProfileConfig::default());
    assert_eq!(profile.display_name(), "maya patel");
    assert_eq!(profile.initials(), "MP");
    assert_eq!(profile.specialty(), "Pottery Artist");

    let missing =
        ArtisanProfile::resolve(&temp_dir.path().join("none.json"), &ProfileConfig::default());
    assert_eq!(missing.display_name(), "Artisan");
    assert_eq!(missing.initials(), "");
}
