// ABOUTME: Persistence tests for the selection store and the file-backed readiness it feeds the wizard

use std::fs;

use avatar_wizard::catalog::AvatarCatalog;
use avatar_wizard::flow::{ReadinessProvider, RecordingNavigator, StepFlowController, WizardStep};
use avatar_wizard::store::{SelectionStore, StoredReadiness};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn store_with_everything(dir: &TempDir) -> SelectionStore {
    let catalog = AvatarCatalog::builtin();
    let mut store = SelectionStore::load_from(dir.path().join("selections.json")).unwrap();
    store.select_church_avatar(catalog.find_church("church-steward").unwrap().clone());
    store.select_community_avatar(catalog.find_community("community-family").unwrap().clone());
    store.select_companion(catalog.find_companion("1").unwrap().clone());
    store
}

#[test]
fn test_selections_survive_reload() {
    let dir = TempDir::new().unwrap();
    store_with_everything(&dir).save().unwrap();

    let reloaded = SelectionStore::load_from(dir.path().join("selections.json")).unwrap();
    assert_eq!(
        reloaded.church_avatar().map(|a| a.display_name()),
        Some("The Faithful Steward")
    );
    assert_eq!(
        reloaded.community_avatar().map(|a| a.display_name()),
        Some("The Young Family")
    );
    assert_eq!(reloaded.companion().map(|c| c.companion.as_str()), Some("Sage"));
    assert!(reloaded.completed_tasks().church);
    assert!(reloaded.completed_tasks().community);
}

#[test]
fn test_saved_file_uses_stored_key_names() {
    let dir = TempDir::new().unwrap();
    store_with_everything(&dir).save().unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("selections.json")).unwrap())
            .unwrap();
    assert!(raw.get("selected_church_avatar").is_some());
    assert!(raw.get("selected_community_avatar").is_some());
    assert_eq!(raw["selected_companion"]["UUID"], 1);
    assert_eq!(raw["selected_companion"]["companion"], "Sage");
    assert_eq!(raw["completed_tasks"]["church"], true);
}

#[test]
fn test_legacy_companion_file_loads_as_selected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("selections.json");
    fs::write(
        &path,
        r#"{
            "selected_companion": { "id": 7, "name": "Old Friend", "traits": "loyal" }
        }"#,
    )
    .unwrap();

    let store = SelectionStore::load_from(&path).unwrap();
    let companion = store.companion().unwrap();
    assert_eq!(companion.uuid, 7);
    assert_eq!(companion.companion, "Old Friend");
    assert_eq!(companion.traits, "loyal");
    assert!(store.is_companion_selected());
    assert!(!store.is_church_avatar_selected());
}

#[test]
fn test_malformed_companion_is_not_selected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("selections.json");
    fs::write(&path, r#"{ "selected_companion": { "nickname": "???" } }"#).unwrap();

    let store = SelectionStore::load_from(&path).unwrap();
    assert!(store.companion().is_none());
}

#[test]
fn test_corrupt_file_is_an_error_but_reads_as_not_ready() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("selections.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(SelectionStore::load_from(&path).is_err());

    let readiness = StoredReadiness::new(&path);
    assert!(!readiness.is_church_avatar_selected());
    assert!(!readiness.is_community_avatar_selected());
    assert!(!readiness.is_companion_selected());
}

#[test]
fn test_stored_readiness_sees_changes_between_calls() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("selections.json");
    let mut controller =
        StepFlowController::new(StoredReadiness::new(&path), RecordingNavigator::new());
    controller.go_to_step(WizardStep::Church);
    assert!(!controller.go_to_next_step());

    let catalog = AvatarCatalog::builtin();
    let mut store = SelectionStore::load_from(&path).unwrap();
    store.select_church_avatar(catalog.find_church("church-builder").unwrap().clone());
    store.save().unwrap();

    assert!(controller.go_to_next_step());
    assert_eq!(controller.current_step(), WizardStep::Community);
}

#[test]
fn test_resume_from_complete_store_skips_to_complete() {
    let dir = TempDir::new().unwrap();
    store_with_everything(&dir).save().unwrap();

    let controller = StepFlowController::resume(
        StoredReadiness::new(dir.path().join("selections.json")),
        RecordingNavigator::new(),
    );
    assert_eq!(controller.current_step(), WizardStep::Complete);
    assert!(controller.is_complete());
    assert_eq!(controller.navigator().calls(), 0);
}

#[test]
fn test_clear_all_resets_tasks_on_disk() {
    let dir = TempDir::new().unwrap();
    let mut store = store_with_everything(&dir);
    store.clear_all();
    store.save().unwrap();

    let reloaded = SelectionStore::load_from(dir.path().join("selections.json")).unwrap();
    assert!(reloaded.church_avatar().is_none());
    assert!(reloaded.companion().is_none());
    assert!(!reloaded.completed_tasks().church);
    assert!(!reloaded.completed_tasks().community);
}
