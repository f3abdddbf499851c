//! Tests for path utilities

use serial_test::serial;
use soundtab_storage::paths::{create_safe_filename, ensure_dir_exists, StorageLayout};
use soundtab_storage::ROOT_ENV_VAR;

use tempfile::TempDir;

/// Helper to create a temporary directory
fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

#[test]
fn test_safe_filename_strips_illegal_chars() {
    assert_eq!(create_safe_filename("a/b*c 1-2_3"), "abc 1-2_3");
    assert_eq!(create_safe_filename("file<name>"), "filename");
    assert_eq!(create_safe_filename("what?.mp3"), "whatmp3");
    assert_eq!(create_safe_filename("<>:\"/\\|?*"), "");
}

#[test]
fn test_safe_filename_preserves_allowed_set() {
    assert_eq!(create_safe_filename("Air Horn-2_final"), "Air Horn-2_final");
    assert_eq!(create_safe_filename("UPPER lower 123"), "UPPER lower 123");
}

#[test]
fn test_safe_filename_trims_whitespace() {
    assert_eq!(create_safe_filename("  drums  "), "drums");
    assert_eq!(create_safe_filename("!! boom !!"), "boom");
    assert_eq!(create_safe_filename("\tbell\n"), "bell");
}

#[test]
fn test_safe_filename_empty() {
    assert_eq!(create_safe_filename(""), "");
    assert_eq!(create_safe_filename("   "), "");
}

#[test]
fn test_safe_filename_unicode_letters() {
    assert_eq!(create_safe_filename("café.wav"), "caféwav");
    assert_eq!(create_safe_filename("日本語"), "日本語");
    assert_eq!(create_safe_filename("🔔bell"), "bell");
}

#[test]
fn test_ensure_dir_creates_nested() {
    let temp_dir = temp_dir();
    let nested = temp_dir.path().join("a/b/c");

    let returned = ensure_dir_exists(&nested).expect("Failed to ensure dir");

    assert_eq!(returned, nested);
    assert!(nested.is_dir());
}

#[test]
fn test_ensure_dir_idempotent() {
    let temp_dir = temp_dir();
    let dir = temp_dir.path().join("existing");

    ensure_dir_exists(&dir).expect("Failed first create");
    ensure_dir_exists(&dir).expect("Failed second create");
    assert!(dir.is_dir());
}

#[test]
fn test_ensure_dir_on_file_fails() {
    let temp_dir = temp_dir();
    let file_path = temp_dir.path().join("a_file");
    std::fs::write(&file_path, "content").expect("Failed to write file");

    assert!(ensure_dir_exists(&file_path).is_err());
}

#[test]
fn test_layout_creates_dirs_on_demand() {
    let temp_dir = temp_dir();
    let layout = StorageLayout::new(temp_dir.path());

    let data = layout.data_dir().expect("data dir");
    let sounds = layout.sounds_dir().expect("sounds dir");

    assert_eq!(data, temp_dir.path().join("data"));
    assert_eq!(sounds, temp_dir.path().join("sounds"));
    assert!(data.is_dir());
    assert!(sounds.is_dir());
}

#[test]
fn test_tab_dir_without_name_is_sounds_dir() {
    let temp_dir = temp_dir();
    let layout = StorageLayout::new(temp_dir.path());

    let dir = layout.tab_dir(None).expect("tab dir");
    assert_eq!(dir, temp_dir.path().join("sounds"));
}

#[test]
fn test_tab_dir_with_name_creates_subdir() {
    let temp_dir = temp_dir();
    let layout = StorageLayout::new(temp_dir.path());

    let dir = layout.tab_dir(Some("Memes")).expect("tab dir");
    assert_eq!(dir, temp_dir.path().join("sounds").join("Memes"));
    assert!(dir.is_dir());
}

#[test]
fn test_document_paths_do_no_io() {
    let temp_dir = temp_dir();
    let layout = StorageLayout::new(temp_dir.path().join("fresh"));

    assert_eq!(
        layout.tab_favorites_path("Memes"),
        temp_dir.path().join("fresh/data/Memes_favorites.json")
    );
    assert_eq!(
        layout.app_settings_path(),
        temp_dir.path().join("fresh/data/settings.json")
    );
    assert!(!temp_dir.path().join("fresh").exists());
}

#[test]
#[serial]
fn test_discover_uses_env_override() {
    let temp_dir = temp_dir();
    std::env::set_var(ROOT_ENV_VAR, temp_dir.path());

    let layout = StorageLayout::discover().expect("discover");
    let data = soundtab_storage::data_dir().expect("data dir");
    let settings = soundtab_storage::app_settings_path().expect("settings path");

    std::env::remove_var(ROOT_ENV_VAR);

    assert_eq!(layout.root(), temp_dir.path());
    assert_eq!(data, temp_dir.path().join("data"));
    assert!(data.is_dir());
    assert_eq!(settings, temp_dir.path().join("data/settings.json"));
}

#[test]
#[serial]
fn test_discover_falls_back_to_home() {
    std::env::remove_var(ROOT_ENV_VAR);
    let Some(home) = dirs::home_dir() else {
        return;
    };

    let layout = StorageLayout::discover().expect("discover");
    assert_eq!(layout.root(), home.join(".soundtab"));
}

#[test]
#[serial]
fn test_discover_ignores_empty_env() {
    std::env::set_var(ROOT_ENV_VAR, "");
    let result = StorageLayout::discover();
    std::env::remove_var(ROOT_ENV_VAR);

    if let Some(home) = dirs::home_dir() {
        assert_eq!(result.expect("discover").root(), home.join(".soundtab"));
    }
}
