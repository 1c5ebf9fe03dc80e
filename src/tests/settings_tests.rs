use super::*;
use crate::i18n::Language;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load(dir.path());
    assert_eq!(settings.api_url, "http://192.168.178.59/api/click");
    assert_eq!(settings.language, "en");
    assert_eq!(settings.language(), Language::En);
}

#[test]
fn save_persists_both_fields_and_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        api_url: "http://x/api".to_string(),
        language: "de".to_string(),
    };
    settings.save(dir.path()).unwrap();

    let reloaded = Settings::load(dir.path());
    assert_eq!(reloaded.api_url, "http://x/api");
    assert_eq!(reloaded.language, "de");
    assert_eq!(reloaded.language(), Language::De);
}

#[test]
fn saved_language_localizes_the_default_display() {
    let dir = tempfile::tempdir().unwrap();
    Settings {
        api_url: "http://x/api".to_string(),
        language: "de".to_string(),
    }
    .save(dir.path())
    .unwrap();

    let reloaded = Settings::load(dir.path());
    let state = crate::state::AppState::new(crate::i18n::messages(reloaded.language()));
    assert_eq!(state.snapshot().display.title, "Tür Bob");
}

#[test]
fn absent_fields_fall_back_to_their_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(Settings::file_path(dir.path()), r#"{"language":"fr"}"#).unwrap();

    let settings = Settings::load(dir.path());
    assert_eq!(settings.api_url, "http://192.168.178.59/api/click");
    assert_eq!(settings.language(), Language::Fr);
}

#[test]
fn corrupt_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(Settings::file_path(dir.path()), "not json").unwrap();

    let settings = Settings::load(dir.path());
    assert_eq!(settings.language(), Language::En);
}

#[test]
fn save_writes_a_single_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    Settings::default().save(dir.path()).unwrap();

    let path = Settings::file_path(dir.path());
    assert!(path.exists());
    let contents = std::fs::read_to_string(path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert!(json.get("api_url").is_some());
    assert!(json.get("language").is_some());
}
