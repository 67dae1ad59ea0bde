//! Start-up tests for the App core: config and article resolution.

use std::fs;

use tempfile::TempDir;

use articleview::app::App;
use articleview::managers::settings_panel::SettingsPanelTrait;
use articleview::types::config::AppConfig;
use articleview::types::event::UiEvent;

#[test]
fn test_defaults_with_bundled_article() {
    let dir = TempDir::new().unwrap();
    let app = App::new(Some(dir.path().join("config.json")), None).unwrap();
    assert_eq!(*app.config(), AppConfig::default());
    assert_eq!(app.shell.article().title, "A Portrait of Western Switzerland");
}

#[test]
fn test_article_from_config() {
    let dir = TempDir::new().unwrap();
    let article = dir.path().join("article.txt");
    fs::write(&article, "Configured\n\nBody text.").unwrap();
    let config = format!(
        r#"{{"window":{{"title":"t","width":800,"height":600}},"content":{{"article_path":{}}}}}"#,
        serde_json::to_string(&article.to_string_lossy()).unwrap()
    );
    fs::write(dir.path().join("config.json"), config).unwrap();

    let app = App::new(Some(dir.path().join("config.json")), None).unwrap();
    assert_eq!(app.shell.article().title, "Configured");
}

#[test]
fn test_article_override_wins() {
    let dir = TempDir::new().unwrap();
    let article = dir.path().join("override.txt");
    fs::write(&article, "Override\nWith subtitle\n\nBody.").unwrap();

    let app = App::new(Some(dir.path().join("config.json")), Some(article)).unwrap();
    assert_eq!(app.shell.article().title, "Override");
    assert_eq!(app.shell.article().subtitle.as_deref(), Some("With subtitle"));
}

#[test]
fn test_startup_errors() {
    let dir = TempDir::new().unwrap();
    let missing = App::new(Some(dir.path().join("config.json")), Some(dir.path().join("missing.txt")));
    assert!(missing.is_err());

    fs::write(dir.path().join("bad.json"), "[").unwrap();
    assert!(App::new(Some(dir.path().join("bad.json")), None).is_err());
}

#[test]
fn test_shutdown_closes_panel_without_commit() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(Some(dir.path().join("config.json")), None).unwrap();
    app.shell.dispatch(UiEvent::Toggle).unwrap();
    app.shutdown();
    assert!(!app.shell.panel().is_open());
    assert_eq!(app.shell.commit_count(), 0);
}
