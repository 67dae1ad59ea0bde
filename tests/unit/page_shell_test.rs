//! Tests for the PageShell: committed state, event routing and rendering.

use articleview::managers::listener_registry::ListenerRegistryTrait;
use articleview::managers::page_shell::PageShell;
use articleview::managers::settings_panel::SettingsPanelTrait;
use articleview::services::article_content::ArticleContent;
use articleview::types::article::{ArticleField, ArticleState};
use articleview::types::errors::PanelError;
use articleview::types::event::{UiEvent, WindowEvent};

fn shell() -> PageShell {
    PageShell::new(ArticleContent::bundled())
}

fn change(field: ArticleField, value: &str) -> UiEvent {
    UiEvent::ChangeField { field, value: value.to_string() }
}

fn escape() -> UiEvent {
    UiEvent::Window(WindowEvent::KeyDown { key: "Escape".to_string() })
}

#[test]
fn test_starts_with_defaults_and_closed_panel() {
    let s = shell();
    assert_eq!(*s.committed(), ArticleState::default());
    assert!(!s.panel().is_open());
    assert_eq!(s.commit_count(), 0);
    assert_eq!(s.registry().lock().unwrap().listener_count(), 0);
}

#[test]
fn test_submit_updates_committed_and_style() {
    let mut s = shell();
    s.dispatch(UiEvent::Toggle).unwrap();
    s.dispatch(change(ArticleField::FontSize, "38px")).unwrap();
    s.dispatch(change(ArticleField::ContentWidth, "Narrow")).unwrap();
    assert_eq!(*s.committed(), ArticleState::default());

    assert!(s.dispatch(UiEvent::Submit).unwrap());

    assert_eq!(s.committed().font_size.value, "38px");
    assert_eq!(s.commit_count(), 1);
    let vars = s.style_variables();
    assert!(vars.contains(&("--font-size", "38px")));
    assert!(vars.contains(&("--container-width", "948px")));
    assert!(!s.panel().is_open());
}

#[test]
fn test_style_variables_cover_all_fields() {
    let s = shell();
    let names: Vec<&str> = s.style_variables().iter().map(|(k, _)| *k).collect();
    assert_eq!(
        names,
        vec!["--font-family", "--font-size", "--font-color", "--container-width", "--bg-color"]
    );
}

#[test]
fn test_escape_dismisses_without_commit() {
    let mut s = shell();
    s.dispatch(UiEvent::Toggle).unwrap();
    s.dispatch(change(ArticleField::BackgroundColor, "#6FC1FD")).unwrap();

    assert!(s.dispatch(escape()).unwrap());
    assert!(!s.panel().is_open());
    assert_eq!(*s.committed(), ArticleState::default());
    assert_eq!(s.commit_count(), 0);

    // No listeners remain, so a second Escape is not even routed.
    assert!(!s.dispatch(escape()).unwrap());
}

#[test]
fn test_reset_commits_defaults() {
    let mut s = shell();
    s.dispatch(UiEvent::Toggle).unwrap();
    s.dispatch(change(ArticleField::FontFamily, "Ubuntu")).unwrap();
    s.dispatch(UiEvent::Submit).unwrap();
    assert_eq!(s.committed().font_family.title, "Ubuntu");

    s.dispatch(UiEvent::Toggle).unwrap();
    s.dispatch(UiEvent::Reset).unwrap();
    assert_eq!(*s.committed(), ArticleState::default());
    assert_eq!(s.commit_count(), 2);
}

#[test]
fn test_reopen_seeds_draft_from_committed() {
    let mut s = shell();
    s.dispatch(UiEvent::Toggle).unwrap();
    s.dispatch(change(ArticleField::FontColor, "Purple")).unwrap();
    s.dispatch(UiEvent::Submit).unwrap();

    s.dispatch(UiEvent::Toggle).unwrap();
    assert_eq!(*s.panel().draft(), *s.committed());
}

#[test]
fn test_change_on_closed_panel_is_error() {
    let mut s = shell();
    assert_eq!(s.dispatch(change(ArticleField::FontSize, "25px")), Err(PanelError::NotOpen));
}

#[test]
fn test_dismiss_panel() {
    let mut s = shell();
    assert!(!s.dismiss_panel());
    s.dispatch(UiEvent::Toggle).unwrap();
    assert!(s.dismiss_panel());
    assert_eq!(s.registry().lock().unwrap().listener_count(), 0);
}

#[test]
fn test_render_contains_article_and_style() {
    let s = shell();
    let html = s.render();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(&s.article().title));
    assert!(html.contains("--font-family:Open Sans"));
    assert!(!html.contains("id=\"settings-panel\""));
}

#[test]
fn test_render_update_tracks_panel() {
    let mut s = shell();
    assert!(!s.render_update().open);
    s.dispatch(UiEvent::Toggle).unwrap();
    let update = s.render_update();
    assert!(update.open);
    assert!(update.panel_html.contains("id=\"settings-panel\""));
    assert_eq!(update.style.len(), 5);
}
