//! Integration-level tests for the SettingsPanel public API.
//!
//! The panel is driven directly with closure commit targets, so every commit
//! it emits can be counted and inspected.

use rstest::rstest;

use articleview::managers::listener_registry::{ListenerRegistry, ListenerRegistryTrait, SharedRegistry};
use articleview::managers::settings_panel::{SettingsPanel, SettingsPanelTrait};
use articleview::types::article::{ArticleField, ArticleState};
use articleview::types::errors::PanelError;
use articleview::types::event::WindowEvent;

fn open_panel() -> (SettingsPanel, SharedRegistry) {
    let registry = ListenerRegistry::shared();
    let mut panel = SettingsPanel::new(ArticleState::default(), registry.clone());
    panel.activate_toggle();
    (panel, registry)
}

fn listeners(registry: &SharedRegistry) -> usize {
    registry.lock().unwrap().listener_count()
}

#[test]
fn test_submit_commits_full_snapshot_once() {
    let (mut panel, registry) = open_panel();
    panel.change_field(ArticleField::FontFamily, "Open Sans").unwrap();
    panel.change_field(ArticleField::ContentWidth, "Narrow").unwrap();

    let mut commits = Vec::new();
    assert!(panel.submit(&mut |s: ArticleState| commits.push(s)));

    assert_eq!(commits.len(), 1);
    let committed = commits[0];
    assert_eq!(committed.font_family.title, "Open Sans");
    assert_eq!(committed.content_width.title, "Narrow");
    assert_eq!(committed.font_size, ArticleState::default().font_size);
    assert_eq!(committed.font_color, ArticleState::default().font_color);
    assert_eq!(committed.background_color, ArticleState::default().background_color);
    assert!(!panel.is_open());
    assert_eq!(listeners(&registry), 0);
}

#[test]
fn test_reset_is_idempotent() {
    let mut commits = Vec::new();
    let (mut panel, _registry) = open_panel();
    panel.change_field(ArticleField::FontSize, "38px").unwrap();
    panel.change_field(ArticleField::FontColor, "#FD24AF").unwrap();
    panel.reset(&mut |s: ArticleState| commits.push(s));

    panel.activate_toggle();
    panel.reset(&mut |s: ArticleState| commits.push(s));

    assert_eq!(commits, vec![ArticleState::default(), ArticleState::default()]);
    assert_eq!(*panel.draft(), ArticleState::default());
}

#[test]
fn test_draft_isolation_until_submit() {
    let (mut panel, _registry) = open_panel();
    let mut commits = 0;
    panel.change_field(ArticleField::BackgroundColor, "#000000").unwrap();
    panel.change_field(ArticleField::FontColor, "#FFFFFF").unwrap();
    panel.change_field(ArticleField::FontSize, "25px").unwrap();
    assert_eq!(commits, 0);

    panel.submit(&mut |_s: ArticleState| commits += 1);
    assert_eq!(commits, 1);
}

#[test]
fn test_reseed_on_external_change_while_closed() {
    let registry = ListenerRegistry::shared();
    let mut panel = SettingsPanel::new(ArticleState::default(), registry);
    let external = ArticleState::from_values([("fontSize", "25px"), ("backgroundColor", "#FFC802")]).unwrap();

    panel.sync_committed(&external);
    panel.activate_toggle();

    assert_eq!(*panel.draft(), external);
}

#[test]
fn test_reopen_discards_abandoned_draft() {
    let (mut panel, _registry) = open_panel();
    panel.change_field(ArticleField::FontFamily, "Days One").unwrap();
    assert!(panel.dismiss());

    panel.activate_toggle();
    assert_eq!(*panel.draft(), ArticleState::default());
}

#[rstest]
#[case::outside_click(WindowEvent::PointerDown { inside_panel: false })]
#[case::escape(WindowEvent::KeyDown { key: "Escape".to_string() })]
fn test_dismissal_closes_without_commit(#[case] event: WindowEvent) {
    let (mut panel, registry) = open_panel();
    panel.change_field(ArticleField::FontFamily, "Ubuntu").unwrap();

    assert!(panel.handle_window_event(&event));
    assert!(!panel.is_open());
    assert_eq!(listeners(&registry), 0);

    // Same event again: nothing is listening, nothing changes.
    assert!(!panel.handle_window_event(&event));
    assert!(!panel.is_open());
}

#[rstest]
#[case::inside_click(WindowEvent::PointerDown { inside_panel: true })]
#[case::other_key(WindowEvent::KeyDown { key: "Enter".to_string() })]
#[case::lowercase_escape(WindowEvent::KeyDown { key: "escape".to_string() })]
fn test_non_dismissing_events_keep_panel_open(#[case] event: WindowEvent) {
    let (mut panel, registry) = open_panel();
    assert!(!panel.handle_window_event(&event));
    assert!(panel.is_open());
    assert_eq!(listeners(&registry), 2);
}

#[test]
fn test_listeners_released_on_every_close_path() {
    let (mut panel, registry) = open_panel();
    panel.submit(&mut |_s: ArticleState| {});
    assert_eq!(listeners(&registry), 0);

    panel.activate_toggle();
    panel.reset(&mut |_s: ArticleState| {});
    assert_eq!(listeners(&registry), 0);

    panel.activate_toggle();
    panel.dismiss();
    assert_eq!(listeners(&registry), 0);

    panel.activate_toggle();
    drop(panel);
    assert_eq!(listeners(&registry), 0);
}

#[test]
fn test_closed_panel_rejects_actions() {
    let registry = ListenerRegistry::shared();
    let mut panel = SettingsPanel::new(ArticleState::default(), registry);
    let mut commits = 0;

    assert_eq!(panel.change_field(ArticleField::FontSize, "25px"), Err(PanelError::NotOpen));
    assert!(!panel.submit(&mut |_s: ArticleState| commits += 1));
    assert!(!panel.reset(&mut |_s: ArticleState| commits += 1));
    assert!(!panel.dismiss());
    assert_eq!(commits, 0);
}

#[test]
fn test_invalid_change_leaves_draft_untouched() {
    let (mut panel, _registry) = open_panel();
    panel.change_field(ArticleField::FontSize, "25px").unwrap();
    let before = *panel.draft();

    let err = panel.change_field(ArticleField::FontSize, "26px").unwrap_err();
    assert_eq!(
        err,
        PanelError::UnknownOption { field: "fontSize".to_string(), value: "26px".to_string() }
    );
    assert_eq!(*panel.draft(), before);
}
