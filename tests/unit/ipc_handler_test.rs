//! Tests for the WebView IPC message handler.

use articleview::ipc_handler::{handle_ipc, state_json};
use articleview::managers::page_shell::PageShell;
use articleview::managers::settings_panel::SettingsPanelTrait;
use articleview::services::article_content::ArticleContent;

fn shell() -> PageShell {
    PageShell::new(ArticleContent::bundled())
}

#[test]
fn test_ui_ready_returns_update_script() {
    let mut s = shell();
    let script = handle_ipc(&mut s, r#"{"cmd":"ui_ready"}"#).unwrap().unwrap();
    assert!(script.contains("__av_apply"));
    assert!(script.contains("\"open\":false"));
}

#[test]
fn test_full_edit_and_submit_flow() {
    let mut s = shell();
    assert!(handle_ipc(&mut s, r#"{"cmd":"toggle"}"#).unwrap().is_some());
    handle_ipc(&mut s, r#"{"cmd":"change_field","field":"fontFamily","value":"Cormorant Garamond"}"#).unwrap();
    handle_ipc(&mut s, r#"{"cmd":"change_field","field":"content_width","value":"948px"}"#).unwrap();
    assert_eq!(s.committed().font_family.title, "Open Sans");

    let script = handle_ipc(&mut s, r#"{"cmd":"submit"}"#).unwrap().unwrap();
    assert!(script.contains("Cormorant Garamond"));
    assert!(script.contains("948px"));
    assert_eq!(s.committed().content_width.title, "Narrow");
    assert!(!s.panel().is_open());
}

#[test]
fn test_outside_pointer_down_dismisses() {
    let mut s = shell();
    handle_ipc(&mut s, r#"{"cmd":"toggle"}"#).unwrap();
    assert!(handle_ipc(&mut s, r#"{"cmd":"pointer_down","inside_panel":true}"#).unwrap().is_none());
    assert!(s.panel().is_open());

    assert!(handle_ipc(&mut s, r#"{"cmd":"pointer_down","inside_panel":false}"#).unwrap().is_some());
    assert!(!s.panel().is_open());
}

#[test]
fn test_second_toggle_needs_no_update() {
    let mut s = shell();
    handle_ipc(&mut s, r#"{"cmd":"toggle"}"#).unwrap();
    assert!(handle_ipc(&mut s, r#"{"cmd":"toggle"}"#).unwrap().is_none());
}

#[test]
fn test_get_state_script() {
    let mut s = shell();
    let script = handle_ipc(&mut s, r#"{"cmd":"get_state"}"#).unwrap().unwrap();
    assert!(script.starts_with("if(window.__av_onState)window.__av_onState("));
}

#[test]
fn test_errors_leave_state_untouched() {
    let mut s = shell();
    assert!(handle_ipc(&mut s, "not json").unwrap_err().contains("parse error"));
    assert_eq!(handle_ipc(&mut s, r#"{"field":"fontSize"}"#).unwrap_err(), "missing cmd");
    assert!(handle_ipc(&mut s, r#"{"cmd":"navigate"}"#).unwrap_err().contains("unknown command"));

    handle_ipc(&mut s, r#"{"cmd":"toggle"}"#).unwrap();
    let before = state_json(&s);
    assert!(handle_ipc(&mut s, r#"{"cmd":"change_field","field":"fontSize","value":"12px"}"#).is_err());
    assert_eq!(state_json(&s), before);
}

#[test]
fn test_state_json_shape() {
    let s = shell();
    let state = state_json(&s);
    assert_eq!(state["open"], false);
    assert_eq!(state["commits"], 0);
    assert_eq!(state["committed"]["fontSize"]["value"], "18px");
    assert_eq!(state["style"]["--bg-color"], "#FFFFFF");
}
