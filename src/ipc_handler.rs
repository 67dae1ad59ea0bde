//! IPC message handler for the ArticleView page.
//!
//! The page script posts one JSON object per user event,
//! `{"cmd": "...", ...}`. Each message is applied to the [`PageShell`] and
//! answered with a script to evaluate in the WebView, or nothing when the
//! page is already up to date.

use serde_json::{json, Value};

use crate::managers::page_shell::PageShell;
use crate::types::article::ArticleField;
use crate::types::event::{UiEvent, WindowEvent};

/// Builds a [`UiEvent`] from a command name and its parameters.
pub fn parse_event(cmd: &str, params: &Value) -> Result<UiEvent, String> {
    match cmd {
        "toggle" => Ok(UiEvent::Toggle),
        "submit" => Ok(UiEvent::Submit),
        "reset" => Ok(UiEvent::Reset),
        "change_field" => {
            let field: ArticleField = params
                .get("field")
                .and_then(|v| v.as_str())
                .ok_or("missing field")?
                .parse()
                .map_err(|e: crate::types::errors::PanelError| e.to_string())?;
            let value = params.get("value").and_then(|v| v.as_str()).ok_or("missing value")?;
            Ok(UiEvent::ChangeField { field, value: value.to_string() })
        }
        "pointer_down" => {
            let inside_panel = params
                .get("inside_panel")
                .and_then(|v| v.as_bool())
                .ok_or("missing inside_panel")?;
            Ok(UiEvent::Window(WindowEvent::PointerDown { inside_panel }))
        }
        "key_down" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            Ok(UiEvent::Window(WindowEvent::KeyDown { key: key.to_string() }))
        }
        other => Err(format!("unknown command: {}", other)),
    }
}

/// Snapshot of the page state as JSON.
pub fn state_json(shell: &PageShell) -> Value {
    use crate::managers::settings_panel::SettingsPanelTrait;
    let style: serde_json::Map<String, Value> = shell
        .style_variables()
        .into_iter()
        .map(|(k, v)| (k.to_string(), json!(v)))
        .collect();
    json!({
        "committed": shell.committed(),
        "draft": shell.panel().draft(),
        "open": shell.panel().is_open(),
        "style": style,
        "commits": shell.commit_count(),
    })
}

/// Applies one IPC message. `Ok(Some(script))` must be evaluated in the WebView.
pub fn handle_ipc(shell: &mut PageShell, message: &str) -> Result<Option<String>, String> {
    let msg: Value = serde_json::from_str(message).map_err(|e| format!("parse error: {}", e))?;
    let cmd = msg.get("cmd").and_then(|v| v.as_str()).ok_or("missing cmd")?;

    match cmd {
        "ui_ready" => Ok(Some(shell.render_update().to_script())),
        "get_state" => Ok(Some(format!(
            "if(window.__av_onState)window.__av_onState({})",
            state_json(shell)
        ))),
        _ => {
            let event = parse_event(cmd, &msg)?;
            let changed = shell.dispatch(event).map_err(|e| e.to_string())?;
            if changed {
                Ok(Some(shell.render_update().to_script()))
            } else {
                Ok(None)
            }
        }
    }
}
