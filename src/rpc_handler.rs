//! RPC method handler for the headless ArticleView driver.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` drives the same [`PageShell`] the WebView uses, one
//! method call at a time.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::ipc_handler::{parse_event, state_json};
use crate::managers::page_shell::PageShell;
use crate::types::article::ArticleField;
use crate::types::event::UiEvent;

/// Dispatch a JSON-RPC method call to the page shell.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(shell: &Mutex<PageShell>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Panel ───
        "panel.toggle" => dispatch(shell, UiEvent::Toggle),
        "panel.change" => dispatch(shell, parse_event("change_field", params)?),
        "panel.submit" => dispatch(shell, UiEvent::Submit),
        "panel.reset" => dispatch(shell, UiEvent::Reset),
        "panel.dismiss" => {
            let mut s = shell.lock().map_err(|e| e.to_string())?;
            let changed = s.dismiss_panel();
            Ok(json!({"changed": changed, "state": state_json(&s)}))
        }

        // ─── Window events ───
        "window.pointer_down" => dispatch(shell, parse_event("pointer_down", params)?),
        "window.key_down" => dispatch(shell, parse_event("key_down", params)?),

        // ─── State ───
        "state.get" => {
            let s = shell.lock().map_err(|e| e.to_string())?;
            Ok(state_json(&s))
        }
        "state.style" => {
            let s = shell.lock().map_err(|e| e.to_string())?;
            Ok(json!({"style": s.committed().inline_style()}))
        }
        "options.list" => {
            let fields: Vec<Value> = ArticleField::ALL
                .iter()
                .map(|f| json!({"field": f.key(), "label": f.label(), "options": f.options()}))
                .collect();
            Ok(json!(fields))
        }
        "page.render" => {
            let s = shell.lock().map_err(|e| e.to_string())?;
            Ok(json!({"html": s.render()}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}

fn dispatch(shell: &Mutex<PageShell>, event: UiEvent) -> Result<Value, String> {
    let mut s = shell.lock().map_err(|e| e.to_string())?;
    let changed = s.dispatch(event).map_err(|e| e.to_string())?;
    Ok(json!({"changed": changed, "state": state_json(&s)}))
}
