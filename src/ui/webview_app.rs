//! WebView application using `wry` + `tao`.
//!
//! - The page is served from the `av://` custom protocol, rendered from the
//!   current [`PageShell`](crate::managers::page_shell::PageShell) state.
//! - IPC from JS → Rust via `window.ipc.postMessage()`, handled by
//!   [`crate::ipc_handler::handle_ipc`].
//! - Replies travel back through the event loop as `UserEvent::EvalScript`.

use std::borrow::Cow;
use std::sync::{Arc, Mutex};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::App;
use crate::ipc_handler::handle_ipc;
use crate::types::errors::UiError;

const PAGE_URL: &str = "av://localhost/";

#[derive(Debug)]
enum UserEvent {
    EvalScript(String),
}

fn html_response(html: String) -> wry::http::Response<Cow<'static, [u8]>> {
    wry::http::Response::builder()
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Cow::Owned(html.into_bytes()))
        .unwrap_or_else(|_| wry::http::Response::new(Cow::Borrowed(&[][..])))
}

// ─── Main entry point ───

/// Opens the article window and runs the event loop until it is closed.
pub fn run(app: App) -> Result<(), UiError> {
    let window_config = app.config().window.clone();
    let state = Arc::new(Mutex::new(app));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(&window_config.title)
        .with_inner_size(tao::dpi::LogicalSize::new(
            f64::from(window_config.width),
            f64::from(window_config.height),
        ))
        .build(&event_loop)
        .map_err(|e| UiError::Window(e.to_string()))?;

    let page_state = state.clone();
    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("av".into(), move |_wv_id, request| {
            tracing::debug!(path = request.uri().path(), "serving page");
            let html = match page_state.lock() {
                Ok(s) => s.shell.render(),
                Err(poisoned) => poisoned.into_inner().shell.render(),
            };
            html_response(html)
        })
        .with_url(PAGE_URL)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            tracing::trace!(message = %body.chars().take(200).collect::<String>(), "ipc");
            let Ok(mut s) = ipc_state.lock() else {
                tracing::error!("page state lock poisoned, dropping ipc message");
                return;
            };
            match handle_ipc(&mut s.shell, body) {
                Ok(Some(script)) => {
                    let _ = ipc_proxy.send_event(UserEvent::EvalScript(script));
                }
                Ok(None) => {}
                Err(e) => tracing::warn!(error = %e, "ipc message rejected"),
            }
        })
        .with_devtools(window_config.devtools || cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window
            .default_vbox()
            .ok_or_else(|| UiError::Window("Failed to get GTK vbox".to_string()))?;
        builder
            .build_gtk(vbox)
            .map_err(|e| UiError::WebView(e.to_string()))?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder
        .build(&window)
        .map_err(|e| UiError::WebView(e.to_string()))?;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                if let Ok(mut s) = state.lock() {
                    s.shutdown();
                }
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::EvalScript(js)) => {
                if let Err(e) = webview.evaluate_script(&js) {
                    tracing::warn!(error = %e, "script evaluation failed");
                }
            }

            _ => {}
        }
    })
}
