//! ArticleView RPC Server: headless JSON-RPC over stdin/stdout.
//!
//! Drives the same page shell as the WebView, for scripting and automation.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"panel.change", "params":{"field":"fontSize","value":"25px"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

use clap::Parser;
use serde_json::{json, Value};

use articleview::app::App;
use articleview::rpc_handler::handle_method;

#[derive(Parser, Debug)]
#[command(name = "articleview-rpc", version, about = "Headless ArticleView driver over stdin/stdout")]
struct Cli {
    #[arg(long, env = "ARTICLEVIEW_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long)]
    article: Option<PathBuf>,

    /// Maximum requests per second
    #[arg(long, default_value_t = 200)]
    rate_limit: u32,
}

/// Simple rate limiter: max requests per one-second window.
struct RateLimiter {
    window_start: Instant,
    request_count: u32,
    max_per_second: u32,
}

impl RateLimiter {
    fn new(max_per_second: u32) -> Self {
        Self { window_start: Instant::now(), request_count: 0, max_per_second }
    }

    /// Returns true if the request is allowed, false if rate-limited.
    fn check(&mut self) -> bool {
        if self.window_start.elapsed().as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

fn respond(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn main() {
    let cli = Cli::parse();

    let app = match App::new(cli.config, cli.article) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("articleview-rpc: {}", e);
            std::process::exit(1);
        }
    };
    let shell = Mutex::new(app.shell);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if respond(&mut out, &json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")})).is_err() {
        return;
    }

    let mut rate_limiter = RateLimiter::new(cli.rate_limit);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Err(e) => json!({"id": null, "error": format!("parse error: {}", e)}),
            Ok(req) => {
                let id = req.get("id").cloned().unwrap_or(Value::Null);
                if !rate_limiter.check() {
                    tracing::warn!("rate limit exceeded");
                    json!({"id": id, "error": "rate limit exceeded"})
                } else {
                    let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
                    let params = req.get("params").cloned().unwrap_or(json!({}));
                    tracing::debug!(method, "rpc request");
                    match handle_method(&shell, method, &params) {
                        Ok(val) => json!({"id": id, "result": val}),
                        Err(err) => json!({"id": id, "error": err}),
                    }
                }
            }
        };

        if respond(&mut out, &response).is_err() {
            break;
        }
    }
}
