//! Tab history RPC server — JSON-RPC over stdin/stdout for the browser shell.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"history.add-entry", "params":{"tabId":"t1","url":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Instant;

use log::{error, info, warn};
use serde_json::{json, Value};

use tabhistory::app::App;
use tabhistory::rpc_handler::handle_method;

/// Simple rate limiter: max requests per second.
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

fn send(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn serve(app: &Mutex<App>) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    send(&mut out, &json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}))?;

    // Navigation chrome polls state on every page load; cap bursts from a misbehaving renderer.
    let mut rate_limiter = RateLimiter::new(200);

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                warn!("rejecting malformed request: {}", e);
                send(&mut out, &json!({"id": null, "error": format!("parse error: {}", e)}))?;
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);

        if !rate_limiter.check() {
            send(&mut out, &json!({"id": id, "error": "rate limit exceeded"}))?;
            continue;
        }

        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        let response = match handle_method(app, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => {
                warn!("{} failed: {}", method, err);
                json!({"id": id, "error": err.to_string()})
            }
        };
        send(&mut out, &response)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let app = match App::from_config_path(None) {
        Ok(app) => Mutex::new(app),
        Err(e) => {
            error!("failed to initialize: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("tabhistory-rpc {} listening on stdin", env!("CARGO_PKG_VERSION"));

    match serve(&app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("stdio error: {}", e);
            ExitCode::FAILURE
        }
    }
}
