//! Item List Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod filter;
mod list;
mod prompt;
mod render;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use rolling_logger::LogRing;
use tracing::Level;
use wasm_bindgen::JsValue;

fn main() {
    match rolling_logger::init(config::logger_config(), console_sink) {
        Ok(ring) => {
            tracing::debug!(capacity = ring.capacity(), "logger ready");
            install_panic_hook(ring);
        }
        Err(e) => {
            console_error_panic_hook::set_once();
            web_sys::console::warn_1(&format!("[APP] logger not installed: {}", e).into());
        }
    }
    mount_to_body(App);
}

/// Print the buffered log lines before the panic message
fn install_panic_hook(ring: LogRing) {
    std::panic::set_hook(Box::new(move |info| {
        let mut recent = Vec::new();
        if ring.write_to(&mut recent).is_ok() && !recent.is_empty() {
            let dump = format!("[APP] recent log lines:\n{}", String::from_utf8_lossy(&recent));
            web_sys::console::error_1(&dump.into());
        }
        console_error_panic_hook::hook(info);
    }));
}

/// Forward formatted log lines to the browser console
fn console_sink(level: Level, line: &str) {
    let line = JsValue::from_str(line);
    if level == Level::ERROR {
        web_sys::console::error_1(&line);
    } else if level == Level::WARN {
        web_sys::console::warn_1(&line);
    } else if level == Level::INFO {
        web_sys::console::info_1(&line);
    } else {
        web_sys::console::debug_1(&line);
    }
}
