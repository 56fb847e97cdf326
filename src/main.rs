//! E·Motion Studio Frontend Entry Point

mod app;
mod audio;
mod components;
mod config;
mod context;
mod forms;
#[cfg(test)]
mod logos;
mod machines;
mod models;
mod services;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init(log::LevelFilter::Info, rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }
    mount_to_body(App);
}
