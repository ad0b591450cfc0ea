#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod app_theme;
mod core;
mod global_constants;
mod ports;
mod presentation;
mod user_settings;
mod utils;

#[cfg(test)]
mod app_theme_tests;

use iced::daemon;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting Paste to PNG application");

    if !utils::ensure_single_instance() {
        log::error!("[MAIN] Another instance is already running, exiting");
        return Ok(());
    }

    daemon(
        app::PasteApp::build,
        app::PasteApp::handle_update,
        app::PasteApp::render_view,
    )
    .theme(app::PasteApp::get_window_theme)
    .subscription(app::PasteApp::handle_subscription)
    .run()
}
