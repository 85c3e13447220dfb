#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod infrastructure;
mod ports;
mod presentation;

#[cfg(test)]
mod test_support;

use iced::daemon;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting Leaf Detection application");

    daemon(
        app::LeafDetectionApp::build,
        app::LeafDetectionApp::handle_update,
        app::LeafDetectionApp::render_view,
    )
    .title(app::LeafDetectionApp::window_title)
    .subscription(app::LeafDetectionApp::handle_subscription)
    .run()
}
