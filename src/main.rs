#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based workforce strategy dashboard.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use eframe::egui;
use workstrat::egui_app::ui::{DashboardApp, MIN_VIEWPORT_SIZE};
use workstrat::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size(egui::vec2(1180.0, 820.0));

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Workforce Strategy Dashboard",
        native_options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new()))),
    )?;
    Ok(())
}
