//! # SAMA Showroom - Binary Entry Point
//!
//! Initializes logging, then hands the window to eframe. Everything else
//! lives in the library crate.

// Hide the console window on Windows release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use showroom::debug;
use showroom::ui::Shell;

fn main() -> eframe::Result {
    debug::init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "SAMA showroom starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SAMA | Home")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SAMA Showroom",
        options,
        Box::new(|cc| Ok(Box::new(Shell::new(cc)))),
    )
}
