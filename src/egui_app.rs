//! Shared egui UI modules for the workforce dashboard.

pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;

pub use controller::DashboardController;
pub use ui::DashboardApp;
