//! Library exports for reuse in integration tests.
/// Workforce analysis data model and the external analysis gateway.
pub mod analysis;
/// Application directory helpers.
pub mod app_dirs;
/// Shared egui UI modules.
pub mod egui_app;
/// Enrollment state machine and the confirmation gesture.
pub mod enrollment;
/// Shared HTTP client configuration.
pub mod http_client;
/// Logging setup.
pub mod logging;
/// Persistent session store.
pub mod session;
