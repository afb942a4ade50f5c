//! UI layer for the kiosk: app shell and theme.

pub mod app;
pub mod theme;

pub use app::KioskApp;
