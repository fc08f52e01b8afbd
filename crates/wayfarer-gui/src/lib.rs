//! Wayfarer Studio - GUI library
//!
//! Exposes the shell, view and map-boundary modules for testing.

pub mod app;
pub mod map_backend;
pub mod state;
pub mod theme;
pub mod views;
