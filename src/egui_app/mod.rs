//! Egui-based interactive viewer for volcano datasets (feature = "egui").
//!
//! The scene itself is drawn by [`crate::scene::render_frame`]; this module
//! only adapts it to eframe: an `egui::Painter` backed [`EguiCanvas`] and the
//! [`VolcanoApp`] that feeds pointer input into [`crate::interaction::AppState`].

#![cfg(feature = "egui")]

mod render;
mod state;
mod ui;

pub use render::EguiCanvas;
pub use state::VolcanoApp;
