//! Interactive volcano map.
//!
//! This crate loads a table of volcanoes (`loader`) into an immutable
//! [`model::Dataset`], assigns a color to every volcano type (`color`) and
//! renders a clickable map onto any [`canvas::Canvas`] (`scene`). Pointer
//! picking (`pick`) and the click state machine (`interaction`) are plain
//! functions over an explicit [`interaction::AppState`], so the whole UI
//! behaves the same in tests as in the window.
//!
//! The binary `volcamap` opens the map with egui or prints a JSON summary.

pub mod canvas;
pub mod color;
pub mod geometry;
pub mod interaction;
pub mod loader;
pub mod model;
pub mod pick;
pub mod projection;
pub mod scene;
pub mod summary;

// Optional GUI/egui functionality lives behind the `egui` feature flag.
#[cfg(feature = "egui")]
pub mod egui_app;
