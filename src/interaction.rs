//! Click handling and the UI state it mutates.
//!
//! All mutable session state lives in [`AppState`]: the scene renderer writes
//! the pointer pick and the hit regions of the controls it drew, and
//! [`AppState::click`] reads them on the next click. Render and click
//! handling never interleave, so a click always sees the layout of the last
//! completed frame.

use tracing::debug;

use crate::geometry::{RectF, Vec2f};
use crate::pick::PointerPick;

/// Legend and selection state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub legend_open: bool,
    /// Snapshot of the pick that opened the detail modal.
    pub selection: Option<PointerPick>,
}

/// Clickable areas drawn in the previous frame. Zero-area until drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HitRegions {
    pub legend_toggle: RectF,
    pub close_button: RectF,
}

/// Whether the detail modal is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Map,
    Modal { selected: usize },
}

/// Result of a single click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    ModalClosed,
    LegendToggled { open: bool },
    Selected(usize),
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub ui: UiState,
    pub hit: HitRegions,
    /// Pick computed by the last render.
    pub pick: Option<PointerPick>,
    /// Pointer position for the next render, `None` when outside the canvas.
    pub pointer: Option<Vec2f>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        match &self.ui.selection {
            Some(sel) => View::Modal {
                selected: sel.index,
            },
            None => View::Map,
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.ui.selection.as_ref().map(|s| s.index)
    }

    pub fn legend_open(&self) -> bool {
        self.ui.legend_open
    }

    pub fn set_pointer(&mut self, pointer: Option<Vec2f>) {
        self.pointer = pointer;
    }

    /// Apply a click at `pos`.
    ///
    /// With the modal open only the close button reacts. Otherwise the
    /// legend toggle takes priority over selecting the picked record.
    pub fn click(&mut self, pos: Vec2f) -> ClickOutcome {
        let outcome = if self.ui.selection.is_some() {
            if self.hit.close_button.contains(pos) {
                self.ui.selection = None;
                ClickOutcome::ModalClosed
            } else {
                ClickOutcome::Ignored
            }
        } else if self.hit.legend_toggle.contains(pos) {
            self.ui.legend_open = !self.ui.legend_open;
            ClickOutcome::LegendToggled {
                open: self.ui.legend_open,
            }
        } else if let Some(p) = &self.pick {
            self.ui.selection = Some(p.clone());
            ClickOutcome::Selected(p.index)
        } else {
            ClickOutcome::Ignored
        };
        debug!(x = pos.x, y = pos.y, ?outcome, "click");
        outcome
    }
}
