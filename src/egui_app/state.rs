#![cfg(feature = "egui")]

use anyhow::Result;
use eframe::egui;
use tracing::info;

use crate::color::{ColorMap, Palette};
use crate::interaction::AppState;
use crate::model::Dataset;

/// Interactive eframe application showing the volcano map.
pub struct VolcanoApp {
    pub dataset: Dataset,
    pub colors: ColorMap,
    pub title: String,
    pub state: AppState,
}

impl VolcanoApp {
    /// Create the app; colors are assigned once here.
    pub fn new(dataset: Dataset, palette: &Palette, title: impl Into<String>) -> Self {
        let colors = ColorMap::assign(dataset.records(), palette);
        Self {
            dataset,
            colors,
            title: title.into(),
            state: AppState::new(),
        }
    }

    /// Open a maximized native window and block until it is closed.
    pub fn run(self) -> Result<()> {
        let title = self.title.clone();
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(title.clone())
                .with_maximized(true),
            ..Default::default()
        };
        info!(records = self.dataset.len(), "opening viewer window");
        eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(self))))
            .map_err(|e| anyhow::anyhow!("{e}"))?;
        Ok(())
    }
}

impl eframe::App for VolcanoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::ui::update(self, ctx);
    }
}
