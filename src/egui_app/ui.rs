#![cfg(feature = "egui")]

use eframe::egui::{self, Pos2};

use crate::geometry::Vec2f;
use crate::scene::{Scene, render_frame};

use super::render::EguiCanvas;
use super::state::VolcanoApp;

/// One frame: dispatch the click (against the previous frame's layout), then render.
pub(crate) fn update(app: &mut VolcanoApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            let (hover, click) = ui.input(|i| {
                let click = if i.pointer.primary_clicked() {
                    i.pointer.interact_pos()
                } else {
                    None
                };
                (i.pointer.hover_pos(), click)
            });
            let to_local = |p: Pos2| Vec2f::new(p.x - rect.min.x, p.y - rect.min.y);

            if let Some(p) = click {
                app.state.click(to_local(p));
            }
            let pointer = hover.filter(|p| rect.contains(*p)).map(to_local);
            app.state.set_pointer(pointer);

            let scene = Scene {
                dataset: &app.dataset,
                colors: &app.colors,
                title: &app.title,
            };
            let mut canvas = EguiCanvas::new(ui.painter(), rect);
            render_frame(&mut canvas, &scene, &mut app.state);
        });
}
