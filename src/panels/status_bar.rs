use crate::PaintApp;
use crate::color;

pub fn status_bar(app: &PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        let controller = app.controller();
        let tools = controller.tool_state();

        ui.horizontal(|ui| {
            ui.label(format!("Tool: {}", tools.tool().label()));
            ui.separator();

            let (swatch, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
            ui.painter().rect_filled(swatch, 2.0, tools.brush_color());
            ui.label(color::to_hex(tools.brush_color()));
            ui.separator();

            ui.label(format!("Size: {}", tools.brush_size()));
            ui.separator();

            match (tools.is_blending(), tools.blend_color()) {
                (true, Some(target)) => ui.label(format!("Blend: {}", color::to_hex(target))),
                (true, None) => ui.label("Blend: no color"),
                (false, _) => ui.label("Blend: off"),
            };
            ui.separator();

            ui.label(format!("Strokes: {}", controller.strokes().len()));
        });
    });
}
