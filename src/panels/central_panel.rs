use crate::PaintApp;

/// The white drawing area. Feeds pointer input to the controller and
/// paints the canvas.
pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    let dialog_open = app.has_open_dialog();

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(egui::Color32::WHITE))
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let canvas_rect = response.rect;
            let accepts_press = response.contains_pointer() && !dialog_open;

            let events = ctx.input(|i| app.process_input(i, canvas_rect, accepts_press));
            app.handle_canvas_events(events);

            app.controller()
                .surface()
                .paint(&painter, canvas_rect.min.to_vec2());
        });
}
