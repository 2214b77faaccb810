use crate::PaintApp;
use crate::components::ToolButton;
use crate::tool::Tool;

/// Narrow strip with one button per tool.
pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .exact_width(44.0)
        .show(ctx, |ui| {
            let active = app.controller().tool_state().tool();

            ui.vertical_centered(|ui| {
                for tool in Tool::ALL {
                    if ToolButton::new(tool, active == tool).show(ui).clicked() {
                        log::info!("Tool selected from UI: {}", tool);
                        app.select_tool(tool);
                    }
                    if tool == Tool::Eraser {
                        ui.separator();
                    }
                }

                ui.separator();
                let can_undo = !app.controller().strokes().is_empty();
                if ui
                    .add_enabled(can_undo, egui::Button::new("⟲"))
                    .on_hover_text("Undo")
                    .clicked()
                {
                    app.controller_mut().undo();
                }
            });
        });
}
