use crate::PaintApp;
use crate::dialogs::{ColorRequest, SizeRequest};
use crate::tool::Tool;

pub fn menu_bar(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    log::info!("Exit requested from menu");
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    ui.close_menu();
                }
            });

            ui.menu_button("Brush", |ui| {
                if ui.button("Brush Size").clicked() {
                    app.open_size_dialog(SizeRequest::BrushSize);
                    ui.close_menu();
                }
                if ui.button("Brush Color").clicked() {
                    app.open_color_dialog(ColorRequest::BrushColor);
                    ui.close_menu();
                }
                if ui.button("Smudge Radius").clicked() {
                    app.open_size_dialog(SizeRequest::SmudgeRadius);
                    ui.close_menu();
                }
            });

            ui.menu_button("Tools", |ui| {
                tool_entries(app, ui, &[Tool::Brush, Tool::Blend, Tool::Smudge, Tool::Eraser]);
            });

            ui.menu_button("Shapes", |ui| {
                tool_entries(app, ui, &[Tool::Rectangle, Tool::Circle, Tool::Triangle]);
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Clear All").clicked() {
                    app.controller_mut().clear_all();
                    ui.close_menu();
                }
                let can_undo = !app.controller().strokes().is_empty();
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.controller_mut().undo();
                    ui.close_menu();
                }
            });
        });
    });
}

fn tool_entries(app: &mut PaintApp, ui: &mut egui::Ui, tools: &[Tool]) {
    let active = app.controller().tool_state().tool();
    for &tool in tools {
        if ui.selectable_label(active == tool, tool.label()).clicked() {
            log::info!("Tool selected from menu: {}", tool);
            app.select_tool(tool);
            ui.close_menu();
        }
    }
}
