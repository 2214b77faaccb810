use crate::controller::SurfaceController;
use crate::dialogs::{ColorDialog, ColorRequest, DialogResult, SizeDialog, SizeRequest};
use crate::input::{CanvasEvent, InputHandler};
use crate::panels;
use crate::state::{self, ToolState};
use crate::tool::Tool;

/// The paint application. Only the tool settings are persisted; the
/// drawing starts empty on every launch.
#[derive(Default)]
pub struct PaintApp {
    controller: SurfaceController,
    input: InputHandler,
    color_dialog: Option<ColorDialog>,
    size_dialog: Option<SizeDialog>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let tools: ToolState = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        log::info!("Starting with tool {}", tools.tool());
        Self::with_tools(tools)
    }

    /// Start with the given settings, re-validated as if loaded from storage.
    pub fn with_tools(tools: ToolState) -> Self {
        Self {
            controller: SurfaceController::new(Default::default(), tools.validated()),
            ..Default::default()
        }
    }

    pub fn controller(&self) -> &SurfaceController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SurfaceController {
        &mut self.controller
    }

    /// Turn this frame's pointer input into canvas events.
    pub(crate) fn process_input(
        &mut self,
        input: &egui::InputState,
        canvas_rect: egui::Rect,
        accepts_press: bool,
    ) -> Vec<CanvasEvent> {
        self.input.process(input, canvas_rect, accepts_press)
    }

    /// Dispatch canvas events to the controller, opening the color picker
    /// when an event asks for one.
    pub fn handle_canvas_events(&mut self, events: impl IntoIterator<Item = CanvasEvent>) {
        for event in events {
            log::trace!("Canvas event: {:?}", event);
            if let Some(request) = self.controller.handle_event(event) {
                self.open_color_dialog(request);
            }
        }
    }

    pub fn has_open_dialog(&self) -> bool {
        self.color_dialog.is_some() || self.size_dialog.is_some()
    }

    pub fn select_tool(&mut self, tool: Tool) {
        if let Some(request) = self.controller.select_tool(tool) {
            self.open_color_dialog(request);
        }
    }

    pub fn open_color_dialog(&mut self, request: ColorRequest) {
        let tools = self.controller.tool_state();
        let initial = match request {
            ColorRequest::BrushColor => tools.brush_color(),
            ColorRequest::BlendTarget => tools.blend_color().unwrap_or(tools.brush_color()),
        };
        self.color_dialog = Some(ColorDialog::new(request, initial));
    }

    pub fn open_size_dialog(&mut self, request: SizeRequest) {
        let tools = self.controller.tool_state();
        let initial = match request {
            SizeRequest::BrushSize => tools.brush_size(),
            SizeRequest::SmudgeRadius => tools.smudge_radius(),
        };
        self.size_dialog = Some(SizeDialog::new(request, initial));
    }

    pub fn apply_color(&mut self, request: ColorRequest, result: DialogResult<egui::Color32>) {
        if result == DialogResult::Cancelled {
            log::debug!("{} dialog cancelled", request.title());
        }
        match request {
            ColorRequest::BrushColor => self.controller.set_brush_color(result),
            ColorRequest::BlendTarget => self.controller.set_blend_color(result),
        }
    }

    /// Apply the text of a size dialog. Invalid input keeps the old value.
    pub fn apply_size(&mut self, request: SizeRequest, result: DialogResult<String>) {
        let Some(text) = result.confirmed() else {
            log::debug!("{} dialog cancelled", request.title());
            return;
        };
        let applied = state::parse_size(&text).and_then(|value| match request {
            SizeRequest::BrushSize => self.controller.set_brush_size(value),
            SizeRequest::SmudgeRadius => self.controller.set_smudge_radius(value),
        });
        if let Err(err) = applied {
            log::warn!("Ignoring {}: {}", request.title(), err);
        }
    }

    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(dialog) = &mut self.color_dialog {
            if let Some(result) = dialog.show(ctx) {
                let request = dialog.request();
                self.color_dialog = None;
                self.apply_color(request, result);
            }
        }

        if let Some(dialog) = &mut self.size_dialog {
            if let Some(result) = dialog.show(ctx) {
                let request = dialog.request();
                self.size_dialog = None;
                self.apply_size(request, result);
            }
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.controller.tool_state());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let undo_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Z);
        if !self.has_open_dialog() && ctx.input_mut(|i| i.consume_shortcut(&undo_shortcut)) {
            self.controller.undo();
        }

        panels::menu_bar(self, ctx);
        panels::status_bar(self, ctx);
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);

        self.show_dialogs(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    #[test]
    fn test_invalid_size_text_keeps_size() {
        let mut app = PaintApp::default();
        app.apply_size(SizeRequest::BrushSize, DialogResult::Confirmed("12".into()));
        assert_eq!(app.controller().tool_state().brush_size(), 12);

        app.apply_size(SizeRequest::BrushSize, DialogResult::Confirmed("abc".into()));
        app.apply_size(SizeRequest::BrushSize, DialogResult::Confirmed("-4".into()));
        app.apply_size(SizeRequest::BrushSize, DialogResult::Cancelled);
        assert_eq!(app.controller().tool_state().brush_size(), 12);
    }

    #[test]
    fn test_smudge_radius_dialog() {
        let mut app = PaintApp::default();
        app.apply_size(SizeRequest::SmudgeRadius, DialogResult::Confirmed(" 25".into()));
        assert_eq!(app.controller().tool_state().smudge_radius(), 25);
        assert_eq!(app.controller().tool_state().brush_size(), 5);
    }

    #[test]
    fn test_blend_toggle_event_opens_blend_picker() {
        let mut app = PaintApp::default();
        app.handle_canvas_events([CanvasEvent::ToggleBlend]);
        let dialog = app.color_dialog.as_ref().expect("blend picker should be open");
        assert_eq!(dialog.request(), ColorRequest::BlendTarget);

        app.color_dialog = None;
        app.handle_canvas_events([CanvasEvent::ToggleBlend]);
        assert!(!app.has_open_dialog());
        assert!(!app.controller().tool_state().is_blending());
    }

    #[test]
    fn test_drawing_events_open_no_dialog() {
        let mut app = PaintApp::default();
        app.handle_canvas_events([
            CanvasEvent::PressStart(egui::pos2(10.0, 10.0)),
            CanvasEvent::DragMove(egui::pos2(20.0, 10.0)),
            CanvasEvent::PressEnd,
        ]);
        assert!(!app.has_open_dialog());
        assert_eq!(app.controller().strokes().len(), 1);
    }

    #[test]
    fn test_zero_sizes_rejected_on_load() {
        let stored: ToolState =
            serde_json::from_str(r#"{"brush_size":0,"smudge_radius":0}"#).unwrap();
        let mut app = PaintApp::with_tools(stored);
        let tools = app.controller().tool_state();
        assert_eq!(tools.brush_size(), state::DEFAULT_BRUSH_SIZE);
        assert_eq!(tools.smudge_radius(), state::DEFAULT_SMUDGE_RADIUS);

        app.handle_canvas_events([
            CanvasEvent::PressStart(egui::pos2(0.0, 0.0)),
            CanvasEvent::DragMove(egui::pos2(5.0, 0.0)),
        ]);
        let id = app.controller().strokes()[0];
        match app.controller().surface().get(id) {
            Some(crate::shape::Shape::Line { width, .. }) => assert_eq!(*width, 5.0),
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn test_blend_tool_opens_picker() {
        let mut app = PaintApp::default();
        app.select_tool(Tool::Blend);
        assert!(app.has_open_dialog());

        app.color_dialog = None;
        app.apply_color(ColorRequest::BlendTarget, DialogResult::Confirmed(Color32::RED));
        assert_eq!(app.controller().tool_state().blend_color(), Some(Color32::RED));
    }
}
