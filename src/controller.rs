use egui::{Color32, Pos2, Rect, vec2};

use crate::canvas::{Canvas, ShapeId, Surface};
use crate::color;
use crate::dialogs::{ColorRequest, DialogResult};
use crate::error::InputError;
use crate::input::CanvasEvent;
use crate::state::ToolState;
use crate::tool::Tool;

/// The drawing surface controller.
///
/// Owns the surface, the tool settings, the pointer track and the list of
/// undoable strokes. Every input event and menu action goes through one
/// method here, so everything can be driven without a window.
#[derive(Debug, Default)]
pub struct SurfaceController<S: Surface = Canvas> {
    surface: S,
    tools: ToolState,
    /// Last pointer position, anchors the next line segment.
    track: Option<Pos2>,
    /// Undoable shapes, in draw order.
    strokes: Vec<ShapeId>,
}

impl<S: Surface> SurfaceController<S> {
    pub fn new(surface: S, tools: ToolState) -> Self {
        Self {
            surface,
            tools,
            track: None,
            strokes: Vec::new(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn tool_state(&self) -> &ToolState {
        &self.tools
    }

    pub fn pointer_track(&self) -> Option<Pos2> {
        self.track
    }

    pub fn strokes(&self) -> &[ShapeId] {
        &self.strokes
    }

    /// Dispatch one input event to its handler.
    ///
    /// Returns a color request when the event needs the color picker.
    pub fn handle_event(&mut self, event: CanvasEvent) -> Option<ColorRequest> {
        match event {
            CanvasEvent::PressStart(pos) => self.on_press_start(pos),
            CanvasEvent::DragMove(pos) => self.on_drag_move(pos),
            CanvasEvent::PressEnd => self.on_press_end(),
            CanvasEvent::SecondaryDragMove(pos) => self.on_secondary_drag_move(pos),
            CanvasEvent::ToggleBlend => return self.on_aux_toggle_blend(),
            CanvasEvent::ToggleSmudge => self.on_aux_toggle_smudge(),
            CanvasEvent::MiddleClick(pos) => self.on_middle_click(pos),
        }
        None
    }

    pub fn on_press_start(&mut self, pos: Pos2) {
        self.track = Some(pos);
    }

    pub fn on_drag_move(&mut self, pos: Pos2) {
        match self.tools.tool() {
            Tool::Brush | Tool::Blend => self.paint_segment(pos),
            Tool::Smudge => self.smudge(pos),
            Tool::Eraser => self.on_secondary_drag_move(pos),
            Tool::Rectangle | Tool::Circle | Tool::Triangle => {}
        }
    }

    pub fn on_press_end(&mut self) {
        self.track = None;
    }

    /// Paint a white square over `pos`, whatever the active tool.
    pub fn on_secondary_drag_move(&mut self, pos: Pos2) {
        let half = self.tools.eraser_half_width();
        let square = Rect::from_center_size(pos, vec2(half, half) * 2.0);
        self.surface.add_rect(square, Color32::WHITE, Color32::WHITE);
        self.track = Some(pos);
    }

    /// Flip blending. Turning it on asks for a blend target.
    pub fn on_aux_toggle_blend(&mut self) -> Option<ColorRequest> {
        let blending = !self.tools.is_blending();
        self.tools.set_blending(blending);
        log::info!("Blending {}", if blending { "on" } else { "off" });
        blending.then_some(ColorRequest::BlendTarget)
    }

    /// Switch between the smudge tool and the brush.
    pub fn on_aux_toggle_smudge(&mut self) {
        let tool = if self.tools.tool() == Tool::Smudge {
            Tool::Brush
        } else {
            Tool::Smudge
        };
        self.select_tool(tool);
    }

    /// Stamp the active shape tool at `pos`. Other tools ignore the click.
    pub fn on_middle_click(&mut self, pos: Pos2) {
        if let Some(shape) = self.tools.tool().stamp(pos, self.tools.brush_color()) {
            log::debug!("Stamping {} at {:?}", shape.kind(), pos);
            let id = self.surface.add_shape(shape);
            self.strokes.push(id);
        }
    }

    /// Make `tool` active. Picking the blend tool without a blend target
    /// asks for one.
    pub fn select_tool(&mut self, tool: Tool) -> Option<ColorRequest> {
        if self.tools.tool() != tool {
            log::info!("Tool selected: {}", tool);
        }
        self.tools.set_tool(tool);
        (tool == Tool::Blend && self.tools.blend_color().is_none())
            .then_some(ColorRequest::BlendTarget)
    }

    /// Select a tool by name, see [`Tool::name`].
    pub fn set_tool(&mut self, name: &str) -> Result<Option<ColorRequest>, InputError> {
        let tool = name.parse::<Tool>()?;
        Ok(self.select_tool(tool))
    }

    pub fn set_brush_color(&mut self, result: DialogResult<Color32>) {
        if let Some(color) = result.confirmed() {
            log::info!("Brush color: {}", color::to_hex(color));
            self.tools.set_brush_color(color);
        }
    }

    pub fn set_blend_color(&mut self, result: DialogResult<Color32>) {
        if let Some(color) = result.confirmed() {
            log::info!("Blend color: {}", color::to_hex(color));
            self.tools.set_blend_color(color);
        }
    }

    pub fn set_brush_size(&mut self, size: i64) -> Result<(), InputError> {
        self.tools.set_brush_size(size)?;
        log::info!("Brush size: {}", size);
        Ok(())
    }

    pub fn set_smudge_radius(&mut self, radius: i64) -> Result<(), InputError> {
        self.tools.set_smudge_radius(radius)?;
        log::info!("Smudge radius: {}", radius);
        Ok(())
    }

    /// Remove everything from the surface and forget all strokes.
    pub fn clear_all(&mut self) {
        log::info!("Clearing {} shapes", self.surface.len());
        self.surface.delete_all();
        self.strokes.clear();
    }

    /// Delete the most recent stroke. Does nothing if there is none.
    pub fn undo(&mut self) {
        if let Some(id) = self.strokes.pop() {
            if !self.surface.delete(id) {
                log::warn!("Undo: shape {} was already gone", id.get());
            }
        }
    }

    fn paint_segment(&mut self, pos: Pos2) {
        let Some(from) = self.track else {
            self.track = Some(pos);
            return;
        };
        let id = self.surface.add_line(
            from,
            pos,
            self.tools.brush_size() as f32,
            self.tools.stroke_color(),
        );
        self.strokes.push(id);
        self.track = Some(pos);
    }

    /// Pull the fill of every shape near `pos` halfway toward the brush
    /// color. Passing over the same spot again pulls further.
    fn smudge(&mut self, pos: Pos2) {
        if self.track.is_none() {
            self.track = Some(pos);
            return;
        }
        let radius = self.tools.smudge_radius() as f32;
        let window = Rect::from_center_size(pos, vec2(radius, radius) * 2.0);
        let brush = self.tools.brush_color();
        for id in self.surface.find_overlapping(window) {
            if let Some(fill) = self.surface.fill(id) {
                self.surface.set_fill(id, color::blend(brush, fill));
            }
        }
        self.track = Some(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_drag_without_press_only_anchors() {
        let mut controller = SurfaceController::<Canvas>::default();
        controller.on_drag_move(pos2(5.0, 5.0));
        assert!(controller.strokes().is_empty());
        assert_eq!(controller.pointer_track(), Some(pos2(5.0, 5.0)));

        controller.on_drag_move(pos2(6.0, 5.0));
        assert_eq!(controller.strokes().len(), 1);
    }

    #[test]
    fn test_stamp_tools_ignore_drag() {
        let mut controller = SurfaceController::<Canvas>::default();
        controller.select_tool(Tool::Circle);
        controller.on_press_start(pos2(0.0, 0.0));
        controller.on_drag_move(pos2(10.0, 10.0));
        assert!(controller.surface().is_empty());
    }

    #[test]
    fn test_selecting_blend_asks_for_target_once() {
        let mut controller = SurfaceController::<Canvas>::default();
        assert_eq!(
            controller.select_tool(Tool::Blend),
            Some(ColorRequest::BlendTarget)
        );
        controller.set_blend_color(DialogResult::Confirmed(Color32::WHITE));
        assert_eq!(controller.select_tool(Tool::Blend), None);
    }
}
