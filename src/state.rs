use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::color;
use crate::error::InputError;
use crate::tool::Tool;

pub const DEFAULT_BRUSH_SIZE: u32 = 5;
pub const DEFAULT_SMUDGE_RADIUS: u32 = 10;

/// Current tool settings. Read by every drawing operation.
///
/// We derive Deserialize/Serialize so the settings survive restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct ToolState {
    tool: Tool,
    brush_color: Color32,
    brush_size: u32,
    blending: bool,
    blend_color: Option<Color32>,
    smudge_radius: u32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            tool: Tool::Brush,
            brush_color: Color32::BLACK,
            brush_size: DEFAULT_BRUSH_SIZE,
            blending: false,
            blend_color: None,
            smudge_radius: DEFAULT_SMUDGE_RADIUS,
        }
    }
}

impl ToolState {
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn brush_color(&self) -> Color32 {
        self.brush_color
    }

    pub fn set_brush_color(&mut self, color: Color32) {
        self.brush_color = color;
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    /// Set the brush size. Non-positive sizes are rejected and the
    /// previous size is kept.
    pub fn set_brush_size(&mut self, size: i64) -> Result<(), InputError> {
        self.brush_size = positive(size)?;
        Ok(())
    }

    pub fn smudge_radius(&self) -> u32 {
        self.smudge_radius
    }

    pub fn set_smudge_radius(&mut self, radius: i64) -> Result<(), InputError> {
        self.smudge_radius = positive(radius)?;
        Ok(())
    }

    pub fn is_blending(&self) -> bool {
        self.blending
    }

    pub fn set_blending(&mut self, blending: bool) {
        self.blending = blending;
    }

    pub fn blend_color(&self) -> Option<Color32> {
        self.blend_color
    }

    pub fn set_blend_color(&mut self, color: Color32) {
        self.blend_color = Some(color);
    }

    /// Color of new brush strokes: the brush color, or its blend with the
    /// blend target while blending is on (always, for the blend tool).
    ///
    /// Without a blend target the plain brush color is used.
    pub fn stroke_color(&self) -> Color32 {
        let blending = self.blending || self.tool == Tool::Blend;
        match self.blend_color {
            Some(target) if blending => color::blend(self.brush_color, target),
            _ => self.brush_color,
        }
    }

    /// Re-check settings loaded from storage. Sizes that fail validation
    /// fall back to their defaults.
    pub fn validated(mut self) -> Self {
        if let Err(err) = positive(i64::from(self.brush_size)) {
            log::warn!("Stored brush size rejected ({err}), using {DEFAULT_BRUSH_SIZE}");
            self.brush_size = DEFAULT_BRUSH_SIZE;
        }
        if let Err(err) = positive(i64::from(self.smudge_radius)) {
            log::warn!("Stored smudge radius rejected ({err}), using {DEFAULT_SMUDGE_RADIUS}");
            self.smudge_radius = DEFAULT_SMUDGE_RADIUS;
        }
        self
    }

    /// Half-width of the square painted by the eraser.
    pub fn eraser_half_width(&self) -> f32 {
        self.brush_size as f32 * 2.0
    }
}

/// Parse the text of a size dialog into an integer.
pub fn parse_size(text: &str) -> Result<i64, InputError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| InputError::NotANumber(text.to_string()))
}

fn positive(value: i64) -> Result<u32, InputError> {
    if value <= 0 {
        return Err(InputError::NonPositive(value));
    }
    u32::try_from(value).map_err(|_| InputError::OutOfRange(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = ToolState::default();
        assert_eq!(state.tool(), Tool::Brush);
        assert_eq!(state.brush_color(), Color32::BLACK);
        assert_eq!(state.brush_size(), 5);
        assert_eq!(state.smudge_radius(), 10);
        assert!(!state.is_blending());
        assert_eq!(state.blend_color(), None);
    }

    #[test]
    fn test_brush_size_validation() {
        let mut state = ToolState::default();
        for n in [1, 2, 17, 400] {
            assert!(state.set_brush_size(n).is_ok());
            assert_eq!(state.brush_size(), n as u32);
        }
        assert_eq!(state.set_brush_size(0), Err(InputError::NonPositive(0)));
        assert_eq!(state.set_brush_size(-3), Err(InputError::NonPositive(-3)));
        assert_eq!(
            state.set_brush_size(i64::MAX),
            Err(InputError::OutOfRange(i64::MAX))
        );
        assert_eq!(state.brush_size(), 400);
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size(" 12 "), Ok(12));
        assert_eq!(parse_size("-1"), Ok(-1));
        assert_eq!(
            parse_size("big"),
            Err(InputError::NotANumber("big".to_string()))
        );
        assert!(parse_size("").is_err());
    }

    #[test]
    fn test_stroke_color_blends_only_when_enabled() {
        let mut state = ToolState::default();
        state.set_brush_color(Color32::from_rgb(255, 0, 0));
        state.set_blend_color(Color32::from_rgb(0, 0, 255));
        assert_eq!(state.stroke_color(), Color32::from_rgb(255, 0, 0));

        state.set_blending(true);
        assert_eq!(state.stroke_color(), Color32::from_rgb(127, 0, 127));

        state.set_blending(false);
        state.set_tool(Tool::Blend);
        assert_eq!(state.stroke_color(), Color32::from_rgb(127, 0, 127));
    }

    #[test]
    fn test_settings_survive_serialization() {
        let mut state = ToolState::default();
        state.set_tool(Tool::Smudge);
        state.set_brush_color(Color32::from_rgb(12, 34, 56));
        state.set_brush_size(9).unwrap();
        state.set_smudge_radius(3).unwrap();
        state.set_blending(true);
        state.set_blend_color(Color32::from_rgb(200, 100, 0));

        let stored = serde_json::to_string(&state).unwrap();
        let restored: ToolState = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored.validated(), state);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let restored: ToolState = serde_json::from_str("{}").unwrap();
        assert_eq!(restored, ToolState::default());

        let restored: ToolState = serde_json::from_str(r#"{"brush_size":12}"#).unwrap();
        assert_eq!(restored.brush_size(), 12);
        assert_eq!(restored.smudge_radius(), DEFAULT_SMUDGE_RADIUS);
        assert_eq!(restored.tool(), Tool::Brush);
    }

    #[test]
    fn test_stored_zero_sizes_fall_back_to_defaults() {
        let restored: ToolState =
            serde_json::from_str(r#"{"brush_size":0,"smudge_radius":0}"#).unwrap();
        let restored = restored.validated();
        assert_eq!(restored.brush_size(), DEFAULT_BRUSH_SIZE);
        assert_eq!(restored.smudge_radius(), DEFAULT_SMUDGE_RADIUS);
        assert_eq!(restored.eraser_half_width(), 10.0);
    }

    #[test]
    fn test_validated_keeps_good_sizes() {
        let mut state = ToolState::default();
        state.set_brush_size(1).unwrap();
        state.set_smudge_radius(u32::MAX as i64).unwrap();
        assert_eq!(state.clone().validated(), state);
    }

    #[test]
    fn test_blending_without_target_uses_brush_color() {
        let mut state = ToolState::default();
        state.set_blending(true);
        assert_eq!(state.stroke_color(), Color32::BLACK);
    }
}
