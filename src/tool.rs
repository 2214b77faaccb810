use std::fmt;
use std::str::FromStr;

use egui::{Color32, Pos2, Rect, pos2, vec2};
use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::shape::Shape;

/// Half extents of the rectangle stamp (40×20).
pub const RECT_STAMP_HALF_SIZE: egui::Vec2 = vec2(20.0, 10.0);
/// Radius of the circle stamp.
pub const CIRCLE_STAMP_RADIUS: f32 = 20.0;
/// Half side of the box the triangle stamp is inscribed in (40×40).
pub const TRIANGLE_STAMP_HALF_SIZE: f32 = 20.0;

/// The tool applied by the primary button (or by the middle button for stamps).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Brush,
    Blend,
    Smudge,
    Rectangle,
    Circle,
    Triangle,
    Eraser,
}

impl Tool {
    pub const ALL: [Tool; 7] = [
        Tool::Brush,
        Tool::Blend,
        Tool::Smudge,
        Tool::Eraser,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Triangle,
    ];

    /// Lowercase name, as accepted by [`Tool::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Tool::Brush => "brush",
            Tool::Blend => "blend",
            Tool::Smudge => "smudge",
            Tool::Rectangle => "rectangle",
            Tool::Circle => "circle",
            Tool::Triangle => "triangle",
            Tool::Eraser => "eraser",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::Blend => "Blend",
            Tool::Smudge => "Smudge",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Triangle => "Triangle",
            Tool::Eraser => "Eraser",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tool::Brush => "🖌",
            Tool::Blend => "◑",
            Tool::Smudge => "☁",
            Tool::Rectangle => "▭",
            Tool::Circle => "○",
            Tool::Triangle => "△",
            Tool::Eraser => "⌫",
        }
    }

    pub fn is_stamp(self) -> bool {
        matches!(self, Tool::Rectangle | Tool::Circle | Tool::Triangle)
    }

    /// The shape this tool stamps centered at `center`, or `None` for
    /// tools that are not stamps.
    pub fn stamp(self, center: Pos2, fill: Color32) -> Option<Shape> {
        let outline = Color32::BLACK;
        match self {
            Tool::Rectangle => Some(Shape::Rect {
                rect: Rect::from_center_size(center, RECT_STAMP_HALF_SIZE * 2.0),
                fill,
                outline,
            }),
            Tool::Circle => Some(Shape::Oval {
                rect: Rect::from_center_size(center, vec2(2.0, 2.0) * CIRCLE_STAMP_RADIUS),
                fill,
                outline,
            }),
            Tool::Triangle => {
                let h = TRIANGLE_STAMP_HALF_SIZE;
                Some(Shape::Polygon {
                    points: vec![
                        pos2(center.x, center.y - h),
                        pos2(center.x - h, center.y + h),
                        pos2(center.x + h, center.y + h),
                    ],
                    fill,
                    outline,
                })
            }
            _ => None,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InputError::UnknownTool(s.to_string()))
    }
}
