use egui::{Color32, Painter, Pos2, Rect, Stroke as EguiStroke, Vec2};

/// Outline width used for stamped shapes and erase squares.
pub const OUTLINE_WIDTH: f32 = 1.0;

/// A primitive drawn on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Round-capped line segment. Its fill is the line color.
    Line {
        from: Pos2,
        to: Pos2,
        width: f32,
        color: Color32,
    },
    Rect {
        rect: Rect,
        fill: Color32,
        outline: Color32,
    },
    /// Ellipse inscribed in `rect`.
    Oval {
        rect: Rect,
        fill: Color32,
        outline: Color32,
    },
    Polygon {
        points: Vec<Pos2>,
        fill: Color32,
        outline: Color32,
    },
}

impl Shape {
    pub fn line(from: Pos2, to: Pos2, width: f32, color: Color32) -> Self {
        Self::Line {
            from,
            to,
            width,
            color,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Line { .. } => "line",
            Self::Rect { .. } => "rectangle",
            Self::Oval { .. } => "oval",
            Self::Polygon { .. } => "polygon",
        }
    }

    pub fn fill(&self) -> Color32 {
        match self {
            Self::Line { color, .. } => *color,
            Self::Rect { fill, .. } | Self::Oval { fill, .. } | Self::Polygon { fill, .. } => *fill,
        }
    }

    pub fn set_fill(&mut self, color: Color32) {
        match self {
            Self::Line { color: c, .. } => *c = color,
            Self::Rect { fill, .. } | Self::Oval { fill, .. } | Self::Polygon { fill, .. } => {
                *fill = color
            }
        }
    }

    /// Axis-aligned bounding box, lines padded by half their width.
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Line { from, to, width, .. } => calculate_bounds(&[*from, *to], width / 2.0),
            Self::Rect { rect, .. } | Self::Oval { rect, .. } => rect.expand(OUTLINE_WIDTH / 2.0),
            Self::Polygon { points, .. } => calculate_bounds(points, OUTLINE_WIDTH / 2.0),
        }
    }

    /// Paint the shape, shifting canvas-local coordinates by `offset`.
    pub fn paint(&self, painter: &Painter, offset: Vec2) {
        match self {
            Self::Line {
                from,
                to,
                width,
                color,
            } => {
                let (from, to) = (*from + offset, *to + offset);
                painter.line_segment([from, to], EguiStroke::new(*width, *color));
                // round caps
                painter.circle_filled(from, width / 2.0, *color);
                painter.circle_filled(to, width / 2.0, *color);
            }
            Self::Rect {
                rect,
                fill,
                outline,
            } => {
                let rect = rect.translate(offset);
                painter.rect_filled(rect, 0.0, *fill);
                painter.rect_stroke(rect, 0.0, EguiStroke::new(OUTLINE_WIDTH, *outline));
            }
            Self::Oval {
                rect,
                fill,
                outline,
            } => {
                let rect = rect.translate(offset);
                let radius = rect.size() / 2.0;
                painter.add(egui::Shape::ellipse_filled(rect.center(), radius, *fill));
                painter.add(egui::Shape::ellipse_stroke(
                    rect.center(),
                    radius,
                    EguiStroke::new(OUTLINE_WIDTH, *outline),
                ));
            }
            Self::Polygon {
                points,
                fill,
                outline,
            } => {
                let points = points.iter().map(|p| *p + offset).collect();
                painter.add(egui::Shape::convex_polygon(
                    points,
                    *fill,
                    EguiStroke::new(OUTLINE_WIDTH, *outline),
                ));
            }
        }
    }
}

/// Calculate the bounding box for a set of points
pub(crate) fn calculate_bounds(points: &[Pos2], padding: f32) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(
        Pos2::new(min_x - padding, min_y - padding),
        Pos2::new(max_x + padding, max_y + padding),
    )
}
