use egui::{Color32, Painter, Pos2, Rect, Vec2};

use crate::shape::Shape;

/// Handle to a shape owned by a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(u64);

impl ShapeId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Retained-mode drawing surface the controller draws on.
///
/// Shapes are kept in draw order and addressed by [`ShapeId`].
pub trait Surface {
    /// Add a shape on top of everything drawn so far.
    fn add_shape(&mut self, shape: Shape) -> ShapeId;

    /// Current fill color of a shape, if it still exists.
    fn fill(&self, id: ShapeId) -> Option<Color32>;

    /// Replace the fill color of a shape. Returns false for unknown ids.
    fn set_fill(&mut self, id: ShapeId, color: Color32) -> bool;

    /// Ids of every shape whose bounding box overlaps `area`, in draw order.
    fn find_overlapping(&self, area: Rect) -> Vec<ShapeId>;

    /// Delete one shape. Returns false for unknown ids.
    fn delete(&mut self, id: ShapeId) -> bool;

    fn delete_all(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn add_line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) -> ShapeId {
        self.add_shape(Shape::line(from, to, width, color))
    }

    fn add_rect(&mut self, rect: Rect, fill: Color32, outline: Color32) -> ShapeId {
        self.add_shape(Shape::Rect {
            rect,
            fill,
            outline,
        })
    }

    fn add_oval(&mut self, rect: Rect, fill: Color32, outline: Color32) -> ShapeId {
        self.add_shape(Shape::Oval {
            rect,
            fill,
            outline,
        })
    }

    fn add_polygon(&mut self, points: Vec<Pos2>, fill: Color32, outline: Color32) -> ShapeId {
        self.add_shape(Shape::Polygon {
            points,
            fill,
            outline,
        })
    }
}

/// In-memory scene of drawn shapes, painted every frame with egui.
#[derive(Debug, Default)]
pub struct Canvas {
    shapes: Vec<(ShapeId, Shape)>,
    next_id: u64,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.position(id).map(|index| &self.shapes[index].1)
    }

    /// Shapes in draw order.
    pub fn shapes(&self) -> impl Iterator<Item = (ShapeId, &Shape)> {
        self.shapes.iter().map(|(id, shape)| (*id, shape))
    }

    /// Paint every shape, bottom first. `offset` maps canvas-local
    /// coordinates to screen coordinates.
    pub fn paint(&self, painter: &Painter, offset: Vec2) {
        for (_, shape) in &self.shapes {
            shape.paint(painter, offset);
        }
    }

    // Ids are handed out in increasing order and removal keeps order,
    // so `shapes` stays sorted by id.
    fn position(&self, id: ShapeId) -> Option<usize> {
        self.shapes
            .binary_search_by_key(&id, |(shape_id, _)| *shape_id)
            .ok()
    }
}

impl Surface for Canvas {
    fn add_shape(&mut self, shape: Shape) -> ShapeId {
        self.next_id += 1;
        let id = ShapeId(self.next_id);
        log::trace!("Adding {} {:?}", shape.kind(), id);
        self.shapes.push((id, shape));
        id
    }

    fn fill(&self, id: ShapeId) -> Option<Color32> {
        self.get(id).map(Shape::fill)
    }

    fn set_fill(&mut self, id: ShapeId, color: Color32) -> bool {
        match self.position(id) {
            Some(index) => {
                self.shapes[index].1.set_fill(color);
                true
            }
            None => false,
        }
    }

    fn find_overlapping(&self, area: Rect) -> Vec<ShapeId> {
        self.shapes
            .iter()
            .filter(|(_, shape)| shape.bounds().intersects(area))
            .map(|(id, _)| *id)
            .collect()
    }

    fn delete(&mut self, id: ShapeId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.shapes.remove(index);
                true
            }
            None => false,
        }
    }

    fn delete_all(&mut self) {
        self.shapes.clear();
    }

    fn len(&self) -> usize {
        self.shapes.len()
    }
}
