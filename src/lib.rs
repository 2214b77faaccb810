#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod color;
pub mod components;
pub mod controller;
pub mod dialogs;
pub mod error;
pub mod input;
pub mod panels;
pub mod shape;
pub mod state;
pub mod tool;

pub use app::PaintApp;
pub use canvas::{Canvas, ShapeId, Surface};
pub use controller::SurfaceController;
pub use error::InputError;
pub use input::{CanvasEvent, InputHandler};
pub use state::ToolState;
pub use tool::Tool;
