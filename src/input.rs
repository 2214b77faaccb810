use egui::{InputState, PointerButton, Pos2, Rect};

/// Canvas input events, in canvas-local coordinates.
///
/// Each variant maps to exactly one controller handler, see
/// [`SurfaceController::handle_event`](crate::controller::SurfaceController::handle_event).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    /// Primary button pressed on the canvas.
    PressStart(Pos2),
    /// Pointer moved while the primary button is held.
    DragMove(Pos2),
    /// Primary or secondary button released.
    PressEnd,
    /// Pointer moved while the secondary button is held.
    SecondaryDragMove(Pos2),
    /// First auxiliary button: blend toggle.
    ToggleBlend,
    /// Second auxiliary button: smudge toggle.
    ToggleSmudge,
    /// Middle button pressed on the canvas.
    MiddleClick(Pos2),
}

/// Turns egui pointer state into [`CanvasEvent`]s, one frame at a time.
///
/// Drags only count if the button went down over the canvas; once started
/// they follow the pointer even outside of it.
#[derive(Debug, Default)]
pub struct InputHandler {
    primary_held: bool,
    secondary_held: bool,
    last_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a primary or secondary drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.primary_held || self.secondary_held
    }

    /// Process this frame's input. `canvas_rect` is the canvas in screen
    /// coordinates; `accepts_press` is false when something covers it.
    pub fn process(
        &mut self,
        input: &InputState,
        canvas_rect: Rect,
        accepts_press: bool,
    ) -> Vec<CanvasEvent> {
        let mut events = Vec::new();
        let pointer = &input.pointer;

        if let Some(pos) = pointer.latest_pos() {
            let local = pos - canvas_rect.min.to_vec2();
            let inside = accepts_press && canvas_rect.contains(pos);
            let moved = self.last_pos != Some(pos);

            if inside && pointer.button_pressed(PointerButton::Primary) {
                self.primary_held = true;
                events.push(CanvasEvent::PressStart(local));
            } else if moved
                && self.primary_held
                && pointer.button_down(PointerButton::Primary)
            {
                events.push(CanvasEvent::DragMove(local));
            }

            if inside && pointer.button_pressed(PointerButton::Secondary) {
                self.secondary_held = true;
            } else if moved
                && self.secondary_held
                && pointer.button_down(PointerButton::Secondary)
            {
                events.push(CanvasEvent::SecondaryDragMove(local));
            }

            if inside {
                if pointer.button_pressed(PointerButton::Middle) {
                    events.push(CanvasEvent::MiddleClick(local));
                }
                if pointer.button_pressed(PointerButton::Extra1) {
                    events.push(CanvasEvent::ToggleBlend);
                }
                if pointer.button_pressed(PointerButton::Extra2) {
                    events.push(CanvasEvent::ToggleSmudge);
                }
            }

            self.last_pos = Some(pos);
        }

        if self.primary_held && pointer.button_released(PointerButton::Primary) {
            self.primary_held = false;
            events.push(CanvasEvent::PressEnd);
        }
        if self.secondary_held && pointer.button_released(PointerButton::Secondary) {
            self.secondary_held = false;
            events.push(CanvasEvent::PressEnd);
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Modifiers, RawInput, pos2};

    const CANVAS: Rect = Rect {
        min: pos2(100.0, 50.0),
        max: pos2(900.0, 650.0),
    };

    fn moved(x: f32, y: f32) -> Event {
        Event::PointerMoved(pos2(x, y))
    }

    fn button(x: f32, y: f32, button: PointerButton, pressed: bool) -> Event {
        Event::PointerButton {
            pos: pos2(x, y),
            button,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    fn frame(ctx: &egui::Context, handler: &mut InputHandler, events: Vec<Event>) -> Vec<CanvasEvent> {
        let raw = RawInput {
            events,
            ..Default::default()
        };
        let mut out = Vec::new();
        let _ = ctx.run(raw, |ctx| {
            out = ctx.input(|i| handler.process(i, CANVAS, true));
        });
        out
    }

    #[test]
    fn test_primary_drag_sequence() {
        let ctx = egui::Context::default();
        let mut handler = InputHandler::new();

        let events = frame(
            &ctx,
            &mut handler,
            vec![moved(110.0, 60.0), button(110.0, 60.0, PointerButton::Primary, true)],
        );
        assert_eq!(events, vec![CanvasEvent::PressStart(pos2(10.0, 10.0))]);
        assert!(handler.is_dragging());

        let events = frame(&ctx, &mut handler, vec![moved(120.0, 60.0)]);
        assert_eq!(events, vec![CanvasEvent::DragMove(pos2(20.0, 10.0))]);

        let events = frame(
            &ctx,
            &mut handler,
            vec![button(120.0, 60.0, PointerButton::Primary, false)],
        );
        assert_eq!(events, vec![CanvasEvent::PressEnd]);
        assert!(!handler.is_dragging());
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let ctx = egui::Context::default();
        let mut handler = InputHandler::new();

        let events = frame(
            &ctx,
            &mut handler,
            vec![moved(10.0, 10.0), button(10.0, 10.0, PointerButton::Primary, true)],
        );
        assert!(events.is_empty());

        let events = frame(&ctx, &mut handler, vec![moved(150.0, 100.0)]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_secondary_drag_erases() {
        let ctx = egui::Context::default();
        let mut handler = InputHandler::new();

        let events = frame(
            &ctx,
            &mut handler,
            vec![moved(200.0, 100.0), button(200.0, 100.0, PointerButton::Secondary, true)],
        );
        assert!(events.is_empty());

        let events = frame(&ctx, &mut handler, vec![moved(210.0, 100.0)]);
        assert_eq!(events, vec![CanvasEvent::SecondaryDragMove(pos2(110.0, 50.0))]);
    }

    #[test]
    fn test_aux_and_middle_buttons() {
        let ctx = egui::Context::default();
        let mut handler = InputHandler::new();

        let events = frame(
            &ctx,
            &mut handler,
            vec![
                moved(300.0, 300.0),
                button(300.0, 300.0, PointerButton::Middle, true),
                button(300.0, 300.0, PointerButton::Extra1, true),
                button(300.0, 300.0, PointerButton::Extra2, true),
            ],
        );
        assert_eq!(
            events,
            vec![
                CanvasEvent::MiddleClick(pos2(200.0, 250.0)),
                CanvasEvent::ToggleBlend,
                CanvasEvent::ToggleSmudge,
            ]
        );
    }
}
