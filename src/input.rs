use egui::{Context, Key, PointerButton, Pos2, Rect};

/// Input for the sketchpad, in canvas-relative coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved over the canvas (with or without the button held)
    PointerMove { position: Pos2 },
    /// Primary button was released over the canvas
    PointerUp { position: Pos2 },
    /// Pointer left the canvas
    PointerLeave,
    /// Key was pressed
    KeyPressed { key: Key },
}

/// Handles converting raw egui input into our domain-specific InputEvents
pub struct InputHandler {
    /// Last pointer position seen inside the canvas, in screen coordinates
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Screen position to canvas-relative position
    pub fn to_canvas(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();
        // Typing into a text field must not rotate stickers
        let keys_for_canvas = !ctx.wants_keyboard_input();

        ctx.input(|input| {
            let inside = input
                .pointer
                .hover_pos()
                .filter(|pos| self.canvas_rect.contains(*pos));

            match inside {
                Some(pos) if Some(pos) != self.last_pointer_pos => {
                    events.push(InputEvent::PointerMove {
                        position: self.to_canvas(pos),
                    });
                }
                None if self.last_pointer_pos.is_some() => {
                    events.push(InputEvent::PointerLeave);
                }
                _ => {}
            }

            if let Some(pos) = inside {
                if input.pointer.button_pressed(PointerButton::Primary) {
                    events.push(InputEvent::PointerDown {
                        position: self.to_canvas(pos),
                    });
                }
                if input.pointer.button_released(PointerButton::Primary) {
                    events.push(InputEvent::PointerUp {
                        position: self.to_canvas(pos),
                    });
                }
            }
            self.last_pointer_pos = inside;

            if keys_for_canvas {
                for event in &input.raw.events {
                    if let egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        ..
                    } = event
                    {
                        events.push(InputEvent::KeyPressed { key: *key });
                    }
                }
            }
        });

        events
    }
}
