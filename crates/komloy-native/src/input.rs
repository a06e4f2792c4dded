//! Input handling (winit -> core input model).

use fnv::FnvHashSet;
use komloy_core::{Direction, InputState};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Non-movement keys the app reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    CycleView,
    Quit,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Forward,
    Direction::Back,
    Direction::Left,
    Direction::Right,
];

#[inline]
fn bindings(dir: Direction) -> [KeyCode; 2] {
    match dir {
        Direction::Forward => [KeyCode::ArrowUp, KeyCode::KeyW],
        Direction::Back => [KeyCode::ArrowDown, KeyCode::KeyS],
        Direction::Left => [KeyCode::ArrowLeft, KeyCode::KeyA],
        Direction::Right => [KeyCode::ArrowRight, KeyCode::KeyD],
    }
}

/// Tracks held physical keys so two bindings for one direction do not
/// release each other.
#[derive(Default)]
pub struct WindowInput {
    pub state: InputState,
    held: FnvHashSet<KeyCode>,
    cursor: (f32, f32),
}

impl WindowInput {
    /// Feed a winit event. Returns an app-level action when one was triggered.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Option<Action> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                self.key(code, event.state == ElementState::Pressed, event.repeat)
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                match state {
                    ElementState::Pressed => {
                        let (x, y) = self.cursor;
                        self.state.pointer_pressed(x, y);
                    }
                    ElementState::Released => self.state.pointer_released(),
                }
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = (position.x as f32, position.y as f32);
                self.cursor = (x, y);
                self.state.pointer_moved(x, y);
                None
            }
            WindowEvent::Focused(false) => {
                self.held.clear();
                self.state.clear();
                None
            }
            _ => None,
        }
    }

    /// Apply a physical key transition.
    pub fn key(&mut self, code: KeyCode, pressed: bool, repeat: bool) -> Option<Action> {
        if pressed {
            self.held.insert(code);
        } else {
            self.held.remove(&code);
        }
        self.sync_directions();
        if !pressed || repeat {
            return None;
        }
        match code {
            KeyCode::KeyV => Some(Action::CycleView),
            KeyCode::Escape => Some(Action::Quit),
            _ => None,
        }
    }

    fn sync_directions(&mut self) {
        for dir in DIRECTIONS {
            let down = bindings(dir).iter().any(|k| self.held.contains(k));
            self.state.set_key(dir, down);
        }
    }
}
