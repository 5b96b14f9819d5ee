/// Logical buttons the simulation reads. The embedding layer maps real
/// keyboard/gamepad input onto these before each update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
    Up,
    Down,
    Jump,
}

/// Per-frame snapshot of held buttons.
///
/// Control components only care about what is held while they run, so the
/// input surface is a snapshot rather than an event queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    jump: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::Left => self.left,
            Button::Right => self.right,
            Button::Up => self.up,
            Button::Down => self.down,
            Button::Jump => self.jump,
        }
    }

    pub fn set(&mut self, button: Button, held: bool) {
        match button {
            Button::Left => self.left = held,
            Button::Right => self.right = held,
            Button::Up => self.up = held,
            Button::Down => self.down = held,
            Button::Jump => self.jump = held,
        }
    }

    pub fn press(&mut self, button: Button) {
        self.set(button, true);
    }

    pub fn release(&mut self, button: Button) {
        self.set(button, false);
    }

    pub fn with_pressed(mut self, button: Button) -> Self {
        self.press(button);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_held_by_default() {
        let input = InputState::new();
        for b in [Button::Left, Button::Right, Button::Up, Button::Down, Button::Jump] {
            assert!(!input.is_pressed(b));
        }
    }

    #[test]
    fn press_and_release_round_trip() {
        let mut input = InputState::new();
        input.press(Button::Jump);
        assert!(input.is_pressed(Button::Jump));
        assert!(!input.is_pressed(Button::Up));
        input.release(Button::Jump);
        assert!(!input.is_pressed(Button::Jump));
    }

    #[test]
    fn builder_stacks_buttons() {
        let input = InputState::new()
            .with_pressed(Button::Left)
            .with_pressed(Button::Jump);
        assert!(input.is_pressed(Button::Left));
        assert!(input.is_pressed(Button::Jump));
        assert!(!input.is_pressed(Button::Right));
    }
}
