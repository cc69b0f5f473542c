use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyboardInput, ModifiersState, MouseButton, VirtualKeyCode};

/// Level shared by the key, mouse button and cursor event logs.
const INPUT_LOG_LEVEL: log::Level = log::Level::Debug;

/// Tracks current key presses, modifiers and the cursor for the window.
#[derive(Debug, Default)]
pub struct InputTracker {
    keys: Vec<(VirtualKeyCode, ElementState)>,
    buttons: Vec<(MouseButton, ElementState)>,
    modifiers: ModifiersState,
    cursor: Option<PhysicalPosition<f64>>,
}

impl InputTracker {
    fn get_key_entry_mut(
        &mut self,
        key: VirtualKeyCode,
    ) -> Option<&mut (VirtualKeyCode, ElementState)> {
        self.keys.iter_mut().find(|(keycode, _)| keycode.eq(&key))
    }

    /// Consumes a keyboard event, returning the key it refers to.
    pub fn consume_key_event(&mut self, event: &KeyboardInput) -> Option<VirtualKeyCode> {
        let keycode = event.virtual_keycode?;
        log!(
            INPUT_LOG_LEVEL,
            "Key [{:?}], Scancode [{}], Action [{:?}], Modifier [{:?}]",
            keycode, event.scancode, event.state, self.modifiers
        );
        self.set_key_state(keycode, event.state);

        Some(keycode)
    }

    pub fn set_key_state(&mut self, key: VirtualKeyCode, state: ElementState) {
        if let Some((_, key_state)) = self.get_key_entry_mut(key) {
            *key_state = state;
        } else {
            self.keys.push((key, state));
        }
    }

    pub fn consume_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        log!(
            INPUT_LOG_LEVEL,
            "Mouse Button [{:?}], Action [{:?}], Modifier [{:?}]",
            button, state, self.modifiers
        );

        match self.buttons.iter_mut().find(|(b, _)| *b == button) {
            Some((_, button_state)) => *button_state = state,
            None => self.buttons.push((button, state)),
        }
    }

    pub fn consume_cursor(&mut self, position: PhysicalPosition<f64>) {
        log!(
            INPUT_LOG_LEVEL,
            "Mouse Position [{:.0}, {:.0}]",
            position.x,
            position.y
        );
        self.cursor = Some(position);
    }

    pub fn set_modifiers(&mut self, modifiers: ModifiersState) {
        self.modifiers = modifiers;
    }

    pub fn is_pressed(&self, key: VirtualKeyCode) -> bool {
        self.keys
            .iter()
            .any(|(keycode, state)| *keycode == key && *state == ElementState::Pressed)
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons
            .iter()
            .any(|(b, state)| *b == button && *state == ElementState::Pressed)
    }

    pub fn modifiers(&self) -> ModifiersState {
        self.modifiers
    }

    pub fn cursor(&self) -> Option<PhysicalPosition<f64>> {
        self.cursor
    }

    /// Drops released keys and buttons. Call once all of a frame's events are processed.
    pub fn maintain(&mut self) {
        self.keys.retain(|(_, state)| *state == ElementState::Pressed);
        self.buttons.retain(|(_, state)| *state == ElementState::Pressed);
    }

    /// Returns an iterator over the tracked keys.
    pub fn iter(&self) -> std::slice::Iter<'_, (VirtualKeyCode, ElementState)> {
        self.keys.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(deprecated)]
    fn key_event(key: VirtualKeyCode, state: ElementState) -> KeyboardInput {
        KeyboardInput {
            scancode: 0,
            state,
            virtual_keycode: Some(key),
            modifiers: ModifiersState::empty(),
        }
    }

    #[test]
    fn press_then_release_updates_one_entry() {
        let mut tracker = InputTracker::default();

        tracker.consume_key_event(&key_event(VirtualKeyCode::W, ElementState::Pressed));
        assert!(tracker.is_pressed(VirtualKeyCode::W));

        tracker.consume_key_event(&key_event(VirtualKeyCode::W, ElementState::Released));
        assert!(!tracker.is_pressed(VirtualKeyCode::W));
        assert_eq!(tracker.iter().count(), 1);
    }

    #[test]
    fn maintain_discards_released_keys() {
        let mut tracker = InputTracker::default();
        tracker.set_key_state(VirtualKeyCode::A, ElementState::Pressed);
        tracker.set_key_state(VirtualKeyCode::D, ElementState::Released);
        tracker.consume_mouse_button(MouseButton::Left, ElementState::Released);

        tracker.maintain();

        assert_eq!(
            tracker.iter().map(|(key, _)| *key).collect::<Vec<_>>(),
            vec![VirtualKeyCode::A]
        );
        assert!(!tracker.is_button_pressed(MouseButton::Left));
    }

    #[test]
    fn events_without_a_virtual_keycode_are_ignored() {
        let mut tracker = InputTracker::default();
        let mut event = key_event(VirtualKeyCode::Escape, ElementState::Pressed);
        event.virtual_keycode = None;

        assert_eq!(tracker.consume_key_event(&event), None);
        assert_eq!(tracker.iter().count(), 0);
    }

    #[test]
    fn input_events_log_at_debug() {
        assert_eq!(INPUT_LOG_LEVEL, log::Level::Debug);
    }

    #[test]
    fn cursor_and_modifiers_are_remembered() {
        let mut tracker = InputTracker::default();
        assert!(tracker.cursor().is_none());

        tracker.consume_cursor(PhysicalPosition::new(12.0, 34.0));
        tracker.set_modifiers(ModifiersState::SHIFT);

        assert_eq!(tracker.cursor(), Some(PhysicalPosition::new(12.0, 34.0)));
        assert!(tracker.modifiers().shift());
    }
}
