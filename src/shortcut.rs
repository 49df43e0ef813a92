use crate::event::UserEvent;
use egui::{InputState, Key, KeyboardShortcut, Modifiers};

pub struct Shortcut {
    pub app_quit: KeyboardShortcut,
    pub fullscreen: KeyboardShortcut,
    pub reset: KeyboardShortcut,
    pub toggle_play: KeyboardShortcut,
}

impl Shortcut {
    pub fn new() -> Self {
        Self {
            app_quit: KeyboardShortcut::new(Modifiers::NONE, Key::Escape),
            fullscreen: KeyboardShortcut::new(Modifiers::NONE, Key::F11),
            reset: KeyboardShortcut::new(Modifiers::NONE, Key::R),
            toggle_play: KeyboardShortcut::new(Modifiers::NONE, Key::Space),
        }
    }

    /// Consumes every bound key pressed this frame, one event per press.
    pub fn consume(&self, input: &mut InputState) -> Vec<UserEvent> {
        let bindings = [
            (&self.toggle_play, UserEvent::TogglePlay),
            (&self.reset, UserEvent::Reset),
            (&self.app_quit, UserEvent::RequestClose),
            (&self.fullscreen, UserEvent::ToggleFullscreen),
        ];

        let mut events = vec![];
        for (shortcut, event) in bindings {
            let presses = input.count_and_consume_key(shortcut.modifiers, shortcut.key);
            events.extend(std::iter::repeat(event).take(presses));
        }

        events
    }
}
