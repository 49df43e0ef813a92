use winit::event_loop::EventLoopProxy;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AppStatus {
    Info,
    Warning,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UserEvent {
    RequestClose,
    Reset,
    Save,
    ToggleFullscreen,
    TogglePlay,
}

pub trait EventProxy<T> {
    fn send_event(&self, event: T);
}

#[derive(Debug, Default)]
pub struct AppResponse {
    pub exit: bool,
    pub request_redraw: bool,
}

pub struct EventProxyWinit<T: 'static> {
    inner: EventLoopProxy<T>,
}

impl<T: std::fmt::Debug> EventProxy<T> for EventProxyWinit<T> {
    fn send_event(&self, event: T) {
        if let Err(err) = self.inner.send_event(event) {
            log::warn!("Failed to send event: {}", err);
        }
    }
}

impl<T> EventProxyWinit<T> {
    pub fn from_proxy(inner: EventLoopProxy<T>) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Collects events instead of forwarding them to an event loop.
    #[derive(Default)]
    pub(crate) struct RecordingProxy {
        pub(crate) events: RefCell<Vec<UserEvent>>,
    }

    impl EventProxy<UserEvent> for RecordingProxy {
        fn send_event(&self, event: UserEvent) {
            self.events.borrow_mut().push(event);
        }
    }
}
