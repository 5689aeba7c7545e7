//! Backend-independent window state
//!
//! Holds everything about a window that does not depend on the platform:
//! the last known client size, the title, the close flag and the callback
//! table. Events coming out of a backend are applied here.

use crate::events::WindowEvent;
use crate::window::backend::WindowBackend;
use crate::window::callbacks::Callbacks;

#[derive(Debug)]
pub(crate) struct WindowState {
    width: u32,
    height: u32,
    title: String,
    should_close: bool,
    pub(crate) callbacks: Callbacks,
}

impl WindowState {
    pub(crate) fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
            should_close: false,
            callbacks: Callbacks::default(),
        }
    }

    pub(crate) const fn width(&self) -> u32 {
        self.width
    }

    pub(crate) const fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub(crate) const fn should_close(&self) -> bool {
        self.should_close
    }

    /// Apply one translated event: update state, adjust the backend's viewport
    /// on resize, then run the matching callback.
    pub(crate) fn apply(&mut self, event: WindowEvent, backend: &mut dyn WindowBackend) {
        match event {
            WindowEvent::Destroyed => {
                if !self.should_close {
                    log::debug!("Window '{}' destroyed, close requested", self.title);
                }
                self.should_close = true;
            }
            WindowEvent::Resized { width, height } => {
                self.width = width;
                self.height = height;
                if backend.has_context() {
                    backend.resize_viewport(width, height);
                }
                self.callbacks.resized(width, height);
            }
            WindowEvent::MouseMoved { x, y } => self.callbacks.mouse_moved(x, y),
            WindowEvent::KeyPressed(key) => self.callbacks.key_pressed(key),
            WindowEvent::KeyReleased(key) => self.callbacks.key_released(key),
            WindowEvent::MouseButtonPressed(button) => self.callbacks.mouse_button_pressed(button),
            WindowEvent::MouseButtonReleased(button) => self.callbacks.mouse_button_released(button),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventQueue;
    use crate::input::{Key, MouseButton};
    use std::cell::RefCell;
    use std::ffi::c_void;
    use std::rc::Rc;

    /// Backend double that records viewport changes
    #[derive(Default)]
    struct RecordingBackend {
        context: bool,
        viewports: Vec<(u32, u32)>,
    }

    impl WindowBackend for RecordingBackend {
        fn poll_events(&mut self, _queue: &mut EventQueue) {}

        fn has_context(&self) -> bool {
            self.context
        }

        fn resize_viewport(&mut self, width: u32, height: u32) {
            self.viewports.push((width, height));
        }

        fn present(&mut self) {}

        fn get_proc_address(&mut self, _name: &str) -> *const c_void {
            std::ptr::null()
        }
    }

    #[test]
    fn test_destroy_is_monotonic() {
        let mut state = WindowState::new(640, 480, "test");
        let mut backend = RecordingBackend::default();
        assert!(!state.should_close());

        state.apply(WindowEvent::Destroyed, &mut backend);
        assert!(state.should_close());

        state.apply(WindowEvent::Resized { width: 10, height: 10 }, &mut backend);
        state.apply(WindowEvent::Destroyed, &mut backend);
        assert!(state.should_close());
    }

    #[test]
    fn test_resize_updates_viewport_only_with_context() {
        let mut state = WindowState::new(640, 480, "test");

        let mut without_context = RecordingBackend::default();
        state.apply(WindowEvent::Resized { width: 800, height: 600 }, &mut without_context);
        assert_eq!((state.width(), state.height()), (800, 600));
        assert!(without_context.viewports.is_empty());

        let mut with_context = RecordingBackend { context: true, ..Default::default() };
        state.apply(WindowEvent::Resized { width: 1024, height: 768 }, &mut with_context);
        assert_eq!(with_context.viewports, vec![(1024, 768)]);
    }

    #[test]
    fn test_viewport_set_before_resize_callback() {
        let mut state = WindowState::new(1, 1, "test");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        state.callbacks.resize = Some(Box::new(move |w, h| sink.borrow_mut().push((w, h))));

        let mut backend = RecordingBackend { context: true, ..Default::default() };
        state.apply(WindowEvent::Resized { width: 0, height: 0 }, &mut backend);

        assert_eq!(backend.viewports, vec![(0, 0)]);
        assert_eq!(*seen.borrow(), vec![(0, 0)]);
    }

    #[test]
    fn test_input_events_reach_callbacks() {
        let mut state = WindowState::new(1, 1, "test");
        let log = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&log);
        state.callbacks.key_pressed = Some(Box::new(move |key| sink.borrow_mut().push(format!("down {key:?}"))));
        let sink = Rc::clone(&log);
        state.callbacks.key_released = Some(Box::new(move |key| sink.borrow_mut().push(format!("up {key:?}"))));
        let sink = Rc::clone(&log);
        state.callbacks.mouse_moved = Some(Box::new(move |x, y| sink.borrow_mut().push(format!("move {x},{y}"))));
        let sink = Rc::clone(&log);
        state.callbacks.mouse_button_pressed =
            Some(Box::new(move |button| sink.borrow_mut().push(format!("press {}", button.index()))));
        let sink = Rc::clone(&log);
        state.callbacks.mouse_button_released =
            Some(Box::new(move |button| sink.borrow_mut().push(format!("release {}", button.index()))));

        let mut backend = RecordingBackend::default();
        for event in [
            WindowEvent::KeyPressed(Key::W),
            WindowEvent::KeyReleased(Key::W),
            WindowEvent::MouseMoved { x: -3, y: 12 },
            WindowEvent::MouseButtonPressed(MouseButton::RIGHT),
            WindowEvent::MouseButtonReleased(MouseButton::RIGHT),
        ] {
            state.apply(event, &mut backend);
        }

        assert_eq!(
            *log.borrow(),
            vec!["down W", "up W", "move -3,12", "press 1", "release 1"]
        );
    }

    #[test]
    fn test_missing_callbacks_are_ignored() {
        let mut state = WindowState::new(1, 1, "test");
        let mut backend = RecordingBackend::default();
        state.apply(WindowEvent::KeyPressed(Key::Unknown), &mut backend);
        state.apply(WindowEvent::MouseButtonPressed(MouseButton::LEFT), &mut backend);
        state.apply(WindowEvent::Resized { width: 3, height: 4 }, &mut backend);
        assert_eq!((state.width(), state.height()), (3, 4));
    }
}
