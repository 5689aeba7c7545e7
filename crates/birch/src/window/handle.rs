//! Application-facing window handle
//!
//! [`Window`] owns exactly one platform backend and one [`WindowState`]. All
//! interaction with the OS happens inside [`Window::update`]: pending native
//! messages are translated into events, the events are applied to the state
//! in order and the registered callbacks run before `update` returns.
//!
//! # Example
//!
//! ```no_run
//! use birch::{Key, Window};
//!
//! let mut window = Window::create(800, 600, "birch")?;
//! window.set_key_pressed_callback(|key| {
//!     if key == Key::Escape {
//!         log::info!("escape pressed");
//!     }
//! });
//!
//! while !window.should_close() {
//!     window.update();
//! }
//! # Ok::<(), birch::WindowError>(())
//! ```

use std::ffi::c_void;
use std::fmt;

use crate::config::WindowConfig;
use crate::events::{EventQueue, WindowEvent};
use crate::input::{Key, MouseButton};
use crate::platform::{self, headless::HeadlessBackend};
use crate::window::backend::WindowBackend;
use crate::window::state::WindowState;
use crate::window::{WindowError, WindowResult};

/// A native window with an attached OpenGL context
///
/// Teardown is tied to ownership: dropping the window (or calling
/// [`destroy`](Self::destroy)) releases the context, the native window and its
/// class registration. A `Window` is neither `Send` nor `Sync`; it must be used
/// on the thread that created it.
pub struct Window {
    state: WindowState,
    backend: Box<dyn WindowBackend>,
    posted: EventQueue,
}

impl Window {
    /// Create a window with the given client size and title
    ///
    /// Every other setting comes from [`WindowConfig::default`].
    pub fn create(width: u32, height: u32, title: &str) -> WindowResult<Self> {
        Self::with_config(&WindowConfig::new(width, height, title))
    }

    /// Create a window from a full configuration
    ///
    /// On failure the error is logged and, when
    /// [`WindowConfig::error_dialog`] is set, shown in a native message box.
    /// Nothing allocated along the way outlives the call.
    pub fn with_config(config: &WindowConfig) -> WindowResult<Self> {
        let result = Self::open(config);
        if let Err(error) = &result {
            log::error!("Failed to create window \"{}\": {}", config.title.escape_debug(), error);
            if config.error_dialog {
                platform::show_error_dialog(&error.to_string());
            }
        }
        result
    }

    /// Create a window without a native surface or rendering context
    ///
    /// It behaves like a real window whose OS never sends anything: only
    /// events injected with [`post_event`](Self::post_event) are delivered.
    pub fn headless(width: u32, height: u32, title: &str) -> WindowResult<Self> {
        let config = WindowConfig::new(width, height, title);
        check(&config)?;
        Ok(Self::from_backend(&config, Box::new(HeadlessBackend)))
    }

    fn open(config: &WindowConfig) -> WindowResult<Self> {
        check(config)?;
        let backend = platform::create_native(config)?;
        log::info!(
            "Created window \"{}\" ({}x{}, OpenGL {}.{} {:?})",
            config.title,
            config.width,
            config.height,
            config.context.major_version,
            config.context.minor_version,
            config.context.profile
        );
        Ok(Self::from_backend(config, backend))
    }

    fn from_backend(config: &WindowConfig, backend: Box<dyn WindowBackend>) -> Self {
        Self {
            state: WindowState::new(config.width, config.height, config.title.as_str()),
            backend,
            posted: EventQueue::new(),
        }
    }

    /// Tear the window down now
    ///
    /// Equivalent to dropping it; consuming `self` makes a second teardown
    /// impossible.
    pub fn destroy(self) {
        drop(self);
    }

    /// Process every pending event, then present the back buffer
    ///
    /// Never blocks. Events posted with [`post_event`](Self::post_event) are
    /// applied first, followed by native events in arrival order.
    pub fn update(&mut self) {
        let mut events = std::mem::take(&mut self.posted);
        self.backend.poll_events(&mut events);

        while let Some(event) = events.pop() {
            self.state.apply(event, self.backend.as_mut());
        }

        if self.backend.has_context() && !self.state.should_close() {
            self.backend.present();
        }
    }

    /// Whether the window has been destroyed by the user or the OS
    ///
    /// Once true it stays true.
    pub fn should_close(&self) -> bool {
        self.state.should_close()
    }

    /// Queue an event for the next [`update`](Self::update)
    ///
    /// The event goes through exactly the same path as a native one: state is
    /// updated and the matching callback runs.
    pub fn post_event(&mut self, event: WindowEvent) {
        self.posted.send(event);
    }

    /// Client area width as of the last processed resize
    pub fn width(&self) -> u32 {
        self.state.width()
    }

    /// Client area height as of the last processed resize
    pub fn height(&self) -> u32 {
        self.state.height()
    }

    /// Client area `(width, height)`
    pub fn size(&self) -> (u32, u32) {
        (self.state.width(), self.state.height())
    }

    /// Title given at creation
    pub fn title(&self) -> &str {
        self.state.title()
    }

    /// Whether an OpenGL context is attached (false for headless windows)
    pub fn has_context(&self) -> bool {
        self.backend.has_context()
    }

    /// Resolve an OpenGL entry point through this window's context
    ///
    /// Makes the context current if needed. Returns null for unknown symbols
    /// and for headless windows.
    pub fn get_proc_address(&mut self, name: &str) -> *const c_void {
        self.backend.get_proc_address(name)
    }

    /// Called with the cursor position whenever it moves over the client area
    pub fn set_mouse_moved_callback(&mut self, callback: impl FnMut(i32, i32) + 'static) {
        self.state.callbacks.mouse_moved = Some(Box::new(callback));
    }

    /// Called with the new client size after each resize
    pub fn set_resize_callback(&mut self, callback: impl FnMut(u32, u32) + 'static) {
        self.state.callbacks.resize = Some(Box::new(callback));
    }

    /// Called for every key press, auto-repeat included
    pub fn set_key_pressed_callback(&mut self, callback: impl FnMut(Key) + 'static) {
        self.state.callbacks.key_pressed = Some(Box::new(callback));
    }

    /// Called for every key release
    pub fn set_key_released_callback(&mut self, callback: impl FnMut(Key) + 'static) {
        self.state.callbacks.key_released = Some(Box::new(callback));
    }

    /// Called for every mouse button press
    pub fn set_mouse_button_pressed_callback(&mut self, callback: impl FnMut(MouseButton) + 'static) {
        self.state.callbacks.mouse_button_pressed = Some(Box::new(callback));
    }

    /// Called for every mouse button release
    pub fn set_mouse_button_released_callback(&mut self, callback: impl FnMut(MouseButton) + 'static) {
        self.state.callbacks.mouse_button_released = Some(Box::new(callback));
    }

    /// Remove every registered callback
    pub fn clear_callbacks(&mut self) {
        self.state.callbacks.clear();
    }
}

/// Reject what the OS would reject, before touching it
fn check(config: &WindowConfig) -> WindowResult<()> {
    config.validate().map_err(WindowError::InvalidConfig)?;
    if config.title.contains('\0') {
        return Err(WindowError::InvalidTitle);
    }
    Ok(())
}

impl Drop for Window {
    fn drop(&mut self) {
        log::debug!("Destroying window \"{}\"", self.state.title());
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("state", &self.state)
            .field("has_context", &self.backend.has_context())
            .field("posted", &self.posted.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn window() -> Window {
        Window::headless(640, 480, "test").unwrap()
    }

    #[test]
    fn test_new_window_state() {
        let window = window();
        assert!(!window.should_close());
        assert_eq!(window.size(), (640, 480));
        assert_eq!(window.title(), "test");
        assert!(!window.has_context());
    }

    #[test]
    fn test_update_without_events_changes_nothing() {
        let mut window = window();
        window.update();
        window.update();
        assert!(!window.should_close());
        assert_eq!(window.size(), (640, 480));
    }

    #[test]
    fn test_destroy_event_sets_close_flag_permanently() {
        let mut window = window();
        window.post_event(WindowEvent::Destroyed);
        assert!(!window.should_close(), "posted events wait for update");

        window.update();
        assert!(window.should_close());

        window.update();
        window.post_event(WindowEvent::Resized { width: 1, height: 1 });
        window.update();
        assert!(window.should_close());
    }

    #[test]
    fn test_resize_updates_size_and_calls_back() {
        let mut window = window();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        window.set_resize_callback(move |w, h| sink.borrow_mut().push((w, h)));

        window.post_event(WindowEvent::Resized { width: 1280, height: 720 });
        window.update();

        assert_eq!(window.size(), (1280, 720));
        assert_eq!(*seen.borrow(), vec![(1280, 720)]);
    }

    #[test]
    fn test_resize_without_callback() {
        let mut window = window();
        window.post_event(WindowEvent::Resized { width: 320, height: 200 });
        window.update();
        assert_eq!((window.width(), window.height()), (320, 200));
    }

    #[test]
    fn test_last_registration_wins() {
        let mut window = window();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let counter = Rc::clone(&first);
        window.set_key_pressed_callback(move |_| counter.set(counter.get() + 1));
        let counter = Rc::clone(&second);
        window.set_key_pressed_callback(move |_| counter.set(counter.get() + 1));

        window.post_event(WindowEvent::KeyPressed(Key::Space));
        window.update();

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_events_delivered_in_order() {
        let mut window = window();
        let log = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&log);
        window.set_key_pressed_callback(move |key| sink.borrow_mut().push(format!("key {}", key.code())));
        let sink = Rc::clone(&log);
        window.set_mouse_moved_callback(move |x, y| sink.borrow_mut().push(format!("move {x} {y}")));
        let sink = Rc::clone(&log);
        window.set_mouse_button_released_callback(move |b| sink.borrow_mut().push(format!("up {}", b.index())));

        window.post_event(WindowEvent::MouseMoved { x: 5, y: 6 });
        window.post_event(WindowEvent::KeyPressed(Key::Escape));
        window.post_event(WindowEvent::MouseButtonReleased(MouseButton::Button5));
        window.update();

        assert_eq!(*log.borrow(), vec!["move 5 6", "key 256", "up 4"]);
    }

    #[test]
    fn test_clear_callbacks() {
        let mut window = window();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        window.set_mouse_button_pressed_callback(move |_| counter.set(counter.get() + 1));

        window.clear_callbacks();
        window.post_event(WindowEvent::MouseButtonPressed(MouseButton::LEFT));
        window.update();

        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_headless_has_no_gl() {
        let mut window = window();
        assert!(window.get_proc_address("glViewport").is_null());
    }

    #[test]
    fn test_invalid_size_rejected() {
        assert!(matches!(Window::headless(0, 480, "x"), Err(WindowError::InvalidConfig(_))));
        assert!(matches!(
            Window::with_config(&WindowConfig::new(640, 0, "x")),
            Err(WindowError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_interior_nul_title_rejected() {
        assert!(matches!(Window::headless(640, 480, "a\0b"), Err(WindowError::InvalidTitle)));
        assert!(matches!(Window::create(640, 480, "a\0b"), Err(WindowError::InvalidTitle)));
    }

    #[test]
    fn test_unicode_title_kept() {
        let window = Window::headless(10, 10, "birch 🌲 ウィンドウ").unwrap();
        assert_eq!(window.title(), "birch 🌲 ウィンドウ");
    }

    #[test]
    fn test_destroy_consumes() {
        let window = window();
        window.destroy();
    }

    #[test]
    #[ignore = "needs a desktop session with OpenGL"]
    fn test_native_window_can_be_recreated() {
        let config = WindowConfig::new(320, 240, "birch test").with_visible(false);

        let mut window = Window::with_config(&config).unwrap();
        assert!(window.has_context());
        assert_eq!(window.size(), (320, 240));
        assert!(!window.get_proc_address("glClear").is_null());
        window.update();
        window.destroy();

        let again = Window::with_config(&config).unwrap();
        assert!(!again.should_close());
    }
}
