//! Callback table
//!
//! One optional slot per event kind. Setting a slot replaces whatever was
//! there; an empty slot means the event is dropped after the window state has
//! been updated.

use std::fmt;

use crate::input::{Key, MouseButton};

/// Cursor position callback, `(x, y)` in client pixels
pub type MouseMovedCallback = Box<dyn FnMut(i32, i32)>;
/// Client area size callback, `(width, height)` in pixels
pub type ResizeCallback = Box<dyn FnMut(u32, u32)>;
/// Key press/release callback
pub type KeyCallback = Box<dyn FnMut(Key)>;
/// Mouse button press/release callback
pub type MouseButtonCallback = Box<dyn FnMut(MouseButton)>;

#[derive(Default)]
pub(crate) struct Callbacks {
    pub(crate) mouse_moved: Option<MouseMovedCallback>,
    pub(crate) resize: Option<ResizeCallback>,
    pub(crate) key_pressed: Option<KeyCallback>,
    pub(crate) key_released: Option<KeyCallback>,
    pub(crate) mouse_button_pressed: Option<MouseButtonCallback>,
    pub(crate) mouse_button_released: Option<MouseButtonCallback>,
}

impl Callbacks {
    pub(crate) fn mouse_moved(&mut self, x: i32, y: i32) {
        if let Some(callback) = self.mouse_moved.as_mut() {
            callback(x, y);
        }
    }

    pub(crate) fn resized(&mut self, width: u32, height: u32) {
        if let Some(callback) = self.resize.as_mut() {
            callback(width, height);
        }
    }

    pub(crate) fn key_pressed(&mut self, key: Key) {
        if let Some(callback) = self.key_pressed.as_mut() {
            callback(key);
        }
    }

    pub(crate) fn key_released(&mut self, key: Key) {
        if let Some(callback) = self.key_released.as_mut() {
            callback(key);
        }
    }

    pub(crate) fn mouse_button_pressed(&mut self, button: MouseButton) {
        if let Some(callback) = self.mouse_button_pressed.as_mut() {
            callback(button);
        }
    }

    pub(crate) fn mouse_button_released(&mut self, button: MouseButton) {
        if let Some(callback) = self.mouse_button_released.as_mut() {
            callback(button);
        }
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("mouse_moved", &self.mouse_moved.is_some())
            .field("resize", &self.resize.is_some())
            .field("key_pressed", &self.key_pressed.is_some())
            .field("key_released", &self.key_released.is_some())
            .field("mouse_button_pressed", &self.mouse_button_pressed.is_some())
            .field("mouse_button_released", &self.mouse_button_released.is_some())
            .finish()
    }
}
