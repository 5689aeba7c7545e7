//! Window events
//!
//! Backends translate native messages into [`WindowEvent`]s and push them into
//! an [`EventQueue`]. The window drains the queue once per `update`, applying
//! each event to its state and invoking the matching callback before `update`
//! returns, so delivery stays synchronous even though translation and dispatch
//! are decoupled.

use std::collections::VecDeque;

use crate::input::{Key, MouseButton};

/// Platform-independent window event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The native window was destroyed; the close flag becomes set
    Destroyed,
    /// The client area changed size (pixels)
    Resized {
        /// New client width
        width: u32,
        /// New client height
        height: u32,
    },
    /// The cursor moved inside the client area (pixels, origin top-left)
    MouseMoved {
        /// Horizontal position
        x: i32,
        /// Vertical position
        y: i32,
    },
    /// A key went down (auto-repeat included)
    KeyPressed(Key),
    /// A key went up
    KeyReleased(Key),
    /// A mouse button went down
    MouseButtonPressed(MouseButton),
    /// A mouse button went up
    MouseButtonReleased(MouseButton),
}

/// FIFO of translated events waiting for dispatch
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<WindowEvent>,
}

impl EventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event
    pub fn send(&mut self, event: WindowEvent) {
        self.events.push_back(event);
    }

    /// Move every event of `other` to the back of this queue, preserving order
    pub fn append(&mut self, other: &mut Self) {
        self.events.append(&mut other.events);
    }

    /// Remove and return the oldest event
    pub fn pop(&mut self) -> Option<WindowEvent> {
        self.events.pop_front()
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events are queued
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drop every queued event
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
