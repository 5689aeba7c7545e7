//! Backend-agnostic window management trait
//!
//! This module defines the internal trait every platform backend implements.
//! It is not exposed to applications; [`Window`](crate::Window) owns a boxed
//! backend and drives it.
//!
//! Teardown is the backend's `Drop`: dropping the box releases the rendering
//! context, the native window and any class registration, in that order.

use std::ffi::c_void;

use crate::events::EventQueue;

/// Internal trait for window backend implementations
///
/// # Thread Safety
/// Backends hold thread-affine native handles (window, GL context), so the
/// trait carries no `Send` bound and every call must come from the thread
/// that created the window.
pub(crate) trait WindowBackend {
    /// Drain the native message queue without blocking
    ///
    /// Every message that maps to a [`WindowEvent`](crate::WindowEvent) is
    /// appended to `queue` in arrival order. Messages the backend does not
    /// translate still receive the platform's default processing.
    fn poll_events(&mut self, queue: &mut EventQueue);

    /// Whether a rendering context is attached to this window
    fn has_context(&self) -> bool;

    /// Resize the GL viewport to the new client area
    ///
    /// The size is in window coordinates. Backends whose framebuffer is
    /// measured in different units use their own pixel size instead.
    /// Only called when [`has_context`](Self::has_context) is true.
    fn resize_viewport(&mut self, width: u32, height: u32);

    /// Present the back buffer, if there is one
    fn present(&mut self);

    /// Resolve an OpenGL entry point through this window's context
    ///
    /// Returns null when the symbol is unknown or no context is attached.
    fn get_proc_address(&mut self, name: &str) -> *const c_void;
}
