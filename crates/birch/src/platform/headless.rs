//! Backend without a native surface
//!
//! Used for tests and tools that want the window's event and callback model
//! without a display. It never produces events of its own and has no
//! rendering context, so only events posted through
//! [`Window::post_event`](crate::Window::post_event) are delivered.

use std::ffi::c_void;

use crate::events::EventQueue;
use crate::window::backend::WindowBackend;

#[derive(Debug, Default)]
pub(crate) struct HeadlessBackend;

impl WindowBackend for HeadlessBackend {
    fn poll_events(&mut self, _queue: &mut EventQueue) {}

    fn has_context(&self) -> bool {
        false
    }

    fn resize_viewport(&mut self, _width: u32, _height: u32) {}

    fn present(&mut self) {}

    fn get_proc_address(&mut self, _name: &str) -> *const c_void {
        std::ptr::null()
    }
}
