//! Platform backends
//!
//! The native backend is chosen at compile time: Win32 with a WGL context on
//! Windows, GLFW everywhere else. The headless backend is always available.

#[cfg(any(windows, test))]
#[cfg_attr(not(windows), allow(dead_code))]
pub(crate) mod win32;

#[cfg(not(windows))]
pub(crate) mod glfw_backend;

pub(crate) mod headless;

use crate::config::WindowConfig;
use crate::window::backend::WindowBackend;
use crate::window::WindowResult;

#[cfg(windows)]
pub(crate) type NativeBackend = win32::Win32Backend;

#[cfg(not(windows))]
pub(crate) type NativeBackend = glfw_backend::GlfwBackend;

/// Create the native backend for this target
pub(crate) fn create_native(config: &WindowConfig) -> WindowResult<Box<dyn WindowBackend>> {
    Ok(Box::new(NativeBackend::new(config)?))
}

/// Report a construction failure to the user with a modal message box
#[cfg(windows)]
pub(crate) fn show_error_dialog(message: &str) {
    use windows_sys::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONERROR, MB_OK};

    let (Ok(text), Ok(caption)) = (win32::encode_wide(message), win32::encode_wide("Error")) else {
        return;
    };
    // SAFETY: both strings are NUL-terminated and outlive the call.
    unsafe {
        MessageBoxW(std::ptr::null_mut(), text.as_ptr(), caption.as_ptr(), MB_OK | MB_ICONERROR);
    }
}

/// Only Win32 has a native error dialog; the failure is already logged
#[cfg(not(windows))]
pub(crate) fn show_error_dialog(message: &str) {
    log::debug!("No native error dialog on this platform: {}", message);
}
