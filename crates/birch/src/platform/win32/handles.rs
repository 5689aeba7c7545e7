//! Owning wrappers around raw Win32 handles
//!
//! Each guard releases exactly one OS resource in `Drop`, so partially
//! constructed windows unwind correctly through `?`. Release failures are
//! logged, never raised.

use std::ffi::c_void;
use std::io;
use std::ptr;

use windows_sys::Win32::Foundation::{HINSTANCE, HWND};
use windows_sys::Win32::Graphics::Gdi::{GetDC, ReleaseDC, HDC};
use windows_sys::Win32::Graphics::OpenGL::{
    wglCreateContext, wglDeleteContext, wglGetCurrentContext, wglMakeCurrent, HGLRC,
};
use windows_sys::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DestroyWindow, IsWindow, LoadCursorW, RegisterClassExW, UnregisterClassW,
    CS_OWNDC, IDC_ARROW, WNDCLASSEXW, WNDPROC,
};

use crate::window::{WindowError, WindowResult};

use super::encode_wide;

/// A registered window class
pub(crate) struct WindowClass {
    name: Vec<u16>,
    label: String,
    instance: HINSTANCE,
}

impl WindowClass {
    pub(crate) fn register(label: &str, instance: HINSTANCE, wndproc: WNDPROC) -> WindowResult<Self> {
        let name = encode_wide(label)?;

        // SAFETY: all-zero is a valid WNDCLASSEXW; required fields are set below.
        let mut class: WNDCLASSEXW = unsafe { std::mem::zeroed() };
        class.cbSize = std::mem::size_of::<WNDCLASSEXW>() as u32;
        class.style = CS_OWNDC;
        class.lpfnWndProc = wndproc;
        class.hInstance = instance;
        // SAFETY: loading a predefined system cursor.
        class.hCursor = unsafe { LoadCursorW(ptr::null_mut(), IDC_ARROW) };
        class.lpszClassName = name.as_ptr();

        // SAFETY: `class` and the name buffer it points to are alive for the call.
        if unsafe { RegisterClassExW(&class) } == 0 {
            return Err(WindowError::ClassRegistration {
                class: label.to_string(),
                source: io::Error::last_os_error(),
            });
        }

        log::debug!("Registered window class {}", label);
        Ok(Self {
            name,
            label: label.to_string(),
            instance,
        })
    }

    pub(crate) fn name(&self) -> *const u16 {
        self.name.as_ptr()
    }

    pub(crate) fn instance(&self) -> HINSTANCE {
        self.instance
    }
}

impl Drop for WindowClass {
    fn drop(&mut self) {
        // SAFETY: the class was registered with this name and instance.
        if unsafe { UnregisterClassW(self.name.as_ptr(), self.instance) } == 0 {
            log::warn!(
                "Failed to unregister window class {}: {}",
                self.label,
                io::Error::last_os_error()
            );
        }
    }
}

/// Parameters for [`NativeWindow::create`]
pub(crate) struct WindowSpec<'a> {
    pub(crate) title: &'a [u16],
    pub(crate) style: u32,
    pub(crate) ex_style: u32,
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) width: i32,
    pub(crate) height: i32,
    /// Passed through `CREATESTRUCTW::lpCreateParams`
    pub(crate) create_param: *const c_void,
}

/// A native window handle
pub(crate) struct NativeWindow {
    hwnd: HWND,
}

impl NativeWindow {
    pub(crate) fn create(class: &WindowClass, spec: &WindowSpec<'_>) -> WindowResult<Self> {
        // SAFETY: the class is registered and the title is NUL-terminated.
        let hwnd = unsafe {
            CreateWindowExW(
                spec.ex_style,
                class.name(),
                spec.title.as_ptr(),
                spec.style,
                spec.x,
                spec.y,
                spec.width,
                spec.height,
                ptr::null_mut(),
                ptr::null_mut(),
                class.instance(),
                spec.create_param,
            )
        };

        if hwnd.is_null() {
            return Err(WindowError::CreationFailed(io::Error::last_os_error().to_string()));
        }
        Ok(Self { hwnd })
    }

    pub(crate) fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// Whether the OS still considers the handle a window
    pub(crate) fn is_alive(&self) -> bool {
        // SAFETY: IsWindow accepts stale handles.
        unsafe { IsWindow(self.hwnd) != 0 }
    }
}

impl Drop for NativeWindow {
    fn drop(&mut self) {
        // Closing through the system menu already destroyed it
        if !self.is_alive() {
            return;
        }
        // SAFETY: we own the handle and it is still a window.
        if unsafe { DestroyWindow(self.hwnd) } == 0 {
            log::warn!("Failed to destroy window: {}", io::Error::last_os_error());
        }
    }
}

/// The window's device context
///
/// `CS_OWNDC` gives the window a private DC, so it stays valid for the
/// window's lifetime.
pub(crate) struct DeviceContext {
    hwnd: HWND,
    hdc: HDC,
}

impl DeviceContext {
    pub(crate) fn acquire(window: &NativeWindow) -> WindowResult<Self> {
        // SAFETY: the window handle is valid.
        let hdc = unsafe { GetDC(window.hwnd()) };
        if hdc.is_null() {
            return Err(WindowError::CreationFailed(format!(
                "no device context: {}",
                io::Error::last_os_error()
            )));
        }
        Ok(Self {
            hwnd: window.hwnd(),
            hdc,
        })
    }

    pub(crate) fn hdc(&self) -> HDC {
        self.hdc
    }
}

impl Drop for DeviceContext {
    fn drop(&mut self) {
        // SAFETY: IsWindow accepts stale handles.
        if unsafe { IsWindow(self.hwnd) } == 0 {
            return;
        }
        // SAFETY: the DC was obtained from this window.
        if unsafe { ReleaseDC(self.hwnd, self.hdc) } == 0 {
            log::warn!("Failed to release device context");
        }
    }
}

/// An OpenGL rendering context
pub(crate) struct GlContext {
    hglrc: HGLRC,
}

impl GlContext {
    /// Legacy context on a DC whose pixel format is already set
    pub(crate) fn create_legacy(dc: &DeviceContext) -> WindowResult<Self> {
        // SAFETY: the DC is valid and has a pixel format.
        let hglrc = unsafe { wglCreateContext(dc.hdc()) };
        Self::from_raw(hglrc)
    }

    pub(crate) fn from_raw(hglrc: HGLRC) -> WindowResult<Self> {
        if hglrc.is_null() {
            return Err(WindowError::ContextCreation(io::Error::last_os_error().to_string()));
        }
        Ok(Self { hglrc })
    }

    pub(crate) fn make_current(&self, dc: &DeviceContext) -> WindowResult<()> {
        // SAFETY: both handles are valid and owned by the caller.
        if unsafe { wglMakeCurrent(dc.hdc(), self.hglrc) } == 0 {
            return Err(WindowError::MakeCurrent(io::Error::last_os_error().to_string()));
        }
        Ok(())
    }

    fn is_current(&self) -> bool {
        // SAFETY: no preconditions.
        unsafe { wglGetCurrentContext() == self.hglrc }
    }
}

impl Drop for GlContext {
    fn drop(&mut self) {
        // SAFETY: releasing the current binding and deleting a context we own.
        unsafe {
            if self.is_current() && wglMakeCurrent(ptr::null_mut(), ptr::null_mut()) == 0 {
                log::warn!("Failed to release current GL context: {}", io::Error::last_os_error());
            }
            if wglDeleteContext(self.hglrc) == 0 {
                log::warn!("Failed to delete GL context: {}", io::Error::last_os_error());
            }
        }
    }
}
