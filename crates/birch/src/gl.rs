//! Minimal OpenGL entry-point table
//!
//! The window itself only needs a couple of GL calls (viewport on resize and
//! the version string for diagnostics). Everything else is the caller's
//! business: they load their own bindings through
//! [`Window::get_proc_address`](crate::Window::get_proc_address).

use std::ffi::{c_void, CStr};
use std::os::raw::c_char;

use crate::window::{WindowError, WindowResult};

const GL_VENDOR: u32 = 0x1F00;
const GL_RENDERER: u32 = 0x1F01;
const GL_VERSION: u32 = 0x1F02;

type ViewportFn = unsafe extern "system" fn(x: i32, y: i32, width: i32, height: i32);
type GetStringFn = unsafe extern "system" fn(name: u32) -> *const c_char;

/// GL functions resolved against the current context
pub(crate) struct GlFunctions {
    viewport: ViewportFn,
    get_string: GetStringFn,
}

impl GlFunctions {
    /// Resolve every entry point through `loader`
    ///
    /// The context the loader resolves against must be current on this thread.
    pub(crate) fn load<F>(mut loader: F) -> WindowResult<Self>
    where
        F: FnMut(&str) -> *const c_void,
    {
        let viewport = resolve(&mut loader, "glViewport")?;
        let get_string = resolve(&mut loader, "glGetString")?;

        // SAFETY: both pointers are non-null and were resolved by name for
        // exactly these signatures; GL uses the platform's system ABI.
        unsafe {
            Ok(Self {
                viewport: std::mem::transmute::<*const c_void, ViewportFn>(viewport),
                get_string: std::mem::transmute::<*const c_void, GetStringFn>(get_string),
            })
        }
    }

    pub(crate) fn viewport(&self, width: u32, height: u32) {
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let height = i32::try_from(height).unwrap_or(i32::MAX);
        // SAFETY: the owning backend keeps its context current while it lives.
        unsafe { (self.viewport)(0, 0, width, height) }
    }

    fn string(&self, name: u32) -> Option<String> {
        // SAFETY: glGetString returns null or a static NUL-terminated string.
        let ptr = unsafe { (self.get_string)(name) };
        if ptr.is_null() {
            return None;
        }
        Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
    }

    /// Driver version string, e.g. `"3.3.0 NVIDIA 550.54"`
    pub(crate) fn version(&self) -> Option<String> {
        self.string(GL_VERSION)
    }

    /// Log vendor, renderer and version of the current context
    pub(crate) fn log_driver_info(&self) {
        let unknown = || "<unknown>".to_string();
        log::info!(
            "OpenGL {} ({} / {})",
            self.version().unwrap_or_else(unknown),
            self.string(GL_VENDOR).unwrap_or_else(unknown),
            self.string(GL_RENDERER).unwrap_or_else(unknown),
        );
    }
}

fn resolve<F>(loader: &mut F, name: &str) -> WindowResult<*const c_void>
where
    F: FnMut(&str) -> *const c_void,
{
    let ptr = loader(name);
    if ptr.is_null() {
        log::error!("OpenGL entry point {} is unavailable", name);
        return Err(WindowError::GlLoad(name.to_string()));
    }
    Ok(ptr)
}
