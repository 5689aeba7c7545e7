//! Native Win32 window with a WGL context

use std::cell::RefCell;
use std::ffi::c_void;
use std::ptr;

use windows_sys::Win32::Foundation::{HMODULE, HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows_sys::Win32::Graphics::OpenGL::SwapBuffers;
use windows_sys::Win32::System::LibraryLoader::GetModuleHandleW;
use windows_sys::Win32::UI::WindowsAndMessaging::{
    AdjustWindowRectEx, DefWindowProcW, DispatchMessageW, PeekMessageW, ShowWindow, TranslateMessage,
    CREATESTRUCTW, CW_USEDEFAULT, GWLP_USERDATA, MSG, PM_REMOVE, SW_SHOW, WM_NCCREATE, WS_MAXIMIZEBOX,
    WS_OVERLAPPEDWINDOW, WS_THICKFRAME,
};

use crate::config::WindowConfig;
use crate::events::EventQueue;
use crate::gl::GlFunctions;
use crate::window::backend::WindowBackend;
use crate::window::WindowResult;

use super::bootstrap::{gl_symbol, WglExtensions};
use super::handles::{DeviceContext, GlContext, NativeWindow, WindowClass, WindowSpec};
use super::messages::{self, Disposition};
use super::encode_wide;

const WINDOW_CLASS: &str = "birch";

type SharedQueue = RefCell<EventQueue>;

/// Win32 window backend
///
/// Field order is teardown order: the GL context is released first, then the
/// device context, the window, its class and the title buffer. The event
/// queue goes last because `DestroyWindow` still delivers `WM_DESTROY` into
/// it.
pub(crate) struct Win32Backend {
    gl: GlFunctions,
    context: GlContext,
    dc: DeviceContext,
    window: NativeWindow,
    _class: WindowClass,
    _title: Vec<u16>,
    queue: Box<SharedQueue>,
    opengl32: HMODULE,
}

impl Win32Backend {
    pub(crate) fn new(config: &WindowConfig) -> WindowResult<Self> {
        // SAFETY: a null name returns the executable's own module.
        let instance = unsafe { GetModuleHandleW(ptr::null()) };

        let class = WindowClass::register(WINDOW_CLASS, instance, Some(window_proc))?;
        let title = encode_wide(&config.title)?;

        let (style, ex_style) = window_styles(config.resizable);
        let (outer_width, outer_height) = outer_size(config.width, config.height, style, ex_style);

        let queue: Box<SharedQueue> = Box::default();
        let window = NativeWindow::create(
            &class,
            &WindowSpec {
                title: &title,
                style,
                ex_style,
                x: CW_USEDEFAULT,
                y: CW_USEDEFAULT,
                width: outer_width,
                height: outer_height,
                create_param: ptr::from_ref::<SharedQueue>(&queue).cast(),
            },
        )?;
        let dc = DeviceContext::acquire(&window)?;

        let extensions = WglExtensions::load(instance)?;
        extensions.set_pixel_format(&dc, &config.context)?;
        let context = extensions.create_context(&dc, &config.context)?;
        context.make_current(&dc)?;

        let opengl32_name = encode_wide("opengl32.dll")?;
        // SAFETY: opengl32 is already loaded, the WGL calls above live in it.
        let opengl32 = unsafe { GetModuleHandleW(opengl32_name.as_ptr()) };

        let gl = GlFunctions::load(|name| gl_symbol(opengl32, name))?;
        gl.log_driver_info();
        extensions.set_swap_interval(config.vsync);

        if config.visible {
            // SAFETY: the window handle is valid. The return value is the
            // previous visibility, not an error.
            unsafe { ShowWindow(window.hwnd(), SW_SHOW) };
        }

        log::debug!(
            "Created Win32 window \"{}\" ({}x{} client, {}x{} outer)",
            config.title,
            config.width,
            config.height,
            outer_width,
            outer_height
        );

        Ok(Self {
            gl,
            context,
            dc,
            window,
            _class: class,
            _title: title,
            queue,
            opengl32,
        })
    }
}

fn window_styles(resizable: bool) -> (u32, u32) {
    let style = if resizable {
        WS_OVERLAPPEDWINDOW
    } else {
        WS_OVERLAPPEDWINDOW & !(WS_THICKFRAME | WS_MAXIMIZEBOX)
    };
    (style, 0)
}

/// Outer window size whose client area is `width` x `height`
fn outer_size(width: u32, height: u32, style: u32, ex_style: u32) -> (i32, i32) {
    let width = i32::try_from(width).unwrap_or(i32::MAX);
    let height = i32::try_from(height).unwrap_or(i32::MAX);
    let mut rect = RECT {
        left: 0,
        top: 0,
        right: width,
        bottom: height,
    };
    // SAFETY: `rect` is a valid, writable RECT.
    if unsafe { AdjustWindowRectEx(&mut rect, style, 0, ex_style) } == 0 {
        log::warn!("AdjustWindowRectEx failed, using the client size as the window size");
        return (width, height);
    }
    (rect.right - rect.left, rect.bottom - rect.top)
}

impl WindowBackend for Win32Backend {
    fn poll_events(&mut self, queue: &mut EventQueue) {
        if self.window.is_alive() {
            // SAFETY: all-zero is a valid MSG to be filled in.
            let mut msg: MSG = unsafe { std::mem::zeroed() };
            // SAFETY: standard non-blocking message pump for our window.
            unsafe {
                while PeekMessageW(&mut msg, self.window.hwnd(), 0, 0, PM_REMOVE) != 0 {
                    TranslateMessage(&msg);
                    DispatchMessageW(&msg);
                }
            }
        }

        match self.queue.try_borrow_mut() {
            Ok(mut pending) => queue.append(&mut *pending),
            Err(_) => log::warn!("Event queue busy, deferring events to the next update"),
        }
    }

    fn has_context(&self) -> bool {
        true
    }

    fn resize_viewport(&mut self, width: u32, height: u32) {
        self.gl.viewport(width, height);
    }

    fn present(&mut self) {
        if !self.window.is_alive() {
            return;
        }
        // SAFETY: the DC belongs to a live window with a double-buffered format.
        if unsafe { SwapBuffers(self.dc.hdc()) } == 0 {
            log::warn!("SwapBuffers failed: {}", std::io::Error::last_os_error());
        }
    }

    fn get_proc_address(&mut self, name: &str) -> *const c_void {
        if self.context.make_current(&self.dc).is_err() {
            return ptr::null();
        }
        gl_symbol(self.opengl32, name)
    }
}

#[cfg(target_pointer_width = "64")]
use windows_sys::Win32::UI::WindowsAndMessaging::{GetWindowLongPtrW, SetWindowLongPtrW};

#[cfg(target_pointer_width = "32")]
#[allow(non_snake_case)]
unsafe fn GetWindowLongPtrW(hwnd: HWND, index: i32) -> isize {
    windows_sys::Win32::UI::WindowsAndMessaging::GetWindowLongW(hwnd, index) as isize
}

#[cfg(target_pointer_width = "32")]
#[allow(non_snake_case)]
unsafe fn SetWindowLongPtrW(hwnd: HWND, index: i32, value: isize) -> isize {
    windows_sys::Win32::UI::WindowsAndMessaging::SetWindowLongW(hwnd, index, value as i32) as isize
}

/// Message procedure of the `birch` class
///
/// Decodes each message and queues the resulting event; the window applies
/// queued events on the next `update`. Must never unwind into the OS.
unsafe extern "system" fn window_proc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if msg == WM_NCCREATE {
        // SAFETY: for WM_NCCREATE, lparam points at the CREATESTRUCTW whose
        // lpCreateParams is the queue handed to CreateWindowExW.
        let create = lparam as *const CREATESTRUCTW;
        if !create.is_null() {
            SetWindowLongPtrW(hwnd, GWLP_USERDATA as _, (*create).lpCreateParams as isize);
        }
        return DefWindowProcW(hwnd, msg, wparam, lparam);
    }

    let decoded = messages::decode(msg, wparam, lparam);

    if let Some(event) = decoded.event {
        let queue = GetWindowLongPtrW(hwnd, GWLP_USERDATA as _) as *const SharedQueue;
        // SAFETY: the pointer was stored at WM_NCCREATE and the backend keeps
        // the boxed queue alive until after the window is destroyed.
        match queue.as_ref().map(RefCell::try_borrow_mut) {
            Some(Ok(mut queue)) => queue.send(event),
            Some(Err(_)) => log::warn!("Dropped {:?}: event queue busy", event),
            None => {}
        }
    }

    match decoded.disposition {
        Disposition::Handled => 0,
        Disposition::HandledTrue => 1,
        Disposition::Default => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_size_style_drops_frame() {
        let (resizable, _) = window_styles(true);
        let (fixed, _) = window_styles(false);
        assert_ne!(resizable & WS_THICKFRAME, 0);
        assert_eq!(fixed & WS_THICKFRAME, 0);
        assert_eq!(fixed & WS_MAXIMIZEBOX, 0);
    }

    #[test]
    fn test_outer_size_contains_client_area() {
        let (style, ex_style) = window_styles(true);
        let (width, height) = outer_size(640, 480, style, ex_style);
        assert!(width >= 640);
        assert!(height >= 480);
    }
}
