//! Two-phase WGL context bootstrap
//!
//! The ARB entry points needed to pick a multisampled pixel format and request
//! a versioned core context are only reachable through `wglGetProcAddress`,
//! which needs a current context. So a throwaway window gets a legacy pixel
//! format and context first, the extensions are resolved, and the throwaway
//! resources are released before the real window is configured.

use std::ffi::{c_void, CStr};
use std::ptr;

use windows_sys::Win32::Foundation::{BOOL, HINSTANCE, HMODULE};
use windows_sys::Win32::Graphics::Gdi::HDC;
use windows_sys::Win32::Graphics::OpenGL::{
    ChoosePixelFormat, DescribePixelFormat, SetPixelFormat, wglGetProcAddress, HGLRC,
    PFD_DOUBLEBUFFER, PFD_DRAW_TO_WINDOW, PFD_MAIN_PLANE, PFD_SUPPORT_OPENGL, PFD_TYPE_RGBA,
    PIXELFORMATDESCRIPTOR,
};
use windows_sys::Win32::System::LibraryLoader::GetProcAddress;
use windows_sys::Win32::UI::WindowsAndMessaging::{DefWindowProcW, WS_CLIPCHILDREN, WS_CLIPSIBLINGS};

use crate::config::ContextConfig;
use crate::window::{WindowError, WindowResult};

use super::handles::{DeviceContext, GlContext, NativeWindow, WindowClass, WindowSpec};
use super::{encode_wide, wgl};

const BOOTSTRAP_CLASS: &str = "birch_fake";

type ChoosePixelFormatArb = unsafe extern "system" fn(
    hdc: HDC,
    int_attribs: *const i32,
    float_attribs: *const f32,
    max_formats: u32,
    formats: *mut i32,
    num_formats: *mut u32,
) -> BOOL;
type CreateContextAttribsArb =
    unsafe extern "system" fn(hdc: HDC, share_context: HGLRC, attribs: *const i32) -> HGLRC;
type SwapIntervalExt = unsafe extern "system" fn(interval: i32) -> BOOL;

/// WGL extension entry points resolved through a bootstrap context
pub(crate) struct WglExtensions {
    choose_pixel_format: ChoosePixelFormatArb,
    create_context_attribs: CreateContextAttribsArb,
    swap_interval: Option<SwapIntervalExt>,
}

impl WglExtensions {
    /// Resolve the extensions through a temporary window and context
    pub(crate) fn load(instance: HINSTANCE) -> WindowResult<Self> {
        // Locals drop in reverse: context, DC, window, class
        let class = WindowClass::register(BOOTSTRAP_CLASS, instance, Some(DefWindowProcW))?;
        let title = encode_wide(BOOTSTRAP_CLASS)?;
        let window = NativeWindow::create(
            &class,
            &WindowSpec {
                title: &title,
                style: WS_CLIPSIBLINGS | WS_CLIPCHILDREN,
                ex_style: 0,
                x: 0,
                y: 0,
                width: 1,
                height: 1,
                create_param: ptr::null(),
            },
        )?;
        let dc = DeviceContext::acquire(&window)?;
        set_legacy_pixel_format(&dc)?;
        let context = GlContext::create_legacy(&dc)?;
        context.make_current(&dc)?;

        // SAFETY: the bootstrap context is current; each pointer is cast to the
        // signature documented by its extension.
        let extensions = unsafe {
            Self {
                choose_pixel_format: std::mem::transmute::<*const c_void, ChoosePixelFormatArb>(
                    required_extension(c"wglChoosePixelFormatARB", "wglChoosePixelFormatARB")?,
                ),
                create_context_attribs: std::mem::transmute::<*const c_void, CreateContextAttribsArb>(
                    required_extension(c"wglCreateContextAttribsARB", "wglCreateContextAttribsARB")?,
                ),
                swap_interval: wgl_symbol(c"wglSwapIntervalEXT")
                    .map(|ptr| std::mem::transmute::<*const c_void, SwapIntervalExt>(ptr)),
            }
        };

        if extensions.swap_interval.is_none() {
            log::debug!("wglSwapIntervalEXT unavailable, vsync setting will be ignored");
        }
        Ok(extensions)
    }

    /// Choose and set the pixel format of the real window
    pub(crate) fn set_pixel_format(&self, dc: &DeviceContext, context: &ContextConfig) -> WindowResult<()> {
        let attribs = wgl::pixel_format_attribs(context);
        let mut format = 0_i32;
        let mut count = 0_u32;

        // SAFETY: the attribute list is zero-terminated and the out pointers
        // have room for one format.
        let ok = unsafe {
            (self.choose_pixel_format)(dc.hdc(), attribs.as_ptr(), ptr::null(), 1, &mut format, &mut count)
        };
        if ok == 0 || count == 0 {
            return Err(WindowError::PixelFormat(format!(
                "no pixel format with {} color, {} alpha, {} depth, {} stencil bits and {} samples",
                context.color_bits, context.alpha_bits, context.depth_bits, context.stencil_bits, context.samples
            )));
        }

        // SAFETY: all-zero is a valid descriptor to be filled in.
        let mut descriptor: PIXELFORMATDESCRIPTOR = unsafe { std::mem::zeroed() };
        // SAFETY: `format` was returned for this DC and `descriptor` is writable.
        let described = unsafe {
            DescribePixelFormat(
                dc.hdc(),
                format as _,
                std::mem::size_of::<PIXELFORMATDESCRIPTOR>() as u32,
                &mut descriptor,
            )
        };
        if described == 0 {
            return Err(WindowError::PixelFormat(format!(
                "cannot describe pixel format {}: {}",
                format,
                std::io::Error::last_os_error()
            )));
        }

        // SAFETY: the DC has no pixel format yet; the descriptor matches `format`.
        if unsafe { SetPixelFormat(dc.hdc(), format, &descriptor) } == 0 {
            return Err(WindowError::PixelFormat(format!(
                "cannot set pixel format {}: {}",
                format,
                std::io::Error::last_os_error()
            )));
        }

        log::debug!("Selected pixel format {}", format);
        Ok(())
    }

    /// Create the versioned context on a DC configured by [`Self::set_pixel_format`]
    pub(crate) fn create_context(&self, dc: &DeviceContext, context: &ContextConfig) -> WindowResult<GlContext> {
        let attribs = wgl::context_attribs(context);
        // SAFETY: the attribute list is zero-terminated; no share context.
        let hglrc = unsafe { (self.create_context_attribs)(dc.hdc(), ptr::null_mut(), attribs.as_ptr()) };
        GlContext::from_raw(hglrc).map_err(|e| match e {
            WindowError::ContextCreation(reason) => WindowError::ContextCreation(format!(
                "OpenGL {}.{} {:?}: {}",
                context.major_version, context.minor_version, context.profile, reason
            )),
            other => other,
        })
    }

    /// Apply the swap interval to the current context
    pub(crate) fn set_swap_interval(&self, vsync: bool) {
        let Some(swap_interval) = self.swap_interval else {
            return;
        };
        // SAFETY: a context is current on this thread.
        if unsafe { swap_interval(i32::from(vsync)) } == 0 {
            log::warn!("wglSwapIntervalEXT({}) failed", i32::from(vsync));
        }
    }
}

fn set_legacy_pixel_format(dc: &DeviceContext) -> WindowResult<()> {
    let format = wgl::BOOTSTRAP_PIXEL_FORMAT;

    // SAFETY: all-zero is a valid descriptor; fields are filled below.
    let mut descriptor: PIXELFORMATDESCRIPTOR = unsafe { std::mem::zeroed() };
    descriptor.nSize = std::mem::size_of::<PIXELFORMATDESCRIPTOR>() as u16;
    descriptor.nVersion = 1;
    descriptor.dwFlags = PFD_DRAW_TO_WINDOW | PFD_SUPPORT_OPENGL | PFD_DOUBLEBUFFER;
    descriptor.iPixelType = PFD_TYPE_RGBA as _;
    descriptor.cColorBits = format.color_bits;
    descriptor.cAlphaBits = format.alpha_bits;
    descriptor.cDepthBits = format.depth_bits;
    descriptor.iLayerType = PFD_MAIN_PLANE as _;

    // SAFETY: the DC is valid and the descriptor is initialized.
    let chosen = unsafe { ChoosePixelFormat(dc.hdc(), &descriptor) };
    if chosen == 0 {
        return Err(WindowError::PixelFormat(format!(
            "no legacy pixel format for the bootstrap context: {}",
            std::io::Error::last_os_error()
        )));
    }
    // SAFETY: as above; the fake window's DC has no format yet.
    if unsafe { SetPixelFormat(dc.hdc(), chosen, &descriptor) } == 0 {
        return Err(WindowError::PixelFormat(format!(
            "cannot set legacy pixel format: {}",
            std::io::Error::last_os_error()
        )));
    }
    Ok(())
}

fn required_extension(symbol: &CStr, name: &'static str) -> WindowResult<*const c_void> {
    wgl_symbol(symbol).ok_or_else(|| {
        log::error!("WGL extension entry point {} is unavailable", name);
        WindowError::ExtensionLoad(name)
    })
}

/// `wglGetProcAddress` signals failure with null and, on some drivers, with
/// the small sentinel values 1, 2, 3 or -1
fn wgl_symbol(symbol: &CStr) -> Option<*const c_void> {
    // SAFETY: the name is NUL-terminated.
    let proc = unsafe { wglGetProcAddress(symbol.as_ptr().cast()) }?;
    let address = proc as usize;
    if matches!(address, 1..=3) || address == usize::MAX {
        return None;
    }
    Some(address as *const c_void)
}

/// Resolve a GL entry point for the current context
///
/// Core 1.1 functions are not returned by `wglGetProcAddress` and come from
/// `opengl32.dll` itself.
pub(crate) fn gl_symbol(opengl32: HMODULE, name: &str) -> *const c_void {
    let Ok(symbol) = std::ffi::CString::new(name) else {
        return ptr::null();
    };
    if let Some(address) = wgl_symbol(&symbol) {
        return address;
    }
    if opengl32.is_null() {
        return ptr::null();
    }
    // SAFETY: the module handle is valid for the process lifetime and the
    // name is NUL-terminated.
    unsafe { GetProcAddress(opengl32, symbol.as_ptr().cast()) }.map_or(ptr::null(), |proc| proc as *const c_void)
}
