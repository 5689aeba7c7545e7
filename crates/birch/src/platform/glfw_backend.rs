//! GLFW-based window backend
//!
//! Used on every non-Windows target. GLFW negotiates the OpenGL context
//! itself (GLX/EGL on Linux, NSGL on macOS), so this backend only translates
//! the configuration into window hints and GLFW events into
//! [`WindowEvent`]s.
//!
//! Window sizes are reported in screen coordinates, the unit GLFW uses for
//! window geometry. The viewport tracks the framebuffer, which is larger on
//! HiDPI displays.

use std::ffi::c_void;

use glfw::{Action, Context, OpenGlProfileHint, SwapInterval, WindowHint, WindowMode};

use crate::config::{GlProfile, WindowConfig};
use crate::events::{EventQueue, WindowEvent};
use crate::gl::GlFunctions;
use crate::input::{Key, MouseButton};
use crate::window::backend::WindowBackend;
use crate::window::{WindowError, WindowResult};

/// GLFW window wrapper with proper resource management
///
/// Field order is teardown order: the window (and with it the context) goes
/// before the event receiver and the library handle.
pub(crate) struct GlfwBackend {
    gl: GlFunctions,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    glfw: glfw::Glfw,
}

impl GlfwBackend {
    pub(crate) fn new(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(log_glfw_error)
            .map_err(|e| WindowError::InitializationFailed(format!("{e:?}")))?;

        glfw.default_window_hints();
        for hint in context_hints(config) {
            glfw.window_hint(hint);
        }

        let (mut window, events) = glfw
            .create_window(config.width, config.height, &config.title, WindowMode::Windowed)
            .ok_or_else(|| {
                WindowError::CreationFailed(format!(
                    "GLFW could not create a {}x{} window with an OpenGL {}.{} context",
                    config.width, config.height, config.context.major_version, config.context.minor_version
                ))
            })?;

        window.make_current();
        if !window.is_current() {
            return Err(WindowError::MakeCurrent("GLFW context is not current after make_current".to_string()));
        }

        let gl = GlFunctions::load(|name| window.get_proc_address(name) as *const c_void)?;
        gl.log_driver_info();

        glfw.set_swap_interval(if config.vsync { SwapInterval::Sync(1) } else { SwapInterval::None });

        window.set_key_polling(true);
        window.set_close_polling(true);
        window.set_size_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_mouse_button_polling(true);

        if config.visible {
            window.show();
        }

        Ok(Self {
            gl,
            window,
            events,
            glfw,
        })
    }
}

/// GLFW error callback, routed through the `log` facade
#[allow(clippy::needless_pass_by_value)]
fn log_glfw_error(error: glfw::Error, description: String) {
    log::error!("{}", describe_error(error, &description));
}

fn describe_error(error: glfw::Error, description: &str) -> String {
    format!("GLFW error {error:?}: {description}")
}

fn context_hints(config: &WindowConfig) -> Vec<WindowHint> {
    let context = &config.context;
    let channel_bits = u32::from(context.color_bits.saturating_sub(context.alpha_bits).min(24)) / 3;

    let mut hints = vec![
        WindowHint::ClientApi(glfw::ClientApiHint::OpenGl),
        WindowHint::ContextVersion(u32::from(context.major_version), u32::from(context.minor_version)),
        WindowHint::OpenGlDebugContext(context.debug),
        WindowHint::RedBits(Some(channel_bits)),
        WindowHint::GreenBits(Some(channel_bits)),
        WindowHint::BlueBits(Some(channel_bits)),
        WindowHint::AlphaBits(Some(u32::from(context.alpha_bits))),
        WindowHint::DepthBits(Some(u32::from(context.depth_bits))),
        WindowHint::StencilBits(Some(u32::from(context.stencil_bits))),
        WindowHint::Samples((context.samples > 0).then_some(u32::from(context.samples))),
        WindowHint::DoubleBuffer(true),
        WindowHint::Resizable(config.resizable),
        // Shown explicitly once the context is ready
        WindowHint::Visible(false),
    ];

    if context.supports_profiles() {
        hints.push(WindowHint::OpenGlProfile(match context.profile {
            GlProfile::Core => OpenGlProfileHint::Core,
            GlProfile::Compatibility => OpenGlProfileHint::Compat,
        }));
        // macOS only hands out core contexts when forward compatibility is requested
        if cfg!(target_os = "macos") && context.profile == GlProfile::Core {
            hints.push(WindowHint::OpenGlForwardCompat(true));
        }
    }

    hints
}

/// GLFW's key numbering is the published enumeration, so the table is the
/// enumeration itself; keys outside it (WORLD_1, WORLD_2) become `Unknown`.
fn translate_key(key: glfw::Key) -> Key {
    Key::from_code(key as i32)
}

fn translate_button(button: glfw::MouseButton) -> Option<MouseButton> {
    MouseButton::from_index(button as i32)
}

const fn clamp_size(value: i32) -> u32 {
    if value < 0 {
        0
    } else {
        value as u32
    }
}

/// Framebuffer resizes are not translated; `poll_events` applies them to the viewport
fn translate_event(event: glfw::WindowEvent) -> Option<WindowEvent> {
    match event {
        glfw::WindowEvent::Close => Some(WindowEvent::Destroyed),
        glfw::WindowEvent::Size(width, height) => Some(WindowEvent::Resized {
            width: clamp_size(width),
            height: clamp_size(height),
        }),
        glfw::WindowEvent::Key(key, _, Action::Press | Action::Repeat, _) => {
            Some(WindowEvent::KeyPressed(translate_key(key)))
        }
        glfw::WindowEvent::Key(key, _, Action::Release, _) => Some(WindowEvent::KeyReleased(translate_key(key))),
        glfw::WindowEvent::CursorPos(x, y) => Some(WindowEvent::MouseMoved {
            x: x.floor() as i32,
            y: y.floor() as i32,
        }),
        glfw::WindowEvent::MouseButton(button, Action::Press, _) => {
            translate_button(button).map(WindowEvent::MouseButtonPressed)
        }
        glfw::WindowEvent::MouseButton(button, Action::Release, _) => {
            translate_button(button).map(WindowEvent::MouseButtonReleased)
        }
        _ => None,
    }
}

impl WindowBackend for GlfwBackend {
    fn poll_events(&mut self, queue: &mut EventQueue) {
        self.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&self.events) {
            if let glfw::WindowEvent::FramebufferSize(width, height) = event {
                self.gl.viewport(clamp_size(width), clamp_size(height));
            } else if let Some(event) = translate_event(event) {
                queue.send(event);
            }
        }
    }

    fn has_context(&self) -> bool {
        true
    }

    /// The arguments are in screen coordinates; the viewport needs pixels
    fn resize_viewport(&mut self, _width: u32, _height: u32) {
        let (width, height) = self.window.get_framebuffer_size();
        self.gl.viewport(clamp_size(width), clamp_size(height));
    }

    fn present(&mut self) {
        self.window.swap_buffers();
    }

    fn get_proc_address(&mut self, name: &str) -> *const c_void {
        self.window.get_proc_address(name) as *const c_void
    }
}
