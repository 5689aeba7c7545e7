//! # birch
//!
//! A minimal windowing layer: one native window with an OpenGL context, a
//! non-blocking event pump and per-window input callbacks.
//!
//! ## Features
//!
//! - **Native windows**: Win32 with a WGL core-profile context on Windows,
//!   GLFW on Linux and macOS
//! - **Stable input codes**: [`Key`] and [`MouseButton`] keep the same integer
//!   values on every platform
//! - **Callbacks**: mouse motion, resize, key and mouse button press/release
//! - **Configuration**: [`WindowConfig`] loads from TOML or RON
//! - **Headless mode**: the full event and callback model without a display
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use birch::prelude::*;
//!
//! fn main() -> Result<(), WindowError> {
//!     birch::logging::init();
//!
//!     let mut window = Window::create(1280, 720, "birch")?;
//!     window.set_resize_callback(|width, height| log::info!("resized to {width}x{height}"));
//!
//!     while !window.should_close() {
//!         window.update();
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::cast_possible_truncation, clippy::cast_sign_loss)]

pub mod config;
pub mod events;
pub mod input;
pub mod logging;

mod gl;
mod platform;
mod window;

pub use config::{ContextConfig, GlProfile, WindowConfig};
pub use events::{EventQueue, WindowEvent};
pub use input::{Key, MouseButton};
pub use window::{
    KeyCallback, MouseButtonCallback, MouseMovedCallback, ResizeCallback, Window, WindowError, WindowResult,
};

/// Common imports for birch users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        ContextConfig, GlProfile, Key, MouseButton, Window, WindowConfig, WindowError, WindowEvent,
        WindowResult,
    };
}
