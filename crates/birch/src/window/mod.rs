//! Window management subsystem
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Application Code            │
//! └─────────────┬───────────────────┘
//!               │ Uses
//!         ┌─────▼─────┐
//!         │  Window   │ ← Public API (handle.rs)
//!         └─────┬─────┘
//!               │ Applies events to
//!      ┌────────▼────────┐
//!      │  WindowState    │ ← Size, close flag, callbacks (state.rs)
//!      └────────┬────────┘
//!               │ Drains events from
//!      ┌────────▼────────┐
//!      │ WindowBackend   │ ← Internal trait (backend.rs)
//!      └────────┬────────┘
//!               │ Implemented by
//!   ┌───────────▼───────────┐
//!   │ Win32Backend          │ ← Windows (platform/win32)
//!   │ GlfwBackend           │ ← Everything else (platform/glfw_backend.rs)
//!   │ HeadlessBackend       │ ← No display (platform/headless.rs)
//!   └───────────────────────┘
//! ```
//!
//! # Module Organization
//!
//! - **`handle`**: the application-facing [`Window`]
//! - **`backend`**: internal trait every platform implements
//! - **`state`**: platform-independent state and event application
//! - **`callbacks`**: the six callback slots
//! - **`error`**: construction errors

mod callbacks;
mod error;
mod handle;
mod state;

pub(crate) mod backend;

pub use callbacks::{KeyCallback, MouseButtonCallback, MouseMovedCallback, ResizeCallback};
pub use error::{WindowError, WindowResult};
pub use handle::Window;
