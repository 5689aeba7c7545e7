//! Window construction errors

use thiserror::Error;

/// Window management errors
///
/// Every variant is fatal for the window being constructed: nothing is retried
/// and no partially built window is ever returned.
#[derive(Error, Debug)]
pub enum WindowError {
    /// The configuration was rejected before any OS resource was touched
    #[error("Invalid window configuration: {0}")]
    InvalidConfig(String),

    /// The title cannot be handed to the OS
    #[error("Window title contains an interior NUL character")]
    InvalidTitle,

    /// The windowing system itself could not be initialized
    #[error("Windowing system initialization failed: {0}")]
    InitializationFailed(String),

    /// The window class could not be registered (already registered or rejected)
    #[error("Failed to register window class `{class}`: {source}")]
    ClassRegistration {
        /// Name of the class that was being registered
        class: String,
        /// OS error reported by the registration call
        #[source]
        source: std::io::Error,
    },

    /// The native window could not be created
    #[error("Window creation failed: {0}")]
    CreationFailed(String),

    /// No pixel format matches the requested framebuffer configuration
    #[error("Pixel format negotiation failed: {0}")]
    PixelFormat(String),

    /// The driver refused to create the rendering context
    #[error("OpenGL context creation failed: {0}")]
    ContextCreation(String),

    /// The rendering context could not be bound to the calling thread
    #[error("Failed to make OpenGL context current: {0}")]
    MakeCurrent(String),

    /// A required context-creation extension is not exposed by the driver
    #[error("Failed to load extension entry point `{0}`")]
    ExtensionLoad(&'static str),

    /// A required OpenGL entry point could not be resolved
    #[error("Failed to load OpenGL entry point `{0}`")]
    GlLoad(String),
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;
