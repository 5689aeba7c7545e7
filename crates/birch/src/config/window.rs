//! Window and rendering context settings

use serde::{Deserialize, Serialize};

use super::Config;

/// OpenGL profile requested from the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlProfile {
    /// Core profile (3.2 and later)
    #[default]
    Core,
    /// Compatibility profile, legacy entry points remain available
    Compatibility,
}

/// # Rendering Context Configuration
///
/// Framebuffer layout and API version negotiated during context creation.
/// The defaults request an OpenGL 3.3 core context with a 32-bit color
/// buffer, 8-bit alpha, 24-bit depth, 8-bit stencil and 4x multisampling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Requested major version
    pub major_version: u8,
    /// Requested minor version
    pub minor_version: u8,
    /// Requested profile
    pub profile: GlProfile,
    /// Color buffer bits
    pub color_bits: u8,
    /// Alpha channel bits
    pub alpha_bits: u8,
    /// Depth buffer bits
    pub depth_bits: u8,
    /// Stencil buffer bits
    pub stencil_bits: u8,
    /// Multisample count, 0 disables multisampling
    pub samples: u8,
    /// Request a debug context
    pub debug: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            major_version: 3,
            minor_version: 3,
            profile: GlProfile::Core,
            color_bits: 32,
            alpha_bits: 8,
            depth_bits: 24,
            stencil_bits: 8,
            samples: 4,
            debug: false,
        }
    }
}

impl ContextConfig {
    /// Set the requested API version
    pub fn with_version(mut self, major: u8, minor: u8) -> Self {
        self.major_version = major;
        self.minor_version = minor;
        self
    }

    /// Set the requested profile
    pub fn with_profile(mut self, profile: GlProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Set the multisample count
    pub fn with_samples(mut self, samples: u8) -> Self {
        self.samples = samples;
        self
    }

    /// Whether a core/compatibility profile can be requested at all
    ///
    /// Profiles only exist from OpenGL 3.2 onwards.
    pub fn supports_profiles(&self) -> bool {
        (self.major_version, self.minor_version) >= (3, 2)
    }

    /// Validate the context request
    pub fn validate(&self) -> Result<(), String> {
        if self.major_version == 0 {
            return Err("OpenGL major version must be at least 1".to_string());
        }
        if self.profile == GlProfile::Core && !self.supports_profiles() {
            return Err(format!(
                "core profile requires OpenGL 3.2 or later, {}.{} requested",
                self.major_version, self.minor_version
            ));
        }
        if self.samples != 0 && !self.samples.is_power_of_two() {
            return Err(format!("sample count must be 0 or a power of two, got {}", self.samples));
        }
        if self.alpha_bits > self.color_bits {
            return Err(format!(
                "alpha bits ({}) exceed color bits ({})",
                self.alpha_bits, self.color_bits
            ));
        }
        Ok(())
    }
}

/// # Window Configuration
///
/// Everything needed to construct a [`Window`](crate::Window).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Client area width in pixels
    pub width: u32,
    /// Client area height in pixels
    pub height: u32,
    /// Title bar text
    pub title: String,
    /// Whether the user can resize the window
    pub resizable: bool,
    /// Show the window as soon as it is created
    pub visible: bool,
    /// Synchronize buffer swaps with the display refresh
    pub vsync: bool,
    /// Show a native message box when construction fails (Win32 only)
    pub error_dialog: bool,
    /// Rendering context settings
    pub context: ContextConfig,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            title: "birch".to_string(),
            resizable: true,
            visible: true,
            vsync: true,
            error_dialog: false,
            context: ContextConfig::default(),
        }
    }
}

impl WindowConfig {
    /// Create a configuration with the given size and title, defaults elsewhere
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
            ..Self::default()
        }
    }

    /// Replace the context settings
    pub fn with_context(mut self, context: ContextConfig) -> Self {
        self.context = context;
        self
    }

    /// Set whether the window starts visible
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set vertical synchronization
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Validate the configuration before any OS resource is allocated
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }
        // Win32 and X11 both take signed 32-bit sizes
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(format!("window size {}x{} is out of range", self.width, self.height));
        }
        self.context.validate()
    }
}

impl Config for WindowConfig {}
