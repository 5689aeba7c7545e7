//! WGL extension attribute lists
//!
//! `wglChoosePixelFormatARB` and `wglCreateContextAttribsARB` take
//! zero-terminated `(name, value)` integer lists. These are built from the
//! [`ContextConfig`] here, independent of any live device context.

use crate::config::{ContextConfig, GlProfile};

// WGL_ARB_pixel_format
pub(crate) const DRAW_TO_WINDOW_ARB: i32 = 0x2001;
pub(crate) const ACCELERATION_ARB: i32 = 0x2003;
pub(crate) const SUPPORT_OPENGL_ARB: i32 = 0x2010;
pub(crate) const DOUBLE_BUFFER_ARB: i32 = 0x2011;
pub(crate) const PIXEL_TYPE_ARB: i32 = 0x2013;
pub(crate) const COLOR_BITS_ARB: i32 = 0x2014;
pub(crate) const ALPHA_BITS_ARB: i32 = 0x201B;
pub(crate) const DEPTH_BITS_ARB: i32 = 0x2022;
pub(crate) const STENCIL_BITS_ARB: i32 = 0x2023;
pub(crate) const FULL_ACCELERATION_ARB: i32 = 0x2027;
pub(crate) const TYPE_RGBA_ARB: i32 = 0x202B;

// WGL_ARB_multisample
pub(crate) const SAMPLE_BUFFERS_ARB: i32 = 0x2041;
pub(crate) const SAMPLES_ARB: i32 = 0x2042;

// WGL_ARB_create_context(_profile)
pub(crate) const CONTEXT_MAJOR_VERSION_ARB: i32 = 0x2091;
pub(crate) const CONTEXT_MINOR_VERSION_ARB: i32 = 0x2092;
pub(crate) const CONTEXT_FLAGS_ARB: i32 = 0x2094;
pub(crate) const CONTEXT_PROFILE_MASK_ARB: i32 = 0x9126;
pub(crate) const CONTEXT_CORE_PROFILE_BIT_ARB: i32 = 0x0001;
pub(crate) const CONTEXT_COMPATIBILITY_PROFILE_BIT_ARB: i32 = 0x0002;
pub(crate) const CONTEXT_DEBUG_BIT_ARB: i32 = 0x0001;

/// Legacy pixel format used for the bootstrap context
///
/// Only needs to be good enough to get `wglGetProcAddress` working.
pub(crate) struct LegacyPixelFormat {
    pub(crate) color_bits: u8,
    pub(crate) alpha_bits: u8,
    pub(crate) depth_bits: u8,
}

pub(crate) const BOOTSTRAP_PIXEL_FORMAT: LegacyPixelFormat = LegacyPixelFormat {
    color_bits: 32,
    alpha_bits: 8,
    depth_bits: 24,
};

/// Attribute list for `wglChoosePixelFormatARB`
///
/// Multisampling attributes are omitted entirely when no samples are wanted;
/// some drivers reject `SAMPLE_BUFFERS = 0`.
pub(crate) fn pixel_format_attribs(context: &ContextConfig) -> Vec<i32> {
    #[rustfmt::skip]
    let mut attribs = vec![
        DRAW_TO_WINDOW_ARB, 1,
        SUPPORT_OPENGL_ARB, 1,
        DOUBLE_BUFFER_ARB, 1,
        ACCELERATION_ARB, FULL_ACCELERATION_ARB,
        PIXEL_TYPE_ARB, TYPE_RGBA_ARB,
        COLOR_BITS_ARB, i32::from(context.color_bits),
        ALPHA_BITS_ARB, i32::from(context.alpha_bits),
        DEPTH_BITS_ARB, i32::from(context.depth_bits),
        STENCIL_BITS_ARB, i32::from(context.stencil_bits),
    ];

    if context.samples > 0 {
        attribs.extend_from_slice(&[SAMPLE_BUFFERS_ARB, 1, SAMPLES_ARB, i32::from(context.samples)]);
    }

    attribs.push(0);
    attribs
}

/// Attribute list for `wglCreateContextAttribsARB`
pub(crate) fn context_attribs(context: &ContextConfig) -> Vec<i32> {
    #[rustfmt::skip]
    let mut attribs = vec![
        CONTEXT_MAJOR_VERSION_ARB, i32::from(context.major_version),
        CONTEXT_MINOR_VERSION_ARB, i32::from(context.minor_version),
    ];

    if context.supports_profiles() {
        let mask = match context.profile {
            GlProfile::Core => CONTEXT_CORE_PROFILE_BIT_ARB,
            GlProfile::Compatibility => CONTEXT_COMPATIBILITY_PROFILE_BIT_ARB,
        };
        attribs.extend_from_slice(&[CONTEXT_PROFILE_MASK_ARB, mask]);
    }

    if context.debug {
        attribs.extend_from_slice(&[CONTEXT_FLAGS_ARB, CONTEXT_DEBUG_BIT_ARB]);
    }

    attribs.push(0);
    attribs
}

/// Value following `name` in a zero-terminated attribute list
#[cfg(test)]
fn attrib(list: &[i32], name: i32) -> Option<i32> {
    list.chunks_exact(2)
        .take_while(|pair| pair[0] != 0)
        .find(|pair| pair[0] == name)
        .map(|pair| pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pixel_format() {
        let attribs = pixel_format_attribs(&ContextConfig::default());

        assert_eq!(attribs.last(), Some(&0));
        assert_eq!(attribs.len() % 2, 1);
        assert_eq!(attrib(&attribs, DRAW_TO_WINDOW_ARB), Some(1));
        assert_eq!(attrib(&attribs, SUPPORT_OPENGL_ARB), Some(1));
        assert_eq!(attrib(&attribs, DOUBLE_BUFFER_ARB), Some(1));
        assert_eq!(attrib(&attribs, ACCELERATION_ARB), Some(FULL_ACCELERATION_ARB));
        assert_eq!(attrib(&attribs, PIXEL_TYPE_ARB), Some(TYPE_RGBA_ARB));
        assert_eq!(attrib(&attribs, COLOR_BITS_ARB), Some(32));
        assert_eq!(attrib(&attribs, ALPHA_BITS_ARB), Some(8));
        assert_eq!(attrib(&attribs, DEPTH_BITS_ARB), Some(24));
        assert_eq!(attrib(&attribs, STENCIL_BITS_ARB), Some(8));
        assert_eq!(attrib(&attribs, SAMPLE_BUFFERS_ARB), Some(1));
        assert_eq!(attrib(&attribs, SAMPLES_ARB), Some(4));
    }

    #[test]
    fn test_no_multisampling_omits_sample_attributes() {
        let attribs = pixel_format_attribs(&ContextConfig::default().with_samples(0));
        assert_eq!(attrib(&attribs, SAMPLE_BUFFERS_ARB), None);
        assert_eq!(attrib(&attribs, SAMPLES_ARB), None);
    }

    #[test]
    fn test_default_context_is_3_3_core() {
        let attribs = context_attribs(&ContextConfig::default());
        assert_eq!(attribs.last(), Some(&0));
        assert_eq!(attrib(&attribs, CONTEXT_MAJOR_VERSION_ARB), Some(3));
        assert_eq!(attrib(&attribs, CONTEXT_MINOR_VERSION_ARB), Some(3));
        assert_eq!(attrib(&attribs, CONTEXT_PROFILE_MASK_ARB), Some(CONTEXT_CORE_PROFILE_BIT_ARB));
        assert_eq!(attrib(&attribs, CONTEXT_FLAGS_ARB), None);
    }

    #[test]
    fn test_debug_compatibility_context() {
        let mut context = ContextConfig::default()
            .with_version(4, 6)
            .with_profile(GlProfile::Compatibility);
        context.debug = true;

        let attribs = context_attribs(&context);
        assert_eq!(
            attrib(&attribs, CONTEXT_PROFILE_MASK_ARB),
            Some(CONTEXT_COMPATIBILITY_PROFILE_BIT_ARB)
        );
        assert_eq!(attrib(&attribs, CONTEXT_FLAGS_ARB), Some(CONTEXT_DEBUG_BIT_ARB));
    }

    #[test]
    fn test_legacy_version_has_no_profile() {
        let context = ContextConfig::default()
            .with_version(2, 1)
            .with_profile(GlProfile::Compatibility);
        let attribs = context_attribs(&context);
        assert_eq!(attrib(&attribs, CONTEXT_PROFILE_MASK_ARB), None);
        assert_eq!(attrib(&attribs, CONTEXT_MAJOR_VERSION_ARB), Some(2));
    }
}
