//! Win32 backend
//!
//! Message decoding, the virtual-key table and the WGL attribute lists are
//! plain data transformations and build on every host so they stay under
//! test. Everything that touches the OS is Windows-only.

pub(crate) mod keymap;
pub(crate) mod messages;
pub(crate) mod wgl;

#[cfg(windows)]
mod bootstrap;
#[cfg(windows)]
mod handles;
#[cfg(windows)]
mod window;

#[cfg(windows)]
pub(crate) use window::Win32Backend;

use crate::window::{WindowError, WindowResult};

/// Encode a string as NUL-terminated UTF-16
///
/// Interior NUL characters would silently truncate the string on the OS side,
/// so they are rejected.
pub(crate) fn encode_wide(text: &str) -> WindowResult<Vec<u16>> {
    if text.contains('\0') {
        return Err(WindowError::InvalidTitle);
    }
    Ok(text.encode_utf16().chain(std::iter::once(0)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_title() {
        let wide = encode_wide("birch").unwrap();
        assert_eq!(wide, [98, 105, 114, 99, 104, 0]);
    }

    #[test]
    fn test_non_ascii_title_round_trips() {
        let title = "Fenêtre 窓 🌲";
        let wide = encode_wide(title).unwrap();
        assert_eq!(wide.last(), Some(&0));
        // The tree is outside the BMP and needs a surrogate pair
        assert_eq!(wide.len(), title.chars().count() + 1 + 1);
        assert_eq!(String::from_utf16(&wide[..wide.len() - 1]).unwrap(), title);
    }

    #[test]
    fn test_empty_title_is_just_terminator() {
        assert_eq!(encode_wide("").unwrap(), [0]);
    }

    #[test]
    fn test_interior_nul_rejected() {
        assert!(matches!(encode_wide("bad\0title"), Err(WindowError::InvalidTitle)));
    }
}
