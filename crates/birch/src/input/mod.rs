//! Keyboard and mouse identifiers
//!
//! [`Key`] and [`MouseButton`] are part of the stable ABI surface: their integer
//! values never change between releases or platforms, so callers can persist
//! them (key bindings, replays) or pass them across an FFI boundary.
//!
//! Platform backends translate their native codes into these enumerations; see
//! the per-backend key tables under `platform`.

use serde::{Deserialize, Serialize};

/// Platform-independent key identifier
///
/// Values follow the published enumeration: printable keys use their ASCII
/// value, function and modifier keys start at 256. Any native key without a
/// mapping is reported as [`Key::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(i32)]
#[allow(missing_docs)]
pub enum Key {
    /// A key with no mapping on this platform
    Unknown = -1,

    // Printable keys
    Space = 32,
    Apostrophe = 39,
    Comma = 44,
    Minus = 45,
    Period = 46,
    Slash = 47,
    Num0 = 48,
    Num1 = 49,
    Num2 = 50,
    Num3 = 51,
    Num4 = 52,
    Num5 = 53,
    Num6 = 54,
    Num7 = 55,
    Num8 = 56,
    Num9 = 57,
    Semicolon = 59,
    Equal = 61,
    A = 65,
    B = 66,
    C = 67,
    D = 68,
    E = 69,
    F = 70,
    G = 71,
    H = 72,
    I = 73,
    J = 74,
    K = 75,
    L = 76,
    M = 77,
    N = 78,
    O = 79,
    P = 80,
    Q = 81,
    R = 82,
    S = 83,
    T = 84,
    U = 85,
    V = 86,
    W = 87,
    X = 88,
    Y = 89,
    Z = 90,
    LeftBracket = 91,
    Backslash = 92,
    RightBracket = 93,
    GraveAccent = 96,

    // Function keys
    Escape = 256,
    Enter = 257,
    Tab = 258,
    Backspace = 259,
    Insert = 260,
    Delete = 261,
    Right = 262,
    Left = 263,
    Down = 264,
    Up = 265,
    PageUp = 266,
    PageDown = 267,
    Home = 268,
    End = 269,
    CapsLock = 280,
    ScrollLock = 281,
    NumLock = 282,
    PrintScreen = 283,
    Pause = 284,
    F1 = 290,
    F2 = 291,
    F3 = 292,
    F4 = 293,
    F5 = 294,
    F6 = 295,
    F7 = 296,
    F8 = 297,
    F9 = 298,
    F10 = 299,
    F11 = 300,
    F12 = 301,
    F13 = 302,
    F14 = 303,
    F15 = 304,
    F16 = 305,
    F17 = 306,
    F18 = 307,
    F19 = 308,
    F20 = 309,
    F21 = 310,
    F22 = 311,
    F23 = 312,
    F24 = 313,
    F25 = 314,

    // Keypad
    Kp0 = 320,
    Kp1 = 321,
    Kp2 = 322,
    Kp3 = 323,
    Kp4 = 324,
    Kp5 = 325,
    Kp6 = 326,
    Kp7 = 327,
    Kp8 = 328,
    Kp9 = 329,
    KpDecimal = 330,
    KpDivide = 331,
    KpMultiply = 332,
    KpSubtract = 333,
    KpAdd = 334,
    KpEnter = 335,
    KpEqual = 336,

    // Modifiers
    LeftShift = 340,
    LeftControl = 341,
    LeftAlt = 342,
    LeftSuper = 343,
    RightShift = 344,
    RightControl = 345,
    RightAlt = 346,
    RightSuper = 347,
    Menu = 348,
}

impl Key {
    /// Highest valid key value
    pub const LAST: Self = Self::Menu;

    /// Every key of the enumeration except [`Key::Unknown`], in ascending order
    #[rustfmt::skip]
    pub const ALL: [Self; 118] = [
        Self::Space, Self::Apostrophe, Self::Comma, Self::Minus, Self::Period, Self::Slash,
        Self::Num0, Self::Num1, Self::Num2, Self::Num3, Self::Num4,
        Self::Num5, Self::Num6, Self::Num7, Self::Num8, Self::Num9,
        Self::Semicolon, Self::Equal,
        Self::A, Self::B, Self::C, Self::D, Self::E, Self::F, Self::G, Self::H, Self::I,
        Self::J, Self::K, Self::L, Self::M, Self::N, Self::O, Self::P, Self::Q, Self::R,
        Self::S, Self::T, Self::U, Self::V, Self::W, Self::X, Self::Y, Self::Z,
        Self::LeftBracket, Self::Backslash, Self::RightBracket, Self::GraveAccent,
        Self::Escape, Self::Enter, Self::Tab, Self::Backspace, Self::Insert, Self::Delete,
        Self::Right, Self::Left, Self::Down, Self::Up,
        Self::PageUp, Self::PageDown, Self::Home, Self::End,
        Self::CapsLock, Self::ScrollLock, Self::NumLock, Self::PrintScreen, Self::Pause,
        Self::F1, Self::F2, Self::F3, Self::F4, Self::F5, Self::F6, Self::F7, Self::F8,
        Self::F9, Self::F10, Self::F11, Self::F12, Self::F13, Self::F14, Self::F15,
        Self::F16, Self::F17, Self::F18, Self::F19, Self::F20, Self::F21, Self::F22,
        Self::F23, Self::F24, Self::F25,
        Self::Kp0, Self::Kp1, Self::Kp2, Self::Kp3, Self::Kp4,
        Self::Kp5, Self::Kp6, Self::Kp7, Self::Kp8, Self::Kp9,
        Self::KpDecimal, Self::KpDivide, Self::KpMultiply, Self::KpSubtract, Self::KpAdd,
        Self::KpEnter, Self::KpEqual,
        Self::LeftShift, Self::LeftControl, Self::LeftAlt, Self::LeftSuper,
        Self::RightShift, Self::RightControl, Self::RightAlt, Self::RightSuper,
        Self::Menu,
    ];

    /// The stable integer value of this key
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Look up a key by its stable integer value
    ///
    /// Values outside the enumeration yield [`Key::Unknown`].
    pub fn from_code(code: i32) -> Self {
        Self::ALL
            .binary_search_by_key(&code, |key| key.code())
            .map_or(Self::Unknown, |index| Self::ALL[index])
    }

    /// Whether this key is a modifier (shift, control, alt or super)
    pub const fn is_modifier(self) -> bool {
        matches!(
            self,
            Self::LeftShift
                | Self::LeftControl
                | Self::LeftAlt
                | Self::LeftSuper
                | Self::RightShift
                | Self::RightControl
                | Self::RightAlt
                | Self::RightSuper
        )
    }
}

/// Mouse buttons
///
/// `Button1`..`Button3` are the left, right and middle buttons; the rest are
/// auxiliary ("X") buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(i32)]
#[allow(missing_docs)]
pub enum MouseButton {
    Button1 = 0,
    Button2 = 1,
    Button3 = 2,
    Button4 = 3,
    Button5 = 4,
    Button6 = 5,
    Button7 = 6,
    Button8 = 7,
    Button9 = 8,
    Button10 = 9,
}

impl MouseButton {
    /// Left mouse button
    pub const LEFT: Self = Self::Button1;
    /// Right mouse button
    pub const RIGHT: Self = Self::Button2;
    /// Middle mouse button
    pub const MIDDLE: Self = Self::Button3;
    /// Highest button index reported by the published header
    pub const LAST: Self = Self::Button8;

    /// The stable integer value of this button
    pub const fn index(self) -> i32 {
        self as i32
    }

    /// Look up a button by its stable integer value
    pub const fn from_index(index: i32) -> Option<Self> {
        Some(match index {
            0 => Self::Button1,
            1 => Self::Button2,
            2 => Self::Button3,
            3 => Self::Button4,
            4 => Self::Button5,
            5 => Self::Button6,
            6 => Self::Button7,
            7 => Self::Button8,
            8 => Self::Button9,
            9 => Self::Button10,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_key_values() {
        assert_eq!(Key::Unknown.code(), -1);
        assert_eq!(Key::Space.code(), 32);
        assert_eq!(Key::A.code(), 65);
        assert_eq!(Key::Escape.code(), 256);
        assert_eq!(Key::F1.code(), 290);
        assert_eq!(Key::F25.code(), 314);
        assert_eq!(Key::KpEnter.code(), 335);
        assert_eq!(Key::LeftShift.code(), 340);
        assert_eq!(Key::RightShift.code(), 344);
        assert_eq!(Key::LAST.code(), 348);
    }

    #[test]
    fn test_all_keys_sorted_and_complete() {
        assert!(Key::ALL.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(!Key::ALL.contains(&Key::Unknown));
        assert_eq!(Key::ALL.first(), Some(&Key::Space));
        assert_eq!(Key::ALL.last(), Some(&Key::LAST));
    }

    #[test]
    fn test_from_code_round_trip() {
        for key in Key::ALL {
            assert_eq!(Key::from_code(key.code()), key);
        }
    }

    #[test]
    fn test_from_code_rejects_gaps() {
        for code in [-2, 0, 31, 33, 58, 97, 161, 162, 255, 270, 285, 315, 337, 349, i32::MAX] {
            assert_eq!(Key::from_code(code), Key::Unknown, "code {code}");
        }
    }

    #[test]
    fn test_modifiers() {
        assert!(Key::LeftShift.is_modifier());
        assert!(Key::RightSuper.is_modifier());
        assert!(!Key::Menu.is_modifier());
        assert!(!Key::Space.is_modifier());
    }

    #[test]
    fn test_mouse_button_aliases() {
        assert_eq!(MouseButton::LEFT.index(), 0);
        assert_eq!(MouseButton::RIGHT.index(), 1);
        assert_eq!(MouseButton::MIDDLE.index(), 2);
        assert_eq!(MouseButton::LAST.index(), 7);
        assert_eq!(MouseButton::Button10.index(), 9);
    }

    #[test]
    fn test_mouse_button_from_index() {
        for index in 0..10 {
            let button = MouseButton::from_index(index).unwrap();
            assert_eq!(button.index(), index);
        }
        assert_eq!(MouseButton::from_index(-1), None);
        assert_eq!(MouseButton::from_index(10), None);
    }
}
