//! Win32 virtual-key translation table
//!
//! A dense 256-entry table indexed by virtual-key code, built at compile
//! time. Entries without a mapping hold [`Key::Unknown`]; code 0 is one of
//! them.
//!
//! Several physical keys share a virtual-key code on Win32. They are told
//! apart with the scan code and the extended-key flag of the keyboard message
//! before the table is consulted:
//!
//! | virtual key  | plain          | distinguished by           |
//! |--------------|----------------|----------------------------|
//! | `VK_RETURN`  | `Enter`        | extended → `KpEnter`       |
//! | `VK_SHIFT`   | `LeftShift`    | scan code 0x36 → `RightShift` |
//! | `VK_CONTROL` | `LeftControl`  | extended → `RightControl`  |
//! | `VK_MENU`    | `LeftAlt`      | extended → `RightAlt`      |

use crate::input::Key;

/// Win32 virtual-key codes (winuser.h)
#[allow(dead_code)]
pub(crate) mod vk {
    pub const BACK: u16 = 0x08;
    pub const TAB: u16 = 0x09;
    pub const RETURN: u16 = 0x0D;
    pub const SHIFT: u16 = 0x10;
    pub const CONTROL: u16 = 0x11;
    pub const MENU: u16 = 0x12;
    pub const PAUSE: u16 = 0x13;
    pub const CAPITAL: u16 = 0x14;
    pub const ESCAPE: u16 = 0x1B;
    pub const SPACE: u16 = 0x20;
    pub const PRIOR: u16 = 0x21;
    pub const NEXT: u16 = 0x22;
    pub const END: u16 = 0x23;
    pub const HOME: u16 = 0x24;
    pub const LEFT: u16 = 0x25;
    pub const UP: u16 = 0x26;
    pub const RIGHT: u16 = 0x27;
    pub const DOWN: u16 = 0x28;
    pub const PRINT: u16 = 0x2A;
    pub const SNAPSHOT: u16 = 0x2C;
    pub const INSERT: u16 = 0x2D;
    pub const DELETE: u16 = 0x2E;
    pub const LWIN: u16 = 0x5B;
    pub const RWIN: u16 = 0x5C;
    pub const APPS: u16 = 0x5D;
    pub const NUMPAD0: u16 = 0x60;
    pub const NUMPAD1: u16 = 0x61;
    pub const NUMPAD2: u16 = 0x62;
    pub const NUMPAD3: u16 = 0x63;
    pub const NUMPAD4: u16 = 0x64;
    pub const NUMPAD5: u16 = 0x65;
    pub const NUMPAD6: u16 = 0x66;
    pub const NUMPAD7: u16 = 0x67;
    pub const NUMPAD8: u16 = 0x68;
    pub const NUMPAD9: u16 = 0x69;
    pub const MULTIPLY: u16 = 0x6A;
    pub const ADD: u16 = 0x6B;
    pub const SUBTRACT: u16 = 0x6D;
    pub const DECIMAL: u16 = 0x6E;
    pub const DIVIDE: u16 = 0x6F;
    pub const F1: u16 = 0x70;
    pub const F24: u16 = 0x87;
    pub const NUMLOCK: u16 = 0x90;
    pub const OEM_NEC_EQUAL: u16 = 0x92;
    pub const SCROLL: u16 = 0x91;
    pub const LSHIFT: u16 = 0xA0;
    pub const RSHIFT: u16 = 0xA1;
    pub const LCONTROL: u16 = 0xA2;
    pub const RCONTROL: u16 = 0xA3;
    pub const LMENU: u16 = 0xA4;
    pub const RMENU: u16 = 0xA5;
    pub const MEDIA_PLAY_PAUSE: u16 = 0xB3;
    pub const OEM_1: u16 = 0xBA;
    pub const OEM_PLUS: u16 = 0xBB;
    pub const OEM_COMMA: u16 = 0xBC;
    pub const OEM_MINUS: u16 = 0xBD;
    pub const OEM_PERIOD: u16 = 0xBE;
    pub const OEM_2: u16 = 0xBF;
    pub const OEM_3: u16 = 0xC0;
    pub const OEM_4: u16 = 0xDB;
    pub const OEM_5: u16 = 0xDC;
    pub const OEM_6: u16 = 0xDD;
    pub const OEM_7: u16 = 0xDE;
    pub const OEM_102: u16 = 0xE2;
}

/// Scan code of the right shift key (set 1)
const RIGHT_SHIFT_SCAN_CODE: u16 = 0x36;

static KEY_TABLE: [Key; 256] = build_table();

const fn build_table() -> [Key; 256] {
    let mut table = [Key::Unknown; 256];

    table[vk::SPACE as usize] = Key::Space;
    table[vk::OEM_7 as usize] = Key::Apostrophe;
    table[vk::OEM_COMMA as usize] = Key::Comma;
    table[vk::OEM_MINUS as usize] = Key::Minus;
    table[vk::OEM_PERIOD as usize] = Key::Period;
    table[vk::OEM_2 as usize] = Key::Slash;
    table[b'0' as usize] = Key::Num0;
    table[b'1' as usize] = Key::Num1;
    table[b'2' as usize] = Key::Num2;
    table[b'3' as usize] = Key::Num3;
    table[b'4' as usize] = Key::Num4;
    table[b'5' as usize] = Key::Num5;
    table[b'6' as usize] = Key::Num6;
    table[b'7' as usize] = Key::Num7;
    table[b'8' as usize] = Key::Num8;
    table[b'9' as usize] = Key::Num9;
    table[vk::OEM_1 as usize] = Key::Semicolon;
    table[vk::OEM_PLUS as usize] = Key::Equal;
    table[b'A' as usize] = Key::A;
    table[b'B' as usize] = Key::B;
    table[b'C' as usize] = Key::C;
    table[b'D' as usize] = Key::D;
    table[b'E' as usize] = Key::E;
    table[b'F' as usize] = Key::F;
    table[b'G' as usize] = Key::G;
    table[b'H' as usize] = Key::H;
    table[b'I' as usize] = Key::I;
    table[b'J' as usize] = Key::J;
    table[b'K' as usize] = Key::K;
    table[b'L' as usize] = Key::L;
    table[b'M' as usize] = Key::M;
    table[b'N' as usize] = Key::N;
    table[b'O' as usize] = Key::O;
    table[b'P' as usize] = Key::P;
    table[b'Q' as usize] = Key::Q;
    table[b'R' as usize] = Key::R;
    table[b'S' as usize] = Key::S;
    table[b'T' as usize] = Key::T;
    table[b'U' as usize] = Key::U;
    table[b'V' as usize] = Key::V;
    table[b'W' as usize] = Key::W;
    table[b'X' as usize] = Key::X;
    table[b'Y' as usize] = Key::Y;
    table[b'Z' as usize] = Key::Z;
    table[vk::OEM_4 as usize] = Key::LeftBracket;
    table[vk::OEM_5 as usize] = Key::Backslash;
    table[vk::OEM_6 as usize] = Key::RightBracket;
    table[vk::OEM_3 as usize] = Key::GraveAccent;

    table[vk::ESCAPE as usize] = Key::Escape;
    table[vk::RETURN as usize] = Key::Enter;
    table[vk::TAB as usize] = Key::Tab;
    table[vk::BACK as usize] = Key::Backspace;
    table[vk::INSERT as usize] = Key::Insert;
    table[vk::DELETE as usize] = Key::Delete;
    table[vk::RIGHT as usize] = Key::Right;
    table[vk::LEFT as usize] = Key::Left;
    table[vk::DOWN as usize] = Key::Down;
    table[vk::UP as usize] = Key::Up;
    table[vk::PRIOR as usize] = Key::PageUp;
    table[vk::NEXT as usize] = Key::PageDown;
    table[vk::HOME as usize] = Key::Home;
    table[vk::END as usize] = Key::End;
    table[vk::CAPITAL as usize] = Key::CapsLock;
    table[vk::SCROLL as usize] = Key::ScrollLock;
    table[vk::NUMLOCK as usize] = Key::NumLock;
    table[vk::SNAPSHOT as usize] = Key::PrintScreen;
    table[vk::PAUSE as usize] = Key::Pause;

    // VK_F1..VK_F24 are contiguous, as are Key::F1..Key::F24
    #[rustfmt::skip]
    let function_keys = [
        Key::F1, Key::F2, Key::F3, Key::F4, Key::F5, Key::F6, Key::F7, Key::F8,
        Key::F9, Key::F10, Key::F11, Key::F12, Key::F13, Key::F14, Key::F15, Key::F16,
        Key::F17, Key::F18, Key::F19, Key::F20, Key::F21, Key::F22, Key::F23, Key::F24,
    ];
    let mut i = 0;
    while i < function_keys.len() {
        table[vk::F1 as usize + i] = function_keys[i];
        i += 1;
    }

    table[vk::NUMPAD0 as usize] = Key::Kp0;
    table[vk::NUMPAD1 as usize] = Key::Kp1;
    table[vk::NUMPAD2 as usize] = Key::Kp2;
    table[vk::NUMPAD3 as usize] = Key::Kp3;
    table[vk::NUMPAD4 as usize] = Key::Kp4;
    table[vk::NUMPAD5 as usize] = Key::Kp5;
    table[vk::NUMPAD6 as usize] = Key::Kp6;
    table[vk::NUMPAD7 as usize] = Key::Kp7;
    table[vk::NUMPAD8 as usize] = Key::Kp8;
    table[vk::NUMPAD9 as usize] = Key::Kp9;
    table[vk::DECIMAL as usize] = Key::KpDecimal;
    table[vk::DIVIDE as usize] = Key::KpDivide;
    table[vk::MULTIPLY as usize] = Key::KpMultiply;
    table[vk::SUBTRACT as usize] = Key::KpSubtract;
    table[vk::ADD as usize] = Key::KpAdd;
    table[vk::OEM_NEC_EQUAL as usize] = Key::KpEqual;

    // Generic modifiers default to the left-hand key; see `translate`
    table[vk::SHIFT as usize] = Key::LeftShift;
    table[vk::CONTROL as usize] = Key::LeftControl;
    table[vk::MENU as usize] = Key::LeftAlt;
    table[vk::LSHIFT as usize] = Key::LeftShift;
    table[vk::RSHIFT as usize] = Key::RightShift;
    table[vk::LCONTROL as usize] = Key::LeftControl;
    table[vk::RCONTROL as usize] = Key::RightControl;
    table[vk::LMENU as usize] = Key::LeftAlt;
    table[vk::RMENU as usize] = Key::RightAlt;
    table[vk::LWIN as usize] = Key::LeftSuper;
    table[vk::RWIN as usize] = Key::RightSuper;
    table[vk::APPS as usize] = Key::Menu;

    table
}

/// Native key identity carried by a Win32 keyboard message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NativeKey {
    pub(crate) virtual_key: u16,
    pub(crate) scan_code: u16,
    pub(crate) extended: bool,
}

impl NativeKey {
    /// Decode `WM_KEYDOWN`-family parameters
    ///
    /// `lparam` bits 16..24 hold the scan code, bit 24 the extended-key flag.
    pub(crate) const fn from_params(wparam: usize, lparam: isize) -> Self {
        let bits = lparam as usize;
        Self {
            virtual_key: (wparam & 0xFFFF) as u16,
            scan_code: ((bits >> 16) & 0xFF) as u16,
            extended: bits & (1 << 24) != 0,
        }
    }
}

/// Raw table lookup by virtual-key code
pub(crate) fn lookup(virtual_key: u16) -> Key {
    KEY_TABLE
        .get(usize::from(virtual_key))
        .copied()
        .unwrap_or(Key::Unknown)
}

/// Translate a keyboard message's key into a [`Key`]
pub(crate) fn translate(native: NativeKey) -> Key {
    match native.virtual_key {
        vk::RETURN if native.extended => Key::KpEnter,
        vk::SHIFT if native.scan_code == RIGHT_SHIFT_SCAN_CODE => Key::RightShift,
        vk::CONTROL if native.extended => Key::RightControl,
        vk::MENU if native.extended => Key::RightAlt,
        code => lookup(code),
    }
}
