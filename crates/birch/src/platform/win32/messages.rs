//! Win32 message decoding
//!
//! Turns a `(msg, wparam, lparam)` triple delivered to the window procedure
//! into a [`WindowEvent`]. Decoding is pure so it can be checked on any host.

use crate::events::WindowEvent;
use crate::input::MouseButton;

use super::keymap::{self, NativeKey};

pub(crate) const WM_DESTROY: u32 = 0x0002;
pub(crate) const WM_SIZE: u32 = 0x0005;
pub(crate) const WM_KEYDOWN: u32 = 0x0100;
pub(crate) const WM_KEYUP: u32 = 0x0101;
pub(crate) const WM_SYSKEYDOWN: u32 = 0x0104;
pub(crate) const WM_SYSKEYUP: u32 = 0x0105;
pub(crate) const WM_MOUSEMOVE: u32 = 0x0200;
pub(crate) const WM_LBUTTONDOWN: u32 = 0x0201;
pub(crate) const WM_LBUTTONUP: u32 = 0x0202;
pub(crate) const WM_RBUTTONDOWN: u32 = 0x0204;
pub(crate) const WM_RBUTTONUP: u32 = 0x0205;
pub(crate) const WM_MBUTTONDOWN: u32 = 0x0207;
pub(crate) const WM_MBUTTONUP: u32 = 0x0208;
pub(crate) const WM_XBUTTONDOWN: u32 = 0x020B;
pub(crate) const WM_XBUTTONUP: u32 = 0x020C;

const XBUTTON1: u16 = 0x0001;
const XBUTTON2: u16 = 0x0002;

/// How the window procedure should answer a message after decoding it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Disposition {
    /// Handled, return 0
    Handled,
    /// Handled, return TRUE (required for `WM_XBUTTON*`)
    HandledTrue,
    /// Forward to `DefWindowProcW`
    Default,
}

/// Result of decoding a single message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Decoded {
    pub(crate) event: Option<WindowEvent>,
    pub(crate) disposition: Disposition,
}

impl Decoded {
    const fn handled(event: WindowEvent) -> Self {
        Self {
            event: Some(event),
            disposition: Disposition::Handled,
        }
    }

    const fn forwarded(event: Option<WindowEvent>) -> Self {
        Self {
            event,
            disposition: Disposition::Default,
        }
    }
}

const fn loword(value: usize) -> u16 {
    (value & 0xFFFF) as u16
}

const fn hiword(value: usize) -> u16 {
    ((value >> 16) & 0xFFFF) as u16
}

/// Signed client coordinates packed into `lparam` (`GET_X_LPARAM`/`GET_Y_LPARAM`)
const fn cursor_position(lparam: isize) -> (i32, i32) {
    let bits = lparam as usize;
    (loword(bits) as i16 as i32, hiword(bits) as i16 as i32)
}

fn extra_button(wparam: usize) -> Option<MouseButton> {
    match hiword(wparam) {
        XBUTTON1 => Some(MouseButton::Button4),
        XBUTTON2 => Some(MouseButton::Button5),
        _ => None,
    }
}

/// Decode a window message
///
/// Unhandled messages decode to no event and are forwarded to the default
/// procedure. System key messages produce an event but are still forwarded so
/// Alt+F4 and the window menu keep working.
pub(crate) fn decode(msg: u32, wparam: usize, lparam: isize) -> Decoded {
    match msg {
        WM_DESTROY => Decoded::handled(WindowEvent::Destroyed),
        WM_SIZE => {
            let bits = lparam as usize;
            Decoded::handled(WindowEvent::Resized {
                width: u32::from(loword(bits)),
                height: u32::from(hiword(bits)),
            })
        }
        WM_MOUSEMOVE => {
            let (x, y) = cursor_position(lparam);
            Decoded::handled(WindowEvent::MouseMoved { x, y })
        }
        WM_KEYDOWN | WM_KEYUP | WM_SYSKEYDOWN | WM_SYSKEYUP => {
            let key = keymap::translate(NativeKey::from_params(wparam, lparam));
            let event = if matches!(msg, WM_KEYDOWN | WM_SYSKEYDOWN) {
                WindowEvent::KeyPressed(key)
            } else {
                WindowEvent::KeyReleased(key)
            };
            if matches!(msg, WM_SYSKEYDOWN | WM_SYSKEYUP) {
                Decoded::forwarded(Some(event))
            } else {
                Decoded::handled(event)
            }
        }
        WM_LBUTTONDOWN => Decoded::handled(WindowEvent::MouseButtonPressed(MouseButton::LEFT)),
        WM_LBUTTONUP => Decoded::handled(WindowEvent::MouseButtonReleased(MouseButton::LEFT)),
        WM_RBUTTONDOWN => Decoded::handled(WindowEvent::MouseButtonPressed(MouseButton::RIGHT)),
        WM_RBUTTONUP => Decoded::handled(WindowEvent::MouseButtonReleased(MouseButton::RIGHT)),
        WM_MBUTTONDOWN => Decoded::handled(WindowEvent::MouseButtonPressed(MouseButton::MIDDLE)),
        WM_MBUTTONUP => Decoded::handled(WindowEvent::MouseButtonReleased(MouseButton::MIDDLE)),
        WM_XBUTTONDOWN | WM_XBUTTONUP => match extra_button(wparam) {
            Some(button) => Decoded {
                event: Some(if msg == WM_XBUTTONDOWN {
                    WindowEvent::MouseButtonPressed(button)
                } else {
                    WindowEvent::MouseButtonReleased(button)
                }),
                disposition: Disposition::HandledTrue,
            },
            None => Decoded::forwarded(None),
        },
        _ => Decoded::forwarded(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::platform::win32::keymap::vk;

    fn pack(low: u16, high: u16) -> isize {
        ((usize::from(high) << 16) | usize::from(low)) as isize
    }

    #[test]
    fn test_destroy_and_size() {
        assert_eq!(decode(WM_DESTROY, 0, 0), Decoded::handled(WindowEvent::Destroyed));
        assert_eq!(
            decode(WM_SIZE, 0, pack(1024, 768)).event,
            Some(WindowEvent::Resized { width: 1024, height: 768 })
        );
        // Minimizing reports a zero-sized client area
        assert_eq!(
            decode(WM_SIZE, 1, 0).event,
            Some(WindowEvent::Resized { width: 0, height: 0 })
        );
    }

    #[test]
    fn test_mouse_move_coordinates_are_signed() {
        assert_eq!(
            decode(WM_MOUSEMOVE, 0, pack(100, 200)).event,
            Some(WindowEvent::MouseMoved { x: 100, y: 200 })
        );
        // Captured cursor left of / above the client area
        assert_eq!(
            decode(WM_MOUSEMOVE, 0, pack((-5_i16) as u16, (-20_i16) as u16)).event,
            Some(WindowEvent::MouseMoved { x: -5, y: -20 })
        );
    }

    #[test]
    fn test_key_messages() {
        let escape = decode(WM_KEYDOWN, usize::from(vk::ESCAPE), 0x0001_0001);
        assert_eq!(escape, Decoded::handled(WindowEvent::KeyPressed(Key::Escape)));

        let release = decode(WM_KEYUP, usize::from(b'W'), 0);
        assert_eq!(release.event, Some(WindowEvent::KeyReleased(Key::W)));

        let keypad_enter = decode(WM_KEYDOWN, usize::from(vk::RETURN), 1 << 24);
        assert_eq!(keypad_enter.event, Some(WindowEvent::KeyPressed(Key::KpEnter)));
    }

    #[test]
    fn test_system_keys_reach_default_procedure() {
        let alt = decode(WM_SYSKEYDOWN, usize::from(vk::MENU), 0);
        assert_eq!(alt.event, Some(WindowEvent::KeyPressed(Key::LeftAlt)));
        assert_eq!(alt.disposition, Disposition::Default);

        let f4 = decode(WM_SYSKEYUP, usize::from(vk::F1 + 3), 0);
        assert_eq!(f4.event, Some(WindowEvent::KeyReleased(Key::F4)));
        assert_eq!(f4.disposition, Disposition::Default);
    }

    #[test]
    fn test_mouse_buttons() {
        let cases = [
            (WM_LBUTTONDOWN, WindowEvent::MouseButtonPressed(MouseButton::Button1)),
            (WM_LBUTTONUP, WindowEvent::MouseButtonReleased(MouseButton::Button1)),
            (WM_RBUTTONDOWN, WindowEvent::MouseButtonPressed(MouseButton::Button2)),
            (WM_RBUTTONUP, WindowEvent::MouseButtonReleased(MouseButton::Button2)),
            (WM_MBUTTONDOWN, WindowEvent::MouseButtonPressed(MouseButton::Button3)),
            (WM_MBUTTONUP, WindowEvent::MouseButtonReleased(MouseButton::Button3)),
        ];
        for (msg, expected) in cases {
            assert_eq!(decode(msg, 0, 0), Decoded::handled(expected), "msg {msg:#x}");
        }
    }

    #[test]
    fn test_extra_buttons_return_true() {
        let back = decode(WM_XBUTTONDOWN, (usize::from(XBUTTON1)) << 16, 0);
        assert_eq!(back.event, Some(WindowEvent::MouseButtonPressed(MouseButton::Button4)));
        assert_eq!(back.disposition, Disposition::HandledTrue);

        let forward = decode(WM_XBUTTONUP, (usize::from(XBUTTON2)) << 16, 0);
        assert_eq!(forward.event, Some(WindowEvent::MouseButtonReleased(MouseButton::Button5)));
        assert_eq!(forward.disposition, Disposition::HandledTrue);

        assert_eq!(decode(WM_XBUTTONDOWN, 0x0004 << 16, 0), Decoded::forwarded(None));
    }

    #[test]
    fn test_unhandled_messages_are_forwarded() {
        // WM_CLOSE falls through so DefWindowProcW destroys the window
        assert_eq!(decode(0x0010, 0, 0), Decoded::forwarded(None));
        assert_eq!(decode(0x0014, 0, 0), Decoded::forwarded(None));
    }
}
