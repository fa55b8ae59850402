use bitflags::bitflags;
use std::fmt::Display;

/// An X11 keysym value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeySym(pub u32);

impl KeySym {
    pub const SPACE: KeySym = KeySym(0x0020);
    pub const BACKSPACE: KeySym = KeySym(0xff08);
    pub const TAB: KeySym = KeySym(0xff09);
    pub const LINEFEED: KeySym = KeySym(0xff0a);
    pub const RETURN: KeySym = KeySym(0xff0d);
    pub const ESCAPE: KeySym = KeySym(0xff1b);
    pub const ISO_LEFT_TAB: KeySym = KeySym(0xfe20);

    pub const KP_MULTIPLY: KeySym = KeySym(0xffaa);
    pub const KP_ADD: KeySym = KeySym(0xffab);
    pub const KP_SEPARATOR: KeySym = KeySym(0xffac);
    pub const KP_SUBTRACT: KeySym = KeySym(0xffad);
    pub const KP_DECIMAL: KeySym = KeySym(0xffae);
    pub const KP_DIVIDE: KeySym = KeySym(0xffaf);
    pub const KP_0: KeySym = KeySym(0xffb0);
    pub const KP_9: KeySym = KeySym(0xffb9);
    pub const KP_EQUAL: KeySym = KeySym(0xffbd);

    const NAMED: [(&'static str, KeySym); 14] = [
        ("space", KeySym::SPACE),
        ("BackSpace", KeySym::BACKSPACE),
        ("Tab", KeySym::TAB),
        ("Linefeed", KeySym::LINEFEED),
        ("Return", KeySym::RETURN),
        ("Escape", KeySym::ESCAPE),
        ("ISO_Left_Tab", KeySym::ISO_LEFT_TAB),
        ("KP_Multiply", KeySym::KP_MULTIPLY),
        ("KP_Add", KeySym::KP_ADD),
        ("KP_Separator", KeySym::KP_SEPARATOR),
        ("KP_Subtract", KeySym::KP_SUBTRACT),
        ("KP_Decimal", KeySym::KP_DECIMAL),
        ("KP_Divide", KeySym::KP_DIVIDE),
        ("KP_Equal", KeySym::KP_EQUAL),
    ];

    /// The keypad digit keysym for `digit` (0-9).
    pub fn keypad_digit(digit: u32) -> Option<KeySym> {
        (digit <= 9).then(|| KeySym(KeySym::KP_0.0 + digit))
    }

    pub fn is_keypad_digit(&self) -> bool {
        (KeySym::KP_0.0..=KeySym::KP_9.0).contains(&self.0)
    }

    /// Printable ASCII keysyms share their value with the character code.
    pub fn is_printable_ascii(&self) -> bool {
        (0x20..=0x7e).contains(&self.0)
    }
}

impl TryFrom<&str> for KeySym {
    type Error = ();

    /// Accepts `0x`-prefixed hex, a single printable ASCII character, a keypad digit
    /// such as `KP_5`, one of the named keys, or a decimal value.
    fn try_from(name: &str) -> Result<Self, Self::Error> {
        if let Some(hex) = name.strip_prefix("0x") {
            return u32::from_str_radix(hex, 16).map(KeySym).map_err(|_| ());
        }
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_graphic() {
                return Ok(KeySym(c as u32));
            }
        }
        if let Some(digit) = name.strip_prefix("KP_").and_then(|d| d.parse::<u32>().ok()) {
            return KeySym::keypad_digit(digit).ok_or(());
        }
        if let Some((_, sym)) = KeySym::NAMED.iter().find(|(n, _)| *n == name) {
            return Ok(*sym);
        }
        name.parse::<u32>().map(KeySym).map_err(|_| ())
    }
}

impl Display for KeySym {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:04x}", self.0)
    }
}

bitflags! {
    /// Modifier state of a key event, using the X11 mask bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyState: u32 {
        const SHIFT = 1 << 0;
        const CAPS_LOCK = 1 << 1;
        const CTRL = 1 << 2;
        const ALT = 1 << 3;
        const SUPER = 1 << 6;

        /// The modifiers a hotkey is compared on.
        const SIMPLE_MASK = Self::SHIFT.bits()
            | Self::CTRL.bits()
            | Self::ALT.bits()
            | Self::SUPER.bits();
    }
}

impl TryFrom<&str> for KeyState {
    type Error = ();

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name.to_ascii_lowercase().as_str() {
            "shift" => Ok(KeyState::SHIFT),
            "lock" | "capslock" => Ok(KeyState::CAPS_LOCK),
            "ctrl" | "control" => Ok(KeyState::CTRL),
            "alt" => Ok(KeyState::ALT),
            "super" => Ok(KeyState::SUPER),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyEvent {
    pub sym: KeySym,
    pub state: KeyState,
}

impl KeyEvent {
    pub fn new(sym: KeySym, state: KeyState) -> Self {
        Self { sym, state }
    }

    /// ASCII code produced by the key, if any. BackSpace, Tab, Linefeed, Return and
    /// Escape yield their control codes.
    pub fn ascii_code(&self) -> Option<u8> {
        let KeySym(sym) = self.sym;
        let code = match self.sym {
            s if s.is_printable_ascii() => sym,
            s if s.is_keypad_digit() => u32::from(b'0') + sym - KeySym::KP_0.0,
            KeySym::KP_MULTIPLY => u32::from(b'*'),
            KeySym::KP_ADD => u32::from(b'+'),
            KeySym::KP_SEPARATOR => u32::from(b','),
            KeySym::KP_SUBTRACT => u32::from(b'-'),
            KeySym::KP_DECIMAL => u32::from(b'.'),
            KeySym::KP_DIVIDE => u32::from(b'/'),
            KeySym::KP_EQUAL => u32::from(b'='),
            KeySym::BACKSPACE => 0x08,
            KeySym::TAB => 0x09,
            KeySym::LINEFEED => 0x0a,
            KeySym::RETURN => 0x0d,
            KeySym::ESCAPE => 0x1b,
            _ => return None,
        };
        u8::try_from(code).ok()
    }
}

/// Parses `sym` or `Mod+Mod+sym`, for instance `Ctrl+Shift+a`.
impl TryFrom<&str> for KeyEvent {
    type Error = ();

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let (modifiers, sym) = match text.rsplit_once('+') {
            // a lone "+" or a doubled trailing "++" names the plus key itself
            Some(("", "")) => ("", "+"),
            Some((modifiers, "")) => (modifiers.strip_suffix('+').ok_or(())?, "+"),
            Some((modifiers, sym)) => (modifiers, sym),
            None => ("", text),
        };
        let mut state = KeyState::empty();
        for modifier in modifiers.split('+').filter(|m| !m.is_empty()) {
            state |= KeyState::try_from(modifier)?;
        }
        Ok(KeyEvent::new(KeySym::try_from(sym)?, state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a", KeySym(0x61))]
    #[case("+", KeySym(0x2b))]
    #[case("0xffb5", KeySym(0xffb5))]
    #[case("KP_5", KeySym(0xffb5))]
    #[case("KP_Equal", KeySym::KP_EQUAL)]
    #[case("space", KeySym::SPACE)]
    #[case("Return", KeySym::RETURN)]
    #[case("65", KeySym(65))]
    fn test_keysym_try_from(#[case] name: &str, #[case] expected: KeySym) -> Result<(), ()> {
        assert_eq!(expected, KeySym::try_from(name)?);
        Ok(())
    }

    #[rstest]
    #[case("")]
    #[case("KP_10")]
    #[case("0xzz")]
    #[case("Nope")]
    fn test_keysym_try_from_invalid(#[case] name: &str) {
        assert!(KeySym::try_from(name).is_err());
    }

    #[rstest]
    #[case("a", KeyEvent::new(KeySym(0x61), KeyState::empty()))]
    #[case("Ctrl+a", KeyEvent::new(KeySym(0x61), KeyState::CTRL))]
    #[case("ctrl+shift+Tab", KeyEvent::new(KeySym::TAB, KeyState::CTRL | KeyState::SHIFT))]
    #[case("+", KeyEvent::new(KeySym(0x2b), KeyState::empty()))]
    #[case("Alt++", KeyEvent::new(KeySym(0x2b), KeyState::ALT))]
    fn test_key_event_try_from(#[case] text: &str, #[case] expected: KeyEvent) -> Result<(), ()> {
        assert_eq!(expected, KeyEvent::try_from(text)?);
        Ok(())
    }

    #[rstest]
    #[case("Hyper+a")]
    #[case("Ctrl+")]
    fn test_key_event_try_from_invalid(#[case] text: &str) {
        assert!(KeyEvent::try_from(text).is_err());
    }

    #[rstest]
    #[case(KeySym(0x41), Some(b'A'))]
    #[case(KeySym::SPACE, Some(b' '))]
    #[case(KeySym(0xffb7), Some(b'7'))]
    #[case(KeySym::KP_DIVIDE, Some(b'/'))]
    #[case(KeySym::BACKSPACE, Some(0x08))]
    #[case(KeySym::TAB, Some(b'\t'))]
    #[case(KeySym::LINEFEED, Some(b'\n'))]
    #[case(KeySym::RETURN, Some(b'\r'))]
    #[case(KeySym::ESCAPE, Some(0x1b))]
    #[case(KeySym(0xff0b), None)]
    #[case(KeySym(0x7f), None)]
    fn test_ascii_code(#[case] sym: KeySym, #[case] expected: Option<u8>) {
        assert_eq!(KeyEvent::new(sym, KeyState::empty()).ascii_code(), expected);
    }
}
