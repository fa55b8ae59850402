use crate::key::key_event::{KeyEvent, KeySym};

pub fn is_keypad(key: &KeyEvent) -> bool {
    matches!(
        key.sym,
        KeySym::KP_EQUAL
            | KeySym::KP_MULTIPLY
            | KeySym::KP_ADD
            | KeySym::KP_SEPARATOR
            | KeySym::KP_SUBTRACT
            | KeySym::KP_DECIMAL
            | KeySym::KP_DIVIDE
    ) || key.sym.is_keypad_digit()
}

/// The text typed by `key`: keypad keys become their ASCII character, other keys
/// their printable ASCII code, anything else the empty string.
pub fn keypad_to_string(key: &KeyEvent) -> String {
    let raw = match key.sym {
        KeySym::KP_EQUAL => Some('='),
        KeySym::KP_MULTIPLY => Some('*'),
        KeySym::KP_ADD => Some('+'),
        KeySym::KP_SEPARATOR => Some(','),
        KeySym::KP_SUBTRACT => Some('-'),
        KeySym::KP_DECIMAL => Some('.'),
        KeySym::KP_DIVIDE => Some('/'),
        sym if sym.is_keypad_digit() => char::from_digit(sym.0 - KeySym::KP_0.0, 10),
        _ => key
            .ascii_code()
            .filter(|code| code.is_ascii_graphic() || *code == b' ')
            .map(char::from),
    };
    raw.map(String::from).unwrap_or_default()
}
