use crate::key::key_event::{KeyEvent, KeySym, KeyState};
use log::trace;

/// A configured key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotkey {
    pub sym: KeySym,
    pub state: KeyState,
}

impl From<KeyEvent> for Hotkey {
    fn from(key: KeyEvent) -> Self {
        Self {
            sym: key.sym,
            state: key.state & KeyState::SIMPLE_MASK,
        }
    }
}

impl Hotkey {
    fn matches(&self, key: &KeyEvent) -> bool {
        let mask = KeyState::SIMPLE_MASK;
        self.sym == key.sym && self.state & mask == key.state & mask
    }
}

/// Folds Shift into the keysym where the keysym already encodes it.
fn normalize(key: &KeyEvent) -> KeyEvent {
    let mut sym = key.sym;
    let mut state = key.state;
    if state.contains(KeyState::SHIFT) {
        if sym.is_printable_ascii() && sym != KeySym::SPACE {
            state.remove(KeyState::SHIFT);
            if let Some(c) = char::from_u32(sym.0).filter(char::is_ascii_lowercase) {
                sym = KeySym(c.to_ascii_uppercase() as u32);
            }
        } else if sym == KeySym::ISO_LEFT_TAB {
            sym = KeySym::TAB;
        }
    }
    KeyEvent::new(sym, state)
}

/// True when `key`, ignoring the `ignore_mask` modifiers, is one of `hotkeys`.
pub fn match_key_event(hotkeys: &[Hotkey], key: &KeyEvent, ignore_mask: KeyState) -> bool {
    let mut key = normalize(key);
    key.state.remove(ignore_mask);
    let matched = hotkeys.iter().any(|hotkey| hotkey.matches(&key));
    trace!("key {} state {:?} matched: {matched}", key.sym, key.state);
    matched
}
