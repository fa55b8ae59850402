pub mod hotkey;
pub mod key_event;
pub mod keypad;

pub use hotkey::{Hotkey, match_key_event};
pub use key_event::{KeyEvent, KeyState, KeySym};
pub use keypad::{is_keypad, keypad_to_string};
