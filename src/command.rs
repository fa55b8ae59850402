use crate::kana::{convert_to_half, convert_to_katakana, convert_to_wide};
use crate::key::{Hotkey, KeyEvent, is_keypad, keypad_to_string, match_key_event};
use crate::options::Options;
use crate::process::launch_program;
use crate::surrounding::{compute_safe_delta, resolve_anchor};
use crate::text::{CharRange, TextTool, split_string};
use clap::{Parser, Subcommand};
use log::debug;
use std::fmt::Display;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(
    name = "kana-util",
    version,
    about = "Kana conversion, key and surrounding-text helpers for Japanese input"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("no anchor found for the selection")]
    AnchorNotFound,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Convert ASCII to full-width
    Wide { text: String },
    /// Convert full-width characters to ASCII
    Half { text: String },
    /// Convert hiragana to katakana
    Katakana {
        text: String,
        /// Produce half-width katakana
        #[arg(long, conflicts_with = "full")]
        half: bool,
        /// Produce full-width katakana
        #[arg(long)]
        full: bool,
    },
    /// Count characters
    Length { text: String },
    /// Characters in START..END, START.. or ..END
    Substr {
        text: String,
        #[arg(value_parser = char_range)]
        range: CharRange,
    },
    /// Split TEXT at DELIM, into exactly NUM fields when given
    Split {
        text: String,
        delim: String,
        num: Option<usize>,
    },
    /// Text typed by a key, e.g. KP_5
    Keypad {
        #[arg(value_parser = key_event)]
        key: KeyEvent,
    },
    /// Check a pressed key against a binding such as Ctrl+j
    Hotkey {
        #[arg(value_parser = key_event)]
        binding: KeyEvent,
        #[arg(value_parser = key_event)]
        pressed: KeyEvent,
    },
    /// FROM - TO as a 32-bit offset that can be negated
    Delta { from: u32, to: u32 },
    /// Selection anchor recovered from the surrounding text
    Anchor {
        surrounding: String,
        selected: String,
        cursor: u32,
    },
    /// Start a program in the background
    Launch {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
    /// Write the current options to kana-util.toml
    InitConfig,
}

fn char_range(value: &str) -> Result<CharRange, String> {
    CharRange::try_from(value).map_err(|_| format!("invalid range '{value}'"))
}

fn key_event(value: &str) -> Result<KeyEvent, String> {
    KeyEvent::try_from(value).map_err(|_| format!("invalid key '{value}'"))
}

impl Command {
    /// Runs the command and returns the text to print.
    pub fn execute(&self, options: &Options) -> anyhow::Result<String> {
        debug!("executing {self}");
        let output = match self {
            Command::Wide { text } => convert_to_wide(text),
            Command::Half { text } => convert_to_half(text),
            Command::Katakana { text, half, full } => {
                let half = match (*half, *full) {
                    (true, _) => true,
                    (_, true) => false,
                    _ => options.half_katakana,
                };
                convert_to_katakana(text, half)
            }
            Command::Length { text } => TextTool::new(text).char_len().to_string(),
            Command::Substr { text, range } => {
                let text = TextTool::new(text);
                let len = range.len().unwrap_or(usize::MAX);
                text.substr(range.start(), len).to_string()
            }
            Command::Split { text, delim, num } => split_string(text, delim, *num).join("\n"),
            Command::Keypad { key } => {
                let typed = keypad_to_string(key);
                if is_keypad(key) {
                    format!("keypad: {typed}")
                } else {
                    typed
                }
            }
            Command::Hotkey { binding, pressed } => {
                if match_key_event(&[Hotkey::from(*binding)], pressed, options.ignore_mask()) {
                    "match".to_string()
                } else {
                    "no match".to_string()
                }
            }
            Command::Delta { from, to } => compute_safe_delta(*from, *to)?.to_string(),
            Command::Anchor {
                surrounding,
                selected,
                cursor,
            } => resolve_anchor(surrounding, selected, *cursor)
                .ok_or(CommandError::AnchorNotFound)?
                .to_string(),
            Command::Launch { command } => {
                launch_program(&command.join(" "))?;
                String::new()
            }
            Command::InitConfig => {
                let path = Options::config_path();
                options.save_to(&path)?;
                format!("configuration written to {}", path.display())
            }
        };
        Ok(output)
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Wide { .. } => write!(f, "wide"),
            Command::Half { .. } => write!(f, "half"),
            Command::Katakana { half, full, .. } => {
                write!(f, "katakana (half: {half}, full: {full})")
            }
            Command::Length { .. } => write!(f, "length"),
            Command::Substr { range, .. } => write!(f, "substr {range:?}"),
            Command::Split { delim, num, .. } => write!(f, "split '{delim}' {num:?}"),
            Command::Keypad { key } => write!(f, "keypad {}", key.sym),
            Command::Hotkey { binding, .. } => write!(f, "hotkey {}", binding.sym),
            Command::Delta { from, to } => write!(f, "delta {from} {to}"),
            Command::Anchor { cursor, .. } => write!(f, "anchor at {cursor}"),
            Command::Launch { command } => write!(f, "launch '{}'", command.join(" ")),
            Command::InitConfig => write!(f, "init-config"),
        }
    }
}
