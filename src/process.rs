use anyhow::Context;
use log::{debug, info, warn};
use std::process::{Command, Stdio};
use std::thread;

/// Splits a command line into program and arguments on ASCII whitespace.
pub(crate) fn split_command(command: &str) -> Vec<&str> {
    command.split_ascii_whitespace().collect()
}

/// Starts `command` in the background without waiting for it to finish.
///
/// A blank command does nothing.
pub fn launch_program(command: &str) -> anyhow::Result<()> {
    let words = split_command(command);
    let Some((&program, args)) = words.split_first() else {
        debug!("nothing to launch");
        return Ok(());
    };

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .spawn()
        .with_context(|| format!("Unable to launch {program}"))?;
    info!("launched {program} with pid {}", child.id());

    let program = program.to_string();
    thread::spawn(move || match child.wait() {
        Ok(status) => debug!("{program} exited with {status}"),
        Err(e) => warn!("Unable to wait for {program}: {e}"),
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("xdg-open  http://a \t b\n"), vec!["xdg-open", "http://a", "b"]);
        assert!(split_command("   ").is_empty());
        assert!(split_command("").is_empty());
    }

    #[test]
    fn test_blank_command_is_noop() -> anyhow::Result<()> {
        launch_program("")?;
        launch_program(" \t ")?;
        Ok(())
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let error = launch_program("kana-util-no-such-program --flag").unwrap_err();
        assert!(error.to_string().contains("kana-util-no-such-program"));
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_true() -> anyhow::Result<()> {
        launch_program("true")
    }
}
