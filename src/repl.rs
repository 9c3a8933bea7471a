//! Line-oriented terminal frontend.
//!
//! Feeds characters from stdin (interactive) or a command-line key
//! sequence (one-shot) through the key mapping into the engine, rendering
//! the display after each line. Every line implicitly ends with Enter,
//! which is bound to equals, so typing `52+3` and pressing Return prints
//! `55`.

use std::io::{BufRead, Write};

use anyhow::Result;
use thiserror::Error;

use crate::config::Config;
use crate::engine::Calculator;
use crate::input::{self, Command, Key};
use crate::ui;

/// Error feeding a scripted key sequence into the engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    /// A character in the sequence is not bound to any command.
    #[error("unrecognized key '{key}' at position {position}")]
    UnrecognizedKey { key: char, position: usize },
}

/// Feeds a scripted key sequence, then a final Enter.
///
/// Whitespace is skipped so sequences can be written readably. Unlike the
/// interactive loop, an unbound character here is an error: a script with
/// a typo should fail loudly instead of computing something else.
pub fn run_script(calculator: &mut Calculator, keys: &str) -> Result<(), ScriptError> {
    for (position, c) in keys.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }

        let command = input::command_for_key(Key::from_char(c))
            .ok_or(ScriptError::UnrecognizedKey { key: c, position })?;
        input::dispatch(calculator, command);
    }

    input::dispatch(calculator, Command::Equals);
    Ok(())
}

/// Runs the interactive session until `q`, `quit`, `exit`, or EOF.
///
/// The reader/writer pair is generic so tests can drive a session from a
/// buffer; the binary passes locked stdin and stdout.
pub fn run_interactive(
    calculator: &mut Calculator,
    config: &Config,
    mut reader: impl BufRead,
    mut writer: impl Write,
) -> Result<()> {
    if config.repl.show_banner {
        writeln!(writer, "{}", ui::banner())?;
    }

    loop {
        write!(writer, "{}", config.repl.prompt)?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }

        let trimmed = line.trim();
        if matches!(trimmed, "q" | "quit" | "exit") {
            break;
        }

        feed_line(calculator, trimmed);
        writeln!(
            writer,
            "{}",
            ui::render_display(calculator, &config.display)
        )?;
    }

    Ok(())
}

/// Feeds one line of input, then the implicit Enter.
///
/// Unbound characters are skipped: an interactive stray keystroke should
/// not derail the whole session.
fn feed_line(calculator: &mut Calculator, line: &str) {
    for c in line.chars() {
        if c.is_whitespace() {
            continue;
        }

        match input::command_for_key(Key::from_char(c)) {
            Some(command) => input::dispatch(calculator, command),
            None => log::debug!("Ignoring unbound key {c:?}"),
        }
    }

    input::dispatch(calculator, Command::Equals);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn script_computes_expression() {
        let mut calculator = Calculator::new();
        run_script(&mut calculator, "52+3=").unwrap();
        assert_eq!(calculator.current_operand, "55");
    }

    #[test]
    fn script_computes_without_explicit_equals() {
        // The implicit trailing Enter folds the pending operation.
        let mut calculator = Calculator::new();
        run_script(&mut calculator, "52+3").unwrap();
        assert_eq!(calculator.current_operand, "55");
    }

    #[test]
    fn script_skips_whitespace() {
        let mut calculator = Calculator::new();
        run_script(&mut calculator, "5 2 + 3").unwrap();
        assert_eq!(calculator.current_operand, "55");
    }

    #[test]
    fn script_rejects_unknown_keys() {
        let mut calculator = Calculator::new();
        let err = run_script(&mut calculator, "5#3").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnrecognizedKey {
                key: '#',
                position: 1
            }
        );
    }

    #[test]
    fn interactive_session_computes_lines() {
        let mut calculator = Calculator::new();
        let config = Config::default();
        let mut output = Vec::new();

        run_interactive(
            &mut calculator,
            &config,
            Cursor::new("52+3\nq\n"),
            &mut output,
        )
        .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("55"));
    }

    #[test]
    fn interactive_session_ignores_unbound_keys() {
        let mut calculator = Calculator::new();
        let config = Config::default();
        let mut output = Vec::new();

        run_interactive(
            &mut calculator,
            &config,
            Cursor::new("5a2+3\nquit\n"),
            &mut output,
        )
        .unwrap();

        assert_eq!(calculator.current_operand, "55");
    }

    #[test]
    fn interactive_session_stops_at_eof() {
        let mut calculator = Calculator::new();
        let config = Config::default();
        let mut output = Vec::new();

        run_interactive(&mut calculator, &config, Cursor::new("7*6\n"), &mut output).unwrap();
        assert_eq!(calculator.current_operand, "42");
    }
}
