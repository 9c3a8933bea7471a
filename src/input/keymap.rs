//! Key-to-command mapping and engine dispatch.

use crate::engine::{Calculator, Operation};

use super::events::Key;

/// Discrete commands the calculator engine understands.
///
/// Every input event is reduced to one of these before it touches the
/// engine, so the engine's surface stays independent of how keys arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Append a decimal digit to the operand being typed
    Digit(char),
    /// Append the decimal point
    Decimal,
    /// Capture the typed operand and select an operation
    Operator(Operation),
    /// Apply the pending operation
    Equals,
    /// Reset to the identity state
    Clear,
    /// Drop the last typed character
    Delete,
}

/// Looks up the command bound to a key.
///
/// The layout follows the physical calculator: digits and `.` enter the
/// operand, `+ - * /` choose an operation, `Enter`/`=` computes, `Escape`
/// clears, `Backspace` deletes. `c` doubles as clear because Escape never
/// survives line-based input.
pub fn command_for_key(key: Key) -> Option<Command> {
    let command = match key {
        Key::Char(c) if c.is_ascii_digit() => Command::Digit(c),
        Key::Char('.') => Command::Decimal,
        Key::Char('+') => Command::Operator(Operation::Add),
        Key::Char('-') => Command::Operator(Operation::Subtract),
        Key::Char('*') => Command::Operator(Operation::Multiply),
        Key::Char('/') => Command::Operator(Operation::Divide),
        Key::Char('=') | Key::Return => Command::Equals,
        Key::Char('c') | Key::Char('C') | Key::Escape => Command::Clear,
        Key::Backspace => Command::Delete,
        _ => return None,
    };
    Some(command)
}

/// Routes a command to the engine method it names.
pub fn dispatch(calculator: &mut Calculator, command: Command) {
    match command {
        Command::Digit(digit) => calculator.enter_digit(digit),
        Command::Decimal => calculator.enter_decimal(),
        Command::Operator(operation) => calculator.choose_operation(operation),
        Command::Equals => calculator.compute(),
        Command::Clear => calculator.clear(),
        Command::Delete => calculator.delete_last(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_digit_commands() {
        for c in '0'..='9' {
            assert_eq!(command_for_key(Key::Char(c)), Some(Command::Digit(c)));
        }
    }

    #[test]
    fn operator_characters_map_to_operations() {
        assert_eq!(
            command_for_key(Key::Char('+')),
            Some(Command::Operator(Operation::Add))
        );
        assert_eq!(
            command_for_key(Key::Char('-')),
            Some(Command::Operator(Operation::Subtract))
        );
        assert_eq!(
            command_for_key(Key::Char('*')),
            Some(Command::Operator(Operation::Multiply))
        );
        assert_eq!(
            command_for_key(Key::Char('/')),
            Some(Command::Operator(Operation::Divide))
        );
    }

    #[test]
    fn equals_bound_to_equals_sign_and_return() {
        assert_eq!(command_for_key(Key::Char('=')), Some(Command::Equals));
        assert_eq!(command_for_key(Key::Return), Some(Command::Equals));
    }

    #[test]
    fn clear_bound_to_escape_and_c() {
        assert_eq!(command_for_key(Key::Escape), Some(Command::Clear));
        assert_eq!(command_for_key(Key::Char('c')), Some(Command::Clear));
        assert_eq!(command_for_key(Key::Char('C')), Some(Command::Clear));
    }

    #[test]
    fn delete_bound_to_backspace() {
        assert_eq!(command_for_key(Key::Backspace), Some(Command::Delete));
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        assert_eq!(command_for_key(Key::Char('x')), None);
        assert_eq!(command_for_key(Key::Char('#')), None);
        assert_eq!(command_for_key(Key::Unknown), None);
    }

    #[test]
    fn dispatch_routes_to_engine() {
        let mut calculator = Calculator::new();

        dispatch(&mut calculator, Command::Digit('5'));
        dispatch(&mut calculator, Command::Operator(Operation::Add));
        dispatch(&mut calculator, Command::Digit('3'));
        dispatch(&mut calculator, Command::Equals);
        assert_eq!(calculator.current_operand, "8");

        dispatch(&mut calculator, Command::Clear);
        assert_eq!(calculator.current_operand, "0");
    }
}
