//! Display formatting for calculator state.

use super::state::Calculator;

/// Text pair pushed to the two display lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayText {
    /// The operand being typed (or the error marker), exactly as entered
    pub primary: String,
    /// Pending expression: formatted previous operand and operation symbol;
    /// empty when no operation is pending
    pub secondary: String,
}

impl Calculator {
    /// Builds the two display lines from the current state.
    ///
    /// The primary line is deliberately left unformatted so partial
    /// entries (a trailing `.`, a half-deleted number) show exactly as
    /// typed. A previous operand that does not parse formats as the empty
    /// string, leaving just the operation symbol on the expression line.
    pub fn display_text(&self) -> DisplayText {
        let secondary = match self.operation {
            Some(operation) => {
                let previous = self
                    .parse_operand(&self.previous_operand)
                    .map(|value| format_number(value, self.group_separator()))
                    .unwrap_or_default();
                format!("{} {}", previous, operation.symbol())
            }
            None => String::new(),
        };

        DisplayText {
            primary: self.current_operand.clone(),
            secondary,
        }
    }
}

/// Formats a number with thousands grouping on its integer part.
///
/// The value's shortest decimal representation is split at the first `.`;
/// the integer part is grouped with `separator` and the fractional part,
/// if any, is reattached verbatim. An integer part that does not fit a
/// plain integer (exponent-free values beyond `i64`) renders as the empty
/// string rather than a wrong number.
pub fn format_number(value: f64, separator: char) -> String {
    let text = value.to_string();
    let (integer_text, fraction) = match text.split_once('.') {
        Some((integer_part, fraction_part)) => (integer_part, Some(fraction_part)),
        None => (text.as_str(), None),
    };

    let integer_display = integer_text
        .parse::<i64>()
        .map(|integer| group_integer(integer, separator))
        .unwrap_or_default();

    match fraction {
        Some(fraction_part) => format!("{integer_display}.{fraction_part}"),
        None => integer_display,
    }
}

/// Renders an integer with a separator between every group of three digits.
fn group_integer(value: i64, separator: char) -> String {
    let is_negative = value < 0;
    let digits = value.unsigned_abs().to_string();

    let mut reversed = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push(separator);
        }
        reversed.push(c);
    }

    let grouped: String = reversed.chars().rev().collect();
    if is_negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}
