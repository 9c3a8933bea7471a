//! Terminal rendering of the calculator display.
//!
//! The display is at most two lines of text: the pending expression
//! (secondary) above the operand being typed (primary), mirroring the
//! two-row readout of an on-screen calculator.

use crate::config::DisplayConfig;
use crate::engine::Calculator;

/// Renders the calculator display as terminal text.
///
/// The secondary line is omitted when it is empty or disabled in config,
/// so a calculator with no pending operation renders as a single line.
pub fn render_display(calculator: &Calculator, display: &DisplayConfig) -> String {
    let text = calculator.display_text();

    if display.show_expression && !text.secondary.is_empty() {
        format!("{}\n{}", text.secondary, text.primary)
    } else {
        text.primary
    }
}

/// Key reference printed when an interactive session starts.
pub fn banner() -> String {
    [
        "deskcalc: four-function desk calculator",
        "",
        "Keys:",
        "  0-9 and .    enter digits and the decimal point",
        "  + - * /      choose an operation",
        "  = or Enter   compute",
        "  c            clear",
        "  q            quit",
        "",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crate::engine::Operation;

    fn make_calculator_with_pending() -> Calculator {
        let mut calculator = Calculator::new();
        calculator.enter_digit('5');
        calculator.choose_operation(Operation::Add);
        calculator.enter_digit('3');
        calculator
    }

    #[test]
    fn pending_expression_renders_above_operand() {
        let calculator = make_calculator_with_pending();
        let rendered = render_display(&calculator, &DisplayConfig::default());
        assert_eq!(rendered, "5 +\n3");
    }

    #[test]
    fn expression_line_can_be_disabled() {
        let calculator = make_calculator_with_pending();
        let display = DisplayConfig {
            show_expression: false,
            ..DisplayConfig::default()
        };
        assert_eq!(render_display(&calculator, &display), "3");
    }

    #[test]
    fn single_line_without_pending_operation() {
        let mut calculator = Calculator::new();
        calculator.enter_digit('7');
        assert_eq!(
            render_display(&calculator, &DisplayConfig::default()),
            "7"
        );
    }
}
