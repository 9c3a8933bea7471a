use super::format::format_number;
use super::state::{Calculator, ERROR_DISPLAY, Operation};

impl Calculator {
    /// Appends a decimal digit to the operand being typed.
    ///
    /// When the fresh-input flag is set (after a result or error), the
    /// operand is emptied first so the digit starts a new number. A lone
    /// `"0"` is replaced rather than extended, so operands never carry a
    /// redundant leading zero.
    pub fn enter_digit(&mut self, digit: char) {
        debug_assert!(digit.is_ascii_digit());

        if self.awaiting_fresh_input {
            self.current_operand.clear();
            self.awaiting_fresh_input = false;
        }

        if self.current_operand == "0" {
            self.current_operand.clear();
        }
        self.current_operand.push(digit);
    }

    /// Appends the decimal point, at most once per operand.
    ///
    /// When the fresh-input flag is set the operand restarts as `"0"`, so
    /// the entry reads `0.` instead of a bare point.
    pub fn enter_decimal(&mut self) {
        if self.awaiting_fresh_input {
            self.current_operand = "0".to_string();
            self.awaiting_fresh_input = false;
        }

        if !self.current_operand.contains('.') {
            self.current_operand.push('.');
        }
    }

    /// Captures the typed operand and the operation to apply to it.
    ///
    /// Ignored while the current operand is empty (an operator was already
    /// chosen and nothing has been typed since). If an operation is
    /// pending, it is folded first via [`Calculator::compute`], chaining
    /// left to right with no precedence.
    pub fn choose_operation(&mut self, operation: Operation) {
        if self.current_operand.is_empty() {
            return;
        }

        if !self.previous_operand.is_empty() {
            self.compute();
        }

        self.operation = Some(operation);
        self.previous_operand = std::mem::take(&mut self.current_operand);
    }

    /// Applies the pending operation to both operands.
    ///
    /// A silent no-op when no operation is set or either operand fails to
    /// parse (empty, a bare `.`, or the error marker). Division by exactly
    /// zero transitions to the error display state instead of propagating
    /// anything. On success the formatted result becomes the current
    /// operand and the next entry starts a new number.
    pub fn compute(&mut self) {
        let Some(operation) = self.operation else {
            return;
        };
        let (Some(lhs), Some(rhs)) = (
            self.parse_operand(&self.previous_operand),
            self.parse_operand(&self.current_operand),
        ) else {
            return;
        };

        let result = match operation {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
            Operation::Multiply => lhs * rhs,
            Operation::Divide => {
                if rhs == 0.0 {
                    log::warn!("Division by zero, entering error state");
                    self.current_operand = ERROR_DISPLAY.to_string();
                    self.previous_operand.clear();
                    self.operation = None;
                    self.awaiting_fresh_input = true;
                    return;
                }
                lhs / rhs
            }
        };

        self.current_operand = format_number(result, self.group_separator());
        self.previous_operand.clear();
        self.operation = None;
        self.awaiting_fresh_input = true;
        log::debug!(
            "Computed {} {} {} = {}",
            lhs,
            operation.symbol(),
            rhs,
            self.current_operand
        );
    }

    /// Removes the last typed character.
    ///
    /// On the error marker this is equivalent to [`Calculator::clear`].
    /// Deleting the last remaining character resets the operand to `"0"`
    /// so the display is never blank.
    pub fn delete_last(&mut self) {
        if self.current_operand == ERROR_DISPLAY {
            self.clear();
            return;
        }

        if self.current_operand.chars().count() == 1 {
            self.current_operand = "0".to_string();
        } else {
            self.current_operand.pop();
        }
    }

    /// Returns every field to the identity configuration.
    pub fn clear(&mut self) {
        self.current_operand = "0".to_string();
        self.previous_operand.clear();
        self.operation = None;
        self.awaiting_fresh_input = false;
    }
}
