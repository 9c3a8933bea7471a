//! Calculator state machine types.

/// Literal display value shown after a division by zero.
///
/// The error is baked into state rather than propagated, so the frontend
/// renders it like any other operand and never handles a failure path.
pub const ERROR_DISPLAY: &str = "Error";

/// Binary arithmetic operation pending application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (`+` key)
    Add,
    /// Subtraction (`-` key)
    Subtract,
    /// Multiplication (`*` key)
    Multiply,
    /// Division (`/` key)
    Divide,
}

impl Operation {
    /// Human-readable symbol shown on the expression line.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "−",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }
}

/// Calculator state machine.
///
/// Holds the operand being typed, the left-hand operand captured when an
/// operator was chosen, and the pending operation. Operands stay in their
/// decimal text form until arithmetic needs them, so partial entries like a
/// trailing `.` survive on the display exactly as typed.
///
/// State transitions happen only through the command methods in
/// `commands.rs`; there is exactly one instance per session and no command
/// ever fails outward.
#[derive(Debug)]
pub struct Calculator {
    /// Digit/decimal sequence being typed, or the literal error marker
    pub current_operand: String,
    /// Left-hand operand captured when an operator was chosen; empty when
    /// no operation is pending
    pub previous_operand: String,
    /// Pending binary operation (set together with `previous_operand`)
    pub operation: Option<Operation>,
    /// The next digit/decimal entry starts a new number instead of
    /// appending (set after a computed result or error)
    pub awaiting_fresh_input: bool,
    /// Thousands separator used when formatting computed results
    group_separator: char,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator in its identity configuration.
    pub fn new() -> Self {
        Self::with_defaults(',')
    }

    /// Creates a calculator with the given result formatting separator.
    ///
    /// The separator comes from the display configuration and must not be
    /// a character that can occur inside an operand (the config layer
    /// validates this).
    pub fn with_defaults(group_separator: char) -> Self {
        Self {
            current_operand: "0".to_string(),
            previous_operand: String::new(),
            operation: None,
            awaiting_fresh_input: false,
            group_separator,
        }
    }

    /// Returns the configured thousands separator.
    pub fn group_separator(&self) -> char {
        self.group_separator
    }

    /// Parses an operand's decimal text, tolerating the formatter's own
    /// grouping separators.
    ///
    /// Computed results are stored in their formatted form, so a chained
    /// operation has to strip the separators back out before arithmetic.
    /// Returns `None` for anything that is not a number, including the
    /// empty string and the error marker.
    pub(crate) fn parse_operand(&self, text: &str) -> Option<f64> {
        let raw: String = text
            .chars()
            .filter(|c| *c != self.group_separator)
            .collect();
        raw.parse().ok()
    }
}
