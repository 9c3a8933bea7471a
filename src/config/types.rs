//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Result formatting preferences.
///
/// Controls how computed results and the pending expression line are
/// rendered. The operand being typed is never formatted.
#[derive(Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Single character inserted between digit groups of computed results.
    /// Digits, `.` and `-` are rejected because they can occur inside an
    /// operand (see `Config::validate_and_clamp`).
    #[serde(default = "default_group_separator")]
    pub group_separator: char,

    /// Show the pending expression (previous operand and operator) on the
    /// line above the operand being typed
    #[serde(default = "default_show_expression")]
    pub show_expression: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            group_separator: default_group_separator(),
            show_expression: default_show_expression(),
        }
    }
}

/// Interactive session preferences.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReplConfig {
    /// Prompt printed before each input line
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Print the key reference when an interactive session starts
    #[serde(default = "default_show_banner")]
    pub show_banner: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            show_banner: default_show_banner(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_group_separator() -> char {
    ','
}

fn default_show_expression() -> bool {
    true
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_show_banner() -> bool {
    true
}
