//! Input handling: key events and the engine command vocabulary.
//!
//! This module translates frontend key events into discrete calculator
//! commands. The frontend feeds keys through [`command_for_key`] and
//! [`dispatch`]; the engine never sees raw input.

pub mod events;
pub mod keymap;

// Re-export commonly used types at module level
pub use events::Key;
pub use keymap::{Command, command_for_key, dispatch};
