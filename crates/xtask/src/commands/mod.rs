//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod check_settings;
mod compare;
mod resolve;

pub use check_settings::CheckSettings;
pub use compare::Compare;
pub use resolve::Resolve;
