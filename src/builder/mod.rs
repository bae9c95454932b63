//! Builder API for ergonomic state machine construction.
//!
//! This module provides a validating builder and macros for declaring the
//! state and event enums a machine is keyed by.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::FsmBuilder;
