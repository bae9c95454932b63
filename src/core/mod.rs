//! Core state machine types.
//!
//! This module contains the building blocks every machine is made of:
//! - State and event definitions via the `State` and `Event` traits
//! - Guard predicates that decide whether a transition applies
//! - Actions that commit a transition's effect to memory
//! - Immutable history of accepted transitions

mod action;
mod event;
mod guard;
mod history;
mod state;

pub use action::Action;
pub use event::Event;
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
