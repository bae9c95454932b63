//! Transition engine.
//!
//! A table of guarded transitions keyed by (source state, event), evaluated
//! against a single memory record the machine owns.
//!
//! # Key Concepts
//!
//! - **Guards decide**: pure predicates over (state, memory, event, data);
//!   `can_fire` only ever runs guards, so it is safe to call speculatively
//! - **Actions commit**: ordered callbacks that mutate memory once a
//!   transition has been selected
//! - **Registration order matters**: under one key the first transition
//!   whose guards all pass is the one that fires
//!
//! # Example
//!
//! ```rust
//! use bazar::engine::{Fsm, FsmError, Transition};
//! use bazar::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Phase {
//!         Waiting,
//!         Done,
//!     }
//!     final: [Done]
//! }
//!
//! event_enum! {
//!     enum Signal {
//!         Tick,
//!     }
//! }
//!
//! let mut fsm: Fsm<Phase, Signal, u32, u32> = Fsm::new(Phase::Waiting, 0);
//! fsm.add_transition(
//!     Transition::<Phase, Signal, u32, u32>::new(Signal::Tick, Phase::Waiting, Phase::Waiting)
//!         .when(|_, ticks, _, _| *ticks < 2)
//!         .then(|_, _, ticks, _, _| *ticks += 1),
//! );
//! fsm.add_transition(Transition::new(Signal::Tick, Phase::Waiting, Phase::Done));
//!
//! assert_eq!(fsm.fire(&Signal::Tick, &0), Ok(true));
//! assert_eq!(fsm.fire(&Signal::Tick, &0), Ok(true));
//! assert_eq!(fsm.fire(&Signal::Tick, &0), Ok(false));
//! assert_eq!(fsm.current_state(), &Phase::Done);
//! assert!(matches!(
//!     fsm.fire(&Signal::Tick, &0),
//!     Err(FsmError::NoSuchTransition { .. })
//! ));
//! ```

mod error;
mod machine;
mod transition;

pub use error::FsmError;
pub use machine::Fsm;
pub use transition::Transition;
