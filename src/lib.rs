//! Bazar: a condition-guarded state machine and the card-bidding auction
//! built on it.
//!
//! The engine keeps a table of transitions keyed by (state, event). Guards
//! decide whether a transition applies and can only read memory; actions
//! commit its effect and run only after a transition has been selected.
//! Asking "could this happen?" is therefore always free of side effects.
//!
//! # Core Concepts
//!
//! - **State / Event**: closed enums implementing the `State` and `Event` traits
//! - **Guards**: pure predicates over (state, memory, event, data)
//! - **Actions**: ordered callbacks that mutate the machine memory
//! - **Auction**: the bazar bidding protocol expressed as a transition table
//! - **Tables**: a registry serializing access to one auction per table
//!
//! # Example
//!
//! ```rust
//! use bazar::auction::{Auction, AuctionRules, AuctionState, Player};
//!
//! let mut auction = Auction::new(AuctionRules::default())?;
//!
//! for player in [Player::A, Player::B, Player::C] {
//!     assert!(auction.do_pass(player)?);
//! }
//! assert!(!auction.do_pass(Player::D)?);
//! assert_eq!(auction.outcome(), Some(AuctionState::Redial));
//! # Ok::<(), bazar::auction::AuctionError>(())
//! ```

pub mod auction;
pub mod builder;
pub mod core;
pub mod engine;
pub mod tables;

// Re-export commonly used types
pub use auction::{Auction, AuctionError, AuctionRules, AuctionState, Player, Suit};
pub use self::core::{Event, Guard, State, StateHistory, StateTransition};
pub use engine::{Fsm, FsmError, Transition};
pub use tables::{AuctionTables, TableError, TableId};
