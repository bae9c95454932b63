//! The bazar bidding protocol.
//!
//! Four players in two partnerships bid in turn for the right to name
//! trumps. A bid must reach the minimum and beat the standing bid; four
//! consecutive passes close the round. A standing bid may be doubled by the
//! other team (contra) and redoubled by the bidding team (recontra), and a
//! bid may be declared capo, which every later bid inherits.
//!
//! # Example
//!
//! ```rust
//! use bazar::auction::{Auction, AuctionRules, AuctionState, Player, Suit};
//!
//! let mut auction = Auction::new(AuctionRules::default())?;
//!
//! assert!(auction.can_bet(Player::A, Suit::Hearts, 10, false));
//! auction.do_bet(Player::A, Suit::Hearts, 10, false)?;
//! assert_eq!(auction.current_player(), Player::B);
//!
//! // B is on the other team and may double A's bid
//! auction.do_contra(Player::B)?;
//! assert_eq!(auction.state(), AuctionState::Contra);
//!
//! // A's partner answers before the window closes
//! let continues = auction.do_recontra(Player::C)?;
//! assert!(!continues);
//! assert_eq!(auction.outcome(), Some(AuctionState::Play));
//! # Ok::<(), bazar::auction::AuctionError>(())
//! ```

mod actions;
#[allow(clippy::module_inception)]
mod auction;
mod chart;
mod error;
mod guards;
mod model;
mod player;
mod rules;

pub use auction::Auction;
pub use chart::{bidding_chart, AuctionTransition};
pub use error::AuctionError;
pub use model::{AuctionEvent, AuctionState, EventData, LastBet, Memory};
pub use player::{Player, Suit, Team, PLAYER_COUNT};
pub use rules::{AuctionRules, DEFAULT_CONTRA_WINDOW_SECS, DEFAULT_MIN_BET, DEFAULT_MIN_CAPO_BET};
