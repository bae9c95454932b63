//! Actions of the bidding chart. Each one commits a single fact to memory.

use crate::auction::model::{AuctionEvent, AuctionState, EventData, Memory};

pub fn save_bet(
    _: &AuctionState,
    _: &AuctionState,
    memory: &mut Memory,
    _: &AuctionEvent,
    data: &EventData,
) {
    memory.last_bet_player = data.player;
    memory.last_bet_suit = data.suit;
    memory.last_bet_amount = data.amount;
}

pub fn mark_capo(
    _: &AuctionState,
    _: &AuctionState,
    memory: &mut Memory,
    _: &AuctionEvent,
    _: &EventData,
) {
    memory.capo = true;
}

pub fn reset_pass_count(
    _: &AuctionState,
    _: &AuctionState,
    memory: &mut Memory,
    _: &AuctionEvent,
    _: &EventData,
) {
    memory.pass_count = 0;
}

pub fn increment_pass_count(
    _: &AuctionState,
    _: &AuctionState,
    memory: &mut Memory,
    _: &AuctionEvent,
    _: &EventData,
) {
    memory.pass_count += 1;
}

pub fn advance_turn(
    _: &AuctionState,
    _: &AuctionState,
    memory: &mut Memory,
    _: &AuctionEvent,
    _: &EventData,
) {
    memory.current_player = memory.current_player.next();
}

pub fn mark_contra(
    _: &AuctionState,
    _: &AuctionState,
    memory: &mut Memory,
    _: &AuctionEvent,
    _: &EventData,
) {
    memory.contra = true;
}

pub fn mark_recontra(
    _: &AuctionState,
    _: &AuctionState,
    memory: &mut Memory,
    _: &AuctionEvent,
    _: &EventData,
) {
    memory.recontra = true;
}
