//! Rules engine for a game of UNO with any number of players from two to ten.
//!
//! A match is an [`uno::Uno`]. Moves come in as text (`"red 5"`, `"blue wild4"`) or as a
//! parsed [`card::Move`], and each one is resolved completely before the call returns.

pub mod card;
pub mod config;
pub mod constants;
pub mod dealer;
pub mod error;
pub mod pile;
pub mod player;
pub mod snapshot;
pub mod turn;
pub mod turn_order;
pub mod uno;
