use thiserror::Error;

use crate::card::Card;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UnoError {
    #[error("Not enough players")]
    NotEnoughPlayers,
    #[error("Too many players")]
    TooManyPlayers,
    #[error("Player name `{0}` is taken")]
    DuplicatePlayerName(String),
    #[error("Player names cannot be empty")]
    EmptyPlayerName,
    #[error("No colored card left to start the discard pile")]
    NoStartingCard,
}

/// Why a submitted move was rejected. Every variant leaves the game untouched and the same
/// player keeps the turn.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("Expected a color and a rank")]
    MissingToken,
    #[error("Unknown color `{0}`")]
    UnknownColor(String),
    #[error("Unknown rank `{0}`")]
    UnknownRank(String),
    #[error("Wild cards need a color to be played as")]
    ColorNotNominated,
    #[error("Only wild cards can be played without a color")]
    WildColorOnColoredCard,
    #[error("{0} is not in hand")]
    CardNotInHand(Card),
    #[error("{card} cannot be played on {top}")]
    CardNotPlayable { card: Card, top: Card },
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
