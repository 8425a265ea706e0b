use core::fmt;
use std::fmt::Display;

use crate::{card::Effect, error::InvalidMove};

/// Something that happened to a player while a move was resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnEvent {
    UnoPenalty { player: String },
    Skipped { player: String },
    DrewTwo { player: String },
    DrewFour { player: String },
    ForcedDraw { player: String, count: usize },
}

impl TurnEvent {
    pub fn player(&self) -> &str {
        match self {
            TurnEvent::UnoPenalty { player }
            | TurnEvent::Skipped { player }
            | TurnEvent::DrewTwo { player }
            | TurnEvent::DrewFour { player }
            | TurnEvent::ForcedDraw { player, .. } => player,
        }
    }
}

impl Display for TurnEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnEvent::UnoPenalty { player } => write!(f, "{player}: Failed to call UNO"),
            TurnEvent::Skipped { player } => write!(f, "{player}: You got skipped"),
            TurnEvent::DrewTwo { player } => write!(f, "{player}: You had to draw two cards"),
            TurnEvent::DrewFour { player } => write!(f, "{player}: You had to draw four cards"),
            TurnEvent::ForcedDraw { player, count } => write!(
                f,
                "{player}: You had no cards that could play, you drew {count} from the deck"
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayTurnResult {
    pub result: Result<Effect, InvalidMove>,
    pub events: Vec<TurnEvent>,
}

impl PlayTurnResult {
    pub(crate) fn rejected(reason: InvalidMove) -> Self {
        Self {
            result: Err(reason),
            events: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn effect(&self) -> Option<Effect> {
        self.result.as_ref().ok().copied()
    }

    /// Human readable lines, in the order the events happened.
    pub fn messages(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}
