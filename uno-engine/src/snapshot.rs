use crate::{card::Card, turn_order::Direction};

/// Read-only view of a match for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub active_player: String,
    pub next_player: String,
    pub discard_top: Card,
    pub direction: Direction,
    pub deck_count: usize,
    pub discard_count: usize,
    pub players: Vec<PlayerSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub name: String,
    pub cards: Vec<Card>,
}

impl GameSnapshot {
    pub fn player(&self, name: &str) -> Option<&PlayerSnapshot> {
        self.players.iter().find(|player| player.name == name)
    }

    pub fn active_hand(&self) -> &[Card] {
        self.player(&self.active_player)
            .map(|player| player.cards.as_slice())
            .unwrap_or_default()
    }

    /// Cards across the deck, the discard pile and every hand.
    pub fn total_cards(&self) -> usize {
        self.deck_count
            + self.discard_count
            + self
                .players
                .iter()
                .map(|player| player.cards.len())
                .sum::<usize>()
    }
}
