use crate::card::{Card, Move};

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    pub hand: Vec<Card>,
}

impl Player {
    pub fn new(name: String) -> Self {
        Self {
            name,
            hand: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn is_out_of_cards(&self) -> bool {
        self.hand.is_empty()
    }

    /// Position of the first card in hand named by `mv`.
    pub fn card_index(&self, mv: &Move) -> Option<usize> {
        self.hand.iter().position(|card| mv.names(card))
    }

    pub fn has_match_in_hand(&self, top: &Card) -> bool {
        self.hand.iter().any(|card| card.matches(top))
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn remove_card(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }
}
