use rand::{seq::SliceRandom, Rng};
use strum::IntoEnumIterator;

use crate::{
    card::{Card, CardColor, CardRank},
    constants::*,
};

/// An ordered stack of cards. The last element of the inner vector is the top.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Pile(Vec<Card>);

impl Pile {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// A complete, unshuffled 108 card deck.
    pub fn full_deck() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK);

        for color in CardColor::iter().filter(|color| color.is_concrete()) {
            // Skip Cards
            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push(Card::new(CardRank::Skip, color));
            }

            // Reverse Cards
            for _ in 0..REVERSE_CARDS_PER_COLOR {
                cards.push(Card::new(CardRank::Reverse, color));
            }

            // Draw Two Cards
            for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
                cards.push(Card::new(CardRank::DrawTwo, color));
            }

            // Number Cards
            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::new(CardRank::Number(*number), color));
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::wild());
        }

        for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
            cards.push(Card::wild_draw_four());
        }

        Self(cards)
    }

    pub(crate) fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    pub fn draw_top(&mut self) -> Option<Card> {
        self.0.pop()
    }

    pub fn add_to_top(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn peek_top(&self) -> Option<&Card> {
        self.0.last()
    }

    /// Removes the card closest to the top that is not wild.
    pub(crate) fn draw_colored_card(&mut self) -> Option<Card> {
        self.0
            .iter()
            .rposition(|card| !card.is_wild())
            .map(|pos| self.0.remove(pos))
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cards from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.0.iter().rev()
    }
}

impl FromIterator<Card> for Pile {
    /// Collects cards so that the first one yielded ends up on top.
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut cards: Vec<Card> = iter.into_iter().collect();
        cards.reverse();
        Self(cards)
    }
}

/// The discard pile. It always has a top card, the active card every play is matched against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardPile {
    top: Card,
    under: Pile,
}

impl DiscardPile {
    pub fn new(top: Card) -> Self {
        Self {
            top,
            under: Pile::new(),
        }
    }

    pub fn top(&self) -> &Card {
        &self.top
    }

    pub fn add_to_top(&mut self, card: Card) {
        let previous = std::mem::replace(&mut self.top, card);
        self.under.add_to_top(previous);
    }

    pub fn cards_count(&self) -> usize {
        self.under.cards_count() + 1
    }

    /// Moves every card except the top one out of this pile.
    pub(crate) fn take_all_but_top(&mut self) -> Pile {
        std::mem::take(&mut self.under)
    }
}
