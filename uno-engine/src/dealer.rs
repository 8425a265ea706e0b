use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::{
    card::Card,
    config::GameConfig,
    pile::{DiscardPile, Pile},
    player::Player,
};

/// Moves cards between the deck, the discard pile and the hands.
///
/// All shuffles of a match draw from the dealer's RNG, so a seeded dealer deals the same
/// match every time.
#[derive(Debug, Clone)]
pub struct Dealer {
    rng: ChaCha8Rng,
}

impl Dealer {
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { rng }
    }

    pub fn shuffle_deck(&mut self, deck: &mut Pile) {
        deck.shuffle(&mut self.rng);
    }

    /// Deals the top card of the deck to `player`, first refilling the deck from the discard
    /// pile when it is empty. Returns `None` only when neither pile has a card to give.
    pub fn deal_card_to_player(
        &mut self,
        deck: &mut Pile,
        discard: &mut DiscardPile,
        player: &mut Player,
    ) -> Option<Card> {
        if deck.is_empty() {
            self.replenish(deck, discard);
        }

        let Some(card) = deck.draw_top() else {
            warn!(player = player.name(), "deck and discard pile are exhausted");
            return None;
        };

        debug!(player = player.name(), %card, "dealt card");
        player.add_card(card);
        Some(card)
    }

    /// Deals up to `count` cards and returns how many were actually dealt.
    pub fn deal_cards_to_player(
        &mut self,
        deck: &mut Pile,
        discard: &mut DiscardPile,
        player: &mut Player,
        count: usize,
    ) -> usize {
        (0..count)
            .map_while(|_| self.deal_card_to_player(deck, discard, player))
            .count()
    }

    /// Deals `hand_size` cards to every player, one at a time and in seating order.
    pub fn deal_hands(&mut self, deck: &mut Pile, players: &mut [Player], hand_size: usize) {
        for _ in 0..hand_size {
            for player in players.iter_mut() {
                if let Some(card) = deck.draw_top() {
                    player.add_card(card);
                }
            }
        }
        debug!(players = players.len(), hand_size, "dealt hands");
    }

    /// Seeds the discard pile with the first colored card from the top of the deck.
    pub fn start_discard_pile(&mut self, deck: &mut Pile) -> Option<DiscardPile> {
        let card = deck.draw_colored_card()?;
        debug!(%card, "started discard pile");
        Some(DiscardPile::new(card))
    }

    /// Turns everything under the discard pile's top card into a freshly shuffled deck.
    fn replenish(&mut self, deck: &mut Pile, discard: &mut DiscardPile) {
        let total_before = deck.cards_count() + discard.cards_count();

        let mut recycled: Pile = discard
            .take_all_but_top()
            .iter()
            .map(|card| card.unnominated())
            .collect();
        recycled.shuffle(&mut self.rng);

        for card in recycled.iter() {
            deck.add_to_top(*card);
        }

        debug_assert_eq!(deck.cards_count() + discard.cards_count(), total_before);
        debug!(deck = deck.cards_count(), "replenished deck from discard pile");
    }
}
