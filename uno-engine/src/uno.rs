use std::collections::HashSet;

use tracing::{debug, info};

use crate::card::{Card, Effect, Move};
use crate::config::GameConfig;
use crate::constants::*;
use crate::dealer::Dealer;
use crate::error::{InvalidMove, Result, UnoError};
use crate::pile::{DiscardPile, Pile};
use crate::player::Player;
use crate::snapshot::{GameSnapshot, PlayerSnapshot};
use crate::turn::{PlayTurnResult, TurnEvent};
use crate::turn_order::{Direction, TurnOrder};

/// A single match. The first player is the dealer.
#[derive(Debug)]
pub struct Uno {
    players: Vec<Player>,
    dealer: Dealer,
    deck: Pile,
    discard: DiscardPile,
    turn_order: TurnOrder,
}

impl Uno {
    pub fn new(player_names: Vec<String>) -> Result<Self> {
        Self::with_config(player_names, GameConfig::default())
    }

    /// Sets up a match ready for its first move: hands are dealt, the discard pile is
    /// started and the player after the dealer holds a playable card.
    pub fn with_config(player_names: Vec<String>, config: GameConfig) -> Result<Self> {
        validate_player_names(&player_names)?;

        let mut dealer = Dealer::new(&config);
        let mut deck = Pile::full_deck();
        let mut players = player_names
            .into_iter()
            .map(Player::new)
            .collect::<Vec<_>>();

        dealer.shuffle_deck(&mut deck);
        dealer.deal_hands(&mut deck, &mut players, HAND_SIZE);

        let discard = dealer
            .start_discard_pile(&mut deck)
            .ok_or(UnoError::NoStartingCard)?;

        let turn_order = TurnOrder::new(players.len());

        let mut uno = Uno {
            players,
            dealer,
            deck,
            discard,
            turn_order,
        };
        uno.init();
        Ok(uno)
    }

    fn init(&mut self) {
        // Player after the dealer goes first
        self.turn_order.advance();

        if let Some(event) = self.force_draw_until_playable() {
            debug!(%event, "first player drew before the first move");
        }

        info!(
            players = self.players.len(),
            first = self.get_current_player().name(),
            top = %self.discard.top(),
            "match started"
        );
    }

    /// Parses `input` as `<color> <rank>` and plays it for the current player.
    pub fn submit_move(&mut self, input: &str, declared_uno: bool) -> PlayTurnResult {
        match input.parse::<Move>() {
            Ok(mv) => self.advance_turn(mv, declared_uno),
            Err(reason) => {
                debug!(input, %reason, "rejected move");
                PlayTurnResult::rejected(reason)
            }
        }
    }

    /// Plays `mv` for the current player and resolves everything it sets off. A rejected
    /// move changes nothing.
    pub fn advance_turn(&mut self, mv: Move, declared_uno: bool) -> PlayTurnResult {
        let seat = self.turn_order.current();
        let top = *self.discard.top();
        let player = &mut self.players[seat];

        if let Err(reason) = mv.validate() {
            debug!(player = player.name(), %mv, %reason, "rejected move");
            return PlayTurnResult::rejected(reason);
        }

        let Some(hand_card_index) = player.card_index(&mv) else {
            let reason = InvalidMove::CardNotInHand(Card::new(mv.rank, mv.color));
            debug!(player = player.name(), %mv, %reason, "rejected move");
            return PlayTurnResult::rejected(reason);
        };

        let card = player.hand[hand_card_index];
        if !card.matches(&top) {
            let reason = InvalidMove::CardNotPlayable { card, top };
            debug!(player = player.name(), %mv, %reason, "rejected move");
            return PlayTurnResult::rejected(reason);
        }

        player.remove_card(hand_card_index);
        let played = card.nominate(mv.color);
        self.discard.add_to_top(played);
        info!(player = self.players[seat].name(), card = %played, "played card");

        let mut events = Vec::new();

        if self.players[seat].cards_count() == 1 && !declared_uno {
            self.deal_to_seat(seat, UNO_PENALTY_CARDS);
            events.push(TurnEvent::UnoPenalty {
                player: self.player_name(seat),
            });
        }

        let effect = card.rank.effect();
        match effect {
            Effect::Plain | Effect::Wild => {
                self.turn_order.advance();
            }
            Effect::Skip => {
                let skipped = self.turn_order.advance();
                events.push(TurnEvent::Skipped {
                    player: self.player_name(skipped),
                });
                self.turn_order.advance();
            }
            Effect::Reverse => {
                self.turn_order.reverse();
                self.turn_order.advance();
            }
            Effect::DrawTwo => {
                let victim = self.turn_order.advance();
                self.deal_to_seat(victim, DRAW_TWO_CARDS);
                events.push(TurnEvent::DrewTwo {
                    player: self.player_name(victim),
                });
                self.turn_order.advance();
            }
            Effect::WildDrawFour => {
                let victim = self.turn_order.advance();
                self.deal_to_seat(victim, DRAW_FOUR_CARDS);
                events.push(TurnEvent::DrewFour {
                    player: self.player_name(victim),
                });
                self.turn_order.advance();
            }
        }
        info!(%effect, next = self.get_current_player().name(), "resolved effect");

        if let Some(event) = self.force_draw_until_playable() {
            events.push(event);
        }

        PlayTurnResult {
            result: Ok(effect),
            events,
        }
    }

    /// The first player, in seating order, without cards.
    pub fn check_win(&self) -> Option<&str> {
        self.players
            .iter()
            .find(|player| player.is_out_of_cards())
            .map(Player::name)
    }

    pub fn get_snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            active_player: self.get_current_player().name().to_string(),
            next_player: self.get_next_player().name().to_string(),
            discard_top: *self.discard.top(),
            direction: self.turn_order.direction(),
            deck_count: self.deck.cards_count(),
            discard_count: self.discard.cards_count(),
            players: self
                .players
                .iter()
                .map(|player| PlayerSnapshot {
                    name: player.name().to_string(),
                    cards: player.hand.clone(),
                })
                .collect(),
        }
    }

    pub fn get_players(&self) -> &[Player] {
        &self.players
    }

    pub fn get_player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name() == name)
    }

    pub fn get_player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.name() == name)
    }

    pub fn get_current_player(&self) -> &Player {
        &self.players[self.turn_order.current()]
    }

    pub fn get_current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.turn_order.current()]
    }

    pub fn get_next_player(&self) -> &Player {
        &self.players[self.turn_order.peek_next()]
    }

    pub fn get_discard_top(&self) -> &Card {
        self.discard.top()
    }

    pub fn get_direction(&self) -> Direction {
        self.turn_order.direction()
    }

    fn player_name(&self, seat: usize) -> String {
        self.players[seat].name().to_string()
    }

    fn deal_to_seat(&mut self, seat: usize, count: usize) -> usize {
        self.dealer.deal_cards_to_player(
            &mut self.deck,
            &mut self.discard,
            &mut self.players[seat],
            count,
        )
    }

    /// Deals to the current player one card at a time until they can play. Stops early once
    /// the match is won or no card is left to deal.
    fn force_draw_until_playable(&mut self) -> Option<TurnEvent> {
        if self.check_win().is_some() {
            return None;
        }

        let seat = self.turn_order.current();
        let mut drawn = 0;
        while !self.players[seat].has_match_in_hand(self.discard.top()) {
            if self.deal_to_seat(seat, 1) == 0 {
                break;
            }
            drawn += 1;
        }

        if drawn == 0 {
            return None;
        }

        debug!(player = self.players[seat].name(), drawn, "forced draw");
        Some(TurnEvent::ForcedDraw {
            player: self.player_name(seat),
            count: drawn,
        })
    }

    #[cfg(test)]
    fn total_cards(&self) -> usize {
        self.deck.cards_count()
            + self.discard.cards_count()
            + self
                .players
                .iter()
                .map(Player::cards_count)
                .sum::<usize>()
    }
}

fn validate_player_names(player_names: &[String]) -> Result<()> {
    if player_names.len() < MIN_PLAYERS {
        return Err(UnoError::NotEnoughPlayers);
    }
    if player_names.len() > MAX_PLAYERS {
        return Err(UnoError::TooManyPlayers);
    }

    let mut seen = HashSet::with_capacity(player_names.len());
    for name in player_names {
        let name = name.trim();
        if name.is_empty() {
            return Err(UnoError::EmptyPlayerName);
        }
        if !seen.insert(name) {
            return Err(UnoError::DuplicatePlayerName(name.to_string()));
        }
    }
    Ok(())
}
