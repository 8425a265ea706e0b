use std::str::FromStr;

use strum::IntoEnumIterator;
use uno_engine::card::{Card, CardColor};

/// One line typed by the active player.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// `<color> <rank> [uno]`, handed to the engine as is.
    Play { text: String, declared_uno: bool },
    /// `#<n> [color] [uno]`, the n-th card of the hand as listed on screen.
    PlayIndex {
        index: usize,
        color: Option<CardColor>,
        declared_uno: bool,
    },
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ResolveCommandResult {
    Move(String),
    NoSuchCard(usize),
    ColorNeeded(Card),
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace().collect::<Vec<_>>();
        let first = tokens.first()?.to_ascii_lowercase();

        match first.as_str() {
            "quit" | "exit" => return Some(Command::Quit),
            "help" | "?" => return Some(Command::Help),
            _ => {}
        }

        let declared_uno = tokens
            .last()
            .map(|token| token.eq_ignore_ascii_case("uno"))
            .unwrap_or(false);
        if declared_uno {
            tokens.pop();
        }

        if let Some(index) = first.strip_prefix('#') {
            let index = index.parse::<usize>().ok()?;
            let color = match tokens.get(1) {
                Some(token) => Some(CardColor::from_str(token).ok()?),
                None => None,
            };
            return Some(Command::PlayIndex {
                index,
                color,
                declared_uno,
            });
        }

        Some(Command::Play {
            text: tokens.join(" "),
            declared_uno,
        })
    }

    /// Turns a hand index into move text for the engine.
    pub fn resolve_index(
        hand: &[Card],
        index: usize,
        color: Option<CardColor>,
    ) -> ResolveCommandResult {
        let Some(card) = index.checked_sub(1).and_then(|i| hand.get(i)) else {
            return ResolveCommandResult::NoSuchCard(index);
        };

        let color = if card.is_wild() {
            match color {
                Some(color) if color.is_concrete() => color,
                _ => return ResolveCommandResult::ColorNeeded(*card),
            }
        } else {
            card.color
        };

        ResolveCommandResult::Move(format!("{color} {}", rank_token(card)))
    }
}

fn rank_token(card: &Card) -> String {
    card.rank.to_string().replace(' ', "")
}

pub fn help_text() -> String {
    let colors = CardColor::iter()
        .filter(|color| color.is_concrete())
        .map(|color| color.to_string().to_lowercase())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Play a card with `<color> <rank>`, e.g. `red 5`, `blue skip`, `green +2`.\n\
         Wild cards take the color to play them as: `yellow wild`, `red wild4`.\n\
         Or pick from your hand by number: `#3`, `#5 blue` for a wild.\n\
         Add `uno` at the end when the play leaves you with one card.\n\
         Colors: {colors}. Type `quit` to leave."
    )
}

#[cfg(test)]
mod tests {
    use uno_engine::card::CardRank;

    use super::*;

    #[test]
    fn parses_move_with_and_without_uno() {
        assert_eq!(
            Command::parse("red 5"),
            Some(Command::Play {
                text: "red 5".to_string(),
                declared_uno: false
            })
        );
        assert_eq!(
            Command::parse("  Blue Skip UNO "),
            Some(Command::Play {
                text: "Blue Skip".to_string(),
                declared_uno: true
            })
        );
    }

    #[test]
    fn parses_hand_index() {
        assert_eq!(
            Command::parse("#2 green uno"),
            Some(Command::PlayIndex {
                index: 2,
                color: Some(CardColor::Green),
                declared_uno: true
            })
        );
        assert_eq!(Command::parse("#x"), None);
        assert_eq!(Command::parse("#1 purple"), None);
    }

    #[test]
    fn parses_control_words() {
        assert_eq!(Command::parse("QUIT"), Some(Command::Quit));
        assert_eq!(Command::parse("help"), Some(Command::Help));
        assert_eq!(Command::parse("   "), None);
    }

    #[test]
    fn resolves_hand_index_into_move_text() {
        let hand = [
            Card::new(CardRank::DrawTwo, CardColor::Red),
            Card::wild_draw_four(),
        ];

        assert_eq!(
            Command::resolve_index(&hand, 1, None),
            ResolveCommandResult::Move("Red DrawTwo".to_string())
        );
        assert_eq!(
            Command::resolve_index(&hand, 2, Some(CardColor::Blue)),
            ResolveCommandResult::Move("Blue WildDrawFour".to_string())
        );
        assert_eq!(
            Command::resolve_index(&hand, 2, None),
            ResolveCommandResult::ColorNeeded(Card::wild_draw_four())
        );
        assert_eq!(
            Command::resolve_index(&hand, 0, None),
            ResolveCommandResult::NoSuchCard(0)
        );
        assert_eq!(
            Command::resolve_index(&hand, 3, None),
            ResolveCommandResult::NoSuchCard(3)
        );
    }
}
