use core::fmt;
use std::fmt::Display;
use std::str::FromStr;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

use crate::error::InvalidMove;

#[derive(Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum CardColor {
    Red,
    Green,
    Blue,
    Yellow,
    Wild,
}

impl CardColor {
    pub fn is_concrete(self) -> bool {
        !matches!(self, CardColor::Wild)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardRank {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl CardRank {
    pub fn is_wild(&self) -> bool {
        matches!(self, CardRank::Wild | CardRank::WildDrawFour)
    }

    pub fn effect(&self) -> Effect {
        match self {
            CardRank::Number(_) => Effect::Plain,
            CardRank::Skip => Effect::Skip,
            CardRank::Reverse => Effect::Reverse,
            CardRank::DrawTwo => Effect::DrawTwo,
            CardRank::Wild => Effect::Wild,
            CardRank::WildDrawFour => Effect::WildDrawFour,
        }
    }
}

impl Display for CardRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardRank::Number(number) => write!(f, "{number}"),
            CardRank::Skip => write!(f, "Skip"),
            CardRank::Reverse => write!(f, "Reverse"),
            CardRank::DrawTwo => write!(f, "Draw Two"),
            CardRank::Wild => write!(f, "Wild"),
            CardRank::WildDrawFour => write!(f, "Wild Draw Four"),
        }
    }
}

impl FromStr for CardRank {
    type Err = InvalidMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_lowercase().as_str() {
            "skip" => CardRank::Skip,
            "reverse" => CardRank::Reverse,
            "drawtwo" | "draw2" | "+2" => CardRank::DrawTwo,
            "wild" => CardRank::Wild,
            "wilddrawfour" | "wild4" | "draw4" | "+4" => CardRank::WildDrawFour,
            other => match other.parse::<u8>() {
                Ok(number) if number <= 9 => CardRank::Number(number),
                _ => return Err(InvalidMove::UnknownRank(s.to_string())),
            },
        };
        Ok(rank)
    }
}

/// Special behavior triggered by the rank of a played card.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Effect {
    Plain,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

/// A single card. Wild ranks carry [`CardColor::Wild`] while in the deck or a hand and
/// the nominated color once they are on the discard pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: CardRank,
    pub color: CardColor,
}

impl Card {
    pub const fn new(rank: CardRank, color: CardColor) -> Self {
        Self { rank, color }
    }

    pub const fn wild() -> Self {
        Self::new(CardRank::Wild, CardColor::Wild)
    }

    pub const fn wild_draw_four() -> Self {
        Self::new(CardRank::WildDrawFour, CardColor::Wild)
    }

    pub fn is_wild(&self) -> bool {
        self.rank.is_wild()
    }

    /// Whether this card may be played onto `top`.
    pub fn matches(&self, top: &Card) -> bool {
        self.is_wild() || self.color == top.color || self.rank == top.rank
    }

    /// The card as it lands on the discard pile when played as `color`.
    pub(crate) fn nominate(self, color: CardColor) -> Self {
        if self.is_wild() {
            Self::new(self.rank, color)
        } else {
            self
        }
    }

    /// Strips a nominated color so the card can go back into the deck.
    pub(crate) fn unnominated(self) -> Self {
        if self.is_wild() {
            Self::new(self.rank, CardColor::Wild)
        } else {
            self
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            CardColor::Wild => write!(f, "{}", self.rank),
            color => write!(f, "{} {}", color, self.rank),
        }
    }
}

/// A move as submitted by the active player: a rank and, for wild ranks, the nominated color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub rank: CardRank,
    pub color: CardColor,
}

impl Move {
    pub fn new(rank: CardRank, color: CardColor) -> Self {
        Self { rank, color }
    }

    /// Wild ranks need a concrete nominated color and every other rank needs its own color.
    pub fn validate(&self) -> Result<(), InvalidMove> {
        match (self.rank.is_wild(), self.color.is_concrete()) {
            (true, false) => Err(InvalidMove::ColorNotNominated),
            (false, false) => Err(InvalidMove::WildColorOnColoredCard),
            _ => Ok(()),
        }
    }

    /// Whether `card` in a hand is the card this move names.
    pub fn names(&self, card: &Card) -> bool {
        if self.rank.is_wild() {
            card.rank == self.rank
        } else {
            card.rank == self.rank && card.color == self.color
        }
    }
}

impl FromStr for Move {
    type Err = InvalidMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let (Some(color_token), Some(rank_token)) = (tokens.next(), tokens.next()) else {
            return Err(InvalidMove::MissingToken);
        };

        let color = CardColor::from_str(color_token)
            .map_err(|_| InvalidMove::UnknownColor(color_token.to_string()))?;
        let rank = CardRank::from_str(rank_token)?;

        let mv = Move::new(rank, color);
        mv.validate()?;
        Ok(mv)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_correct_string_for_number_card() {
        let red_3 = Card::new(CardRank::Number(3), CardColor::Red);
        assert_eq!(red_3.to_string(), "Red 3");

        let yellow_5 = Card::new(CardRank::Number(5), CardColor::Yellow);
        assert_eq!(yellow_5.to_string(), "Yellow 5");
    }

    #[test]
    fn return_correct_string_for_action_cards() {
        let red_skip = Card::new(CardRank::Skip, CardColor::Red);
        assert_eq!(red_skip.to_string(), "Red Skip");

        let blue_reverse = Card::new(CardRank::Reverse, CardColor::Blue);
        assert_eq!(blue_reverse.to_string(), "Blue Reverse");

        let green_draw = Card::new(CardRank::DrawTwo, CardColor::Green);
        assert_eq!(green_draw.to_string(), "Green Draw Two");
    }

    #[test]
    fn return_correct_string_for_wild_cards() {
        assert_eq!(Card::wild().to_string(), "Wild");
        assert_eq!(Card::wild_draw_four().to_string(), "Wild Draw Four");
        assert_eq!(
            Card::wild_draw_four().nominate(CardColor::Blue).to_string(),
            "Blue Wild Draw Four"
        );
    }

    #[test]
    fn card_matches_by_color_or_rank() {
        let top = Card::new(CardRank::Number(5), CardColor::Red);

        assert!(Card::new(CardRank::Number(1), CardColor::Red).matches(&top));
        assert!(Card::new(CardRank::Number(5), CardColor::Blue).matches(&top));
        assert!(!Card::new(CardRank::Number(6), CardColor::Blue).matches(&top));
        assert!(!Card::new(CardRank::Skip, CardColor::Green).matches(&top));
    }

    #[test]
    fn action_cards_match_by_kind() {
        let top = Card::new(CardRank::Skip, CardColor::Yellow);

        assert!(Card::new(CardRank::Skip, CardColor::Blue).matches(&top));
        assert!(!Card::new(CardRank::Reverse, CardColor::Blue).matches(&top));
    }

    #[test]
    fn wild_cards_match_anything() {
        let top = Card::new(CardRank::DrawTwo, CardColor::Green);

        assert!(Card::wild().matches(&top));
        assert!(Card::wild_draw_four().matches(&top));
    }

    #[test]
    fn nominated_wild_matches_its_color() {
        let top = Card::wild().nominate(CardColor::Blue);

        assert!(Card::new(CardRank::Number(2), CardColor::Blue).matches(&top));
        assert!(!Card::new(CardRank::Number(2), CardColor::Red).matches(&top));
        assert_eq!(top.unnominated(), Card::wild());
    }

    #[test]
    fn parse_move_is_case_insensitive() {
        assert_eq!(
            "RED 5".parse::<Move>().unwrap(),
            Move::new(CardRank::Number(5), CardColor::Red)
        );
        assert_eq!(
            "  yellow   Skip ".parse::<Move>().unwrap(),
            Move::new(CardRank::Skip, CardColor::Yellow)
        );
        assert_eq!(
            "Blue DRAW2".parse::<Move>().unwrap(),
            Move::new(CardRank::DrawTwo, CardColor::Blue)
        );
    }

    #[test]
    fn parse_wild_move_takes_nominated_color() {
        assert_eq!(
            "green wild".parse::<Move>().unwrap(),
            Move::new(CardRank::Wild, CardColor::Green)
        );
        assert_eq!(
            "red wild4".parse::<Move>().unwrap(),
            Move::new(CardRank::WildDrawFour, CardColor::Red)
        );
    }

    #[test]
    fn parse_move_rejects_bad_input() {
        assert_eq!("".parse::<Move>(), Err(InvalidMove::MissingToken));
        assert_eq!("red".parse::<Move>(), Err(InvalidMove::MissingToken));
        assert_eq!(
            "purple 5".parse::<Move>(),
            Err(InvalidMove::UnknownColor("purple".to_string()))
        );
        assert_eq!(
            "red 10".parse::<Move>(),
            Err(InvalidMove::UnknownRank("10".to_string()))
        );
        assert_eq!(
            "wild wild".parse::<Move>(),
            Err(InvalidMove::ColorNotNominated)
        );
        assert_eq!(
            "wild 7".parse::<Move>(),
            Err(InvalidMove::WildColorOnColoredCard)
        );
    }

    #[test]
    fn move_validation_needs_concrete_color() {
        assert_eq!(
            Move::new(CardRank::Wild, CardColor::Wild).validate(),
            Err(InvalidMove::ColorNotNominated)
        );
        assert_eq!(
            Move::new(CardRank::Skip, CardColor::Wild).validate(),
            Err(InvalidMove::WildColorOnColoredCard)
        );
        assert_eq!(
            Move::new(CardRank::WildDrawFour, CardColor::Green).validate(),
            Ok(())
        );
    }

    #[test]
    fn move_displays_as_its_text_form() {
        let mv = Move::new(CardRank::WildDrawFour, CardColor::Red);
        assert_eq!(mv.to_string(), "Red Wild Draw Four");
    }

    #[test]
    fn wild_move_names_any_wild_of_its_rank() {
        let mv = Move::new(CardRank::Wild, CardColor::Red);

        assert!(mv.names(&Card::wild()));
        assert!(!mv.names(&Card::wild_draw_four()));
        assert!(!mv.names(&Card::new(CardRank::Number(1), CardColor::Red)));
    }
}
