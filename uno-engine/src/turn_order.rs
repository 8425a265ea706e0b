use strum_macros::Display;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Cyclic seat pointer over a fixed number of players.
#[derive(Debug, Clone)]
pub struct TurnOrder {
    current: usize,
    direction: Direction,
    player_count: usize,
}

impl TurnOrder {
    pub fn new(player_count: usize) -> Self {
        debug_assert!(player_count > 0);
        Self {
            current: 0,
            direction: Direction::Forward,
            player_count,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Seat that [`TurnOrder::advance`] would move to, without moving.
    pub fn peek_next(&self) -> usize {
        match self.direction {
            Direction::Forward => (self.current + 1) % self.player_count,
            Direction::Backward => (self.current + self.player_count - 1) % self.player_count,
        }
    }

    pub fn advance(&mut self) -> usize {
        self.current = self.peek_next();
        self.current
    }

    /// Flips the direction. The pointer stays where it is.
    pub fn reverse(&mut self) {
        self.direction = self.direction.flipped();
    }
}
