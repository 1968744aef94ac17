//! Standard lineup — a fixed permutation cycled one batter at a time.

use rand::Rng;

use crate::domain::Player;

use super::{LineupDescription, LineupError};

/// A fixed batting order with a single wrapping cursor.
#[derive(Debug, Clone)]
pub struct StandardLineup {
    players: Vec<Player>,
    cursor: usize,
}

impl StandardLineup {
    pub fn new(players: Vec<Player>) -> Result<StandardLineup, LineupError> {
        if players.is_empty() {
            return Err(LineupError::EmptyLineup);
        }
        Ok(StandardLineup { players, cursor: 0 })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn next_batter(&mut self) -> &Player {
        let position = self.cursor;
        self.cursor = (self.cursor + 1) % self.players.len();
        &self.players[position]
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn describe(&self) -> LineupDescription {
        LineupDescription::Ordered {
            order: self.players.iter().map(|p| p.name().to_string()).collect(),
        }
    }

    /// A new lineup with two distinct positions exchanged, cursor at the
    /// start. With fewer than two players the order is returned unchanged.
    pub fn random_swap<R: Rng + ?Sized>(&self, rng: &mut R) -> StandardLineup {
        let mut players = self.players.clone();
        if players.len() >= 2 {
            let i = rng.gen_range(0..players.len());
            let mut j = rng.gen_range(0..players.len() - 1);
            if j >= i {
                j += 1;
            }
            players.swap(i, j);
        }
        StandardLineup { players, cursor: 0 }
    }
}
