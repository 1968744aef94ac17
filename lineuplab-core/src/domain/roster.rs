//! Roster — the read-only player pool a search draws from.

use super::player::{Player, PlayerGroup};

/// An owned collection of players. Read-only after load; lineups clone the
/// players they arrange, so a roster never sees cursor state.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Roster {
        Roster { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players belonging to one alternation group, in roster order.
    pub fn group(&self, group: PlayerGroup) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| p.group() == group)
    }

    /// Owned partition into (group A, group B), preserving roster order.
    pub fn split_groups(&self) -> (Vec<Player>, Vec<Player>) {
        self.players
            .iter()
            .cloned()
            .partition(|p| p.group() == PlayerGroup::A)
    }
}
