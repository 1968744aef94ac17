//! Alternating lineup — strict A/B alternation with independent cursors.
//!
//! Because the groups alternate one-for-one regardless of size, the smaller
//! group's cursor wraps sooner, so its members come up more often. Neither
//! group may be empty; construction enforces that.

use crate::domain::Player;

use super::{LineupDescription, LineupError};

#[derive(Debug, Clone)]
pub struct AlternatingLineup {
    group_a: Vec<Player>,
    group_b: Vec<Player>,
    cursor_a: usize,
    cursor_b: usize,
    next_from_a: bool,
}

impl AlternatingLineup {
    pub fn new(
        group_a: Vec<Player>,
        group_b: Vec<Player>,
    ) -> Result<AlternatingLineup, LineupError> {
        if group_a.is_empty() || group_b.is_empty() {
            return Err(LineupError::EmptyGroup {
                group_a: group_a.len(),
                group_b: group_b.len(),
            });
        }
        Ok(AlternatingLineup {
            group_a,
            group_b,
            cursor_a: 0,
            cursor_b: 0,
            next_from_a: true,
        })
    }

    pub fn next_batter(&mut self) -> &Player {
        let selection = if self.next_from_a {
            let position = self.cursor_a;
            self.cursor_a = (self.cursor_a + 1) % self.group_a.len();
            &self.group_a[position]
        } else {
            let position = self.cursor_b;
            self.cursor_b = (self.cursor_b + 1) % self.group_b.len();
            &self.group_b[position]
        };
        self.next_from_a = !self.next_from_a;
        selection
    }

    pub fn reset(&mut self) {
        self.cursor_a = 0;
        self.cursor_b = 0;
        self.next_from_a = true;
    }

    pub fn describe(&self) -> LineupDescription {
        LineupDescription::Grouped {
            group_a: self.group_a.iter().map(|p| p.name().to_string()).collect(),
            group_b: self.group_b.iter().map(|p| p.name().to_string()).collect(),
        }
    }
}
