//! Base occupancy and runner advancement within one inning.

/// Which bases are occupied. Cleared at inning end; runner identity is not
/// tracked because every runner advances the same number of bases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct BaseState {
    first: bool,
    second: bool,
    third: bool,
}

impl BaseState {
    /// Advance every runner by `bases`, with the batter starting from home
    /// on the first step. Returns the number of runners crossing home.
    pub(crate) fn advance(&mut self, bases: u32) -> u32 {
        let mut runs = 0;
        for step in 0..bases {
            if self.third {
                runs += 1;
            }
            self.third = self.second;
            self.second = self.first;
            self.first = step == 0;
        }
        runs
    }
}
