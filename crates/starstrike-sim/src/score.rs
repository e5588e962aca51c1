//! Running score state tracked by the engine.

/// Score plus lifetime counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreState {
    /// Cumulative points. Only confirmed hits change it.
    pub score: u64,
    pub ships_destroyed: u32,
    pub ships_escaped: u32,
    pub shots_fired: u32,
}

impl ScoreState {
    /// Credit a destroyed ship and return the new total.
    pub fn award(&mut self, points: u32) -> u64 {
        self.score = self.score.saturating_add(u64::from(points));
        self.ships_destroyed += 1;
        self.score
    }
}
