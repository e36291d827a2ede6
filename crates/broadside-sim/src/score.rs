//! Running session tallies.

use broadside_core::state::ScoreView;

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub kills: u32,
    pub shots_fired: u32,
    pub hits: u32,
    pub damage_taken: f64,
    pub waves_cleared: u32,
}

impl ScoreState {
    pub fn to_view(&self, session_time_secs: f64) -> ScoreView {
        ScoreView {
            kills: self.kills,
            shots_fired: self.shots_fired,
            hits: self.hits,
            damage_taken: self.damage_taken,
            waves_cleared: self.waves_cleared,
            session_time_secs,
        }
    }
}
