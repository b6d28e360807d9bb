use crate::config::WordTimeConfig;
use crate::error::WordTimeError;
use crate::pipeline::traits::{BoundaryClamper, GapFiller, OverlapFilter};
use crate::timeline::{
    clamp_to_duration, drop_overlapping, fill_word_times, ClampOutcome, FillStats,
};
use crate::types::{PartialScript, ScriptTimeUnit};

pub struct CharWeightedGapFiller {
    epsilon: f64,
}

impl CharWeightedGapFiller {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }
}

impl Default for CharWeightedGapFiller {
    fn default() -> Self {
        Self::new(WordTimeConfig::DEFAULT_INTERPOLATION_EPSILON)
    }
}

impl GapFiller for CharWeightedGapFiller {
    fn fill(&self, script: &PartialScript) -> Result<(ScriptTimeUnit, FillStats), WordTimeError> {
        fill_word_times(script, self.epsilon)
    }
}

pub struct TrailingBoundaryClamper;

impl BoundaryClamper for TrailingBoundaryClamper {
    fn clamp(&self, scripts: &mut Vec<ScriptTimeUnit>, audio_duration_sec: f64) -> ClampOutcome {
        clamp_to_duration(scripts, audio_duration_sec)
    }
}

pub struct GreedyOverlapFilter;

impl OverlapFilter for GreedyOverlapFilter {
    fn filter(&self, scripts: &mut Vec<ScriptTimeUnit>) -> usize {
        drop_overlapping(scripts)
    }
}
