use crate::error::WordTimeError;
use crate::timeline::{ClampOutcome, FillStats};
use crate::types::{PartialScript, ScriptTimeUnit};

pub trait GapFiller: Send + Sync {
    fn fill(&self, script: &PartialScript) -> Result<(ScriptTimeUnit, FillStats), WordTimeError>;
}

pub trait BoundaryClamper: Send + Sync {
    fn clamp(&self, scripts: &mut Vec<ScriptTimeUnit>, audio_duration_sec: f64) -> ClampOutcome;
}

pub trait OverlapFilter: Send + Sync {
    /// Returns the number of scripts removed.
    fn filter(&self, scripts: &mut Vec<ScriptTimeUnit>) -> usize;
}
