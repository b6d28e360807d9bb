use serde::Serialize;

use crate::timeline::{ClampOutcome, FillStats};
use crate::types::ScriptTimeUnit;

/// What each stage did to one timeline, plus structural checks of the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimelineReport {
    pub input_script_count: usize,
    pub output_script_count: usize,
    pub scripts_without_words: usize,
    pub filled_word_starts: usize,
    pub filled_word_ends: usize,
    pub dropped_out_of_range_scripts: usize,
    pub dropped_out_of_range_words: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clamped_end_from: Option<f64>,
    pub dropped_overlapping_scripts: usize,
    pub structural: StructuralMetrics,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StructuralMetrics {
    pub word_count: usize,
    pub negative_duration_word_count: usize,
    pub overlap_word_count: usize,
    pub non_monotonic_word_count: usize,
    /// Words whose interval leaves their script's interval. Interpolation aims
    /// to avoid this but nothing enforces it.
    pub words_outside_script_count: usize,
    pub gap_ratio: f32,
    pub overlap_ratio: f32,
}

impl TimelineReport {
    pub(crate) fn record_fill(&mut self, stats: FillStats, word_count: usize) {
        if word_count == 0 {
            self.scripts_without_words += 1;
        }
        self.filled_word_starts += stats.filled_starts;
        self.filled_word_ends += stats.filled_ends;
    }

    pub(crate) fn record_clamp(&mut self, outcome: &ClampOutcome) {
        self.dropped_out_of_range_scripts += outcome.dropped_scripts;
        self.dropped_out_of_range_words += outcome.dropped_words;
        self.clamped_end_from = outcome.clamped_end_from;
    }
}

pub fn compute_structural_metrics(
    scripts: &[ScriptTimeUnit],
    audio_duration_sec: f64,
) -> StructuralMetrics {
    let mut metrics = StructuralMetrics::default();
    let mut gap_sec = 0.0f64;
    let mut overlap_sec = 0.0f64;

    for script in scripts {
        metrics.word_count += script.word_times.len();
        metrics.negative_duration_word_count += script
            .word_times
            .iter()
            .filter(|w| w.end < w.start)
            .count();
        metrics.words_outside_script_count += script
            .word_times
            .iter()
            .filter(|w| w.start < script.start || w.end > script.end)
            .count();

        for pair in script.word_times.windows(2) {
            let current = &pair[0];
            let next = &pair[1];
            if current.end > next.start {
                metrics.overlap_word_count += 1;
                overlap_sec += current.end - next.start;
            } else {
                gap_sec += next.start - current.end;
            }
            if current.start > next.start {
                metrics.non_monotonic_word_count += 1;
            }
        }
    }

    if audio_duration_sec > 0.0 {
        metrics.gap_ratio = (gap_sec / audio_duration_sec) as f32;
        metrics.overlap_ratio = (overlap_sec / audio_duration_sec) as f32;
    }
    metrics
}
