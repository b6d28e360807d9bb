use crate::error::WordTimeError;
use crate::pipeline::traits::{BoundaryClamper, GapFiller, OverlapFilter};
use crate::report::{compute_structural_metrics, TimelineReport};
use crate::types::{Timeline, TimelineInput};

/// Turns partially aligned scripts into a bounded, monotonic word timeline.
///
/// The input is only borrowed; every stage works on owned scripts built from it.
pub struct TimelinePostprocessor {
    gap_filler: Box<dyn GapFiller>,
    boundary_clamper: Box<dyn BoundaryClamper>,
    overlap_filter: Box<dyn OverlapFilter>,
}

pub(crate) struct TimelinePostprocessorParts {
    pub gap_filler: Box<dyn GapFiller>,
    pub boundary_clamper: Box<dyn BoundaryClamper>,
    pub overlap_filter: Box<dyn OverlapFilter>,
}

impl TimelinePostprocessor {
    pub(crate) fn from_parts(parts: TimelinePostprocessorParts) -> Self {
        Self {
            gap_filler: parts.gap_filler,
            boundary_clamper: parts.boundary_clamper,
            overlap_filter: parts.overlap_filter,
        }
    }

    pub fn process(&self, input: &TimelineInput) -> Result<Timeline, WordTimeError> {
        self.process_with_report(input).map(|(timeline, _)| timeline)
    }

    pub fn process_with_report(
        &self,
        input: &TimelineInput,
    ) -> Result<(Timeline, TimelineReport), WordTimeError> {
        validate_input(input)?;
        let mut report = TimelineReport {
            input_script_count: input.scripts.len(),
            ..TimelineReport::default()
        };

        let mut scripts = Vec::with_capacity(input.scripts.len());
        for script in &input.scripts {
            let (filled, stats) = self.gap_filler.fill(script)?;
            report.record_fill(stats, filled.word_times.len());
            scripts.push(filled);
        }

        let clamp_outcome = self
            .boundary_clamper
            .clamp(&mut scripts, input.audio_duration_sec);
        report.record_clamp(&clamp_outcome);

        report.dropped_overlapping_scripts = self.overlap_filter.filter(&mut scripts);
        report.output_script_count = scripts.len();
        report.structural = compute_structural_metrics(&scripts, input.audio_duration_sec);

        tracing::info!(
            input_scripts = report.input_script_count,
            output_scripts = report.output_script_count,
            filled_word_starts = report.filled_word_starts,
            filled_word_ends = report.filled_word_ends,
            dropped_out_of_range = report.dropped_out_of_range_scripts,
            dropped_overlapping = report.dropped_overlapping_scripts,
            language = input.audio_language_code.as_str(),
            "word timeline post-processed"
        );

        Ok((
            Timeline {
                scripts,
                audio_language_code: input.audio_language_code.clone(),
            },
            report,
        ))
    }
}

fn validate_input(input: &TimelineInput) -> Result<(), WordTimeError> {
    if !input.audio_duration_sec.is_finite() || input.audio_duration_sec < 0.0 {
        return Err(WordTimeError::invalid_input(format!(
            "audio duration must be a finite, non-negative number of seconds, got {}",
            input.audio_duration_sec
        )));
    }
    if input.audio_language_code.trim().is_empty() {
        return Err(WordTimeError::invalid_input(
            "audio language code is empty",
        ));
    }
    Ok(())
}
