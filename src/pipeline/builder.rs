use crate::config::WordTimeConfig;
use crate::error::WordTimeError;
use crate::pipeline::defaults::{
    CharWeightedGapFiller, GreedyOverlapFilter, TrailingBoundaryClamper,
};
use crate::pipeline::runtime::{TimelinePostprocessor, TimelinePostprocessorParts};
use crate::pipeline::traits::{BoundaryClamper, GapFiller, OverlapFilter};

pub struct TimelinePostprocessorBuilder {
    config: WordTimeConfig,
    gap_filler: Option<Box<dyn GapFiller>>,
    boundary_clamper: Option<Box<dyn BoundaryClamper>>,
    overlap_filter: Option<Box<dyn OverlapFilter>>,
}

impl TimelinePostprocessorBuilder {
    pub fn new(config: WordTimeConfig) -> Self {
        Self {
            config,
            gap_filler: None,
            boundary_clamper: None,
            overlap_filter: None,
        }
    }

    pub fn with_gap_filler(mut self, gap_filler: Box<dyn GapFiller>) -> Self {
        self.gap_filler = Some(gap_filler);
        self
    }

    pub fn with_boundary_clamper(mut self, boundary_clamper: Box<dyn BoundaryClamper>) -> Self {
        self.boundary_clamper = Some(boundary_clamper);
        self
    }

    pub fn with_overlap_filter(mut self, overlap_filter: Box<dyn OverlapFilter>) -> Self {
        self.overlap_filter = Some(overlap_filter);
        self
    }

    pub fn build(self) -> Result<TimelinePostprocessor, WordTimeError> {
        let epsilon = self.config.interpolation_epsilon;
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(WordTimeError::invalid_input(format!(
                "interpolation_epsilon must be a small positive number, got {epsilon}"
            )));
        }

        Ok(TimelinePostprocessor::from_parts(
            TimelinePostprocessorParts {
                gap_filler: self
                    .gap_filler
                    .unwrap_or_else(|| Box::new(CharWeightedGapFiller::new(epsilon))),
                boundary_clamper: self
                    .boundary_clamper
                    .unwrap_or_else(|| Box::new(TrailingBoundaryClamper)),
                overlap_filter: self
                    .overlap_filter
                    .unwrap_or_else(|| Box::new(GreedyOverlapFilter)),
            },
        ))
    }
}
