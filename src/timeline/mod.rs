//! Post-alignment timeline stages: word gap filling, clamping to the audio
//! duration, and dropping overlapping scripts.

mod clamp;
mod gap_fill;
mod monotonic;
#[cfg(test)]
mod tests;

pub use clamp::{clamp_to_duration, ClampOutcome};
pub use gap_fill::{fill_word_times, FillStats};
pub use monotonic::drop_overlapping;
