//! Ingestion of the alignment stage's JSON output.
//!
//! The aligner emits `segments`, each optionally carrying `words` whose
//! `start`/`end` are `null` (or absent) when a word could not be placed.
//! Segments from a subtitle file have no `words` at all.

use std::path::Path;

use serde::Deserialize;

use crate::error::WordTimeError;
use crate::types::{PartialScript, PartialWordTime, TimelineInput};

#[derive(Debug, Clone, Deserialize)]
pub struct AlignedTranscript {
    /// Language detected by the transcription stage, if it ran detection.
    #[serde(default)]
    pub language: Option<String>,
    pub segments: Vec<AlignedSegment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlignedSegment {
    pub text: String,
    pub start: f64,
    pub end: f64,
    #[serde(default)]
    pub words: Vec<AlignedWord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlignedWord {
    pub word: String,
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
}

impl AlignedTranscript {
    pub fn from_json_str(data: &str) -> Result<Self, WordTimeError> {
        serde_json::from_str(data).map_err(|e| WordTimeError::json("parse aligned transcript", e))
    }

    pub fn load(path: &Path) -> Result<Self, WordTimeError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| WordTimeError::io("read aligned transcript", e))?;
        Self::from_json_str(&data)
    }

    /// Picks the caller's language code when given, otherwise the detected one.
    pub fn resolve_language(&self, requested: Option<&str>) -> Result<String, WordTimeError> {
        let requested = requested.map(str::trim).filter(|code| !code.is_empty());
        if let Some(code) = requested {
            return Ok(code.to_string());
        }
        let detected = self
            .language
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty());
        match detected {
            Some(code) => {
                tracing::info!(language = code, "no audio language given, using detected language");
                Ok(code.to_string())
            }
            None => Err(WordTimeError::invalid_input(
                "audio language code missing: none requested and none detected",
            )),
        }
    }

    pub fn to_partial_scripts(&self) -> Vec<PartialScript> {
        self.segments
            .iter()
            .map(|segment| PartialScript {
                text: segment.text.clone(),
                start: segment.start,
                end: segment.end,
                word_times: segment
                    .words
                    .iter()
                    .map(|w| PartialWordTime {
                        text: w.word.clone(),
                        start: w.start,
                        end: w.end,
                    })
                    .collect(),
            })
            .collect()
    }

    pub fn into_timeline_input(
        self,
        audio_duration_sec: f64,
        requested_language: Option<&str>,
    ) -> Result<TimelineInput, WordTimeError> {
        let audio_language_code = self.resolve_language(requested_language)?;
        Ok(TimelineInput {
            scripts: self.to_partial_scripts(),
            audio_duration_sec,
            audio_language_code,
        })
    }
}
