use serde::{Deserialize, Serialize};

/// A word as delivered by forced alignment. `None` means the aligner could not
/// place that boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialWordTime {
    pub text: String,
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
}

/// A script segment whose words may still carry unresolved timecodes.
/// Script-level `start`/`end` are always known, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialScript {
    pub text: String,
    pub start: f64,
    pub end: f64,
    #[serde(default)]
    pub word_times: Vec<PartialWordTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordTimeUnit {
    pub text: String,
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptTimeUnit {
    pub text: String,
    pub start: f64,
    pub end: f64,
    pub word_times: Vec<WordTimeUnit>,
}

#[derive(Debug, Clone)]
pub struct TimelineInput {
    pub scripts: Vec<PartialScript>,
    pub audio_duration_sec: f64,
    pub audio_language_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    #[serde(rename = "timeline")]
    pub scripts: Vec<ScriptTimeUnit>,
    pub audio_language_code: String,
}

impl PartialScript {
    pub fn chars_len(&self) -> usize {
        self.word_times.iter().map(|w| w.text.chars().count()).sum()
    }
}

impl From<&WordTimeUnit> for PartialWordTime {
    fn from(word: &WordTimeUnit) -> Self {
        Self {
            text: word.text.clone(),
            start: Some(word.start),
            end: Some(word.end),
        }
    }
}

impl From<&ScriptTimeUnit> for PartialScript {
    fn from(script: &ScriptTimeUnit) -> Self {
        Self {
            text: script.text.clone(),
            start: script.start,
            end: script.end,
            word_times: script.word_times.iter().map(PartialWordTime::from).collect(),
        }
    }
}
