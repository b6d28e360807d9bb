use crate::types::ScriptTimeUnit;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClampOutcome {
    pub dropped_scripts: usize,
    pub dropped_words: usize,
    /// Original end of the script whose end was pulled back to the duration.
    pub clamped_end_from: Option<f64>,
}

/// Trims the tail of an already time-ordered timeline to `audio_duration_sec`.
///
/// Only the trailing scripts are inspected: scripts starting at or past the
/// duration are dropped, and the first script still starting inside the audio
/// has its end (and its trailing words) cut back. Earlier scripts are assumed
/// to be in range because upstream emits scripts in time order.
pub fn clamp_to_duration(
    scripts: &mut Vec<ScriptTimeUnit>,
    audio_duration_sec: f64,
) -> ClampOutcome {
    let mut outcome = ClampOutcome::default();

    while let Some(last) = scripts.last_mut() {
        if last.start >= audio_duration_sec {
            tracing::warn!(
                start = last.start,
                audio_duration_sec,
                text = last.text.as_str(),
                "dropping script: start is past the end of the audio"
            );
            scripts.pop();
            outcome.dropped_scripts += 1;
            continue;
        }

        if last.end > audio_duration_sec {
            let old_end = last.end;
            last.end = audio_duration_sec;
            outcome.clamped_end_from = Some(old_end);

            let mut dropped_words = Vec::new();
            while let Some(word) = last.word_times.last_mut() {
                if word.start >= audio_duration_sec {
                    if let Some(word) = last.word_times.pop() {
                        dropped_words.push(word.text);
                    }
                    continue;
                }
                if word.end >= audio_duration_sec {
                    word.end = audio_duration_sec;
                }
                break;
            }
            outcome.dropped_words += dropped_words.len();

            tracing::warn!(
                old_end,
                audio_duration_sec,
                dropped_words = ?dropped_words,
                "script end is past the end of the audio; clamped end and dropped trailing words"
            );
        }
        break;
    }

    outcome
}
