use crate::error::WordTimeError;
use crate::types::{PartialScript, ScriptTimeUnit, WordTimeUnit};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillStats {
    pub filled_starts: usize,
    pub filled_ends: usize,
}

/// Working copy of one script's word boundaries while they are being resolved.
struct WordSlots<'a> {
    script: &'a PartialScript,
    starts: Vec<Option<f64>>,
    ends: Vec<Option<f64>>,
    chars: Vec<usize>,
}

/// Resolves every missing word start/end of `script`.
///
/// Starts are filled first, one maximal run of unknown starts at a time, by
/// spreading the run across the gap between its left and right anchors in
/// proportion to character counts. Ends are then filled from the following
/// word's start, or from the script end for the last word.
pub fn fill_word_times(
    script: &PartialScript,
    epsilon: f64,
) -> Result<(ScriptTimeUnit, FillStats), WordTimeError> {
    let mut slots = WordSlots {
        script,
        starts: script.word_times.iter().map(|w| w.start).collect(),
        ends: script.word_times.iter().map(|w| w.end).collect(),
        chars: script
            .word_times
            .iter()
            .map(|w| w.text.chars().count())
            .collect(),
    };
    let mut stats = FillStats::default();

    let n = slots.starts.len();
    let mut idx = 0usize;
    while idx < n {
        if slots.starts[idx].is_some() {
            idx += 1;
            continue;
        }
        let run_start = idx;
        let mut run_end = idx;
        while run_end < n && slots.starts[run_end].is_none() {
            run_end += 1;
        }
        slots.fill_start_run(run_start, run_end, epsilon)?;
        stats.filled_starts += run_end - run_start;
        idx = run_end;
    }

    for i in 0..n {
        if slots.ends[i].is_some() {
            continue;
        }
        let end = if i + 1 < n {
            slots.known_start(i + 1)?
        } else {
            script.end
        };
        slots.ends[i] = Some(end);
        stats.filled_ends += 1;
    }

    let mut word_times = Vec::with_capacity(n);
    for (i, word) in script.word_times.iter().enumerate() {
        word_times.push(WordTimeUnit {
            text: word.text.clone(),
            start: slots.known_start(i)?,
            end: slots.known_end(i)?,
        });
    }

    Ok((
        ScriptTimeUnit {
            text: script.text.clone(),
            start: script.start,
            end: script.end,
            word_times,
        },
        stats,
    ))
}

impl WordSlots<'_> {
    fn fill_start_run(
        &mut self,
        run_start: usize,
        run_end: usize,
        epsilon: f64,
    ) -> Result<(), WordTimeError> {
        if run_start >= run_end {
            return Ok(());
        }
        let n = self.starts.len();

        let (left_sec, prefix_chars) = if run_start == 0 {
            (self.script.start, 0usize)
        } else {
            let prev = run_start - 1;
            let prev_start = self.known_start(prev)?;
            match self.ends[prev] {
                Some(end) => (end, 0),
                // The previous word's own duration is still open, so it shares
                // the gap with the run.
                None => (prev_start, self.chars[prev]),
            }
        };

        let right_sec = if run_end == n {
            self.ends[n - 1].unwrap_or(self.script.end)
        } else {
            match self.ends[run_end - 1] {
                Some(end) => end,
                None => self.known_start(run_end)?,
            }
        };

        let span = right_sec - left_sec;
        if span.is_nan() || span < 0.0 {
            return Err(WordTimeError::InvalidInterval {
                script: self.script.text.clone(),
                start: left_sec,
                end: right_sec,
            });
        }

        let total_chars = prefix_chars + self.chars[run_start..run_end].iter().sum::<usize>();
        let sec_per_char = span / (total_chars as f64 + epsilon);

        tracing::debug!(
            script = self.script.text.as_str(),
            run_start,
            run_end,
            left_sec,
            right_sec,
            prefix_chars,
            total_chars,
            sec_per_char,
            "gap fill: interpolating word starts"
        );

        let mut cursor = left_sec + prefix_chars as f64 * sec_per_char;
        for i in run_start..run_end {
            self.starts[i] = Some(cursor);
            cursor += self.chars[i] as f64 * sec_per_char;
        }
        Ok(())
    }

    fn known_start(&self, idx: usize) -> Result<f64, WordTimeError> {
        self.starts[idx].ok_or_else(|| self.missing(idx))
    }

    fn known_end(&self, idx: usize) -> Result<f64, WordTimeError> {
        self.ends[idx].ok_or_else(|| self.missing(idx))
    }

    fn missing(&self, word_index: usize) -> WordTimeError {
        WordTimeError::MissingAnchor {
            script: self.script.text.clone(),
            word_index,
        }
    }
}
