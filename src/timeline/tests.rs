use super::{clamp_to_duration, drop_overlapping, fill_word_times};
use crate::error::WordTimeError;
use crate::types::{PartialScript, PartialWordTime, ScriptTimeUnit, WordTimeUnit};

const EPS: f64 = 1e-6;
const TOL: f64 = 1e-4;

fn pw(text: &str, start: Option<f64>, end: Option<f64>) -> PartialWordTime {
    PartialWordTime {
        text: text.to_string(),
        start,
        end,
    }
}

fn partial(start: f64, end: f64, words: Vec<PartialWordTime>) -> PartialScript {
    let text = words
        .iter()
        .map(|w| w.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    PartialScript {
        text,
        start,
        end,
        word_times: words,
    }
}

fn word(text: &str, start: f64, end: f64) -> WordTimeUnit {
    WordTimeUnit {
        text: text.to_string(),
        start,
        end,
    }
}

fn script(start: f64, end: f64, words: Vec<WordTimeUnit>) -> ScriptTimeUnit {
    ScriptTimeUnit {
        text: format!("{start}-{end}"),
        start,
        end,
        word_times: words,
    }
}

fn assert_times(words: &[WordTimeUnit], expected: &[(f64, f64)]) {
    assert_eq!(words.len(), expected.len());
    for (w, &(start, end)) in words.iter().zip(expected) {
        assert!(
            (w.start - start).abs() < TOL && (w.end - end).abs() < TOL,
            "word {:?}: got ({}, {}), expected ({start}, {end})",
            w.text,
            w.start,
            w.end
        );
    }
}

#[test]
fn fill_single_gap_between_known_words() {
    let input = partial(
        0.0,
        10.0,
        vec![
            pw("1", Some(0.0), Some(2.0)),
            pw("2", None, None),
            pw("3", Some(8.0), Some(10.0)),
        ],
    );
    let (filled, stats) = fill_word_times(&input, EPS).unwrap();
    assert_times(&filled.word_times, &[(0.0, 2.0), (2.0, 8.0), (8.0, 10.0)]);
    assert_eq!(stats.filled_starts, 1);
    assert_eq!(stats.filled_ends, 1);
}

#[test]
fn fill_all_missing_splits_script_evenly() {
    let input = partial(
        0.0,
        6.0,
        vec![pw("1", None, None), pw("2", None, None), pw("3", None, None)],
    );
    let (filled, stats) = fill_word_times(&input, EPS).unwrap();
    assert_times(&filled.word_times, &[(0.0, 2.0), (2.0, 4.0), (4.0, 6.0)]);
    assert_eq!(stats.filled_starts, 3);
    assert_eq!(stats.filled_ends, 3);
}

#[test]
fn fill_carries_prefix_chars_from_word_with_open_end() {
    let input = partial(
        1.0,
        8.0,
        vec![
            pw("1", Some(1.0), None),
            pw("23", None, None),
            pw("4", None, Some(5.0)),
            pw("5", Some(6.0), Some(8.0)),
        ],
    );
    let (filled, _) = fill_word_times(&input, EPS).unwrap();
    assert_times(
        &filled.word_times,
        &[(1.0, 2.0), (2.0, 4.0), (4.0, 5.0), (6.0, 8.0)],
    );
}

#[test]
fn fill_longer_words_take_longer() {
    let input = partial(
        0.0,
        10.0,
        vec![pw("a", None, None), pw("bbbb", None, None)],
    );
    let (filled, _) = fill_word_times(&input, EPS).unwrap();
    assert_times(&filled.word_times, &[(0.0, 2.0), (2.0, 10.0)]);
}

#[test]
fn fill_trailing_run_uses_last_known_end() {
    let input = partial(
        0.0,
        10.0,
        vec![
            pw("a", Some(0.0), Some(1.0)),
            pw("b", None, None),
            pw("c", None, Some(9.0)),
        ],
    );
    let (filled, _) = fill_word_times(&input, EPS).unwrap();
    assert_times(&filled.word_times, &[(0.0, 1.0), (1.0, 5.0), (5.0, 9.0)]);
}

#[test]
fn fill_counts_characters_not_bytes() {
    let input = partial(
        0.0,
        4.0,
        vec![pw("éé", None, None), pw("ab", None, None)],
    );
    let (filled, _) = fill_word_times(&input, EPS).unwrap();
    assert_times(&filled.word_times, &[(0.0, 2.0), (2.0, 4.0)]);
}

#[test]
fn fill_empty_word_list_is_noop() {
    let input = partial(3.0, 4.0, Vec::new());
    let (filled, stats) = fill_word_times(&input, EPS).unwrap();
    assert!(filled.word_times.is_empty());
    assert_eq!(filled.start, 3.0);
    assert_eq!(filled.end, 4.0);
    assert_eq!(stats.filled_starts + stats.filled_ends, 0);
}

#[test]
fn fill_empty_text_run_stays_at_left_anchor() {
    let input = partial(
        0.0,
        4.0,
        vec![pw("a", Some(0.0), Some(1.0)), pw("", None, None), pw("b", Some(3.0), Some(4.0))],
    );
    let (filled, _) = fill_word_times(&input, EPS).unwrap();
    assert!(filled.word_times[1].start.is_finite());
    assert_times(&filled.word_times, &[(0.0, 1.0), (1.0, 3.0), (3.0, 4.0)]);
}

#[test]
fn fill_is_idempotent_on_resolved_script() {
    let input = partial(
        0.0,
        6.0,
        vec![
            pw("one", Some(0.2), None),
            pw("two", None, None),
            pw("three", None, Some(5.5)),
        ],
    );
    let (first, _) = fill_word_times(&input, EPS).unwrap();
    let (second, stats) = fill_word_times(&PartialScript::from(&first), EPS).unwrap();
    assert_eq!(first, second);
    assert_eq!(stats.filled_starts + stats.filled_ends, 0);
}

#[test]
fn fill_rejects_negative_interval() {
    let input = partial(
        0.0,
        10.0,
        vec![
            pw("a", Some(5.0), Some(6.0)),
            pw("b", None, None),
            pw("c", Some(2.0), Some(3.0)),
        ],
    );
    let err = fill_word_times(&input, EPS).unwrap_err();
    assert!(err.is_contract_violation());
    match err {
        WordTimeError::InvalidInterval { start, end, .. } => {
            assert_eq!(start, 6.0);
            assert_eq!(end, 2.0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn clamp_drops_script_past_duration_and_trims_previous() {
    let mut scripts = vec![
        script(
            0.0,
            11.0,
            vec![word("a", 0.0, 4.0), word("b", 4.0, 8.0), word("c", 8.0, 11.0)],
        ),
        script(11.0, 13.0, vec![word("d", 11.0, 13.0)]),
    ];
    let outcome = clamp_to_duration(&mut scripts, 10.0);
    assert_eq!(scripts.len(), 1);
    assert_eq!(scripts[0].end, 10.0);
    assert_eq!(scripts[0].word_times.len(), 3);
    assert_eq!(scripts[0].word_times[2].end, 10.0);
    assert_eq!(outcome.dropped_scripts, 1);
    assert_eq!(outcome.dropped_words, 0);
    assert_eq!(outcome.clamped_end_from, Some(11.0));
}

#[test]
fn clamp_drops_words_starting_past_duration() {
    let mut scripts = vec![script(
        8.0,
        14.0,
        vec![word("a", 8.0, 9.0), word("b", 9.0, 11.0), word("c", 11.0, 14.0)],
    )];
    let outcome = clamp_to_duration(&mut scripts, 10.0);
    assert_eq!(scripts[0].end, 10.0);
    assert_eq!(scripts[0].word_times.len(), 2);
    assert_eq!(scripts[0].word_times[1].end, 10.0);
    assert_eq!(outcome.dropped_words, 1);
}

#[test]
fn clamp_only_inspects_trailing_scripts() {
    // An out-of-order earlier script is left alone.
    let mut scripts = vec![
        script(0.0, 12.0, vec![word("a", 0.0, 12.0)]),
        script(5.0, 9.0, vec![word("b", 5.0, 9.0)]),
    ];
    let outcome = clamp_to_duration(&mut scripts, 10.0);
    assert_eq!(scripts.len(), 2);
    assert_eq!(scripts[0].end, 12.0);
    assert_eq!(outcome, Default::default());
}

#[test]
fn clamp_can_empty_the_timeline() {
    let mut scripts = vec![script(10.0, 11.0, Vec::new()), script(12.0, 13.0, Vec::new())];
    let outcome = clamp_to_duration(&mut scripts, 10.0);
    assert!(scripts.is_empty());
    assert_eq!(outcome.dropped_scripts, 2);
}

#[test]
fn overlap_drop_keeps_earliest_script() {
    let mut scripts = vec![
        script(0.0, 2.0, Vec::new()),
        script(1.0, 3.0, Vec::new()),
        script(2.0, 4.0, Vec::new()),
        script(3.5, 5.0, Vec::new()),
    ];
    let dropped = drop_overlapping(&mut scripts);
    assert_eq!(dropped, 2);
    let bounds: Vec<(f64, f64)> = scripts.iter().map(|s| (s.start, s.end)).collect();
    assert_eq!(bounds, vec![(0.0, 2.0), (2.0, 4.0)]);
}

#[test]
fn overlap_drop_rejects_negative_start() {
    let mut scripts = vec![script(-0.5, 1.0, Vec::new()), script(1.0, 2.0, Vec::new())];
    assert_eq!(drop_overlapping(&mut scripts), 1);
    assert_eq!(scripts[0].start, 1.0);
}
