use crate::types::ScriptTimeUnit;

/// Keeps scripts in order while each starts no earlier than the end of the
/// last kept one. Returns how many scripts were dropped.
pub fn drop_overlapping(scripts: &mut Vec<ScriptTimeUnit>) -> usize {
    let before = scripts.len();
    let mut prev_end = 0.0f64;
    scripts.retain(|script| {
        if script.start < prev_end {
            tracing::warn!(
                start = script.start,
                prev_end,
                text = script.text.as_str(),
                "dropping script: starts before the previous script ends"
            );
            return false;
        }
        prev_end = script.end;
        true
    });
    before - scripts.len()
}
