use crate::error::CoreResult;
use crate::segment::Segment;
use crate::time::whole_minutes;

/// Start of the cycle lookback: the nominal rolling window, or the end of the
/// last restart when that is more recent.
pub(super) fn cycle_window_start(
    as_of_ms: i64,
    cycle_window_ms: i64,
    last_restart_end_ms: Option<i64>,
) -> i64 {
    (as_of_ms - cycle_window_ms).max(last_restart_end_ms.unwrap_or(0))
}

/// Working minutes inside `[window_start_ms, as_of_ms)`.
pub(super) fn cycle_used_min(
    segments: &[Segment],
    window_start_ms: i64,
    as_of_ms: i64,
) -> CoreResult<i64> {
    let mut used = 0;
    for seg in segments.iter().filter(|s| s.status.is_working()) {
        if let Some(part) = seg.clip(window_start_ms, as_of_ms) {
            used += whole_minutes(part.start_ms, part.end_ms)?;
        }
    }
    Ok(used)
}
