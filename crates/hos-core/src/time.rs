use orion_error::prelude::*;

use crate::error::{CoreReason, CoreResult};

pub(crate) const MS_PER_MIN: i64 = 60_000;

/// Whole minutes in `[start_ms, end_ms)`. The engine never rounds: a span that
/// is not an exact multiple of a minute is a caller error.
pub(crate) fn whole_minutes(start_ms: i64, end_ms: i64) -> CoreResult<i64> {
    let span = end_ms - start_ms;
    if span % MS_PER_MIN != 0 {
        return StructError::from(CoreReason::NonMinuteAlignedDuration)
            .with_detail(format!(
                "span [{start_ms}, {end_ms}) is {span} ms, not a multiple of {MS_PER_MIN} ms"
            ))
            .err();
    }
    Ok(span / MS_PER_MIN)
}

pub(crate) fn check_timestamp(what: &str, ts_ms: i64) -> CoreResult<()> {
    if ts_ms < 0 {
        return StructError::from(CoreReason::InvalidTimestamp)
            .with_detail(format!("{what} must be >= 0, got {ts_ms}"))
            .err();
    }
    Ok(())
}
