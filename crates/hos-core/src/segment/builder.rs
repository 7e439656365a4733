use orion_error::prelude::*;

use crate::error::{CoreReason, CoreResult};
use crate::event::DutyStatusEvent;
use crate::time::check_timestamp;

use super::Segment;

/// Turn point-in-time status events into contiguous segments covering
/// `[events[0].timestamp_ms, as_of_ms)`.
///
/// Each segment runs from its event to the next event or `as_of_ms`,
/// whichever comes first. Events at or after `as_of_ms` contribute nothing,
/// and zero-length segments (two events sharing a timestamp) are dropped so the
/// later event wins.
///
/// The whole list is checked before anything is built: a timestamp that goes
/// backwards fails with [`CoreReason::InvalidOrder`], a negative timestamp with
/// [`CoreReason::InvalidTimestamp`].
pub fn build_segments(events: &[DutyStatusEvent], as_of_ms: i64) -> CoreResult<Vec<Segment>> {
    check_timestamp("as_of", as_of_ms)?;
    check_events(events)?;

    let mut segments = Vec::with_capacity(events.len());
    for (idx, event) in events.iter().enumerate() {
        let start_ms = event.timestamp_ms;
        if start_ms >= as_of_ms {
            break;
        }
        let end_ms = events
            .get(idx + 1)
            .map_or(as_of_ms, |next| next.timestamp_ms.min(as_of_ms));
        if end_ms > start_ms {
            segments.push(Segment::new(start_ms, end_ms, event.status));
        }
    }

    log::trace!(
        "built {} segments from {} events as of {as_of_ms}",
        segments.len(),
        events.len()
    );
    Ok(segments)
}

fn check_events(events: &[DutyStatusEvent]) -> CoreResult<()> {
    if let Some(first) = events.first() {
        check_timestamp("events[0].timestamp_ms", first.timestamp_ms)?;
    }
    for (idx, pair) in events.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.timestamp_ms < prev.timestamp_ms {
            return StructError::from(CoreReason::InvalidOrder)
                .with_detail(format!(
                    "events[{}] at {} ms precedes events[{}] at {} ms (driver {:?})",
                    idx + 1,
                    next.timestamp_ms,
                    idx,
                    prev.timestamp_ms,
                    next.driver_id,
                ))
                .err();
        }
    }
    Ok(())
}
