use hos_config::HosConfig;
use orion_error::prelude::*;
use orion_error::ErrorOweBase;

use crate::error::{CoreReason, CoreResult};
use crate::event::DutyStatusEvent;
use crate::segment::{Segment, build_segments};
use crate::status::HosStatus;
use crate::time::{check_timestamp, whole_minutes};

use super::budget::Budgets;
use super::cycle::{cycle_used_min, cycle_window_start};
use super::state::RollingState;

/// Evaluate one driver's chronological event history at `as_of_ms`.
///
/// Fails without partial results on an invalid config, a negative `as_of_ms`,
/// events out of order, or a segment that is not a whole number of minutes.
pub fn evaluate(
    config: &HosConfig,
    events: &[DutyStatusEvent],
    as_of_ms: i64,
) -> CoreResult<HosStatus> {
    config.validate().owe(CoreReason::InvalidConfig)?;
    let segments = build_segments(events, as_of_ms)?;
    evaluate_validated(config, &segments, as_of_ms)
}

/// Evaluate pre-built segments, as produced by [`build_segments`].
pub fn evaluate_segments(
    config: &HosConfig,
    segments: &[Segment],
    as_of_ms: i64,
) -> CoreResult<HosStatus> {
    config.validate().owe(CoreReason::InvalidConfig)?;
    check_timestamp("as_of", as_of_ms)?;
    check_segments(segments, as_of_ms)?;
    evaluate_validated(config, segments, as_of_ms)
}

fn evaluate_validated(
    config: &HosConfig,
    segments: &[Segment],
    as_of_ms: i64,
) -> CoreResult<HosStatus> {
    let limits = config.limits();
    if segments.is_empty() {
        return Ok(HosStatus::fully_rested(limits, config.cycle_limit_min, as_of_ms));
    }

    let mut state = RollingState::default();
    for seg in segments {
        let minutes = whole_minutes(seg.start_ms, seg.end_ms)?;
        state.apply(seg, minutes, limits);
    }

    let duty_elapsed_min = match state.duty_window_start_ms {
        Some(start_ms) => whole_minutes(start_ms, as_of_ms)?,
        None => 0,
    };
    let window_start_ms =
        cycle_window_start(as_of_ms, config.cycle_window_ms(), state.last_restart_end_ms);
    let cycle_used = cycle_used_min(segments, window_start_ms, as_of_ms)?;

    let budgets = Budgets {
        drive_min: (limits.driving_min - state.driving_since_rest_min).max(0),
        duty_window_min: (limits.duty_window_min - duty_elapsed_min).max(0),
        break_min: (limits.driving_before_break_min - state.driving_since_break_min).max(0),
        cycle_min: (config.cycle_limit_min - cycle_used).max(0),
    };
    let (alerts, violations) = budgets.alerts(config.warning_threshold_min, as_of_ms);

    log::debug!(
        "evaluated {} segments as of {as_of_ms}: drive={} duty={} break={} cycle={} violations={}",
        segments.len(),
        budgets.drive_min,
        budgets.duty_window_min,
        budgets.break_min,
        budgets.cycle_min,
        violations.len(),
    );

    Ok(HosStatus {
        as_of_ms,
        remaining_drive_min: budgets.drive_min,
        remaining_duty_window_min: budgets.duty_window_min,
        break_required_in_min: budgets.break_min,
        cycle_remaining_min: budgets.cycle_min,
        cycle_used_min: cycle_used,
        last_break_start_ms: state.last_break_start_ms,
        alerts,
        violations,
    })
}

/// Segments handed in directly must be non-empty, ordered, non-overlapping and
/// end no later than `as_of_ms`.
fn check_segments(segments: &[Segment], as_of_ms: i64) -> CoreResult<()> {
    let mut prev_end = i64::MIN;
    for (idx, seg) in segments.iter().enumerate() {
        if seg.end_ms <= seg.start_ms || seg.start_ms < prev_end || seg.end_ms > as_of_ms {
            return StructError::from(CoreReason::InvalidOrder)
                .with_detail(format!(
                    "segments[{idx}] [{}, {}) is empty, overlaps its predecessor or ends after as_of {as_of_ms}",
                    seg.start_ms, seg.end_ms,
                ))
                .err();
        }
        check_timestamp("segment start", seg.start_ms)?;
        prev_end = seg.end_ms;
    }
    Ok(())
}
