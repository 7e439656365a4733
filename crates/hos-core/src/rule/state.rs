use hos_config::RuleLimits;

use crate::event::DutyStatus;
use crate::segment::Segment;

/// Rolling quantities threaded through the single forward pass over segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RollingState {
    /// Consecutive resting minutes; any work resets it.
    pub rest_streak_min: i64,
    /// Start of the open duty window. `None` once a qualifying rest completes.
    pub duty_window_start_ms: Option<i64>,
    pub driving_since_rest_min: i64,
    pub driving_since_break_min: i64,
    pub last_break_start_ms: Option<i64>,
    /// End of the most recent restart-length rest streak.
    pub last_restart_end_ms: Option<i64>,
}

impl RollingState {
    /// Fold one segment of `minutes` length into the state.
    pub fn apply(&mut self, segment: &Segment, minutes: i64, limits: &RuleLimits) {
        if segment.status.is_resting() {
            self.apply_rest(segment, minutes, limits);
        } else {
            self.apply_work(segment, minutes, limits);
        }
    }

    fn apply_rest(&mut self, segment: &Segment, minutes: i64, limits: &RuleLimits) {
        self.rest_streak_min += minutes;

        if minutes >= limits.qualifying_break_min {
            self.mark_break(segment.start_ms);
        }

        if self.rest_streak_min >= limits.qualifying_rest_min {
            if self.duty_window_start_ms.is_some() {
                log::debug!(
                    "qualifying rest of {} min completed at {}",
                    self.rest_streak_min,
                    segment.end_ms
                );
            }
            self.duty_window_start_ms = None;
            self.driving_since_rest_min = 0;
            self.driving_since_break_min = 0;
        }

        if self.rest_streak_min >= limits.restart_min {
            log::debug!("cycle restart completed at {}", segment.end_ms);
            self.last_restart_end_ms = Some(segment.end_ms);
        }
    }

    fn apply_work(&mut self, segment: &Segment, minutes: i64, limits: &RuleLimits) {
        if self.rest_streak_min >= limits.qualifying_rest_min {
            log::debug!("duty window opened at {} after qualifying rest", segment.start_ms);
            self.duty_window_start_ms = Some(segment.start_ms);
            self.driving_since_rest_min = 0;
            self.driving_since_break_min = 0;
            self.last_break_start_ms = Some(segment.start_ms);
        } else if self.duty_window_start_ms.is_none() {
            self.duty_window_start_ms = Some(segment.start_ms);
        }
        self.rest_streak_min = 0;

        match segment.status {
            DutyStatus::OnDuty if minutes >= limits.qualifying_break_min => {
                self.mark_break(segment.start_ms);
            }
            DutyStatus::Driving => {
                self.driving_since_rest_min += minutes;
                self.driving_since_break_min += minutes;
            }
            _ => {}
        }
    }

    fn mark_break(&mut self, start_ms: i64) {
        self.last_break_start_ms = Some(start_ms);
        self.driving_since_break_min = 0;
    }
}
