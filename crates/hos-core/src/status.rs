use serde::{Deserialize, Serialize};

use crate::alert::HosAlert;
use hos_config::RuleLimits;

/// Compliance snapshot for one driver at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HosStatus {
    pub as_of_ms: i64,
    pub remaining_drive_min: i64,
    pub remaining_duty_window_min: i64,
    pub break_required_in_min: i64,
    pub cycle_remaining_min: i64,
    /// On-duty minutes counted against the cycle limit.
    pub cycle_used_min: i64,
    /// Start of the most recent qualifying break, if any.
    pub last_break_start_ms: Option<i64>,
    /// Warnings and violations in evaluation order.
    pub alerts: Vec<HosAlert>,
    /// Violation-severity entries of `alerts`.
    pub violations: Vec<HosAlert>,
}

impl HosStatus {
    /// Every budget at its maximum: a driver with no history is fully rested.
    pub(crate) fn fully_rested(limits: &RuleLimits, cycle_limit_min: i64, as_of_ms: i64) -> Self {
        Self {
            as_of_ms,
            remaining_drive_min: limits.driving_min,
            remaining_duty_window_min: limits.duty_window_min,
            break_required_in_min: limits.driving_before_break_min,
            cycle_remaining_min: cycle_limit_min,
            cycle_used_min: 0,
            last_break_start_ms: None,
            alerts: Vec::new(),
            violations: Vec::new(),
        }
    }

    pub fn is_compliant(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        self.alerts.len() > self.violations.len()
    }
}
