use serde::{Deserialize, Serialize};

use crate::ruleset::{RuleLimits, Ruleset};
use crate::types::HumanDuration;

/// Evaluation parameters supplied by the caller for every engine call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HosConfig {
    pub ruleset: Ruleset,
    /// Alerts fire once a remaining budget is at or below this many minutes.
    pub warning_threshold_min: i64,
    /// Rolling on-duty budget (4200 = 70h).
    pub cycle_limit_min: i64,
    /// Length of the rolling cycle lookback, in days.
    pub cycle_days: u32,
}

impl Default for HosConfig {
    fn default() -> Self {
        Self {
            ruleset: Ruleset::FmcsaProperty,
            warning_threshold_min: 60,
            cycle_limit_min: 70 * 60,
            cycle_days: 8,
        }
    }
}

impl HosConfig {
    pub fn limits(&self) -> &'static RuleLimits {
        self.ruleset.limits()
    }

    /// Cycle lookback length in milliseconds.
    pub fn cycle_window_ms(&self) -> i64 {
        i64::from(self.cycle_days) * 24 * 60 * 60 * 1000
    }

    /// Reject values the engine cannot evaluate against.
    pub fn validate(&self) -> anyhow::Result<()> {
        crate::validate::validate_hos(self)
    }
}

// ---------------------------------------------------------------------------
// HosSection — deserialized from [hos]
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct HosSection {
    pub ruleset: Ruleset,
    pub warning_threshold: HumanDuration,
    pub cycle_limit: HumanDuration,
    pub cycle_days: u32,
}

impl Default for HosSection {
    fn default() -> Self {
        let d = HosConfig::default();
        Self {
            ruleset: d.ruleset,
            warning_threshold: HumanDuration::from_minutes(d.warning_threshold_min as u64),
            cycle_limit: HumanDuration::from_minutes(d.cycle_limit_min as u64),
            cycle_days: d.cycle_days,
        }
    }
}

impl HosSection {
    /// Resolve human durations into the minute-based [`HosConfig`].
    pub fn resolve(self) -> anyhow::Result<HosConfig> {
        let warning_threshold_min = self
            .warning_threshold
            .as_minutes()
            .map_err(|e| anyhow::anyhow!("hos.warning_threshold: {e}"))?;
        let cycle_limit_min = self
            .cycle_limit
            .as_minutes()
            .map_err(|e| anyhow::anyhow!("hos.cycle_limit: {e}"))?;
        Ok(HosConfig {
            ruleset: self.ruleset,
            warning_threshold_min,
            cycle_limit_min,
            cycle_days: self.cycle_days,
        })
    }
}
