use std::fmt;

use serde::{Deserialize, Serialize};

/// Regulatory rule an alert refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum RuleId {
    #[serde(rename = "DRIVE_11")]
    Drive11,
    #[serde(rename = "DUTY_14")]
    Duty14,
    #[serde(rename = "BREAK_30")]
    Break30,
    #[serde(rename = "CYCLE_70_8")]
    Cycle70_8,
    /// Bounds the cycle lookback; never emitted as an alert.
    #[serde(rename = "RESTART_34")]
    Restart34,
}

impl RuleId {
    /// Canonical string form, e.g. `"DRIVE_11"`.
    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::Drive11 => "DRIVE_11",
            RuleId::Duty14 => "DUTY_14",
            RuleId::Break30 => "BREAK_30",
            RuleId::Cycle70_8 => "CYCLE_70_8",
            RuleId::Restart34 => "RESTART_34",
        }
    }

    fn budget_name(self) -> &'static str {
        match self {
            RuleId::Drive11 => "driving time",
            RuleId::Duty14 => "duty window",
            RuleId::Break30 => "driving before a 30-minute break",
            RuleId::Cycle70_8 => "cycle on-duty time",
            RuleId::Restart34 => "restart",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Warning,
    Violation,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Warning => "WARNING",
            Severity::Violation => "VIOLATION",
        })
    }
}

/// A warning or violation raised by one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HosAlert {
    pub rule: RuleId,
    pub severity: Severity,
    pub message: String,
    /// Always the evaluation time: alerts describe a snapshot, not an event log.
    pub at_ms: i64,
}

impl HosAlert {
    pub fn violation(rule: RuleId, at_ms: i64) -> Self {
        Self {
            rule,
            severity: Severity::Violation,
            message: format!("{rule}: {} exhausted", rule.budget_name()),
            at_ms,
        }
    }

    pub fn warning(rule: RuleId, remaining_min: i64, at_ms: i64) -> Self {
        Self {
            rule,
            severity: Severity::Warning,
            message: format!(
                "{rule}: {remaining_min} min of {} remaining",
                rule.budget_name()
            ),
            at_ms,
        }
    }

    pub fn is_violation(&self) -> bool {
        self.severity == Severity::Violation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_ids_serialize_as_regulatory_names() {
        assert_eq!(serde_json::to_string(&RuleId::Cycle70_8).unwrap(), "\"CYCLE_70_8\"");
        assert_eq!(
            serde_json::from_str::<RuleId>("\"RESTART_34\"").unwrap(),
            RuleId::Restart34
        );
        assert_eq!(RuleId::Drive11.to_string(), "DRIVE_11");
    }

    #[test]
    fn alert_messages() {
        let w = HosAlert::warning(RuleId::Duty14, 45, 1_000);
        assert_eq!(w.message, "DUTY_14: 45 min of duty window remaining");
        assert!(!w.is_violation());

        let v = HosAlert::violation(RuleId::Drive11, 1_000);
        assert_eq!(v.message, "DRIVE_11: driving time exhausted");
        assert!(v.is_violation());
        assert_eq!(serde_json::to_value(&v).unwrap()["severity"], "VIOLATION");
    }
}
