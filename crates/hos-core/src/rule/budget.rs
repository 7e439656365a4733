use crate::alert::{HosAlert, RuleId};

/// Remaining budget per alerting rule, in fixed alert order.
pub(super) struct Budgets {
    pub drive_min: i64,
    pub duty_window_min: i64,
    pub break_min: i64,
    pub cycle_min: i64,
}

impl Budgets {
    fn ordered(&self) -> [(RuleId, i64); 4] {
        [
            (RuleId::Drive11, self.drive_min),
            (RuleId::Duty14, self.duty_window_min),
            (RuleId::Break30, self.break_min),
            (RuleId::Cycle70_8, self.cycle_min),
        ]
    }

    /// Exhausted budgets are violations, budgets at or under the threshold are
    /// warnings. Returns `(alerts, violations)`.
    pub fn alerts(&self, warning_threshold_min: i64, as_of_ms: i64) -> (Vec<HosAlert>, Vec<HosAlert>) {
        let mut alerts = Vec::new();
        let mut violations = Vec::new();
        for (rule, remaining) in self.ordered() {
            if remaining <= 0 {
                let alert = HosAlert::violation(rule, as_of_ms);
                violations.push(alert.clone());
                alerts.push(alert);
            } else if remaining <= warning_threshold_min {
                alerts.push(HosAlert::warning(rule, remaining, as_of_ms));
            }
        }
        (alerts, violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::Severity;

    #[test]
    fn fixed_order_and_split() {
        let budgets = Budgets {
            drive_min: 30,
            duty_window_min: 500,
            break_min: 0,
            cycle_min: 60,
        };
        let (alerts, violations) = budgets.alerts(60, 7);
        let rules: Vec<_> = alerts.iter().map(|a| (a.rule, a.severity)).collect();
        assert_eq!(
            rules,
            vec![
                (RuleId::Drive11, Severity::Warning),
                (RuleId::Break30, Severity::Violation),
                (RuleId::Cycle70_8, Severity::Warning),
            ]
        );
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, RuleId::Break30);
        assert!(alerts.iter().all(|a| a.at_ms == 7));
    }

    #[test]
    fn zero_threshold_only_violations() {
        let budgets = Budgets {
            drive_min: 1,
            duty_window_min: 1,
            break_min: 1,
            cycle_min: 0,
        };
        let (alerts, violations) = budgets.alerts(0, 0);
        assert_eq!(alerts, violations);
        assert_eq!(alerts[0].rule, RuleId::Cycle70_8);
    }
}
