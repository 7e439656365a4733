use serde::{Deserialize, Serialize};

/// Fixed regulatory limits, in minutes. These belong to the rule definition and
/// are never read from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleLimits {
    /// Driving allowed after a qualifying rest.
    pub driving_min: i64,
    /// Span of the duty window opened by the first work after a qualifying rest.
    pub duty_window_min: i64,
    /// Continuous resting that resets the driving and duty-window counters.
    pub qualifying_rest_min: i64,
    /// Continuous non-driving that resets the break countdown.
    pub qualifying_break_min: i64,
    /// Driving allowed before a qualifying break is mandatory.
    pub driving_before_break_min: i64,
    /// Continuous resting that restarts the rolling cycle.
    pub restart_min: i64,
}

const FMCSA_PROPERTY: RuleLimits = RuleLimits {
    driving_min: 660,
    duty_window_min: 840,
    qualifying_rest_min: 600,
    qualifying_break_min: 30,
    driving_before_break_min: 480,
    restart_min: 2040,
};

/// Which rule set the engine applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ruleset {
    /// US FMCSA property-carrying limits (11h / 14h / 30m break / 34h restart).
    #[default]
    FmcsaProperty,
}

impl Ruleset {
    pub fn limits(self) -> &'static RuleLimits {
        match self {
            Ruleset::FmcsaProperty => &FMCSA_PROPERTY,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Ruleset::FmcsaProperty => "fmcsa_property",
        }
    }
}

impl std::fmt::Display for Ruleset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmcsa_limits() {
        let l = Ruleset::FmcsaProperty.limits();
        assert_eq!(l.driving_min, 11 * 60);
        assert_eq!(l.duty_window_min, 14 * 60);
        assert_eq!(l.qualifying_rest_min, 10 * 60);
        assert_eq!(l.qualifying_break_min, 30);
        assert_eq!(l.driving_before_break_min, 8 * 60);
        assert_eq!(l.restart_min, 34 * 60);
    }

    #[test]
    fn ruleset_serde_name() {
        let json = serde_json::to_string(&Ruleset::FmcsaProperty).unwrap();
        assert_eq!(json, "\"fmcsa_property\"");
        assert!(serde_json::from_str::<Ruleset>("\"canada_south\"").is_err());
    }
}
