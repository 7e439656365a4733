use std::fmt;

use serde::{Deserialize, Serialize};

/// A driver's regulatory work state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DutyStatus {
    OffDuty,
    OnDuty,
    Driving,
    Sleeper,
}

impl DutyStatus {
    /// `OFF_DUTY` and `SLEEPER` count toward rest streaks.
    pub fn is_resting(self) -> bool {
        matches!(self, DutyStatus::OffDuty | DutyStatus::Sleeper)
    }

    /// `ON_DUTY` and `DRIVING`: on duty in the regulatory sense.
    pub fn is_working(self) -> bool {
        !self.is_resting()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "OFF_DUTY",
            DutyStatus::OnDuty => "ON_DUTY",
            DutyStatus::Driving => "DRIVING",
            DutyStatus::Sleeper => "SLEEPER",
        }
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a status change was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventOrigin {
    Eld,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Device readings attached to an event. Carried through untouched; the
/// engine never reads them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Telemetry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odometer_miles: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_hours: Option<f64>,
}

/// A point-in-time duty-status assertion.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DutyStatusEvent {
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
    pub driver_id: String,
    pub status: DutyStatus,
    pub origin: EventOrigin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<Telemetry>,
}

impl DutyStatusEvent {
    pub fn new(
        driver_id: impl Into<String>,
        timestamp_ms: i64,
        status: DutyStatus,
        origin: EventOrigin,
    ) -> Self {
        Self {
            timestamp_ms,
            driver_id: driver_id.into(),
            status,
            origin,
            telemetry: None,
        }
    }

    pub fn with_telemetry(mut self, telemetry: Telemetry) -> Self {
        self.telemetry = Some(telemetry);
        self
    }
}
