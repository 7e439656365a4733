use std::collections::HashMap;
use std::sync::RwLock;

use hos_core::{DutyStatus, DutyStatusEvent, EventOrigin};
use orion_error::prelude::*;

use crate::clock::Clock;
use crate::error::{RuntimeReason, RuntimeResult};

use super::EventSource;

/// In-memory per-driver append log.
#[derive(Debug, Default)]
pub struct MemoryEventSource {
    logs: RwLock<HashMap<String, Vec<DutyStatusEvent>>>,
}

impl MemoryEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `event` to its driver's log. An event older than the driver's
    /// latest one is refused; equal timestamps are accepted.
    pub fn record(&self, event: DutyStatusEvent) -> RuntimeResult<()> {
        let mut logs = self.logs.write().expect("event log lock poisoned");
        let log = logs.entry(event.driver_id.clone()).or_default();
        if let Some(last) = log.last() {
            if event.timestamp_ms < last.timestamp_ms {
                return StructError::from(RuntimeReason::Source)
                    .with_detail(format!(
                        "driver {:?}: event at {} ms is older than last recorded event at {} ms",
                        event.driver_id, event.timestamp_ms, last.timestamp_ms
                    ))
                    .err();
            }
        }
        hos_debug!(
            src,
            driver = %event.driver_id,
            status = %event.status,
            at_ms = event.timestamp_ms,
            "duty status recorded"
        );
        log.push(event);
        Ok(())
    }

    /// Record a status change stamped with the clock's current time.
    pub fn record_at(
        &self,
        clock: &impl Clock,
        driver_id: &str,
        status: DutyStatus,
        origin: EventOrigin,
    ) -> RuntimeResult<()> {
        self.record(DutyStatusEvent::new(driver_id, clock.now_ms(), status, origin))
    }
}

impl EventSource for MemoryEventSource {
    fn events_for(&self, driver_id: &str) -> RuntimeResult<Vec<DutyStatusEvent>> {
        let logs = self.logs.read().expect("event log lock poisoned");
        Ok(logs.get(driver_id).cloned().unwrap_or_default())
    }

    fn drivers(&self) -> RuntimeResult<Vec<String>> {
        let logs = self.logs.read().expect("event log lock poisoned");
        let mut drivers: Vec<String> = logs.keys().cloned().collect();
        drivers.sort();
        Ok(drivers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::VirtualClock;

    #[test]
    fn record_and_query() {
        let src = MemoryEventSource::new();
        let clock = VirtualClock::starting_at(0);
        src.record_at(&clock, "D-1", DutyStatus::OnDuty, EventOrigin::Eld)
            .unwrap();
        clock.advance_minutes(30);
        src.record_at(&clock, "D-1", DutyStatus::Driving, EventOrigin::Eld)
            .unwrap();
        clock.advance_minutes(30);
        src.record_at(&clock, "D-2", DutyStatus::OffDuty, EventOrigin::Manual)
            .unwrap();

        let d1 = src.events_for("D-1").unwrap();
        assert_eq!(d1.len(), 2);
        assert_eq!(d1[1].timestamp_ms, 30 * 60_000);
        assert!(src.events_for("D-9").unwrap().is_empty());
        assert_eq!(src.drivers().unwrap(), vec!["D-1", "D-2"]);
    }

    #[test]
    fn refuses_event_older_than_log() {
        let src = MemoryEventSource::new();
        src.record(DutyStatusEvent::new("D-1", 60_000, DutyStatus::OnDuty, EventOrigin::Eld))
            .unwrap();
        let err = src
            .record(DutyStatusEvent::new("D-1", 0, DutyStatus::Driving, EventOrigin::Eld))
            .unwrap_err();
        assert_eq!(*err.reason(), RuntimeReason::Source);
        // Same timestamp replaces status downstream, so it is accepted.
        src.record(DutyStatusEvent::new("D-1", 60_000, DutyStatus::Driving, EventOrigin::Eld))
            .unwrap();
    }
}
