use hos_config::HosConfig;
use hos_core::{HosStatus, evaluate};
use orion_error::UvsReason;
use orion_error::prelude::*;
use orion_error::ErrorOwe;

use crate::clock::Clock;
use crate::error::{RuntimeReason, RuntimeResult};
use crate::source::EventSource;

/// Evaluates drivers' compliance from an [`EventSource`] against a [`Clock`].
pub struct ComplianceMonitor<S, C> {
    config: HosConfig,
    source: S,
    clock: C,
}

impl<S: EventSource, C: Clock> ComplianceMonitor<S, C> {
    pub fn new(config: HosConfig, source: S, clock: C) -> RuntimeResult<Self> {
        config.validate().owe_conf()?;
        hos_info!(
            conf,
            ruleset = %config.ruleset,
            cycle_limit_min = config.cycle_limit_min,
            cycle_days = config.cycle_days,
            warning_threshold_min = config.warning_threshold_min,
            "compliance monitor configured"
        );
        Ok(Self {
            config,
            source,
            clock,
        })
    }

    pub fn config(&self) -> &HosConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Snapshot at the clock's current time.
    pub fn snapshot(&self, driver_id: &str) -> RuntimeResult<HosStatus> {
        self.snapshot_at(driver_id, self.clock.now_ms())
    }

    pub fn snapshot_at(&self, driver_id: &str, as_of_ms: i64) -> RuntimeResult<HosStatus> {
        let events = self.source.events_for(driver_id)?;
        let status = evaluate(&self.config, &events, as_of_ms).err_conv()?;

        for alert in &status.alerts {
            hos_warn!(
                eval,
                driver = %driver_id,
                rule = %alert.rule,
                severity = %alert.severity,
                "{}",
                alert.message
            );
        }
        hos_debug!(
            eval,
            driver = %driver_id,
            as_of_ms,
            events = events.len(),
            drive_min = status.remaining_drive_min,
            duty_window_min = status.remaining_duty_window_min,
            break_in_min = status.break_required_in_min,
            cycle_min = status.cycle_remaining_min,
            "snapshot evaluated"
        );
        Ok(status)
    }

    /// Snapshot every driver the source knows, evaluated side by side.
    pub fn snapshot_all(&self) -> RuntimeResult<Vec<(String, HosStatus)>> {
        let as_of_ms = self.clock.now_ms();
        let drivers = self.source.drivers()?;
        std::thread::scope(|scope| {
            let handles: Vec<_> = drivers
                .into_iter()
                .map(|driver| {
                    scope.spawn(move || -> RuntimeResult<(String, HosStatus)> {
                        let status = self.snapshot_at(&driver, as_of_ms)?;
                        Ok((driver, status))
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| {
                    h.join().unwrap_or_else(|_| {
                        hos_error!(eval, as_of_ms, "evaluation thread panicked");
                        StructError::from(RuntimeReason::from(UvsReason::system_error()))
                            .with_detail("evaluation thread panicked")
                            .err()
                    })
                })
                .collect()
        })
    }

    /// Fail unless the driver currently has no violations.
    ///
    /// An evaluation error is returned as-is: an undeterminable status is
    /// never reported as compliant.
    pub fn assert_compliant(&self, driver_id: &str) -> RuntimeResult<HosStatus> {
        let status = self.snapshot(driver_id)?;
        if !status.is_compliant() {
            let rules: Vec<&str> = status.violations.iter().map(|v| v.rule.as_str()).collect();
            return StructError::from(RuntimeReason::Compliance)
                .with_detail(format!(
                    "driver {driver_id:?} has HOS violations: {}",
                    rules.join(", ")
                ))
                .err();
        }
        Ok(status)
    }
}
