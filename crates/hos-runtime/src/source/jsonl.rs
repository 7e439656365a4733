use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use hos_core::DutyStatusEvent;
use orion_error::prelude::*;
use orion_error::ErrorOwe;

use crate::error::RuntimeResult;

use super::EventSource;

/// Events loaded from a JSON Lines file, one [`DutyStatusEvent`] per line.
///
/// Blank lines and lines starting with `#` are skipped. Events are grouped by
/// driver in file order.
#[derive(Debug, Default)]
pub struct JsonlEventSource {
    logs: HashMap<String, Vec<DutyStatusEvent>>,
}

impl JsonlEventSource {
    pub fn load(path: impl AsRef<Path>) -> RuntimeResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .owe_sys()
            .position(path.display().to_string())?;
        let source = Self::from_reader(std::io::BufReader::new(file), &path.display().to_string())?;
        hos_info!(
            src,
            file = %path.display(),
            drivers = source.logs.len(),
            "event log loaded"
        );
        Ok(source)
    }

    /// Parse from any buffered reader; `label` names the input in errors.
    pub fn from_reader(reader: impl BufRead, label: &str) -> RuntimeResult<Self> {
        let mut logs: HashMap<String, Vec<DutyStatusEvent>> = HashMap::new();
        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.owe_sys().position(format!("{label}:{line_no}"))?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let event: DutyStatusEvent = serde_json::from_str(trimmed)
                .owe_data()
                .position(format!("{label}:{line_no}"))?;
            logs.entry(event.driver_id.clone()).or_default().push(event);
        }
        Ok(Self { logs })
    }

    pub fn event_count(&self) -> usize {
        self.logs.values().map(Vec::len).sum()
    }
}

impl EventSource for JsonlEventSource {
    fn events_for(&self, driver_id: &str) -> RuntimeResult<Vec<DutyStatusEvent>> {
        Ok(self.logs.get(driver_id).cloned().unwrap_or_default())
    }

    fn drivers(&self) -> RuntimeResult<Vec<String>> {
        let mut drivers: Vec<String> = self.logs.keys().cloned().collect();
        drivers.sort();
        Ok(drivers)
    }
}
