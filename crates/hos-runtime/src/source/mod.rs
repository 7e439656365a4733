mod jsonl;
mod memory;

pub use jsonl::JsonlEventSource;
pub use memory::MemoryEventSource;

use hos_core::DutyStatusEvent;

use crate::error::RuntimeResult;

/// Supplies a driver's duty-status history.
///
/// Implementations return the driver's whole log in the order it was
/// recorded, including events later than the evaluation time. They never
/// sort or truncate the history: the engine checks ordering over the
/// full log and drops events past `as_of` itself.
pub trait EventSource: Send + Sync {
    fn events_for(&self, driver_id: &str) -> RuntimeResult<Vec<DutyStatusEvent>>;

    /// Drivers with at least one recorded event, sorted.
    fn drivers(&self) -> RuntimeResult<Vec<String>>;
}
