#[macro_use]
mod log_macros;

pub mod clock;
pub mod error;
pub mod monitor;
pub mod source;
pub mod tracing_init;

pub use clock::{Clock, SystemClock, VirtualClock};
pub use error::{RuntimeError, RuntimeReason, RuntimeResult};
pub use monitor::ComplianceMonitor;
pub use source::{EventSource, JsonlEventSource, MemoryEventSource};
