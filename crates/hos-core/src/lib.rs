//! Hours-of-service compliance engine.
//!
//! [`evaluate`] turns one driver's chronological duty-status events into a
//! point-in-time [`HosStatus`]: remaining driving, duty-window, break and
//! cycle budgets plus the warnings and violations they imply. The engine is a
//! pure function; it owns no storage and performs no I/O.

pub mod alert;
pub mod error;
pub mod event;
pub mod rule;
pub mod segment;
pub mod status;
mod time;

pub use alert::{HosAlert, RuleId, Severity};
pub use error::{CoreError, CoreReason, CoreResult};
pub use event::{DutyStatus, DutyStatusEvent, EventOrigin, GeoPoint, Telemetry};
pub use rule::{evaluate, evaluate_segments};
pub use segment::{Segment, build_segments};
pub use status::HosStatus;

pub use hos_config::{HosConfig, RuleLimits, Ruleset};
