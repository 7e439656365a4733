pub mod file;
pub mod hos;
pub mod logging;
pub mod ruleset;
pub mod types;
mod validate;

pub use file::HosFileConfig;
pub use hos::HosConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use ruleset::{RuleLimits, Ruleset};
pub use types::HumanDuration;
