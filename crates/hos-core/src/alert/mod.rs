mod types;

pub use types::{HosAlert, RuleId, Severity};
