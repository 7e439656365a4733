use derive_more::From;
use orion_error::{ErrorCode, StructError, UvsReason};

#[derive(Debug, Clone, PartialEq, thiserror::Error, From)]
pub enum CoreReason {
    #[error("events out of chronological order")]
    InvalidOrder,
    #[error("invalid timestamp")]
    InvalidTimestamp,
    #[error("duration is not a whole number of minutes")]
    NonMinuteAlignedDuration,
    #[error("invalid hos config")]
    InvalidConfig,
    #[error("{0}")]
    Uvs(UvsReason),
}

impl ErrorCode for CoreReason {
    fn error_code(&self) -> i32 {
        match self {
            Self::InvalidOrder => 1001,
            Self::InvalidTimestamp => 1002,
            Self::NonMinuteAlignedDuration => 1003,
            Self::InvalidConfig => 1004,
            Self::Uvs(u) => u.error_code(),
        }
    }
}

pub type CoreError = StructError<CoreReason>;
pub type CoreResult<T> = Result<T, CoreError>;
