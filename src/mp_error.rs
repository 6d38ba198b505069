//! MpError: unified error type for the message-passing facade.
//!
//! Backends report failures as integer status codes (0 = success). This module
//! turns those codes into [`MpError`] values and back, so callers can either
//! propagate with `?` or recover the original integer contract.

use thiserror::Error;

/// Result alias used by every facade operation.
pub type MpResult<T> = Result<T, MpError>;

/// Status value meaning "success".
pub const SUCCESS: i32 = 0;

/// Generic failure status, used when an error has no backend code of its own.
pub const ERR_OTHER: i32 = 1;

/// Unified error type for facade operations.
#[derive(Debug, Error)]
pub enum MpError {
    /// The distributed runtime was initialized a second time.
    #[error("distributed runtime has already been initialized")]
    AlreadyInitialized,
    /// A backend operation returned a non-zero status.
    #[error("`{op}` failed with status {code}")]
    Status { op: &'static str, code: i32 },
    /// Writing program output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MpError {
    /// Integer status equivalent of this error. Never returns [`SUCCESS`].
    pub fn code(&self) -> i32 {
        match self {
            MpError::Status { code, .. } if *code != SUCCESS => *code,
            _ => ERR_OTHER,
        }
    }
}

/// Check a raw backend status for operation `op`.
pub fn check(op: &'static str, code: i32) -> MpResult<()> {
    if code == SUCCESS {
        Ok(())
    } else {
        Err(MpError::Status { op, code })
    }
}

/// Collapse a result into the integer status the original wrapper returned.
pub fn status_code<T>(res: &MpResult<T>) -> i32 {
    match res {
        Ok(_) => SUCCESS,
        Err(e) => e.code(),
    }
}
