use std::os::raw::c_int;

use thiserror::Error;

/// nonzero status handed back by one of the `fe*` primitives.
///
/// The status is kept exactly as the platform reported it. Its meaning is
/// platform-defined, so it is only ever compared against zero.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("`{op}` reported failure status {status}")]
pub struct FenvError {
    op: &'static str,
    status: c_int,
}

impl FenvError {
    /// name of the C primitive that failed, e.g. `"fesetround"`.
    pub fn op(&self) -> &'static str {
        self.op
    }
    /// raw status returned by the primitive. never zero.
    pub fn status(&self) -> c_int {
        self.status
    }
}

impl From<FenvError> for c_int {
    fn from(e: FenvError) -> Self {
        e.status
    }
}

pub type Result<T> = std::result::Result<T, FenvError>;

/// maps a C status to `Ok(())` on zero.
#[inline]
pub(crate) fn check(op: &'static str, status: c_int) -> Result<()> {
    if status == 0 {
        Ok(())
    } else {
        log::debug!("{op} reported status {status}");
        Err(FenvError { op, status })
    }
}

/// for values that are not statuses but still came back unusable.
pub(crate) fn reject(op: &'static str, status: c_int) -> FenvError {
    log::debug!("{op} returned unrecognised value {status}");
    FenvError { op, status }
}
