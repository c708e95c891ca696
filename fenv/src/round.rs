//! Rounding direction.

use std::{fmt, os::raw::c_int};

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::{
    error::{check, reject},
    sys, Result,
};

/// IEEE 754 rounding direction. discriminants are the platform's `FE_*`
/// values, so `Round as c_int` is what `fesetround` expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum Round {
    ToNearest = sys::TONEAREST,
    Upward = sys::UPWARD,
    Downward = sys::DOWNWARD,
    TowardZero = sys::TOWARDZERO,
}

impl Round {
    pub const ALL: [Round; 4] = [
        Round::ToNearest,
        Round::Upward,
        Round::Downward,
        Round::TowardZero,
    ];
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Round::*;
        let s = match self {
            ToNearest => "to-nearest",
            Upward => "upward",
            Downward => "downward",
            TowardZero => "toward-zero",
        };
        f.write_str(s)
    }
}

/// current rounding direction.
///
/// `fegetround` has no failure status of its own; a value outside the four
/// directions comes back as the error's status.
pub fn get_round() -> Result<Round> {
    let raw = unsafe { sys::fegetround() };
    Round::try_from(raw).map_err(|_| reject("fegetround", raw))
}

/// sets the rounding direction.
///
/// Takes any `int` so that values the platform does not know still reach
/// it; those come back as `Err` and leave the direction as it was.
pub fn set_round(rdir: impl Into<c_int>) -> Result<()> {
    check("fesetround", unsafe { sys::fesetround(rdir.into()) })
}
