//! Exception flags.

use std::{fmt, mem::MaybeUninit, os::raw::c_int};

use bitmask_enum::bitmask;

use crate::{error::check, sys, Result};

/// set of floating-point exceptions, encoded with the platform's `FE_*`
/// bits. `All` is the union of the five named flags.
#[bitmask(i32)]
pub enum Except {
    Invalid = sys::INVALID,
    DivByZero = sys::DIVBYZERO,
    Overflow = sys::OVERFLOW,
    Underflow = sys::UNDERFLOW,
    Inexact = sys::INEXACT,
    All = sys::INVALID | sys::DIVBYZERO | sys::OVERFLOW | sys::UNDERFLOW | sys::INEXACT,
}

const FLAG_NAMES: [(Except, &str); 5] = [
    (Except::Invalid, "invalid"),
    (Except::DivByZero, "divbyzero"),
    (Except::Overflow, "overflow"),
    (Except::Underflow, "underflow"),
    (Except::Inexact, "inexact"),
];

impl Except {
    /// the five individual flags, in `FE_*` declaration order.
    pub const FLAGS: [Except; 5] = [
        Except::Invalid,
        Except::DivByZero,
        Except::Overflow,
        Except::Underflow,
        Except::Inexact,
    ];

    /// builds a mask from a raw `int`, dropping any bit that is not one of
    /// the five named flags (x87's denormal bit, for one).
    pub fn from_raw(raw: c_int) -> Self {
        Self::FLAGS
            .into_iter()
            .filter(|f| raw & f.bits() != 0)
            .fold(Self::none(), |acc, f| acc | f)
    }
}

impl fmt::Display for Except {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("none");
        }
        let mut sep = "";
        for (flag, name) in FLAG_NAMES {
            if self.contains(flag) {
                write!(f, "{sep}{name}")?;
                sep = "|";
            }
        }
        Ok(())
    }
}

/// saved state of some exception flags. only [`get_except_flag`] makes one.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct ExceptFlag(sys::fexcept_t);

/// clears the flags in `excepts`.
pub fn clear_except(excepts: Except) -> Result<()> {
    check("feclearexcept", unsafe { sys::feclearexcept(excepts.bits()) })
}

/// raises the flags in `excepts` as if the faults had happened.
pub fn raise_except(excepts: Except) -> Result<()> {
    check("feraiseexcept", unsafe { sys::feraiseexcept(excepts.bits()) })
}

/// snapshots the flags in `excepts` without touching them.
pub fn get_except_flag(excepts: Except) -> Result<ExceptFlag> {
    let mut flag = MaybeUninit::<sys::fexcept_t>::uninit();
    check("fegetexceptflag", unsafe {
        sys::fegetexceptflag(flag.as_mut_ptr(), excepts.bits())
    })?;
    // SAFETY: fegetexceptflag wrote the flags since it reported success
    Ok(ExceptFlag(unsafe { flag.assume_init() }))
}

/// sets the live flags in `excepts` to what `flag` recorded.
///
/// `excepts` should be a subset of the mask `flag` was captured with; the
/// state of any other flag in `flag` is unspecified.
pub fn set_except_flag(flag: &ExceptFlag, excepts: Except) -> Result<()> {
    check("fesetexceptflag", unsafe {
        sys::fesetexceptflag(&flag.0, excepts.bits())
    })
}

/// which of `excepts` are currently raised.
pub fn test_except(excepts: Except) -> Except {
    let raised = unsafe { sys::fetestexcept(excepts.bits()) };
    Except::from_raw(raised) & excepts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{all_masks, fresh};

    #[test]
    fn test_display() {
        assert_eq!(Except::none().to_string(), "none");
        assert_eq!(Except::Overflow.to_string(), "overflow");
        assert_eq!(
            (Except::Inexact | Except::Invalid).to_string(),
            "invalid|inexact"
        );
        assert_eq!(
            Except::All.to_string(),
            "invalid|divbyzero|overflow|underflow|inexact"
        );
    }

    #[test]
    fn test_all_is_union_of_flags() {
        let union = Except::FLAGS
            .into_iter()
            .fold(Except::none(), |acc, f| acc | f);
        assert_eq!(union, Except::All);
        assert_eq!(all_masks().count(), 32);
    }

    #[test]
    fn test_from_raw_drops_unknown_bits() {
        let raw = Except::Overflow.bits() | (1 << 30);
        assert_eq!(Except::from_raw(raw), Except::Overflow);
        assert_eq!(Except::from_raw(0), Except::none());
    }

    #[test]
    fn test_flag_is_platform_sized() {
        assert_eq!(
            std::mem::size_of::<ExceptFlag>(),
            std::mem::size_of::<sys::fexcept_t>()
        );
    }

    #[test]
    fn test_clear_then_test_is_empty() -> anyhow::Result<()> {
        fresh()?;
        for m in all_masks() {
            let _ = raise_except(Except::All);
            clear_except(m)?;
            assert_eq!(test_except(m), Except::none(), "mask {m}");
        }
        Ok(())
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_raise_then_test_reports_mask() -> anyhow::Result<()> {
        fresh()?;
        for m in all_masks() {
            clear_except(Except::All)?;
            raise_except(m)?;
            assert_eq!(test_except(m), m, "mask {m}");
        }
        Ok(())
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_test_is_subset_of_mask() -> anyhow::Result<()> {
        fresh()?;
        raise_except(Except::Overflow | Except::Invalid)?;
        assert_eq!(test_except(Except::Overflow), Except::Overflow);
        assert_eq!(test_except(Except::DivByZero), Except::none());
        assert_eq!(
            test_except(Except::Invalid | Except::DivByZero),
            Except::Invalid
        );
        Ok(())
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_overflow_sets_flag() -> anyhow::Result<()> {
        use std::hint::black_box;

        fresh()?;
        let r = black_box(black_box(f64::MAX) * black_box(2.0));
        assert!(r.is_infinite());
        assert!(test_except(Except::All).contains(Except::Overflow));
        let r = black_box(black_box(1.0f64) / black_box(0.0));
        assert!(r.is_infinite());
        assert!(test_except(Except::DivByZero).contains(Except::DivByZero));
        Ok(())
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_flag_round_trip() -> anyhow::Result<()> {
        fresh()?;
        raise_except(Except::Overflow | Except::Inexact)?;
        let flag = get_except_flag(Except::All)?;
        // capture leaves the live flags alone
        assert_eq!(test_except(Except::All), Except::Overflow | Except::Inexact);

        clear_except(Except::All)?;
        raise_except(Except::Invalid)?;
        set_except_flag(&flag, Except::All)?;
        assert_eq!(test_except(Except::All), Except::Overflow | Except::Inexact);
        Ok(())
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_set_flag_touches_only_mask() -> anyhow::Result<()> {
        fresh()?;
        let empty = get_except_flag(Except::All)?;
        raise_except(Except::Underflow | Except::DivByZero)?;
        set_except_flag(&empty, Except::Underflow)?;
        assert_eq!(
            test_except(Except::Underflow | Except::DivByZero),
            Except::DivByZero
        );
        Ok(())
    }

    #[cfg(not(feature = "native"))]
    #[test]
    fn test_soft_raise_fails_uniformly() -> anyhow::Result<()> {
        fresh()?;
        raise_except(Except::none())?;
        for m in all_masks().filter(|m| !m.is_none()) {
            let e = raise_except(m).unwrap_err();
            assert_eq!(e.op(), "feraiseexcept");
            assert_ne!(e.status(), 0);
            assert_eq!(test_except(m), Except::none());
        }
        Ok(())
    }
}
