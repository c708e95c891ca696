//! Stand-in for builds without the `native` feature.
//!
//! Behaves like a target without floating-point exception support: flags
//! are never recorded and round-to-nearest is the only direction. Calls
//! that cannot be honoured report `-1`.

#![allow(non_camel_case_types, dead_code)]

use std::os::raw::c_int;

pub const INVALID: c_int = 0x01;
pub const DIVBYZERO: c_int = 0x04;
pub const OVERFLOW: c_int = 0x08;
pub const UNDERFLOW: c_int = 0x10;
pub const INEXACT: c_int = 0x20;

pub const TONEAREST: c_int = 0;
pub const DOWNWARD: c_int = 0x400;
pub const UPWARD: c_int = 0x800;
pub const TOWARDZERO: c_int = 0xc00;

const FAILURE: c_int = -1;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct fenv_t {
    round: c_int,
}

pub type fexcept_t = c_int;

static DEFAULT_ENV: fenv_t = fenv_t {
    round: TONEAREST,
};

pub unsafe fn fenv_shim_default_env() -> *const fenv_t {
    &DEFAULT_ENV
}

pub unsafe fn feclearexcept(_excepts: c_int) -> c_int {
    0
}

pub unsafe fn feraiseexcept(excepts: c_int) -> c_int {
    if excepts == 0 {
        0
    } else {
        FAILURE
    }
}

pub unsafe fn fegetexceptflag(flagp: *mut fexcept_t, _excepts: c_int) -> c_int {
    flagp.write(0);
    0
}

pub unsafe fn fesetexceptflag(_flagp: *const fexcept_t, _excepts: c_int) -> c_int {
    0
}

pub unsafe fn fetestexcept(_excepts: c_int) -> c_int {
    0
}

pub unsafe fn fegetround() -> c_int {
    TONEAREST
}

pub unsafe fn fesetround(round: c_int) -> c_int {
    if round == TONEAREST {
        0
    } else {
        FAILURE
    }
}

pub unsafe fn fegetenv(envp: *mut fenv_t) -> c_int {
    envp.write(DEFAULT_ENV);
    0
}

pub unsafe fn fesetenv(_envp: *const fenv_t) -> c_int {
    0
}

pub unsafe fn feholdexcept(envp: *mut fenv_t) -> c_int {
    fegetenv(envp)
}

pub unsafe fn feupdateenv(_envp: *const fenv_t) -> c_int {
    0
}
