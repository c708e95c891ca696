//! Raw `<fenv.h>` surface.
//!
//! With the `native` feature everything comes from bindgen's view of the
//! target C library (see `csrc/fenv_shim.h`); without it, from `soft`.
//! Either way the rest of the crate sees the same `fe*` functions, the
//! `fenv_t`/`fexcept_t` blobs and the flag and direction values as `int`.

cfg_if::cfg_if! {
    if #[cfg(feature = "native")] {
        use std::os::raw::c_int;

        #[allow(warnings)]
        mod binding {
            include!(concat!(env!("OUT_DIR"), "/bindings.rs"));
        }
        pub(crate) use binding::*;

        pub(crate) const INVALID: c_int = FENV_SHIM_INVALID as c_int;
        pub(crate) const DIVBYZERO: c_int = FENV_SHIM_DIVBYZERO as c_int;
        pub(crate) const OVERFLOW: c_int = FENV_SHIM_OVERFLOW as c_int;
        pub(crate) const UNDERFLOW: c_int = FENV_SHIM_UNDERFLOW as c_int;
        pub(crate) const INEXACT: c_int = FENV_SHIM_INEXACT as c_int;

        pub(crate) const TONEAREST: c_int = FENV_SHIM_TONEAREST as c_int;
        pub(crate) const UPWARD: c_int = FENV_SHIM_UPWARD as c_int;
        pub(crate) const DOWNWARD: c_int = FENV_SHIM_DOWNWARD as c_int;
        pub(crate) const TOWARDZERO: c_int = FENV_SHIM_TOWARDZERO as c_int;
    } else {
        mod soft;
        pub(crate) use soft::*;
    }
}
