//! Access to the floating-point environment of `<fenv.h>`.
//!
//! Every function forwards to the matching C primitive and acts on the
//! calling thread's floating-point control and status registers. Nothing is
//! cached or synchronised here. A zero status from the platform becomes
//! `Ok`; anything else is handed back untouched inside [`FenvError`].
//!
//! Constants are taken from the target's C headers when the crate is built
//! with the `native` feature (the default).
//!
//! Keep floating-point work that depends on the live environment opaque to
//! the optimiser (e.g. through [`std::hint::black_box`]), since rustc
//! assumes the default environment when folding constants.
//!
//! ```
//! use std::hint::black_box;
//! use fenv::{held, Except};
//!
//! let (product, raised) = held(|| black_box(f64::MAX) * black_box(2.0))?;
//! assert!(product.is_infinite());
//! # #[cfg(feature = "native")]
//! assert!(raised.contains(Except::Overflow));
//! # Ok::<(), fenv::FenvError>(())
//! ```

mod sys;

pub mod env;
pub mod error;
pub mod except;
pub mod round;

pub use env::{get_env, held, hold_except, set_env, update_env, DefaultEnv, Env, EnvSource};
pub use error::{FenvError, Result};
pub use except::{
    clear_except, get_except_flag, raise_except, set_except_flag, test_except, Except,
    ExceptFlag,
};
pub use round::{get_round, set_round, Round};
