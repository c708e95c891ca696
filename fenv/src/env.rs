//! Whole-environment snapshots.

use std::mem::MaybeUninit;

use crate::{error::check, except::test_except, sys, Except, Result};

/// complete floating-point environment: rounding direction, exception
/// flags, trap masks and whatever else the platform keeps in `fenv_t`.
///
/// Only [`get_env`] and [`hold_except`] produce one.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct Env(sys::fenv_t);

/// the platform's power-on environment, `FE_DFL_ENV`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultEnv;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Env {}
    impl Sealed for super::DefaultEnv {}
}

/// something [`set_env`] and [`update_env`] can install.
pub trait EnvSource: sealed::Sealed {
    #[doc(hidden)]
    fn as_env_ptr(&self) -> *const sys::fenv_t;
}

impl EnvSource for Env {
    fn as_env_ptr(&self) -> *const sys::fenv_t {
        &self.0
    }
}

impl EnvSource for DefaultEnv {
    fn as_env_ptr(&self) -> *const sys::fenv_t {
        unsafe { sys::fenv_shim_default_env() }
    }
}

/// captures the current environment.
pub fn get_env() -> Result<Env> {
    let mut env = MaybeUninit::<sys::fenv_t>::uninit();
    check("fegetenv", unsafe { sys::fegetenv(env.as_mut_ptr()) })?;
    // SAFETY: written by fegetenv on success
    Ok(Env(unsafe { env.assume_init() }))
}

/// replaces the current environment with `env`. flags raised since `env`
/// was taken are lost.
pub fn set_env(env: &impl EnvSource) -> Result<()> {
    check("fesetenv", unsafe { sys::fesetenv(env.as_env_ptr()) })
}

/// captures the current environment, then clears every flag and switches
/// to non-stop mode so later faults only set flags.
pub fn hold_except() -> Result<Env> {
    let mut env = MaybeUninit::<sys::fenv_t>::uninit();
    check("feholdexcept", unsafe { sys::feholdexcept(env.as_mut_ptr()) })?;
    // SAFETY: written by feholdexcept on success
    Ok(Env(unsafe { env.assume_init() }))
}

/// installs `env` and re-raises the flags that were set beforehand.
pub fn update_env(env: &impl EnvSource) -> Result<()> {
    check("feupdateenv", unsafe { sys::feupdateenv(env.as_env_ptr()) })
}

/// runs `f` between [`hold_except`] and [`update_env`].
///
/// Returns what `f` produced and the exceptions it raised. Those flags stay
/// raised afterwards, on top of whatever was raised before the call; the
/// rest of the environment, rounding direction included, is put back.
/// If `f` unwinds the environment is left held.
pub fn held<R>(f: impl FnOnce() -> R) -> Result<(R, Except)> {
    let saved = hold_except()?;
    log::trace!("holding floating-point exceptions");
    let out = f();
    let raised = test_except(Except::All);
    log::trace!("held region raised {raised}");
    update_env(&saved)?;
    Ok((out, raised))
}
