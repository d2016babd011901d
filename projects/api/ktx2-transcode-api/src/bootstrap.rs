//! Process wide decoder initialization.
//!
//! Basis Universal transcoders build global lookup tables once per process
//! before any texture can be decoded. The host application supplies that
//! initialization and runs it through [`bootstrap`]; every transcode checks
//! [`is_bootstrapped`] first.

use once_cell::sync::OnceCell;

static BOOTSTRAP: OnceCell<()> = OnceCell::new();

/// Runs `init` unless a bootstrap has already completed in this process.
///
/// Concurrent callers block until the winning `init` returns.
///
/// # Returns
///
/// `true` if this call ran `init`.
pub fn bootstrap<F: FnOnce()>(init: F) -> bool {
    let mut ran = false;
    BOOTSTRAP.get_or_init(|| {
        init();
        ran = true;
    });

    if ran {
        tracing::debug!("decoder bootstrap complete");
    }
    ran
}

/// Runs a fallible `init` unless a bootstrap has already completed.
///
/// A failed `init` leaves the process un-bootstrapped, so a later call may retry.
///
/// # Errors
///
/// Whatever `init` returns.
pub fn try_bootstrap<E, F: FnOnce() -> Result<(), E>>(init: F) -> Result<(), E> {
    BOOTSTRAP.get_or_try_init(init)?;
    Ok(())
}

/// Whether a bootstrap has completed in this process.
pub fn is_bootstrapped() -> bool {
    BOOTSTRAP.get().is_some()
}
