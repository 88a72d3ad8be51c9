// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Boundary between fallible code and [`Result`] values.

use core::fmt;

use crate::result::Result;

#[cfg(feature = "std")]
use crate::{config::UNKNOWN_PANIC_MESSAGE, error::PanicError};
#[cfg(feature = "std")]
use std::{any::Any, panic::UnwindSafe, string::String};

/// Runs `f` and captures whatever it returns, including an error raised
/// with `?` inside the closure.
pub fn catch_in_result<T, E, F>(f: F) -> Result<T, E>
where
    E: fmt::Display,
    F: FnOnce() -> core::result::Result<T, E>,
{
    match f() {
        Ok(value) => Result::ok(value),
        Err(error) => {
            tracing::trace!(error = %error, "captured error in result");
            Result::err(error)
        }
    }
}

/// Runs `f` and turns a panic into an Err.
///
/// This only works when the binary is built with `panic = "unwind"`. The
/// installed panic hook still runs before the panic is captured.
#[cfg(feature = "std")]
pub fn catch_panic_in_result<T, F>(f: F) -> Result<T, PanicError>
where
    F: FnOnce() -> T + UnwindSafe,
{
    match std::panic::catch_unwind(f) {
        Ok(value) => Result::ok(value),
        Err(payload) => {
            let error = PanicError::new(panic_message(&*payload));
            tracing::debug!(reason = error.message(), "captured panic in result");
            Result::err(error)
        }
    }
}

#[cfg(feature = "std")]
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        String::from(*message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from(UNKNOWN_PANIC_MESSAGE)
    }
}
