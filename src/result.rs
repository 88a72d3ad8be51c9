// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Value-or-error container.
//!
//! A [`Result`] holds exactly one payload: a value in the Ok state or an
//! error in the Err state. The state is carried by an explicit tag, so a
//! value that is itself "empty" (`()`, `None`) is still an ordinary Ok.
//! Instances are immutable once built; there are no `&mut self` methods.

use core::fmt;

use crate::error::{AccessResult, IllegalResultAccessError};

/// Discriminant of a [`Result`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResultState {
    Ok,
    Err,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Payload<T, E> {
    Value(T),
    Error(E),
}

/// Outcome of an operation that may fail.
///
/// `E` must be able to render a human-readable message (`Display`).
#[must_use = "this `Result` may hold an error, which should be handled"]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Result<T, E> {
    payload: Payload<T, E>,
}

impl<T, E: fmt::Display> Result<T, E> {
    /// Builds a result in the Ok state.
    #[inline]
    pub fn ok(value: T) -> Self {
        Self { payload: Payload::Value(value) }
    }

    /// Builds a result in the Err state.
    #[inline]
    pub fn err(error: E) -> Self {
        Self { payload: Payload::Error(error) }
    }

    /// Reads the tag that decides the state; the payload's contents are
    /// never consulted.
    #[inline]
    pub fn state(&self) -> ResultState {
        match self.payload {
            Payload::Value(_) => ResultState::Ok,
            Payload::Error(_) => ResultState::Err,
        }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.state() == ResultState::Ok
    }

    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with the message of [`IllegalResultAccessError::value`] if the
    /// result is an Err. Use [`Result::try_unwrap`] to get the error as data.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.payload {
            Payload::Value(value) => value,
            Payload::Error(_) => illegal_access(IllegalResultAccessError::value()),
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics with the message of [`IllegalResultAccessError::error`] if the
    /// result is an Ok.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self.payload {
            Payload::Error(error) => error,
            Payload::Value(_) => illegal_access(IllegalResultAccessError::error()),
        }
    }

    /// Returns the value, or an [`IllegalResultAccessError`] naming the value
    /// as the missing subject.
    pub fn try_unwrap(self) -> AccessResult<T> {
        match self.payload {
            Payload::Value(value) => Ok(value),
            Payload::Error(error) => {
                tracing::debug!(error = %error, "value requested from an Err result");
                Err(IllegalResultAccessError::value())
            }
        }
    }

    /// Returns the error, or an [`IllegalResultAccessError`] naming the error
    /// as the missing subject.
    pub fn try_unwrap_err(self) -> AccessResult<E> {
        match self.payload {
            Payload::Error(error) => Ok(error),
            Payload::Value(_) => {
                tracing::debug!("error requested from an Ok result");
                Err(IllegalResultAccessError::error())
            }
        }
    }

    #[inline]
    pub fn unwrap_or(self, default_value: T) -> T {
        match self.payload {
            Payload::Value(value) => value,
            Payload::Error(_) => default_value,
        }
    }

    /// Returns the value, or the output of `supplier` for an Err.
    ///
    /// `supplier` only runs in the Err state. If it panics the panic is not
    /// intercepted.
    #[inline]
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, supplier: F) -> T {
        match self.payload {
            Payload::Value(value) => value,
            Payload::Error(_) => supplier(),
        }
    }

    /// Hands the wrapped error back to the caller so it can be propagated
    /// with `?`. An Ok yields `Ok(())` and its value is dropped.
    #[inline]
    pub fn throw_if_err(self) -> core::result::Result<(), E> {
        match self.payload {
            Payload::Value(_) => Ok(()),
            Payload::Error(error) => Err(error),
        }
    }

    #[inline]
    pub fn into_ok(self) -> Option<T> {
        match self.payload {
            Payload::Value(value) => Some(value),
            Payload::Error(_) => None,
        }
    }

    #[inline]
    pub fn into_err(self) -> Option<E> {
        match self.payload {
            Payload::Value(_) => None,
            Payload::Error(error) => Some(error),
        }
    }

    /// Borrows the payload, leaving `self` untouched.
    #[inline]
    pub fn as_ref(&self) -> Result<&T, &E> {
        match &self.payload {
            Payload::Value(value) => Result::ok(value),
            Payload::Error(error) => Result::err(error),
        }
    }

    #[inline]
    pub fn into_std(self) -> core::result::Result<T, E> {
        match self.payload {
            Payload::Value(value) => Ok(value),
            Payload::Error(error) => Err(error),
        }
    }
}

#[cold]
#[track_caller]
fn illegal_access(access: IllegalResultAccessError) -> ! {
    tracing::error!(subject = %access.subject(), "illegal result access");
    panic!("{}", access)
}

impl<T, E: fmt::Display> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(r: core::result::Result<T, E>) -> Self {
        match r {
            Ok(value) => Result::ok(value),
            Err(error) => Result::err(error),
        }
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for core::result::Result<T, E> {
    fn from(r: Result<T, E>) -> Self {
        r.into_std()
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Result<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Payload::Value(value) => write!(f, "Ok({})", value),
            Payload::Error(error) => write!(f, "Err({})", error),
        }
    }
}
