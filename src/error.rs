// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use core::fmt;
use thiserror::Error;

use crate::config::{ACCESS_MESSAGE_PREFIX, ACCESS_MESSAGE_SUFFIX};

/// Which half of a result an accessor tried to read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IllegalResultAccessSubject {
    Value,
    Error,
}

impl IllegalResultAccessSubject {
    pub fn as_str(&self) -> &'static str {
        match self {
            IllegalResultAccessSubject::Value => "value",
            IllegalResultAccessSubject::Error => "error",
        }
    }
}

impl fmt::Display for IllegalResultAccessSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when `unwrap` is called on an Err or `unwrap_err` on an Ok.
///
/// This is a programmer error, kept apart from the domain error a result
/// carries so callers can tell the two apart.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[error("{}{}{}", ACCESS_MESSAGE_PREFIX, .subject, ACCESS_MESSAGE_SUFFIX)]
pub struct IllegalResultAccessError {
    subject: IllegalResultAccessSubject,
}

impl IllegalResultAccessError {
    pub const fn new(subject: IllegalResultAccessSubject) -> Self {
        Self { subject }
    }

    /// The value was requested from an Err.
    pub const fn value() -> Self {
        Self::new(IllegalResultAccessSubject::Value)
    }

    /// The error was requested from an Ok.
    pub const fn error() -> Self {
        Self::new(IllegalResultAccessSubject::Error)
    }

    pub fn subject(&self) -> IllegalResultAccessSubject {
        self.subject
    }
}

/// A panic intercepted by [`crate::catch::catch_panic_in_result`].
#[cfg(feature = "std")]
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
#[error("{message}")]
pub struct PanicError {
    message: std::string::String,
}

#[cfg(feature = "std")]
impl PanicError {
    pub fn new(message: impl Into<std::string::String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type AccessResult<T> = core::result::Result<T, IllegalResultAccessError>;
