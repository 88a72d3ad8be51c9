// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
#![no_std]

//! valori-result: an immutable value-or-error container with an explicit
//! Ok/Err discriminant and documented accessor failure policies.

#[cfg(any(test, feature = "std"))]
#[macro_use]
extern crate std;

pub mod config;
pub mod error;
pub mod result;
pub mod catch;

pub use catch::catch_in_result;
#[cfg(feature = "std")]
pub use catch::catch_panic_in_result;
#[cfg(feature = "std")]
pub use error::PanicError;
pub use error::{AccessResult, IllegalResultAccessError, IllegalResultAccessSubject};
pub use result::{Result, ResultState};

#[cfg(test)]
pub mod tests;
