// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

/// Leading fragment of every illegal access message.
pub const ACCESS_MESSAGE_PREFIX: &str = "Attempted to access result ";

/// Trailing fragment of every illegal access message.
pub const ACCESS_MESSAGE_SUFFIX: &str = " but it does not exist";

/// Message used when a captured panic payload carries no text.
pub const UNKNOWN_PANIC_MESSAGE: &str = "unknown panic payload";
