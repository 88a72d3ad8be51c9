// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::string::ToString;

use crate::error::{IllegalResultAccessError, IllegalResultAccessSubject};

#[test]
fn test_access_error_messages() {
    assert_eq!(
        IllegalResultAccessError::value().to_string(),
        "Attempted to access result value but it does not exist"
    );
    assert_eq!(
        IllegalResultAccessError::error().to_string(),
        "Attempted to access result error but it does not exist"
    );
}

#[test]
fn test_access_error_subject() {
    let e = IllegalResultAccessError::new(IllegalResultAccessSubject::Error);
    assert_eq!(e, IllegalResultAccessError::error());
    assert_eq!(e.subject(), IllegalResultAccessSubject::Error);
    assert_eq!(IllegalResultAccessSubject::Value.to_string(), "value");
    assert_eq!(IllegalResultAccessSubject::Error.as_str(), "error");
}

#[test]
fn test_access_error_is_std_error() {
    let boxed: std::boxed::Box<dyn std::error::Error> = std::boxed::Box::new(IllegalResultAccessError::value());
    assert!(boxed.source().is_none());
    assert!(boxed.downcast_ref::<IllegalResultAccessError>().is_some());
}

#[cfg(feature = "std")]
#[test]
fn test_panic_error_message() {
    let e = crate::error::PanicError::new("worker died");
    assert_eq!(e.message(), "worker died");
    assert_eq!(e.to_string(), "worker died");
}
