// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::sync::Arc;
use std::thread;
use std::vec::Vec;

use crate::result::{Result, ResultState};
use crate::tests::TestError;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_result_is_send_sync() {
    assert_send_sync::<Result<u64, TestError>>();
    assert_send_sync::<Result<std::string::String, crate::error::IllegalResultAccessError>>();
}

#[test]
fn test_shared_reads_across_threads() {
    let shared = Arc::new(Result::<u64, TestError>::ok(99));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let r = Arc::clone(&shared);
            thread::spawn(move || (r.state(), *Result::as_ref(&*r).unwrap()))
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), (ResultState::Ok, 99));
    }
}
