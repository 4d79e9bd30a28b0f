// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The charsim authors.

//! Tests: [`crate::macros`].

#![cfg(test)]

// grcov-excl-br-start

#[forbid(unsafe_code)]
#[cfg(not(charsim_tests_without_debug_assertions))]
#[test]
#[should_panic]
fn violation_invariant() {
    // On tests, an invariant is just a debug_assert,
    // that should work outside an unsafe block.
    super::invariant!(false);
}

#[test]
fn invariant_holds_in_optionally_unsafe_block() {
    let counts = [1usize, 2, 3];
    let index = 2;
    super::optionally_unsafe! {
        super::invariant!(index < counts.len());
    }
    assert_eq!(counts[index], 3);
}

#[derive(Debug)]
struct Rejected;

impl core::fmt::Display for Rejected {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("rejected")
    }
}

super::impl_error! { Rejected {} }

#[cfg(feature = "std")]
#[test]
fn impl_error_provides_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(Rejected);
    assert_eq!(err.to_string(), "rejected");
    assert!(err.source().is_none());
}

// grcov-excl-br-end
