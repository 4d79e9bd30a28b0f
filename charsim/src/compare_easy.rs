// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The charsim authors.

//! Easy comparison functions on string slices.
//!
//! Strings are compared as sequences of UTF-16 code units
//! ([`CodeDomain::UTF16`]), so no input can be rejected.

#![cfg(feature = "easy-functions")]

use crate::code::{CodeDomain, CodeSequence};
use crate::compare::{character_set_difference_internal, compare_internal};




/// Compares two strings and returns the similarity score (`0..=100`).
///
/// If the coarse (order-independent) score is at or below `cap`,
/// `0` is returned without running the greedy alignment pass.
///
/// See [`CodeSequence::compare()`] for details.
///
/// # Example
///
/// ```
/// assert_eq!(charsim::compare("hello", "hello", 0), 100);
/// assert_eq!(charsim::compare("abcd", "abce", 0), 75);
/// assert_eq!(charsim::compare("abc", "xyz", 0), 0);
/// assert_eq!(charsim::compare("", "", 0), 100);
/// ```
pub fn compare(a: &str, b: &str, cap: u32) -> u32 {
    let a = CodeSequence::from_utf16(a);
    let b = CodeSequence::from_utf16(b);
    compare_internal(a.codes(), b.codes(), CodeDomain::UTF16, Some(cap)).score()
}

/// Compares two strings without the cap.
///
/// # Example
///
/// ```
/// // The coarse score is 0 but the alignment finds 3 of 6 matching.
/// assert_eq!(charsim::compare("abcdef", "abcxyz", 0), 0);
/// assert_eq!(charsim::compare_percentage_only("abcdef", "abcxyz"), 50);
/// ```
pub fn compare_percentage_only(a: &str, b: &str) -> u32 {
    let a = CodeSequence::from_utf16(a);
    let b = CodeSequence::from_utf16(b);
    compare_internal(a.codes(), b.codes(), CodeDomain::UTF16, None).score()
}

/// Computes the coarse (order-independent) difference between two strings.
///
/// # Example
///
/// ```
/// assert_eq!(charsim::character_set_difference("listen", "silent"), 0);
/// assert_eq!(charsim::character_set_difference("abc", "xyz"), 6);
/// ```
pub fn character_set_difference(a: &str, b: &str) -> usize {
    let a = CodeSequence::from_utf16(a);
    let b = CodeSequence::from_utf16(b);
    character_set_difference_internal(a.codes(), b.codes(), CodeDomain::UTF16)
}
