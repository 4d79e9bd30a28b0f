// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The charsim authors.
// grcov-excl-br-start

#![cfg(test)]

use itertools::Itertools;

use crate::code::{CharCode, CodeDomain};




/// Testing function for [`Eq`] + [`Clone`].
///
/// It also requires [`core::fmt::Debug`] for assertion.
pub(crate) fn test_auto_clone<T: Clone + Eq + core::fmt::Debug>(orig_value: &T) {
    let mut cloned: T = orig_value.clone();
    assert_eq!(*orig_value, cloned);
    cloned.clone_from(orig_value);
    assert_eq!(*orig_value, cloned);
}


/// Testing function for [`Debug`](core::fmt::Debug) (for coverage).
pub(crate) fn cover_auto_debug<T: core::fmt::Debug>(value: &T) {
    let _ = format!("{:?}", value);
}


/// Validated byte code.
pub(crate) fn byte_code(ch: u8) -> CharCode {
    CodeDomain::BYTE.code(u32::from(ch)).unwrap()
}


/// All strings over `alphabet` with lengths `0..=max_len`,
/// shorter strings first.
pub(crate) fn byte_strings(alphabet: &[u8], max_len: usize) -> Vec<Vec<u8>> {
    // The empty product is handled separately.
    core::iter::once(Vec::new())
        .chain((1..=max_len).flat_map(|len| {
            core::iter::repeat(alphabet.iter().copied())
                .take(len)
                .multi_cartesian_product()
        }))
        .collect()
}


/// Maximum length of exhaustively enumerated strings for property tests.
pub(crate) const EXHAUSTIVE_MAX_LEN: usize = if cfg!(feature = "tests-slow") { 6 } else { 4 };
