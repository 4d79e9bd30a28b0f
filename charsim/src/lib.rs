// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The charsim authors.

//! Order-independent character composition similarity.
//!
//! This crate scores the similarity of two character sequences from `0`
//! (nothing in common) to `100` (the same characters, in any order).
//!
//! 1.  A coarse pass compares the character histograms of both sequences.
//!     If the resulting score is at or below a caller-supplied *cap*,
//!     the comparison stops and returns `0`.
//! 2.  Otherwise, a greedy alignment pass walks both sequences and charges
//!     one mismatch per misaligned step, skipping characters so that the
//!     histograms become as close as possible.
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "easy-functions")]
//! # {
//! assert_eq!(charsim::compare("hello", "hello", 0), 100);
//! assert_eq!(charsim::compare("listen", "silent", 0), 100);
//! assert_eq!(charsim::compare("abcd", "abce", 0), 75);
//! assert_eq!(charsim::compare("abcd", "abce", 50), 0);
//! assert_eq!(charsim::character_set_difference("abc", "xyz"), 6);
//! # }
//! ```
//!
//! To compare bytes, Unicode scalar values or codes of a custom domain,
//! use [`CodeSequence`]:
//!
//! ```
//! use charsim::{CodeDomain, CodeSequence};
//!
//! let a = CodeSequence::from_bytes(b"kitten");
//! let b = CodeSequence::from_bytes(b"sitting");
//! assert_eq!(a.compare(&b, 0).unwrap(), 53);
//!
//! let digits = CodeDomain::new(10).unwrap();
//! assert!(CodeSequence::new(digits, [1, 2, 10]).is_err());
//! ```
//!
//! # Crate Features
//!
//! *   `std` (default)
//!     Enables [`std::error::Error`] for [`CompareError`].
//!     Without it, this crate is `no_std` (but requires `alloc`).
//! *   `easy-functions` (default)
//!     Enables [`compare()`], [`compare_percentage_only()`] and
//!     [`character_set_difference()`] on string slices.
//! *   `unsafe`
//!     Allows optimizations that rely on internal invariants.
//!
//! # Logging
//!
//! Comparisons emit `debug` and `trace` records through the [`log`] facade.

// no_std
#![cfg_attr(not(any(test, doc, feature = "std")), no_std)]
// In the code maintenance mode, disallow all warnings.
#![cfg_attr(feature = "maint-code", deny(warnings))]
// unsafe code is *only* allowed on enabling the "unsafe" feature or on
// the tests.
#![cfg_attr(not(any(feature = "unsafe", test)), forbid(unsafe_code))]
// Non-test code requires documents
#![cfg_attr(not(test), warn(missing_docs))]
#![cfg_attr(not(test), warn(clippy::missing_docs_in_private_items))]
// Unless in the maintenance mode, allow unknown lints.
#![cfg_attr(not(feature = "maint-lints"), allow(unknown_lints))]
// Unless in the maintenance mode, allow old lint names.
#![cfg_attr(not(feature = "maint-lints"), allow(renamed_and_removed_lints))]
// Tests: allow unused unsafe blocks (invariant! does will not need unsafe
// on tests but others may need this macro).
#![cfg_attr(test, allow(unused_unsafe))]

extern crate alloc;

mod code;
mod compare;
mod compare_easy;
mod error;
mod histogram;
mod macros;
mod test_utils;

pub use code::{CharCode, CodeDomain, CodeSequence};
pub use compare::{select_move, similarity_score, Comparison, Move, MAX_SCORE};
#[cfg(feature = "easy-functions")]
pub use compare_easy::{character_set_difference, compare, compare_percentage_only};
pub use error::CompareError;
pub use histogram::{
    apply_provisional_removal, build_histogram, estimate_removal_effect, Histogram,
};

/// Constant assertions related to the base requirements.
#[doc(hidden)]
mod const_asserts {
    use super::*;
    use static_assertions::const_assert;

    // Histogram buckets are indexed by usize.
    const_assert!(usize::BITS >= 32);

    // Presets are valid domains.
    const_assert!(CodeDomain::BYTE.size() <= CodeDomain::MAX_SIZE);
    const_assert!(CodeDomain::UTF16.size() <= CodeDomain::MAX_SIZE);
    const_assert!(CodeDomain::UNICODE.size() <= CodeDomain::MAX_SIZE);

    // Infallible constructors of CodeSequence rely on these.
    const_assert!(CodeDomain::BYTE.contains(u8::MAX as u32));
    const_assert!(CodeDomain::UTF16.contains(u16::MAX as u32));
    const_assert!(CodeDomain::UNICODE.contains(char::MAX as u32));
}
