// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The charsim authors.

//! Macros shared by the histogram engine and the error type.

/// Wraps histogram bucket hints in `unsafe` when the `unsafe` feature is on.
///
/// Without the feature the body is an ordinary block, so the same call site
/// builds under `forbid(unsafe_code)`.
#[doc(alias = "optionally_unsafe")]
macro_rules! optionally_unsafe_impl {
    {$($tokens: tt)*} => {
        cfg_if::cfg_if! {
            if #[cfg(feature = "unsafe")] {
                unsafe { $($tokens)* }
            }
            else {
                { $($tokens)* }
            }
        }
    };
}
pub(crate) use optionally_unsafe_impl as optionally_unsafe;

/// States a condition the bucket indexing code relies on.
///
/// It is a [`debug_assert!()`] unless `unsafe` is enabled outside of tests,
/// in which case it becomes an optimizer hint (`assert_unchecked` on Rust
/// 1.81 or later, `unreachable_unchecked` before that).
/// Call it inside [`optionally_unsafe!{}`].
#[doc(alias = "invariant")]
macro_rules! invariant_impl {
    ($expr: expr) => {
        cfg_if::cfg_if! {
            if #[cfg(all(feature = "unsafe", charsim_assume = "stable", not(test)))] {
                #[allow(clippy::incompatible_msrv)] {
                    core::hint::assert_unchecked($expr);
                }
            }
            else if #[cfg(all(feature = "unsafe", not(test)))] {
                if !($expr) {
                    core::hint::unreachable_unchecked();
                }
            }
            else {
                debug_assert!($expr);
            }
        }
    };
}
pub(crate) use invariant_impl as invariant;

/// Implements the `Error` trait for [`CompareError`](crate::CompareError)
/// from `std`, or from `core` on `no_std` builds where it is stable.
macro_rules! impl_error_impl {
    ($type:ty { $($tokens:tt)* }) => {
        #[cfg(feature = "std")]
        impl std::error::Error for $type {
            $($tokens)*
        }
        #[cfg(all(not(feature = "std"), charsim_error_in_core = "stable"))]
        impl core::error::Error for $type {
            $($tokens)*
        }
    }
}
pub(crate) use impl_error_impl as impl_error;

mod tests;
