// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The charsim authors.

//! The histogram engine.
//!
//! A [`Histogram`] counts the occurrences of each character code of a
//! [`CodeDomain`] over a range of a sequence.  The coarse (order-independent)
//! difference between two sequences is the sum of the absolute differences
//! of their histograms' buckets.
//!
//! The greedy alignment pass of the comparator provisionally removes
//! characters from either histogram.  Instead of recomputing the whole
//! difference after each removal (which costs one step per code of the
//! domain), [`estimate_removal_effect()`] updates it in constant time:
//! removing one occurrence of `c` from one side changes only the bucket `c`,
//! whose contribution moves by exactly one.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

use crate::code::{CharCode, CodeDomain};
use crate::error::CompareError;
use crate::macros::{invariant, optionally_unsafe};




/// Occurrence counts of every character code of a [`CodeDomain`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    /// The code domain (one bucket per code).
    domain: CodeDomain,
    /// The buckets (its length is always `domain.size()`).
    counts: Vec<usize>,
}

impl Histogram {
    /// Creates an empty histogram over the given domain.
    pub fn new(domain: CodeDomain) -> Self {
        Histogram {
            domain,
            counts: vec![0; domain.size() as usize],
        }
    }

    /// The code domain of this histogram.
    #[inline(always)]
    pub fn domain(&self) -> CodeDomain {
        self.domain
    }

    /// The number of occurrences of `code`.
    ///
    /// Codes outside of this histogram's domain have no occurrences.
    #[inline]
    pub fn count(&self, code: CharCode) -> usize {
        self.counts.get(code.index()).copied().unwrap_or(0)
    }

    /// The total number of occurrences.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Resets all counts to zero.
    pub fn clear(&mut self) {
        self.counts.iter_mut().for_each(|count| *count = 0);
    }

    /// Counts every code of `codes[range]`.
    ///
    /// Counts accumulate: adding the same range twice doubles it.
    /// On error, the histogram is left unchanged.
    ///
    /// # Errors
    ///
    /// *   [`CompareError::InvalidRange`] if `range.start > range.end` or
    ///     `range.end > codes.len()`.
    /// *   [`CompareError::UnsupportedCharacterCode`] if a code in the range
    ///     is outside of this histogram's domain.
    pub fn add_range(&mut self, codes: &[CharCode], range: Range<usize>) -> Result<(), CompareError> {
        if range.start > range.end || range.end > codes.len() {
            return Err(CompareError::InvalidRange {
                start: range.start,
                end: range.end,
                len: codes.len(),
            });
        }
        let codes = &codes[range];
        if let Some(code) = codes.iter().find(|code| !self.domain.contains(code.value())) {
            return Err(CompareError::UnsupportedCharacterCode {
                code: code.value(),
                domain_size: self.domain.size(),
            });
        }
        self.add_all_internal(codes);
        Ok(())
    }

    /// Counts every code of `codes`, which must be inside this domain.
    #[inline]
    pub(crate) fn add_all_internal(&mut self, codes: &[CharCode]) {
        for code in codes {
            optionally_unsafe! {
                invariant!(code.index() < self.counts.len());
            }
            self.counts[code.index()] += 1; // grcov-excl-br-line:ARRAY
        }
    }

    /// Computes the coarse difference
    /// `sum(|self[code] - other[code]|)` over all codes.
    ///
    /// This is the number of character occurrences that cannot be paired
    /// with an occurrence of the same character on the other side,
    /// regardless of position.
    ///
    /// # Errors
    ///
    /// [`CompareError::DomainMismatch`] if two histograms have different
    /// domains.
    pub fn difference(&self, other: &Histogram) -> Result<usize, CompareError> {
        if self.domain != other.domain {
            return Err(CompareError::DomainMismatch {
                left: self.domain,
                right: other.domain,
            });
        }
        Ok(self.difference_internal(other))
    }

    /// The internal implementation of [`difference()`](Self::difference()).
    #[inline]
    pub(crate) fn difference_internal(&self, other: &Histogram) -> usize {
        debug_assert_eq!(self.domain, other.domain);
        self.counts
            .iter()
            .zip(other.counts.iter())
            .map(|(&a, &b)| a.abs_diff(b))
            .sum()
    }

    /// Removes one occurrence of `code` (the sentinel [`None`] removes
    /// nothing).
    ///
    /// The caller must guarantee that `code` is still present.
    /// Counts never go below zero.
    #[inline]
    pub fn remove(&mut self, code: Option<CharCode>) {
        if let Some(code) = code {
            if let Some(count) = self.counts.get_mut(code.index()) {
                debug_assert!(*count > 0);
                *count = count.saturating_sub(1);
            }
        }
    }
}


/// Counts `codes[range]` into a histogram over `domain`.
///
/// If `existing` is given and shares `domain`, it is reused (without
/// clearing).  Otherwise, a fresh histogram is allocated.
///
/// # Errors
///
/// See [`Histogram::add_range()`].
pub fn build_histogram(
    codes: &[CharCode],
    range: Range<usize>,
    existing: Option<Histogram>,
    domain: CodeDomain,
) -> Result<Histogram, CompareError> {
    let mut histogram = match existing {
        Some(histogram) if histogram.domain == domain => histogram,
        _ => Histogram::new(domain),
    };
    histogram.add_range(codes, range)?;
    Ok(histogram)
}

/// Removes `code_a` from `hist_a` and `code_b` from `hist_b`.
///
/// [`None`] on either side means "no removal on this side".
#[inline]
pub fn apply_provisional_removal(
    hist_a: &mut Histogram,
    code_a: Option<CharCode>,
    hist_b: &mut Histogram,
    code_b: Option<CharCode>,
) {
    hist_a.remove(code_a);
    hist_b.remove(code_b);
}

/// Estimates the coarse difference after the removal
/// [`apply_provisional_removal()`] would make, without mutating anything.
///
/// `diff` is the current difference between `hist_a` and `hist_b`.
///
/// Removing one `c` from side A moves the contribution of the bucket `c`
/// down by one if `hist_a[c] > hist_b[c]` and up by one otherwise
/// (symmetrically for side B).  Both removals are evaluated against the
/// current histograms, so the result is exact when `code_a != code_b`.
#[inline]
pub fn estimate_removal_effect(
    diff: usize,
    hist_a: &Histogram,
    code_a: Option<CharCode>,
    hist_b: &Histogram,
    code_b: Option<CharCode>,
) -> usize {
    let mut diff = diff;
    if let Some(code) = code_a {
        diff = shift_difference(diff, hist_a.count(code) > hist_b.count(code));
    }
    if let Some(code) = code_b {
        diff = shift_difference(diff, hist_b.count(code) > hist_a.count(code));
    }
    diff
}

/// Moves the difference by one (down if `shrinks`).
#[inline(always)]
fn shift_difference(diff: usize, shrinks: bool) -> usize {
    if shrinks {
        diff.saturating_sub(1)
    } else {
        diff + 1
    }
}
