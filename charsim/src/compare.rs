// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The charsim authors.

//! The greedy alignment comparator.
//!
//! # Algorithm
//!
//! 1.  Both operands are counted into [`Histogram`]s and the coarse
//!     difference `diff` (see [`Histogram::difference()`]) is computed.
//! 2.  If `diff == 0`, both operands are permutations of each other and
//!     the score is `100`.
//! 3.  If the coarse score (the [similarity score](similarity_score())
//!     of `diff`) is at or below the caller-supplied cap, the comparison
//!     stops here and the score is `0`.
//! 4.  Otherwise, both operands are walked from the left with independent
//!     cursors for `max(len_a, len_b)` steps (past the end, an operand reads
//!     as a sentinel).  On a mismatch, one of three [`Move`]s is taken:
//!     skip the character on A, skip the one on B or skip both.  The move
//!     with the smallest coarse difference after provisionally removing
//!     the skipped character(s) from the histograms wins.
//! 5.  The number of mismatched steps is turned into the final score.
//!
//! Note that the number of steps is fixed.  Once a cursor has been
//! skipped ahead, the walk may end before the other operand's tail is
//! visited, and that tail is not charged.
//!
//! # Symmetry
//!
//! The greedy walk is *not* symmetric.  Tie-breaking prefers skipping on A,
//! so swapping the operands may take a different path.  For instance,
//! comparing `"aab"` with `"bca"` scores `33` but comparing `"bca"` with
//! `"aab"` scores `0`.  The coarse difference is symmetric.

use core::ops::Range;

use crate::code::{CharCode, CodeDomain, CodeSequence};
use crate::error::CompareError;
use crate::histogram::{
    apply_provisional_removal, build_histogram, estimate_removal_effect, Histogram,
};




/// The score of two identical (or permuted) operands.
pub const MAX_SCORE: u32 = 100;


/// A decision of the greedy alignment pass on a mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Skip the character on the side A only.
    SkipA,
    /// Skip the character on the side B only.
    SkipB,
    /// Skip the characters on both sides.
    SkipBoth,
}

impl Move {
    /// Whether this move advances the cursor on the side A.
    #[inline(always)]
    pub fn advances_a(self) -> bool {
        matches!(self, Move::SkipA | Move::SkipBoth)
    }

    /// Whether this move advances the cursor on the side B.
    #[inline(always)]
    pub fn advances_b(self) -> bool {
        matches!(self, Move::SkipB | Move::SkipBoth)
    }
}

/// Selects the move with the smallest resulting coarse difference.
///
/// Ties are broken in the order [`SkipA`](Move::SkipA),
/// [`SkipB`](Move::SkipB) then [`SkipBoth`](Move::SkipBoth).
///
/// # Examples
///
/// ```
/// use charsim::{select_move, Move};
///
/// assert_eq!(select_move(3, 1, 2), Move::SkipB);
/// assert_eq!(select_move(2, 2, 2), Move::SkipA);
/// assert_eq!(select_move(3, 2, 2), Move::SkipB);
/// assert_eq!(select_move(3, 3, 2), Move::SkipBoth);
/// ```
#[inline]
pub fn select_move(cost_a: usize, cost_b: usize, cost_both: usize) -> Move {
    if cost_a <= cost_b && cost_a <= cost_both {
        Move::SkipA
    } else if cost_b <= cost_both {
        Move::SkipB
    } else {
        Move::SkipBoth
    }
}


/// Converts a mismatch count into a similarity score.
///
/// The score is `max(0, trunc((1 - count / avg_len) * 100))` where
/// `avg_len = (len_a + len_b) / 2`.  It is computed with exact integer
/// arithmetic as `100 - ceil(200 * count / (len_a + len_b))`, saturating
/// at zero.
///
/// # Errors
///
/// [`CompareError::DegenerateInput`] if both lengths are zero.
///
/// # Examples
///
/// ```
/// use charsim::similarity_score;
///
/// assert_eq!(similarity_score(0, 4, 4), Ok(100));
/// assert_eq!(similarity_score(1, 4, 4), Ok(75));
/// assert_eq!(similarity_score(2, 3, 3), Ok(33));
/// assert_eq!(similarity_score(9, 4, 4), Ok(0));
/// assert!(similarity_score(0, 0, 0).is_err());
/// ```
pub fn similarity_score(count: usize, len_a: usize, len_b: usize) -> Result<u32, CompareError> {
    if len_a == 0 && len_b == 0 {
        return Err(CompareError::DegenerateInput);
    }
    Ok(similarity_score_internal(count, len_a, len_b))
}

/// The internal implementation of [`similarity_score()`].
#[inline]
fn similarity_score_internal(count: usize, len_a: usize, len_b: usize) -> u32 {
    let total = len_a as u128 + len_b as u128;
    debug_assert!(total != 0);
    let penalty = (200 * count as u128 + total - 1) / total;
    MAX_SCORE.saturating_sub(u32::try_from(penalty).unwrap_or(u32::MAX))
}


/// The result of a detailed comparison.
///
/// See [`CodeSequence::compare_detailed()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    /// The final score.
    score: u32,
    /// The coarse (order-independent) difference.
    coarse_difference: usize,
    /// The score of the coarse difference.
    coarse_score: u32,
    /// The mismatch count of the greedy pass (if it ran).
    mismatches: Option<usize>,
}

impl Comparison {
    /// The final similarity score (`0..=100`).
    #[inline(always)]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The coarse difference between the operands.
    #[inline(always)]
    pub fn coarse_difference(&self) -> usize {
        self.coarse_difference
    }

    /// The similarity score of the coarse difference.
    #[inline(always)]
    pub fn coarse_score(&self) -> u32 {
        self.coarse_score
    }

    /// The number of mismatches charged by the greedy alignment pass.
    ///
    /// This is [`None`] if the pass did not run (either the operands are
    /// permutations of each other or the comparison was short-circuited).
    #[inline(always)]
    pub fn mismatches(&self) -> Option<usize> {
        self.mismatches
    }

    /// Whether the cap stopped the comparison before the greedy pass.
    #[inline]
    pub fn short_circuited(&self) -> bool {
        self.mismatches.is_none() && self.coarse_difference != 0
    }
}


/// A read-only view of an operand padded with the sentinel ([`None`])
/// up to the length shared by both operands.
#[derive(Clone, Copy)]
struct PaddedBuffer<'a> {
    /// The actual codes.
    codes: &'a [CharCode],
}

impl PaddedBuffer<'_> {
    /// The code at `index` or the sentinel past the end of the operand.
    #[inline(always)]
    fn at(&self, index: usize) -> Option<CharCode> {
        self.codes.get(index).copied()
    }
}


/// Walks both operands and counts mismatches, choosing the cheapest
/// [`Move`] on each one.
///
/// `hist_a` and `hist_b` must be the histograms of `a` and `b` and
/// `diff` their coarse difference.  Both histograms are consumed.
fn greedy_mismatches(
    a: &[CharCode],
    b: &[CharCode],
    hist_a: &mut Histogram,
    hist_b: &mut Histogram,
    diff: usize,
) -> usize {
    let (buf_a, buf_b) = (PaddedBuffer { codes: a }, PaddedBuffer { codes: b });
    let steps = usize::max(a.len(), b.len());
    let mut diff = diff;
    let mut mismatches = 0;
    let (mut ia, mut ib) = (0usize, 0usize);
    for step in 0..steps {
        // Each step advances a cursor by at most one.
        debug_assert!(ia <= step && ib <= step);
        let code_a = buf_a.at(ia);
        let code_b = buf_b.at(ib);
        if code_a == code_b {
            ia += 1;
            ib += 1;
            continue;
        }
        mismatches += 1;
        let cost_a = estimate_removal_effect(diff, hist_a, code_a, hist_b, None);
        let cost_b = estimate_removal_effect(diff, hist_a, None, hist_b, code_b);
        let cost_both = estimate_removal_effect(diff, hist_a, code_a, hist_b, code_b);
        let decision = select_move(cost_a, cost_b, cost_both);
        let (removed_a, removed_b, next_diff) = match decision {
            Move::SkipA => (code_a, None, cost_a),
            Move::SkipB => (None, code_b, cost_b),
            Move::SkipBoth => (code_a, code_b, cost_both),
        };
        log::trace!(
            "step {}: mismatch at ({}, {}), costs=({}, {}, {}), move={:?}",
            step, ia, ib, cost_a, cost_b, cost_both, decision
        );
        apply_provisional_removal(hist_a, removed_a, hist_b, removed_b);
        diff = next_diff;
        if decision.advances_a() {
            ia += 1;
        }
        if decision.advances_b() {
            ib += 1;
        }
    }
    mismatches
}


/// Compares two validated operands of the same domain.
///
/// If `cap` is [`None`], the greedy pass always runs
/// (unless the coarse difference is zero).
pub(crate) fn compare_internal(
    a: &[CharCode],
    b: &[CharCode],
    domain: CodeDomain,
    cap: Option<u32>,
) -> Comparison {
    if a.is_empty() && b.is_empty() {
        return Comparison {
            score: MAX_SCORE,
            coarse_difference: 0,
            coarse_score: MAX_SCORE,
            mismatches: None,
        };
    }
    let mut hist_a = Histogram::new(domain);
    let mut hist_b = Histogram::new(domain);
    hist_a.add_all_internal(a);
    hist_b.add_all_internal(b);
    let diff = hist_a.difference_internal(&hist_b);
    let coarse_score = similarity_score_internal(diff, a.len(), b.len());
    log::debug!(
        "coarse comparison: len_a={}, len_b={}, difference={}, score={}",
        a.len(), b.len(), diff, coarse_score
    );
    let mut comparison = Comparison {
        score: coarse_score,
        coarse_difference: diff,
        coarse_score,
        mismatches: None,
    };
    if diff == 0 {
        return comparison;
    }
    if let Some(cap) = cap {
        if coarse_score <= cap {
            log::debug!("coarse score {} is at or below cap {}; skipping alignment", coarse_score, cap);
            comparison.score = 0;
            return comparison;
        }
    }
    let mismatches = greedy_mismatches(a, b, &mut hist_a, &mut hist_b, diff);
    comparison.score = similarity_score_internal(mismatches, a.len(), b.len());
    comparison.mismatches = Some(mismatches);
    log::debug!("alignment: mismatches={}, score={}", mismatches, comparison.score);
    comparison
}

/// Computes the coarse difference of two validated operands.
pub(crate) fn character_set_difference_internal(
    a: &[CharCode],
    b: &[CharCode],
    domain: CodeDomain,
) -> usize {
    let mut hist_a = Histogram::new(domain);
    let mut hist_b = Histogram::new(domain);
    hist_a.add_all_internal(a);
    hist_b.add_all_internal(b);
    hist_a.difference_internal(&hist_b)
}


impl CodeSequence {
    /// Checks that both operands share the same domain.
    #[inline]
    fn check_domain(&self, other: &CodeSequence) -> Result<CodeDomain, CompareError> {
        if self.domain() != other.domain() {
            return Err(CompareError::DomainMismatch {
                left: self.domain(),
                right: other.domain(),
            });
        }
        Ok(self.domain())
    }

    /// Compares two sequences and returns the similarity score
    /// (`0..=100`).
    ///
    /// If the coarse (order-independent) score is at or below `cap`,
    /// the greedy alignment pass is skipped and `0` is returned.
    /// If the sequences are permutations of each other (including two
    /// empty sequences), `cap` is not consulted and the score is `100`.
    ///
    /// # Errors
    ///
    /// [`CompareError::DomainMismatch`] if the domains differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use charsim::CodeSequence;
    ///
    /// let a = CodeSequence::from_utf16("abcd");
    /// let b = CodeSequence::from_utf16("abce");
    /// assert_eq!(a.compare(&b, 0), Ok(75));
    /// // The coarse score is 50: at or below the cap.
    /// assert_eq!(a.compare(&b, 50), Ok(0));
    /// ```
    pub fn compare(&self, other: &CodeSequence, cap: u32) -> Result<u32, CompareError> {
        Ok(self.compare_detailed(other, Some(cap))?.score())
    }

    /// Compares two sequences without the cap (the greedy alignment pass
    /// always runs unless the sequences are permutations of each other).
    ///
    /// # Errors
    ///
    /// [`CompareError::DomainMismatch`] if the domains differ.
    pub fn compare_percentage_only(&self, other: &CodeSequence) -> Result<u32, CompareError> {
        Ok(self.compare_detailed(other, None)?.score())
    }

    /// Compares two sequences and returns the details.
    ///
    /// # Errors
    ///
    /// [`CompareError::DomainMismatch`] if the domains differ.
    pub fn compare_detailed(&self, other: &CodeSequence, cap: Option<u32>) -> Result<Comparison, CompareError> {
        let domain = self.check_domain(other)?;
        Ok(compare_internal(self.codes(), other.codes(), domain, cap))
    }

    /// Computes the coarse (order-independent) difference.
    ///
    /// # Errors
    ///
    /// [`CompareError::DomainMismatch`] if the domains differ.
    pub fn character_set_difference(&self, other: &CodeSequence) -> Result<usize, CompareError> {
        let domain = self.check_domain(other)?;
        Ok(character_set_difference_internal(self.codes(), other.codes(), domain))
    }

    /// Computes the coarse difference between `self[range]` and
    /// `other[other_range]`.
    ///
    /// # Errors
    ///
    /// *   [`CompareError::DomainMismatch`] if the domains differ.
    /// *   [`CompareError::InvalidRange`] if either range is not valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use charsim::CodeSequence;
    ///
    /// let a = CodeSequence::from_utf16("xxhelloxx");
    /// let b = CodeSequence::from_utf16("olleh");
    /// assert_eq!(a.character_set_difference_in(2..7, &b, 0..5), Ok(0));
    /// assert!(a.character_set_difference_in(2..10, &b, 0..5).is_err());
    /// ```
    pub fn character_set_difference_in(
        &self,
        range: Range<usize>,
        other: &CodeSequence,
        other_range: Range<usize>,
    ) -> Result<usize, CompareError> {
        let domain = self.check_domain(other)?;
        let hist_a = build_histogram(self.codes(), range, None, domain)?;
        let hist_b = build_histogram(other.codes(), other_range, None, domain)?;
        Ok(hist_a.difference_internal(&hist_b))
    }
}
