// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The charsim authors.

//! The error type of the histogram engine and the comparator.

use crate::code::CodeDomain;
use crate::macros::impl_error;


#[cfg(test)]
mod tests;


/// The error type for histogram and comparison operations.
///
/// All variants are precondition violations detected before any
/// computation starts.  Once the operands are validated, a comparison
/// always terminates with a valid score.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareError {
    /// The half-open range `start..end` is not inside a sequence of
    /// length `len` (or `start > end`).
    InvalidRange {
        /// The (inclusive) start of the range.
        start: usize,
        /// The (exclusive) end of the range.
        end: usize,
        /// The length of the sequence the range is applied to.
        len: usize,
    },
    /// A character code does not fit in the code domain.
    UnsupportedCharacterCode {
        /// The offending character code.
        code: u32,
        /// The size of the code domain it was checked against.
        domain_size: u32,
    },
    /// Both operands are empty.
    ///
    /// Comparison functions define the score of two empty sequences
    /// as `100` and never return this error.  Only the raw
    /// [`similarity_score()`](crate::similarity_score()) does.
    DegenerateInput,
    /// The requested code domain size is zero or larger than
    /// [`CodeDomain::MAX_SIZE`].
    InvalidDomainSize(u32),
    /// The operands (or histograms) belong to different code domains.
    DomainMismatch {
        /// The domain of the left hand side.
        left: CodeDomain,
        /// The domain of the right hand side.
        right: CodeDomain,
    },
}

impl core::fmt::Display for CompareError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self { // grcov-excl-br-line:MATCH_ENUM
            CompareError::InvalidRange { start, end, len } => write!(f,
                "range {}..{} is not valid for a sequence of length {}",
                start, end, len
            ),
            CompareError::UnsupportedCharacterCode { code, domain_size } => write!(f,
                "character code {:#x} is outside of the code domain (size {})",
                code, domain_size
            ),
            CompareError::DegenerateInput => f.write_str(
                "both sequences are empty"
            ),
            CompareError::InvalidDomainSize(size) => write!(f,
                "code domain size {} is not in 1..={}",
                size, CodeDomain::MAX_SIZE
            ),
            CompareError::DomainMismatch { left, right } => write!(f,
                "code domains do not match (sizes {} and {})",
                left.size(), right.size()
            ),
        }
    }
}

impl_error! { CompareError {} }
