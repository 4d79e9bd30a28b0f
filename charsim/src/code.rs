// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The charsim authors.

//! Character code domains and validated character code sequences.

use alloc::vec::Vec;

use crate::error::CompareError;


#[cfg(test)]
mod tests;


/// The size of a character code space.
///
/// Every character handled by this crate is an integer code in
/// `0..size`.  A [`Histogram`](crate::Histogram) has exactly one bucket per
/// code of its domain, so the domain size determines both the set of
/// accepted characters and the memory (and time) cost of the coarse
/// comparison.
///
/// | Preset                        | Size       | Suitable for             |
/// | ----------------------------- | ---------- | ------------------------ |
/// | [`BYTE`](Self::BYTE)          | `256`      | byte strings             |
/// | [`UTF16`](Self::UTF16)        | `65536`    | UTF-16 code units        |
/// | [`UNICODE`](Self::UNICODE)    | `0x110000` | Unicode scalar values    |
///
/// The default is [`UTF16`](Self::UTF16).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeDomain(u32);

impl CodeDomain {
    /// The largest supported domain size (the whole Unicode code space).
    pub const MAX_SIZE: u32 = 0x11_0000;

    /// The domain of bytes.
    pub const BYTE: CodeDomain = CodeDomain(1 << u8::BITS);

    /// The domain of UTF-16 code units.
    pub const UTF16: CodeDomain = CodeDomain(1 << u16::BITS);

    /// The domain of Unicode scalar values.
    pub const UNICODE: CodeDomain = CodeDomain(Self::MAX_SIZE);

    /// Creates a code domain with `size` codes (`0..size`).
    ///
    /// # Errors
    ///
    /// [`CompareError::InvalidDomainSize`] if `size` is zero or exceeds
    /// [`MAX_SIZE`](Self::MAX_SIZE).
    pub fn new(size: u32) -> Result<Self, CompareError> {
        if size == 0 || size > Self::MAX_SIZE {
            return Err(CompareError::InvalidDomainSize(size));
        }
        Ok(CodeDomain(size))
    }

    /// The number of codes in this domain.
    #[inline(always)]
    pub const fn size(&self) -> u32 {
        self.0
    }

    /// Checks whether the raw code is inside this domain.
    #[inline(always)]
    pub const fn contains(&self, code: u32) -> bool {
        code < self.0
    }

    /// Validates a raw code against this domain.
    ///
    /// # Errors
    ///
    /// [`CompareError::UnsupportedCharacterCode`] if `code` is not
    /// in `0..size`.
    #[inline]
    pub fn code(&self, code: u32) -> Result<CharCode, CompareError> {
        if !self.contains(code) {
            return Err(CompareError::UnsupportedCharacterCode {
                code,
                domain_size: self.0,
            });
        }
        Ok(CharCode(code))
    }
}

impl Default for CodeDomain {
    fn default() -> Self {
        Self::UTF16
    }
}


/// A character code validated against a [`CodeDomain`].
///
/// The only ways to obtain one are [`CodeDomain::code()`] and the
/// constructors of [`CodeSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CharCode(u32);

impl CharCode {
    /// Creates a code that is known to be inside its domain.
    #[inline(always)]
    pub(crate) const fn new_internal(code: u32) -> Self {
        CharCode(code)
    }

    /// The raw code.
    #[inline(always)]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// The code as a histogram bucket index.
    #[inline(always)]
    pub(crate) const fn index(&self) -> usize {
        self.0 as usize
    }
}


/// An owned sequence of character codes tagged with its [`CodeDomain`].
///
/// All codes are guaranteed to be inside the domain.
/// Comparisons between sequences are available as methods
/// (see [`compare()`](Self::compare())).
///
/// # Examples
///
/// ```
/// use charsim::{CodeDomain, CodeSequence};
///
/// let utf16 = CodeSequence::from_utf16("héllo");
/// assert_eq!(utf16.domain(), CodeDomain::UTF16);
/// assert_eq!(utf16.len(), 5);
///
/// // Narrow domains reject codes outside of them.
/// let ascii = CodeDomain::new(128).unwrap();
/// assert!(CodeSequence::from_chars_in(ascii, "hello").is_ok());
/// assert!(CodeSequence::from_chars_in(ascii, "héllo").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodeSequence {
    /// The domain every code belongs to.
    domain: CodeDomain,
    /// The codes.
    codes: Vec<CharCode>,
}

impl CodeSequence {
    /// Creates a sequence from raw codes, validating each against `domain`.
    ///
    /// # Errors
    ///
    /// [`CompareError::UnsupportedCharacterCode`] on the first code
    /// outside of `domain`.
    pub fn new<I>(domain: CodeDomain, codes: I) -> Result<Self, CompareError>
    where
        I: IntoIterator<Item = u32>,
    {
        let codes = codes
            .into_iter()
            .map(|code| domain.code(code))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CodeSequence { domain, codes })
    }

    /// Creates a sequence from codes already known to be inside `domain`.
    #[inline]
    fn from_trusted<I>(domain: CodeDomain, codes: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        CodeSequence {
            domain,
            codes: codes.into_iter().map(CharCode::new_internal).collect(),
        }
    }

    /// Creates a sequence of UTF-16 code units in [`CodeDomain::UTF16`].
    pub fn from_utf16(text: &str) -> Self {
        Self::from_trusted(CodeDomain::UTF16, text.encode_utf16().map(u32::from))
    }

    /// Creates a sequence of UTF-16 code units in the given domain.
    ///
    /// # Errors
    ///
    /// [`CompareError::UnsupportedCharacterCode`] on the first code unit
    /// outside of `domain`.
    pub fn from_utf16_in(domain: CodeDomain, text: &str) -> Result<Self, CompareError> {
        Self::new(domain, text.encode_utf16().map(u32::from))
    }

    /// Creates a sequence of bytes in [`CodeDomain::BYTE`].
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_trusted(CodeDomain::BYTE, bytes.iter().copied().map(u32::from))
    }

    /// Creates a sequence of Unicode scalar values in [`CodeDomain::UNICODE`].
    pub fn from_chars(text: &str) -> Self {
        Self::from_trusted(CodeDomain::UNICODE, text.chars().map(u32::from))
    }

    /// Creates a sequence of Unicode scalar values in the given domain.
    ///
    /// # Errors
    ///
    /// [`CompareError::UnsupportedCharacterCode`] on the first character
    /// outside of `domain`.
    pub fn from_chars_in(domain: CodeDomain, text: &str) -> Result<Self, CompareError> {
        Self::new(domain, text.chars().map(u32::from))
    }

    /// The domain of this sequence.
    #[inline(always)]
    pub fn domain(&self) -> CodeDomain {
        self.domain
    }

    /// The codes of this sequence.
    #[inline(always)]
    pub fn codes(&self) -> &[CharCode] {
        &self.codes
    }

    /// The number of codes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the sequence is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
