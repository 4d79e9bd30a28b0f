// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The charsim authors.
// grcov-excl-br-start

#![cfg(test)]

use crate::code::{CharCode, CodeDomain, CodeSequence};
use crate::error::CompareError;
use crate::test_utils::test_auto_clone;


#[test]
fn domain_presets() {
    assert_eq!(CodeDomain::BYTE.size(), 256);
    assert_eq!(CodeDomain::UTF16.size(), 65536);
    assert_eq!(CodeDomain::UNICODE.size(), 0x11_0000);
    assert_eq!(CodeDomain::default(), CodeDomain::UTF16);
    test_auto_clone::<CodeDomain>(&CodeDomain::BYTE);
}

#[test]
fn domain_new_validates_size() {
    assert_eq!(CodeDomain::new(0), Err(CompareError::InvalidDomainSize(0)));
    assert_eq!(
        CodeDomain::new(CodeDomain::MAX_SIZE + 1),
        Err(CompareError::InvalidDomainSize(CodeDomain::MAX_SIZE + 1))
    );
    assert_eq!(
        CodeDomain::new(u32::MAX),
        Err(CompareError::InvalidDomainSize(u32::MAX))
    );
    for size in [1, 2, 128, 256, 65536, CodeDomain::MAX_SIZE] {
        let domain = CodeDomain::new(size).unwrap();
        assert_eq!(domain.size(), size, "failed on size={}", size);
    }
    assert_eq!(CodeDomain::new(256), Ok(CodeDomain::BYTE));
    assert_eq!(CodeDomain::new(65536), Ok(CodeDomain::UTF16));
}

#[test]
fn domain_code_near_the_border() {
    for size in [1u32, 2, 255, 256, 65536] {
        let domain = CodeDomain::new(size).unwrap();
        assert!(domain.contains(size - 1), "failed on size={}", size);
        assert!(!domain.contains(size), "failed on size={}", size);
        assert_eq!(domain.code(size - 1).map(|c| c.value()), Ok(size - 1), "failed on size={}", size);
        assert_eq!(
            domain.code(size),
            Err(CompareError::UnsupportedCharacterCode { code: size, domain_size: size }),
            "failed on size={}", size
        );
    }
}

#[test]
fn char_code_basics() {
    let code = CodeDomain::BYTE.code(b'a'.into()).unwrap();
    assert_eq!(code.value(), 0x61);
    assert_eq!(code.index(), 0x61);
    assert_eq!(code, CharCode::new_internal(0x61));
    assert!(CharCode::new_internal(1) < CharCode::new_internal(2));
    test_auto_clone::<CharCode>(&code);
}

#[test]
fn sequence_constructors() {
    let text = "a\u{e9}\u{1f600}";
    // UTF-16: the emoji is a surrogate pair.
    let seq = CodeSequence::from_utf16(text);
    assert_eq!(seq.domain(), CodeDomain::UTF16);
    assert_eq!(
        seq.codes().iter().map(CharCode::value).collect::<Vec<_>>(),
        vec![0x61, 0xe9, 0xd83d, 0xde00]
    );
    // Unicode scalar values.
    let seq = CodeSequence::from_chars(text);
    assert_eq!(seq.domain(), CodeDomain::UNICODE);
    assert_eq!(
        seq.codes().iter().map(CharCode::value).collect::<Vec<_>>(),
        vec![0x61, 0xe9, 0x1f600]
    );
    // Bytes (UTF-8 encoding of the same text).
    let seq = CodeSequence::from_bytes(text.as_bytes());
    assert_eq!(seq.domain(), CodeDomain::BYTE);
    assert_eq!(seq.len(), text.len());
    assert!(seq.codes().iter().zip(text.bytes()).all(|(c, b)| c.value() == u32::from(b)));
    // Raw codes.
    let seq = CodeSequence::new(CodeDomain::BYTE, [0u32, 1, 255]).unwrap();
    assert_eq!(seq.codes().iter().map(CharCode::value).collect::<Vec<_>>(), vec![0, 1, 255]);
    test_auto_clone::<CodeSequence>(&seq);
}

#[test]
fn sequence_empty() {
    let seq = CodeSequence::from_utf16("");
    assert!(seq.is_empty());
    assert_eq!(seq.len(), 0);
    let seq = CodeSequence::new(CodeDomain::BYTE, core::iter::empty()).unwrap();
    assert!(seq.is_empty());
}

#[test]
fn sequence_rejects_codes_outside_of_domain() {
    let ascii = CodeDomain::new(128).unwrap();
    assert_eq!(
        CodeSequence::new(ascii, [0x41u32, 0x80, 0x100]),
        Err(CompareError::UnsupportedCharacterCode { code: 0x80, domain_size: 128 })
    );
    assert_eq!(
        CodeSequence::from_chars_in(ascii, "caf\u{e9}"),
        Err(CompareError::UnsupportedCharacterCode { code: 0xe9, domain_size: 128 })
    );
    assert_eq!(
        CodeSequence::from_utf16_in(CodeDomain::BYTE, "\u{1f600}"),
        Err(CompareError::UnsupportedCharacterCode { code: 0xd83d, domain_size: 256 })
    );
    assert_eq!(
        CodeSequence::from_chars_in(CodeDomain::UTF16, "\u{1f600}"),
        Err(CompareError::UnsupportedCharacterCode { code: 0x1f600, domain_size: 65536 })
    );
    // Accepted in the same domain as the infallible constructors.
    assert_eq!(
        CodeSequence::from_utf16_in(CodeDomain::UTF16, "\u{1f600}"),
        Ok(CodeSequence::from_utf16("\u{1f600}"))
    );
    assert_eq!(
        CodeSequence::from_chars_in(CodeDomain::UNICODE, "\u{1f600}"),
        Ok(CodeSequence::from_chars("\u{1f600}"))
    );
}
