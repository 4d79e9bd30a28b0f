// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The charsim authors.
// grcov-excl-br-start

#![cfg(test)]

use crate::code::CodeDomain;
use crate::error::CompareError;
use crate::test_utils::test_auto_clone;


const ERROR_CASES: &[(CompareError, &str)] = &[
    (
        CompareError::InvalidRange { start: 3, end: 2, len: 5 },
        "range 3..2 is not valid for a sequence of length 5",
    ),
    (
        CompareError::UnsupportedCharacterCode { code: 0x100, domain_size: 256 },
        "character code 0x100 is outside of the code domain (size 256)",
    ),
    (
        CompareError::DegenerateInput,
        "both sequences are empty",
    ),
    (
        CompareError::InvalidDomainSize(0),
        "code domain size 0 is not in 1..=1114112",
    ),
    (
        CompareError::DomainMismatch { left: CodeDomain::BYTE, right: CodeDomain::UTF16 },
        "code domains do not match (sizes 256 and 65536)",
    ),
];

#[test]
fn error_impls() {
    for &(err, _) in ERROR_CASES {
        test_auto_clone::<CompareError>(&err);
        crate::test_utils::cover_auto_debug(&err);
    }
}

#[test]
fn error_display() {
    for &(err, expected) in ERROR_CASES {
        assert_eq!(format!("{}", err), expected, "failed on err={:?}", err);
    }
}

#[cfg(feature = "std")]
#[test]
fn error_is_std_error() {
    use std::error::Error;
    for &(err, _) in ERROR_CASES {
        let boxed: Box<dyn Error> = Box::new(err);
        assert!(boxed.source().is_none(), "failed on err={:?}", err);
        assert_eq!(*boxed.downcast_ref::<CompareError>().unwrap(), err);
    }
}
