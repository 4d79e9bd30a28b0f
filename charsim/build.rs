// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The charsim authors.

extern crate version_check as rustc;

fn main() {
    // Avoid unnecessary rebuilding.
    println!("cargo:rerun-if-changed=build.rs");

    // Configuration names consumed by the crate.
    println!("cargo:rustc-check-cfg=cfg(charsim_error_in_core, values(\"stable\"))");
    println!("cargo:rustc-check-cfg=cfg(charsim_assume, values(\"stable\"))");
    println!("cargo:rustc-check-cfg=cfg(charsim_tests_without_debug_assertions)");

    // Trait: core::error::Error
    //   unstable: 1.65-1.80 ("error_in_core" unstable feature; not to support)
    //     stable: 1.81-
    if rustc::is_min_version("1.81.0").unwrap_or(false) {
        println!("cargo:rustc-cfg=charsim_error_in_core=\"stable\"");
    }

    // Function: core::hint::assert_unchecked
    //   stable: 1.81-
    // On older toolchains, invariant!() falls back to unreachable_unchecked().
    if rustc::is_min_version("1.81.0").unwrap_or(false) {
        println!("cargo:rustc-cfg=charsim_assume=\"stable\"");
    }
}
