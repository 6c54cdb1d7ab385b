// Copyright 2026 the Styletrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the styletrim integration tests.

use styletrim::minify_str;

/// Minifies `input` and asserts it produced `expected`.
///
/// Also checks the global guarantee that minification never grows the text.
#[track_caller]
pub(crate) fn assert_minifies(input: &str, expected: &str) {
    let out = minify_str(input);
    assert!(
        out.len() <= input.len(),
        "output ({} bytes) longer than input ({} bytes)",
        out.len(),
        input.len()
    );
    assert_eq!(out, expected);
}

/// Minifies `input` and asserts the output is a fixed point: minifying it
/// again changes nothing.
#[track_caller]
pub(crate) fn assert_fixed_point(input: &str) -> String {
    let once = minify_str(input);
    let twice = minify_str(&once);
    assert_eq!(once, twice, "second pass changed the output");
    once
}
