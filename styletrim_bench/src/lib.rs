// Copyright 2026 the Styletrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Styletrim Bench
//!
//! This crate provides benchmarks for the styletrim minifier.

use std::sync::OnceLock;

pub mod benches;

/// A small hand-written stylesheet, representative of a component style.
pub const BUTTON_CSS: &str = "\
/* primary button */\n\
.button  {\n\
\x20\x20display: inline-block;\n\
\x20\x20padding: calc(0.5rem + 2px) 1rem;\n\
\x20\x20color: #fff;\n\
\x20\x20background: rgba(30, 30, 30, .9);\n\
\x20\x20border-radius: 4px;\n\
}\n\
\n\
.button:hover  {\n\
\x20\x20background: rgba(0, 0, 0, .9);\n\
}\n";

static LARGE_CSS: OnceLock<String> = OnceLock::new();

/// A lazily built synthetic stylesheet of one thousand component rules.
pub fn large_stylesheet() -> &'static str {
    LARGE_CSS.get_or_init(|| synthetic_stylesheet(1000))
}

/// Builds a stylesheet of `rules` commented, indented component rules.
pub fn synthetic_stylesheet(rules: usize) -> String {
    let mut css = String::new();
    for i in 0..rules {
        css.push_str(&format!(
            "/* component {i} */\n\
             .card-{i}  {{\n\
             \x20\x20margin:  0 auto;\n\
             \x20\x20padding: calc({}px + 1rem);\n\
             \x20\x20background: rgba(0, 0, 0, .{});\n\
             }}\n\n",
            i % 16,
            i % 10,
        ));
    }
    css
}
