// Copyright 2026 the Styletrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Benchmarks
//!
//! This module provides benchmarks for stylesheet minification throughput.

use std::hint::black_box;

use styletrim::minify_str;
use tango_bench::{Benchmark, benchmark_fn};

use crate::{BUTTON_CSS, large_stylesheet};

/// Benchmarks over in-memory stylesheets.
pub fn stylesheets() -> Vec<Benchmark> {
    vec![
        benchmark_fn("minify button stylesheet", |b| {
            b.iter(|| black_box(minify_str(BUTTON_CSS)))
        }),
        benchmark_fn("minify 1000 rule stylesheet", |b| {
            let css = large_stylesheet();
            b.iter(move || black_box(minify_str(css)))
        }),
    ]
}
