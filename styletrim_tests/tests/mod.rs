// Copyright 2026 the Styletrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `styletrim`.
//!
//! - The `util` module contains shared helpers needed by different test
//!   methods.
//! - We do not use the default Rust test harness, but instead use this
//!   `mod.rs` file as the entry point to run all other tests, which makes it
//!   easy to share helpers between test files.
//! - If you want to add new tests, try to follow these guidelines:
//!   - If your test fits a clear topic (e.g. at-rules, parentheses, streams),
//!     put it into the corresponding module, or create a new one.
//!   - If it cannot be classified cleanly, put it into `basic.rs`.
//!   - For test naming, put the topic of the test at the start of the name:
//!     `at_rule_blank_line_terminates` is better than
//!     `blank_line_terminates_at_rule`.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod parens;
mod util;
