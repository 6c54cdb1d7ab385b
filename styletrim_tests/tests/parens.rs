// Copyright 2026 the Styletrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parenthesized declaration values pass through untouched.

use crate::util::assert_minifies;

#[test]
fn parens_rgba_arguments_preserved_verbatim() {
    assert_minifies(
        "a{background:rgba(0, 0, 0, .5);}",
        "a{background:rgba(0, 0, 0, .5)}",
    );
}

#[test]
fn parens_url_spaces_preserved() {
    assert_minifies("a{background:url( x.png )}", "a{background:url( x.png )}");
}

#[test]
fn parens_shield_semicolons() {
    assert_minifies("a{u:url(a;b);v:w}", "a{u:url(a;b);v:w}");
}

#[test]
fn parens_preserve_newlines() {
    assert_minifies(
        "a{g:linear-gradient(\nred,\nblue)}",
        "a{g:linear-gradient(\nred,\nblue)}",
    );
}

#[test]
fn parens_comment_still_removed() {
    // Comments open from any state, parenthesized values included; the
    // blanks around the comment are value content and stay.
    assert_minifies("a{c:calc(1px /* two */ + 2px)}", "a{c:calc(1px  + 2px)}");
}
