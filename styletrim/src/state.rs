// Copyright 2025 the Styletrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io::Read;

use crate::Error;
use crate::read::CharReader;

/// Lexical mode of the minifier.
///
/// Exactly one state is active at a time. [`Comment`](Self::Comment) is
/// enterable from every other state and always returns to the state that was
/// active when the comment opened; comments never nest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum State {
    /// Between statements, waiting for the next rule to begin.
    #[default]
    Free,
    /// Inside an at-rule prelude (`@import …`, `@media …`).
    AtRule,
    /// Reading a selector list, before its opening brace.
    Selector,
    /// Inside a rule block, before the first byte of a declaration.
    Block,
    /// Reading a `property: value` declaration.
    Declaration,
    /// Inside a `/* … */` comment.
    Comment,
}

/// What the state machine decided to do with one input byte.
///
/// Every transformation is one input byte to zero or one output bytes; the
/// machine never buffers output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Write this byte (possibly a substitute for the input byte).
    Emit(u8),
    /// Write nothing.
    Suppress,
}

/// The per-run minifier state machine.
///
/// A `Machine` is cheap to construct and is meant to live for exactly one
/// minification run. It holds no reference to the streams; the driver feeds
/// it one byte at a time together with the reader, which it uses for
/// single-byte lookahead.
#[derive(Debug, Default)]
pub struct Machine {
    current: State,
    /// State to restore when the active comment closes.
    saved: State,
    /// Tracks `( … )` spans within a declaration value so separators inside
    /// CSS functions are not mistaken for statement boundaries. Deliberately
    /// not reset when the declaration state is left or re-entered.
    inside_parens: bool,
}

impl Machine {
    /// Creates a machine in the [`Free`](State::Free) state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active lexical state.
    pub fn state(&self) -> State {
        self.current
    }

    /// Classifies one input byte, updating the lexical state as a side
    /// effect.
    ///
    /// `reader` is consulted for lookahead only; `step` consumes from it
    /// solely when a comment closes, to discard the `/` already matched.
    pub fn step<R: Read>(
        &mut self,
        byte: u8,
        reader: &mut CharReader<R>,
    ) -> Result<Action, Error> {
        // A comment can open inside any state but a comment.
        if self.current != State::Comment && byte == b'/' && reader.peek()? == Some(b'*') {
            self.saved = self.current;
            self.current = State::Comment;
            return Ok(Action::Suppress);
        }
        self.dispatch(byte, reader)
    }

    fn dispatch<R: Read>(
        &mut self,
        byte: u8,
        reader: &mut CharReader<R>,
    ) -> Result<Action, Error> {
        Ok(match self.current {
            State::Free => match byte {
                b'@' => {
                    self.current = State::AtRule;
                    Action::Emit(byte)
                }
                _ => {
                    // Everything else opens a selector; the byte itself is
                    // handled under the selector rules.
                    self.current = State::Selector;
                    return self.dispatch(byte, reader);
                }
            },
            State::Selector => match byte {
                b'{' => {
                    self.current = State::Block;
                    Action::Emit(byte)
                }
                b'\n' => Action::Suppress,
                b'@' => {
                    self.current = State::AtRule;
                    Action::Emit(byte)
                }
                b' ' if matches!(reader.peek()?, Some(b'{') | Some(b' ')) => Action::Suppress,
                _ => Action::Emit(byte),
            },
            State::AtRule => match byte {
                // A blank line terminates a simple at-rule even without a
                // semicolon; a lone line feed is just a separator.
                b'\n' if reader.peek()? == Some(b'\n') => {
                    self.current = State::Free;
                    Action::Emit(b';')
                }
                b'\n' => {
                    self.current = State::Free;
                    Action::Emit(b' ')
                }
                b';' => {
                    self.current = State::Free;
                    Action::Emit(b';')
                }
                b'{' => {
                    self.current = State::Block;
                    Action::Emit(byte)
                }
                _ => Action::Emit(byte),
            },
            State::Block => match byte {
                b' ' | b'\n' => Action::Suppress,
                b'}' => {
                    self.current = State::Free;
                    Action::Emit(byte)
                }
                _ => {
                    self.current = State::Declaration;
                    return self.dispatch(byte, reader);
                }
            },
            State::Declaration => {
                if byte == b'(' {
                    self.inside_parens = true;
                    Action::Emit(byte)
                } else if self.inside_parens {
                    // Parenthesized content passes through untouched.
                    if byte == b')' {
                        self.inside_parens = false;
                    }
                    Action::Emit(byte)
                } else {
                    match byte {
                        b';' => {
                            self.current = State::Block;
                            if reader.peek()? == Some(b'}') {
                                // Trailing semicolon directly before the
                                // closing brace is dropped.
                                Action::Suppress
                            } else {
                                Action::Emit(byte)
                            }
                        }
                        b'}' => {
                            // Last declaration lacked its semicolon.
                            self.current = State::Free;
                            Action::Emit(byte)
                        }
                        b'\n' => Action::Suppress,
                        b' ' if reader.peek()? == Some(b' ') => Action::Suppress,
                        _ => Action::Emit(byte),
                    }
                }
            }
            State::Comment => {
                if byte == b'*' && reader.peek()? == Some(b'/') {
                    // Discard the buffered `/` so it is not re-dispatched.
                    let _ = reader.next()?;
                    self.current = self.saved;
                }
                Action::Suppress
            }
        })
    }
}
