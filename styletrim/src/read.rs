// Copyright 2025 the Styletrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io::{ErrorKind, Read};

use crate::Error;

/// Byte-at-a-time reader with control-character normalization and a single
/// slot of lookahead.
///
/// Two rules are applied uniformly before a byte is handed to the state
/// machine:
///
/// - a carriage return becomes a line feed, so the machine only ever sees
///   `\n` line endings;
/// - any other byte below the space character, except line feed, becomes a
///   space.
///
/// End of stream is the sentinel `None`, never an error.
///
/// Reads are unbuffered at this layer; wrap file sources in a
/// [`BufReader`](std::io::BufReader).
#[derive(Debug)]
pub struct CharReader<R> {
    source: R,
    lookahead: Option<u8>,
    consumed: u64,
}

impl<R: Read> CharReader<R> {
    /// Creates a reader over `source` with an empty lookahead slot.
    pub fn new(source: R) -> Self {
        Self {
            source,
            lookahead: None,
            consumed: 0,
        }
    }

    /// Consumes and returns the next normalized byte.
    ///
    /// Drains the lookahead slot first if [`peek`](Self::peek) filled it.
    #[expect(
        clippy::should_implement_trait,
        reason = "`next` is fallible; `Iterator` cannot express the I/O error"
    )]
    pub fn next(&mut self) -> Result<Option<u8>, Error> {
        if let Some(byte) = self.lookahead.take() {
            return Ok(Some(byte));
        }
        self.read_byte()
    }

    /// Returns the next normalized byte without consuming it.
    ///
    /// The byte is cached so that the following [`next`](Self::next) returns
    /// the same value. Only one byte of lookahead is held; the state machine
    /// never peeks twice without an intervening `next`.
    pub fn peek(&mut self) -> Result<Option<u8>, Error> {
        if self.lookahead.is_none() {
            self.lookahead = self.read_byte()?;
        }
        Ok(self.lookahead)
    }

    /// The number of bytes consumed from the underlying stream so far,
    /// including a peeked byte still sitting in the lookahead slot.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    fn read_byte(&mut self) -> Result<Option<u8>, Error> {
        let mut buf = [0_u8; 1];
        loop {
            match self.source.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.consumed += 1;
                    return Ok(Some(normalize(buf[0])));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(Error::read(self.consumed, e)),
            }
        }
    }
}

fn normalize(byte: u8) -> u8 {
    match byte {
        b'\r' => b'\n',
        b if b < b' ' && b != b'\n' => b' ',
        b => b,
    }
}
