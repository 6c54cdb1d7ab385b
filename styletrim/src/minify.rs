// Copyright 2025 the Styletrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io::{Read, Write};

use crate::Error;
use crate::read::CharReader;
use crate::state::{Action, Machine};

/// Byte counts for one minification run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Bytes consumed from the source stream.
    pub read: u64,
    /// Bytes written to the target stream.
    pub written: u64,
}

impl Stats {
    /// The percentage size reduction, `100 − written × 100 / read`, in
    /// integer arithmetic.
    ///
    /// An empty source is already minimal; the reduction is 0.
    pub fn reduction_percent(&self) -> u64 {
        if self.read == 0 {
            return 0;
        }
        100 - self.written * 100 / self.read
    }
}

/// Minifies CSS from `source` into `target`.
///
/// Fully consumes `source` and writes the surviving bytes to `target` in
/// input order, one at a time; wrap file streams in
/// [`BufReader`](std::io::BufReader) and [`BufWriter`](std::io::BufWriter).
/// The caller owns the stream lifecycle: `target` is neither flushed nor
/// closed here.
///
/// # Errors
///
/// Any underlying I/O failure aborts the run. The target stream is then
/// partially written and its contents must be discarded; there is no
/// partial-result recovery.
pub fn minify<R: Read, W: Write>(source: R, mut target: W) -> Result<Stats, Error> {
    let mut reader = CharReader::new(source);
    let mut machine = Machine::new();
    let mut written = 0_u64;
    while let Some(byte) = reader.next()? {
        match machine.step(byte, &mut reader)? {
            Action::Emit(out) => {
                target
                    .write_all(&[out])
                    .map_err(|e| Error::write(reader.consumed(), e))?;
                written += 1;
            }
            Action::Suppress => {}
        }
    }
    let stats = Stats {
        read: reader.consumed(),
        written,
    };
    log::debug!(
        "minified {} bytes down to {} ({}% reduction)",
        stats.read,
        stats.written,
        stats.reduction_percent()
    );
    Ok(stats)
}

/// Minifies an in-memory byte slice.
pub fn minify_bytes(source: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(source.len());
    match minify(source, &mut out) {
        Ok(_) => out,
        Err(_) => unreachable!("slice reads and Vec writes cannot fail"),
    }
}

/// Minifies an in-memory string.
///
/// The machine only deletes or substitutes ASCII bytes and treats a comment
/// as an indivisible span, so minifying valid UTF-8 yields valid UTF-8.
pub fn minify_str(source: &str) -> String {
    match String::from_utf8(minify_bytes(source.as_bytes())) {
        Ok(out) => out,
        Err(_) => unreachable!("minification preserves UTF-8 validity"),
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::{Stats, minify, minify_str};
    use crate::ErrorKind;

    struct FailingWriter;

    impl io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("writer failed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_aborts_with_offset() {
        let err = minify(&b"a{color:red}"[..], FailingWriter).unwrap_err();
        assert!(
            matches!(err.kind(), ErrorKind::Write(_)),
            "expected a write error, got {err:?}"
        );
        // The first byte is classified without lookahead, so exactly one
        // source byte has been consumed when the write fails.
        assert_eq!(err.offset(), 1);
    }

    #[test]
    fn stats_count_reads_and_writes() {
        let mut out = Vec::new();
        let stats = minify(&b"a {\ncolor: red;\n}\n"[..], &mut out).unwrap();
        // The line feed between `;` and `}` keeps the semicolon alive: the
        // elision rule only looks one byte ahead.
        assert_eq!(out, b"a{color: red;}");
        assert_eq!(
            stats,
            Stats {
                read: 18,
                written: 14,
            }
        );
        assert_eq!(stats.reduction_percent(), 23);
    }

    #[test]
    fn reduction_percent_of_empty_input_is_zero() {
        let stats = Stats {
            read: 0,
            written: 0,
        };
        assert_eq!(stats.reduction_percent(), 0);
    }

    #[test]
    fn multi_byte_utf8_passes_through() {
        assert_eq!(
            minify_str("a::before{content:\"→ é\"}"),
            "a::before{content:\"→ é\"}"
        );
    }
}
