// Copyright 2025 the Styletrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::io;

/// Error produced by a minification run.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the number of bytes that had
/// been consumed from the source stream when the failure occurred. A failed
/// run leaves the target stream partially written; its contents must be
/// discarded.
#[derive(Debug)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// Source bytes consumed before the failure.
    offset: u64,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The number of bytes consumed from the source stream before the failure.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub(crate) fn read(offset: u64, source: io::Error) -> Self {
        Self {
            kind: ErrorKind::Read(source),
            offset,
        }
    }

    pub(crate) fn write(offset: u64, source: io::Error) -> Self {
        Self {
            kind: ErrorKind::Write(source),
            offset,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Read(e) => {
                write!(f, "source read failed after {} bytes: {e}", self.offset)
            }
            ErrorKind::Write(e) => {
                write!(f, "target write failed after {} bytes: {e}", self.offset)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Read(e) | ErrorKind::Write(e) => Some(e),
        }
    }
}

/// The non-exhaustive category of an error.
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Reading from the source stream failed.
    Read(io::Error),

    /// Writing to the target stream failed.
    Write(io::Error),
}
