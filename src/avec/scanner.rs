//! Chunked signature search over a cursor.
//!
//! _Requires Cargo feature `std`._

use std::{io::Read, io::Seek, vec, vec::Vec};

use thiserror::Error;

use crate::sans::scan::{carry, find};

use super::cursor::{self, ByteCursor};

extern crate std;

/// Default number of bytes read per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Errors occurring while scanning for a signature.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the underlying cursor.
    #[error(transparent)]
    Cursor(#[from] cursor::Error),
    /// The source ended without the signature.
    #[error("Signature not found before the end of the source.")]
    NotFound,
    /// Chunks cannot be smaller than the signature they search for.
    #[error("Chunk size ({chunk_size}) must exceed the signature length ({pattern_len}).")]
    ChunkTooSmall { chunk_size: usize, pattern_len: usize },
}

/// Searches a cursor for a signature, a chunk at a time.
#[derive(Debug)]
pub struct SignatureScanner<'p> {
    pattern: &'p [u8],
    buffer: Vec<u8>,
}

impl<'p> SignatureScanner<'p> {
    /// Create a scanner reading [`DEFAULT_CHUNK_SIZE`] bytes per chunk.
    pub fn new(pattern: &'p [u8]) -> Result<Self, Error> {
        Self::with_chunk_size(pattern, DEFAULT_CHUNK_SIZE)
    }

    /// Create a scanner reading `chunk_size` bytes per chunk, which must exceed
    /// the length of a non-empty `pattern`.
    pub fn with_chunk_size(pattern: &'p [u8], chunk_size: usize) -> Result<Self, Error> {
        if pattern.is_empty() || chunk_size <= pattern.len() {
            Err(Error::ChunkTooSmall {
                chunk_size,
                pattern_len: pattern.len(),
            })?;
        }

        Ok(Self {
            pattern,
            buffer: vec![0; chunk_size],
        })
    }

    /// Advance the cursor to directly after the next occurrence of the
    /// pattern.
    pub fn scan_to<R: Read + Seek>(&mut self, c: &mut ByteCursor<R>) -> Result<(), Error> {
        c.check_health()?;

        loop {
            let read = c.read_up_to(&mut self.buffer)?;

            if let Some(i) = find(&self.buffer[..read], self.pattern) {
                // Step back over the unscanned tail of the chunk.
                c.rewind(read - i - self.pattern.len())?;
                log::trace!("Found signature {:02X?} at index {i} of a {read}-byte chunk.", self.pattern);
                return Ok(());
            }

            if read < self.buffer.len() {
                Err(Error::NotFound)?;
            }

            // Step back so an occurrence straddling chunks is seen whole.
            c.rewind(carry(self.pattern))?;
        }
    }
}
