//! Reader-based locator implementation.
//!
//! _Requires Cargo feature `std`._

use std::{
    io::{Read, Seek},
    vec::Vec,
};

use either::Either::{Left, Right};
use thiserror::Error;

use crate::sans::{
    Locator,
    frame::FrameError,
    scan::SIGNATURE,
    tag::Tag,
};

use super::{
    cursor::{self, ByteCursor},
    scanner::{self, DEFAULT_CHUNK_SIZE, SignatureScanner},
};

extern crate std;

/// Errors occurring while locating a module through a cursor.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the underlying cursor.
    #[error(transparent)]
    Cursor(#[from] cursor::Error),
    /// The source ended without a frame signature.
    #[error("Frame signature not found.")]
    SignatureNotFound,
    /// Scan chunks cannot hold the frame signature.
    #[error("Chunk size ({0}) must exceed the frame signature length.")]
    ChunkTooSmall(usize),
    /// The frame ended without a matching module.
    #[error("Module {0} not found within the frame.")]
    ModuleNotFound(Tag),
    /// A module declared a length shorter than its own header.
    #[error("Module {tag} declares a length of {length}, shorter than its header.")]
    MalformedModule { tag: Tag, length: u16 },
}

impl From<scanner::Error> for Error {
    fn from(err: scanner::Error) -> Self {
        match err {
            scanner::Error::Cursor(err) => Self::Cursor(err),
            scanner::Error::NotFound => Self::SignatureNotFound,
            scanner::Error::ChunkTooSmall { chunk_size, .. } => Self::ChunkTooSmall(chunk_size),
        }
    }
}

impl From<FrameError> for Error {
    fn from(err: FrameError) -> Self {
        match err {
            FrameError::NotFound(tag) => Self::ModuleNotFound(tag),
            FrameError::MalformedModule { tag, length } => Self::MalformedModule { tag, length },
        }
    }
}

/// Locate a module through a cursor, returning its payload.
///
/// This method is also re-exported as `radframe::avec::locate_reader`.
///
/// _Requires Cargo feature `std`._
pub fn locate<R: Read + Seek>(c: &mut ByteCursor<R>, tag: Tag) -> Result<Vec<u8>, Error> {
    locate_with(c, tag, DEFAULT_CHUNK_SIZE)
}

/// Locate a module through a cursor, scanning for the frame signature
/// `chunk_size` bytes at a time.
pub fn locate_with<R: Read + Seek>(
    c: &mut ByteCursor<R>,
    tag: Tag,
    chunk_size: usize,
) -> Result<Vec<u8>, Error> {
    SignatureScanner::with_chunk_size(&SIGNATURE, chunk_size)?.scan_to(c)?;

    let start = c.position()?;
    let (total, mut module_header) = Locator::advance(c.read_array()?, tag)?;

    log::debug!("Found a frame of {total} bytes at offset {start}.");

    let payload = loop {
        module_header = match module_header.advance(c.read_array()?)? {
            Left(body) => {
                log::trace!("Skipping {} bytes of module {}.", body.len(), body.tag());
                c.skip(body.len())?;
                body.advance()?
            }
            Right(payload) => break payload,
        };
    };

    log::debug!("Found module {tag} with a {}-byte payload.", payload.len());

    Ok(c.read_exact(payload.len())?)
}
