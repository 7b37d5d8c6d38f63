//! Error-checked sequential reads over a seekable source.
//!
//! _Requires Cargo feature `std`._

use std::{
    fs::File,
    io::{self, BufReader, Read, Seek, SeekFrom},
    path::Path,
    vec,
    vec::Vec,
};

use thiserror::Error;

use crate::sans::primitive::{Endian, Primitive};

extern crate std;

/// Errors occurring while reading through a cursor.
#[derive(Debug, Error)]
pub enum Error {
    /// No byte source is attached.
    #[error("No byte source is attached.")]
    NotOpen,
    /// The byte source failed, during this or an earlier operation.
    #[error("Byte source failed: {0}.")]
    IoFailure(#[from] io::Error),
    /// Fewer bytes remain than were requested.
    #[error("Requested {requested} bytes, but only {available} remain.")]
    OutOfRange { requested: usize, available: u64 },
}

#[derive(Debug, Clone, Copy)]
enum Health {
    Good,
    Faulted(io::ErrorKind),
}

/// A sequential reader which never returns fewer bytes than were requested.
///
/// Any operation which fails leaves the cursor faulted, and every later
/// operation fails with [`Error::IoFailure`] without touching the source.
#[derive(Debug)]
pub struct ByteCursor<R> {
    source: Option<R>,
    health: Health,
    end: Option<u64>,
}

impl<R> Default for ByteCursor<R> {
    /// Create a cursor with no source attached.
    fn default() -> Self {
        Self {
            source: None,
            health: Health::Good,
            end: None,
        }
    }
}

impl ByteCursor<BufReader<File>> {
    /// Open a file and attach it to a new cursor.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read + Seek> ByteCursor<R> {
    /// Create a cursor reading from the current position of a source.
    pub fn new(r: R) -> Self {
        Self {
            source: Some(r),
            health: Health::Good,
            end: None,
        }
    }

    /// Detach and return the source, leaving the cursor unusable.
    pub fn close(&mut self) -> Option<R> {
        self.end = None;
        self.source.take()
    }

    /// Check that a source is attached and has not faulted.
    pub fn check_health(&self) -> Result<(), Error> {
        match (&self.source, self.health) {
            (None, _) => Err(Error::NotOpen),
            (Some(_), Health::Faulted(kind)) => Err(Error::IoFailure(kind.into())),
            (Some(_), Health::Good) => Ok(()),
        }
    }

    /// Current offset from the start of the source.
    pub fn position(&mut self) -> Result<u64, Error> {
        self.with_source(|r| r.stream_position())
    }

    /// Advance by exactly `n` bytes.
    pub fn skip(&mut self, n: usize) -> Result<(), Error> {
        let end = self.end()?;

        let (from, to) = self.with_source(|r| {
            let from = r.stream_position()?;
            let step = end.saturating_sub(from).min(n as u64);
            r.seek_relative(step as i64)?;
            Ok((from, r.stream_position()?))
        })?;

        // A source may clamp seeks, so measure how far the cursor really moved.
        let moved = to.saturating_sub(from);
        if moved != n as u64 {
            return Err(self.out_of_range(n, moved));
        }

        Ok(())
    }

    /// Read exactly `n` bytes.
    pub fn read_exact(&mut self, n: usize) -> Result<Vec<u8>, Error> {
        let mut buf = vec![0; n];
        self.read_into(&mut buf)?;
        Ok(buf)
    }

    /// Read exactly `N` bytes.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut buf = [0; N];
        self.read_into(&mut buf)?;
        Ok(buf)
    }

    /// Read a primitive stored in the given byte order.
    pub fn read<T: Primitive>(&mut self, endian: Endian) -> Result<T, Error> {
        let buf = self.read_exact(T::SIZE)?;

        T::from_slice(&buf, endian).ok_or(Error::OutOfRange {
            requested: T::SIZE,
            available: buf.len() as u64,
        })
    }

    /// Fill a buffer completely.
    pub fn read_into(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        let got = self.read_up_to(buf)?;

        if got != buf.len() {
            return Err(self.out_of_range(buf.len(), got as u64));
        }

        Ok(())
    }

    /// Fill as much of a buffer as the source allows, returning the number of
    /// bytes read. Reaching the end of the source is not a fault.
    pub(crate) fn read_up_to(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        self.with_source(|r| {
            let mut got = 0;

            while got < buf.len() {
                match r.read(&mut buf[got..]) {
                    Ok(0) => break,
                    Ok(n) => got += n,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                    Err(e) => return Err(e),
                }
            }

            Ok(got)
        })
    }

    /// Length of the source, measured once.
    fn end(&mut self) -> Result<u64, Error> {
        if let Some(end) = self.end {
            return Ok(end);
        }

        let end = self.with_source(|r| {
            let from = r.stream_position()?;
            let end = r.seek(SeekFrom::End(0))?;
            r.seek(SeekFrom::Start(from))?;
            Ok(end)
        })?;

        self.end = Some(end);
        Ok(end)
    }

    /// Move back by `n` bytes.
    pub(crate) fn rewind(&mut self, n: usize) -> Result<(), Error> {
        self.with_source(|r| r.seek(SeekFrom::Current(-(n as i64))).map(drop))
    }

    /// Run an operation against a healthy source, faulting the cursor if it
    /// fails.
    fn with_source<T>(&mut self, f: impl FnOnce(&mut R) -> io::Result<T>) -> Result<T, Error> {
        self.check_health()?;

        let r = self.source.as_mut().ok_or(Error::NotOpen)?;

        f(r).map_err(|e| {
            self.health = Health::Faulted(e.kind());
            Error::IoFailure(e)
        })
    }

    fn out_of_range(&mut self, requested: usize, available: u64) -> Error {
        self.health = Health::Faulted(io::ErrorKind::UnexpectedEof);
        Error::OutOfRange {
            requested,
            available,
        }
    }
}
