//! Decoding of fixed-size records from module payloads.
//!
//! A payload is a packed array of records with no padding between them. It
//! decodes only if its length is a whole number of records; a trailing partial
//! record is never decoded.
//!
//! ```
//! let payload = locate_slice(&data, Tag::TARGETS)?;
//! for target in records::<TargetRecord>(payload)? {
//!     println!("{:?}", target?);
//! }
//! ```

use core::marker::PhantomData;

use thiserror::Error;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(feature = "std")]
extern crate std;

pub mod target;

pub use target::TargetRecord;

/// Derive [`Fields`] for a struct representing a single record.
///
/// Add the `field("Label")` attribute to each field to publish, in the order
/// they should be published. Fields must be primitive integers.
///
/// ```
/// #[derive(Debug, Fields)]
/// struct Echo {
///     #[field("Range")]
///     range: u16,
///     #[field("Bearing")]
///     bearing: i16,
///     checksum: u8,
/// }
/// ```
pub use radframe_derive::Fields;

/// Errors occurring while decoding records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Too few bytes for a single record.
    #[error("A record needs {expected} bytes, found {actual}.")]
    DataSizeMismatch { expected: usize, actual: usize },
    /// The payload is not a whole number of records.
    #[error("Payload of {actual} bytes is not a whole number of {record_size}-byte records.")]
    ArraySizeMismatch { record_size: usize, actual: usize },
    /// The payload failed a structural check.
    #[error("Payload failed validation: {0}.")]
    Validation(&'static str),
}

/// A record with a fixed-size binary layout.
pub trait Record: Sized {
    /// Number of bytes storing one record, which must not be zero.
    const SIZE: usize;

    /// Decode a record from the front of a slice.
    fn decode(r: &[u8]) -> Result<Self, DecodeError>;
}

/// Iterator decoding the records of a payload in order.
#[derive(Debug)]
pub struct Records<'a, T> {
    r: &'a [u8],
    _phantom: PhantomData<T>,
}

/// Prepare to decode the records of a payload, which must be a whole number of
/// records long.
///
/// A record type of zero bytes never divides a payload.
pub fn records<T: Record>(payload: &[u8]) -> Result<Records<'_, T>, DecodeError> {
    if payload.len().checked_rem(T::SIZE) != Some(0) {
        Err(DecodeError::ArraySizeMismatch {
            record_size: T::SIZE,
            actual: payload.len(),
        })?;
    }

    Ok(Records {
        r: payload,
        _phantom: PhantomData,
    })
}

impl<T: Record> Iterator for Records<'_, T> {
    type Item = Result<T, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.r.is_empty() {
            return None;
        }

        let (head, tail) = self.r.split_at(T::SIZE.min(self.r.len()));
        self.r = tail;

        Some(T::decode(head))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.r.len().div_ceil(T::SIZE);
        (n, Some(n))
    }
}

impl<T: Record> ExactSizeIterator for Records<'_, T> {}

/// Decode every record of a payload.
///
/// Decoding stops at the first failing record, and no records are returned.
///
/// _Requires Cargo feature `std`._
#[cfg(feature = "std")]
pub fn decode<T: Record>(payload: &[u8]) -> Result<Vec<T>, DecodeError> {
    records::<T>(payload)?.collect()
}

/// Bytes following the records of a payload.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Trailer {
    /// The module length covers records only.
    #[default]
    Absent,
    /// The payload ends with a single byte (such as a checksum or terminator)
    /// after its records.
    Byte,
}

/// Split a trailer from the end of a payload.
///
/// Returns the record bytes, and the trailing byte if one was expected.
pub fn split_trailer(
    payload: &[u8],
    trailer: Trailer,
) -> Result<(&[u8], Option<u8>), DecodeError> {
    match trailer {
        Trailer::Absent => Ok((payload, None)),
        Trailer::Byte => {
            let (last, rest) = payload
                .split_last()
                .ok_or(DecodeError::Validation("an empty payload has no trailing byte"))?;

            Ok((rest, Some(*last)))
        }
    }
}

/// Publish the fields of a record to a receiver.
///
/// See the [`Fields`](macro@Fields) derive macro for an automatic
/// implementation of this trait.
pub trait Fields {
    /// Publish each field, in order, with its label.
    fn publish(&self, o: &mut dyn FieldSink);
}

/// Receive labelled field values from a record.
///
/// The default implementation of each method ignores received values.
#[allow(unused_variables)]
pub trait FieldSink {
    /// Receive a `u8` field.
    fn put_u8(&mut self, label: &'static str, _: u8) {}
    /// Receive a `u16` field.
    fn put_u16(&mut self, label: &'static str, _: u16) {}
    /// Receive a `u32` field.
    fn put_u32(&mut self, label: &'static str, _: u32) {}
    /// Receive a `u64` field.
    fn put_u64(&mut self, label: &'static str, _: u64) {}

    /// Receive a `i8` field.
    fn put_i8(&mut self, label: &'static str, _: i8) {}
    /// Receive a `i16` field.
    fn put_i16(&mut self, label: &'static str, _: i16) {}
    /// Receive a `i32` field.
    fn put_i32(&mut self, label: &'static str, _: i32) {}
    /// Receive a `i64` field.
    fn put_i64(&mut self, label: &'static str, _: i64) {}
}
