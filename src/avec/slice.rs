//! Slice-based locator implementation.

use either::Either::{Left, Right};
use thiserror::Error;

use crate::sans::{
    Locator,
    frame::FrameError,
    scan::{SIGNATURE, find},
    tag::Tag,
};

/// Errors occurring while locating a module in a slice.
#[derive(Debug, Error)]
pub enum Error {
    /// Unexpectedly reached the end of the slice.
    #[error("Unexpectedly reached the end of the slice.")]
    EndOfSlice,
    /// The slice holds no frame signature.
    #[error("Frame signature not found.")]
    SignatureNotFound,
    /// The frame ended without a matching module.
    #[error("Module {0} not found within the frame.")]
    ModuleNotFound(Tag),
    /// A module declared a length shorter than its own header.
    #[error("Module {tag} declares a length of {length}, shorter than its header.")]
    MalformedModule { tag: Tag, length: u16 },
}

impl From<FrameError> for Error {
    fn from(err: FrameError) -> Self {
        match err {
            FrameError::NotFound(tag) => Self::ModuleNotFound(tag),
            FrameError::MalformedModule { tag, length } => Self::MalformedModule { tag, length },
        }
    }
}

/// Locate a module in a slice of a document, returning its payload.
///
/// This method is also re-exported as `radframe::avec::locate_slice`.
pub fn locate(r: &[u8], tag: Tag) -> Result<&[u8], Error> {
    let i = &mut find(r, &SIGNATURE).ok_or(Error::SignatureNotFound)?;
    *i += SIGNATURE.len();

    let (_, mut module_header) = Locator::advance(take(r, i)?, tag)?;

    let payload = loop {
        module_header = match module_header.advance(take(r, i)?)? {
            Left(body) => {
                skip(r, i, body.len())?;
                body.advance()?
            }
            Right(payload) => break payload,
        };
    };

    let s = *i;
    skip(r, i, payload.len())?;

    Ok(&r[s..*i])
}

/// Take an exact number of bytes from an offset in a slice, advancing the offset.
fn take<const N: usize>(r: &[u8], i: &mut usize) -> Result<[u8; N], Error> {
    let s = *i;
    skip(r, i, N)?;

    Ok(r[s..*i].try_into().unwrap())
}

/// Advance an offset by an exact number of bytes, staying within the slice.
fn skip(r: &[u8], i: &mut usize, n: usize) -> Result<(), Error> {
    let end = i.checked_add(n).filter(|end| *end <= r.len());
    *i = end.ok_or(Error::EndOfSlice)?;

    Ok(())
}
