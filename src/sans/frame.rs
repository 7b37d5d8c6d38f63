//! States processing frame and module headers.

use either::Either::{self, Left, Right};
use thiserror::Error;

use super::tag::Tag;

/// Bytes in a module header: the tag, then the big-endian module length.
pub const MODULE_HEADER_SIZE: u16 = 4;

/// Bytes in the frame size field following the signature.
pub const FRAME_SIZE_LEN: usize = 2;

/// An error advancing over a module header.
#[derive(Debug, Error)]
pub enum FrameError {
    /// The frame ended without a matching module.
    #[error("Module {0} not found within the frame.")]
    NotFound(Tag),
    /// A module declared a length shorter than its own header.
    #[error("Module {tag} declares a length of {length}, shorter than its header.")]
    MalformedModule { tag: Tag, length: u16 },
}

/// State token to decode the frame size following a signature.
#[derive(Debug)]
pub struct FrameHeader;

impl FrameHeader {
    /// Transition to another state by decoding the frame size.
    ///
    /// Returns the number of frame bytes, counted from directly after the
    /// signature, and a successor state token to find the module matching
    /// `tag`.
    pub fn advance(r: [u8; 2], tag: Tag) -> Result<(u16, ModuleHeader), FrameError> {
        let total = u16::from_be_bytes(r);

        let successor = ModuleHeader::within(FRAME_SIZE_LEN, total, tag)?;

        Ok((total, successor))
    }
}

/// State token to decode a module header.
///
/// Only exists while another header fits within the frame, so a frame that
/// ends with the source is exhausted without reading past it.
#[derive(Debug)]
pub struct ModuleHeader {
    consumed: usize,
    total: u16,
    tag: Tag,
}

impl ModuleHeader {
    fn within(consumed: usize, total: u16, tag: Tag) -> Result<Self, FrameError> {
        // A header ending exactly at the boundary exhausts the frame.
        if consumed + MODULE_HEADER_SIZE as usize >= total as usize {
            Err(FrameError::NotFound(tag))?;
        }

        Ok(Self {
            consumed,
            total,
            tag,
        })
    }

    /// Transition to another state by decoding a module header.
    ///
    /// Returns a token for the body of a module to skip, or for the payload of
    /// the requested module.
    pub fn advance(self, r: [u8; 4]) -> Result<Either<ModuleBody, ModulePayload>, FrameError> {
        let found = Tag::from_array([r[0], r[1]]);
        let length = u16::from_be_bytes([r[2], r[3]]);

        if length < MODULE_HEADER_SIZE {
            Err(FrameError::MalformedModule { tag: found, length })?;
        }

        let len = length - MODULE_HEADER_SIZE;

        let successor = if found == self.tag {
            Right(ModulePayload { tag: found, len })
        } else {
            Left(ModuleBody {
                tag: found,
                len,
                header: self,
            })
        };

        Ok(successor)
    }
}

/// State token to skip the body of a module which was not requested.
#[derive(Debug)]
pub struct ModuleBody {
    tag: Tag,
    len: u16,
    header: ModuleHeader,
}

impl ModuleBody {
    /// Tag of the module being skipped.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Number of bytes to skip.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Transition to another state once [`Self::len`] bytes have been skipped.
    ///
    /// Returns the successor state token, or [`FrameError::NotFound`] if no
    /// further header fits within the frame.
    pub fn advance(self) -> Result<ModuleHeader, FrameError> {
        let ModuleHeader {
            consumed,
            total,
            tag,
        } = self.header;

        ModuleHeader::within(
            consumed + MODULE_HEADER_SIZE as usize + self.len as usize,
            total,
            tag,
        )
    }
}

/// Final state token, for the payload of the requested module.
#[derive(Debug)]
pub struct ModulePayload {
    tag: Tag,
    len: u16,
}

impl ModulePayload {
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Number of payload bytes following the module header.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
