//! Two-byte module identifiers.

use core::fmt;

use thiserror::Error;

/// An error constructing a tag.
#[derive(Debug, Error)]
pub enum TagError {
    /// Wrong number of bytes.
    #[error("Tags are exactly 2 bytes long, found {0}.")]
    Length(usize),
}

/// Identifier at the head of every module in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag([u8; 2]);

impl Tag {
    /// The module holding target records.
    pub const TARGETS: Self = Self::from_array(*b"MB");

    /// Create a tag from a trusted constant.
    pub const fn from_array(r: [u8; 2]) -> Self {
        Self(r)
    }

    /// Create a tag from a slice, which must hold exactly two bytes.
    pub fn new(r: &[u8]) -> Result<Self, TagError> {
        let r = r.try_into().map_err(|_| TagError::Length(r.len()))?;
        Ok(Self(r))
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Tag {
    type Error = TagError;

    fn try_from(r: &[u8]) -> Result<Self, Self::Error> {
        Self::new(r)
    }
}

impl TryFrom<&str> for Tag {
    type Error = TagError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s.as_bytes())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        for b in self.0 {
            write!(f, "{}", b.escape_ascii())?;
        }
        write!(f, "\"")
    }
}
