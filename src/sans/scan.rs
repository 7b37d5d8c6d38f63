//! Helpers for finding signatures.

use memchr::memmem;

/// The signature opening every frame.
pub const SIGNATURE: [u8; 2] = [0xAB, 0xCD];

/// Find the offset of the first byte-exact occurrence of `pattern`.
pub fn find(haystack: &[u8], pattern: &[u8]) -> Option<usize> {
    memmem::find(haystack, pattern)
}

/// Number of bytes to carry from the end of one window into the next, so an
/// occurrence split across them is still found.
pub fn carry(pattern: &[u8]) -> usize {
    pattern.len().saturating_sub(1)
}
