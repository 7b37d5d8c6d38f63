//! Convenience interfaces for locating modules.
//!
//! The functions in this module walk a frame to the module carrying a
//! requested [`Tag`], returning its raw payload. Decode that payload with the
//! functions in [`crate::record`].
//!
//! Files and other seekable sources are read through a [`ByteCursor`], which
//! never returns fewer bytes than were requested. Data already in memory can
//! be searched without allocating through [`locate_slice`].
//!
//! ```
//! let mut cursor = ByteCursor::open("capture.bin")?;
//! let payload = locate_reader(&mut cursor, Tag::TARGETS)?;
//! let targets = decode::<TargetRecord>(&payload)?;
//! ```

#[cfg(feature = "std")]
pub mod cursor;
#[cfg(feature = "std")]
pub mod reader;
#[cfg(feature = "std")]
pub mod scanner;
pub mod slice;

#[cfg(feature = "std")]
pub use cursor::ByteCursor;
#[cfg(feature = "std")]
pub use reader::locate as locate_reader;
#[cfg(feature = "std")]
pub use scanner::SignatureScanner;
pub use slice::locate as locate_slice;

pub use crate::sans::tag::Tag;
