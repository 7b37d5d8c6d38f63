//! Fixed-width integers in either byte order.

/// Byte order of a stored integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

impl Endian {
    /// Byte order of the host.
    pub const NATIVE: Self = if cfg!(target_endian = "big") {
        Self::Big
    } else {
        Self::Little
    };
}

pub trait Primitive: Sized {
    /// Number of bytes storing this primitive.
    const SIZE: usize;

    /// Convert stored bytes to this primitive, swapping them if `endian`
    /// differs from the host.
    ///
    /// Returns `None` unless `r` holds exactly [`Self::SIZE`] bytes.
    fn from_slice(r: &[u8], endian: Endian) -> Option<Self>;
}

macro_rules! primitive {
    ($($t:ident),*) => {
        $(
            impl Primitive for $t {
                const SIZE: usize = size_of::<$t>();

                fn from_slice(r: &[u8], endian: Endian) -> Option<Self> {
                    let r = r.try_into().ok()?;

                    Some(match endian {
                        Endian::Big => $t::from_be_bytes(r),
                        Endian::Little => $t::from_le_bytes(r),
                    })
                }
            }
        )*
    };
}

primitive!(u8, u16, u32, u64, i8, i16, i32, i64);
