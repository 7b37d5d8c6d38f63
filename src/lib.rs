#![no_std]

//! A locator and decoder for radar target records carried inside framed
//! module streams.
//!
//! A frame opens with the signature `AB CD` and a big-endian total size,
//! followed by a chain of tagged, length-prefixed modules. One of these (tagged
//! `MB` by convention) holds a packed array of fixed-size target records.
//!
//! Most users should begin with the locators in the [`avec`] module and the
//! decoder in the [`record`] module. The frame walk itself is exposed as a
//! finite-state machine in the [`sans`] module, for applications that manage
//! their own buffering.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable the byte cursor, reader-based locator and `Vec` decoding
//!   (default).
//! - `cli`: build the `radframe` command (default).

pub mod avec;
pub mod record;
pub mod sans;
