//! Internal finite-state machine for walking frames.
//!
//! This module is intended for applications that need fine control over how
//! bytes are fetched. See [`crate::avec`] for locators built on top of it.
//!
//! # Architecture
//!
//! All states are represented by non-copy tokens. Once enough bytes are ready,
//! transition to another state by calling the token's `advance` method. This
//! will return a successor state token, along with any extracted data.
//!
//! Only the initial state, re-exported for convenience as [`Locator`], can be
//! constructed. Some areas of the process are not represented in the
//! finite-state machine and must be carefully written:
//!
//! - Finding the frame signature. A helper is provided in the [`scan`] module.
//!
//! - Skipping the bodies of modules which were not requested, and reading the
//! payload of the one which was.

pub mod frame;
pub mod primitive;
pub mod scan;
pub mod tag;

/// Entrypoint to the finite-state machine.
pub type Locator = frame::FrameHeader;
