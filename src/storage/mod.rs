//! Backing storage for sieve state.
//!
//! Two forms with different jobs:
//! - [`OddBitmap`]: one packed bit per odd candidate, the form every
//!   completed sieve keeps and every query reads;
//! - [`BlockBuffer`]: one byte per odd candidate, the transient scratch the
//!   cache-blocked construction marks before committing survivors into the
//!   bitmap.

pub mod block;
pub mod odd_bitmap;

pub use block::BlockBuffer;
pub use odd_bitmap::{OddBitmap, OnesIn};
