//! Fixed-point math mirroring the overlay protocol's on-chain rounding.
//!
//! Rates, indexes and proportions are scaled by a RAY (10^27), health
//! factors by a WAD (10^18) and percentages by 10^4. Stored values are
//! u128; every product is taken in a u256 so that two full-range u128
//! operands can never wrap before the division brings them back down.
//! Overflow past 256 bits is reported as `MathOverflow`, never wrapped.

#![allow(clippy::assign_op_pattern)]
#![allow(clippy::ptr_offset_with_cast)]
#![allow(clippy::manual_range_contains)]

pub mod percentage;
pub mod wad_ray;

pub use percentage::*;
pub use wad_ray::*;

use uint::construct_uint;

// U256 with 256 bits consisting of 4 x 64-bit words
construct_uint! {
    pub struct U256(4);
}
