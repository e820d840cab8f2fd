//! Support utilities for testing arithmetic circuits over the BN254 scalar
//! field: canonical-range validation, bounded random/maximal element
//! generation and little-endian bit decomposition of wire values.
mod bits;
mod element;
mod error;
mod scalar_field;

pub use bits::*;
pub use element::*;
pub use error::*;
pub use scalar_field::*;
