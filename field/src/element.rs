use ark_bn254::Fr;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use rand::Rng;

use crate::{to_field_element, RangeError, SNARK_SCALAR_FIELD, SNARK_SCALAR_FIELD_BITS};

// 32-bit digits accumulated before reduction. 16 digits give 512 bits of
// entropy, so the modulo-P remainder is indistinguishable from uniform.
const RANDOM_DIGITS: usize = 16;

/// Draws a random canonical value spanning `num_bits` bits.
///
/// The result lies in `[0, 2^num_bits)` when `num_bits` is below the field
/// width, and in `[0, SNARK_SCALAR_FIELD)` otherwise.
pub fn random_field_element_as_bigint(rng: &mut impl Rng, num_bits: usize) -> BigInt {
    let mut v = BigInt::zero();
    for _ in 0..RANDOM_DIGITS {
        v <<= 32;
        v += rng.random::<u32>();
    }

    if num_bits >= SNARK_SCALAR_FIELD_BITS {
        v % &*SNARK_SCALAR_FIELD
    } else {
        v % (BigInt::one() << num_bits)
    }
}

/// Largest canonical value spanning `num_bits` bits: `2^num_bits - 1`, capped
/// at `SNARK_SCALAR_FIELD - 1` once `num_bits` reaches the field width.
pub fn max_field_element_as_bigint(num_bits: usize) -> BigInt {
    if num_bits >= SNARK_SCALAR_FIELD_BITS {
        &*SNARK_SCALAR_FIELD - 1
    } else {
        (BigInt::one() << num_bits) - 1
    }
}

/// Random element of `num_bits` bits as a native field element.
pub fn random_field_element(rng: &mut impl Rng, num_bits: usize) -> Result<Fr, RangeError> {
    to_field_element(&random_field_element_as_bigint(rng, num_bits))
}

/// Maximal element of `num_bits` bits as a native field element.
pub fn max_field_element(num_bits: usize) -> Result<Fr, RangeError> {
    to_field_element(&max_field_element_as_bigint(num_bits))
}
