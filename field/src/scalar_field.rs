use ark_bn254::Fr;
use lazy_static::lazy_static;
use num_bigint::{BigInt, Sign};

use crate::RangeError;

/// Bit length of the BN254 scalar field modulus; the bit-width that spans
/// the whole field.
pub const SNARK_SCALAR_FIELD_BITS: usize = 254;

lazy_static! {
    /// BN254 scalar field modulus. Circuit values are canonical exactly
    /// when they lie in `[0, SNARK_SCALAR_FIELD)`.
    pub static ref SNARK_SCALAR_FIELD: BigInt = BigInt::parse_bytes(
        b"21888242871839275222246405745257275088548364400416034343698204186575808495617",
        10
    )
    .unwrap();
}

/// Checks that `v` is a canonical field representative, returning it
/// unchanged when it is.
pub fn validate(v: &BigInt) -> Result<&BigInt, RangeError> {
    if *v >= *SNARK_SCALAR_FIELD {
        return Err(RangeError::Overflow);
    }
    if v.sign() == Sign::Minus {
        return Err(RangeError::Underflow);
    }
    Ok(v)
}

/// Converts a canonical big integer into the native field type.
pub fn to_field_element(v: &BigInt) -> Result<Fr, RangeError> {
    let v = validate(v)?;
    Ok(Fr::from(v.magnitude().clone()))
}
