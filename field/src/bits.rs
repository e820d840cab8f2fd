use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};

/// Decomposes `value` into exactly `num_bits` wire bits, least-significant
/// first. Bits above the value's width read as zero; bits above `num_bits`
/// are dropped, matching fixed-width circuit wires.
pub fn field_element_to_bits(value: &Fr, num_bits: usize) -> Vec<bool> {
    let repr = value.into_bigint();
    (0..num_bits).map(|i| repr.get_bit(i)).collect()
}

/// Structural equality of two wire-bit sequences. Sequences of different
/// lengths never compare equal.
pub fn compare_bits(a: &[bool], b: &[bool]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(x, y)| x == y)
}
