/// Error denotes a big integer that is not a canonical representative of
/// the scalar field.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("value is not below the scalar field modulus")]
    Overflow,

    #[error("value is negative")]
    Underflow,
}
