/// Error denotes a fixture that cannot be loaded or a block that does not
/// hold the expected transactions. All variants abort the calling test.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("cannot read fixture file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse fixture file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("block holds {len} transactions, none at index {index}")]
    MissingTransaction { index: usize, len: usize },
}
