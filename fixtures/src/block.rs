use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::FixtureError;

/// Conventional location of the circuit test fixtures.
pub const TEST_DATA_PATH: &str = "./circuit/test/data/";

/// Position of the spot-trade transaction inside a block's transaction list.
pub const SPOT_TRADE_INDEX: usize = 2;

/// Block descriptor deserialized from a test fixture. Fields not modeled
/// here are kept verbatim in `header`.
#[derive(Debug, Deserialize)]
pub struct Block {
    pub transactions: Vec<Transaction>,
    #[serde(flatten)]
    pub header: Map<String, Value>,
}

/// One transaction of a block fixture, tagged by type with its payload kept
/// verbatim.
#[derive(Debug, Deserialize)]
pub struct Transaction {
    #[serde(rename = "txType")]
    pub tx_type: String,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Block {
    pub fn from_json(input_json: &str) -> Result<Block, serde_json::Error> {
        serde_json::from_str(input_json)
    }

    /// Reads and parses a block fixture. The file is read to completion and
    /// closed before parsing starts.
    pub fn from_file(path: &Path) -> Result<Block, FixtureError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::error!("cannot read block fixture {}: {}", path.display(), e);
                return Err(FixtureError::Io(e));
            }
        };

        let block = Self::from_json(&contents)?;
        tracing::debug!(
            "loaded block fixture {} with {} transactions",
            path.display(),
            block.transactions.len()
        );
        Ok(block)
    }

    /// Reads the conventional `block.json` fixture from [`TEST_DATA_PATH`].
    pub fn from_test_data() -> Result<Block, FixtureError> {
        Self::from_file(&Path::new(TEST_DATA_PATH).join("block.json"))
    }

    /// The transaction at the conventional spot-trade position.
    pub fn spot_trade(&self) -> Result<&Transaction, FixtureError> {
        self.transactions.get(SPOT_TRADE_INDEX).ok_or(FixtureError::MissingTransaction {
            index: SPOT_TRADE_INDEX,
            len: self.transactions.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK_JSON: &str = r#"
        {
            "blockType": 0,
            "blockSize": 4,
            "exchange": "0x9385aCd9d78dFE854c543294770d0C94c2B07EDC",
            "transactions": [
                { "txType": "Noop" },
                { "txType": "Deposit", "accountID": 10, "amount": "5000000" },
                { "txType": "SpotTrade", "orderA": { "accountID": 10 }, "orderB": { "accountID": 11 } },
                { "txType": "Withdraw", "accountID": 11 }
            ]
        }"#;

    #[test]
    fn parses_a_block_and_keeps_unmodeled_fields() {
        let block = Block::from_json(BLOCK_JSON).unwrap();
        assert_eq!(block.transactions.len(), 4);
        assert_eq!(block.header.get("blockSize"), Some(&Value::from(4)));

        let deposit = &block.transactions[1];
        assert_eq!(deposit.tx_type, "Deposit");
        assert_eq!(deposit.payload.get("accountID"), Some(&Value::from(10)));
    }

    #[test]
    fn spot_trade_is_the_third_transaction() {
        let block = Block::from_json(BLOCK_JSON).unwrap();
        assert_eq!(block.spot_trade().unwrap().tx_type, "SpotTrade");
    }

    #[test]
    fn spot_trade_fails_on_short_blocks() {
        let block = Block::from_json(
            r#"{ "transactions": [{ "txType": "Noop" }, { "txType": "Noop" }] }"#,
        )
        .unwrap();
        assert!(matches!(
            block.spot_trade(),
            Err(FixtureError::MissingTransaction { index: 2, len: 2 })
        ));
    }

    #[test]
    fn rejects_malformed_fixtures() {
        assert!(Block::from_json("not a block").is_err());
        assert!(Block::from_json(r#"{ "blockType": 0 }"#).is_err());
    }

    #[test]
    fn missing_file_reports_an_io_error() {
        let err = Block::from_file(Path::new("./does/not/exist/block.json")).unwrap_err();
        assert!(matches!(err, FixtureError::Io(_)));
    }
}
