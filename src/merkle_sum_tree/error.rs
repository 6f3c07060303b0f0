use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    /// Fatal integrity failure: an aggregated balance below some node is
    /// negative. The whole build (or verification) aborts; no root is
    /// published.
    #[error("aggregated balance for coin {0} is negative: ledger corrupted")]
    CorruptedBalance(String),

    #[error("invalid coin symbol {0:?}")]
    InvalidCoin(String),

    #[error("negative amount for coin {0}")]
    NegativeAmount(String),

    #[error("malformed balance entry {0:?}, expected \"coin:amount\"")]
    MalformedBalance(String),

    #[error("invalid decimal amount: {0}")]
    InvalidAmount(#[from] bigdecimal::ParseBigDecimalError),

    #[error("leaf index {index} out of range for {user_count} users")]
    LeafIndexOutOfRange { index: usize, user_count: usize },

    #[error("proof has {actual} siblings, expected {expected}")]
    InvalidProofLength { expected: usize, actual: usize },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
