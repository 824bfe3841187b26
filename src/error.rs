use crate::transaction::TaxHead;
use thiserror::Error;

/// Errors raised while aggregating, settling, or moving data in and out of the engine
#[derive(Debug, Error)]
pub enum GstError {
    #[error("arithmetic overflow on {head} {bucket}")]
    ArithmeticOverflow { head: TaxHead, bucket: &'static str },

    #[error("arithmetic overflow summing {bucket} total")]
    TotalOverflow { bucket: &'static str },

    #[error("negative {head} amount {amount} rejected")]
    NegativeAmount {
        head: TaxHead,
        amount: rust_decimal::Decimal,
    },

    #[error("invalid precedence table: {0}")]
    InvalidPrecedence(String),

    #[error("invalid record {line}: {source}")]
    InvalidRecord { line: u64, source: InputTxnErr },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons a single raw CSV record cannot become a transaction
#[derive(Debug, Error, PartialEq)]
pub enum InputTxnErr {
    #[error("unsupported transaction type `{0}`")]
    UnsupportedType(String),

    #[error("unparseable {head} amount `{raw}`")]
    BadAmount { head: TaxHead, raw: String },

    #[error("unknown tax head `{0}`")]
    UnknownHead(String),
}
