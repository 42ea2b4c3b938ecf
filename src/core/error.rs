use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("invalid fee rate '{0}': expected a decimal fraction in [0, 1)")]
    InvalidFeeRate(String),

    #[error("token identifier cannot be empty")]
    EmptyToken,

    #[error("invalid amount '{0}': expected a non-negative integer")]
    InvalidAmount(String),

    #[error("requested {requested} hops, at most {limit} allowed")]
    HopLimitExceeded { requested: usize, limit: usize },

    #[error("unsupported pool file '{0}': expected a .json or .csv extension")]
    UnsupportedPoolFile(String),
}
