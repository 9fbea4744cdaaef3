use thiserror::Error;

/// Failures of the scroll utility itself.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScrollError {
    #[error("a grid is required")]
    MissingTarget,

    #[error("could not read from client: {0}")]
    InvalidResponse(#[from] ResponseError),
}

/// Why a client answer to a position read could not be decoded.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResponseError {
    #[error("result is not a json array, but {found}")]
    NotAnArray { found: String },

    #[error("expected at least 2 entries, got {len}")]
    TooShort { len: usize },

    #[error("entry {index} is not a number, but {found}")]
    NotNumeric { index: usize, found: String },
}

/// Text that does not look like `left,top`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParsePositionError {
    #[error("expected `left,top`, got `{0}`")]
    MissingSeparator(String),

    #[error("invalid number `{0}`")]
    InvalidNumber(String),
}
