use thiserror::Error;

/// Recoverable errors raised by table mutation, flag encoding and tone parsing.
///
/// None of these leave an [`AliasTable`](crate::AliasTable) in a modified state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The alias is already registered; the existing code is kept.
    #[error("emoji alias already exists: {alias:?} => {code:?}")]
    AlreadyExists {
        alias: String,
        code: String,
    },
    /// The alias contains whitespace and could never be matched by the scanner.
    #[error("emoji alias is not valid: {0:?}")]
    InvalidAlias(String),
    /// Country codes are exactly two characters long.
    #[error("not a valid country code: {0:?}")]
    InvalidCountryCode(String),
    #[error("unknown skin tone: {0:?}")]
    UnknownTone(String),
}

impl Error {
    pub(crate) fn already_exists(alias: impl Into<String>, code: impl Into<String>) -> Self {
        Self::AlreadyExists {
            alias: alias.into(),
            code: code.into(),
        }
    }
}
