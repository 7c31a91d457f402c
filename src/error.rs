//! Errors raised by the logger.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A numeric level outside `0..=4` was given to the level-setter.
    #[error("provided level ({0}) is invalid")]
    InvalidLevel(i32),

    #[error("unknown level name: {0:?}")]
    UnknownLevelName(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_level_message_names_the_value() {
        assert_eq!(
            Error::InvalidLevel(7).to_string(),
            "provided level (7) is invalid"
        );
    }
}
