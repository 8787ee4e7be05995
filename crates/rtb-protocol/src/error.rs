//! Errors raised while decoding server messages.

use thiserror::Error;

use crate::message::Keyword;

/// A line with a known keyword whose arguments could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A required positional argument was absent.
    #[error("{keyword} is missing its {argument} argument")]
    MissingArgument {
        /// Keyword whose arguments were being decoded.
        keyword: Keyword,
        /// Name of the absent argument.
        argument: &'static str,
    },
    /// A positional argument was present but not a number.
    #[error("{keyword} has a non-numeric {argument} argument '{token}'")]
    InvalidNumber {
        /// Keyword whose arguments were being decoded.
        keyword: Keyword,
        /// Name of the malformed argument.
        argument: &'static str,
        /// The offending token.
        token: String,
    },
}

impl ParseError {
    /// Keyword of the line that failed to decode.
    #[must_use]
    pub const fn keyword(&self) -> Keyword {
        match self {
            Self::MissingArgument { keyword, .. } | Self::InvalidNumber { keyword, .. } => *keyword,
        }
    }
}
