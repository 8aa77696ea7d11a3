//! Reference string parsing.
//!
//! Accepts non-negative integers separated by commas, whitespace or both
//! (`"1, 2 3,4"`). Empty input is an empty reference string.

use pagesim_core::PageNumber;
use thiserror::Error;

/// Malformed reference string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token is not a non-negative integer that fits in 32 bits.
    #[error("invalid page number '{token}' at position {position}")]
    InvalidPage {
        /// The offending token.
        token: String,
        /// 1-based index of the token.
        position: usize,
    },
}

/// Parses a reference string.
pub fn parse_reference(input: &str) -> Result<Vec<PageNumber>, ParseError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token
                .parse::<u32>()
                .map(PageNumber::new)
                .map_err(|_| ParseError::InvalidPage {
                    token: token.to_string(),
                    position: i + 1,
                })
        })
        .collect()
}
