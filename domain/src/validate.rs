//! Lightweight input parsing helpers. Keep logic minimal and deterministic.

use crate::{CoreError, UserId};

/// Parse a user id taken from a path segment or CLI argument.
pub fn parse_user_id(raw: &str) -> Result<UserId, CoreError> {
    raw.trim()
        .parse::<UserId>()
        .map_err(|_| CoreError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids() {
        assert_eq!(parse_user_id("1"), Ok(1));
        assert_eq!(parse_user_id(" 42 "), Ok(42));
        assert_eq!(parse_user_id("-3"), Ok(-3));
    }

    #[test]
    fn rejects_non_numeric() {
        assert_eq!(
            parse_user_id("abc"),
            Err(CoreError::InvalidId("abc".into()))
        );
        assert!(parse_user_id("").is_err());
        assert!(parse_user_id("1.5").is_err());
    }
}
