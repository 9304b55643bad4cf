//! Settings a player may adjust and their defaults.

use tracing::warn;

/// Undo steps kept when nothing else is configured.
pub const DEFAULT_UNDO_LIMIT: usize = 5;

/// Parse a user-supplied undo limit, falling back to [`DEFAULT_UNDO_LIMIT`] for anything that is not a non-negative integer.
pub fn parse_undo_limit(raw: &str) -> usize {
    match raw.trim().parse() {
        Ok(limit) => limit,
        Err(err) => {
            warn!(raw, %err, "unusable undo limit, using {DEFAULT_UNDO_LIMIT}");
            DEFAULT_UNDO_LIMIT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_undo_limit, DEFAULT_UNDO_LIMIT};

    #[test]
    fn undo_limit_parses_integers() {
        assert_eq!(parse_undo_limit("17"), 17);
        assert_eq!(parse_undo_limit(" 3 "), 3);
        assert_eq!(parse_undo_limit("0"), 0);
    }

    #[test]
    fn undo_limit_falls_back() {
        assert_eq!(parse_undo_limit("-2"), DEFAULT_UNDO_LIMIT);
        assert_eq!(parse_undo_limit("lots"), DEFAULT_UNDO_LIMIT);
        assert_eq!(parse_undo_limit(""), DEFAULT_UNDO_LIMIT);
    }
}
