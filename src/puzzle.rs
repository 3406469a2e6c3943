use crate::error::CheckError;

/// Borrowed view over the first three fields of a hashcash token.
///
/// Only `timestamp` is interpreted by the checker; `version` and `resource`
/// are exposed for callers that want them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleFields<'a> {
    pub version: &'a str,
    pub resource: &'a str,
    pub timestamp: &'a str,
}

impl<'a> PuzzleFields<'a> {
    /// Split `puzzle` on `:`. Fields past index 2 are ignored.
    pub fn parse(puzzle: &'a str) -> Result<Self, CheckError> {
        let mut fields = puzzle.split(':');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(version), Some(resource), Some(timestamp)) => Ok(Self {
                version,
                resource,
                timestamp,
            }),
            _ => Err(CheckError::MalformedPuzzle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckErrorKind;

    #[test]
    fn splits_first_three_fields() {
        let fields = PuzzleFields::parse("1:resource:261019120000:ext:nonce").unwrap();
        assert_eq!(fields.version, "1");
        assert_eq!(fields.resource, "resource");
        assert_eq!(fields.timestamp, "261019120000");
    }

    #[test]
    fn empty_fields_still_count() {
        let fields = PuzzleFields::parse("::").unwrap();
        assert_eq!(fields.timestamp, "");
    }

    #[test]
    fn fewer_than_three_fields_is_malformed() {
        for puzzle in ["", "a", "a:b"] {
            let err = PuzzleFields::parse(puzzle).expect_err("should be malformed");
            assert_eq!(err.kind(), CheckErrorKind::MalformedPuzzle);
        }
    }
}
