//! Errors raised by the clause engine and its configuration surface.

/// Errors from case construction, clause registration and unwrapping.
///
/// `Arity` and `MissingArgument` are programmer errors: they surface at the
/// registration call and are never recovered inside the engine. Errors
/// produced by a `then_throw` action are returned verbatim and never wrapped
/// in this type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaseError {
    /// A clause's criteria count differs from the subject count.
    #[error("clause has {actual} criteria, but the match has {expected} subjects")]
    Arity {
        /// Number of subjects in the match.
        expected: usize,
        /// Number of criteria in the clause.
        actual: usize,
    },

    /// The subject tuple or a criteria list was absent.
    #[error("missing {what}")]
    MissingArgument {
        /// What was missing (`"subjects"` or `"criteria"`).
        what: &'static str,
    },

    /// `or_no_match` was called and no clause matched.
    #[error("no clause matched")]
    NoClauseMatched,

    /// `get` was called and no clause matched.
    #[error("match produced no result")]
    EmptyResult,

    /// A regex criterion failed to compile.
    #[error("invalid pattern \"{pattern}\": {message}")]
    InvalidPattern {
        /// The pattern that failed to compile.
        pattern: String,
        /// The underlying error message.
        message: String,
    },

    /// A regex pattern exceeds [`MAX_REGEX_PATTERN_LENGTH`](crate::MAX_REGEX_PATTERN_LENGTH).
    #[error("pattern length is {len}, but maximum allowed is {max}")]
    PatternTooLong {
        /// Actual length of the pattern.
        len: usize,
        /// Maximum allowed length.
        max: usize,
    },

    /// Configuration decoding failed.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// The underlying error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = CaseError::Arity {
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "clause has 2 criteria, but the match has 3 subjects"
        );
        assert_eq!(
            CaseError::MissingArgument { what: "subjects" }.to_string(),
            "missing subjects"
        );
        assert_eq!(CaseError::NoClauseMatched.to_string(), "no clause matched");
    }
}
