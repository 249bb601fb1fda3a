//! Error type for the wire codec.

use std::fmt;
use taskspace_core::DimensionKind;
use taskspace_space::SpaceError;

/// A malformed TaskSpec string.
///
/// Never recoverable locally; always propagated to the caller of
/// [`TaskSpec::parse`](crate::TaskSpec::parse).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// A mandatory keyword is absent from its fixed position.
    MissingToken {
        /// The keyword that was expected.
        token: &'static str,
        /// What appeared instead, or `None` at end of input.
        found: Option<String>,
    },
    /// A keyword is present but its value is not.
    MissingValue {
        /// The keyword whose value is missing.
        token: &'static str,
    },
    /// A numeric field does not parse.
    InvalidNumber {
        /// The offending substring.
        text: String,
    },
    /// A parenthesised range is not of the form `(<min> <max>)`.
    MalformedRange {
        /// The offending substring.
        text: String,
    },
    /// A range was required but a plain word (or nothing) appeared.
    ExpectedRange {
        /// The section requiring the range.
        section: &'static str,
        /// What appeared instead, or `None` at end of input.
        found: Option<String>,
    },
    /// `CHARCOUNT` claims more characters than the rest of the input
    /// could possibly name.
    CharCountTooLarge {
        /// The declared count.
        count: usize,
        /// Tokens left in the input after the count.
        available: usize,
    },
    /// The naming section in `EXTRA` lists a different number of names
    /// than there are ranges of that kind.
    NameCountMismatch {
        /// `OBSERVATIONS` or `ACTIONS`.
        section: &'static str,
        /// Kind being named.
        kind: DimensionKind,
        /// Ranges parsed for that kind.
        ranges: usize,
        /// Names found for that kind.
        names: usize,
    },
    /// The bound names do not form a valid space.
    Space(SpaceError),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingToken { token, found } => match found {
                Some(found) => write!(f, "missing token {token} (found '{found}')"),
                None => write!(f, "missing token {token} (end of input)"),
            },
            Self::MissingValue { token } => write!(f, "missing value after {token}"),
            Self::InvalidNumber { text } => write!(f, "invalid number '{text}'"),
            Self::MalformedRange { text } => write!(f, "malformed range '{text}'"),
            Self::ExpectedRange { section, found } => match found {
                Some(found) => write!(f, "{section}: expected (<min> <max>), found '{found}'"),
                None => write!(f, "{section}: expected (<min> <max>), found end of input"),
            },
            Self::CharCountTooLarge { count, available } => write!(
                f,
                "CHARCOUNT {count} exceeds the {available} token(s) left in the input"
            ),
            Self::NameCountMismatch {
                section,
                kind,
                ranges,
                names,
            } => write!(
                f,
                "{section}: {ranges} {kind} range(s) but {names} name(s) in EXTRA"
            ),
            Self::Space(e) => write!(f, "space: {e}"),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for FormatError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}
