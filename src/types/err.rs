/*!
Error types used in the library.

- Most of these are very unlikely to occur during use.
- Some are external --- e.g. a parse error is returned when a problem file does not follow the supported TPTP subset, together with the line and column at which reading failed.
- A failure to unify is *never* an error, and likewise exhausting a soft budget surfaces as a [report](crate::reports::Report) rather than an error.

Names of the error enums --- for the most part --- overlap with corresponding structs.
*/

/// A union of varied error kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error related to parsing.
    Parse(ParseError),

    /// An error when building a clause set.
    Build(BuildError),

    /// An error in the clause database.
    ClauseDB(ClauseDBError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Build(e) => write!(f, "{e}"),
            Self::ClauseDB(e) => write!(f, "clause database error: {e:?}"),
        }
    }
}

/// Errors during parsing.
///
/// Parse errors are fatal to a run, and carry the line and column of the offending input where available.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// No file was found at the given path.
    NoFile(String),

    /// A character outside the supported TPTP subset.
    UnexpectedCharacter { line: usize, column: usize, character: char },

    /// The input ended while a statement was still open.
    UnexpectedEnd,

    /// Some other token was required at this point of the input.
    UnexpectedToken {
        line: usize,
        column: usize,
        expected: &'static str,
        found: String,
    },

    /// A role outside the recognised TPTP roles.
    UnsupportedRole { line: usize, column: usize, role: String },

    /// A file included (transitively) includes itself.
    IncludeCycle(String),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoFile(path) => write!(f, "unable to read problem file: {path}"),

            Self::UnexpectedCharacter { line, column, character } => {
                write!(f, "{line}:{column}: unexpected character {character:?}")
            }

            Self::UnexpectedEnd => write!(f, "unexpected end of input"),

            Self::UnexpectedToken { line, column, expected, found } => {
                write!(f, "{line}:{column}: expected {expected}, found {found}")
            }

            Self::UnsupportedRole { line, column, role } => {
                write!(f, "{line}:{column}: unsupported formula role {role:?}")
            }

            Self::IncludeCycle(path) => write!(f, "include cycle through {path}"),
        }
    }
}

/// Errors when building a clause set, prior to saturation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A symbol was used with two distinct arities.
    ArityMismatch {
        symbol: String,
        expected: usize,
        found: usize,
    },

    /// A symbol was used both as a function and as a predicate.
    KindMismatch { symbol: String },

    /// A fof formula was read while the input was assumed to be in clause normal form.
    FofWithoutClausification,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArityMismatch { symbol, expected, found } => {
                write!(f, "symbol {symbol} used with arity {found}, expected {expected}")
            }

            Self::KindMismatch { symbol } => {
                write!(f, "symbol {symbol} used both as a function and as a predicate")
            }

            Self::FofWithoutClausification => {
                write!(f, "fof input requires clausification to be enabled")
            }
        }
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// A clause key failed to unlock a clause.
    Missing,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}
