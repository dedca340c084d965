use core::fmt;

/// Everything that can go wrong in a [`crate::format`] call.
///
/// There are exactly two public taxa: a config error, raised before any lexing happens, and a
/// parse error, raised by the lexer or the parser. `RecursionLimitExceeded` is a third,
/// ambient-robustness case that is not part of the documented grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A problem with the options passed to `format`, not with the SQL text itself.
    Config(String),
    /// The lexer found a byte no rule could consume, or the parser needed a token that
    /// wasn't there.
    Parse {
        message: String,
        line: usize,
        column: usize,
        hint: String,
    },
    /// The parser recursed past its configured depth limit.
    RecursionLimitExceeded,
}

impl Error {
    pub fn config<S: Into<String>>(message: S) -> Error {
        Error::Config(message.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(message) => write!(f, "{message}"),
            Error::Parse {
                message,
                line,
                column,
                hint,
            } => write!(
                f,
                "Parse error: {message} at line {line} column {column}.\n{hint}"
            ),
            Error::RecursionLimitExceeded => {
                write!(f, "Parse error: recursion limit exceeded")
            }
        }
    }
}

impl std::error::Error for Error {}
