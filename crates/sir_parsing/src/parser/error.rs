use sir_tokens::token::Token;
use sir_tokens::LocatedError;
use std::fmt::{Display, Formatter};

/// Represents an error occurring during parsing
#[derive(Debug, thiserror::Error)]
pub struct SyntaxError {
    pub kind: LocatedError<ErrorKind>,
    pub non_terminal_stack: Option<Vec<&'static str>>,
}

impl SyntaxError {
    /// Creates a new error
    pub fn new(
        kind: ErrorKind,
        file: impl AsRef<str>,
        line: usize,
        non_terminals: impl Into<Option<Vec<&'static str>>>,
    ) -> Self {
        Self {
            kind: LocatedError::new(kind, file, line),
            non_terminal_stack: non_terminals.into(),
        }
    }

    /// Gets the kind of error
    pub fn error_kind(&self) -> &ErrorKind {
        self.kind.error()
    }

    /// The line the parser was on when this error occurred
    pub fn line(&self) -> usize {
        self.kind.line()
    }

    /// The token that could not be matched
    pub fn found(&self) -> Option<&Token> {
        match self.error_kind() {
            ErrorKind::Expected { found, .. } | ErrorKind::ExpectedEndOfInput(found) => Some(found),
            ErrorKind::ParserPoisoned => None,
        }
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "syntax error: {}", self.kind)?;
        if let Some(non_terminals) = &self.non_terminal_stack {
            writeln!(f, "non terminal stack:")?;
            for (idx, non_terminal) in non_terminals.iter().enumerate() {
                writeln!(f, "  {}: {}", idx, non_terminal)?;
            }
        }

        Ok(())
    }
}

/// [SyntaxError] kind
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("expected {expected}, found {found}")]
    Expected {
        expected: &'static str,
        found: Token,
    },
    #[error("expected end of input, found {0}")]
    ExpectedEndOfInput(Token),
    #[error("attempting to continue parsing but parser was poisoned")]
    ParserPoisoned,
}

impl ErrorKind {
    pub fn expected(expected: &'static str, found: &Token) -> Self {
        Self::Expected {
            expected,
            found: found.clone(),
        }
    }
}

pub type SyntaxResult<T = ()> = std::result::Result<T, super::Err<SyntaxError>>;
