#![doc = include_str!("../README.md")]

use std::fmt::{Display, Formatter};

pub mod lexeme;
pub mod token;
pub mod value;

/// An error with a location
#[derive(Debug, thiserror::Error)]
pub struct LocatedError<E> {
    error: E,
    file: String,
    line: usize,
}

impl<E> LocatedError<E> {
    pub fn new(error: E, file: impl AsRef<str>, line: usize) -> Self {
        Self {
            error,
            file: file.as_ref().to_string(),
            line,
        }
    }

    /// Gets the wrapped error
    pub fn error(&self) -> &E {
        &self.error
    }

    /// The label of the file this error occurred in
    pub fn file(&self) -> &str {
        &self.file
    }

    /// The line this error was reported on
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<E: Display> Display for LocatedError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.error)?;
        write!(f, "  -> {}:{}", self.file, self.line)
    }
}
