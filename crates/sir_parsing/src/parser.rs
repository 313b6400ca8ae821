//! The predictive recognizer for the top level grammar

use std::error::Error;
use std::fmt::{Display, Formatter};

mod error;
mod grammar;
mod recognizer;
mod traits;

pub use error::*;
pub use grammar::DeclMode;
pub use recognizer::Parser;
pub use traits::Production;

/// Err enum used to represent recoverable and non-recoverable errors.
///
/// A recoverable error from a production means it did not match and consumed
/// nothing, so the next alternative can be tried.
#[derive(Debug)]
pub enum Err<E> {
    /// a recoverable error
    Error(E),
    /// a non-recoverable error
    Failure(E),
}

impl<E> Err<E> {
    /// Makes this error non-recoverable. Used once a production has committed.
    pub fn cut(self) -> Self {
        match self {
            Err::Error(e) => Err::Failure(e),
            e @ Err::Failure(_) => e,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Err::Failure(_))
    }

    pub fn into_inner(self) -> E {
        match self {
            Err::Error(e) | Err::Failure(e) => e,
        }
    }
}

impl<E: Error> Display for Err<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Err::Error(e) => {
                write!(f, "recoverable error: {e}")
            }
            Err::Failure(e) => {
                write!(f, "unrecoverable error: {e}")
            }
        }
    }
}

impl<E: Error> Error for Err<E> {}
