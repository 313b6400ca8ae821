//! Literal values carried by matched literal tokens

use crate::token::{Token, TokenKind};
use std::fmt::{Display, Formatter};
use std::num::{ParseFloatError, ParseIntError};
use strum::AsRefStr;

/// The kind of a [`Value`]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ValueKind {
    Integer,
    Float,
    String,
    Bool,
    Null,
}

#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    #[error("{0:?} is not an integer")]
    NotAnInteger(Option<String>, #[source] Option<ParseIntError>),
    #[error("{0:?} is not a float")]
    NotAFloat(Option<String>, #[source] Option<ParseFloatError>),
}

/// A tagged literal. Numeric interpretations are parsed from the text on
/// every access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    kind: ValueKind,
    text: Option<String>,
}

impl Value {
    /// A number, which is a float if it contains a decimal point
    pub fn number(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = if text.contains('.') {
            ValueKind::Float
        } else {
            ValueKind::Integer
        };
        Self {
            kind,
            text: Some(text),
        }
    }

    pub fn string(text: impl Into<String>) -> Self {
        Self {
            kind: ValueKind::String,
            text: Some(text.into()),
        }
    }

    pub fn bool(text: impl Into<String>) -> Self {
        Self {
            kind: ValueKind::Bool,
            text: Some(text.into()),
        }
    }

    pub fn null() -> Self {
        Self {
            kind: ValueKind::Null,
            text: None,
        }
    }

    /// Creates the value of a literal token, or `None` for a token that is not a literal
    pub fn from_token(token: &Token) -> Option<Self> {
        match token.kind() {
            TokenKind::Number => Some(Self::number(token.text())),
            TokenKind::String => Some(Self::string(token.text())),
            TokenKind::Bool => Some(Self::bool(token.text())),
            TokenKind::Null => Some(Self::null()),
            _ => None,
        }
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// True only when the text is exactly `true`
    pub fn as_bool(&self) -> bool {
        self.text.as_deref() == Some("true")
    }

    pub fn as_int(&self) -> Result<i64, ValueError> {
        match &self.text {
            Some(text) => text
                .parse()
                .map_err(|e| ValueError::NotAnInteger(Some(text.clone()), Some(e))),
            None => Err(ValueError::NotAnInteger(None, None)),
        }
    }

    pub fn as_float(&self) -> Result<f64, ValueError> {
        match &self.text {
            Some(text) => text
                .parse()
                .map_err(|e| ValueError::NotAFloat(Some(text.clone()), Some(e))),
            None => Err(ValueError::NotAFloat(None, None)),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.text) {
            (ValueKind::String, Some(text)) => write!(f, "{text:?}"),
            (_, Some(text)) => write!(f, "{text}"),
            (_, None) => write!(f, "null"),
        }
    }
}
