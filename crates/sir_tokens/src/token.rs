//! A lexical token from a source file, along with streams for said token

use crate::lexeme::{Keyword, LiteralWord, Operator, Punctuation};
use itertools::Itertools;
use std::collections::VecDeque;
use std::fmt::{Debug, Display, Formatter};
use std::iter;
use strum::AsRefStr;

/// A lexical token from a source file
#[derive(Clone)]
pub struct Token {
    kind: TokenKind,
    text: String,
    line: usize,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    pub fn keyword(keyword: Keyword, line: usize) -> Self {
        Self::new(TokenKind::Keyword, keyword.as_ref(), line)
    }

    pub fn identifier(name: impl Into<String>, line: usize) -> Self {
        Self::new(TokenKind::Identifier, name, line)
    }

    pub fn number(value: impl Into<String>, line: usize) -> Self {
        Self::new(TokenKind::Number, value, line)
    }

    /// Creates a string token from its decoded value
    pub fn string(value: impl Into<String>, line: usize) -> Self {
        Self::new(TokenKind::String, value, line)
    }

    pub fn bool(value: bool, line: usize) -> Self {
        Self::new(TokenKind::Bool, if value { "true" } else { "false" }, line)
    }

    pub fn null(line: usize) -> Self {
        Self::new(TokenKind::Null, LiteralWord::Null.as_ref(), line)
    }

    /// The end of input marker
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }

    /// Creates a punctuation token, falling back to a null token for a char
    /// outside the punctuation table.
    pub fn punctuation(c: char, line: usize) -> Self {
        match Punctuation::lookup(c) {
            Some(punctuation) => Self::new(punctuation.kind(), punctuation.as_ref(), line),
            None => Self::null(line),
        }
    }

    /// Creates an operator token, falling back to a null token for a lexeme
    /// that has no operator kind.
    pub fn operator(lexeme: &str, line: usize) -> Self {
        match lexeme.parse::<Operator>().ok().and_then(|op| op.kind()) {
            Some(kind) => Self::new(kind, lexeme, line),
            None => Self::null(line),
        }
    }

    /// Gets the kind for this token
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The literal text of the token. For strings this is the decoded value.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The line this token started on
    pub fn line(&self) -> usize {
        self.line
    }

    /// Whether this token is the given keyword
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword && self.text == keyword.as_ref()
    }

    /// Text that scans back into an equivalent token
    pub fn source_text(&self) -> String {
        match self.kind {
            TokenKind::String => format!("\"{}\"", escape(&self.text, true)),
            _ => self.text.clone(),
        }
    }

    fn repr(&self) -> String {
        match self.kind {
            TokenKind::Keyword
            | TokenKind::Identifier
            | TokenKind::Number
            | TokenKind::Bool
            | TokenKind::Null
            | TokenKind::Eof => self.text.clone(),
            TokenKind::String => format!("\"{}\"", escape(&self.text, false)),
            _ => format!("'{}'", self.text),
        }
    }
}

fn escape(s: &str, quotes: bool) -> String {
    s.chars()
        .map(|c| match c {
            '\n' => "\\n".to_string(),
            '\t' => "\\t".to_string(),
            '\r' => "\\r".to_string(),
            '\u{08}' => "\\b".to_string(),
            '\0' if quotes => "\\0".to_string(),
            '"' if quotes => "\\\"".to_string(),
            c => c.to_string(),
        })
        .collect()
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:({}, {})", self.line, self.kind, self.repr())
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl Eq for Token {}

/// The kind for this token
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    String,
    Bool,
    Null,
    /// EOF, will only appear at the end of a token stream
    Eof,

    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Dot,
    Comma,
    Colon,
    Semicolon,

    NotEquals,
    Equals,
    Geq,
    Leq,
    Gt,
    Lt,
    PlusPlus,
    MinusMinus,
    /// `=`
    StrictAssign,
    /// Any compound assignment, `+=`, `>>=`, etc.
    Assign,
    Plus,
    Minus,
    Times,
    Div,
    Mod,
    Not,
    And,
    Or,
    BitAnd,
    BitOr,
    BitNot,
    BitXor,
    RShift,
    LShift,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// A stream of tokens
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStream(VecDeque<Token>);

impl FromIterator<Token> for TokenStream {
    fn from_iter<T: IntoIterator<Item = Token>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }
}

impl Default for TokenStream {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStream {
    #[inline]
    pub fn new() -> Self {
        TokenStream::from_iter(iter::empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the remaining tokens without consuming them
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.0.iter()
    }

    /// The next token, without consuming it
    pub fn front(&self) -> Option<&Token> {
        self.0.front()
    }

    /// Rebuilds source text from the tokens, separated by single spaces.
    pub fn source_text(&self) -> String {
        self.0
            .iter()
            .filter(|token| token.kind != TokenKind::Eof)
            .map(Token::source_text)
            .join(" ")
    }
}
