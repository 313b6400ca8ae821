//! The fixed lexeme tables of the language.
//!
//! Each table is a closed enum; string lookups go through the derived
//! [`FromStr`](std::str::FromStr) implementations rather than scanning lists.

use crate::token::TokenKind;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use strum::{AsRefStr, EnumIter, EnumString};

/// Reserved words that are scanned as [`TokenKind::Keyword`] tokens
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    Routine,
    Make,
    Let,
    Get,
    Register,
    Finalize,
    Var,
    Undef,
    Goto,
    If,
    Else,
    Do,
    While,
    For,
    Unless,
    Return,
    Enum,
    Struct,
    Static,
    Extern,
}

impl Keyword {
    /// Looks up the keyword for an exact lexeme
    pub fn lookup(lexeme: &str) -> Option<Self> {
        Self::from_str(lexeme).ok()
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// Words that scan as literal tokens instead of identifiers
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum LiteralWord {
    Null,
    True,
    False,
}

impl LiteralWord {
    pub fn lookup(lexeme: &str) -> Option<Self> {
        Self::from_str(lexeme).ok()
    }
}

/// Single character punctuation
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, AsRefStr, EnumIter)]
pub enum Punctuation {
    #[strum(serialize = ".")]
    Dot,
    #[strum(serialize = ",")]
    Comma,
    #[strum(serialize = "{")]
    LBrace,
    #[strum(serialize = "}")]
    RBrace,
    #[strum(serialize = ":")]
    Colon,
    #[strum(serialize = "(")]
    LParen,
    #[strum(serialize = ")")]
    RParen,
    #[strum(serialize = "[")]
    LBracket,
    #[strum(serialize = "]")]
    RBracket,
    #[strum(serialize = ";")]
    Semicolon,
}

impl Punctuation {
    /// Looks up the punctuation for a character
    pub fn lookup(c: char) -> Option<Self> {
        Some(match c {
            '.' => Self::Dot,
            ',' => Self::Comma,
            '{' => Self::LBrace,
            '}' => Self::RBrace,
            ':' => Self::Colon,
            '(' => Self::LParen,
            ')' => Self::RParen,
            '[' => Self::LBracket,
            ']' => Self::RBracket,
            ';' => Self::Semicolon,
            _ => return None,
        })
    }

    /// The token kind for this punctuation
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Dot => TokenKind::Dot,
            Self::Comma => TokenKind::Comma,
            Self::LBrace => TokenKind::LBrace,
            Self::RBrace => TokenKind::RBrace,
            Self::Colon => TokenKind::Colon,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::LBracket => TokenKind::LBracket,
            Self::RBracket => TokenKind::RBracket,
            Self::Semicolon => TokenKind::Semicolon,
        }
    }
}

/// Every operator lexeme known to the token model.
///
/// The scanner only recognizes the lexemes for which [`Operator::is_scanned`]
/// holds, and a few scanned lexemes (`**`, `~=`) have no token kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, AsRefStr, EnumString, EnumIter)]
pub enum Operator {
    #[strum(serialize = "=")]
    StrictAssign,
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "*")]
    Times,
    #[strum(serialize = "/")]
    Div,
    #[strum(serialize = "%")]
    Mod,
    #[strum(serialize = "**")]
    Pow,
    #[strum(serialize = "++")]
    PlusPlus,
    #[strum(serialize = "--")]
    MinusMinus,
    #[strum(serialize = ">>")]
    RShift,
    #[strum(serialize = "<<")]
    LShift,
    #[strum(serialize = "==")]
    Equals,
    #[strum(serialize = "!=")]
    NotEquals,
    #[strum(serialize = ">=")]
    Geq,
    #[strum(serialize = "<=")]
    Leq,
    #[strum(serialize = ">")]
    Gt,
    #[strum(serialize = "<")]
    Lt,
    #[strum(serialize = "+=")]
    PlusAssign,
    #[strum(serialize = "-=")]
    MinusAssign,
    #[strum(serialize = "*=")]
    TimesAssign,
    #[strum(serialize = "/=")]
    DivAssign,
    #[strum(serialize = "%=")]
    ModAssign,
    #[strum(serialize = "&=")]
    AndAssign,
    #[strum(serialize = "|=")]
    OrAssign,
    #[strum(serialize = "^=")]
    XorAssign,
    #[strum(serialize = "~=")]
    TildeAssign,
    #[strum(serialize = ">>=")]
    RShiftAssign,
    #[strum(serialize = "<<=")]
    LShiftAssign,
    #[strum(serialize = "!")]
    Not,
    #[strum(serialize = "&&")]
    And,
    #[strum(serialize = "||")]
    Or,
    #[strum(serialize = "~")]
    BitNot,
    #[strum(serialize = "&")]
    BitAnd,
    #[strum(serialize = "|")]
    BitOr,
    #[strum(serialize = "^")]
    BitXor,
}

impl Operator {
    /// Looks up an operator from the scanner's table
    pub fn lookup(lexeme: &str) -> Option<Self> {
        Self::from_str(lexeme).ok().filter(Self::is_scanned)
    }

    /// Whether the scanner recognizes this lexeme.
    ///
    /// `%=` is only reachable through the token factory; `%` always starts an
    /// identifier when scanning.
    pub fn is_scanned(&self) -> bool {
        !matches!(self, Self::ModAssign)
    }

    /// Gets the token kind of this operator, if it has one.
    ///
    /// Compound assignments all share [`TokenKind::Assign`]; the operation
    /// they denote is only recoverable from the lexeme.
    pub fn kind(&self) -> Option<TokenKind> {
        Some(match self {
            Self::StrictAssign => TokenKind::StrictAssign,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Times => TokenKind::Times,
            Self::Div => TokenKind::Div,
            Self::Mod => TokenKind::Mod,
            Self::PlusPlus => TokenKind::PlusPlus,
            Self::MinusMinus => TokenKind::MinusMinus,
            Self::RShift => TokenKind::RShift,
            Self::LShift => TokenKind::LShift,
            Self::Equals => TokenKind::Equals,
            Self::NotEquals => TokenKind::NotEquals,
            Self::Geq => TokenKind::Geq,
            Self::Leq => TokenKind::Leq,
            Self::Gt => TokenKind::Gt,
            Self::Lt => TokenKind::Lt,
            Self::PlusAssign
            | Self::MinusAssign
            | Self::TimesAssign
            | Self::DivAssign
            | Self::ModAssign
            | Self::AndAssign
            | Self::OrAssign
            | Self::XorAssign
            | Self::RShiftAssign
            | Self::LShiftAssign => TokenKind::Assign,
            Self::Not => TokenKind::Not,
            Self::And => TokenKind::And,
            Self::Or => TokenKind::Or,
            Self::BitNot => TokenKind::BitNot,
            Self::BitAnd => TokenKind::BitAnd,
            Self::BitOr => TokenKind::BitOr,
            Self::BitXor => TokenKind::BitXor,
            Self::Pow | Self::TildeAssign => return None,
        })
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(Keyword::lookup("routine"), Some(Keyword::Routine));
        assert_eq!(Keyword::lookup("extern"), Some(Keyword::Extern));
        assert_eq!(Keyword::lookup("Routine"), None);
        assert_eq!(Keyword::lookup("null"), None);
        assert_eq!(Keyword::iter().count(), 20);
    }

    #[test]
    fn test_keywords_round_trip_through_display() {
        for keyword in Keyword::iter() {
            assert_eq!(Keyword::lookup(&keyword.to_string()), Some(keyword));
        }
    }

    #[test]
    fn test_punctuation_lookup() {
        for punctuation in Punctuation::iter() {
            let c = punctuation
                .as_ref()
                .chars()
                .next()
                .expect("punctuation is one char");
            assert_eq!(Punctuation::lookup(c), Some(punctuation));
        }
        assert_eq!(Punctuation::lookup('"'), None);
    }

    #[test]
    fn test_scanned_operators() {
        assert_eq!(Operator::lookup(">>="), Some(Operator::RShiftAssign));
        assert_eq!(Operator::lookup("**"), Some(Operator::Pow));
        assert_eq!(Operator::lookup("%="), None);
        assert_eq!(Operator::lookup("<>"), None);
        assert_eq!(Operator::iter().filter(Operator::is_scanned).count(), 34);
    }

    #[test]
    fn test_compound_assignments_collapse() {
        for lexeme in ["+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", ">>=", "<<="] {
            let op = Operator::from_str(lexeme).expect("known operator");
            assert_eq!(op.kind(), Some(TokenKind::Assign), "{lexeme}");
        }
        assert_eq!(Operator::StrictAssign.kind(), Some(TokenKind::StrictAssign));
        assert_eq!(Operator::Pow.kind(), None);
        assert_eq!(Operator::TildeAssign.kind(), None);
    }
}
