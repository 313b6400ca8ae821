//! Converts infix expressions to postfix using operator precedence.
//!
//! Every operator has exactly one binding strength, regardless of whether it
//! is used as a unary or binary operator, and all operators are left
//! associative.

use std::str::FromStr;
use strum::{AsRefStr, EnumString};
use thiserror::Error;
use tracing::trace;

/// The operators known to the resolver
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, AsRefStr, EnumString)]
pub enum InfixOperator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Subtract,
    #[strum(serialize = "*")]
    Multiply,
    #[strum(serialize = "/")]
    Divide,
    #[strum(serialize = "%")]
    Mod,
    #[strum(serialize = ">>")]
    RShift,
    #[strum(serialize = "<<")]
    LShift,
    #[strum(serialize = "!")]
    Bang,
    #[strum(serialize = "=")]
    Assign,
    #[strum(serialize = "==")]
    Equals,
    #[strum(serialize = "!=", serialize = "<>")]
    NotEquals,
    #[strum(serialize = "++")]
    PlusPlus,
    #[strum(serialize = "--")]
    MinusMinus,
    #[strum(serialize = "+=")]
    PlusAssign,
    #[strum(serialize = "-=")]
    MinusAssign,
    #[strum(serialize = "<")]
    Lt,
    #[strum(serialize = ">")]
    Gt,
    #[strum(serialize = "<=")]
    Leq,
    #[strum(serialize = ">=")]
    Geq,
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
    #[strum(serialize = ">>=")]
    RShiftAssign,
    #[strum(serialize = "<<=")]
    LShiftAssign,
    #[strum(serialize = "|")]
    BitOr,
    #[strum(serialize = "&")]
    BitAnd,
    #[strum(serialize = "^")]
    BitXor,
    #[strum(serialize = "&&")]
    And,
    #[strum(serialize = "||")]
    Or,
}

impl InfixOperator {
    pub fn lookup(lexeme: &str) -> Option<Self> {
        Self::from_str(lexeme).ok()
    }

    /// The binding strength. Lower binds tighter.
    pub fn precedence(&self) -> u8 {
        use InfixOperator::*;
        match self {
            Bang | PlusPlus | MinusMinus => 2,
            Multiply | Divide | Mod => 3,
            Add | Subtract => 4,
            RShift | LShift | Gt | Leq | Geq => 5,
            Lt => 6,
            Equals | NotEquals => 7,
            BitAnd => 8,
            BitXor => 9,
            BitOr => 10,
            And => 11,
            Or => 12,
            Assign | PlusAssign | MinusAssign | TimesAssign | DivAssign | ModAssign
            | AndAssign | OrAssign | XorAssign | RShiftAssign | LShiftAssign => 14,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("')' at token {0} has no matching '('")]
    UnmatchedClose(usize),
    #[error("'(' at token {0} is never closed")]
    UnclosedOpen(usize),
}

#[derive(Debug)]
enum Pending<'a> {
    Operator(&'a str, InfixOperator),
    /// An open parenthesis, with its index in the input
    Open(usize),
}

/// Converts a whitespace separated infix expression into postfix.
///
/// Every token in the output is followed by a single space.
///
/// # Examples
/// ```
/// # use sir_parsing::precedence::postfix;
/// assert_eq!(postfix("a + b * c").unwrap(), "a b c * + ");
/// ```
pub fn postfix(infix: &str) -> Result<String, ResolveError> {
    let mut output = String::new();
    let mut stack: Vec<Pending> = vec![];
    let mut emit = |token: &str| {
        output.push_str(token);
        output.push(' ');
    };

    for (index, token) in infix.split_whitespace().enumerate() {
        if let Some(operator) = InfixOperator::lookup(token) {
            // pop everything binding at least as tightly
            while let Some(Pending::Operator(top, top_op)) = stack.last() {
                if top_op.precedence() > operator.precedence() {
                    break;
                }
                emit(top);
                stack.pop();
            }
            stack.push(Pending::Operator(token, operator));
        } else if token == "(" {
            stack.push(Pending::Open(index));
        } else if token == ")" {
            loop {
                match stack.pop() {
                    Some(Pending::Operator(top, _)) => emit(top),
                    Some(Pending::Open(_)) => break,
                    None => return Err(ResolveError::UnmatchedClose(index)),
                }
            }
        } else {
            emit(token);
        }
        trace!("after {token:?}: stack={stack:?}");
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(top, _) => emit(top),
            Pending::Open(index) => return Err(ResolveError::UnclosedOpen(index)),
        }
    }

    Ok(output)
}
