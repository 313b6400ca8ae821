//! nom parsers recognizing a single lexeme at the start of the input

use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take, take_till, take_until, take_while, take_while1};
use nom::character::complete::{anychar, char, digit0, digit1, satisfy};
use nom::combinator::{map, opt, recognize, value, verify};
use nom::error::{ErrorKind, ParseError};
use nom::multi::fold_many0;
use nom::sequence::{pair, terminated};
use nom::{IResult, Parser};
use sir_tokens::lexeme::{Keyword, LiteralWord, Operator, Punctuation};
use sir_tokens::token::Token;

pub(super) type Result<'a, O> = IResult<&'a str, O, ScanError<'a>>;

/// A lexeme recognized before it's been given a line
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Scanned<'a> {
    /// whitespace or a comment
    Insignificant,
    Word(&'a str),
    Punct(char),
    Str(String),
    Number(&'a str),
    Op(&'a str),
}

impl Scanned<'_> {
    /// The token for this lexeme, if it's significant
    pub(super) fn into_token(self, line: usize) -> Option<Token> {
        let token = match self {
            Scanned::Insignificant => return None,
            Scanned::Word(word) => match (Keyword::lookup(word), LiteralWord::lookup(word)) {
                (Some(keyword), _) => Token::keyword(keyword, line),
                (None, Some(LiteralWord::Null)) => Token::null(line),
                (None, Some(LiteralWord::True)) => Token::bool(true, line),
                (None, Some(LiteralWord::False)) => Token::bool(false, line),
                (None, None) => Token::identifier(word, line),
            },
            Scanned::Punct(c) => Token::punctuation(c, line),
            Scanned::Str(value) => Token::string(value, line),
            Scanned::Number(lexeme) => Token::number(lexeme, line),
            Scanned::Op(lexeme) => Token::operator(lexeme, line),
        };
        Some(token)
    }
}

/// Why scanning stopped. Each variant holds the input the error is reported at.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum ScanError<'a> {
    Mismatch(&'a str, ErrorKind),
    UnexpectedChar(&'a str),
    /// the lexeme up to and including the second decimal point
    MalformedNumber(&'a str),
    UnterminatedString(&'a str),
    UnterminatedComment(&'a str),
    /// starts at the char following the backslash
    InvalidEscape(&'a str),
}

impl<'a> ScanError<'a> {
    pub(super) fn input(&self) -> &'a str {
        match self {
            ScanError::Mismatch(input, _)
            | ScanError::UnexpectedChar(input)
            | ScanError::MalformedNumber(input)
            | ScanError::UnterminatedString(input)
            | ScanError::UnterminatedComment(input)
            | ScanError::InvalidEscape(input) => input,
        }
    }
}

impl<'a> ParseError<&'a str> for ScanError<'a> {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        ScanError::Mismatch(input, kind)
    }

    fn append(_: &'a str, _: ErrorKind, other: Self) -> Self {
        other
    }
}

/// Scans one lexeme. Input matching none of them is an unexpected char.
pub(super) fn scan(src: &str) -> Result<Scanned> {
    alt((
        line_comment,
        block_comment,
        whitespace,
        word,
        punctuation,
        string,
        number,
        operator,
    ))(src)
    .map_err(|e| match e {
        nom::Err::Error(_) => nom::Err::Failure(ScanError::UnexpectedChar(src)),
        e => e,
    })
}

/// Runs `opener` then `body`. After the opener matches, `body` not matching
/// fails with `error` built from the input at the opener.
fn committed<'a, O1, O2, F, G>(
    mut opener: F,
    mut body: G,
    error: fn(&'a str) -> ScanError<'a>,
) -> impl FnMut(&'a str) -> Result<'a, O2>
where
    F: Parser<&'a str, O1, ScanError<'a>>,
    G: Parser<&'a str, O2, ScanError<'a>>,
{
    move |src: &'a str| {
        let (rest, _) = opener.parse(src)?;
        body.parse(rest).map_err(|e| match e {
            nom::Err::Error(_) => nom::Err::Failure(error(src)),
            e => e,
        })
    }
}

/// Up to, but not including, the line break
fn line_comment(src: &str) -> Result<Scanned> {
    value(
        Scanned::Insignificant,
        pair(tag("//"), take_till(|c: char| c == '\n')),
    )(src)
}

fn block_comment(src: &str) -> Result<Scanned> {
    value(
        Scanned::Insignificant,
        committed(
            tag("/*"),
            terminated(take_until("*/"), tag("*/")),
            ScanError::UnterminatedComment,
        ),
    )(src)
}

fn whitespace(src: &str) -> Result<Scanned> {
    value(Scanned::Insignificant, take_while1(is_whitespace))(src)
}

fn word(src: &str) -> Result<Scanned> {
    map(
        recognize(pair(satisfy(is_id_start), take_while(is_id_part))),
        Scanned::Word,
    )(src)
}

fn punctuation(src: &str) -> Result<Scanned> {
    map(
        verify(anychar, |c: &char| Punctuation::lookup(*c).is_some()),
        Scanned::Punct,
    )(src)
}

#[derive(Debug)]
enum StringFragment<'a> {
    Literal(&'a str),
    Escaped(char),
}

fn string(src: &str) -> Result<Scanned> {
    let contents = fold_many0(string_fragment, String::new, |mut value: String, fragment| {
        match fragment {
            StringFragment::Literal(literal) => value.push_str(literal),
            StringFragment::Escaped(c) => value.push(c),
        }
        value
    });
    map(
        committed(
            char('"'),
            terminated(contents, char('"')),
            ScanError::UnterminatedString,
        ),
        Scanned::Str,
    )(src)
}

fn string_fragment(src: &str) -> Result<StringFragment> {
    alt((
        map(is_not("\"\\"), StringFragment::Literal),
        map(pair(char('\\'), escape_code), |(_, c)| {
            StringFragment::Escaped(c)
        }),
    ))(src)
}

/// The char after a backslash. Running out of input is left to the enclosing
/// string to report.
fn escape_code(src: &str) -> Result<char> {
    let (rest, c) = anychar::<_, ScanError>(src)?;
    let escaped = match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        '0' => '\0',
        'b' => '\u{08}',
        '"' => '"',
        _ => return Err(nom::Err::Failure(ScanError::InvalidEscape(src))),
    };
    Ok((rest, escaped))
}

/// Digits with at most one decimal point
fn decimal(src: &str) -> Result<&str> {
    recognize(pair(digit1, opt(pair(char('.'), digit0))))(src)
}

fn number(src: &str) -> Result<Scanned> {
    let (rest, lexeme) = decimal(src)?;
    if rest.starts_with('.') {
        let malformed = &src[..lexeme.len() + 1];
        return Err(nom::Err::Failure(ScanError::MalformedNumber(malformed)));
    }
    Ok((rest, Scanned::Number(lexeme)))
}

/// The longest operator, where a three char operator must extend a two char one
fn operator(src: &str) -> Result<Scanned> {
    let two = || verify(take(2usize), is_operator);
    map(
        alt((
            verify(recognize(pair(two(), anychar)), is_operator),
            two(),
            verify(take(1usize), is_operator),
        )),
        Scanned::Op,
    )(src)
}

fn is_operator(lexeme: &str) -> bool {
    Operator::lookup(lexeme).is_some()
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn is_id_start(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '_' | '$' | '%' | '#')
}

/// Unlike [`is_id_start`], `$`, `%` and `#` can not continue an identifier
fn is_id_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
