//! Responsible with converting source text into a token stream

use crate::lexer::token_parsing::{scan, ScanError};
use nom::Offset;
use sir_tokens::token::{Token, TokenStream};
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, trace};

mod token_parsing;

/// Responsible with converting source text into a token stream.
///
/// The whole source is held in memory. Tokens are produced in order, with a
/// single [`Eof`](sir_tokens::token::TokenKind::Eof) token last. After the
/// end of input or the first error, the lexer produces nothing more.
#[derive(Debug)]
pub struct Lexer {
    source: String,
    offset: usize,
    line: usize,
    verbose: bool,
    finished: bool,
}

impl Lexer {
    /// Creates a new lexer over some source text
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            offset: 0,
            line: 1,
            verbose: false,
            finished: false,
        }
    }

    /// Creates a new lexer from a path, reading the entire file first
    pub fn read_path(path: &Path) -> io::Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Ok(Self::new(&source))
    }

    /// Whether each scanned token is reported at the `INFO` level
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Scans the rest of the source
    pub fn lex(self) -> LexResult<TokenStream> {
        let tokens = self.collect::<LexResult<TokenStream>>()?;
        debug!("scanned {} tokens", tokens.len());
        Ok(tokens)
    }

    fn next_token(&mut self) -> LexResult<Option<Token>> {
        if self.finished {
            return Ok(None);
        }
        loop {
            let rest = &self.source[self.offset..];
            if rest.is_empty() {
                self.finished = true;
                return Ok(Some(Token::eof(self.line)));
            }

            let (consumed, newlines, token) = match scan(rest) {
                Ok((remaining, scanned)) => {
                    let consumed = &rest[..rest.offset(remaining)];
                    trace!("{}: {consumed:?} -> {scanned:?}", self.line);
                    (
                        consumed.len(),
                        consumed.matches('\n').count(),
                        scanned.into_token(self.line),
                    )
                }
                Err(nom::Err::Error(e) | nom::Err::Failure(e)) => {
                    return Err(self.scan_error(rest, e))
                }
                Err(nom::Err::Incomplete(_)) => {
                    return Err(self.scan_error(rest, ScanError::UnexpectedChar(rest)))
                }
            };
            self.offset += consumed;
            self.line += newlines;
            if token.is_some() {
                return Ok(token);
            }
        }
    }

    /// Converts a scan error, locating it relative to the start of `rest`
    fn scan_error(&self, rest: &str, error: ScanError) -> LexingError {
        let at = error.input();
        let line = self.line + rest[..rest.offset(at)].matches('\n').count();
        let c = at.chars().next().unwrap_or_default();
        match error {
            ScanError::Mismatch(..) | ScanError::UnexpectedChar(_) => {
                LexingError::UnexpectedChar { c, line }
            }
            ScanError::MalformedNumber(lexeme) => LexingError::MalformedNumber {
                lexeme: lexeme.to_string(),
                line,
            },
            ScanError::UnterminatedString(_) => LexingError::UnterminatedString { line },
            ScanError::UnterminatedComment(_) => LexingError::UnterminatedComment { line },
            ScanError::InvalidEscape(_) => LexingError::InvalidEscape { c, line },
        }
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexingError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(option) => {
                if let Some(token) = &option {
                    if self.verbose {
                        info!("{token}");
                    } else {
                        trace!("scanned {token}");
                    }
                }
                option.map(Ok)
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

pub type LexResult<T> = Result<T, LexingError>;

#[derive(Debug, Error)]
pub enum LexingError {
    /// Invalid char
    #[error("invalid char {c:?} on line {line}")]
    UnexpectedChar { c: char, line: usize },
    #[error("malformed number {lexeme:?} on line {line}: a number may contain only one decimal point")]
    MalformedNumber { lexeme: String, line: usize },
    #[error("unterminated string literal starting on line {line}")]
    UnterminatedString { line: usize },
    #[error("unterminated block comment starting on line {line}")]
    UnterminatedComment { line: usize },
    #[error("invalid escape sequence '\\{c}' on line {line}")]
    InvalidEscape { c: char, line: usize },
    #[error(transparent)]
    IoError(#[from] io::Error),
}

impl LexingError {
    /// The line the error occurred on, if it came from scanning
    pub fn line(&self) -> Option<usize> {
        match self {
            LexingError::UnexpectedChar { line, .. }
            | LexingError::MalformedNumber { line, .. }
            | LexingError::UnterminatedString { line }
            | LexingError::UnterminatedComment { line }
            | LexingError::InvalidEscape { line, .. } => Some(*line),
            LexingError::IoError(_) => None,
        }
    }
}
