//! The token cursor the grammar productions run against

use crate::lexer::Lexer;
use crate::parser;
use crate::parser::{grammar, ErrorKind, Production, SyntaxError, SyntaxResult};
use sir_tokens::lexeme::Keyword;
use sir_tokens::token::{Token, TokenKind, TokenStream};
use std::fmt::Arguments;
use std::path::Path;
use std::result;
use tracing::{debug, info, trace};

/// Recognizes whether a token stream is a valid program.
///
/// Decisions are made on a single token of lookahead. Productions never
/// backtrack over consumed tokens, so the first error found is final and
/// leaves the parser poisoned.
///
/// # Examples
/// ```
/// # use sir_parsing::lexer::Lexer;
/// # use sir_parsing::parser::Parser;
/// let tokens = Lexer::new("var x = 1;").lex().unwrap();
/// let mut parser = Parser::new(tokens, "example.sir");
/// assert!(parser.recognize().is_ok());
/// ```
#[derive(Debug)]
pub struct Parser {
    tokens: TokenStream,
    lookahead: Token,
    file: String,
    line: usize,
    verbose: bool,
    matched: String,
    non_terminals: Vec<&'static str>,
    poisoned: bool,
}

impl Parser {
    /// Creates a new parser over the tokens of a file
    pub fn new(tokens: impl IntoIterator<Item = Token>, file: impl AsRef<str>) -> Self {
        let mut tokens: TokenStream = tokens.into_iter().collect();
        let lookahead = tokens.next().unwrap_or_else(|| Token::eof(0));
        Self {
            tokens,
            lookahead,
            file: file.as_ref().to_string(),
            line: 0,
            verbose: false,
            matched: String::new(),
            non_terminals: vec![],
            poisoned: false,
        }
    }

    /// Creates a new parser for a given file, scanning it completely first
    pub fn with_file(path: &Path) -> result::Result<Self, crate::Error> {
        let tokens = Lexer::read_path(path)?.lex()?;
        Ok(Self::new(tokens, path.to_string_lossy()))
    }

    /// Whether matches, rejections and recognized declarations are reported
    /// at the `INFO` level
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Checks the whole token stream against the grammar.
    pub fn recognize(&mut self) -> result::Result<(), SyntaxError> {
        if self.poisoned {
            return Err(SyntaxError::new(
                ErrorKind::ParserPoisoned,
                &self.file,
                self.line,
                None,
            ));
        }
        debug!("recognizing {}", self.file);
        match self.parse(grammar::program) {
            Ok(()) => {
                debug!("{} is a valid program", self.file);
                Ok(())
            }
            Err(e) => {
                debug!("{} was rejected with {e}", self.file);
                self.poisoned = true;
                Err(e.into_inner())
            }
        }
    }

    /// The text of every matched token so far, each followed by a space
    pub fn matched_text(&self) -> &str {
        &self.matched
    }

    /// The line of the token following the most recently matched keyword
    pub fn line(&self) -> usize {
        self.line
    }

    /// peek the current lookahead
    pub fn peek(&self) -> &Token {
        &self.lookahead
    }

    /// Matches and consumes the lookahead if it's of the given kind.
    /// Nothing is consumed on a mismatch.
    pub fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.lookahead.kind() == kind {
            self.report(format_args!("Matched token {}", self.lookahead));
            self.consume();
            true
        } else {
            self.report(format_args!(
                "Rejected {} ({} would have matched)",
                self.lookahead, kind
            ));
            false
        }
    }

    /// Matches and consumes the lookahead if it's the given keyword.
    /// Nothing is consumed on a mismatch.
    pub fn match_keyword(&mut self, keyword: Keyword) -> bool {
        if self.lookahead.is_keyword(keyword) {
            self.report(format_args!("Matched keyword '{keyword}'"));
            self.consume();
            self.line = self.lookahead.line();
            true
        } else {
            self.report(format_args!(
                "Rejected {} ({} could have matched)",
                self.lookahead, keyword
            ));
            false
        }
    }

    /// Like [match_kind](Self::match_kind), but a mismatch is a recoverable error
    pub fn expect(&mut self, kind: TokenKind, expected: &'static str) -> SyntaxResult {
        if self.match_kind(kind) {
            Ok(())
        } else {
            Err(self.error(expected))
        }
    }

    /// Like [match_keyword](Self::match_keyword), but a mismatch is a recoverable error
    pub fn expect_keyword(&mut self, keyword: Keyword, expected: &'static str) -> SyntaxResult {
        if self.match_keyword(keyword) {
            Ok(())
        } else {
            Err(self.error(expected))
        }
    }

    fn consume(&mut self) -> Token {
        let next = self
            .tokens
            .next()
            .unwrap_or_else(|| Token::eof(self.lookahead.line()));
        let token = std::mem::replace(&mut self.lookahead, next);
        self.matched.push_str(token.text());
        self.matched.push(' ');
        token
    }

    /// Wrapper function for running a production
    #[inline]
    pub fn parse<O, P: Production<O>>(&mut self, mut production: P) -> SyntaxResult<O> {
        trace!(
            "starting parsing {} lookahead={:?}",
            production.non_terminal(),
            self.lookahead
        );
        self.non_terminals.push(production.non_terminal());
        let r = production.parse(self);
        self.non_terminals.pop();
        trace!(
            "after parsing {} lookahead={:?}",
            production.non_terminal(),
            self.lookahead
        );
        r
    }

    /// Tries to run a production.
    ///
    /// returns `Ok(Some(parsed))` on success, `Ok(None)` on `Err::Error(_)` and `Err(e)` on `Err::Failure(e)`.
    pub fn try_parse<O, P: Production<O>>(
        &mut self,
        production: P,
    ) -> result::Result<Option<O>, SyntaxError> {
        let before = self.matched.len();
        match self.parse(production) {
            Ok(ok) => Ok(Some(ok)),
            Err(parser::Err::Error(e)) => {
                debug_assert_eq!(
                    before,
                    self.matched.len(),
                    "production consumed tokens before failing recoverably: {e}"
                );
                Ok(None)
            }
            Err(parser::Err::Failure(e)) => Err(e),
        }
    }

    /// A recoverable error for an expected construct missing at the lookahead
    pub fn error(&self, expected: &'static str) -> parser::Err<SyntaxError> {
        parser::Err::Error(self.syntax_error(ErrorKind::expected(expected, &self.lookahead)))
    }

    pub(in crate::parser) fn syntax_error(&self, kind: ErrorKind) -> SyntaxError {
        SyntaxError::new(kind, &self.file, self.line, self.non_terminals.clone())
    }

    /// Reports a diagnostic line, prefixed by the file and current line
    pub(in crate::parser) fn report_header(&self, args: Arguments<'_>) {
        self.report(format_args!("{}:{}> {}", self.file, self.line, args));
    }

    fn report(&self, args: Arguments<'_>) {
        if self.verbose {
            info!("{args}");
        } else {
            trace!("{args}");
        }
    }
}

impl From<TokenStream> for Parser {
    fn from(value: TokenStream) -> Self {
        Self::new(value, "<unknown>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;
    use test_log::test;

    fn parser(src: &str) -> Parser {
        let tokens = Lexer::new(src).lex().expect("could not lex");
        Parser::new(tokens, "test.sir")
    }

    #[test]
    fn test_create_parser_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "var x = 1.0;").expect("could not write");
        let parser = Parser::with_file(temp_file.path()).unwrap();
        let token = parser.peek();
        assert!(token.is_keyword(Keyword::Var));
        assert_eq!(token.line(), 1);
    }

    #[test]
    fn test_missing_file() {
        let result = Parser::with_file(Path::new("does/not/exist.sir"));
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }

    #[test]
    fn test_match_kind() {
        let mut parser = parser("x = 1");
        assert!(!parser.match_kind(TokenKind::Number));
        assert_eq!(parser.peek().kind(), TokenKind::Identifier);
        assert!(parser.match_kind(TokenKind::Identifier));
        assert_eq!(parser.peek().kind(), TokenKind::StrictAssign);
        assert_eq!(parser.matched_text(), "x ");
    }

    #[test]
    fn test_match_keyword() {
        let mut parser = parser("var\n\n x");
        assert!(!parser.match_keyword(Keyword::Routine));
        assert_eq!(parser.line(), 0);
        assert!(parser.match_keyword(Keyword::Var));
        assert_eq!(parser.line(), 3);
        assert_eq!(parser.peek().text(), "x");
    }

    #[test]
    fn test_keyword_text_must_match() {
        let mut parser = parser("static");
        assert!(!parser.match_keyword(Keyword::Extern));
        assert!(parser.match_keyword(Keyword::Static));
    }

    #[test]
    fn test_lookahead_stays_at_eof() {
        let mut parser = parser("x");
        assert!(parser.match_kind(TokenKind::Identifier));
        assert!(parser.match_kind(TokenKind::Eof));
        assert_eq!(parser.peek().kind(), TokenKind::Eof);
    }

    #[test]
    fn test_empty_token_stream() {
        let mut parser = Parser::from(TokenStream::new());
        assert_eq!(parser.peek().kind(), TokenKind::Eof);
        assert!(parser.recognize().is_ok());
    }

    #[test]
    fn test_try_parse() {
        let mut parser = parser("; x");
        let semicolon = |p: &mut Parser| p.expect(TokenKind::Semicolon, "';'");
        assert!(matches!(parser.try_parse(semicolon), Ok(Some(()))));
        assert!(matches!(parser.try_parse(semicolon), Ok(None)));
        let cut = |p: &mut Parser| p.expect(TokenKind::Number, "number").map_err(parser::Err::cut);
        let err = parser.try_parse(cut).expect_err("should have failed");
        assert_eq!(err.found().map(Token::text), Some("x"));
    }

    #[test]
    fn test_poisoned() {
        let mut parser = parser("var ;");
        assert!(parser.recognize().is_err());
        let err = parser.recognize().expect_err("should be poisoned");
        assert!(matches!(err.error_kind(), ErrorKind::ParserPoisoned));
    }
}
