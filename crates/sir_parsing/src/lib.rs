#![doc = include_str!("../README.md")]

use crate::lexer::{Lexer, LexingError};
use crate::parser::{Parser, SyntaxError};
use std::io;
use std::path::Path;
use thiserror::Error;

pub mod lexer;
pub mod parser;
pub mod precedence;

/// Errors from taking a source file through the front end
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Lex(#[from] LexingError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// Scans and recognizes a file, producing no tree.
pub fn syntactic_parse(path: &Path) -> Result<(), Error> {
    let mut parser = Parser::with_file(path)?;
    parser.recognize()?;
    Ok(())
}

/// Scans and recognizes source text. `label` stands in for the file name in errors.
pub fn syntactic_parse_str(source: &str, label: &str) -> Result<(), Error> {
    let tokens = Lexer::new(source).lex()?;
    Parser::new(tokens, label).recognize()?;
    Ok(())
}
