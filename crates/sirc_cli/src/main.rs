use crate::args::{Args, Command};
use clap::Parser;
use eyre::WrapErr;
use owo_colors::{OwoColorize, Stream};
use sir_cli_common::SourceArgs;
use sir_parsing::lexer::Lexer;
use sir_parsing::parser::Parser as Recognizer;
use sir_parsing::precedence::postfix;
use sir_tokens::token::TokenKind;
use std::io;
use std::io::{stderr, stdout};
use tracing::metadata::LevelFilter;
use tracing::{debug, trace, Level, Metadata};
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::{format, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::Registry;

mod args;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.logging().log_level_filter())?;
    trace!("starting sirc with args: {args:?}");
    debug!("sirc version: {}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Lex(source) => lex(&source),
        Command::Parse(source) => parse(&source),
        Command::Postfix { expression } => {
            let infix = expression.join(" ");
            let resolved =
                postfix(&infix).wrap_err_with(|| format!("could not resolve {infix:?}"))?;
            println!("{}", resolved.trim_end());
            Ok(())
        }
    }
}

/// Prints one `line:(KIND, text)` entry per token
fn lex(source: &SourceArgs) -> eyre::Result<()> {
    let lexer = Lexer::read_path(&source.file)
        .wrap_err_with(|| format!("could not read {:?}", source.file))?
        .verbose(source.trace);
    for token in lexer {
        let token = token.wrap_err_with(|| format!("could not scan {:?}", source.file))?;
        match token.kind() {
            TokenKind::Keyword => println!(
                "{}",
                token.if_supports_color(Stream::Stdout, |t| t.bold())
            ),
            TokenKind::Number | TokenKind::String | TokenKind::Bool | TokenKind::Null => {
                println!("{}", token.if_supports_color(Stream::Stdout, |t| t.green()))
            }
            _ => println!("{token}"),
        }
    }
    Ok(())
}

/// Scans then recognizes a file. Silent on success.
fn parse(source: &SourceArgs) -> eyre::Result<()> {
    let mut parser = Recognizer::with_file(&source.file)
        .wrap_err_with(|| format!("could not scan {:?}", source.file))?
        .verbose(source.trace);
    parser
        .recognize()
        .wrap_err_with(|| format!("{:?} is not a valid program", source.file))?;
    debug!("recognized {:?}", source.file);
    Ok(())
}

/// Sends warnings and errors to stderr, everything else to stdout
struct LevelRoutedWriter;

impl<'a> MakeWriter<'a> for LevelRoutedWriter {
    type Writer = Box<dyn io::Write + 'a>;

    fn make_writer(&'a self) -> Self::Writer {
        Box::new(stdout().lock())
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        if meta.level() <= &Level::WARN {
            Box::new(stderr().lock())
        } else {
            self.make_writer()
        }
    }
}

fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format().without_time().with_target(false))
                .with_writer(LevelRoutedWriter)
                .with_filter(level_filter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}
