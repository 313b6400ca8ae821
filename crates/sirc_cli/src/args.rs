//! the args for running sirc

use sir_cli_common::{LoggingArgs, SourceArgs};

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Scans and recognizes sir source code")]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn logging(&self) -> &LoggingArgs {
        &self.logging
    }
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print every token in a source file
    Lex(SourceArgs),
    /// Check that a source file is a valid program
    Parse(SourceArgs),
    /// Convert an infix expression to postfix
    Postfix {
        /// Whitespace separated operands, operators and parentheses
        #[clap(required = true, allow_hyphen_values = true, num_args = 1..)]
        expression: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn test_lex_args() {
        let args = Args::try_parse_from("sirc lex main.sir".split(' ')).expect("could not parse");
        let Command::Lex(source) = args.command else {
            panic!("expected lex command");
        };
        assert_eq!(source.file, Path::new("main.sir"));
        assert!(!source.trace);
    }

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from("sirc -v parse --trace main.sir".split(' '))
            .expect("could not parse");
        assert_eq!(args.logging().offset(), 1);
        let Command::Parse(source) = args.command else {
            panic!("expected parse command");
        };
        assert!(source.trace);
    }

    #[test]
    fn test_postfix_args() {
        let args = Args::try_parse_from("sirc postfix ( a + b ) * - c".split(' '))
            .expect("could not parse");
        let Command::Postfix { expression } = args.command else {
            panic!("expected postfix command");
        };
        assert_eq!(expression.join(" "), "( a + b ) * - c");
    }

    #[test]
    fn test_command_required() {
        assert!(Args::try_parse_from(["sirc"]).is_err());
        assert!(Args::try_parse_from(["sirc", "lex"]).is_err());
        assert!(Args::try_parse_from(["sirc", "postfix"]).is_err());
    }
}
