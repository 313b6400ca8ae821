#![doc = include_str!("../README.md")]

use clap::{value_parser, ArgAction, Args};
use std::path::PathBuf;

/// Common way to set logging levels
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct LoggingArgs {
    /// Log more. Can be repeated once
    #[clap(short = 'v', value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "quiet", global = true)]
    verbose: u8,
    /// Log less. Can be repeated once
    #[clap(short = 'q', value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "verbose", global = true)]
    quiet: u8,
}

impl LoggingArgs {
    /// `-v` count minus `-q` count, within `-2..=2`
    pub fn offset(&self) -> i8 {
        (self.verbose.min(2) as i8) - (self.quiet.min(2) as i8)
    }

    /// Gets the logging level based on whether `-v[v]` or `-q[q]` has been used
    #[cfg(feature = "tracing")]
    pub fn log_level_filter(&self) -> tracing::level_filters::LevelFilter {
        use tracing::level_filters::LevelFilter;
        match self.offset() {
            i8::MIN..=-2 => LevelFilter::OFF,
            -1 => LevelFilter::ERROR,
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            2..=i8::MAX => LevelFilter::TRACE,
        }
    }
}

/// A single source file to run through the front end
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// The source file
    pub file: PathBuf,
    /// Report every token scanned and every production matched or rejected
    #[clap(long)]
    pub trace: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestArgs {
        #[clap(flatten)]
        logging: LoggingArgs,
        #[clap(flatten)]
        source: SourceArgs,
    }

    #[test]
    fn test_default_offset() {
        let args = TestArgs::try_parse_from(["test", "main.sir"]).unwrap();
        assert_eq!(args.logging.offset(), 0);
        assert_eq!(args.source.file, PathBuf::from("main.sir"));
        assert!(!args.source.trace);
    }

    #[test]
    fn test_verbose_and_quiet() {
        let args = TestArgs::try_parse_from(["test", "-vv", "main.sir"]).unwrap();
        assert_eq!(args.logging.offset(), 2);
        let args = TestArgs::try_parse_from(["test", "-q", "main.sir"]).unwrap();
        assert_eq!(args.logging.offset(), -1);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(TestArgs::try_parse_from(["test", "-v", "-q", "main.sir"]).is_err());
    }

    #[test]
    fn test_trace() {
        let args = TestArgs::try_parse_from(["test", "--trace", "main.sir"]).unwrap();
        assert!(args.source.trace);
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn test_log_level_filter() {
        use tracing::level_filters::LevelFilter;
        let args = TestArgs::try_parse_from(["test", "-qq", "main.sir"]).unwrap();
        assert_eq!(args.logging.log_level_filter(), LevelFilter::OFF);
        let args = TestArgs::try_parse_from(["test", "main.sir"]).unwrap();
        assert_eq!(args.logging.log_level_filter(), LevelFilter::INFO);
    }
}
