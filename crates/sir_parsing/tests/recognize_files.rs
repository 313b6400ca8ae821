use sir_parsing::lexer::Lexer;
use sir_parsing::parser::{ErrorKind, Parser};
use sir_parsing::{syntactic_parse, Error};
use sir_tokens::token::{Token, TokenKind};
use sir_tokens::value::{Value, ValueKind};
use test_log::test;
use tracing::info;

mod common;

#[test]
fn test_recognize_valid_file() -> Result<(), Error> {
    let file = common::sir_file("hello.sir");
    info!("recognizing {file:?}");
    syntactic_parse(&file)
}

#[test]
fn test_recognize_invalid_file() {
    let file = common::sir_file("missing_semicolon.sir");
    let Err(Error::Syntax(error)) = syntactic_parse(&file) else {
        panic!("missing_semicolon.sir should fail to parse");
    };
    assert!(matches!(error.error_kind(), ErrorKind::Expected { .. }));
    assert_eq!(error.found().map(Token::text), Some("routine"));
    assert_eq!(error.found().map(Token::line), Some(3));
    assert!(error.to_string().contains("missing_semicolon.sir"), "{error}");
}

#[test]
fn test_missing_file() {
    let result = syntactic_parse(&common::sir_file("not_here.sir"));
    assert!(matches!(result, Err(Error::Io(_))), "{result:?}");
}

#[test]
fn test_verbose_parser_from_file() {
    let file = common::sir_file("hello.sir");
    let mut parser = Parser::with_file(&file)
        .expect("could not read file")
        .verbose(true);
    parser.recognize().expect("should be valid");
    assert!(parser.matched_text().starts_with("extern var stdout ; "));
    assert!(parser.matched_text().ends_with("exit : } "));
}

#[test]
fn test_literal_values() {
    let tokens = Lexer::read_path(&common::sir_file("hello.sir"))
        .expect("could not read file")
        .lex()
        .expect("could not lex");
    let values = tokens.iter().filter_map(Value::from_token).collect::<Vec<_>>();
    let kinds = values.iter().map(Value::kind).collect::<Vec<_>>();
    assert_eq!(
        kinds,
        [
            ValueKind::String,
            ValueKind::Integer,
            ValueKind::Float,
            ValueKind::Bool,
            ValueKind::Null
        ]
    );
    assert_eq!(values[0].as_str(), Some("hello, world\n"));
    assert_eq!(values[1].as_int().unwrap(), 0);
    assert_eq!(values[2].as_float().unwrap(), 0.5);
    assert!(!values[3].as_bool());
}

#[test]
fn test_operator_file() {
    let tokens = Lexer::read_path(&common::sir_file("operators.sir"))
        .expect("could not read file")
        .lex()
        .expect("could not lex");
    let texts = tokens
        .iter()
        .filter(|token| token.kind() != TokenKind::Identifier)
        .map(|token| (token.kind(), token.text()))
        .collect::<Vec<_>>();
    assert_eq!(
        texts,
        [
            (TokenKind::Assign, "+="),
            (TokenKind::Assign, ">>="),
            (TokenKind::Assign, "<<="),
            (TokenKind::Null, "null"),
            (TokenKind::Null, "null"),
            (TokenKind::PlusPlus, "++"),
            (TokenKind::MinusMinus, "--"),
            (TokenKind::And, "&&"),
            (TokenKind::Or, "||"),
            (TokenKind::Not, "!"),
            (TokenKind::NotEquals, "!="),
            (TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn test_rescan_files() {
    for name in ["hello.sir", "missing_semicolon.sir", "operators.sir"] {
        let tokens = Lexer::read_path(&common::sir_file(name))
            .expect("could not read file")
            .lex()
            .expect("could not lex");
        let rescanned = Lexer::new(&tokens.source_text())
            .lex()
            .expect("could not rescan");
        assert_eq!(
            tokens.iter().collect::<Vec<_>>(),
            rescanned.iter().collect::<Vec<_>>(),
            "{name} did not rescan to the same tokens"
        );
    }
}
