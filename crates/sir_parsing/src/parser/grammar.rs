//! The top level grammar.
//!
//! ```text
//! program        := declaration* EOF
//! declaration    := ['extern' | 'static'] (global_var | routine_decl)
//! global_var     := 'var' (var_decl_list | id_list) ';'
//! var_decl_list  := var_decl (',' var_decl)*
//! var_decl       := id_list ['=' expression]
//! id_list        := IDENT (',' IDENT)*
//! routine_decl   := routine_header (block | ';')
//! routine_header := 'routine' IDENT arg_list
//! arg_list       := '(' (')' | id_list ')')
//! block          := '{' statement* '}'
//! statement      := ';' | label_decl
//! label_decl     := IDENT ':'
//! expression     := NULL | NUMBER | STRING | IDENT | BOOL
//! ```
//!
//! `extern` variables take a bare `id_list` and `extern` routines end in `;`
//! instead of a block.

use crate::parser;
use crate::parser::{ErrorKind, Parser, Production, SyntaxResult};
use sir_tokens::lexeme::Keyword;
use sir_tokens::token::TokenKind;
use strum::AsRefStr;

/// The storage modifier a top level declaration was prefixed with
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum DeclMode {
    /// no modifier
    Classic,
    Extern,
    Static,
}

struct GlobalVar(DeclMode);

impl Production for GlobalVar {
    fn non_terminal(&self) -> &'static str {
        "global_var"
    }

    fn parse(&mut self, parser: &mut Parser) -> SyntaxResult {
        global_var(parser, self.0)
    }
}

struct RoutineDeclaration(DeclMode);

impl Production for RoutineDeclaration {
    fn non_terminal(&self) -> &'static str {
        "routine_declaration"
    }

    fn parse(&mut self, parser: &mut Parser) -> SyntaxResult {
        routine_declaration(parser, self.0)
    }
}

pub(crate) fn program(parser: &mut Parser) -> SyntaxResult {
    while parser.try_parse(declaration).map_err(parser::Err::Failure)?.is_some() {}
    if parser.peek().kind() != TokenKind::Eof {
        let found = parser.peek().clone();
        return Err(parser::Err::Failure(
            parser.syntax_error(ErrorKind::ExpectedEndOfInput(found)),
        ));
    }
    Ok(())
}

fn declaration(parser: &mut Parser) -> SyntaxResult {
    let mode = if parser.match_keyword(Keyword::Extern) {
        DeclMode::Extern
    } else if parser.match_keyword(Keyword::Static) {
        DeclMode::Static
    } else {
        DeclMode::Classic
    };

    if parser
        .try_parse(GlobalVar(mode))
        .map_err(parser::Err::Failure)?
        .is_some()
    {
        return Ok(());
    }
    match (mode, parser.parse(RoutineDeclaration(mode))) {
        (DeclMode::Classic, result) => result,
        (_, Err(parser::Err::Error(_))) => Err(parser
            .error("variable or routine declaration after storage modifier")
            .cut()),
        (_, result) => result,
    }
}

fn global_var(parser: &mut Parser, mode: DeclMode) -> SyntaxResult {
    parser.expect_keyword(Keyword::Var, "'var'")?;
    match mode {
        DeclMode::Extern => parser.parse(id_list).map_err(parser::Err::cut)?,
        DeclMode::Classic | DeclMode::Static => {
            parser.parse(var_declaration_list).map_err(parser::Err::cut)?
        }
    }
    parser
        .expect(TokenKind::Semicolon, "';' to terminate statement")
        .map_err(parser::Err::cut)?;
    parser.report_header(format_args!(
        "Matched {} global variable declaration",
        mode.as_ref()
    ));
    Ok(())
}

fn routine_declaration(parser: &mut Parser, mode: DeclMode) -> SyntaxResult {
    parser.parse(routine_header)?;
    match mode {
        DeclMode::Extern => parser
            .expect(
                TokenKind::Semicolon,
                "';' to end extern routine declaration",
            )
            .map_err(parser::Err::cut)?,
        DeclMode::Classic | DeclMode::Static => parser.parse(block).map_err(parser::Err::cut)?,
    }
    parser.report_header(format_args!(
        "Matched {} routine declaration",
        mode.as_ref()
    ));
    Ok(())
}

fn routine_header(parser: &mut Parser) -> SyntaxResult {
    parser.expect_keyword(Keyword::Routine, "'routine'")?;
    parser
        .expect(TokenKind::Identifier, "routine name identifier")
        .map_err(parser::Err::cut)?;
    parser.parse(argument_list).map_err(parser::Err::cut)
}

fn argument_list(parser: &mut Parser) -> SyntaxResult {
    parser.expect(TokenKind::LParen, "argument list (or empty '()')")?;
    if parser.match_kind(TokenKind::RParen) {
        return Ok(());
    }
    parser.parse(id_list).map_err(parser::Err::cut)?;
    parser
        .expect(TokenKind::RParen, "')' to close argument list")
        .map_err(parser::Err::cut)
}

fn block(parser: &mut Parser) -> SyntaxResult {
    parser.expect(TokenKind::LBrace, "statement block")?;
    parser.parse(statement_list)?;
    parser
        .expect(TokenKind::RBrace, "closing curly brace '}' to end block")
        .map_err(parser::Err::cut)
}

/// Statements until one doesn't match. Never fails recoverably.
fn statement_list(parser: &mut Parser) -> SyntaxResult {
    while parser.try_parse(statement).map_err(parser::Err::Failure)?.is_some() {}
    Ok(())
}

fn statement(parser: &mut Parser) -> SyntaxResult {
    if parser.match_kind(TokenKind::Semicolon) {
        return Ok(());
    }
    parser.parse(label_declaration)
}

fn label_declaration(parser: &mut Parser) -> SyntaxResult {
    parser.expect(TokenKind::Identifier, "label")?;
    parser
        .expect(TokenKind::Colon, "':' to end label declaration")
        .map_err(parser::Err::cut)
}

fn expression(parser: &mut Parser) -> SyntaxResult {
    const LITERALS: [TokenKind; 5] = [
        TokenKind::Null,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Identifier,
        TokenKind::Bool,
    ];
    if LITERALS.into_iter().any(|kind| parser.match_kind(kind)) {
        Ok(())
    } else {
        Err(parser.error("constant expression"))
    }
}

fn id_list(parser: &mut Parser) -> SyntaxResult {
    parser.expect(TokenKind::Identifier, "identifier")?;
    while parser.match_kind(TokenKind::Comma) {
        parser
            .expect(TokenKind::Identifier, "identifier after ','")
            .map_err(parser::Err::cut)?;
    }
    Ok(())
}

fn var_declaration_list(parser: &mut Parser) -> SyntaxResult {
    parser.parse(var_declaration)?;
    while parser.match_kind(TokenKind::Comma) {
        parser.parse(var_declaration).map_err(parser::Err::cut)?;
    }
    Ok(())
}

fn var_declaration(parser: &mut Parser) -> SyntaxResult {
    parser.parse(id_list)?;
    if parser.match_kind(TokenKind::StrictAssign) {
        parser.parse(expression).map_err(parser::Err::cut)?;
    }
    Ok(())
}
