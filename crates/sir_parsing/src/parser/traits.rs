use crate::parser::{Parser, SyntaxResult};
use std::any::type_name;

/// A grammar production that can be run against a [Parser]
pub trait Production<O = ()> {
    /// The name reported in the non terminal stack of errors
    fn non_terminal(&self) -> &'static str;
    fn parse(&mut self, parser: &mut Parser) -> SyntaxResult<O>;
}

impl<O, F> Production<O> for F
where
    F: FnMut(&mut Parser) -> SyntaxResult<O>,
{
    fn non_terminal(&self) -> &'static str {
        short_name(type_name::<F>())
    }

    fn parse(&mut self, parser: &mut Parser) -> SyntaxResult<O> {
        (self)(parser)
    }
}

/// The last path segment that isn't a closure marker
fn short_name(path: &'static str) -> &'static str {
    path.rsplit("::")
        .find(|segment| !segment.starts_with('{'))
        .unwrap_or(path)
}
