use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that applies a predicate to the output of another
/// parser and rejects the parse when the predicate says no.
///
/// The rejection is reported at the position where the inner parser
/// started, which is where the offending value lives.
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
    message: Cow<'static, str>,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F, message: Cow<'static, str>) -> Self {
        Self {
            parser,
            predicate,
            message,
        }
    }
}

impl<'code, C, P, F> Parser<'code> for FilterParser<P, F>
where
    C: Cursor<'code>,
    P: Parser<'code, Cursor = C, Error = ParseError<'code, C::Element>>,
    F: Fn(&P::Output) -> bool,
{
    type Cursor = P::Cursor;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let (value, next_cursor) = self.parser.parse(cursor)?;

        if (self.predicate)(&value) {
            Ok((value, next_cursor))
        } else {
            let (data, position) = cursor.inner();
            Err(ParseError::syntax(self.message.clone(), data, position))
        }
    }
}

/// Extension trait to add .filter() method support for parsers.
pub trait FilterExt<'code>: Parser<'code> {
    fn filter<F>(
        self,
        predicate: F,
        message: impl Into<Cow<'static, str>>,
    ) -> FilterParser<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate, message.into())
    }
}

impl<'code, P: Parser<'code>> FilterExt<'code> for P {}

/// Convenience function to create a FilterParser.
pub fn filter<'code, P, F>(
    parser: P,
    predicate: F,
    message: impl Into<Cow<'static, str>>,
) -> FilterParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate, message.into())
}
