use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given
/// parser.
///
/// Always succeeds: zero matches yield an empty `Vec`. Repetition stops at
/// the first failure of the inner parser, and the cursor from the last
/// successful application is returned.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;
    type Error = P::Error;

    fn parse(
        &self,
        mut cursor: Self::Cursor,
    ) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let mut results = Vec::new();

        loop {
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    cursor = next_cursor;
                }
                // Zero or more: the inner failure is not propagated.
                Err(_) => break,
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser.
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}
