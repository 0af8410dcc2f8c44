//! The boolean-expression grammar, built on the combinator engine:
//!
//! ```text
//! expression ::= or-expr whitespace*
//! or-expr    ::= and-expr ( "|" or-expr )?
//! and-expr   ::= not-expr ( "&" and-expr )?
//! not-expr   ::= "!"* atom
//! atom       ::= variable | "(" expression ")"
//! variable   ::= identifier-start identifier-continue*
//! ```
//!
//! Precedence is OR < AND < NOT with parentheses overriding, and the binary
//! operators associate to the right because each tail recurses into its own
//! rule. Each rule is a zero-sized struct: a named type is what lets the
//! rules recurse into each other without the combinator pipeline becoming
//! an infinitely nested type.

use crate::and::AndExt;
use crate::ascii::{identifier, skip_whitespace, whitespace};
use crate::ast::Expr;
use crate::between::between;
use crate::cursor::Cursor;
use crate::cursors::ByteCursor;
use crate::error::ParseError;
use crate::lazy::lazy;
use crate::literal::literal;
use crate::many::many;
use crate::map::MapExt;
use crate::optional::optional;
use crate::or::OrExt;
use crate::parser::Parser;

/// Parses a boolean expression from the start of `input`.
///
/// Returns the tree together with the unconsumed remainder of `input`. The
/// remainder is empty when the whole input parsed; a caller that requires
/// the entire input to be one valid expression checks exactly that.
/// Trailing whitespace is consumed, trailing garbage is left in place:
/// `"a&"` yields the tree for `a` with remainder `"&"`.
pub fn parse(input: &str) -> Result<(Expr, &str), ParseError<'_>> {
    let cursor = ByteCursor::new(input.as_bytes());
    let (expr, cursor) = Expression.parse(cursor)?;
    let (_, position) = cursor.inner();
    // The grammar consumes only ASCII bytes, so `position` always lies on
    // a char boundary of `input`.
    Ok((expr, &input[position..]))
}

/// A terminal symbol with any leading whitespace skipped.
fn token<'code>(
    symbol: &'static str,
) -> impl Parser<'code, Cursor = ByteCursor<'code>, Output = &'static str, Error = ParseError<'code>>
{
    skip_whitespace(literal(symbol))
}

/// `variable ::= identifier-start identifier-continue*`, as a `Value` leaf.
fn variable<'code>()
-> impl Parser<'code, Cursor = ByteCursor<'code>, Output = Expr, Error = ParseError<'code>> {
    skip_whitespace(identifier().map(Expr::Value))
}

/// Wraps `node` in `marks` levels of negation; zero marks is the identity.
fn make_not(marks: usize, node: Expr) -> Expr {
    (0..marks).fold(node, |node, _| Expr::not(node))
}

/// `expression ::= or-expr whitespace*`
///
/// Consuming trailing whitespace lets callers treat "remainder is empty" as
/// the validity check for a whole input.
pub struct Expression;

impl<'code> Parser<'code> for Expression {
    type Cursor = ByteCursor<'code>;
    type Output = Expr;
    type Error = ParseError<'code>;

    fn parse(&self, cursor: ByteCursor<'code>) -> Result<(Expr, ByteCursor<'code>), Self::Error> {
        OrExpr.and(many(whitespace())).map(|(expr, _)| expr).parse(cursor)
    }
}

/// `or-expr ::= and-expr ( "|" or-expr )?`
///
/// The tail recurses into `or-expr` itself, so `a|b|c` nests to the right
/// as `Or(a, Or(b, c))`. An absent tail returns the left tree unchanged.
pub struct OrExpr;

impl<'code> Parser<'code> for OrExpr {
    type Cursor = ByteCursor<'code>;
    type Output = Expr;
    type Error = ParseError<'code>;

    fn parse(&self, cursor: ByteCursor<'code>) -> Result<(Expr, ByteCursor<'code>), Self::Error> {
        AndExpr
            .and(optional(token("|").and(lazy(|| OrExpr)).map(|(_, rhs)| rhs)))
            .map(|(lhs, rhs)| match rhs {
                Some(rhs) => Expr::or(lhs, rhs),
                None => lhs,
            })
            .parse(cursor)
    }
}

/// `and-expr ::= not-expr ( "&" and-expr )?`
///
/// Symmetric to [`OrExpr`] one precedence level down; `a&b&c` nests as
/// `And(a, And(b, c))`.
pub struct AndExpr;

impl<'code> Parser<'code> for AndExpr {
    type Cursor = ByteCursor<'code>;
    type Output = Expr;
    type Error = ParseError<'code>;

    fn parse(&self, cursor: ByteCursor<'code>) -> Result<(Expr, ByteCursor<'code>), Self::Error> {
        NotExpr
            .and(optional(token("&").and(lazy(|| AndExpr)).map(|(_, rhs)| rhs)))
            .map(|(lhs, rhs)| match rhs {
                Some(rhs) => Expr::and(lhs, rhs),
                None => lhs,
            })
            .parse(cursor)
    }
}

/// `not-expr ::= "!"* atom`
///
/// Counts the run of exclamation marks and wraps the atom in that many
/// `Not` nodes.
pub struct NotExpr;

impl<'code> Parser<'code> for NotExpr {
    type Cursor = ByteCursor<'code>;
    type Output = Expr;
    type Error = ParseError<'code>;

    fn parse(&self, cursor: ByteCursor<'code>) -> Result<(Expr, ByteCursor<'code>), Self::Error> {
        many(token("!"))
            .and(Atom)
            .map(|(marks, atom)| make_not(marks.len(), atom))
            .parse(cursor)
    }
}

/// `atom ::= variable | "(" expression ")"`
///
/// A variable cannot start with `(`, so the alternatives never overlap and
/// first-match-wins alternation is safe. The parentheses are discarded;
/// only the inner tree is returned.
pub struct Atom;

impl<'code> Parser<'code> for Atom {
    type Cursor = ByteCursor<'code>;
    type Output = Expr;
    type Error = ParseError<'code>;

    fn parse(&self, cursor: ByteCursor<'code>) -> Result<(Expr, ByteCursor<'code>), Self::Error> {
        variable()
            .or(between(token("("), lazy(|| Expression), token(")")))
            .parse(cursor)
    }
}
