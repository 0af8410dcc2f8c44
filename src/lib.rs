//! Parser combinators over immutable cursors, and a boolean-expression
//! language built with them.
//!
//! The engine threads a [`Cursor`], a cheap `Copy` view into the input,
//! through [`Parser`] values. A parser that fails simply returns `Err`
//! without having moved anything: the caller still holds its own copy of
//! the cursor, so backtracking costs nothing and no combinator ever needs
//! to rewind.
//!
//! On top of the engine sits a small propositional-logic language:
//! [`parse`] turns text like `!a & b|c&!(d|e)` into an [`Expr`] tree, and
//! [`Expr::eval`] evaluates the tree against a set of variable bindings.
//!
//! ```
//! use std::collections::HashMap;
//! use boolcomb::parse;
//!
//! let (expr, rest) = parse("a & !b").unwrap();
//! assert_eq!(rest, "");
//!
//! let bindings = HashMap::from([("a".to_string(), true), ("b".to_string(), false)]);
//! assert_eq!(expr.eval(&bindings), Ok(true));
//! ```

pub mod and;
pub mod ascii;
pub mod ast;
pub mod atomic;
pub mod between;
pub mod byte;
pub mod cursor;
pub mod cursors;
pub mod error;
pub mod filter;
pub mod grammar;
pub mod lazy;
pub mod literal;
pub mod many;
pub mod map;
pub mod optional;
pub mod or;
pub mod parser;
pub mod some;

pub use ast::{Expr, UnboundVariable};
pub use atomic::Atomic;
pub use cursor::Cursor;
pub use cursors::{AtomicCursor, ByteCursor};
pub use error::{CodeLoc, ParseError};
pub use grammar::parse;
pub use parser::Parser;
