use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Evaluation failure: the expression referenced a variable the bindings
/// never defined.
///
/// Evaluation is strict about this on purpose. Silently defaulting a
/// missing variable to `false` turns typos in rule expressions into rules
/// that quietly always deny, so the lookup fails loudly instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("variable '{0}' has no binding")]
pub struct UnboundVariable(pub String);

/// A parsed boolean expression.
///
/// A strict tree: every node exclusively owns its children, and nothing is
/// mutated after construction. Evaluation is a pure fold over the tree and
/// the same tree can be evaluated against any number of binding sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A boolean variable, referred to by name.
    Value(String),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn value(name: impl Into<String>) -> Expr {
        Expr::Value(name.into())
    }

    pub fn not(operand: Expr) -> Expr {
        Expr::Not(Box::new(operand))
    }

    pub fn and(left: Expr, right: Expr) -> Expr {
        Expr::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expr, right: Expr) -> Expr {
        Expr::Or(Box::new(left), Box::new(right))
    }

    /// Evaluates the tree against a set of variable bindings.
    ///
    /// Every variable the expression references must be bound; a missing
    /// name fails with [`UnboundVariable`]. Both operands of `And` and `Or`
    /// are always evaluated, so an unbound name is reported no matter where
    /// in the tree it appears.
    pub fn eval(&self, bindings: &HashMap<String, bool>) -> Result<bool, UnboundVariable> {
        match self {
            Expr::Value(name) => bindings
                .get(name)
                .copied()
                .ok_or_else(|| UnboundVariable(name.clone())),
            Expr::Not(operand) => Ok(!operand.eval(bindings)?),
            Expr::And(left, right) => {
                let left = left.eval(bindings)?;
                let right = right.eval(bindings)?;
                Ok(left && right)
            }
            Expr::Or(left, right) => {
                let left = left.eval(bindings)?;
                let right = right.eval(bindings)?;
                Ok(left || right)
            }
        }
    }
}

/// Compact prefix notation; `a & b | !c` prints as `|(&('a','b'),!('c'))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Value(name) => write!(f, "'{name}'"),
            Expr::Not(operand) => write!(f, "!({operand})"),
            Expr::And(left, right) => write!(f, "&({left},{right})"),
            Expr::Or(left, right) => write!(f, "|({left},{right})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bindings(pairs: &[(&str, bool)]) -> HashMap<String, bool> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    #[test]
    fn value_looks_up_its_binding() {
        let expr = Expr::value("a");
        assert_eq!(expr.eval(&bindings(&[("a", true)])), Ok(true));
        assert_eq!(expr.eval(&bindings(&[("a", false)])), Ok(false));
    }

    #[test]
    fn unbound_value_is_an_error() {
        let expr = Expr::value("missing");
        assert_eq!(
            expr.eval(&bindings(&[("a", true)])),
            Err(UnboundVariable("missing".to_string()))
        );
    }

    #[test]
    fn unbound_error_surfaces_from_deep_in_the_tree() {
        let expr = Expr::and(Expr::value("a"), Expr::not(Expr::value("ghost")));
        assert_eq!(
            expr.eval(&bindings(&[("a", true)])),
            Err(UnboundVariable("ghost".to_string()))
        );
    }

    #[test]
    fn not_negates() {
        let expr = Expr::not(Expr::value("a"));
        assert_eq!(expr.eval(&bindings(&[("a", true)])), Ok(false));
        assert_eq!(expr.eval(&bindings(&[("a", false)])), Ok(true));
    }

    #[test]
    fn and_truth_table() {
        let expr = Expr::and(Expr::value("a"), Expr::value("b"));
        for (a, b) in [(false, false), (false, true), (true, false), (true, true)] {
            let env = bindings(&[("a", a), ("b", b)]);
            assert_eq!(expr.eval(&env), Ok(a && b));
        }
    }

    #[test]
    fn or_truth_table() {
        let expr = Expr::or(Expr::value("a"), Expr::value("b"));
        for (a, b) in [(false, false), (false, true), (true, false), (true, true)] {
            let env = bindings(&[("a", a), ("b", b)]);
            assert_eq!(expr.eval(&env), Ok(a || b));
        }
    }

    #[test]
    fn display_uses_prefix_notation() {
        let expr = Expr::or(
            Expr::and(Expr::value("a"), Expr::value("b")),
            Expr::not(Expr::value("c")),
        );
        assert_eq!(expr.to_string(), "|(&('a','b'),!('c'))");
    }

    #[test]
    fn structural_equality_compares_trees() {
        assert_eq!(
            Expr::and(Expr::value("a"), Expr::value("b")),
            Expr::and(Expr::value("a"), Expr::value("b"))
        );
        assert_ne!(
            Expr::and(Expr::value("a"), Expr::value("b")),
            Expr::and(Expr::value("b"), Expr::value("a"))
        );
    }
}
