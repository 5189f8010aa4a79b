//! Propositional sentences.
use std::collections::BTreeSet;
use std::{fmt, ops, sync::Arc};

use crate::lit::{Lit, Var};

/// An immutable propositional sentence.
///
/// Sentences are trees built bottom-up. Subtrees are reference counted, so cloning a sentence or
/// reusing one subtree in several places is cheap. Equality is structural.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Expr {
    True,
    False,
    Var(Var),
    Not(Arc<Expr>),
    And(Arc<Expr>, Arc<Expr>),
    Or(Arc<Expr>, Arc<Expr>),
    Implication(Arc<Expr>, Arc<Expr>),
    Biconditional(Arc<Expr>, Arc<Expr>),
}

impl Expr {
    /// A sentence consisting of a single variable.
    pub fn var(var: impl Into<Var>) -> Expr {
        Expr::Var(var.into())
    }

    /// The sentence `NOT inner`.
    pub fn negation(inner: Expr) -> Expr {
        Expr::Not(Arc::new(inner))
    }

    /// The sentence `left AND right`.
    pub fn and(left: Expr, right: Expr) -> Expr {
        Expr::And(Arc::new(left), Arc::new(right))
    }

    /// The sentence `left OR right`.
    pub fn or(left: Expr, right: Expr) -> Expr {
        Expr::Or(Arc::new(left), Arc::new(right))
    }

    /// The sentence `left => right`.
    pub fn implies(left: Expr, right: Expr) -> Expr {
        Expr::Implication(Arc::new(left), Arc::new(right))
    }

    /// The sentence `left <=> right`.
    pub fn iff(left: Expr, right: Expr) -> Expr {
        Expr::Biconditional(Arc::new(left), Arc::new(right))
    }

    /// Sentence for a single literal.
    pub fn lit(lit: &Lit) -> Expr {
        let var = Expr::Var(lit.var().clone());
        if lit.is_positive() {
            var
        } else {
            Expr::negation(var)
        }
    }

    /// Folds the sentences into a right-nested conjunction.
    ///
    /// Returns `None` for an empty sequence.
    pub fn conjunction(sentences: impl IntoIterator<Item = Expr>) -> Option<Expr> {
        let mut sentences: Vec<Expr> = sentences.into_iter().collect();
        let mut folded = sentences.pop()?;
        while let Some(sentence) = sentences.pop() {
            folded = Expr::and(sentence, folded);
        }
        Some(folded)
    }

    /// The set of variables occurring in the sentence.
    pub fn vars(&self) -> BTreeSet<Var> {
        let mut vars = BTreeSet::new();
        self.collect_vars(&mut vars);
        vars
    }

    /// Adds all variables occurring in the sentence to `vars`.
    pub fn collect_vars(&self, vars: &mut BTreeSet<Var>) {
        match self {
            Expr::True | Expr::False => (),
            Expr::Var(var) => {
                vars.insert(var.clone());
            }
            Expr::Not(inner) => inner.collect_vars(vars),
            Expr::And(left, right)
            | Expr::Or(left, right)
            | Expr::Implication(left, right)
            | Expr::Biconditional(left, right) => {
                left.collect_vars(vars);
                right.collect_vars(vars);
            }
        }
    }

    /// Whether this is a constant, a variable or the negation of either.
    pub fn is_literal(&self) -> bool {
        match self {
            Expr::True | Expr::False | Expr::Var(_) => true,
            Expr::Not(inner) => matches!(**inner, Expr::True | Expr::False | Expr::Var(_)),
            _ => false,
        }
    }

    /// The literal this sentence consists of, if it is a variable or a negated variable.
    pub fn as_lit(&self) -> Option<Lit> {
        match self {
            Expr::Var(var) => Some(var.positive()),
            Expr::Not(inner) => match &**inner {
                Expr::Var(var) => Some(var.negative()),
                _ => None,
            },
            _ => None,
        }
    }
}

impl From<Var> for Expr {
    fn from(var: Var) -> Expr {
        Expr::Var(var)
    }
}

impl From<Lit> for Expr {
    fn from(lit: Lit) -> Expr {
        Expr::lit(&lit)
    }
}

impl ops::Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::negation(self)
    }
}

impl ops::BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Expr) -> Expr {
        Expr::and(self, rhs)
    }
}

impl ops::BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Expr) -> Expr {
        Expr::or(self, rhs)
    }
}

/// Fully parenthesized surface syntax.
///
/// Every negation and every binary connective is wrapped in parentheses, so parsing the output
/// yields a structurally equal sentence.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (left, op, right) = match self {
            Expr::True => return f.write_str("TRUE"),
            Expr::False => return f.write_str("FALSE"),
            Expr::Var(var) => return write!(f, "{}", var),
            Expr::Not(inner) => return write!(f, "(NOT {})", inner),
            Expr::And(left, right) => (left, "AND", right),
            Expr::Or(left, right) => (left, "OR", right),
            Expr::Implication(left, right) => (left, "=>", right),
            Expr::Biconditional(left, right) => (left, "<=>", right),
        };
        write!(f, "({} {} {})", left, op, right)
    }
}

/// Same as the `Display` output.
impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(any(test, feature = "proptest-strategies"))]
#[doc(hidden)]
pub mod strategy {
    use super::*;
    use proptest::prelude::*;

    use crate::lit::strategy::var;

    /// Arbitrary sentences over the variables `X0` to `X{vars - 1}`.
    pub fn expr(vars: usize, depth: u32) -> impl Strategy<Value = Expr> {
        let leaf = prop_oneof![
            1 => Just(Expr::True),
            1 => Just(Expr::False),
            12 => var(0..vars).prop_map(Expr::Var),
        ];

        leaf.prop_recursive(depth, 32, 2, |inner| {
            prop_oneof![
                inner.clone().prop_map(Expr::negation),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::and(l, r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::or(l, r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::implies(l, r)),
                (inner.clone(), inner).prop_map(|(l, r)| Expr::iff(l, r)),
            ]
        })
    }

    /// Arbitrary sentences without the constants `TRUE` and `FALSE`.
    pub fn constant_free_expr(vars: usize, depth: u32) -> impl Strategy<Value = Expr> {
        var(0..vars)
            .prop_map(Expr::Var)
            .prop_recursive(depth, 32, 2, |inner| {
                prop_oneof![
                    inner.clone().prop_map(Expr::negation),
                    (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::and(l, r)),
                    (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::or(l, r)),
                    (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::implies(l, r)),
                    (inner.clone(), inner).prop_map(|(l, r)| Expr::iff(l, r)),
                ]
            })
    }
}
