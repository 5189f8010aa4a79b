//! Truth assignments.
use std::fmt;
use std::iter::FromIterator;

use rustc_hash::FxHashMap;

use crate::clause::Clause;
use crate::expr::Expr;
use crate::lit::{Lit, Var};

/// A partial assignment of truth values to variables.
///
/// Extending a model creates a new model and leaves the receiver unchanged. This allows
/// backtracking algorithms to explore two sibling branches from the same model without one branch
/// observing the assignments of the other.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Model {
    assignment: FxHashMap<Var, bool>,
}

impl Model {
    /// Create an empty model.
    pub fn new() -> Model {
        Model::default()
    }

    /// Returns a copy of this model with `var` set to `value`.
    pub fn extend(&self, var: impl Into<Var>, value: bool) -> Model {
        let mut assignment = self.assignment.clone();
        assignment.insert(var.into(), value);
        Model { assignment }
    }

    /// Negates the value of `var` in place.
    ///
    /// An unassigned variable is treated as false, i.e. it becomes true.
    pub fn flip(&mut self, var: &Var) {
        let value = self.assignment.entry(var.clone()).or_insert(false);
        *value = !*value;
    }

    /// Value assigned to a variable.
    pub fn value(&self, var: &Var) -> Option<bool> {
        self.assignment.get(var).cloned()
    }

    /// Value of a literal, `None` if its variable is unassigned.
    pub fn lit_value(&self, lit: &Lit) -> Option<bool> {
        self.value(lit.var()).map(|value| value == lit.is_positive())
    }

    /// Evaluates a sentence.
    ///
    /// Returns `None` when the value depends on unassigned variables. A conjunction with a false
    /// side is false and a disjunction with a true side is true even when the other side is
    /// unknown.
    pub fn is_true(&self, expr: &Expr) -> Option<bool> {
        match expr {
            Expr::True => Some(true),
            Expr::False => Some(false),
            Expr::Var(var) => self.value(var),
            Expr::Not(inner) => self.is_true(inner).map(|value| !value),
            Expr::And(left, right) => and(self.is_true(left), self.is_true(right)),
            Expr::Or(left, right) => or(self.is_true(left), self.is_true(right)),
            Expr::Implication(left, right) => {
                or(self.is_true(left).map(|value| !value), self.is_true(right))
            }
            Expr::Biconditional(left, right) => match (self.is_true(left), self.is_true(right)) {
                (Some(left), Some(right)) => Some(left == right),
                _ => None,
            },
        }
    }

    /// Evaluates a clause.
    ///
    /// A clause is false only if every literal is assigned false. The empty clause is always
    /// false.
    pub fn clause_value(&self, clause: &Clause) -> Option<bool> {
        let mut value = Some(false);
        for lit in clause.lits() {
            match self.lit_value(&lit) {
                Some(true) => return Some(true),
                Some(false) => (),
                None => value = None,
            }
        }
        value
    }

    /// Number of assigned variables.
    pub fn len(&self) -> usize {
        self.assignment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignment.is_empty()
    }

    /// Assignments ordered by variable name.
    pub fn iter(&self) -> impl Iterator<Item = (&Var, bool)> {
        let mut assignment: Vec<_> = self
            .assignment
            .iter()
            .map(|(var, &value)| (var, value))
            .collect();
        assignment.sort_unstable();
        assignment.into_iter()
    }

    /// Assignments as literals, ordered by variable name.
    pub fn lits(&self) -> Vec<Lit> {
        self.iter().map(|(var, value)| var.lit(value)).collect()
    }
}

impl FromIterator<(Var, bool)> for Model {
    fn from_iter<I: IntoIterator<Item = (Var, bool)>>(assignment: I) -> Model {
        Model {
            assignment: assignment.into_iter().collect(),
        }
    }
}

fn and(left: Option<bool>, right: Option<bool>) -> Option<bool> {
    match (left, right) {
        (Some(false), _) | (_, Some(false)) => Some(false),
        (Some(true), Some(true)) => Some(true),
        _ => None,
    }
}

fn or(left: Option<bool>, right: Option<bool>) -> Option<bool> {
    match (left, right) {
        (Some(true), _) | (_, Some(true)) => Some(true),
        (Some(false), Some(false)) => Some(false),
        _ => None,
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Uses `{A=true, B=false}` with variables in name order.
impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("{")?;
        for (index, (var, value)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", var, value)?;
        }
        f.write_str("}")
    }
}
