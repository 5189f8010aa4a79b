//! Clauses, i.e. disjunctions of literals.
use std::collections::BTreeSet;
use std::fmt;

use crate::lit::{Lit, Var};

/// A disjunction of literals.
///
/// Stored as the set of variables occurring positively and the set of variables occurring
/// negated. Duplicated literals therefore collapse and two clauses with the same literals are
/// equal independent of the order in which the literals were given.
///
/// The empty clause is the unsatisfiable clause. It is used to represent a contradiction.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause {
    positive: BTreeSet<Var>,
    negative: BTreeSet<Var>,
}

/// Result of resolving two clauses.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Resolvent {
    /// The clauses contain no complementary literals.
    None,
    /// Every resolvent of the clauses contains a complementary pair of literals.
    ///
    /// This happens when the clauses clash on more than one variable. Such resolvents are always
    /// true and can be dropped.
    Tautology,
    /// The clauses clash on exactly one variable.
    Clause(Clause),
}

impl Clause {
    /// The empty clause.
    pub fn empty() -> Clause {
        Clause::default()
    }

    /// Creates a clause from its positive and negated variables.
    pub fn new(positive: BTreeSet<Var>, negative: BTreeSet<Var>) -> Clause {
        Clause { positive, negative }
    }

    /// Creates a clause from a sequence of literals.
    pub fn from_lits(lits: impl IntoIterator<Item = Lit>) -> Clause {
        let mut clause = Clause::empty();
        for lit in lits {
            if lit.is_positive() {
                clause.positive.insert(lit.var().clone());
            } else {
                clause.negative.insert(lit.var().clone());
            }
        }
        clause
    }

    /// Variables occurring positively.
    pub fn positive(&self) -> &BTreeSet<Var> {
        &self.positive
    }

    /// Variables occurring negated.
    pub fn negative(&self) -> &BTreeSet<Var> {
        &self.negative
    }

    /// Whether this is the empty clause.
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Number of literals.
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    /// Whether the clause contains a literal and its negation.
    pub fn is_tautology(&self) -> bool {
        !self.positive.is_disjoint(&self.negative)
    }

    /// Literals of the clause, positive literals first, each group in name order.
    pub fn lits(&self) -> impl Iterator<Item = Lit> + '_ {
        let positive = self.positive.iter().map(Var::positive);
        let negative = self.negative.iter().map(Var::negative);
        positive.chain(negative)
    }

    /// Variables of the clause in name order, without duplicates.
    pub fn vars(&self) -> impl Iterator<Item = &Var> {
        self.positive.union(&self.negative)
    }

    /// Resolves this clause with another clause.
    ///
    /// When the clauses clash on exactly one variable, the resolvent is the union of their
    /// literals without the two clashing literals. Other literals of the clashing variable are
    /// kept, so resolving with a tautological clause never loses a literal.
    pub fn resolve(&self, other: &Clause) -> Resolvent {
        let clashing: BTreeSet<&Var> = self
            .positive
            .intersection(&other.negative)
            .chain(self.negative.intersection(&other.positive))
            .collect();

        let var = match clashing.len() {
            0 => return Resolvent::None,
            1 => clashing.into_iter().next().cloned(),
            _ => return Resolvent::Tautology,
        };

        let mut left = self.clone();
        let mut right = other.clone();

        if let Some(var) = var {
            if left.positive.contains(&var) && right.negative.contains(&var) {
                left.positive.remove(&var);
                right.negative.remove(&var);
            } else {
                left.negative.remove(&var);
                right.positive.remove(&var);
            }
        }

        left.positive.extend(right.positive);
        left.negative.extend(right.negative);

        if left.is_tautology() {
            Resolvent::Tautology
        } else {
            Resolvent::Clause(left)
        }
    }
}

/// Uses the surface syntax, e.g. `A OR (NOT B)`, `FALSE` for the empty clause.
impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("FALSE");
        }
        for (index, lit) in self.lits().enumerate() {
            if index > 0 {
                f.write_str(" OR ")?;
            }
            if lit.is_negative() {
                write!(f, "(NOT {})", lit.var())?;
            } else {
                write!(f, "{}", lit.var())?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.lits()).finish()
    }
}
