//! Horn clauses in implication form.
use std::convert::TryFrom;
use std::fmt;

use thiserror::Error;

use crate::expr::Expr;
use crate::lit::Var;

/// A sentence that isn't a fact or a single headed implication.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Sentence is not a Horn clause: {sentence}")]
pub struct HornFormatError {
    pub sentence: String,
}

/// A Horn clause `p1 AND ... AND pn => head`.
///
/// A clause without premises is a fact.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HornClause {
    head: Var,
    premises: Vec<Var>,
}

impl HornClause {
    /// Creates a Horn clause, dropping repeated premises.
    pub fn new(head: Var, premises: impl IntoIterator<Item = Var>) -> HornClause {
        let mut clause = HornClause {
            head,
            premises: vec![],
        };
        for premise in premises {
            clause.add_premise(premise);
        }
        clause
    }

    /// The implied variable.
    pub fn head(&self) -> &Var {
        &self.head
    }

    /// The premises in order of first occurrence.
    pub fn premises(&self) -> &[Var] {
        &self.premises
    }

    pub fn is_fact(&self) -> bool {
        self.premises.is_empty()
    }

    fn add_premise(&mut self, premise: Var) {
        if !self.premises.contains(&premise) {
            self.premises.push(premise);
        }
    }

    /// Adds the variables of a conjunction of variables as premises.
    ///
    /// Returns false if the sentence is not such a conjunction.
    fn add_premises(&mut self, antecedent: &Expr) -> bool {
        match antecedent {
            Expr::Var(var) => {
                self.add_premise(var.clone());
                true
            }
            Expr::And(left, right) => self.add_premises(left) && self.add_premises(right),
            _ => false,
        }
    }
}

/// Accepts a variable (a fact) or an implication of a variable by a conjunction of variables.
impl TryFrom<&Expr> for HornClause {
    type Error = HornFormatError;

    fn try_from(sentence: &Expr) -> Result<HornClause, HornFormatError> {
        match sentence {
            Expr::Var(head) => return Ok(HornClause::new(head.clone(), None)),
            Expr::Implication(antecedent, consequent) => {
                if let Expr::Var(head) = &**consequent {
                    let mut clause = HornClause::new(head.clone(), None);
                    if clause.add_premises(antecedent) {
                        return Ok(clause);
                    }
                }
            }
            _ => (),
        }
        Err(HornFormatError {
            sentence: sentence.to_string(),
        })
    }
}

/// Uses the surface syntax, e.g. `A AND B => C`.
impl fmt::Display for HornClause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, premise) in self.premises.iter().enumerate() {
            let separator = if index + 1 == self.premises.len() {
                " => "
            } else {
                " AND "
            };
            write!(f, "{}{}", premise, separator)?;
        }
        write!(f, "{}", self.head)
    }
}

#[cfg(any(test, feature = "proptest-strategies"))]
#[doc(hidden)]
pub mod strategy {
    use super::*;
    use proptest::{prelude::*, *};

    use crate::lit::strategy::var;

    /// Facts and implications over the variables `X0` to `X{vars - 1}`.
    pub fn horn_sentence(vars: usize, max_premises: usize) -> impl Strategy<Value = Expr> {
        (var(0..vars), collection::vec(var(0..vars), 0..=max_premises)).prop_map(
            |(head, premises)| match Expr::conjunction(premises.into_iter().map(Expr::Var)) {
                Some(antecedent) => Expr::implies(antecedent, Expr::Var(head)),
                None => Expr::Var(head),
            },
        )
    }
}
