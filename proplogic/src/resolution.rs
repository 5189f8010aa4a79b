//! Entailment by resolution refutation.
use log::debug;
use rustc_hash::FxHashSet;

use proplogic_formula::{cnf::clauses, Clause, Expr, Resolvent};

use crate::kb::KnowledgeBase;

/// Whether the knowledge base entails the query.
///
/// Converts `KB AND NOT query` to CNF and adds resolvents until the empty clause is derived or no
/// new clauses can be derived.
pub fn pl_resolution(kb: &KnowledgeBase, query: &Expr) -> bool {
    let refuted = Expr::and(kb.sentence_or_true(), Expr::negation(query.clone()));
    unsatisfiable(clauses(&refuted))
}

/// Whether the clauses are unsatisfiable, decided by saturating them under resolution.
pub fn unsatisfiable(mut clauses: Vec<Clause>) -> bool {
    if clauses.iter().any(Clause::is_empty) {
        return true;
    }

    let mut known: FxHashSet<Clause> = clauses.iter().cloned().collect();

    // Pairs of clauses both below this index were already resolved in an earlier round.
    let mut resolved_below = 0;
    let mut round = 0;

    loop {
        round += 1;
        debug!(
            "Resolution round {}: {} clauses ({} new)",
            round,
            clauses.len(),
            clauses.len() - resolved_below
        );

        let mut new_clauses = vec![];

        for (j, right) in clauses.iter().enumerate().skip(resolved_below) {
            for left in clauses[..j].iter() {
                if let Resolvent::Clause(resolvent) = left.resolve(right) {
                    if resolvent.is_empty() {
                        debug!("Derived the empty clause from {} and {}", left, right);
                        return true;
                    }
                    if known.insert(resolvent.clone()) {
                        new_clauses.push(resolvent);
                    }
                }
            }
        }

        if new_clauses.is_empty() {
            debug!("Saturated with {} clauses", clauses.len());
            return false;
        }

        resolved_below = clauses.len();
        clauses.extend(new_clauses);
    }
}
