//! Entailment by forward chaining over Horn clauses.
use std::collections::VecDeque;
use std::convert::TryFrom;

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use proplogic_formula::{HornClause, HornFormatError, Var};

use crate::kb::KnowledgeBase;

/// Whether a knowledge base of Horn clauses entails a variable.
///
/// Fails if any sentence of the knowledge base is not a Horn clause.
pub fn pl_fc_entails(kb: &KnowledgeBase, query: &Var) -> Result<bool, HornFormatError> {
    let clauses = kb
        .sentences()
        .iter()
        .map(HornClause::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(fc_entails(&clauses, query))
}

/// Whether the Horn clauses entail a variable.
///
/// Runs in time linear in the total number of premises.
pub fn fc_entails(clauses: &[HornClause], query: &Var) -> bool {
    // Number of premises of each clause not yet inferred.
    let mut count: Vec<usize> = clauses
        .iter()
        .map(|clause| clause.premises().len())
        .collect();

    let mut clauses_with_premise: FxHashMap<&Var, Vec<usize>> = FxHashMap::default();
    for (index, clause) in clauses.iter().enumerate() {
        for premise in clause.premises() {
            clauses_with_premise.entry(premise).or_default().push(index);
        }
    }

    let mut inferred: FxHashSet<&Var> = FxHashSet::default();
    let mut agenda: VecDeque<&Var> = clauses
        .iter()
        .filter(|clause| clause.is_fact())
        .map(HornClause::head)
        .collect();

    while let Some(var) = agenda.pop_front() {
        if var == query {
            return true;
        }
        if !inferred.insert(var) {
            continue;
        }

        debug!("Inferred {}", var);

        for &index in clauses_with_premise.get(var).into_iter().flatten() {
            count[index] -= 1;
            if count[index] == 0 {
                let head = clauses[index].head();
                if head == query {
                    return true;
                }
                agenda.push_back(head);
            }
        }
    }

    false
}
