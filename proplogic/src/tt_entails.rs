//! Entailment by truth table enumeration.
//!
//! Checks every assignment of the variables of the knowledge base and the query. This takes time
//! exponential in the number of variables and is mostly useful as a reference for the other
//! algorithms.
use log::debug;

use proplogic_formula::{Expr, Model, Var};

use crate::kb::KnowledgeBase;

/// Whether every model of the knowledge base is a model of the query.
///
/// An empty knowledge base is treated as `TRUE`.
pub fn tt_entails(kb: &KnowledgeBase, query: &Expr) -> bool {
    sentence_entails(&kb.sentence_or_true(), query)
}

/// Whether every model of `premise` is a model of `query`.
pub fn sentence_entails(premise: &Expr, query: &Expr) -> bool {
    let mut vars = premise.vars();
    query.collect_vars(&mut vars);
    let vars: Vec<Var> = vars.into_iter().collect();

    debug!("Enumerating assignments of {} variables", vars.len());

    check_all(premise, query, &vars, Model::new())
}

fn check_all(premise: &Expr, query: &Expr, vars: &[Var], model: Model) -> bool {
    match vars.split_first() {
        None => {
            if model.is_true(premise) == Some(true) {
                model.is_true(query) == Some(true)
            } else {
                true
            }
        }
        Some((var, rest)) => {
            check_all(premise, query, rest, model.extend(var.clone(), true))
                && check_all(premise, query, rest, model.extend(var.clone(), false))
        }
    }
}
