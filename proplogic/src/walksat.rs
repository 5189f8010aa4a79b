//! Stochastic local search for models.
use std::collections::BTreeSet;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use proplogic_formula::{clauses, Clause, Expr, Lit, Model, Var};

use crate::config::check_probability;
use crate::error::Error;

/// Searches a model of the sentence by WalkSAT.
///
/// Starts with a random total assignment and repeatedly flips a variable of a random unsatisfied
/// clause. With the given `probability` that variable is chosen at random, otherwise the variable
/// maximizing the number of satisfied clauses is chosen. Among equally good variables the first
/// in the clause's literal order wins, i.e. positive literals in name order before negated
/// literals in name order.
///
/// Returns `None` when no model was found within `max_flips` flips. This does not mean that the
/// sentence is unsatisfiable.
pub fn walksat(
    sentence: &Expr,
    max_flips: usize,
    probability: f64,
    rng: &mut impl Rng,
) -> Result<Option<Model>, Error> {
    check_probability(probability)?;

    let clauses = clauses(sentence);

    if clauses.iter().any(Clause::is_empty) {
        debug!("WalkSAT input contains the empty clause");
        return Ok(None);
    }

    let vars: BTreeSet<&Var> = clauses.iter().flat_map(Clause::vars).collect();
    let mut model: Model = vars
        .into_iter()
        .map(|var| (var.clone(), rng.gen()))
        .collect();

    for flip in 0..max_flips {
        let unsatisfied: Vec<&Clause> = clauses
            .iter()
            .filter(|clause| model.clause_value(clause) != Some(true))
            .collect();

        let clause = match unsatisfied.choose(rng) {
            Some(clause) => clause,
            None => {
                debug!("WalkSAT found a model after {} flips", flip);
                return Ok(Some(model));
            }
        };

        let lits: Vec<Lit> = clause.lits().collect();

        let lit = if rng.gen_bool(probability) {
            lits.choose(rng)
        } else {
            best_flip(&clauses, &model, &lits)
        };

        if let Some(lit) = lit {
            model.flip(lit.var());
        }
    }

    if satisfied_count(&clauses, &model) == clauses.len() {
        debug!("WalkSAT found a model with its last flip");
        Ok(Some(model))
    } else {
        debug!("WalkSAT gave up after {} flips", max_flips);
        Ok(None)
    }
}

/// The first literal whose variable maximizes the satisfied clauses when flipped.
fn best_flip<'a>(clauses: &[Clause], model: &Model, lits: &'a [Lit]) -> Option<&'a Lit> {
    let mut best: Option<(&Lit, usize)> = None;

    for lit in lits {
        let mut flipped = model.clone();
        flipped.flip(lit.var());
        let score = satisfied_count(clauses, &flipped);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((lit, score));
        }
    }

    best.map(|(lit, _)| lit)
}

fn satisfied_count(clauses: &[Clause], model: &Model) -> usize {
    clauses
        .iter()
        .filter(|clause| model.clause_value(clause) == Some(true))
        .count()
}
