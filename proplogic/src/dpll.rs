//! Satisfiability by the Davis-Putnam-Logemann-Loveland procedure.
use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use proplogic_formula::{clauses, Clause, Expr, Lit, Model, Var};

/// Searches a model satisfying the sentence.
///
/// The returned model can be partial. Variables it leaves unassigned can take any value.
pub fn dpll(sentence: &Expr) -> Option<Model> {
    let clauses = clauses(sentence);
    let vars: Vec<Var> = clauses
        .iter()
        .flat_map(Clause::vars)
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    debug!(
        "DPLL on {} clauses over {} variables",
        clauses.len(),
        vars.len()
    );

    let mut search = Search {
        clauses: &clauses,
        vars: &vars,
        decisions: 0,
    };

    let result = search.solve(Model::new());

    debug!(
        "DPLL finished after {} decisions: {}",
        search.decisions,
        if result.is_some() {
            "satisfiable"
        } else {
            "unsatisfiable"
        }
    );

    result
}

/// Whether the sentence has a model.
pub fn dpll_satisfiable(sentence: &Expr) -> bool {
    dpll(sentence).is_some()
}

struct Search<'a> {
    clauses: &'a [Clause],
    /// All variables in name order.
    vars: &'a [Var],
    decisions: usize,
}

impl<'a> Search<'a> {
    fn solve(&mut self, model: Model) -> Option<Model> {
        let mut open = vec![];
        for clause in self.clauses {
            match model.clause_value(clause) {
                Some(true) => (),
                Some(false) => return None,
                None => open.push(clause),
            }
        }

        if open.is_empty() {
            return Some(model);
        }

        if let Some(lit) = pure_symbol(&open, &model) {
            return self.solve(assign(&model, &lit));
        }

        if let Some(lit) = unit_clause(&open, &model) {
            return self.solve(assign(&model, &lit));
        }

        // An open clause has an unassigned variable.
        let var = self
            .vars
            .iter()
            .find(|var| model.value(var).is_none())?;

        self.decisions += 1;

        self.solve(model.extend(var.clone(), true))
            .or_else(|| self.solve(model.extend(var.clone(), false)))
    }
}

fn assign(model: &Model, lit: &Lit) -> Model {
    model.extend(lit.var().clone(), lit.is_positive())
}

/// The first unassigned variable, in name order, that appears with only one polarity in the open
/// clauses.
fn pure_symbol(open: &[&Clause], model: &Model) -> Option<Lit> {
    // Polarities (positive, negative) of each unassigned variable.
    let mut polarities: BTreeMap<&Var, (bool, bool)> = BTreeMap::new();

    for clause in open {
        for var in clause.positive() {
            if model.value(var).is_none() {
                polarities.entry(var).or_default().0 = true;
            }
        }
        for var in clause.negative() {
            if model.value(var).is_none() {
                polarities.entry(var).or_default().1 = true;
            }
        }
    }

    polarities
        .into_iter()
        .find_map(|(var, polarity)| match polarity {
            (true, false) => Some(var.positive()),
            (false, true) => Some(var.negative()),
            _ => None,
        })
}

/// The unassigned literal of the first open clause whose other literals are all false.
fn unit_clause(open: &[&Clause], model: &Model) -> Option<Lit> {
    open.iter().find_map(|clause| {
        let mut unassigned = clause.lits().filter(|lit| model.lit_value(lit).is_none());
        match (unassigned.next(), unassigned.next()) {
            (Some(lit), None) => Some(lit),
            _ => None,
        }
    })
}
