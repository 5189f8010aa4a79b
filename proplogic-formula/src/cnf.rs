//! Conversion to conjunctive normal form (CNF).
use std::collections::BTreeSet;

use rustc_hash::FxHashSet;

use crate::clause::Clause;
use crate::expr::Expr;
use crate::lit::Var;

/// Rewrites a sentence into an equivalent sentence in conjunctive normal form.
///
/// The result contains no implications or biconditionals, negations only apply to variables, and
/// it is a literal, a disjunction of literals or a conjunction of such disjunctions. Constants are
/// kept, but negated constants are folded.
///
/// The rewrite recurses along the structure of the sentence, so its stack usage grows with the
/// nesting depth.
pub fn to_cnf(expr: &Expr) -> Expr {
    match expr {
        Expr::True | Expr::False | Expr::Var(_) => expr.clone(),
        Expr::Not(inner) => negated_cnf(inner),
        Expr::And(left, right) => Expr::and(to_cnf(left), to_cnf(right)),
        Expr::Or(left, right) => distribute(&to_cnf(left), &to_cnf(right)),
        // a => b is rewritten to (NOT a) OR b
        Expr::Implication(left, right) => distribute(&negated_cnf(left), &to_cnf(right)),
        // a <=> b is rewritten to (a => b) AND (b => a)
        Expr::Biconditional(left, right) => Expr::and(
            distribute(&negated_cnf(left), &to_cnf(right)),
            distribute(&negated_cnf(right), &to_cnf(left)),
        ),
    }
}

/// CNF of `NOT expr`, pushing the negation inwards.
fn negated_cnf(expr: &Expr) -> Expr {
    match expr {
        Expr::True => Expr::False,
        Expr::False => Expr::True,
        Expr::Var(_) => Expr::negation(expr.clone()),
        Expr::Not(inner) => to_cnf(inner),
        Expr::And(left, right) => distribute(&negated_cnf(left), &negated_cnf(right)),
        Expr::Or(left, right) => Expr::and(negated_cnf(left), negated_cnf(right)),
        Expr::Implication(left, right) => Expr::and(to_cnf(left), negated_cnf(right)),
        Expr::Biconditional(left, right) => Expr::and(
            distribute(&to_cnf(left), &to_cnf(right)),
            distribute(&negated_cnf(left), &negated_cnf(right)),
        ),
    }
}

/// CNF of `left OR right` for operands already in CNF.
///
/// `l OR (x AND y)` becomes `(x OR l) AND (y OR l)` and `(x AND y) OR r` becomes
/// `(x OR r) AND (y OR r)`. The new disjunctions are distributed again until no disjunction
/// contains a conjunction.
fn distribute(left: &Expr, right: &Expr) -> Expr {
    match (left, right) {
        (_, Expr::And(x, y)) => Expr::and(distribute(x, left), distribute(y, left)),
        (Expr::And(x, y), _) => Expr::and(distribute(x, right), distribute(y, right)),
        _ => Expr::or(left.clone(), right.clone()),
    }
}

/// Top-level conjuncts of a CNF sentence.
///
/// Structurally equal conjuncts are only returned once, in order of first occurrence. A sentence
/// that isn't a conjunction is returned as the single clause.
pub fn gather_clauses(cnf: &Expr) -> Vec<Expr> {
    let mut seen = FxHashSet::default();
    let mut clauses = vec![];
    let mut stack = vec![cnf];

    while let Some(expr) = stack.pop() {
        match expr {
            Expr::And(left, right) => {
                stack.push(right);
                stack.push(left);
            }
            _ => {
                if seen.insert(expr) {
                    clauses.push(expr.clone());
                }
            }
        }
    }

    clauses
}

/// Variables occurring positively and negated in a disjunction of literals.
///
/// Constants and subsentences that aren't literals are skipped.
pub fn gather_literals(clause: &Expr) -> (BTreeSet<Var>, BTreeSet<Var>) {
    let mut positive = BTreeSet::new();
    let mut negative = BTreeSet::new();

    for_each_disjunct(clause, &mut |disjunct| match disjunct.as_lit() {
        Some(lit) if lit.is_positive() => {
            positive.insert(lit.var().clone());
        }
        Some(lit) => {
            negative.insert(lit.var().clone());
        }
        None => (),
    });

    (positive, negative)
}

/// Clauses of the CNF of a sentence.
///
/// Disjunctions containing `TRUE` are always satisfied and are dropped, `FALSE` disjuncts are
/// dropped from their disjunction. The sentence `FALSE` thus yields the empty clause and the
/// sentence `TRUE` yields no clauses at all.
pub fn clauses(expr: &Expr) -> Vec<Clause> {
    let mut seen = FxHashSet::default();
    let mut clauses = vec![];

    for disjunction in gather_clauses(&to_cnf(expr)) {
        let mut satisfied = false;
        for_each_disjunct(&disjunction, &mut |disjunct| {
            if let Expr::True = disjunct {
                satisfied = true;
            }
        });
        if satisfied {
            continue;
        }

        let (positive, negative) = gather_literals(&disjunction);
        let clause = Clause::new(positive, negative);
        if seen.insert(clause.clone()) {
            clauses.push(clause);
        }
    }

    clauses
}

fn for_each_disjunct<'a>(expr: &'a Expr, action: &mut impl FnMut(&'a Expr)) {
    match expr {
        Expr::Or(left, right) => {
            for_each_disjunct(left, action);
            for_each_disjunct(right, action);
        }
        _ => action(expr),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use crate::expr::strategy::expr;
    use crate::model::Model;

    fn v(name: &str) -> Expr {
        Expr::var(name)
    }

    fn is_disjunction(expr: &Expr) -> bool {
        match expr {
            Expr::Or(left, right) => is_disjunction(left) && is_disjunction(right),
            _ => expr.is_literal(),
        }
    }

    fn is_cnf(expr: &Expr) -> bool {
        match expr {
            Expr::And(left, right) => is_cnf(left) && is_cnf(right),
            _ => is_disjunction(expr),
        }
    }

    fn all_models(vars: &[Var]) -> Vec<Model> {
        let mut models = vec![Model::new()];
        for var in vars {
            models = models
                .iter()
                .flat_map(|model| {
                    vec![
                        model.extend(var.clone(), true),
                        model.extend(var.clone(), false),
                    ]
                })
                .collect();
        }
        models
    }

    #[test]
    fn simple_transform() {
        assert_eq!(to_cnf(&v("A")), v("A"));
        assert_eq!(to_cnf(&(v("A") & v("B"))), v("A") & v("B"));
        assert_eq!(to_cnf(&(v("A") | v("B"))), v("A") | v("B"));
    }

    #[test]
    fn implication() {
        assert_eq!(to_cnf(&Expr::implies(v("A"), v("B"))), !v("A") | v("B"));
    }

    #[test]
    fn biconditional() {
        assert_eq!(
            to_cnf(&Expr::iff(v("A"), v("B"))),
            (!v("A") | v("B")) & (!v("B") | v("A"))
        );
    }

    #[test]
    fn repeated_negation() {
        assert_eq!(to_cnf(&!!v("A")), v("A"));
        assert_eq!(to_cnf(&!!!v("A")), !v("A"));
        assert_eq!(to_cnf(&!!!!v("A")), v("A"));
        assert_eq!(to_cnf(&!Expr::True), Expr::False);
    }

    #[test]
    fn de_morgan() {
        assert_eq!(to_cnf(&!(v("A") & v("B"))), !v("A") | !v("B"));
        assert_eq!(to_cnf(&!(v("A") | v("B"))), !v("A") & !v("B"));
    }

    #[test]
    fn or_distribution() {
        assert_eq!(
            to_cnf(&((v("A") & v("B")) | v("C"))),
            (v("A") | v("C")) & (v("B") | v("C"))
        );
        assert_eq!(
            to_cnf(&(v("A") | (v("B") & v("C")))),
            (v("B") | v("A")) & (v("C") | v("A"))
        );
    }

    #[test]
    fn or_distribution_over_compound_operands() {
        let cnf = to_cnf(&((v("A") & v("B")) | (v("C") & v("D"))));
        assert!(is_cnf(&cnf));
        assert_eq!(gather_clauses(&cnf).len(), 4);
    }

    #[test]
    fn wumpus_biconditional() {
        let sentence = Expr::iff(v("B11"), v("P12") | v("P21"));
        assert_eq!(
            to_cnf(&sentence),
            (!v("B11") | (v("P12") | v("P21")))
                & ((!v("P12") | v("B11")) & (!v("P21") | v("B11")))
        );
    }

    #[test]
    fn gather_clauses_flattens_and_dedups() {
        let cnf = (v("A") | v("B")) & ((v("C") & (v("A") | v("B"))) & !v("D"));
        assert_eq!(
            gather_clauses(&cnf),
            [v("A") | v("B"), v("C"), !v("D")]
        );
        assert_eq!(gather_clauses(&(v("A") | v("B"))), [v("A") | v("B")]);
    }

    #[test]
    fn gather_literal_polarities() {
        let (positive, negative) = gather_literals(&(v("A") | (!v("B") | v("C"))));
        assert_eq!(positive.into_iter().collect::<Vec<_>>(), vars!["A", "C"]);
        assert_eq!(negative.into_iter().collect::<Vec<_>>(), vars!["B"]);

        let (positive, negative) = gather_literals(&v("A"));
        assert_eq!(positive.len(), 1);
        assert!(negative.is_empty());

        let (positive, negative) = gather_literals(&!v("A"));
        assert!(positive.is_empty());
        assert_eq!(negative.len(), 1);
    }

    #[test]
    fn clauses_of_constants() {
        assert!(clauses(&Expr::True).is_empty());
        assert_eq!(clauses(&Expr::False), [Clause::empty()]);
        assert!(clauses(&(v("A") | Expr::True)).is_empty());
        assert_eq!(clauses(&(v("A") | Expr::False)), [clause!["A"; ]]);
    }

    #[test]
    fn clauses_collapse_reordered_disjunctions() {
        let sentence = (v("A") | !v("B")) & (!v("B") | v("A"));
        assert_eq!(clauses(&sentence), [clause!["A"; "B"]]);
    }

    proptest! {
        #[test]
        fn cnf_invariant(sentence in expr(5, 4)) {
            prop_assert!(is_cnf(&to_cnf(&sentence)));
        }

        #[test]
        fn cnf_is_equivalent(sentence in expr(4, 4)) {
            let cnf = to_cnf(&sentence);
            let clauses = clauses(&sentence);
            let vars: Vec<Var> = sentence.vars().into_iter().collect();

            for model in all_models(&vars) {
                let expected = model.is_true(&sentence);
                prop_assert!(expected.is_some());
                prop_assert_eq!(model.is_true(&cnf), expected);

                let clauses_value = clauses
                    .iter()
                    .all(|clause| model.clause_value(clause) == Some(true));
                prop_assert_eq!(Some(clauses_value), expected);
            }
        }
    }
}
