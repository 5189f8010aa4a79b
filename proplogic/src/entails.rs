//! Entry points taking sentences in surface syntax.
use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use proplogic_formula::{Expr, Model};
use proplogic_parser::parse;

use crate::config::WalkSatConfig;
use crate::dpll::{dpll, dpll_satisfiable};
use crate::error::Error;
use crate::forward_chaining::pl_fc_entails;
use crate::kb::KnowledgeBase;
use crate::resolution::pl_resolution;
use crate::tt_entails::tt_entails;
use crate::walksat::walksat;

/// Algorithms deciding entailment.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Algorithm {
    /// Enumerate all truth assignments.
    TruthTable,
    /// Refute `KB AND NOT query` by resolution.
    Resolution,
    /// Forward chaining, requires a knowledge base of Horn clauses and a variable as query.
    ForwardChaining,
    /// Show that `KB AND NOT query` has no model using DPLL.
    Dpll,
}

impl Algorithm {
    /// Short names as accepted by [`FromStr`].
    pub const NAMES: &'static [&'static str] = &["tt", "resolution", "fc", "dpll"];

    fn name(self) -> &'static str {
        match self {
            Algorithm::TruthTable => "tt",
            Algorithm::Resolution => "resolution",
            Algorithm::ForwardChaining => "fc",
            Algorithm::Dpll => "dpll",
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Algorithm, Error> {
        match &name.to_ascii_lowercase()[..] {
            "tt" | "truth-table" => Ok(Algorithm::TruthTable),
            "resolution" => Ok(Algorithm::Resolution),
            "fc" | "forward-chaining" => Ok(Algorithm::ForwardChaining),
            "dpll" => Ok(Algorithm::Dpll),
            _ => Err(Error::Precondition(format!(
                "Unknown algorithm '{}', expected one of {}",
                name,
                Algorithm::NAMES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses the query and decides whether the knowledge base entails it.
pub fn entails(kb: &KnowledgeBase, query: &str, algorithm: Algorithm) -> Result<bool, Error> {
    entails_expr(kb, &parse(query)?, algorithm)
}

/// Decides whether the knowledge base entails the query.
///
/// Forward chaining fails unless the knowledge base consists of Horn clauses and the query is a
/// single variable.
pub fn entails_expr(kb: &KnowledgeBase, query: &Expr, algorithm: Algorithm) -> Result<bool, Error> {
    debug!(
        "Deciding entailment of {} from {} sentences using {}",
        query,
        kb.len(),
        algorithm
    );

    let entailed = match algorithm {
        Algorithm::TruthTable => tt_entails(kb, query),
        Algorithm::Resolution => pl_resolution(kb, query),
        Algorithm::ForwardChaining => match query {
            Expr::Var(var) => pl_fc_entails(kb, var)?,
            _ => {
                return Err(Error::Precondition(format!(
                    "Forward chaining needs a single variable as query, got {}",
                    query
                )))
            }
        },
        Algorithm::Dpll => {
            let refuted = Expr::and(kb.sentence_or_true(), Expr::negation(query.clone()));
            !dpll_satisfiable(&refuted)
        }
    };

    Ok(entailed)
}

/// Parses a sentence and searches a model using WalkSAT.
pub fn find_model(
    sentence: &str,
    max_flips: usize,
    probability: f64,
) -> Result<Option<Model>, Error> {
    let config = WalkSatConfig {
        max_flips,
        random_walk_probability: probability,
        ..WalkSatConfig::default()
    };
    find_model_with(&parse(sentence)?, &config)
}

/// Searches a model using WalkSAT with the given configuration.
pub fn find_model_with(sentence: &Expr, config: &WalkSatConfig) -> Result<Option<Model>, Error> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    walksat(
        sentence,
        config.max_flips,
        config.random_walk_probability,
        &mut rng,
    )
}

/// Parses a sentence and searches a model using DPLL.
pub fn dpll_model(sentence: &str) -> Result<Option<Model>, Error> {
    Ok(dpll(&parse(sentence)?))
}

/// Parses a sentence and decides whether it has a model.
pub fn dpll_satisfiable_str(sentence: &str) -> Result<bool, Error> {
    Ok(dpll_satisfiable(&parse(sentence)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::{collection, prelude::*};

    use proplogic_formula::{
        expr::strategy::{constant_free_expr, expr},
        horn::strategy::horn_sentence,
        lit::strategy::var,
    };
    use proplogic_parser::ParserError;

    fn kb(sentences: &[&str]) -> KnowledgeBase {
        let mut kb = KnowledgeBase::new();
        kb.tell_all(sentences.iter().cloned()).unwrap();
        kb
    }

    const ALGORITHMS: [Algorithm; 4] = [
        Algorithm::TruthTable,
        Algorithm::Resolution,
        Algorithm::ForwardChaining,
        Algorithm::Dpll,
    ];

    #[test]
    fn every_algorithm_on_horn_clauses() -> Result<(), Error> {
        let kb = kb(&["A => B", "(B AND C) => D", "A", "C"]);
        for &algorithm in ALGORITHMS.iter() {
            assert!(entails(&kb, "D", algorithm)?, "{}", algorithm);
            assert!(!entails(&kb, "E", algorithm)?, "{}", algorithm);
        }
        Ok(())
    }

    #[test]
    fn forward_chaining_preconditions() {
        let horn = kb(&["A => B", "A"]);
        assert!(matches!(
            entails(&horn, "A AND B", Algorithm::ForwardChaining),
            Err(Error::Precondition(_))
        ));

        let not_horn = kb(&["A OR B"]);
        assert!(matches!(
            entails(&not_horn, "A", Algorithm::ForwardChaining),
            Err(Error::HornFormat(_))
        ));
    }

    #[test]
    fn parse_errors() {
        let kb = kb(&["A"]);
        assert!(matches!(
            entails(&kb, "A AND", Algorithm::TruthTable),
            Err(Error::Parse(ParserError::UnexpectedToken { .. }))
        ));
        assert!(matches!(
            find_model("(A", 10, 0.5),
            Err(Error::Parse(_))
        ));
        assert!(dpll_satisfiable_str("A OR").is_err());

        // The knowledge base stays usable.
        assert_eq!(entails(&kb, "A", Algorithm::TruthTable), Ok(true));
    }

    #[test]
    fn algorithm_names() -> Result<(), Error> {
        for &algorithm in ALGORITHMS.iter() {
            assert_eq!(algorithm.to_string().parse::<Algorithm>()?, algorithm);
        }
        assert_eq!("TT".parse::<Algorithm>()?, Algorithm::TruthTable);
        assert!("walksat".parse::<Algorithm>().is_err());
        Ok(())
    }

    #[test]
    fn dpll_strings() -> Result<(), Error> {
        assert!(!dpll_satisfiable_str("A AND (NOT A)")?);
        assert!(dpll_satisfiable_str("A OR (NOT A)")?);
        assert!(dpll_model("NOT A")?.is_some());
        Ok(())
    }

    #[test]
    fn seeded_search_is_reproducible() -> Result<(), Error> {
        let sentence = parse("(A OR B) AND (C OR D) AND ((NOT A) OR (NOT C))").unwrap();
        let config = WalkSatConfig {
            seed: Some(42),
            ..WalkSatConfig::default()
        };
        let first = find_model_with(&sentence, &config)?;
        assert!(first.is_some());
        assert_eq!(find_model_with(&sentence, &config)?, first);
        Ok(())
    }

    proptest! {
        #[test]
        fn forward_chaining_agrees_with_truth_tables(
            sentences in collection::vec(horn_sentence(6, 3), 0..8),
            query in var(0..6usize),
        ) {
            let mut kb = KnowledgeBase::new();
            kb.extend(sentences);
            let query = Expr::Var(query);
            prop_assert_eq!(
                entails_expr(&kb, &query, Algorithm::ForwardChaining),
                entails_expr(&kb, &query, Algorithm::TruthTable)
            );
        }

        #[test]
        fn resolution_agrees_with_truth_tables(
            sentences in collection::vec(expr(4, 2), 0..3),
            query in expr(4, 2),
        ) {
            let mut kb = KnowledgeBase::new();
            kb.extend(sentences);
            prop_assert_eq!(
                entails_expr(&kb, &query, Algorithm::Resolution),
                entails_expr(&kb, &query, Algorithm::TruthTable)
            );
        }

        #[test]
        fn dpll_agrees_with_truth_tables(
            sentences in collection::vec(constant_free_expr(5, 3), 0..4),
            query in constant_free_expr(5, 2),
        ) {
            let mut kb = KnowledgeBase::new();
            kb.extend(sentences);
            prop_assert_eq!(
                entails_expr(&kb, &query, Algorithm::Dpll),
                entails_expr(&kb, &query, Algorithm::TruthTable)
            );
        }
    }
}
