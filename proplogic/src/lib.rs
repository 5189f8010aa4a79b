//! Proplogic is a reasoning engine for propositional logic. It parses sentences like
//! `B11 <=> (P12 OR P21)`, converts them to [conjunctive normal form][cnf] and decides
//! entailment and satisfiability.
//!
//! Entailment can be decided by enumerating truth tables, by resolution refutation, by DPLL and,
//! for knowledge bases consisting of Horn clauses, by forward chaining. Satisfying models can be
//! searched with DPLL or with the stochastic local search WalkSAT.
//!
//! [cnf]: https://en.wikipedia.org/wiki/Conjunctive_normal_form

pub mod config;
pub mod dimacs;
pub mod dpll;
pub mod entails;
pub mod forward_chaining;
pub mod kb;
pub mod resolution;
pub mod tt_entails;
pub mod walksat;

mod error;

pub use proplogic_formula::{
    clause, cnf, expr, horn, lit, model, Clause, Expr, HornClause, HornFormatError, Lit, Model,
    Var,
};

pub mod parser {
    //! Lexer and parser for the surface syntax.
    pub use proplogic_parser::*;
}

pub use dpll::dpll_satisfiable;
pub use entails::{
    dpll_model, dpll_satisfiable_str, entails, entails_expr, find_model, find_model_with, Algorithm,
};
pub use error::Error;
pub use kb::KnowledgeBase;
