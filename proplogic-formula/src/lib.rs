//! Basic propositional formula data types used by the proplogic reasoning engine.

/// Shortcut for tests
#[cfg(any(test, feature = "internal-testing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! var {
    ($x:expr) => {
        $crate::lit::Var::new($x)
    };
}

/// Shortcut for tests
#[cfg(any(test, feature = "internal-testing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! vars {
    ( $( $x:expr ),* ) => { [ $( $crate::var!( $x ) ),* ] };
    ( $( $x:expr ),* , ) => { $crate::vars! [ $( $ x),* ] };
}

/// Shortcut for tests, positive variables before the `;`, negated ones after it.
#[cfg(any(test, feature = "internal-testing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! clause {
    ( $( $p:expr ),* ; $( $n:expr ),* ) => {
        $crate::clause::Clause::new(
            vec![ $( $crate::var!( $p ) ),* ].into_iter().collect(),
            vec![ $( $crate::var!( $n ) ),* ].into_iter().collect(),
        )
    };
}

pub mod clause;
pub mod cnf;
pub mod expr;
pub mod horn;
pub mod lit;
pub mod model;


pub use clause::{Clause, Resolvent};
pub use cnf::{clauses, gather_clauses, gather_literals, to_cnf};
pub use expr::Expr;
pub use horn::{HornClause, HornFormatError};
pub use lit::{Lit, Var};
pub use model::Model;
