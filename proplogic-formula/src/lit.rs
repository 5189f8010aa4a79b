//! Variables and literals.
use std::{borrow::Borrow, fmt, ops, sync::Arc};

/// A propositional variable.
///
/// Variables are identified by their name. Cloning a variable only bumps a reference count, so
/// variables can be freely copied into sets, models and clauses.
///
/// Variables are ordered by name. All algorithms iterate over variables in this order, which makes
/// their behavior reproducible.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var {
    name: Arc<str>,
}

impl Var {
    /// Creates a variable with the given name.
    ///
    /// The name is not validated. Only names consisting of a letter followed by letters or digits
    /// that aren't keywords can be read back by the parser.
    pub fn new(name: impl AsRef<str>) -> Var {
        Var {
            name: Arc::from(name.as_ref()),
        }
    }

    /// The variable's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creates a literal from this var and a `bool` that is `true` when the literal is positive.
    ///
    /// Shortcut for `Lit::from_var(var, polarity)`.
    pub fn lit(&self, polarity: bool) -> Lit {
        Lit::from_var(self.clone(), polarity)
    }

    /// Creates a positive literal from this var.
    pub fn positive(&self) -> Lit {
        self.lit(true)
    }

    /// Creates a negative literal from this var.
    pub fn negative(&self) -> Lit {
        self.lit(false)
    }
}

impl Borrow<str> for Var {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Var {
    fn from(name: &str) -> Var {
        Var::new(name)
    }
}

impl From<String> for Var {
    fn from(name: String) -> Var {
        Var::new(name)
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A literal.
///
/// A literal is a variable or the negation of a variable. Literals of the same variable are
/// ordered with the positive literal first.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Lit {
    var: Var,
    negative: bool,
}

impl Lit {
    /// Creates a literal from a `Var` and a `bool` that is `true` when the literal is positive.
    pub fn from_var(var: Var, polarity: bool) -> Lit {
        Lit {
            var,
            negative: !polarity,
        }
    }

    /// Create a positive literal from a `Var`.
    pub fn positive(var: Var) -> Lit {
        Lit::from_var(var, true)
    }

    /// Create a negative literal from a `Var`.
    pub fn negative(var: Var) -> Lit {
        Lit::from_var(var, false)
    }

    /// The literal's variable.
    pub fn var(&self) -> &Var {
        &self.var
    }

    /// Whether the literal is negative, i.e. a negated variable.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Whether the literal is positive, i.e. a non-negated variable.
    pub fn is_positive(&self) -> bool {
        !self.negative
    }
}

impl ops::Not for Lit {
    type Output = Lit;

    fn not(self) -> Lit {
        Lit {
            var: self.var,
            negative: !self.negative,
        }
    }
}

impl ops::BitXor<bool> for Lit {
    type Output = Lit;

    fn bitxor(self, rhs: bool) -> Lit {
        Lit {
            var: self.var,
            negative: self.negative ^ rhs,
        }
    }
}

impl From<Var> for Lit {
    fn from(var: Var) -> Lit {
        Lit::positive(var)
    }
}

/// Uses the surface syntax, i.e. `A` or `NOT A`.
impl fmt::Debug for Lit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.negative {
            write!(f, "NOT {}", self.var)
        } else {
            write!(f, "{}", self.var)
        }
    }
}

/// Uses the surface syntax, i.e. `A` or `NOT A`.
impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(any(test, feature = "proptest-strategies"))]
#[doc(hidden)]
pub mod strategy {
    use super::*;
    use proptest::{prelude::*, *};

    /// Variables named `X0`, `X1`, ...
    pub fn var(index: impl Strategy<Value = usize>) -> impl Strategy<Value = Var> {
        index.prop_map(|index| Var::new(format!("X{}", index)))
    }

    pub fn lit(index: impl Strategy<Value = usize>) -> impl Strategy<Value = Lit> {
        (var(index), bool::ANY).prop_map(|(var, polarity)| var.lit(polarity))
    }
}
