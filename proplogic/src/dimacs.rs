//! Export of clauses as DIMACS CNF.
//!
//! DIMACS numbers variables starting at 1. Variables are numbered in name order and each number is
//! documented by a comment line `c <number> <name>` before the header.
use std::collections::BTreeSet;
use std::io;

use rustc_hash::FxHashMap;

use proplogic_formula::{Clause, Var};

/// Write clauses as DIMACS CNF.
///
/// Returns the variables in numbering order, i.e. the variable numbered `n` is at index `n - 1`.
pub fn write_dimacs(target: &mut impl io::Write, clauses: &[Clause]) -> io::Result<Vec<Var>> {
    let vars: Vec<Var> = clauses
        .iter()
        .flat_map(Clause::vars)
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let numbers: FxHashMap<&Var, isize> = vars
        .iter()
        .enumerate()
        .map(|(index, var)| (var, index as isize + 1))
        .collect();

    for (index, var) in vars.iter().enumerate() {
        target.write_all(b"c ")?;
        itoa::write(&mut *target, index + 1)?;
        writeln!(target, " {}", var)?;
    }

    writeln!(
        target,
        "p cnf {var_count} {clause_count}",
        var_count = vars.len(),
        clause_count = clauses.len()
    )?;

    for clause in clauses {
        for lit in clause.lits() {
            let number = numbers[lit.var()];
            itoa::write(&mut *target, if lit.is_negative() { -number } else { number })?;
            target.write_all(b" ")?;
        }
        target.write_all(b"0\n")?;
    }

    Ok(vars)
}
