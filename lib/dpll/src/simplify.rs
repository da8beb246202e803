use sat_oracle_core::cnf::clause::Clause;

use crate::assignment::Assignment;
use crate::lbool::LBool;

/// Working clause set of a search node.
pub type Formula = Vec<Clause>;

/// Rewrite `formula` under `assignment`.
///
/// Satisfied clauses are dropped, falsified literals are removed, unassigned
/// literals are kept in their original order. A clause that loses all of its
/// literals stays in the result as an empty clause.
pub fn simplify(formula: &[Clause], assignment: &Assignment) -> Formula {
    formula
        .iter()
        .filter_map(|clause| simplify_clause(clause, assignment))
        .collect()
}

/// Simplified copy of `clause`, or `None` if `assignment` satisfies it.
pub fn simplify_clause(clause: &Clause, assignment: &Assignment) -> Option<Clause> {
    let mut lits = Vec::with_capacity(clause.len());
    for &lit in clause.iter() {
        match assignment.value(lit) {
            LBool::True => return None,
            LBool::False => {}
            LBool::Undef => lits.push(lit),
        }
    }
    Some(Clause::new(lits))
}

pub fn has_empty_clause(formula: &[Clause]) -> bool {
    formula.iter().any(|clause| clause.is_empty())
}

#[cfg(test)]
mod tests {
    use sat_oracle_core::cnf::Cnf;
    use sat_oracle_core::error::Result;

    use super::*;

    fn formula(clauses: &[&[i32]]) -> Result<Formula> {
        Ok(Cnf::try_from_ints(clauses.iter().map(|c| c.iter().copied()))?.clauses)
    }

    #[test]
    fn test_simplify_drops_satisfied() -> Result<()> {
        let f = formula(&[&[1, 2, 3], &[-1, 2, -3], &[4]])?;
        let mut assignment = Assignment::new(4);
        assignment.assign_var(1, true);

        let simplified = simplify(&f, &assignment);
        assert_eq!(simplified, formula(&[&[2, -3], &[4]])?);
        Ok(())
    }

    #[test]
    fn test_simplify_keeps_empty_clause() -> Result<()> {
        let f = formula(&[&[1, -2], &[3]])?;
        let mut assignment = Assignment::new(3);
        assignment.assign_var(1, false);
        assignment.assign_var(2, true);

        let simplified = simplify(&f, &assignment);
        assert_eq!(simplified.len(), 2);
        assert!(simplified[0].is_empty());
        assert!(has_empty_clause(&simplified));
        Ok(())
    }

    #[test]
    fn test_simplify_unassigned_is_identity() -> Result<()> {
        let f = formula(&[&[1, 2], &[-2, 3]])?;
        assert_eq!(simplify(&f, &Assignment::new(3)), f);
        Ok(())
    }

    #[test]
    fn test_simplify_does_not_touch_input() -> Result<()> {
        let f = formula(&[&[1, 2]])?;
        let mut assignment = Assignment::new(2);
        assignment.assign_var(1, false);
        let simplified = simplify(&f, &assignment);
        assert_eq!(simplified, formula(&[&[2]])?);
        assert_eq!(f, formula(&[&[1, 2]])?);
        Ok(())
    }
}
