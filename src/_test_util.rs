use super::*;

/// Make the standard evaluator used across tests.
pub fn mk_evaluator() -> Evaluator {
    Evaluator::new()
}

/// Make an assignment from literal pairs.
pub fn mk_assignment(pairs: &[(char, bool)]) -> Assignment {
    pairs.iter().copied().collect()
}

/// Generate a table for `formula` with the standard evaluator, panicking on error.
pub fn mk_table(formula: &str) -> TruthTable {
    TruthTable::generate(&mk_evaluator(), formula)
        .expect("Test formula must produce a table.")
}
