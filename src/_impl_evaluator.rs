use super::{Evaluator, OperatorTable};

impl Evaluator {
    /// Create an evaluator with the standard five-operator table.
    pub fn new() -> Evaluator {
        Evaluator {
            operators: OperatorTable::standard(),
        }
    }

    /// Create an evaluator with an explicit operator configuration.
    pub fn with_operators(operators: OperatorTable) -> Evaluator {
        Evaluator { operators }
    }

    /// The operator table this evaluator parses with.
    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    /// True iff `ch` can stand for a variable: a single ASCII letter that is not
    /// claimed as an operator glyph. Multi-character identifiers do not exist in
    /// this language.
    pub fn is_variable(&self, ch: char) -> bool {
        self.operators.is_variable(ch)
    }

    /// Collect the distinct variables of `expression`, sorted ascending by
    /// character code and deduplicated.
    ///
    /// The sorted order is canonical: it fixes the column order of generated tables
    /// and the bit order of enumerated assignments. Characters outside the formula
    /// alphabet are simply not variables, so the scan never fails.
    pub fn extract_variables(&self, expression: &str) -> Vec<char> {
        let mut variables: Vec<char> = expression
            .chars()
            .filter(|ch| self.is_variable(*ch))
            .collect();
        variables.sort_unstable();
        variables.dedup();
        variables
    }
}

impl Default for Evaluator {
    fn default() -> Evaluator {
        Evaluator::new()
    }
}
