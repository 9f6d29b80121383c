use super::{CombinationIterator, EngineError, Evaluator, Row, TruthTable};
use crate::log_target;
use crate::{Assignment, DEFAULT_VARIABLE_LIMIT};
use std::fmt::{Display, Error, Formatter};

impl TruthTable {
    /// Generate the full truth table of `expression`, allowing at most
    /// [DEFAULT_VARIABLE_LIMIT](crate::DEFAULT_VARIABLE_LIMIT) distinct variables.
    pub fn generate(evaluator: &Evaluator, expression: &str) -> Result<TruthTable, EngineError> {
        TruthTable::generate_with_limit(evaluator, expression, DEFAULT_VARIABLE_LIMIT)
    }

    /// Generate the full truth table of `expression`, refusing formulas with more
    /// than `variable_limit` distinct variables.
    ///
    /// The formula is converted to postfix form once; the sequence is then evaluated
    /// for each of the `2^n` enumerated assignments. Rows appear in standard order:
    /// the all-`true` assignment first, binary counting with the first (smallest)
    /// variable as the most significant bit.
    pub fn generate_with_limit(
        evaluator: &Evaluator,
        expression: &str,
        variable_limit: usize,
    ) -> Result<TruthTable, EngineError> {
        let formula = expression.trim();
        if formula.is_empty() {
            return Err(EngineError::EmptyExpression);
        }
        let variables = evaluator.extract_variables(formula);
        if variables.is_empty() {
            return Err(EngineError::NoVariablesFound);
        }
        if variables.len() > variable_limit {
            log::warn!(
                target: log_target::TABLE,
                "Refusing to enumerate {} variables (limit is {}).",
                variables.len(),
                variable_limit
            );
            return Err(EngineError::TooManyVariables {
                found: variables.len(),
                limit: variable_limit,
            });
        }
        let tokens = evaluator.to_postfix(formula)?;
        let mut rows = Vec::with_capacity(1usize << variables.len());
        for (index, values) in CombinationIterator::new(variables.len() as u16).enumerate() {
            let assignment = Assignment::from_values(&variables, &values);
            let result = evaluator.evaluate_postfix(&tokens, &assignment)?;
            rows.push(Row {
                index,
                values,
                result,
                user_answer: None,
            });
        }
        log::debug!(
            target: log_target::TABLE,
            "Generated {} rows over {} variables for '{}'.",
            rows.len(),
            variables.len(),
            formula
        );
        Ok(TruthTable {
            formula: formula.to_string(),
            variables,
            rows,
        })
    }

    /// The formula this table was generated from.
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// The variables of the formula, in canonical sorted order.
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// All rows, in enumeration order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows (`2^n` for `n` variables).
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// The assignment described by row `index`.
    ///
    /// *Panics:* `index` must be a valid row index.
    pub fn assignment_of(&self, index: usize) -> Assignment {
        let row = &self.rows[index];
        if cfg!(feature = "shields_up") && row.values.len() != self.variables.len() {
            panic!(
                "Table has {} variables, but row {} has {} values.",
                self.variables.len(),
                index,
                row.values.len()
            );
        }
        Assignment::from_values(&self.variables, &row.values)
    }

    /// Attach a user answer to row `index`, replacing any previous answer. The
    /// computed row data is not touched.
    ///
    /// *Panics:* `index` must be a valid row index.
    pub fn record_answer(&mut self, index: usize, answer: bool) {
        self.rows[index].user_answer = Some(answer);
    }
}

impl Row {
    /// 0-based position of this row in enumeration order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The truth values of this row, in sorted-variable order.
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// The computed result of the formula in this row.
    pub fn result(&self) -> bool {
        self.result
    }

    /// The user answer attached to this row, if one was submitted.
    pub fn user_answer(&self) -> Option<bool> {
        self.user_answer
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        for variable in &self.variables {
            write!(f, "{} ", variable)?;
        }
        writeln!(f, "| {}", self.formula)?;
        for row in &self.rows {
            for value in &row.values {
                write!(f, "{} ", if *value { 1 } else { 0 })?;
            }
            writeln!(f, "| {}", if row.result { 1 } else { 0 })?;
        }
        Ok(())
    }
}
