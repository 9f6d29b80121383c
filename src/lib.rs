//! # Truth-Table-Engine
//!
//! This crate implements the expression engine behind an interactive propositional-logic
//! trainer: it parses infix formulas over single-letter variables and the connectives
//! `~`, `∧`, `∨`, `→` and `↔`, evaluates them under an assignment of truth values,
//! enumerates complete truth tables and scores user-submitted answers.
//!
//! The engine performs no I/O and keeps no shared state. An [Evaluator] carries its own
//! immutable operator configuration, a [TruthTable] is owned by whoever generated it,
//! and scoring is recomputed on demand:
//!
//! ```rust
//! use truth_table_engine::*;
//!
//! let evaluator = Evaluator::new();
//!
//! // Direct evaluation:
//! let assignment: Assignment = vec![('p', true), ('q', false)].into_iter().collect();
//! assert_eq!(Ok(false), evaluator.evaluate("(p∧q)", &assignment));
//!
//! // Full table with scoring:
//! let mut table = TruthTable::generate(&evaluator, "(p→q)").unwrap();
//! assert_eq!(4, table.num_rows());
//! table.record_answer(0, true);
//! table.record_answer(1, false);
//! let summary = table.check_recorded();
//! assert_eq!(2, summary.correct());
//! assert!(!summary.is_complete());
//! ```
//!
//! Malformed input is never conflated with a formula that merely evaluates to `false`:
//! every fallible operation returns a dedicated [EngineError] variant, and the
//! fail-safe behaviour a UI may want is available separately as
//! `Evaluator::evaluate_lenient`.

use fxhash::FxHashMap;

pub mod postfix_form;

/// **(internal)** Implementation of the `Operator` and the `OperatorTable`.
mod _impl_operator;

/// **(internal)** Implementation of the `Evaluator`.
mod _impl_evaluator;

/// **(internal)** Implementation of the `Assignment`.
mod _impl_assignment;

/// **(internal)** Implementation of the `CombinationIterator`.
mod _impl_combination_iterator;

/// **(internal)** Implementation of the `TruthTable` and its `Row`s.
mod _impl_truth_table;

/// **(internal)** Implementation of answer checking and the `ScoringSummary`.
mod _impl_scoring;

/// **(internal)** Implementation of the `EngineError`.
mod _impl_engine_error;

/// Several basic utility methods for testing the engine.
#[cfg(test)]
mod _test_util;


/// **(internal)** Targets for the `log` macros used across the crate.
pub(crate) mod log_target {
    pub const CONVERSION: &str = "conversion";
    pub const EVALUATION: &str = "evaluation";
    pub const TABLE: &str = "table";
}

/// Default cap on the number of distinct variables a table may enumerate.
///
/// Table generation is `O(2^n)` in the variable count, so unbounded enumeration is a
/// resource-exhaustion risk. [TruthTable::generate] refuses formulas above this limit;
/// use [TruthTable::generate_with_limit] to pick a different trade-off.
pub const DEFAULT_VARIABLE_LIMIT: usize = 16;

/// One of the five propositional connectives understood by the engine.
///
/// Each operator has a fixed arity and precedence: `~` binds strongest, then `∧`,
/// then `∨`, with `→` and `↔` weakest. Same-precedence binary operators associate
/// to the left.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operator {
    /// Unary negation, written `~`.
    Not,
    /// Conjunction, written `∧`.
    And,
    /// Disjunction, written `∨`.
    Or,
    /// Implication, written `→`.
    Implies,
    /// Biconditional, written `↔`.
    Iff,
}

/// Immutable mapping from glyphs to [Operator]s.
///
/// Constructed once and carried by an [Evaluator] — there is no process-wide operator
/// registry, and a table never changes after construction.
#[derive(Clone, Debug)]
pub struct OperatorTable {
    glyphs: FxHashMap<char, Operator>,
}

/// Parses and evaluates formulas against one immutable [OperatorTable].
#[derive(Clone, Debug)]
pub struct Evaluator {
    operators: OperatorTable,
}

/// Exactly describes one assignment of truth values to variables.
///
/// Lookups happen once per variable per enumerated row, so the map uses the `fxhash`
/// hasher.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Assignment(FxHashMap<char, bool>);

/// Exhaustively iterates over all boolean tuples of a fixed width.
///
/// Tuples appear in standard truth-table order: the all-`true` tuple first, then
/// binary counting with position `0` as the most significant bit. Be aware of the
/// exponential number of iterations!
#[derive(Clone)]
pub struct CombinationIterator {
    next_values: Option<Vec<bool>>,
}

/// Full enumeration of assignments and results for one formula.
///
/// The formula and its sorted variable list are fixed when the table is generated.
/// Rows are read-only, except that a user answer can be attached to each.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TruthTable {
    formula: String,
    variables: Vec<char>,
    rows: Vec<Row>,
}

/// One row of a [TruthTable]: truth values in sorted-variable order, the computed
/// result, and an optional user-submitted answer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Row {
    index: usize,
    values: Vec<bool>,
    result: bool,
    user_answer: Option<bool>,
}

/// Ephemeral scoring of submitted answers against a [TruthTable].
///
/// Recomputed on demand by `TruthTable::check_answers`; never stored in the table.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoringSummary {
    correct: usize,
    answered: usize,
    total: usize,
    row_results: Vec<RowAssessment>,
    score: f64,
}

/// Scoring detail for a single row of a [TruthTable].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RowAssessment {
    index: usize,
    user_answer: Option<bool>,
    correct_answer: bool,
    is_correct: bool,
}

/// Everything that can go wrong inside the engine.
///
/// No error is fatal: the caller is expected to report the condition to the user and
/// keep any previously generated table intact.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EngineError {
    /// A blank or whitespace-only formula was submitted for tabulation.
    EmptyExpression,
    /// The formula contains no recognizable variable.
    NoVariablesFound,
    /// Unbalanced parentheses, or an operator/operand imbalance discovered while
    /// evaluating the postfix form.
    MalformedExpression(String),
    /// A character offered as an operator glyph that carries no metadata in the
    /// fixed operator set.
    UnsupportedOperator(char),
    /// The assignment does not cover a variable of the formula.
    UnboundVariable(char),
    /// The formula has more distinct variables than the enumeration cap allows.
    TooManyVariables {
        /// Distinct variables found in the formula.
        found: usize,
        /// The cap that was in effect.
        limit: usize,
    },
}
