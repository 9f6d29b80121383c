//! The postfix (reverse-Polish) form is the evaluable representation of a formula:
//! operators come after their operands, so the whole sequence can be evaluated left
//! to right with a plain value stack.
//!
//! Formulas are converted with a single shunting-yard pass and evaluated against an
//! [Assignment](crate::Assignment):
//!
//! ```rust
//! use truth_table_engine::*;
//!
//! let evaluator = Evaluator::new();
//! let assignment: Assignment = vec![('p', true)].into_iter().collect();
//! assert_eq!(Ok(false), evaluator.evaluate("(~p)", &assignment));
//! ```

use crate::Operator;

/// **(internal)** Shunting-yard conversion of infix formulas into postfix sequences.
mod _impl_conversion;

/// **(internal)** Stack evaluation of postfix sequences, and the composed
/// `Evaluator::evaluate` entry points.
mod _impl_evaluation;

/// One token of a postfix sequence.
///
/// Invariant of a valid sequence: evaluated left to right, the value stack never
/// underflows and holds exactly one value at the end.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PostfixToken {
    /// A single-letter variable.
    Variable(char),
    /// One of the five connectives.
    Operator(Operator),
}
