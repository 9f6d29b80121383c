use super::EngineError;
use std::fmt::{Display, Error, Formatter};

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            EngineError::EmptyExpression => write!(f, "The formula is empty."),
            EngineError::NoVariablesFound => {
                write!(f, "The formula contains no variables.")
            }
            EngineError::MalformedExpression(reason) => {
                write!(f, "Malformed formula: {}", reason)
            }
            EngineError::UnsupportedOperator(glyph) => {
                write!(f, "Operator '{}' is not supported.", glyph)
            }
            EngineError::UnboundVariable(variable) => {
                write!(f, "Variable '{}' has no assigned value.", variable)
            }
            EngineError::TooManyVariables { found, limit } => write!(
                f,
                "The formula has {} variables, but at most {} can be enumerated.",
                found, limit
            ),
        }
    }
}

impl std::error::Error for EngineError {}
