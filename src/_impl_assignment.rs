use super::{Assignment, EngineError};
use fxhash::FxHashMap;
use std::fmt::{Display, Error, Formatter};
use std::iter::FromIterator;

impl Assignment {
    /// Create an empty assignment.
    pub fn new() -> Assignment {
        Assignment(FxHashMap::default())
    }

    /// Create an assignment binding `variables`, position by position, to `values`.
    ///
    /// *Panics:* both slices must have the same length.
    pub fn from_values(variables: &[char], values: &[bool]) -> Assignment {
        assert_eq!(
            variables.len(),
            values.len(),
            "Assignment needs one value per variable."
        );
        variables
            .iter()
            .copied()
            .zip(values.iter().copied())
            .collect()
    }

    /// Bind `variable` to `value`, replacing any previous binding.
    pub fn set(&mut self, variable: char, value: bool) {
        self.0.insert(variable, value);
    }

    /// The value bound to `variable`, if any.
    pub fn get(&self, variable: char) -> Option<bool> {
        self.0.get(&variable).copied()
    }

    /// The value bound to `variable`, or an `UnboundVariable` error when the
    /// assignment does not cover it.
    pub fn truth_of(&self, variable: char) -> Result<bool, EngineError> {
        self.get(variable)
            .ok_or(EngineError::UnboundVariable(variable))
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no variable is bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(char, bool)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (char, bool)>>(iter: T) -> Self {
        Assignment(iter.into_iter().collect())
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let mut variables: Vec<char> = self.0.keys().copied().collect();
        variables.sort_unstable();
        if variables.is_empty() {
            write!(f, "[]")?;
        } else {
            write!(
                f,
                "[{}={}",
                variables[0],
                if self.0[&variables[0]] { 1 } else { 0 }
            )?;
            for variable in &variables[1..] {
                write!(f, ",{}={}", variable, if self.0[variable] { 1 } else { 0 })?
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
