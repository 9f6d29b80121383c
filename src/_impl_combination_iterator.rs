use super::CombinationIterator;

impl CombinationIterator {
    /// Create a new iterator over all `2^num_vars` boolean tuples of width `num_vars`.
    ///
    /// The first tuple is all-`true`; tuples then follow standard binary counting
    /// with position `0` as the most significant bit, ending with all-`false`.
    ///
    /// *Panics:* there can be at most 63 variables, so that row indices stay within
    /// the tuple index space.
    pub fn new(num_vars: u16) -> CombinationIterator {
        if num_vars > 63 {
            panic!("Too many variables. There can be at most 63 variables in one table.");
        }
        CombinationIterator {
            next_values: Some(vec![true; num_vars as usize]),
        }
    }
}

/// **(internal)** Compute the successor tuple, if any. Read as binary counting where
/// `true` is the zero digit, this is a standard increment carried from the least
/// significant (last) position.
fn next_combination(values: &[bool]) -> Option<Vec<bool>> {
    let mut next = values.to_vec();
    for i in (0..next.len()).rev() {
        if next[i] {
            next[i] = false;
            return Some(next);
        }
        next[i] = true; // carry into the next position
    }
    None
}

impl Iterator for CombinationIterator {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(values) = &self.next_values {
            let result = values.clone();
            let next = next_combination(values);
            self.next_values = next;
            Some(result)
        } else {
            None
        }
    }
}
