use super::{RowAssessment, ScoringSummary, TruthTable};
use std::collections::HashMap;
use std::fmt::{Display, Error, Formatter};

impl TruthTable {
    /// Compare submitted `answers` (row index to answer; rows without an entry
    /// count as unanswered) against the computed results.
    ///
    /// The check is pure: it can be repeated as answers trickle in, it never
    /// mutates row data, and indices beyond the table are ignored. The score is a
    /// percentage of correct rows out of all rows, rounded to one decimal place.
    pub fn check_answers(&self, answers: &HashMap<usize, bool>) -> ScoringSummary {
        let mut row_results = Vec::with_capacity(self.num_rows());
        let mut correct = 0;
        let mut answered = 0;
        for row in self.rows() {
            let user_answer = answers.get(&row.index()).copied();
            let is_correct = user_answer == Some(row.result());
            if user_answer.is_some() {
                answered += 1;
            }
            if is_correct {
                correct += 1;
            }
            row_results.push(RowAssessment {
                index: row.index(),
                user_answer,
                correct_answer: row.result(),
                is_correct,
            });
        }
        ScoringSummary::new(correct, answered, self.num_rows(), row_results)
    }

    /// Score the answers previously attached with `record_answer`.
    pub fn check_recorded(&self) -> ScoringSummary {
        let recorded: HashMap<usize, bool> = self
            .rows()
            .iter()
            .filter_map(|row| row.user_answer().map(|answer| (row.index(), answer)))
            .collect();
        self.check_answers(&recorded)
    }
}

impl ScoringSummary {
    /// **(internal)** Assemble a summary. The score is `correct/total*100` rounded
    /// to one decimal place, and zero for an empty table.
    pub(crate) fn new(
        correct: usize,
        answered: usize,
        total: usize,
        row_results: Vec<RowAssessment>,
    ) -> ScoringSummary {
        let score = if total == 0 {
            0.0
        } else {
            ((correct as f64) / (total as f64) * 1000.0).round() / 10.0
        };
        ScoringSummary {
            correct,
            answered,
            total,
            row_results,
            score,
        }
    }

    /// Number of rows answered correctly.
    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Number of rows with a submitted answer.
    pub fn answered(&self) -> usize {
        self.answered
    }

    /// Total number of rows in the table.
    pub fn total(&self) -> usize {
        self.total
    }

    /// True when every row has an answer.
    pub fn is_complete(&self) -> bool {
        self.answered == self.total
    }

    /// Percentage of correct rows, rounded to one decimal place.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Per-row detail, in enumeration order.
    pub fn row_results(&self) -> &[RowAssessment] {
        &self.row_results
    }
}

impl RowAssessment {
    /// 0-based row index this assessment belongs to.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The submitted answer, if any.
    pub fn user_answer(&self) -> Option<bool> {
        self.user_answer
    }

    /// The computed result of the row.
    pub fn correct_answer(&self) -> bool {
        self.correct_answer
    }

    /// True iff an answer was submitted and matches the computed result.
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

impl Display for ScoringSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(
            f,
            "{}/{} correct ({:.1}%)",
            self.correct, self.total, self.score
        )
    }
}
