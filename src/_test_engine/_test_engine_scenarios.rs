//! Scenarios that walk the same path the trainer UI does: submit a formula, get a
//! table, submit answers, read the score.

use crate::_test_util::{mk_assignment, mk_evaluator, mk_table};
use crate::{EngineError, Evaluator, TruthTable, DEFAULT_VARIABLE_LIMIT};
use std::collections::HashMap;

#[test]
fn trainer_conjunction_walkthrough() {
    let evaluator = mk_evaluator();

    // The canvas asks for the variables first, to seed its elements.
    assert_eq!(vec!['p', 'q'], evaluator.extract_variables("(p∧q)"));

    // Then the table view is opened.
    let table = mk_table("(p∧q)");
    assert_eq!(4, table.num_rows());

    // The user answers the first two rows, one of them wrong.
    let mut answers = HashMap::new();
    answers.insert(0, true);
    answers.insert(1, true);
    let summary = table.check_answers(&answers);
    assert_eq!(1, summary.correct());
    assert_eq!(2, summary.answered());
    assert_eq!(4, summary.total());
    assert!(!summary.is_complete());
    assert_eq!(25.0, summary.score());

    // Fixing the wrong answer and finishing the table gives a perfect score.
    for row in table.rows() {
        answers.insert(row.index(), row.result());
    }
    let summary = table.check_answers(&answers);
    assert_eq!(4, summary.correct());
    assert!(summary.is_complete());
    assert_eq!(100.0, summary.score());
}

#[test]
fn evaluation_matches_table_for_every_connective() {
    let evaluator = mk_evaluator();
    for formula in &["(p∧q)", "(p∨q)", "(p→q)", "(p↔q)", "(~p)"] {
        let table = mk_table(formula);
        for row in table.rows() {
            let assignment = table.assignment_of(row.index());
            assert_eq!(
                Ok(row.result()),
                evaluator.evaluate(formula, &assignment),
                "Formula: {}",
                formula
            );
        }
    }
}

#[test]
fn table_errors_leave_no_table_behind() {
    let evaluator = mk_evaluator();
    assert_eq!(
        Err(EngineError::EmptyExpression),
        TruthTable::generate(&evaluator, " ")
    );
    assert_eq!(
        Err(EngineError::NoVariablesFound),
        TruthTable::generate(&evaluator, "1+1")
    );
    assert_eq!(
        Err(EngineError::NoVariablesFound),
        TruthTable::generate(&evaluator, "() → ()")
    );
}

#[test]
fn variable_cap_is_configurable() {
    let evaluator = mk_evaluator();
    // 17 distinct variables exceed the default cap.
    let formula = "a∧b∧c∧d∧e∧f∧g∧h∧i∧j∧k∧l∧m∧n∧o∧u∧v";
    assert_eq!(
        Err(EngineError::TooManyVariables {
            found: 17,
            limit: DEFAULT_VARIABLE_LIMIT,
        }),
        TruthTable::generate(&evaluator, formula)
    );
    let table = TruthTable::generate_with_limit(&evaluator, formula, 17).unwrap();
    assert_eq!(1 << 17, table.num_rows());
}

#[test]
fn unparenthesized_formulas_follow_precedence() {
    let evaluator = mk_evaluator();
    // ~p∨q∧r → (~p)∨(q∧r)
    let assignment = mk_assignment(&[('p', true), ('q', true), ('r', true)]);
    assert_eq!(Ok(true), evaluator.evaluate("~p∨q∧r", &assignment));
    let assignment = mk_assignment(&[('p', true), ('q', true), ('r', false)]);
    assert_eq!(Ok(false), evaluator.evaluate("~p∨q∧r", &assignment));
}

#[test]
fn fresh_evaluators_agree() {
    // Evaluators share no state; two instances must produce identical tables.
    let first = TruthTable::generate(&Evaluator::new(), "((a→b)↔(~a∨b))").unwrap();
    let second = TruthTable::generate(&Evaluator::new(), "((a→b)↔(~a∨b))").unwrap();
    assert_eq!(first, second);
    // This particular equivalence is a tautology.
    assert!(first.rows().iter().all(|row| row.result()));
}
