//!
//! A small toolbox for fuzzing the evaluation pipeline. We build a random tree of
//! connectives over a fixed variable set, render it as a fully parenthesized
//! formula string, and keep the tree around as a reference evaluator. The table
//! generated from the rendered formula must then agree with the reference on every
//! enumerated row.
//!
//! To get predictable test cases, we use a predefined set of randomness seeds.

use crate::_test_util::mk_evaluator;
use crate::{Assignment, Operator, TruthTable};
use rand::prelude::StdRng;
use rand::{RngCore, SeedableRng};

#[derive(Debug)]
enum FormulaTree {
    Leaf(char),
    Not(Box<FormulaTree>),
    Binary(Operator, Box<FormulaTree>, Box<FormulaTree>),
}

impl FormulaTree {
    /// Create a new random tree of the given `depth` over `variables`. Every inner
    /// node is one of the binary connectives, possibly negated.
    fn new_random(depth: u8, variables: &[char], rand: &mut StdRng) -> FormulaTree {
        if depth == 0 {
            let pick = (rand.next_u32() as usize) % variables.len();
            return FormulaTree::Leaf(variables[pick]);
        }
        let connectives = [Operator::And, Operator::Or, Operator::Implies, Operator::Iff];
        let op = connectives[(rand.next_u32() as usize) % connectives.len()];
        let left = FormulaTree::new_random(depth - 1, variables, rand);
        let right = FormulaTree::new_random(depth - 1, variables, rand);
        let node = FormulaTree::Binary(op, Box::new(left), Box::new(right));
        if rand.next_u32() % 2 == 0 {
            FormulaTree::Not(Box::new(node))
        } else {
            node
        }
    }

    /// Render the tree as a fully parenthesized formula string.
    fn render(&self) -> String {
        match self {
            FormulaTree::Leaf(name) => name.to_string(),
            FormulaTree::Not(inner) => format!("(~{})", inner.render()),
            FormulaTree::Binary(op, left, right) => {
                format!("({}{}{})", left.render(), op, right.render())
            }
        }
    }

    /// Reference evaluation, independent of the postfix machinery.
    fn eval(&self, assignment: &Assignment) -> bool {
        match self {
            FormulaTree::Leaf(name) => assignment
                .get(*name)
                .expect("Every leaf appears in the rendered formula."),
            FormulaTree::Not(inner) => !inner.eval(assignment),
            FormulaTree::Binary(op, left, right) => {
                op.apply_binary(left.eval(assignment), right.eval(assignment))
            }
        }
    }
}

fn fuzz_table_matches_reference(seed: u64, depth: u8, variables: &[char]) {
    let mut rand = StdRng::seed_from_u64(seed);
    let tree = FormulaTree::new_random(depth, variables, &mut rand);
    let formula = tree.render();
    let evaluator = mk_evaluator();
    let table = TruthTable::generate(&evaluator, &formula).unwrap();
    assert_eq!(1usize << table.variables().len(), table.num_rows());
    for row in table.rows() {
        let assignment = table.assignment_of(row.index());
        assert_eq!(
            row.result(),
            tree.eval(&assignment),
            "Seed {}, formula: {}",
            seed,
            formula
        );
        assert_eq!(
            Ok(row.result()),
            evaluator.evaluate(&formula, &assignment),
            "Seed {}, formula: {}",
            seed,
            formula
        );
    }
}

#[test]
fn fuzz_small_trees() {
    for seed in 0..16 {
        fuzz_table_matches_reference(seed, 3, &['p', 'q', 'r']);
    }
}

#[test]
fn fuzz_deep_trees() {
    for seed in 0..8 {
        fuzz_table_matches_reference(seed, 5, &['a', 'b', 'c', 'x', 'y', 'z']);
    }
}

#[test]
fn fuzz_two_letter_alphabet() {
    // Narrow alphabets force repeated variables and deep sharing.
    for seed in 100..108 {
        fuzz_table_matches_reference(seed, 4, &['u', 'v']);
    }
}
