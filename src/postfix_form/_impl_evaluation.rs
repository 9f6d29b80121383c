use super::PostfixToken;
use crate::log_target;
use crate::{Assignment, EngineError, Evaluator, Operator};

/// Evaluate a postfix token sequence against `assignment`.
///
/// The value stack is strictly boolean. A stack underflow, or a final stack that
/// does not hold exactly one value, means the sequence did not come from a
/// well-formed formula and is reported as `MalformedExpression` — it is never
/// conflated with a formula that evaluates to `false`.
pub fn evaluate_postfix(
    tokens: &[PostfixToken],
    assignment: &Assignment,
) -> Result<bool, EngineError> {
    let mut stack: Vec<bool> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token {
            PostfixToken::Variable(name) => stack.push(assignment.truth_of(*name)?),
            PostfixToken::Operator(op) if op.is_unary() => {
                let value = pop_operand(&mut stack, *op)?;
                stack.push(op.apply_unary(value));
            }
            PostfixToken::Operator(op) => {
                // The first pop is the right operand; the order matters for `→`.
                let right = pop_operand(&mut stack, *op)?;
                let left = pop_operand(&mut stack, *op)?;
                stack.push(op.apply_binary(left, right));
            }
        }
    }
    let result = stack.pop().ok_or_else(|| {
        EngineError::MalformedExpression("The formula has no value.".to_string())
    })?;
    if !stack.is_empty() {
        log::error!(
            target: log_target::EVALUATION,
            "Evaluation left {} unused operands on the stack.",
            stack.len()
        );
        return Err(EngineError::MalformedExpression(format!(
            "{} operands are left without an operator.",
            stack.len()
        )));
    }
    Ok(result)
}

/// **(internal)** Pop one operand for `op`, reporting underflow as a malformed
/// formula.
fn pop_operand(stack: &mut Vec<bool>, op: Operator) -> Result<bool, EngineError> {
    stack.pop().ok_or_else(|| {
        log::error!(
            target: log_target::EVALUATION,
            "Operator {} is missing an operand.",
            op
        );
        EngineError::MalformedExpression(format!("Operator {} is missing an operand.", op))
    })
}

impl Evaluator {
    /// Evaluate `expression` against `assignment`.
    ///
    /// The assignment must cover every variable of the formula. Malformed input is
    /// reported as an error, so a `false` result always means the formula actually
    /// evaluates to `false`.
    pub fn evaluate(&self, expression: &str, assignment: &Assignment) -> Result<bool, EngineError> {
        let tokens = self.to_postfix(expression)?;
        evaluate_postfix(&tokens, assignment)
    }

    /// Evaluate a previously converted postfix sequence against `assignment`.
    ///
    /// Useful when one formula is evaluated many times: convert once, then call this
    /// per assignment.
    pub fn evaluate_postfix(
        &self,
        tokens: &[PostfixToken],
        assignment: &Assignment,
    ) -> Result<bool, EngineError> {
        evaluate_postfix(tokens, assignment)
    }

    /// Evaluate `expression`, degrading every failure to `false`.
    ///
    /// This mirrors what a UI usually wants while a formula is still being built.
    /// Use [Evaluator::evaluate] when "invalid" and "false" must stay
    /// distinguishable.
    pub fn evaluate_lenient(&self, expression: &str, assignment: &Assignment) -> bool {
        self.evaluate(expression, assignment).unwrap_or(false)
    }
}
