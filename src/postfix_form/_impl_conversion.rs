use super::PostfixToken;
use crate::log_target;
use crate::{EngineError, Evaluator, Operator, OperatorTable};

/// Convert an infix `expression` into its postfix token sequence.
///
/// Whitespace is skipped, and so is any character that is neither a variable, an
/// operator glyph of `operators`, nor a parenthesis — the scan itself is permissive,
/// so that half-built formulas can still be probed. Unbalanced parentheses, on the
/// other hand, are rejected with `MalformedExpression`.
pub fn infix_to_postfix(
    expression: &str,
    operators: &OperatorTable,
) -> Result<Vec<PostfixToken>, EngineError> {
    let mut output: Vec<PostfixToken> = Vec::new();
    // Pending operators; `None` marks an opening parenthesis.
    let mut stack: Vec<Option<Operator>> = Vec::new();
    for c in expression.chars() {
        if c.is_whitespace() {
            continue;
        }
        if operators.is_variable(c) {
            output.push(PostfixToken::Variable(c));
        } else if let Some(incoming) = operators.get(c) {
            // Pop operators that bind at least as tightly. The `>=` comparison makes
            // same-precedence binary operators left-associative.
            while let Some(&Some(top)) = stack.last() {
                if top.precedence() >= incoming.precedence() {
                    output.push(PostfixToken::Operator(top));
                    stack.pop();
                } else {
                    break;
                }
            }
            stack.push(Some(incoming));
        } else if c == '(' {
            stack.push(None);
        } else if c == ')' {
            loop {
                match stack.pop() {
                    Some(Some(op)) => output.push(PostfixToken::Operator(op)),
                    Some(None) => break,
                    None => {
                        return Err(EngineError::MalformedExpression(
                            "Unmatched `)` in the formula.".to_string(),
                        ));
                    }
                }
            }
        } else {
            log::trace!(
                target: log_target::CONVERSION,
                "Skipping foreign character '{}'.",
                c
            );
        }
    }
    while let Some(entry) = stack.pop() {
        match entry {
            Some(op) => output.push(PostfixToken::Operator(op)),
            None => {
                return Err(EngineError::MalformedExpression(
                    "Unmatched `(` in the formula.".to_string(),
                ));
            }
        }
    }
    Ok(output)
}

impl Evaluator {
    /// Convert `expression` into its postfix token sequence using this evaluator's
    /// operator table.
    pub fn to_postfix(&self, expression: &str) -> Result<Vec<PostfixToken>, EngineError> {
        infix_to_postfix(expression, self.operators())
    }
}
