//! Evaluator
//!
//! Pure mapping from `(operand, operator, operand)` to a result. Total over
//! its inputs: division by zero and a missing operator both yield 0.

use crate::input::Operator;

/// Evaluate `a op b`
///
/// - `+`, `-`, `x` map to the corresponding `f32` operation
/// - `/` yields `a / b`, or `0.0` when `b` is zero
/// - no operator yields `0.0`
pub fn evaluate(a: f32, op: Option<Operator>, b: f32) -> f32 {
    match op {
        Some(Operator::Add) => a + b,
        Some(Operator::Subtract) => a - b,
        Some(Operator::Multiply) => a * b,
        Some(Operator::Divide) => {
            if b != 0.0 {
                a / b
            } else {
                0.0
            }
        }
        None => 0.0,
    }
}
