use crate::utils::error::{NumlinesError, Result};

/// Divides `a` by `b` with IEEE semantics, rejecting a zero divisor instead
/// of producing an infinity or NaN.
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(NumlinesError::DivideByZero);
    }
    Ok(a / b)
}

/// Multiplies two non-negative 32-bit integers, rejecting overflow.
///
/// The sign check runs before any zero shortcut: `multiply(0, -1)` fails on
/// the negative operand rather than returning 0.
pub fn multiply(x: i32, y: i32) -> Result<i32> {
    if x < 0 || y < 0 {
        return Err(NumlinesError::NegativeOperand { x, y });
    }
    // Overflow test only makes sense for a non-zero multiplier.
    if y != 0 && x > i32::MAX / y {
        return Err(NumlinesError::MultiplyOverflow { x, y });
    }
    Ok(x * y)
}
