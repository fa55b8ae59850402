use thiserror::Error;

/// Largest magnitude representable both as a positive and as a negative `i32`.
const SAFE_ABS_MAX: i64 = {
    let max = i32::MAX.unsigned_abs();
    let min = i32::MIN.unsigned_abs();
    (if max < min { max } else { min }) as i64
};

/// The difference of two positions does not fit in an `i32` whose negation also fits.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("delta {from} - {to} overflows a 32-bit offset")]
pub struct OverflowError {
    pub from: u32,
    pub to: u32,
}

/// Computes `from - to` as an `i32` that can also be negated without overflow.
pub fn compute_safe_delta(from: u32, to: u32) -> Result<i32, OverflowError> {
    let diff = i64::from(from) - i64::from(to);
    if diff.abs() > SAFE_ABS_MAX {
        return Err(OverflowError { from, to });
    }
    i32::try_from(diff).map_err(|_| OverflowError { from, to })
}
