//! Validated interpolation/clamp surface.
//!
//! Every function here takes `impl Into<Value>` operands, rejects anything
//! non-numeric with `Error::InvalidArgument`, and delegates the arithmetic
//! to the `unchecked` core. Clamping is always the asymmetric composition
//! `max(min(x, hi), lo)`: with inverted bounds the high bound wins, which
//! is part of the contract (`f64::clamp` would panic there).

use crate::error::{Error, INVERTED_BOUNDS, NOT_A_NUMBER};
use crate::value::Value;

/// Raw `f64` helpers, no validation. For callers that already hold numbers.
pub mod unchecked {
    /// Linear interpolation: `min + (max - min) * t`. Unbounded in `t`.
    #[inline]
    pub fn lerp(min: f64, max: f64, t: f64) -> f64 {
        min + (max - min) * t
    }

    /// Interpolation fraction of `value` in `[min, max]`. No guard on
    /// `max == min`; the division yields ±inf or NaN.
    #[inline]
    pub fn inverse_lerp(min: f64, max: f64, value: f64) -> f64 {
        (value - min) / (max - min)
    }

    /// Asymmetric clamp: `max(min(value, hi), lo)`. With `lo > hi` the
    /// result lands on `lo` for any input; preserve the composition order.
    #[inline]
    pub fn clamp(lo: f64, hi: f64, value: f64) -> f64 {
        value.min(hi).max(lo)
    }
}

/// True iff every value is numeric. The validation primitive; never errors.
pub fn all_numbers(values: &[Value]) -> bool {
    values.iter().all(Value::is_num)
}

fn require_numbers<const N: usize>(values: [Value; N]) -> Result<[f64; N], Error> {
    if !all_numbers(&values) {
        return Err(Error::InvalidArgument(NOT_A_NUMBER));
    }
    let mut nums = [0.0; N];
    for (slot, value) in nums.iter_mut().zip(&values) {
        *slot = value.as_num().ok_or(Error::InvalidArgument(NOT_A_NUMBER))?;
    }
    Ok(nums)
}

/// Bounds pre-check for the clamped variants. Only trips when both bounds
/// are numeric; otherwise the delegated numeric validation reports instead.
fn check_bounds(min: &Value, max: &Value) -> Result<(), Error> {
    if let (Some(lo), Some(hi)) = (min.as_num(), max.as_num()) {
        if lo > hi {
            return Err(Error::InvalidArgument(INVERTED_BOUNDS));
        }
    }
    Ok(())
}

/// Restrict `value` to `[min, max]` (asymmetric composition, see module doc).
pub fn clamp(
    min: impl Into<Value>,
    max: impl Into<Value>,
    value: impl Into<Value>,
) -> Result<f64, Error> {
    let [lo, hi, v] = require_numbers([min.into(), max.into(), value.into()])?;
    Ok(unchecked::clamp(lo, hi, v))
}

/// Linear interpolation; `t` outside `[0, 1]` extrapolates, and inverted
/// bounds simply reverse direction.
pub fn lerp(
    min: impl Into<Value>,
    max: impl Into<Value>,
    t: impl Into<Value>,
) -> Result<f64, Error> {
    let [lo, hi, t] = require_numbers([min.into(), max.into(), t.into()])?;
    Ok(unchecked::lerp(lo, hi, t))
}

/// Interpolate, then clamp into `[min, max]`. Requires ordered bounds; the
/// bounds check runs BEFORE the numeric validation inside `lerp`.
pub fn lerp_clamp(
    min: impl Into<Value>,
    max: impl Into<Value>,
    t: impl Into<Value>,
) -> Result<f64, Error> {
    let (min, max, t) = (min.into(), max.into(), t.into());
    check_bounds(&min, &max)?;
    let [lo, hi, t] = require_numbers([min, max, t])?;
    Ok(unchecked::clamp(lo, hi, unchecked::lerp(lo, hi, t)))
}

/// Recover the interpolation fraction of `value` between `min` and `max`.
pub fn inverse_lerp(
    min: impl Into<Value>,
    max: impl Into<Value>,
    value: impl Into<Value>,
) -> Result<f64, Error> {
    let [lo, hi, v] = require_numbers([min.into(), max.into(), value.into()])?;
    Ok(unchecked::inverse_lerp(lo, hi, v))
}

/// Inverse-lerp clamped into `[0, 1]`. Requires ordered bounds, checked
/// before the numeric validation inside `inverse_lerp`.
pub fn inverse_lerp_clamp(
    min: impl Into<Value>,
    max: impl Into<Value>,
    value: impl Into<Value>,
) -> Result<f64, Error> {
    let (min, max, value) = (min.into(), max.into(), value.into());
    check_bounds(&min, &max)?;
    let [lo, hi, v] = require_numbers([min, max, value])?;
    Ok(unchecked::clamp(0.0, 1.0, unchecked::inverse_lerp(lo, hi, v)))
}
