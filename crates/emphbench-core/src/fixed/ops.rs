//! Scalar Q-format operator arithmetic shared by the register-transfer
//! reference device and the direct-form golden model.
//!
//! `x` is the current sample, `x1`/`x2` the one- and two-cycle histories.
//! Products are formed in i32, rescaled by an arithmetic shift of
//! `frac_bits`, and differences saturate back into the 16-bit output word.

use crate::fixed::qfmt::QFormat;

#[inline]
fn sat16(v: i32) -> i16 {
    v.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}

#[inline]
fn mul_q(a: i16, b: i16, fmt: QFormat) -> i32 {
    (a as i32 * b as i32) >> fmt.frac_bits
}

/// Causal Teager-Kaiser energy: `x[n-1]^2 - x[n] * x[n-2]`.
pub fn tkeo(x: i16, x1: i16, x2: i16, fmt: QFormat) -> i16 {
    sat16(mul_q(x1, x1, fmt) - mul_q(x, x2, fmt))
}

/// Energy difference: `x[n]^2 - x[n-1]^2`.
pub fn ed(x: i16, x1: i16, fmt: QFormat) -> i16 {
    sat16(mul_q(x, x, fmt) - mul_q(x1, x1, fmt))
}

/// Amplitude slope operator: `x[n] * (x[n] - x[n-1])`.
pub fn aso(x: i16, x1: i16, fmt: QFormat) -> i16 {
    // The slope can exceed i16; widen before the product. Worst case
    // |x| * |x - x1| < 2^31, so the i32 product cannot overflow.
    let slope = x as i32 - x1 as i32;
    sat16((x as i32 * slope) >> fmt.frac_bits)
}

/// Absolute difference operator: `|x[n]| - |x[n-1]|`.
pub fn ado(x: i16, x1: i16) -> i16 {
    sat16((x as i32).abs() - (x1 as i32).abs())
}
