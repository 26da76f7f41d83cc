// src/fixed/math.rs

/// Rounding bias: half of one Q15 unit.
const ROUND: i32 = 1 << 14;

/// Fractional bits in Q(0,15).
pub const FRAC_BITS: u32 = 15;

/// Q15 multiply: `floor((a * b + 2^14) / 2^15)`, i.e. round half up.
///
/// The product is formed in `i32`. Rust defines `>>` on signed integers as
/// an arithmetic shift, which is exactly floor division by a power of two,
/// so no division is needed to get well-defined rounding for negative
/// products. Narrowing wraps, which only matters for `-32768 * -32768`.
#[inline]
pub const fn fix_mpy(a: i16, b: i16) -> i16 {
    let c = (a as i32) * (b as i32) + ROUND;
    (c >> FRAC_BITS) as i16
}

/// Halves a sample, rounding toward zero.
#[inline]
pub const fn half(x: i16) -> i16 {
    x / 2
}

/// Applies a returned scale exponent to an output sample.
///
/// The transform never rescales its own output; this widens to `i32` so
/// the true amplitude (up to `2^15 * 2^FFT_ORDER`) is representable.
#[inline]
pub const fn rescale(x: i16, scale: u32) -> i32 {
    (x as i32) << scale
}
