// src/fixed/tables.rs

use crate::common::FftError;
use crate::config::{FFT_ORDER, FFT_SIZE, SINE_TABLE_LEN};
use core::f64::consts::PI;

/// Q15 sine of `2*pi*i / FFT_SIZE` for `i` in `0..SINE_TABLE_LEN`, truncated
/// toward zero. `SINE[j + FFT_SIZE / 4]` is the cosine of phase index `j`.
///
/// Generated by build.rs with the same formula as [`precompute_sine`].
pub static SINE: [i16; SINE_TABLE_LEN] = include!(concat!(env!("OUT_DIR"), "/sine_table.rs"));

/// `BITREV[i]` is `i` with its low `FFT_ORDER` bits reversed.
pub static BITREV: [u16; FFT_SIZE] = {
    let mut table = [0; FFT_SIZE];

    let mut i = 0;
    while i < FFT_SIZE {
        table[i] = (i as u16).reverse_bits() >> (u16::BITS - FFT_ORDER);

        i += 1;
    }

    table
};

/// Length of the sine table needed for an `n`-point transform.
pub const fn sine_table_len(n: usize) -> usize {
    n * 3 / 4 + 1
}

fn check_size(n: usize) -> Result<(), FftError> {
    // n / 4 must be exact for the cosine offset, and indices must fit a u16
    if !n.is_power_of_two() || n < 4 || n > 1 << u16::BITS {
        return Err(FftError::NotPowerOfTwo);
    }
    Ok(())
}

/// Fills `table[..sine_table_len(n)]` with the Q15 sine used for twiddles.
pub fn precompute_sine(table: &mut [i16], n: usize) -> Result<(), FftError> {
    check_size(n)?;
    let len = sine_table_len(n);
    if table.len() < len {
        return Err(FftError::BufferTooSmall);
    }

    for (i, entry) in table[..len].iter_mut().enumerate() {
        let angle = 2.0 * PI * (i as f64) / (n as f64);
        // `as` truncates toward zero
        *entry = (i16::MAX as f64 * sin(angle)) as i16;
    }
    Ok(())
}

/// Fills `table[..n]` with bit-reversed indices.
pub fn precompute_bitrev(table: &mut [u16], n: usize) -> Result<(), FftError> {
    check_size(n)?;
    if table.len() < n {
        return Err(FftError::BufferTooSmall);
    }

    table[0] = 0;
    let mut j = 0;
    for entry in table[1..n].iter_mut() {
        let mut k = n >> 1;
        while j >= k {
            j -= k;
            k >>= 1;
        }
        j += k;
        *entry = j as u16;
    }
    Ok(())
}

fn sin(angle: f64) -> f64 {
    #[cfg(feature = "std")]
    return angle.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(angle);
}

#[cfg(test)]
#[path = "tables_tests.rs"]
mod tests;
