// src/config.rs
//
// Kept free of crate paths: build.rs includes this file to size the
// generated sine table.

/// log2 of the transform length. Everything else is derived from this.
pub const FFT_ORDER: u32 = 10;

/// Number of complex points per transform.
pub const FFT_SIZE: usize = 1 << FFT_ORDER;

/// Sine samples spanning three quarters of a cycle plus the closing point,
/// so that `cos(j) == sin(j + FFT_SIZE / 4)` never wraps.
pub const SINE_TABLE_LEN: usize = FFT_SIZE * 3 / 4 + 1;

// Bit-reversal indices are stored as u16, and the quarter-period offset
// needs FFT_SIZE divisible by 4.
const _: () = assert!(FFT_ORDER >= 2 && FFT_ORDER <= 16);
