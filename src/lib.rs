//! Fixed-point, in-place, decimation-in-time FFT over 1024 complex points.
//!
//! Samples are `i16` in Q(0,15): `-32768..=32767` maps to `[-1.0, 1.0)`.
//! The forward and inverse transforms share one engine; the inverse
//! direction only flips the sign of the twiddle sine. On every stage the
//! engine checks whether any sample has left the `-0x4000..=0x3FFF`
//! headroom band and, if so, halves that stage's operands. The number of
//! halvings is returned so the caller can recover true amplitude by
//! multiplying the output by `2^scale`.
//!
//! ```
//! use fix_fft::{fix_fft, FFT_SIZE};
//!
//! let mut real = [0i16; FFT_SIZE];
//! let mut imag = [0i16; FFT_SIZE];
//! real[0] = 0x3FFF;
//!
//! let scale = fix_fft(&mut real, &mut imag, false);
//! assert_eq!(scale, 0);
//! assert!(real.iter().all(|&x| x == 0x3FFF));
//! ```
#![no_std]

// Tests and the `std` feature link the standard library so `cargo test`
// runs normally on the host.
#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
mod logging;

pub mod common;
pub mod config;
pub mod fixed;

pub use common::{FftError, FftProcess};
pub use config::{FFT_ORDER, FFT_SIZE, SINE_TABLE_LEN};
pub use fixed::{fix_fft, fix_fft_complex, FixFft, FixedSignal, SplitSignal, Q15};
