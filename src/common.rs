// src/common.rs

use core::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    SizeMismatch,
    NotPowerOfTwo,
    BufferTooSmall,
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::SizeMismatch => write!(f, "Data buffer size does not match FFT size"),
            FftError::NotPowerOfTwo => write!(f, "Size must be a power of 2 of at least 4"),
            FftError::BufferTooSmall => write!(f, "Lookup table buffer is too small"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// In-place transform over a caller-owned buffer.
///
/// Returns the scale exponent: the output must be multiplied by
/// `2^scale` to recover true amplitude.
pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T], inverse: bool) -> Result<u32, FftError>;
}
