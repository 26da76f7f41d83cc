use crate::common::{FftError, FftProcess};
use crate::config::{FFT_SIZE, SINE_TABLE_LEN};
use super::core::fix_fft_core;
use super::signal::SplitSignal;
use super::tables::{precompute_bitrev, precompute_sine, BITREV, SINE};
use num_complex::Complex;

/// Transforms two parallel Q15 channels in place using the built-in tables.
///
/// `inverse == false` is time -> frequency. Input is consumed in natural
/// order and output is produced in natural order. Returns the scale
/// exponent: multiply the output by `2^scale` for true amplitude.
pub fn fix_fft(real: &mut [i16; FFT_SIZE], imag: &mut [i16; FFT_SIZE], inverse: bool) -> u32 {
    fix_fft_core(&mut SplitSignal::new(real, imag), &SINE, &BITREV, inverse)
}

/// Same transform as [`fix_fft`] over interleaved complex samples.
pub fn fix_fft_complex(buffer: &mut [Complex<i16>; FFT_SIZE], inverse: bool) -> u32 {
    fix_fft_core(buffer, &SINE, &BITREV, inverse)
}

/// Holds the lookup tables (sine and bit reverse) a transform reads.
///
/// [`FixFft::new`] uses the tables built into the crate. [`FixFft::with_tables`]
/// generates them into caller-provided storage instead, so they can live
/// in a specific memory region (e.g. RAM on targets executing from flash).
#[derive(Clone, Copy, Debug)]
pub struct FixFft<'a> {
    sine: &'a [i16],
    bitrev: &'a [u16],
}

impl FixFft<'static> {
    pub fn new() -> Self {
        Self {
            sine: &SINE,
            bitrev: &BITREV,
        }
    }
}

impl Default for FixFft<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FixFft<'a> {
    /// Fills the tables and borrows them for the lifetime of the engine.
    pub fn with_tables(sine: &'a mut [i16], bitrev: &'a mut [u16]) -> Result<Self, FftError> {
        if sine.len() < SINE_TABLE_LEN || bitrev.len() < FFT_SIZE {
            return Err(FftError::BufferTooSmall);
        }

        precompute_sine(sine, FFT_SIZE)?;
        precompute_bitrev(bitrev, FFT_SIZE)?;

        Ok(Self {
            sine: &sine[..SINE_TABLE_LEN],
            bitrev: &bitrev[..FFT_SIZE],
        })
    }

    pub fn sine_table(&self) -> &'a [i16] {
        self.sine
    }

    pub fn bitrev_table(&self) -> &'a [u16] {
        self.bitrev
    }

    /// Transforms two parallel channels of exactly `FFT_SIZE` samples each.
    pub fn process_split(&self, real: &mut [i16], imag: &mut [i16], inverse: bool) -> Result<u32, FftError> {
        let real: &mut [i16; FFT_SIZE] = real.try_into().map_err(|_| FftError::SizeMismatch)?;
        let imag: &mut [i16; FFT_SIZE] = imag.try_into().map_err(|_| FftError::SizeMismatch)?;

        Ok(fix_fft_core(&mut SplitSignal::new(real, imag), self.sine, self.bitrev, inverse))
    }

    /// Transforms exactly `FFT_SIZE` interleaved complex samples.
    pub fn process(&self, buffer: &mut [Complex<i16>], inverse: bool) -> Result<u32, FftError> {
        let buffer: &mut [Complex<i16>; FFT_SIZE] =
            buffer.try_into().map_err(|_| FftError::SizeMismatch)?;

        Ok(fix_fft_core(buffer, self.sine, self.bitrev, inverse))
    }
}

impl<'a> FftProcess<Complex<i16>> for FixFft<'a> {
    fn process(&self, buffer: &mut [Complex<i16>], inverse: bool) -> Result<u32, FftError> {
        FixFft::process(self, buffer, inverse)
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
