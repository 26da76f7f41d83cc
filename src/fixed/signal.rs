// src/fixed/signal.rs

use crate::config::FFT_SIZE;
use num_complex::Complex;

/// Largest value a sample may hold before a stage must halve its operands.
pub const HEADROOM_MAX: i16 = 0x3FFF;
/// Smallest value a sample may hold before a stage must halve its operands.
pub const HEADROOM_MIN: i16 = -0x4000;

/// Returns true if `x` is outside the headroom band.
#[inline]
pub const fn exceeds_headroom(x: i16) -> bool {
    x > HEADROOM_MAX || x < HEADROOM_MIN
}

/// Storage the transform engine works on: `FFT_SIZE` complex Q15 samples.
///
/// Indices passed in are always below `FFT_SIZE`.
pub trait FixedSignal {
    fn sample(&self, i: usize) -> Complex<i16>;

    fn set_sample(&mut self, i: usize, value: Complex<i16>);

    fn swap_samples(&mut self, i: usize, j: usize);

    /// Range scan run at the top of every stage.
    fn exceeds_headroom(&self) -> bool {
        (0..FFT_SIZE).any(|i| {
            let s = self.sample(i);
            exceeds_headroom(s.re) || exceeds_headroom(s.im)
        })
    }
}

/// Two parallel, caller-owned channels: real and imaginary.
pub struct SplitSignal<'a> {
    re: &'a mut [i16; FFT_SIZE],
    im: &'a mut [i16; FFT_SIZE],
}

impl<'a> SplitSignal<'a> {
    pub fn new(re: &'a mut [i16; FFT_SIZE], im: &'a mut [i16; FFT_SIZE]) -> Self {
        Self { re, im }
    }

    pub fn re(&self) -> &[i16; FFT_SIZE] {
        self.re
    }

    pub fn im(&self) -> &[i16; FFT_SIZE] {
        self.im
    }
}

impl FixedSignal for SplitSignal<'_> {
    #[inline]
    fn sample(&self, i: usize) -> Complex<i16> {
        Complex::new(self.re[i], self.im[i])
    }

    #[inline]
    fn set_sample(&mut self, i: usize, value: Complex<i16>) {
        self.re[i] = value.re;
        self.im[i] = value.im;
    }

    #[inline]
    fn swap_samples(&mut self, i: usize, j: usize) {
        self.re.swap(i, j);
        self.im.swap(i, j);
    }

    fn exceeds_headroom(&self) -> bool {
        self.re.iter().chain(self.im.iter()).any(|&x| exceeds_headroom(x))
    }
}

impl FixedSignal for [Complex<i16>; FFT_SIZE] {
    #[inline]
    fn sample(&self, i: usize) -> Complex<i16> {
        self[i]
    }

    #[inline]
    fn set_sample(&mut self, i: usize, value: Complex<i16>) {
        self[i] = value;
    }

    #[inline]
    fn swap_samples(&mut self, i: usize, j: usize) {
        self.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headroom_bounds() {
        assert!(!exceeds_headroom(0));
        assert!(!exceeds_headroom(HEADROOM_MAX));
        assert!(!exceeds_headroom(HEADROOM_MIN));
        assert!(exceeds_headroom(HEADROOM_MAX + 1));
        assert!(exceeds_headroom(HEADROOM_MIN - 1));
        assert!(exceeds_headroom(i16::MAX));
        assert!(exceeds_headroom(i16::MIN));
    }

    #[test]
    fn test_split_signal_scan() {
        let mut re = [HEADROOM_MIN; FFT_SIZE];
        let mut im = [HEADROOM_MAX; FFT_SIZE];
        {
            let signal = SplitSignal::new(&mut re, &mut im);
            assert!(!signal.exceeds_headroom());
        }

        im[FFT_SIZE - 1] = HEADROOM_MAX + 1;
        let signal = SplitSignal::new(&mut re, &mut im);
        assert!(signal.exceeds_headroom());
    }

    #[test]
    fn test_complex_array_scan() {
        let mut buffer = [Complex::new(0i16, 0i16); FFT_SIZE];
        assert!(!buffer.exceeds_headroom());

        buffer[17] = Complex::new(HEADROOM_MIN - 1, 0);
        assert!(buffer.exceeds_headroom());

        buffer[17] = Complex::new(0, HEADROOM_MAX + 1);
        assert!(buffer.exceeds_headroom());
    }

    #[test]
    fn test_split_signal_access() {
        let mut re = [0i16; FFT_SIZE];
        let mut im = [0i16; FFT_SIZE];
        let mut signal = SplitSignal::new(&mut re, &mut im);

        signal.set_sample(3, Complex::new(10, -10));
        signal.swap_samples(3, 900);
        assert_eq!(signal.sample(3), Complex::new(0, 0));
        assert_eq!(signal.sample(900), Complex::new(10, -10));
        assert_eq!(signal.re()[900], 10);
        assert_eq!(signal.im()[900], -10);
    }
}
