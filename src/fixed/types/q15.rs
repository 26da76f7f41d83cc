// src/fixed/types/q15.rs
use super::super::math::{fix_mpy, half, FRAC_BITS};
use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Signed Q(0,15) sample: the raw `i16` range maps onto `[-1.0, 1.0)`.
///
/// Addition and subtraction wrap, matching what the transform does to its
/// 16-bit storage. Multiplication is the rounding [`fix_mpy`].
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Q15(i16);

impl Q15 {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i16::MAX);
    pub const MIN: Self = Self(i16::MIN);

    /// Creates a Q15 from the raw integer value.
    #[inline]
    pub const fn from_bits(bits: i16) -> Self {
        Self(bits)
    }

    /// Returns the stored raw value.
    #[inline]
    pub const fn to_bits(self) -> i16 {
        self.0
    }

    /// Converts an f64 to Q15 with rounding, saturating outside `[-1.0, 1.0)`.
    pub fn from_f64(value: f64) -> Self {
        let scaling_factor = (1u32 << FRAC_BITS) as f64;
        let bits = round(value * scaling_factor);
        // `as` saturates float-to-int conversions
        Self(bits as i16)
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / (1u32 << FRAC_BITS) as f64
    }

    /// Scales the value by 0.5, rounding toward zero.
    #[inline]
    pub const fn half(self) -> Self {
        Self(half(self.0))
    }
}

fn round(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.round();

    #[cfg(not(feature = "std"))]
    return libm::round(x);
}

impl From<i16> for Q15 {
    fn from(bits: i16) -> Self {
        Self(bits)
    }
}

impl From<Q15> for i16 {
    fn from(value: Q15) -> Self {
        value.0
    }
}

impl Add for Q15 {
    type Output = Q15;

    #[inline]
    fn add(self, rhs: Q15) -> Q15 {
        Q15(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for Q15 {
    #[inline]
    fn add_assign(&mut self, rhs: Q15) {
        *self = *self + rhs;
    }
}

impl Sub for Q15 {
    type Output = Q15;

    #[inline]
    fn sub(self, rhs: Q15) -> Q15 {
        Q15(self.0.wrapping_sub(rhs.0))
    }
}

impl SubAssign for Q15 {
    #[inline]
    fn sub_assign(&mut self, rhs: Q15) {
        *self = *self - rhs;
    }
}

impl Mul for Q15 {
    type Output = Q15;

    #[inline]
    fn mul(self, rhs: Q15) -> Q15 {
        Q15(fix_mpy(self.0, rhs.0))
    }
}

impl MulAssign for Q15 {
    #[inline]
    fn mul_assign(&mut self, rhs: Q15) {
        *self = *self * rhs;
    }
}

impl Neg for Q15 {
    type Output = Q15;

    #[inline]
    fn neg(self) -> Q15 {
        Q15(self.0.wrapping_neg())
    }
}

impl fmt::Display for Q15 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f64())
    }
}

impl fmt::Debug for Q15 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // decimal value first, raw bits in parentheses
        write!(f, "{:.6} (raw: {})", self.to_f64(), self.0)
    }
}
