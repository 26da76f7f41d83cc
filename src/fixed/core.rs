// src/fixed/core.rs

use super::math::{fix_mpy, half};
use super::signal::FixedSignal;
use crate::config::{FFT_ORDER, FFT_SIZE};
use num_complex::Complex;

/// In-place bit-reversal reordering.
///
/// Each pair is swapped exactly once, from its lower index; fixed points
/// and already-visited pairs are skipped. Applying it twice is the identity.
pub(crate) fn bit_reverse_permute<S>(signal: &mut S, bitrev: &[u16])
where
    S: FixedSignal + ?Sized,
{
    for (i, &r) in bitrev[..FFT_SIZE].iter().enumerate() {
        let r = r as usize;
        if r > i {
            signal.swap_samples(i, r);
        }
    }
}

/// Radix-2 decimation-in-time FFT core over Q15 samples.
///
/// `sine` must hold at least `FFT_SIZE * 3 / 4` entries and `bitrev` at
/// least `FFT_SIZE`. Forward and inverse differ only in the sign of the
/// twiddle sine. Returns the number of stages that halved their operands.
pub(crate) fn fix_fft_core<S>(signal: &mut S, sine: &[i16], bitrev: &[u16], inverse: bool) -> u32
where
    S: FixedSignal + ?Sized,
{
    // 1. Decimation in time
    bit_reverse_permute(signal, bitrev);

    // 2. Butterfly stages, widest twiddle stride first
    let mut scale = 0;
    let mut step = 1;

    for stage in (1..=FFT_ORDER).rev() {
        // The scan runs on every stage and in both directions.
        let shift = signal.exceeds_headroom();
        if shift {
            scale += 1;
            fft_trace!("stage {}: samples outside headroom, halving (scale {})", stage, scale);
        }

        for m in 0..step {
            // 0 <= phase < FFT_SIZE / 2
            let phase = m << (stage - 1);
            let mut wr = sine[phase + FFT_SIZE / 4];
            let mut wi = if inverse {
                sine[phase]
            } else {
                sine[phase].wrapping_neg()
            };
            if shift {
                wr = half(wr);
                wi = half(wi);
            }

            for i in (m..FFT_SIZE).step_by(step << 1) {
                let j = i + step;

                let far = signal.sample(j);
                let tr = fix_mpy(wr, far.re).wrapping_sub(fix_mpy(wi, far.im));
                let ti = fix_mpy(wr, far.im).wrapping_add(fix_mpy(wi, far.re));

                let mut near = signal.sample(i);
                if shift {
                    near = Complex::new(half(near.re), half(near.im));
                }

                signal.set_sample(
                    i,
                    Complex::new(near.re.wrapping_add(tr), near.im.wrapping_add(ti)),
                );
                signal.set_sample(
                    j,
                    Complex::new(near.re.wrapping_sub(tr), near.im.wrapping_sub(ti)),
                );
            }
        }
        step <<= 1;
    }

    fft_debug!(
        "{} FFT done, scale exponent {}",
        if inverse { "inverse" } else { "forward" },
        scale
    );
    scale
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
