use fix_fft::{FixFft, FFT_SIZE, FixedSignal, SplitSignal};
use num_complex::Complex;
use proptest::prelude::*;

/// Signal with every component drawn from `-amp..=amp`.
fn signal() -> impl Strategy<Value = (i16, Vec<i16>, Vec<i16>)> {
    (1i16..=i16::MAX).prop_flat_map(|amp| {
        (
            Just(amp),
            proptest::collection::vec(-amp..=amp, FFT_SIZE),
            proptest::collection::vec(-amp..=amp, FFT_SIZE),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn forward_then_inverse_reconstructs((amp, re, im) in signal()) {
        let fft = FixFft::new();
        let (mut out_re, mut out_im) = (re.clone(), im.clone());

        let forward = fft.process_split(&mut out_re, &mut out_im, false).unwrap();
        let inverse = fft.process_split(&mut out_re, &mut out_im, true).unwrap();

        // x = IDFT(DFT(x)) / N, and each returned halving is undone by 2^scale
        let gain = (1u64 << (forward + inverse)) as f64 / FFT_SIZE as f64;
        let tolerance = amp as f64 / 256.0 + 2.0;
        for n in 0..FFT_SIZE {
            let err_re = (out_re[n] as f64 * gain - re[n] as f64).abs();
            let err_im = (out_im[n] as f64 * gain - im[n] as f64).abs();
            prop_assert!(err_re <= tolerance, "real at {}: error {}", n, err_re);
            prop_assert!(err_im <= tolerance, "imag at {}: error {}", n, err_im);
        }
    }

    #[test]
    fn split_and_interleaved_storage_agree((_amp, re, im) in signal(), inverse in any::<bool>()) {
        let fft = FixFft::new();

        let mut interleaved: Vec<Complex<i16>> =
            re.iter().zip(&im).map(|(&r, &i)| Complex::new(r, i)).collect();
        let (mut split_re, mut split_im) = (re, im);

        let a = fft.process(&mut interleaved, inverse).unwrap();
        let b = fft.process_split(&mut split_re, &mut split_im, inverse).unwrap();

        prop_assert_eq!(a, b);
        for n in 0..FFT_SIZE {
            prop_assert_eq!(interleaved[n], Complex::new(split_re[n], split_im[n]));
        }
    }
}

#[test]
fn full_scale_extremes_round_trip() {
    let fft = FixFft::new();
    for fill in [i16::MAX, i16::MIN] {
        let mut re = vec![fill; FFT_SIZE];
        let mut im = vec![fill; FFT_SIZE];

        let forward = fft.process_split(&mut re, &mut im, false).unwrap();
        let inverse = fft.process_split(&mut re, &mut im, true).unwrap();
        assert!(forward > 0 && inverse > 0);

        let gain = (1u64 << (forward + inverse)) as f64 / FFT_SIZE as f64;
        for n in 0..FFT_SIZE {
            assert!((re[n] as f64 * gain - fill as f64).abs() < 130.0, "real at {}", n);
            assert!((im[n] as f64 * gain - fill as f64).abs() < 130.0, "imag at {}", n);
        }
    }
}

#[test]
fn split_signal_scan_sees_both_channels() {
    let mut re = [0i16; FFT_SIZE];
    let mut im = [0i16; FFT_SIZE];
    im[FFT_SIZE / 2] = 0x4000;
    assert!(SplitSignal::new(&mut re, &mut im).exceeds_headroom());
}
