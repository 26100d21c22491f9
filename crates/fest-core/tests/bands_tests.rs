// Host-side tests for band energy extraction.

mod common;

use common::approx;
use fest_core::*;

#[test]
fn all_zero_buffer_is_silent() {
    let buf = vec![0u8; 128];
    let e = extract(&buf, 0, 6, 6, 20);
    assert_eq!(e, BandEnergy { low: 0.0, mid: 0.0 });
}

#[test]
fn all_max_buffer_is_full_scale() {
    let buf = vec![255u8; 128];
    let e = extract(&buf, 0, 6, 6, 20);
    assert!(approx(e.low, 1.0));
    assert!(approx(e.mid, 1.0));
}

#[test]
fn bands_average_their_own_ranges() {
    let mut buf = vec![0u8; 128];
    buf[..6].iter_mut().for_each(|v| *v = 255);
    // half the mid range loud
    buf[6..13].iter_mut().for_each(|v| *v = 255);
    let e = BandRanges::default().extract(&buf);
    assert!(approx(e.low, 1.0));
    assert!(approx(e.mid, 0.5));
}

#[test]
fn short_buffer_averages_only_in_range_samples() {
    // mid range asks for 6..20 but only 6..10 exists
    let buf = [0, 0, 0, 0, 0, 0, 51, 51, 51, 51];
    let e = extract(&buf, 0, 6, 6, 20);
    assert!(approx(e.low, 0.0));
    assert!(approx(e.mid, 0.2));
}

#[test]
fn out_of_range_band_is_zero() {
    let buf = [255u8; 4];
    let e = extract(&buf, 0, 6, 6, 20);
    assert!(approx(e.low, 1.0));
    assert_eq!(e.mid, 0.0);
    assert_eq!(avg_range(&[], 0, 6), 0.0);
    assert_eq!(avg_range(&buf, 3, 3), 0.0);
    assert_eq!(avg_range(&buf, 5, 2), 0.0);
}

#[test]
fn energies_stay_normalized() {
    let buf: Vec<u8> = (0..=255u8).cycle().take(128).collect();
    for from in 0..20 {
        let e = extract(&buf, from, from + 6, from + 6, from + 20);
        assert!((0.0..=1.0).contains(&e.low));
        assert!((0.0..=1.0).contains(&e.mid));
    }
}

#[test]
fn default_params_fit_inside_the_bin_count() {
    let p = AnalysisParams::default();
    assert_eq!(p.fft_size, 256);
    assert_eq!(p.bin_count(), 128);
    assert!(p.bands.low.end <= p.bin_count());
    assert!(p.bands.mid.end <= p.bin_count());
}

#[test]
fn empty_spectrum_means_idle() {
    let bands = BandRanges::default();
    assert_eq!(Reactivity::from_spectrum(&[], &bands), Reactivity::Idle);
    let m = Reactivity::from_spectrum(&[255; 128], &bands);
    assert!(m.is_active());
}
