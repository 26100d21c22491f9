//! Reduce a byte frequency spectrum to normalized "low" and "mid" energies.

use crate::constants::{FFT_SIZE, LOW_BAND, MID_BAND};
use std::ops::Range;

/// Normalized band energies, both in \[0, 1\].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BandEnergy {
    pub low: f32,
    pub mid: f32,
}

/// Index ranges (half-open) of the spectrum bins that feed each band.
#[derive(Clone, Debug, PartialEq)]
pub struct BandRanges {
    pub low: Range<usize>,
    pub mid: Range<usize>,
}

impl Default for BandRanges {
    fn default() -> Self {
        Self {
            low: LOW_BAND.0..LOW_BAND.1,
            mid: MID_BAND.0..MID_BAND.1,
        }
    }
}

impl BandRanges {
    pub fn extract(&self, buffer: &[u8]) -> BandEnergy {
        extract(
            buffer,
            self.low.start,
            self.low.end,
            self.mid.start,
            self.mid.end,
        )
    }
}

/// Analysis-tap setup shared by the playback engine and the extractor.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisParams {
    pub fft_size: usize,
    pub bands: BandRanges,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            fft_size: FFT_SIZE,
            bands: BandRanges::default(),
        }
    }
}

impl AnalysisParams {
    #[inline]
    pub fn bin_count(&self) -> usize {
        self.fft_size / 2
    }
}

/// Mean of `buffer[from..to]`, restricted to indices that exist.
///
/// Returns 0 when no index of the range falls inside the buffer.
#[inline]
pub fn avg_range(buffer: &[u8], from: usize, to: usize) -> f32 {
    let end = to.min(buffer.len());
    if from >= end {
        return 0.0;
    }
    let slice = &buffer[from..end];
    let sum: u32 = slice.iter().map(|&v| v as u32).sum();
    sum as f32 / slice.len() as f32
}

pub fn extract(
    buffer: &[u8],
    lo_from: usize,
    lo_to: usize,
    mid_from: usize,
    mid_to: usize,
) -> BandEnergy {
    BandEnergy {
        low: (avg_range(buffer, lo_from, lo_to) / 255.0).clamp(0.0, 1.0),
        mid: (avg_range(buffer, mid_from, mid_to) / 255.0).clamp(0.0, 1.0),
    }
}

/// Per-frame mode shared by every reactive effect.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Reactivity {
    #[default]
    Idle,
    Active(BandEnergy),
}

impl Reactivity {
    /// Active when a non-empty spectrum was sampled, Idle otherwise.
    pub fn from_spectrum(spectrum: &[u8], bands: &BandRanges) -> Self {
        if spectrum.is_empty() {
            Reactivity::Idle
        } else {
            Reactivity::Active(bands.extract(spectrum))
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, Reactivity::Active(_))
    }
}
