//! Frequency analysis over the shared output mix.
//!
//! The tap is created lazily, once, the first time a track loads, and stays
//! attached to the master bus so it observes whichever track is routed
//! through it. If the environment cannot create one the analyzer degrades to
//! returning an empty buffer forever.

use crate::error::FestError;

/// Read point on the audio graph that exposes byte frequency magnitudes.
pub trait AnalysisTap {
    /// Number of frequency bins the tap produces per snapshot.
    fn bin_count(&self) -> usize;
    /// Copy the latest magnitudes (0..=255) into `out`; never blocks.
    fn read_bytes(&self, out: &mut [u8]);
}

enum TapSlot<T> {
    Pending,
    Ready(T),
    Unavailable,
}

pub struct FrequencyAnalyzer<T> {
    slot: TapSlot<T>,
    buf: Vec<u8>,
}

impl<T> Default for FrequencyAnalyzer<T> {
    fn default() -> Self {
        Self {
            slot: TapSlot::Pending,
            buf: Vec::new(),
        }
    }
}

impl<T: AnalysisTap> FrequencyAnalyzer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the tap if it has not been attempted yet.
    ///
    /// Only the first call runs `create`; a failure is logged and latches the
    /// analyzer into its permanently-empty state.
    pub fn ensure_tap<F>(&mut self, create: F)
    where
        F: FnOnce() -> Result<T, FestError>,
    {
        if !matches!(self.slot, TapSlot::Pending) {
            return;
        }
        match create() {
            Ok(tap) => {
                self.buf.resize(tap.bin_count(), 0);
                log::info!("[analyser] tap ready, bins={}", tap.bin_count());
                self.slot = TapSlot::Ready(tap);
            }
            Err(e) => {
                log::warn!("[analyser] setup failed, visuals stay idle: {}", e);
                self.slot = TapSlot::Unavailable;
            }
        }
    }

    #[inline]
    pub fn has_tap(&self) -> bool {
        matches!(self.slot, TapSlot::Ready(_))
    }

    #[inline]
    pub fn is_unavailable(&self) -> bool {
        matches!(self.slot, TapSlot::Unavailable)
    }

    /// Latest snapshot, or an empty slice when nothing is playing or no tap
    /// exists.
    pub fn current_buffer(&mut self, playing: bool) -> &[u8] {
        match &self.slot {
            TapSlot::Ready(tap) if playing => {
                let bins = tap.bin_count();
                if self.buf.len() != bins {
                    self.buf.resize(bins, 0);
                }
                tap.read_bytes(&mut self.buf);
                &self.buf
            }
            _ => &[],
        }
    }
}
