use std::sync::atomic::{AtomicU32, Ordering};

pub const FREQ_HZ_MIN: f32 = 50.0;
pub const FREQ_HZ_MAX: f32 = 2000.0;
pub const FREQ_HZ_INITIAL: f32 = 440.0;

pub const PHASE_OFFSET_01_MIN: f32 = 0.0;
pub const PHASE_OFFSET_01_MAX: f32 = 1.0;
pub const PHASE_OFFSET_01_INITIAL: f32 = 0.0;

pub const AMPLITUDE_01_MIN: f32 = 0.0;
pub const AMPLITUDE_01_MAX: f32 = 1.0;
pub const AMPLITUDE_01_INITIAL: f32 = 0.3;

/// An `f32` cell written by the control thread and read by the audio thread
/// without locking, stored as its bit pattern in an `AtomicU32`. Relaxed
/// ordering is enough: readers tolerate a value that is one block stale.
pub struct AtomicF32(AtomicU32);

impl AtomicF32 {
    pub fn new(value: f32) -> Self {
        Self(AtomicU32::new(value.to_bits()))
    }

    pub fn set(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }

    pub fn get(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }
}

/// The three live synthesizer parameters. Created once at startup and passed
/// explicitly to the audio callback (reader) and the UI (writer); there are
/// no process-wide globals.
pub struct SynthParams {
    pub freq_hz: AtomicF32,
    pub phase_offset_01: AtomicF32,
    pub amplitude_01: AtomicF32,
}

impl SynthParams {
    pub fn new() -> Self {
        Self {
            freq_hz: AtomicF32::new(FREQ_HZ_INITIAL),
            phase_offset_01: AtomicF32::new(PHASE_OFFSET_01_INITIAL),
            amplitude_01: AtomicF32::new(AMPLITUDE_01_INITIAL),
        }
    }
}

impl Default for SynthParams {
    fn default() -> Self {
        Self::new()
    }
}
