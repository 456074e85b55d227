//! Pure signal logic for the handsaw synthesizer: the sawtooth oscillator,
//! the atomic parameter cells shared between the control thread and the audio
//! thread, and the lock-protected scope buffer feeding the visualization.
//! This crate doesn't know about audio devices, windows or the network.

pub mod oscillator;
pub use oscillator::{Oscillator, saw_01};

pub mod params;
pub use params::{AtomicF32, SynthParams};

pub mod scope;
pub use scope::{SCOPE_CAPACITY, Scope};
