//! Graphical widgets for the handsaw synthesizer. This library doesn't know
//! about signals or the network; it handles drawing interactive controls
//! onto an SDL canvas and turning pointer readings into parameter values.

mod draw;
mod knob;

pub use draw::*;
pub use knob::*;
