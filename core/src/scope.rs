use std::sync::{Arc, Mutex};

/// Number of downsampled samples retained for visualization.
pub const SCOPE_CAPACITY: usize = 800;

struct ScopeBuffer {
    samples: Vec<f32>,
    cursor: usize,
}

impl ScopeBuffer {
    fn new() -> Self {
        Self {
            samples: vec![0.0; SCOPE_CAPACITY],
            cursor: 0,
        }
    }

    fn write(&mut self, sample: f32) {
        self.samples[self.cursor] = sample;
        self.cursor = (self.cursor + 1) % SCOPE_CAPACITY;
    }

    fn snapshot_into(&self, out: &mut Vec<f32>) {
        out.clear();
        out.extend_from_slice(&self.samples[self.cursor..]);
        out.extend_from_slice(&self.samples[..self.cursor]);
    }
}

/// Ring of the most recent samples sent to the audio device, written by the
/// audio callback and read by the render loop. A single mutex guards both
/// the samples and the write cursor; the writer's critical section is one
/// store and a cursor increment so the audio thread is never blocked for
/// longer than the reader takes to copy the buffer out.
#[derive(Clone)]
pub struct Scope(Arc<Mutex<ScopeBuffer>>);

impl Scope {
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(ScopeBuffer::new())))
    }

    /// Appends one sample, overwriting the oldest entry. Called from the
    /// audio callback.
    pub fn write(&self, sample: f32) {
        self.0.lock().expect("scope lock poisoned").write(sample);
    }

    /// Copies the retained samples into `out` in chronological order, oldest
    /// first. `out` always ends up holding exactly `SCOPE_CAPACITY` entries;
    /// positions that have never been written read as 0.
    pub fn snapshot_into(&self, out: &mut Vec<f32>) {
        self.0.lock().expect("scope lock poisoned").snapshot_into(out);
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}
