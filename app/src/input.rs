use handsaw_pointer_udp::PointerState;
use handsaw_widgets::PointerReading;
use std::sync::Arc;

/// Merges the two pointing devices (the window's mouse and the remote
/// hand-tracking feed) into the single reading fed to the knobs each frame.
/// Whichever source produced input most recently is live: remote packets
/// bump the state's generation counter, mouse events reclaim the mouse.
pub struct PointerSource {
    remote: Arc<PointerState>,
    seen_generation: u64,
    mouse_x: i32,
    mouse_y: i32,
    mouse_down: bool,
    remote_live: bool,
}

impl PointerSource {
    pub fn new(remote: Arc<PointerState>) -> Self {
        Self {
            remote,
            seen_generation: 0,
            mouse_x: 0,
            mouse_y: 0,
            mouse_down: false,
            remote_live: false,
        }
    }

    pub fn on_mouse_motion(&mut self, x: i32, y: i32) {
        self.mouse_x = x;
        self.mouse_y = y;
        self.remote_live = false;
    }

    pub fn on_mouse_button(&mut self, down: bool) {
        self.mouse_down = down;
        self.remote_live = false;
    }

    /// The pointer reading for this frame, taken from whichever source
    /// produced input most recently.
    pub fn reading(&mut self) -> PointerReading {
        let generation = self.remote.generation();
        if generation != self.seen_generation {
            self.seen_generation = generation;
            self.remote_live = true;
        }
        if self.remote_live {
            PointerReading {
                x: self.remote.x(),
                y: self.remote.y(),
                engaged: self.remote.active(),
            }
        } else {
            PointerReading {
                x: self.mouse_x,
                y: self.mouse_y,
                engaged: self.mouse_down,
            }
        }
    }

    /// Whether the remote source has ever reported a position. Gates the
    /// on-screen halo so it isn't drawn pinned at the origin before the
    /// first packet arrives.
    pub fn remote_seen(&self) -> bool {
        self.remote.generation() > 0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mouse_drives_the_reading_until_a_packet_arrives() {
        let remote = PointerState::new();
        let mut source = PointerSource::new(Arc::clone(&remote));
        source.on_mouse_motion(10, 20);
        source.on_mouse_button(true);
        let reading = source.reading();
        assert_eq!((reading.x, reading.y, reading.engaged), (10, 20, true));
        assert!(!source.remote_seen());

        remote.set(300, 400, true);
        let reading = source.reading();
        assert_eq!((reading.x, reading.y, reading.engaged), (300, 400, true));
        assert!(source.remote_seen());
    }

    #[test]
    fn mouse_input_reclaims_the_pointer_from_the_remote() {
        let remote = PointerState::new();
        let mut source = PointerSource::new(Arc::clone(&remote));
        remote.set(300, 400, false);
        source.reading();
        source.on_mouse_motion(50, 60);
        let reading = source.reading();
        assert_eq!((reading.x, reading.y, reading.engaged), (50, 60, false));
        // The halo keeps tracking the remote state regardless.
        assert!(source.remote_seen());
    }

    #[test]
    fn a_stale_remote_state_does_not_retake_the_pointer() {
        let remote = PointerState::new();
        let mut source = PointerSource::new(Arc::clone(&remote));
        remote.set(300, 400, false);
        source.reading();
        source.on_mouse_motion(50, 60);
        source.reading();
        // No new packet since the mouse moved, so the mouse stays live.
        let reading = source.reading();
        assert_eq!((reading.x, reading.y), (50, 60));
    }
}
