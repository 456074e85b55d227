//! Listens for datagrams of the form `"x,y[,pinch]"` sent by a remote
//! hand-tracking process and publishes the most recent position and pinch
//! state. This is a best-effort, most-recent-value-wins channel: malformed
//! packets are dropped without surfacing an error, and there is no
//! acknowledgment or delivery guarantee.

use std::{
    io,
    net::{Ipv4Addr, SocketAddr, UdpSocket},
    str,
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicI32, AtomicU64, Ordering},
    },
    thread::{self, JoinHandle},
    time::Duration,
};

pub const PORT: u16 = 5005;

const BUF_SIZE: usize = 64;

// The receive loop wakes at this interval to check the stop flag.
const RECV_TIMEOUT: Duration = Duration::from_millis(100);

/// Most recent pointer position and engagement reported by the remote
/// hand-tracking process. Written by the listener thread, read by the main
/// loop. Each field is individually atomic with relaxed ordering and no
/// ordering between fields; a reading that is one frame stale is acceptable.
#[derive(Default)]
pub struct PointerState {
    x: AtomicI32,
    y: AtomicI32,
    active: AtomicBool,
    generation: AtomicU64,
}

impl PointerState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Records a new pointer report. Called by the listener thread for each
    /// well-formed packet.
    pub fn set(&self, x: i32, y: i32, active: bool) {
        self.x.store(x, Ordering::Relaxed);
        self.y.store(y, Ordering::Relaxed);
        self.active.store(active, Ordering::Relaxed);
        self.generation.fetch_add(1, Ordering::Relaxed);
    }

    pub fn x(&self) -> i32 {
        self.x.load(Ordering::Relaxed)
    }

    pub fn y(&self) -> i32 {
        self.y.load(Ordering::Relaxed)
    }

    pub fn active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    /// Bumped once per applied packet. Lets readers tell whether the remote
    /// source has produced input since they last looked.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Relaxed)
    }
}

/// Parses a datagram payload of the form `"x,y[,pinch]"`. The pinch field
/// defaults to not-engaged when absent or unparseable; a payload that fails
/// to yield at least x and y is rejected.
pub fn parse_packet(packet: &str) -> Option<(i32, i32, bool)> {
    let mut fields = packet.trim().split(',');
    let x = fields.next()?.trim().parse().ok()?;
    let y = fields.next()?.trim().parse().ok()?;
    let pinch = fields
        .next()
        .and_then(|field| field.trim().parse::<i32>().ok())
        .map(|pinch| pinch == 1)
        .unwrap_or(false);
    Some((x, y, pinch))
}

/// Receives pointer datagrams on a background thread until stopped. The
/// socket carries a read timeout so the receive loop observes the stop flag
/// promptly instead of parking in `recv` forever.
pub struct PointerListener {
    local_addr: SocketAddr,
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl PointerListener {
    pub fn spawn(state: Arc<PointerState>) -> anyhow::Result<Self> {
        Self::spawn_on_port(PORT, state)
    }

    pub fn spawn_on_port(
        port: u16,
        state: Arc<PointerState>,
    ) -> anyhow::Result<Self> {
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, port))?;
        socket.set_read_timeout(Some(RECV_TIMEOUT))?;
        let local_addr = socket.local_addr()?;
        log::info!("pointer listener on {:?}", local_addr);
        let stop = Arc::new(AtomicBool::new(false));
        let handle = thread::spawn({
            let stop = Arc::clone(&stop);
            move || listen(socket, state, stop)
        });
        Ok(Self {
            local_addr,
            stop,
            handle,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Signals the listener thread to exit and waits for it.
    pub fn stop(self) {
        self.stop.store(true, Ordering::Relaxed);
        let _ = self.handle.join();
    }
}

fn listen(socket: UdpSocket, state: Arc<PointerState>, stop: Arc<AtomicBool>) {
    let mut buf = [0; BUF_SIZE];
    while !stop.load(Ordering::Relaxed) {
        match socket.recv(&mut buf) {
            Ok(size) => {
                if let Ok(packet) = str::from_utf8(&buf[..size]) {
                    if let Some((x, y, pinch)) = parse_packet(packet) {
                        state.set(x, y, pinch);
                    }
                }
            }
            Err(e) => match e.kind() {
                // Read timeout expired with no datagram available.
                io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => (),
                _ => log::warn!("pointer socket receive failed: {e}"),
            },
        }
    }
}
