//! Non-blocking bot bridge.
//!
//! One loopback listener, at most one client. Every socket is switched to
//! non-blocking mode as soon as it exists, so no call here can stall the frame
//! loop: "would block" just means nothing happened this call.
//!
//! ```text
//! Disabled ──────────────────────────────┐
//! Listening ──accept──▶ Connected         ├──shutdown──▶ Shutdown
//!     ▲                     │             │
//!     └──peer closed/error──┘ ────────────┘
//! ```
//!
//! Expected call order per frame: [`BotBridge::poll_accept`], then drain
//! [`BotBridge::try_recv_dir`]; after each simulation tick, exactly one
//! [`BotBridge::send_state`].

use std::io::{self, ErrorKind, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};

use tracing::{debug, info, warn};

use crate::config::BridgeConfig;
use crate::core::BotView;
use crate::protocol::{BotStateMessage, BOT_STATE_MSG_LEN};
use crate::types::Direction;
use crate::wire_log::WireLog;

/// Upper bound on command bytes consumed by one [`BotBridge::drain_dirs`] call.
pub const MAX_DIRS_PER_FRAME: usize = 64;

/// Externally visible bridge state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    Disabled,
    Listening,
    Connected,
    Shutdown,
}

enum Conn {
    Disabled,
    Listening {
        listener: TcpListener,
    },
    Connected {
        listener: TcpListener,
        client: TcpStream,
        peer: SocketAddr,
    },
    Shutdown,
}

/// Outcome of a single non-blocking transfer on the client socket.
enum Io {
    Done(usize),
    Idle,
    Closed(io::Error),
}

fn classify(res: io::Result<usize>) -> Io {
    match res {
        Ok(0) => Io::Closed(io::Error::from(ErrorKind::UnexpectedEof)),
        Ok(n) => Io::Done(n),
        Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::Interrupted) => Io::Idle,
        Err(e) => Io::Closed(e),
    }
}

pub struct BotBridge {
    conn: Conn,
    port: u16,
    wire_log: Option<WireLog>,
    sent: u64,
}

impl BotBridge {
    /// A bridge that never listens. Every operation is a no-op.
    pub fn disabled() -> Self {
        Self {
            conn: Conn::Disabled,
            port: 0,
            wire_log: None,
            sent: 0,
        }
    }

    /// Bind `127.0.0.1:<port>` in non-blocking mode, or stay disabled when
    /// `config.enabled` is false. Bind errors are returned to the caller.
    pub fn new(config: &BridgeConfig) -> io::Result<Self> {
        if !config.enabled {
            return Ok(Self::disabled());
        }

        let listener = TcpListener::bind(config.socket_addr())?;
        listener.set_nonblocking(true)?;
        let local = listener.local_addr()?;
        info!(addr = %local, "bot bridge listening");

        let wire_log = config.log_path.as_ref().and_then(|path| match WireLog::open(path) {
            Ok(log) => Some(log),
            Err(e) => {
                warn!(path = %path, error = %e, "could not open bot wire log");
                None
            }
        });

        Ok(Self {
            conn: Conn::Listening { listener },
            port: local.port(),
            wire_log,
            sent: 0,
        })
    }

    /// Like [`Self::new`], but a bind failure degrades to a disabled bridge.
    /// The game runs the same either way.
    pub fn new_or_disabled(config: &BridgeConfig) -> Self {
        match Self::new(config) {
            Ok(bridge) => bridge,
            Err(e) => {
                warn!(addr = %config.socket_addr(), error = %e, "bot bridge disabled: bind failed");
                Self::disabled()
            }
        }
    }

    /// Shorthand for [`Self::new_or_disabled`] without a wire log.
    pub fn init(enabled: bool, port: u16) -> Self {
        Self::new_or_disabled(&BridgeConfig {
            enabled,
            port,
            log_path: None,
        })
    }

    /// `SNAKE_BOT` / `SNAKE_BOT_PORT` / `SNAKE_BOT_LOG_PATH` driven setup.
    pub fn from_env() -> Self {
        Self::new_or_disabled(&BridgeConfig::from_env())
    }

    pub fn state(&self) -> BridgeState {
        match self.conn {
            Conn::Disabled => BridgeState::Disabled,
            Conn::Listening { .. } => BridgeState::Listening,
            Conn::Connected { .. } => BridgeState::Connected,
            Conn::Shutdown => BridgeState::Shutdown,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self.conn, Conn::Listening { .. } | Conn::Connected { .. })
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.conn, Conn::Connected { .. })
    }

    /// Bound port; 0 when not listening.
    pub fn port(&self) -> u16 {
        if self.is_enabled() {
            self.port
        } else {
            0
        }
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        match &self.conn {
            Conn::Listening { listener } | Conn::Connected { listener, .. } => {
                listener.local_addr().ok()
            }
            _ => None,
        }
    }

    pub fn peer_addr(&self) -> Option<SocketAddr> {
        match &self.conn {
            Conn::Connected { peer, .. } => Some(*peer),
            _ => None,
        }
    }

    /// Number of state messages written in full.
    pub fn messages_sent(&self) -> u64 {
        self.sent
    }

    /// One non-blocking accept attempt. Only issued while listening; a second
    /// client stays pending in the backlog until the current one leaves.
    pub fn poll_accept(&mut self) {
        let Conn::Listening { listener } = &self.conn else {
            return;
        };

        let (client, peer) = match listener.accept() {
            Ok(accepted) => accepted,
            Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::Interrupted) => return,
            Err(e) => {
                warn!(error = %e, "bot accept failed");
                return;
            }
        };

        if let Err(e) = client.set_nonblocking(true) {
            warn!(peer = %peer, error = %e, "dropping bot client: cannot set non-blocking");
            return;
        }
        if let Err(e) = client.set_nodelay(true) {
            debug!(peer = %peer, error = %e, "could not disable Nagle on bot client");
        }

        if let Conn::Listening { listener } = std::mem::replace(&mut self.conn, Conn::Shutdown) {
            info!(peer = %peer, "bot client connected");
            self.conn = Conn::Connected {
                listener,
                client,
                peer,
            };
        }
    }

    /// Read at most one command byte.
    ///
    /// Returns `None` when not connected, when nothing is pending, when the
    /// byte is not a valid direction (discarded, connection kept), or when the
    /// peer has gone away (bridge falls back to listening).
    pub fn try_recv_dir(&mut self) -> Option<Direction> {
        let Conn::Connected { client, .. } = &mut self.conn else {
            return None;
        };

        let mut byte = [0u8; 1];
        match classify(client.read(&mut byte)) {
            Io::Done(_) => {}
            Io::Idle => return None,
            Io::Closed(e) => {
                self.disconnect(&e);
                return None;
            }
        }

        let dir = Direction::from_wire(byte[0]);
        if dir.is_none() {
            debug!(byte = byte[0], "ignoring invalid bot command byte");
        }
        dir
    }

    /// Feed every pending command to `f`, up to [`MAX_DIRS_PER_FRAME`].
    /// Returns how many valid directions were delivered.
    pub fn drain_dirs(&mut self, mut f: impl FnMut(Direction)) -> usize {
        let mut delivered = 0;
        for _ in 0..MAX_DIRS_PER_FRAME {
            if !self.is_connected() {
                break;
            }
            // Invalid bytes also return None; only stop once the socket is idle.
            match self.try_recv_dir() {
                Some(dir) => {
                    f(dir);
                    delivered += 1;
                }
                None if !self.has_pending_input() => break,
                None => {}
            }
        }
        delivered
    }

    fn has_pending_input(&self) -> bool {
        let Conn::Connected { client, .. } = &self.conn else {
            return false;
        };
        let mut byte = [0u8; 1];
        matches!(client.peek(&mut byte), Ok(n) if n > 0)
    }

    /// Send one post-tick snapshot, best effort.
    ///
    /// A single non-blocking write is attempted. If the socket would block the
    /// message is dropped; if only part of it fits, the rest is dropped too.
    /// The next tick supersedes it either way. Nothing is buffered or retried.
    pub fn send_state(&mut self, view: &BotView) {
        self.send_message(&BotStateMessage::from(view));
    }

    pub fn send_message(&mut self, msg: &BotStateMessage) {
        let Conn::Connected { client, .. } = &mut self.conn else {
            return;
        };

        let bytes = msg.encode();
        match classify(client.write(&bytes)) {
            Io::Done(n) if n == BOT_STATE_MSG_LEN => {
                self.sent += 1;
                if let Some(log) = self.wire_log.as_mut() {
                    log.record(self.sent, msg);
                }
            }
            Io::Done(n) => debug!(written = n, "partial bot state write, remainder dropped"),
            Io::Idle => debug!("bot socket full, state message dropped"),
            Io::Closed(e) => self.disconnect(&e),
        }
    }

    /// Close the client (if any) and return to listening.
    fn disconnect(&mut self, reason: &io::Error) {
        if let Conn::Connected { listener, peer, .. } =
            std::mem::replace(&mut self.conn, Conn::Shutdown)
        {
            info!(peer = %peer, reason = %reason, "bot client disconnected");
            self.conn = Conn::Listening { listener };
        }
    }

    /// Close every socket. Idempotent; the bridge stays inert afterwards.
    pub fn shutdown(&mut self) {
        match std::mem::replace(&mut self.conn, Conn::Shutdown) {
            Conn::Listening { .. } | Conn::Connected { .. } => {
                info!(sent = self.sent, "bot bridge shut down");
            }
            Conn::Disabled | Conn::Shutdown => {}
        }
        self.wire_log = None;
    }
}

impl Drop for BotBridge {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for BotBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotBridge")
            .field("state", &self.state())
            .field("port", &self.port())
            .field("peer", &self.peer_addr())
            .field("sent", &self.sent)
            .finish()
    }
}
