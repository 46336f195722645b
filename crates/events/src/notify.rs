//! User-facing notification delivery (mechanics only).
//!
//! Domain operations produce notifications as data; how they reach the user
//! (modal alert, toast, log line) is a presentation concern. The sink is
//! deliberately fire-and-forget: delivery can never fail an operation, and
//! the domain never waits on it.

use std::sync::Mutex;

/// Receiver for user-facing notifications.
///
/// `notify` takes `&self` so a sink can be shared by reference; in-memory
/// implementations use interior mutability. Delivery is best-effort and
/// infallible from the caller's point of view.
pub trait NotificationSink<N> {
    fn notify(&self, notification: N);
}

/// In-memory sink for tests/dev.
///
/// Buffers everything it receives; tests drain the buffer and assert on it.
/// The mutex only provides `&self` interior mutability, there is no
/// cross-thread traffic in this core.
#[derive(Debug)]
pub struct RecordingSink<N> {
    buffer: Mutex<Vec<N>>,
}

impl<N> RecordingSink<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every buffered notification, leaving the sink empty.
    pub fn drain(&self) -> Vec<N> {
        match self.buffer.lock() {
            Ok(mut buf) => buf.split_off(0),
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().map(|buf| buf.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<N> Default for RecordingSink<N> {
    fn default() -> Self {
        Self {
            buffer: Mutex::new(Vec::new()),
        }
    }
}

impl<N> NotificationSink<N> for RecordingSink<N> {
    fn notify(&self, notification: N) {
        // A poisoned lock drops the notification; best-effort by contract.
        if let Ok(mut buf) = self.buffer.lock() {
            buf.push(notification);
        }
    }
}

/// Sink that forwards notifications to the process log.
#[derive(Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl<N> NotificationSink<N> for TracingSink
where
    N: core::fmt::Debug,
{
    fn notify(&self, notification: N) {
        tracing::info!(?notification, "notification");
    }
}
