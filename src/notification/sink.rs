#[cfg(feature = "emitter")]
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;

use super::{Notification, Severity};

/// Receives notifications raised by the inventory store.
pub trait NotificationSink {
    fn notify(&mut self, notification: &Notification);
}

/// Logs every notification through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        TracingSink
    }
}

impl NotificationSink for TracingSink {
    fn notify(&mut self, notification: &Notification) {
        match notification.severity() {
            Severity::Info => tracing::info!(
                kind = notification.kind(),
                subject = notification.subject(),
                "{}",
                notification.description()
            ),
            Severity::Destructive => tracing::warn!(
                kind = notification.kind(),
                subject = notification.subject(),
                "{}",
                notification.description()
            ),
        }
    }
}

/// Appends notifications to a shared buffer the presentation layer can drain.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    buffer: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_buffer(buffer: Arc<Mutex<Vec<Notification>>>) -> Self {
        RecordingSink { buffer }
    }

    /// Copy of everything recorded so far.
    pub fn recorded(&self) -> Vec<Notification> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Take everything recorded so far, leaving the buffer empty.
    pub fn drain(&self) -> Vec<Notification> {
        let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *buffer)
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, notification: &Notification) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification.clone());
    }
}

/// Publishes notifications via an EventEmitter for in-process subscribers.
///
/// The event name is [`Notification::kind`] and the payload is the
/// notification encoded as JSON. Listeners run on the emitter's threads;
/// `notify` waits for them so delivery completes before the store returns.
#[cfg(feature = "emitter")]
pub struct EmitterSink {
    emitter: EventEmitter,
}

#[cfg(feature = "emitter")]
impl EmitterSink {
    pub fn new(emitter: EventEmitter) -> Self {
        EmitterSink { emitter }
    }

    /// Register a listener receiving the JSON payload of one notification kind.
    pub fn on<F>(&mut self, kind: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(kind, listener);
    }
}

#[cfg(feature = "emitter")]
impl fmt::Debug for EmitterSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmitterSink").finish_non_exhaustive()
    }
}

#[cfg(feature = "emitter")]
impl NotificationSink for EmitterSink {
    fn notify(&mut self, notification: &Notification) {
        let payload = match serde_json::to_string(notification) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(error = %e, kind = notification.kind(), "failed to encode notification");
                return;
            }
        };
        for handle in self.emitter.emit(notification.kind(), payload) {
            if handle.join().is_err() {
                tracing::error!(kind = notification.kind(), "notification listener panicked");
            }
        }
    }
}
