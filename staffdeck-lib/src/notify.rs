//! Change-notification channels.
//!
//! Mutations complete synchronously on the calling event; listeners are told
//! afterwards through a bounded channel so the UI can redraw. Sends never
//! block and never fail loudly: a dropped receiver means the listener is
//! gone, which is not an error.

use tokio::sync::mpsc;

const CHANNEL_CAPACITY: usize = 16;

/// Sender half of a notification channel.
#[derive(Debug)]
pub struct EventSender<T> {
    tx: mpsc::Sender<T>,
}

impl<T> EventSender<T> {
    /// Deliver an event. Non-blocking; ignored if the receiver is gone or
    /// the channel is full (the listener will observe the latest state when
    /// it drains).
    pub fn send(&self, event: T) {
        let _ = self.tx.try_send(event);
    }

    /// Whether the receiving side has been dropped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl<T> Clone for EventSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

/// Receiver half of a notification channel.
#[derive(Debug)]
pub struct EventReceiver<T> {
    rx: mpsc::Receiver<T>,
}

impl<T> EventReceiver<T> {
    /// Wait for the next event.
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }

    /// Take the next event without waiting, if one is queued.
    pub fn try_recv(&mut self) -> Option<T> {
        self.rx.try_recv().ok()
    }
}

/// Create a new notification channel pair.
pub fn channel<T>() -> (EventSender<T>, EventReceiver<T>) {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    (EventSender { tx }, EventReceiver { rx })
}
