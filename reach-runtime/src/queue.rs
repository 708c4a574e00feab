//! Bounded sample queue between the producer and consumer threads.
//!
//! Shutdown is explicit in the type: the producer sends [`Envelope::End`]
//! when the source is exhausted, so the consumer never has to interpret a
//! magic value.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use tracing::debug;

use reach_core::{Action, OverflowPolicy, Sample};

/// What travels over the queue.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// One paced sample and the actions due at its tick.
    Tick {
        sample: Sample,
        actions: Vec<Action>,
    },
    /// Clean shutdown sentinel; nothing follows it.
    End,
}

/// Sending side of the queue, applying the configured overflow policy.
///
/// Blocking producers hold no receiver, so a vanished consumer shows up
/// as a failed send. Drop-oldest producers keep a receiver clone to make
/// room, which trades away disconnect detection.
#[derive(Debug, Clone)]
pub struct Producer {
    tx: Sender<Envelope>,
    drain: Option<Receiver<Envelope>>,
}

impl Producer {
    /// Send one envelope, honoring the overflow policy.
    ///
    /// Returns `false` when the consumer is gone and the run is over.
    pub fn send(&self, envelope: Envelope) -> bool {
        match &self.drain {
            None => self.tx.send(envelope).is_ok(),
            Some(drain) => {
                let mut envelope = envelope;
                loop {
                    match self.tx.try_send(envelope) {
                        Ok(()) => return true,
                        Err(TrySendError::Disconnected(_)) => return false,
                        Err(TrySendError::Full(back)) => {
                            // Make room by discarding the oldest envelope.
                            if let Ok(dropped) = drain.try_recv() {
                                debug!(?dropped, "queue full, dropping oldest envelope");
                            }
                            envelope = back;
                        }
                    }
                }
            }
        }
    }
}

/// Build the bounded queue pair.
pub fn channel(capacity: usize, policy: OverflowPolicy) -> (Producer, Receiver<Envelope>) {
    let (tx, rx) = bounded(capacity);
    let drain = match policy {
        OverflowPolicy::Block => None,
        OverflowPolicy::DropOldest => Some(rx.clone()),
    };
    (Producer { tx, drain }, rx)
}
