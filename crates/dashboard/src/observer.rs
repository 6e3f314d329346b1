//! Change notification between item sources and the containers showing them.
//!
//! A container builds its [`DataSetObserver`] when it is constructed and keeps
//! it for its whole lifetime. Adapters receive a [`DataSetNotifier`] handle
//! when they are attached and signal through it; the container drains the
//! queued events synchronously before its next measurement pass.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, error::TryRecvError};

/// What happened to the data behind a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSetEvent {
    /// The items changed; discard all children and rebuild them from the source.
    Changed,
    /// The source is no longer valid; discard all children without rebuilding.
    Invalidated,
}

/// Sending half, held by adapters (and anything else that mutates items).
#[derive(Debug, Clone)]
pub struct DataSetNotifier {
    tx: UnboundedSender<DataSetEvent>,
}

impl DataSetNotifier {
    pub fn notify_changed(&self) {
        self.send(DataSetEvent::Changed);
    }

    pub fn notify_invalidated(&self) {
        self.send(DataSetEvent::Invalidated);
    }

    fn send(&self, event: DataSetEvent) {
        // A closed channel means the container is gone; nothing left to notify.
        if self.tx.send(event).is_err() {
            log::trace!("data set {:?} dropped: observer closed", event);
        }
    }

    /// Whether the observing container still exists.
    pub fn is_observed(&self) -> bool {
        !self.tx.is_closed()
    }
}

/// Receiving half, owned by a container.
#[derive(Debug)]
pub struct DataSetObserver {
    tx: UnboundedSender<DataSetEvent>,
    rx: UnboundedReceiver<DataSetEvent>,
}

impl DataSetObserver {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    /// A handle that delivers events to this observer.
    pub fn notifier(&self) -> DataSetNotifier {
        DataSetNotifier {
            tx: self.tx.clone(),
        }
    }

    /// Take every event queued since the last drain, oldest first.
    pub fn drain(&mut self) -> Vec<DataSetEvent> {
        let mut events = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        events
    }
}

impl Default for DataSetObserver {
    fn default() -> Self {
        Self::new()
    }
}
