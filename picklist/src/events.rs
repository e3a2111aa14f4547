//! Notifications emitted by a select.

use tokio::sync::mpsc;

use crate::keys::KeyCombo;

/// Result of routing a key to the select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The select acted on the key.
    Consumed,
    /// The select ignored the key.
    Ignored,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// Something observable changed on the select.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectEvent<T> {
    /// The selection set changed; carries the new set in display order.
    SelectionChanged(Vec<T>),
    /// The current value changed.
    ValueChanged(Option<T>),
    /// The display text changed.
    TextChanged(Option<String>),
    /// The menu finished opening.
    Opened,
    /// The menu finished closing.
    Closed,
    /// The select lost focus while closing the menu.
    Blurred,
    /// The clear button was clicked (after the selection was cleared).
    ClearButtonClicked,
    /// A key-down was handled.
    KeyDown(KeyCombo),
    /// A key-up was delivered.
    KeyUp(KeyCombo),
}

/// Sender side, owned by the select.
#[derive(Debug)]
pub(crate) struct EventSink<T> {
    tx: mpsc::UnboundedSender<SelectEvent<T>>,
}

impl<T> EventSink<T> {
    /// Emit an event. Ignored once the receiver is gone.
    pub(crate) fn emit(&self, event: SelectEvent<T>) {
        let _ = self.tx.send(event);
    }
}

impl<T> Clone for EventSink<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

/// Receiving side of a select's notifications.
#[derive(Debug)]
pub struct SelectEvents<T> {
    rx: mpsc::UnboundedReceiver<SelectEvent<T>>,
}

impl<T> SelectEvents<T> {
    /// Wait for the next notification.
    ///
    /// Returns `None` once every handle to the select has been dropped.
    pub async fn recv(&mut self) -> Option<SelectEvent<T>> {
        self.rx.recv().await
    }

    /// Take every notification emitted so far without waiting.
    pub fn drain(&mut self) -> Vec<SelectEvent<T>> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }
}

pub(crate) fn channel<T>() -> (EventSink<T>, SelectEvents<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventSink { tx }, SelectEvents { rx })
}
