//! Process-wide pointer-event fan-out for outside-click detection.
//!
//! A mounted search control needs to observe pointer presses that happen
//! anywhere in the document, not just inside its own subtree. The bus is the
//! one piece of ambient state in the core: the embedding shell owns a
//! [`PointerBus`] handle and broadcasts every press into it, and each control
//! holds a [`PointerSubscription`] that deregisters itself on drop, scoping
//! the listener to the control's lifetime.

use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::sync::{Arc, Mutex};

/// A pointer press somewhere in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// Whether the press target was inside the subscribing control's subtree.
    pub inside: bool,
}

#[derive(Default)]
struct BusState {
    next_id: u64,
    subscribers: Vec<(u64, Sender<PointerEvent>)>,
}

/// Cloneable handle to the shared pointer-event fan-out.
#[derive(Clone, Default)]
pub struct PointerBus {
    state: Arc<Mutex<BusState>>,
}

impl PointerBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; dropping the returned subscription deregisters it.
    #[must_use]
    pub fn subscribe(&self) -> PointerSubscription {
        let (tx, rx) = channel();
        let id = {
            let mut state = self.state.lock().unwrap_or_else(|err| err.into_inner());
            let id = state.next_id;
            state.next_id += 1;
            state.subscribers.push((id, tx));
            id
        };
        PointerSubscription {
            bus: self.clone(),
            id,
            rx,
        }
    }

    /// Deliver an event to every live subscriber.
    pub fn broadcast(&self, event: PointerEvent) {
        let mut state = self.state.lock().unwrap_or_else(|err| err.into_inner());
        state.subscribers.retain(|(_, tx)| tx.send(event).is_ok());
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .subscribers
            .len()
    }

    fn unsubscribe(&self, id: u64) {
        let mut state = self.state.lock().unwrap_or_else(|err| err.into_inner());
        state.subscribers.retain(|(existing, _)| *existing != id);
    }
}

/// Scoped registration on a [`PointerBus`].
pub struct PointerSubscription {
    bus: PointerBus,
    id: u64,
    rx: Receiver<PointerEvent>,
}

impl PointerSubscription {
    /// Pop the next buffered event, if any.
    pub fn try_recv(&self) -> Option<PointerEvent> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        self.bus.unsubscribe(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_receive_broadcast_events() {
        let bus = PointerBus::new();
        let sub = bus.subscribe();
        bus.broadcast(PointerEvent { inside: false });
        assert_eq!(sub.try_recv(), Some(PointerEvent { inside: false }));
        assert_eq!(sub.try_recv(), None);
    }

    #[test]
    fn dropping_a_subscription_deregisters_it() {
        let bus = PointerBus::new();
        let first = bus.subscribe();
        let second = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);

        drop(first);
        assert_eq!(bus.subscriber_count(), 1);
        bus.broadcast(PointerEvent { inside: true });
        assert_eq!(second.try_recv(), Some(PointerEvent { inside: true }));
    }
}
