use alloc::vec::Vec;

use crate::options::OnSelectCallback;

/// A single-slot, latest-wins broadcast for the settled selection value.
///
/// Delivery is deferred: every public entry point of the engine runs inside a scope
/// (`enter`/`exit`), and values published while any scope is open only fill the pending slot.
/// The slot is drained when the outermost scope unwinds, so a subscriber never observes the
/// state machine mid-mutation. Multiple publishes within one scope coalesce to the latest
/// value, and delivery is skipped when that value matches the last one delivered — the stream
/// carries "latest value", at most once per actual change.
pub struct SelectionEmitter<V> {
    subscribers: Vec<OnSelectCallback<V>>,
    depth: usize,
    pending: Option<V>,
    last: Option<V>,
}

impl<V: Clone + PartialEq> SelectionEmitter<V> {
    pub fn new(initial: V) -> Self {
        Self {
            subscribers: Vec::new(),
            depth: 0,
            pending: None,
            last: Some(initial),
        }
    }

    /// The most recently delivered value (the initial value before any change).
    pub fn last(&self) -> Option<&V> {
        self.last.as_ref()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Registers a subscriber and immediately delivers the current value to it.
    pub fn subscribe(&mut self, subscriber: OnSelectCallback<V>) {
        if let Some(last) = &self.last {
            subscriber(last);
        }
        self.subscribers.push(subscriber);
    }

    /// Stages `value` for delivery, replacing any earlier staged value.
    ///
    /// Delivers immediately when no scope is open.
    pub fn publish(&mut self, value: V) {
        self.pending = Some(value);
        if self.depth == 0 {
            self.flush();
        }
    }

    pub fn enter(&mut self) {
        self.depth += 1;
    }

    pub fn exit(&mut self) {
        debug_assert!(self.depth > 0, "emitter scope underflow");
        self.depth = self.depth.saturating_sub(1);
        if self.depth == 0 {
            self.flush();
        }
    }

    fn flush(&mut self) {
        let Some(value) = self.pending.take() else {
            return;
        };
        if self.last.as_ref() == Some(&value) {
            return;
        }
        self.last = Some(value.clone());
        for subscriber in &self.subscribers {
            subscriber(&value);
        }
    }
}

impl<V: core::fmt::Debug> core::fmt::Debug for SelectionEmitter<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SelectionEmitter")
            .field("subscribers", &self.subscribers.len())
            .field("depth", &self.depth)
            .field("pending", &self.pending)
            .field("last", &self.last)
            .finish()
    }
}
