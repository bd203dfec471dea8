//! Single-threaded typed event channel.
//!
//! # Invariants
//! - Listeners run in registration order, on the publishing thread.
//! - A publish issued while the channel is already dispatching is queued and
//!   delivered after the current round, so no listener is re-entered.
//! - A listener removed mid-round is not called again in that round.
//! - Dropping a `Subscription` removes its listener.

use log::{debug, trace};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt::{Debug, Formatter};
use std::rc::{Rc, Weak};

/// Identifier assigned to one registered listener.
pub type ListenerId = u64;

type Listener<E> = Rc<RefCell<dyn FnMut(&E)>>;

struct ChannelInner<E> {
    name: &'static str,
    next_id: Cell<ListenerId>,
    listeners: RefCell<Vec<(ListenerId, Listener<E>)>>,
    pending: RefCell<VecDeque<E>>,
    dispatching: Cell<bool>,
}

impl<E> ChannelInner<E> {
    fn is_registered(&self, id: ListenerId) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|(listener_id, _)| *listener_id == id)
    }

    fn remove(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }
}

/// Cheaply cloneable handle to one channel; clones share listeners.
pub struct EventChannel<E> {
    inner: Rc<ChannelInner<E>>,
}

impl<E> Clone for EventChannel<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E> Debug for EventChannel<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventChannel")
            .field("name", &self.inner.name)
            .field("listeners", &self.inner.listeners.borrow().len())
            .field("dispatching", &self.inner.dispatching.get())
            .finish()
    }
}

impl<E: 'static> EventChannel<E> {
    /// Creates an empty channel. `name` only appears in log lines.
    pub fn new(name: &'static str) -> Self {
        Self {
            inner: Rc::new(ChannelInner {
                name,
                next_id: Cell::new(1),
                listeners: RefCell::new(Vec::new()),
                pending: RefCell::new(VecDeque::new()),
                dispatching: Cell::new(false),
            }),
        }
    }

    /// Registers `listener` until the returned guard is dropped.
    pub fn subscribe(&self, listener: impl FnMut(&E) + 'static) -> Subscription<E> {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        let listener: Listener<E> = Rc::new(RefCell::new(listener));
        self.inner.listeners.borrow_mut().push((id, listener));
        debug!(
            "event=subscribe module=event channel={} listener_id={id}",
            self.inner.name
        );

        Subscription {
            channel: Rc::downgrade(&self.inner),
            channel_name: self.inner.name,
            id,
        }
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Delivers `event` to every registered listener.
    pub fn publish(&self, event: E) {
        self.inner.pending.borrow_mut().push_back(event);
        if self.inner.dispatching.replace(true) {
            trace!(
                "event=publish module=event channel={} status=queued",
                self.inner.name
            );
            return;
        }
        let _guard = DispatchGuard(&self.inner.dispatching);

        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            let Some(event) = next else {
                break;
            };

            let snapshot: Vec<(ListenerId, Listener<E>)> = self.inner.listeners.borrow().clone();
            for (id, listener) in snapshot {
                if !self.inner.is_registered(id) {
                    continue;
                }
                let mut callback = listener.borrow_mut();
                (&mut *callback)(&event);
            }
        }
    }
}

struct DispatchGuard<'a>(&'a Cell<bool>);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Scoped registration on an `EventChannel`.
#[must_use = "dropping a Subscription unsubscribes its listener immediately"]
pub struct Subscription<E> {
    channel: Weak<ChannelInner<E>>,
    channel_name: &'static str,
    id: ListenerId,
}

impl<E> Subscription<E> {
    /// Returns whether the listener is still registered on a live channel.
    pub fn is_active(&self) -> bool {
        self.channel
            .upgrade()
            .is_some_and(|inner| inner.is_registered(self.id))
    }
}

impl<E> Debug for Subscription<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("channel", &self.channel_name)
            .field("id", &self.id)
            .finish()
    }
}

impl<E> Drop for Subscription<E> {
    fn drop(&mut self) {
        if let Some(inner) = self.channel.upgrade() {
            if inner.remove(self.id) {
                debug!(
                    "event=unsubscribe module=event channel={} listener_id={}",
                    self.channel_name, self.id
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EventChannel;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn listeners_run_in_registration_order() {
        let channel = EventChannel::<u32>::new("test");
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first_seen = Rc::clone(&seen);
        let _first = channel.subscribe(move |value| first_seen.borrow_mut().push(("a", *value)));
        let second_seen = Rc::clone(&seen);
        let _second = channel.subscribe(move |value| second_seen.borrow_mut().push(("b", *value)));

        channel.publish(7);
        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn dropping_subscription_stops_delivery() {
        let channel = EventChannel::<u32>::new("test");
        let hits = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&hits);
        let subscription = channel.subscribe(move |_| *counter.borrow_mut() += 1);
        channel.publish(1);
        assert!(subscription.is_active());

        drop(subscription);
        channel.publish(2);
        assert_eq!(*hits.borrow(), 1);
        assert_eq!(channel.listener_count(), 0);
    }

    #[test]
    fn publish_from_listener_is_queued_not_reentered() {
        let channel = EventChannel::<u32>::new("test");
        let log = Rc::new(RefCell::new(Vec::new()));

        let republisher = channel.clone();
        let first_log = Rc::clone(&log);
        let _first = channel.subscribe(move |value| {
            first_log.borrow_mut().push(format!("first:{value}"));
            if *value == 1 {
                republisher.publish(2);
            }
        });
        let second_log = Rc::clone(&log);
        let _second = channel.subscribe(move |value| {
            second_log.borrow_mut().push(format!("second:{value}"));
        });

        channel.publish(1);
        assert_eq!(
            *log.borrow(),
            vec!["first:1", "second:1", "first:2", "second:2"]
        );
    }

    #[test]
    fn listener_removed_mid_round_is_skipped() {
        let channel = EventChannel::<u32>::new("test");
        let victim_hits = Rc::new(RefCell::new(0));
        let victim_slot = Rc::new(RefCell::new(None));

        let slot = Rc::clone(&victim_slot);
        let _killer = channel.subscribe(move |_| {
            slot.borrow_mut().take();
        });
        let counter = Rc::clone(&victim_hits);
        *victim_slot.borrow_mut() = Some(channel.subscribe(move |_| *counter.borrow_mut() += 1));

        channel.publish(1);
        assert_eq!(*victim_hits.borrow(), 0);
        assert_eq!(channel.listener_count(), 1);
    }

    #[test]
    fn subscription_outliving_channel_is_inactive() {
        let channel = EventChannel::<u32>::new("test");
        let subscription = channel.subscribe(|_| {});
        drop(channel);
        assert!(!subscription.is_active());
    }
}
