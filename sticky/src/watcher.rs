use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ViewportEvent;

/// A subscriber callback invoked on every notification cycle, with no arguments.
///
/// Subscribers re-read whatever viewport state they need; the watcher carries no payload.
pub type WatchHandler = Arc<dyn Fn() + Send + Sync>;

/// Installs and removes the physical per-event-type listeners on the real viewport.
///
/// A [`Watcher`] guarantees at most one installed listener per event type regardless of
/// subscriber count. `install` hands over the callback the physical event must invoke;
/// `remove` tears the listener down again.
pub trait EventSource: Send + Sync {
    fn install(&self, event: ViewportEvent, on_fire: WatchHandler);
    fn remove(&self, event: ViewportEvent);
}

/// An [`EventSource`] with no physical events behind it.
///
/// Useful when notification cycles are driven entirely through [`Watcher::notify_all`]
/// (simulations, tests, render loops that poll).
#[derive(Clone, Copy, Debug, Default)]
pub struct NullEventSource;

impl EventSource for NullEventSource {
    fn install(&self, _event: ViewportEvent, _on_fire: WatchHandler) {}
    fn remove(&self, _event: ViewportEvent) {}
}

/// A reference-counted multiplexer over one or more viewport event types.
///
/// Any number of logical subscribers share at most one physical listener per event type:
/// the first subscriber installs the listeners, the last unsubscriber removes them. Every
/// page-wide concern (all sticky elements watching scroll, say) can then share one watcher
/// instead of each attaching its own listener.
///
/// `Watcher` is a cheap handle; clones share the same subscriber list. One mutex guards
/// that list and is never held while handlers run, so handlers may subscribe/unsubscribe
/// reentrantly without deadlocking.
#[derive(Clone)]
pub struct Watcher {
    shared: Arc<Shared>,
}

struct Shared {
    events: Vec<ViewportEvent>,
    source: Arc<dyn EventSource>,
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    subscribers: Vec<WatchHandler>,
    attached: bool,
}

impl Watcher {
    /// Creates a watcher over the given event types.
    ///
    /// The event set is deduplicated and immutable afterwards. No physical listener is
    /// installed until the first subscriber arrives.
    pub fn new(
        events: impl IntoIterator<Item = ViewportEvent>,
        source: Arc<dyn EventSource>,
    ) -> Self {
        let mut deduped: Vec<ViewportEvent> = Vec::new();
        for event in events {
            if !deduped.contains(&event) {
                deduped.push(event);
            }
        }
        Self {
            shared: Arc::new(Shared {
                events: deduped,
                source,
                inner: Mutex::new(Inner::default()),
            }),
        }
    }

    /// Watches the event types that report scroll position changes (scroll plus the touch
    /// start/end pair, which stand in for momentum scrolling on touch devices).
    pub fn scroll(source: Arc<dyn EventSource>) -> Self {
        Self::new(
            [
                ViewportEvent::Scroll,
                ViewportEvent::TouchStart,
                ViewportEvent::TouchEnd,
            ],
            source,
        )
    }

    /// Watches viewport resizes.
    pub fn resize(source: Arc<dyn EventSource>) -> Self {
        Self::new([ViewportEvent::Resize], source)
    }

    /// The event types this watcher multiplexes.
    pub fn events(&self) -> &[ViewportEvent] {
        &self.shared.events
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.lock_inner().subscribers.len()
    }

    /// Whether physical listeners are currently installed.
    pub fn is_attached(&self) -> bool {
        self.shared.lock_inner().attached
    }

    /// Adds `handler` to the subscriber sequence.
    ///
    /// The first subscriber installs one physical listener per configured event type; each
    /// installed listener invokes [`Self::notify_all`] when its event fires. Keep a clone
    /// of the handler to [`Self::unsubscribe`] later — removal is by `Arc` identity.
    pub fn subscribe(&self, handler: WatchHandler) {
        let install = {
            let mut inner = self.shared.lock_inner();
            inner.subscribers.push(handler);
            if inner.attached {
                false
            } else {
                inner.attached = true;
                true
            }
        };

        if install {
            // The physical listener only holds a weak reference, so a host that never
            // drops its callbacks cannot keep the subscriber list alive.
            let weak = Arc::downgrade(&self.shared);
            for &event in &self.shared.events {
                let weak = weak.clone();
                self.shared.source.install(
                    event,
                    Arc::new(move || {
                        if let Some(shared) = weak.upgrade() {
                            shared.notify_all();
                        }
                    }),
                );
            }
            sdebug!(events = self.shared.events.len(), "watcher attached");
        }
    }

    /// Removes `handler` (by `Arc` identity) from the subscriber sequence.
    ///
    /// Unsubscribing a handler that is not present is a no-op. When the sequence becomes
    /// empty, all physical listeners are removed.
    pub fn unsubscribe(&self, handler: &WatchHandler) {
        let remove = {
            let mut inner = self.shared.lock_inner();
            inner.subscribers.retain(|h| !Arc::ptr_eq(h, handler));
            if inner.subscribers.is_empty() && inner.attached {
                inner.attached = false;
                true
            } else {
                false
            }
        };

        if remove {
            for &event in &self.shared.events {
                self.shared.source.remove(event);
            }
            sdebug!(events = self.shared.events.len(), "watcher detached");
        }
    }

    /// Invokes every current subscriber once, in subscription order, synchronously.
    ///
    /// The subscriber sequence is snapshotted first: handlers subscribed or unsubscribed
    /// while a cycle runs only take effect from the next cycle. A panicking handler is
    /// isolated so the remaining subscribers still receive the tick.
    ///
    /// Callable directly (not only via a physical event) to force a synthetic cycle when
    /// geometry changes without a real scroll.
    pub fn notify_all(&self) {
        self.shared.notify_all();
    }
}

impl Shared {
    fn notify_all(&self) {
        let subscribers: Vec<WatchHandler> = self.lock_inner().subscribers.clone();
        strace!(subscribers = subscribers.len(), "notify_all");
        for handler in subscribers {
            if catch_unwind(AssertUnwindSafe(|| handler())).is_err() {
                swarn!("subscriber panicked during notify_all");
            }
        }
    }

    fn lock_inner(&self) -> MutexGuard<'_, Inner> {
        // A handler that panicked while holding unrelated state must not wedge the whole
        // page's event fan-out.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl core::fmt::Debug for Watcher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let inner = self.shared.lock_inner();
        f.debug_struct("Watcher")
            .field("events", &self.shared.events)
            .field("subscribers", &inner.subscribers.len())
            .field("attached", &inner.attached)
            .finish_non_exhaustive()
    }
}
