use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use sticky::{StickyEngine, StickyOptions, StickySnapshot, StickyState, WatchHandler, Watcher};

use crate::StickyWatchers;

/// A framework-neutral lifecycle controller wrapping a `sticky::StickyEngine`.
///
/// Hosts create one `Sticky` per rendered element and call:
/// - [`Self::attach`] when the element mounts: measures the element and registers with the
///   shared watchers
/// - [`Self::reconfigure`] when externally supplied configuration changes
/// - [`Self::detach`] when the element unmounts (also run on drop)
///
/// Scroll and resize notifications then arrive through the watchers; the host never drives
/// the engine tick-by-tick itself. Read the rendered output with [`Self::snapshot`].
pub struct Sticky {
    engine: Arc<Mutex<StickyEngine>>,
    subscriptions: Option<Subscriptions>,
}

struct Subscriptions {
    scroll_watcher: Watcher,
    resize_watcher: Watcher,
    on_scroll: WatchHandler,
    on_resize: WatchHandler,
}

impl Sticky {
    pub fn new(engine: StickyEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            subscriptions: None,
        }
    }

    /// Measures the element and registers with the shared watchers.
    ///
    /// The scroll handler re-evaluates the engine on every cycle. The resize handler
    /// re-measures the element's origin and then forces a synthetic scroll cycle, so every
    /// element on the page re-evaluates against the fresh layout. Attaching twice is a
    /// no-op.
    pub fn attach(&mut self, watchers: &StickyWatchers) {
        if self.subscriptions.is_some() {
            return;
        }
        lock(&self.engine).attach();

        let on_scroll: WatchHandler = {
            let engine = Arc::downgrade(&self.engine);
            Arc::new(move || {
                if let Some(engine) = engine.upgrade() {
                    lock(&engine).evaluate();
                }
            })
        };

        let on_resize: WatchHandler = {
            let engine = Arc::downgrade(&self.engine);
            let scroll_watcher = watchers.scroll.clone();
            Arc::new(move || {
                recompute_origin(&engine);
                // The engine lock is released before this fan-out; the scroll handlers
                // re-lock it one cycle at a time.
                scroll_watcher.notify_all();
            })
        };

        watchers.scroll.subscribe(Arc::clone(&on_scroll));
        watchers.resize.subscribe(Arc::clone(&on_resize));
        self.subscriptions = Some(Subscriptions {
            scroll_watcher: watchers.scroll.clone(),
            resize_watcher: watchers.resize.clone(),
            on_scroll,
            on_resize,
        });
    }

    /// Deregisters from the watchers and resets the engine.
    ///
    /// Detaching when not attached is a no-op.
    pub fn detach(&mut self) {
        let Some(subscriptions) = self.subscriptions.take() else {
            return;
        };
        subscriptions
            .scroll_watcher
            .unsubscribe(&subscriptions.on_scroll);
        subscriptions
            .resize_watcher
            .unsubscribe(&subscriptions.on_resize);
        lock(&self.engine).detach();
    }

    pub fn is_attached(&self) -> bool {
        self.subscriptions.is_some()
    }

    /// Replaces the engine configuration (e.g. new content was injected) and re-evaluates.
    pub fn reconfigure(&self, options: StickyOptions) {
        lock(&self.engine).reconfigure(options);
    }

    /// Returns the rendered output the host should apply this frame.
    pub fn snapshot(&self) -> StickySnapshot {
        lock(&self.engine).snapshot()
    }

    pub fn state(&self) -> StickyState {
        lock(&self.engine).state()
    }

    pub fn is_sticky(&self) -> bool {
        lock(&self.engine).is_sticky()
    }

    /// Runs `f` with shared access to the wrapped engine.
    pub fn with_engine<R>(&self, f: impl FnOnce(&StickyEngine) -> R) -> R {
        f(&lock(&self.engine))
    }

    /// Runs `f` with exclusive access to the wrapped engine.
    ///
    /// Escape hatch for host-specific flows; prefer the dedicated methods.
    pub fn with_engine_mut<R>(&self, f: impl FnOnce(&mut StickyEngine) -> R) -> R {
        f(&mut lock(&self.engine))
    }
}

impl Drop for Sticky {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for Sticky {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sticky")
            .field("engine", &*lock(&self.engine))
            .field("attached", &self.subscriptions.is_some())
            .finish()
    }
}

fn recompute_origin(engine: &Weak<Mutex<StickyEngine>>) {
    if let Some(engine) = engine.upgrade() {
        lock(&engine).recompute_origin();
    }
}

fn lock(engine: &Arc<Mutex<StickyEngine>>) -> MutexGuard<'_, StickyEngine> {
    // A panicking subscriber elsewhere in the cycle must not wedge this element.
    engine.lock().unwrap_or_else(PoisonError::into_inner)
}
