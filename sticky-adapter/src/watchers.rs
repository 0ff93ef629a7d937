use std::sync::Arc;

use sticky::{EventSource, Watcher};

/// The two shared watchers every sticky element on a page subscribes to.
///
/// Construct once at the application root and hand a reference to each
/// [`crate::Sticky::attach`] call. All elements then share one physical listener per event
/// type instead of each installing its own, and the pair lives for the process duration —
/// there is no teardown.
#[derive(Clone, Debug)]
pub struct StickyWatchers {
    /// Scroll-equivalent events: scroll plus touch start/end.
    pub scroll: Watcher,
    /// Viewport resizes.
    pub resize: Watcher,
}

impl StickyWatchers {
    pub fn new(source: Arc<dyn EventSource>) -> Self {
        Self {
            scroll: Watcher::scroll(Arc::clone(&source)),
            resize: Watcher::resize(source),
        }
    }
}
