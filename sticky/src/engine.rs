use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;

use crate::{
    ContainerHandle, ElementHandle, Position, StickyOffset, StickyOptions, StickySnapshot,
    StickyState, Style, Viewport,
};

/// A headless sticky-positioning engine for one rendered element.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; geometry arrives through the [`Viewport`],
///   [`ElementHandle`] and [`ContainerHandle`] seams.
/// - Your host drives it: [`Self::attach`] once the element is laid out,
///   [`Self::evaluate`] on every scroll tick, [`Self::recompute_origin`] on resize,
///   [`Self::reconfigure`] when configuration changes, [`Self::detach`] on unmount.
/// - The rendered output is exposed as derived values ([`Self::computed_style`],
///   [`Self::computed_class_name`], [`Self::snapshot`]); the wrapped content itself is
///   never touched.
///
/// For watcher-driven wiring (shared scroll/resize fan-out), see the `sticky-adapter`
/// crate.
pub struct StickyEngine {
    options: StickyOptions,
    viewport: Arc<dyn Viewport>,
    element: Arc<dyn ElementHandle>,
    container: Arc<dyn ContainerHandle>,
    offset: StickyOffset,

    origin: f64,
    height: f64,
    state: StickyState,
    computed_style: Style,
    computed_class_name: String,
}

impl StickyEngine {
    /// Creates a new engine over the given host seams.
    ///
    /// `offset` is the sticky offset (e.g. a fixed header height); it is resolved on every
    /// decision, not here. The engine starts unsticky with zero measurements — call
    /// [`Self::attach`] once the element is laid out.
    pub fn new(
        viewport: Arc<dyn Viewport>,
        element: Arc<dyn ElementHandle>,
        container: Arc<dyn ContainerHandle>,
        offset: StickyOffset,
        options: StickyOptions,
    ) -> Self {
        sdebug!(top_offset = options.top_offset, "StickyEngine::new");
        let computed_style = options.base_style;
        let computed_class_name = options.class_name.clone();
        Self {
            options,
            viewport,
            element,
            container,
            offset,
            origin: 0.0,
            height: 0.0,
            state: StickyState::Unsticky,
            computed_style,
            computed_class_name,
        }
    }

    pub fn options(&self) -> &StickyOptions {
        &self.options
    }

    pub fn state(&self) -> StickyState {
        self.state
    }

    pub fn is_sticky(&self) -> bool {
        self.state.is_sticky()
    }

    /// The element's natural top offset relative to the page origin, as last measured.
    pub fn origin(&self) -> f64 {
        self.origin
    }

    /// The element's rendered height, as last measured.
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn computed_style(&self) -> &Style {
        &self.computed_style
    }

    pub fn computed_class_name(&self) -> &str {
        &self.computed_class_name
    }

    /// Returns a snapshot of the rendered output for the host to apply.
    pub fn snapshot(&self) -> StickySnapshot {
        StickySnapshot {
            state: self.state,
            style: self.computed_style,
            class_name: self.computed_class_name.clone(),
        }
    }

    /// Measures the element on mount.
    ///
    /// The engine stays [`StickyState::Unsticky`] until the first [`Self::evaluate`].
    pub fn attach(&mut self) {
        self.recompute_origin();
        self.recompute_height();
    }

    /// Resets transient state on unmount.
    ///
    /// An element unmounting while pinned still displaces container flow until the
    /// reservation is released, so a zero top correction is reported first.
    pub fn detach(&mut self) {
        if self.state.is_sticky() {
            self.container.update_top_correction(0.0);
        }
        self.state = StickyState::Unsticky;
        self.computed_style = self.options.base_style;
        self.computed_class_name = self.options.class_name.clone();
        sdebug!("StickyEngine::detach");
    }

    /// Re-reads the element's natural (in-flow) top offset.
    ///
    /// The element is measured with [`Position::Static`] applied and its previous
    /// positioning restored afterwards, so a currently pinned element still reports the
    /// origin it would occupy in normal flow. Call on mount and whenever the document
    /// layout may have shifted independent of scrolling (i.e. on resize).
    pub fn recompute_origin(&mut self) {
        let prev = self.element.position();
        self.element.set_position(Position::Static);
        let top = self.element.bounding_box().top;
        self.element.set_position(prev);
        self.origin = top + self.viewport.page_y_offset();
        strace!(origin = self.origin, "recompute_origin");
    }

    /// Re-reads the element's rendered height.
    ///
    /// Call on mount and whenever configuration changes (injected content can change the
    /// height).
    pub fn recompute_height(&mut self) {
        self.height = self.element.bounding_box().height;
        strace!(height = self.height, "recompute_height");
    }

    /// Replaces the configuration and re-measures.
    ///
    /// Height is re-read because configured content may have changed it; the origin is
    /// re-read too, since a height change shifts the element's own in-flow position. The
    /// new state is evaluated immediately.
    pub fn reconfigure(&mut self, options: StickyOptions) {
        self.options = options;
        self.recompute_height();
        self.recompute_origin();
        self.evaluate();
    }

    /// The core decision. Invoke on every scroll notification.
    ///
    /// On a sticky/unsticky transition this reports a top correction to the container
    /// (`height` entering, `0` leaving) and fires the configured state-change callback.
    /// Without a transition the derived style/class are still refreshed, since the
    /// container may have moved or resized since the last tick.
    pub fn evaluate(&mut self) {
        let sticky = self.should_be_sticky();
        let changed = sticky != self.state.is_sticky();
        self.state = StickyState::from_sticky(sticky);

        self.computed_style = self.compute_style(sticky);
        self.computed_class_name = self.compute_class_name(sticky);

        if changed {
            let correction = if sticky { self.height } else { 0.0 };
            sdebug!(sticky, correction, "sticky state change");
            self.container.update_top_correction(correction);
            if let Some(on_state_change) = &self.options.on_state_change {
                on_state_change(sticky);
            }
        }
    }

    /// Whether the element should currently be pinned.
    ///
    /// True while the page has scrolled past the element's effective origin (plus the
    /// configured top offset) but not past the bottom of its container. Non-finite
    /// geometry (a container that has not been laid out yet) resolves to `false` rather
    /// than leaking a bogus style.
    pub fn should_be_sticky(&self) -> bool {
        let page_offset = self.viewport.page_y_offset();
        let origin = self.origin - self.offset.resolve();
        let container_height = self.container.bounding_box().height;
        if !page_offset.is_finite() || !origin.is_finite() || !container_height.is_finite() {
            return false;
        }

        let past_top = page_offset >= origin + self.options.top_offset;
        let above_bottom = page_offset < container_height + origin;
        past_top && above_bottom
    }

    /// Derives the inline style for the given state.
    ///
    /// Unsticky returns the base style unchanged. Sticky pins the element to the viewport
    /// while keeping it visually inside the container: `left`/`width` come from the
    /// container's live box and `top` is the sticky offset, clamped so the element is
    /// never pinned past the container's bottom edge. Fields set in the configured sticky
    /// style win over every computed value.
    pub fn compute_style(&self, sticky: bool) -> Style {
        if !sticky {
            return self.options.base_style;
        }

        let rect = self.container.bounding_box();
        let mut style = self.options.base_style;
        style.position = Some(Position::Fixed);
        style.left = Some(rect.left);
        style.width = Some(rect.width);

        let mut top = self.offset.resolve();
        if !top.is_finite() {
            top = 0.0;
        }
        let bottom_limit = rect.bottom() - self.height;
        if bottom_limit.is_finite() && top > bottom_limit {
            top = bottom_limit;
        }
        style.top = Some(top);

        style.merged_with(&self.options.sticky_style)
    }

    /// Derives the class list for the given state.
    pub fn compute_class_name(&self, sticky: bool) -> String {
        if !sticky {
            return self.options.class_name.clone();
        }
        if self.options.class_name.is_empty() {
            self.options.sticky_class_name.clone()
        } else {
            format!(
                "{} {}",
                self.options.class_name, self.options.sticky_class_name
            )
        }
    }
}

impl core::fmt::Debug for StickyEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StickyEngine")
            .field("options", &self.options)
            .field("offset", &self.offset)
            .field("origin", &self.origin)
            .field("height", &self.height)
            .field("state", &self.state)
            .field("computed_style", &self.computed_style)
            .field("computed_class_name", &self.computed_class_name)
            .finish_non_exhaustive()
    }
}
