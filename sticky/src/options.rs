use alloc::string::String;
use alloc::sync::Arc;

use crate::Style;

/// A callback fired when an element transitions between sticky and unsticky.
///
/// The argument is the new sticky state.
pub type OnStateChangeCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// The externally supplied sticky offset: pixels of fixed chrome above the viewport (e.g.
/// a fixed application header) that the element must clear before pinning.
///
/// The offset is subtracted from the element's origin when deciding stickiness and used as
/// the pinned `top` value. It is resolved at every decision, never cached, so a provider
/// can track live layout.
#[derive(Clone)]
pub enum StickyOffset {
    /// A fixed offset.
    Value(f64),
    /// A lazily evaluated offset provider (called on every evaluation).
    Provider(Arc<dyn Fn() -> f64 + Send + Sync>),
}

impl StickyOffset {
    pub(crate) fn resolve(&self) -> f64 {
        match self {
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for StickyOffset {
    fn default() -> Self {
        Self::Value(0.0)
    }
}

impl core::fmt::Debug for StickyOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Configuration for [`crate::StickyEngine`].
///
/// Cheap to clone: the callback is stored in an `Arc` so hosts can tweak a few fields and
/// call `StickyEngine::reconfigure` without reallocating closures.
#[derive(Clone)]
pub struct StickyOptions {
    /// Class name applied in both states.
    pub class_name: String,
    /// Style applied in both states; the computed sticky style starts from it.
    pub base_style: Style,
    /// Class name appended (space-separated) while sticky.
    pub sticky_class_name: String,
    /// Style layered on top of the computed sticky style. Set fields always win, including
    /// over the computed `position`/`top`/`left`/`width`.
    pub sticky_style: Style,
    /// Extra pixels the page must scroll past the effective origin before the element
    /// sticks.
    pub top_offset: f64,
    /// Optional callback fired on every sticky/unsticky transition.
    pub on_state_change: Option<OnStateChangeCallback>,
}

impl StickyOptions {
    pub fn new() -> Self {
        Self {
            class_name: String::new(),
            base_style: Style::default(),
            sticky_class_name: String::from("sticky"),
            sticky_style: Style::default(),
            top_offset: 0.0,
            on_state_change: None,
        }
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_base_style(mut self, base_style: Style) -> Self {
        self.base_style = base_style;
        self
    }

    pub fn with_sticky_class_name(mut self, sticky_class_name: impl Into<String>) -> Self {
        self.sticky_class_name = sticky_class_name.into();
        self
    }

    pub fn with_sticky_style(mut self, sticky_style: Style) -> Self {
        self.sticky_style = sticky_style;
        self
    }

    pub fn with_top_offset(mut self, top_offset: f64) -> Self {
        self.top_offset = top_offset;
        self
    }

    pub fn with_on_state_change(
        mut self,
        on_state_change: Option<impl Fn(bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_state_change = on_state_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for StickyOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for StickyOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StickyOptions")
            .field("class_name", &self.class_name)
            .field("base_style", &self.base_style)
            .field("sticky_class_name", &self.sticky_class_name)
            .field("sticky_style", &self.sticky_style)
            .field("top_offset", &self.top_offset)
            .finish_non_exhaustive()
    }
}
