/// Positioning scheme applied to the wrapping element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    /// Normal document flow.
    #[default]
    Static,
    /// Pinned to the viewport.
    Fixed,
}

/// An axis-aligned box in viewport coordinates, in CSS pixels.
///
/// `top`/`left` are measured from the viewport origin, so they shift as the page scrolls;
/// `width`/`height` do not.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// `false` for a box that has not been laid out yet (any non-finite edge).
    pub fn is_finite(&self) -> bool {
        self.top.is_finite()
            && self.left.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }
}

/// The two positioning states of a sticky element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StickyState {
    #[default]
    Unsticky,
    Sticky,
}

impl StickyState {
    pub fn is_sticky(self) -> bool {
        matches!(self, Self::Sticky)
    }

    pub(crate) fn from_sticky(sticky: bool) -> Self {
        if sticky { Self::Sticky } else { Self::Unsticky }
    }
}

/// Inline positioning style for the wrapping element.
///
/// Only fields relevant to stickiness are modeled; `None` means "leave whatever the host's
/// stylesheet says" and a set field is an inline override, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    pub position: Option<Position>,
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub width: Option<f64>,
}

impl Style {
    /// Layers `over` on top of `self`. Fields set in `over` always win.
    pub fn merged_with(&self, over: &Self) -> Self {
        Self {
            position: over.position.or(self.position),
            top: over.top.or(self.top),
            left: over.left.or(self.left),
            width: over.width.or(self.width),
        }
    }
}

/// Physical viewport event types a [`crate::Watcher`] can multiplex.
///
/// Touch start/end are scroll-equivalent triggers: momentum scrolling on touch devices does
/// not deliver intermediate scroll events reliably.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewportEvent {
    Scroll,
    Resize,
    TouchStart,
    TouchEnd,
}
