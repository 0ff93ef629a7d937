//! Host seams: how the engine reads geometry from the embedding UI.
//!
//! The engine never holds UI objects. A DOM/GUI layer implements these traits over its real
//! nodes; tests and simulations implement them over plain state.

use crate::{BoundingBox, Position};

/// Read access to the global viewport.
pub trait Viewport: Send + Sync {
    /// Current vertical scroll position of the document, in CSS pixels.
    fn page_y_offset(&self) -> f64;
}

/// Handle to the rendered element the engine positions.
///
/// The engine measures through this handle, and temporarily rewrites the positioning scheme
/// while measuring the element's natural origin (see `StickyEngine::recompute_origin`).
pub trait ElementHandle: Send + Sync {
    /// Live bounding box, in viewport coordinates.
    fn bounding_box(&self) -> BoundingBox;
    /// The positioning scheme currently applied to the element.
    fn position(&self) -> Position;
    /// Applies a positioning scheme to the element.
    fn set_position(&self, position: Position);
}

/// Handle to the container that coordinates stacked sticky elements.
pub trait ContainerHandle: Send + Sync {
    /// Live bounding box, in viewport coordinates.
    fn bounding_box(&self) -> BoundingBox;
    /// Reports how many pixels of container flow are displaced by a viewport-fixed element,
    /// so the container can offset the siblings stacked below it. Zero releases the
    /// reservation.
    fn update_top_correction(&self, offset: f64);
}
