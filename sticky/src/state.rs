use alloc::string::String;

use crate::{StickyState, Style};

/// A snapshot of the rendered output for one sticky element.
///
/// Hosts apply `style` and `class_name` to the element wrapping the externally supplied
/// content; the content itself passes through unchanged.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StickySnapshot {
    pub state: StickyState,
    pub style: Style,
    pub class_name: String,
}
