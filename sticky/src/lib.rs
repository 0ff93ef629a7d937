//! A headless sticky-positioning engine inspired by react-sticky.
//!
//! For host lifecycle wiring (shared watcher pair, mount/unmount controller), see the
//! `sticky-adapter` crate.
//!
//! This crate focuses on the two pieces with real design content: a reference-counted
//! viewport event multiplexer ([`Watcher`]) that fans one physical scroll/resize listener
//! out to every sticky element on the page, and a per-element positioning engine
//! ([`StickyEngine`]) that decides on every tick whether its element is pinned, derives the
//! element's style/class output, and reports stacking offsets to its container.
//!
//! It is UI-agnostic. A DOM/GUI layer is expected to provide:
//! - the page scroll position ([`Viewport`])
//! - element and container geometry ([`ElementHandle`], [`ContainerHandle`])
//! - physical event listener installation ([`EventSource`], behind `std`)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod engine;
mod host;
mod options;
mod state;
mod types;
#[cfg(feature = "std")]
mod watcher;


pub use engine::StickyEngine;
pub use host::{ContainerHandle, ElementHandle, Viewport};
pub use options::{OnStateChangeCallback, StickyOffset, StickyOptions};
pub use state::StickySnapshot;
pub use types::{BoundingBox, Position, StickyState, Style, ViewportEvent};
#[cfg(feature = "std")]
pub use watcher::{EventSource, NullEventSource, WatchHandler, Watcher};
