//! Host lifecycle adapter utilities for the `sticky` crate.
//!
//! The `sticky` crate is UI-agnostic and focuses on the core decision logic. This crate
//! provides the small, framework-neutral glue a host needs to run many sticky elements off
//! one pair of shared viewport watchers:
//!
//! - [`StickyWatchers`]: the process-wide scroll + resize watcher pair, constructed once at
//!   the application root and shared by every element
//! - [`Sticky`]: a per-element controller wiring a `StickyEngine` to the watchers across
//!   the host's mount/update/unmount lifecycle
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings).
#![forbid(unsafe_code)]

mod controller;
mod watchers;


pub use controller::Sticky;
pub use watchers::StickyWatchers;
