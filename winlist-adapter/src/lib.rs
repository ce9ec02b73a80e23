//! Host-side utilities for the `winlist` layout engine.
//!
//! The `winlist` crate is a pure function from (items, config, viewport) to a render window.
//! This crate provides the small, framework-neutral pieces a host container layers on top:
//!
//! - [`ListController`]: viewport snapshot coalescing, viewable-items change notifications
//!   (deduplicated by value), and a one-shot end-reached latch
//! - [`Controllable`]: state that is either owned locally or delegated to the caller
//! - [`Registry`]: an explicit string-keyed registry for pluggable renderers
//!
//! This crate is intentionally framework-agnostic (no DOM, ratatui or egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controllable;
mod controller;
mod options;
mod registry;
mod state;

#[cfg(test)]
mod tests;

pub use controllable::{ChangeCallback, Controllable};
pub use controller::ListController;
pub use options::{
    DEFAULT_END_REACHED_THRESHOLD, EndReachedCallback, ListOptions, ViewToken, ViewableItems,
    ViewableItemsChangedCallback,
};
pub use registry::Registry;
pub use state::ControllerState;
