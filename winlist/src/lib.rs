//! A headless windowed-list layout engine.
//!
//! Given an item sequence, a fixed estimated item size, a scroll offset and a viewport height,
//! [`compute_layout`] returns which indexes must be rendered (with overscan padding), each
//! item's absolute offset, and the total scrollable extent.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport height and scroll offset (see [`Viewport`])
//! - the item slice at layout time (the engine never owns or mutates it)
//!
//! and to mount one element per [`VirtualItem`] at `offset` with height `size`.
//!
//! For host-side plumbing (event coalescing, viewable-item notifications, end-reached
//! callbacks), see the `winlist-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod key;
mod layout;
mod types;


pub use error::ConfigError;
pub use key::{KeyFn, derive_key, index_key};
pub use layout::{
    collect_virtual_items, compute_layout, compute_ranges, for_each_virtual_item, index_at_offset,
    item_offset, max_scroll_offset, scroll_to_index_offset,
};
pub use types::{
    Align, IndexRange, LayoutConfig, LayoutRanges, LayoutResult, Viewport, VirtualItem,
};
