use winlist::{IndexRange, Viewport};

/// A lightweight snapshot of a controller's host-facing state.
///
/// Useful for restoring a list across view switches without re-firing notifications that were
/// already delivered. With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerState {
    pub viewport: Viewport,
    /// Item count seen by the last layout pass.
    pub item_count: Option<usize>,
    /// Visible range last reported to `on_viewable_items_changed`.
    pub last_visible: Option<IndexRange>,
    pub end_reached_latched: bool,
}
