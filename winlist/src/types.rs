use alloc::vec::Vec;

use crate::ConfigError;

/// Where an item should land in the viewport when scrolling to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    /// Keep the current offset if the item is fully visible, otherwise align to the nearest edge.
    Auto,
}

/// A half-open window of item indexes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl IndexRange {
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Returns `true` when `other` lies entirely inside `self`.
    pub fn contains_range(&self, other: IndexRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn indices(&self) -> core::ops::Range<usize> {
        self.start..self.end
    }
}

/// The host container's scroll geometry at one point in time.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub scroll_offset: f64,
    pub viewport_height: f64,
}

impl Viewport {
    pub fn new(scroll_offset: f64, viewport_height: f64) -> Self {
        Self {
            scroll_offset,
            viewport_height,
        }
    }

    /// Returns a copy with negative and NaN values replaced by zero.
    pub fn sanitized(&self) -> Self {
        Self {
            scroll_offset: non_negative(self.scroll_offset),
            viewport_height: non_negative(self.viewport_height),
        }
    }

    /// The offset just past the bottom edge of the viewport.
    pub fn scroll_end(&self) -> f64 {
        let v = self.sanitized();
        v.scroll_offset + v.viewport_height
    }
}

fn non_negative(v: f64) -> f64 {
    // `NaN >= 0.0` is false, so NaN collapses to zero too.
    if v >= 0.0 { v } else { 0.0 }
}

/// Layout parameters for a uniformly sized list.
///
/// `estimated_item_size` is the row height every item is laid out with. The engine guards it to
/// a minimum of `1.0` (see [`LayoutConfig::item_size`]); use [`LayoutConfig::try_new`] to reject
/// bad sizes up front instead.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    pub estimated_item_size: f64,
    /// Extra items rendered on each side of the visible window.
    pub overscan: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            estimated_item_size: 48.0,
            overscan: 1,
        }
    }
}

impl LayoutConfig {
    pub const MIN_ITEM_SIZE: f64 = 1.0;

    /// Creates a config, clamping a degenerate item size to [`Self::MIN_ITEM_SIZE`].
    pub fn new(estimated_item_size: f64, overscan: usize) -> Self {
        Self {
            estimated_item_size: guard_item_size(estimated_item_size),
            overscan,
        }
    }

    /// Creates a config, rejecting item sizes that are non-finite or below
    /// [`Self::MIN_ITEM_SIZE`].
    pub fn try_new(estimated_item_size: f64, overscan: usize) -> Result<Self, ConfigError> {
        let cfg = Self {
            estimated_item_size,
            overscan,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.estimated_item_size;
        if !size.is_finite() || size < Self::MIN_ITEM_SIZE {
            return Err(ConfigError::InvalidItemSize(size));
        }
        Ok(())
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_estimated_item_size(mut self, estimated_item_size: f64) -> Self {
        self.estimated_item_size = estimated_item_size;
        self
    }

    /// The item size the engine actually lays out with.
    pub fn item_size(&self) -> f64 {
        guard_item_size(self.estimated_item_size)
    }
}

fn guard_item_size(size: f64) -> f64 {
    if size.is_finite() && size >= LayoutConfig::MIN_ITEM_SIZE {
        size
    } else {
        LayoutConfig::MIN_ITEM_SIZE
    }
}

/// One entry of the rendered window: where to mount `item` and how tall it is.
#[derive(Debug, PartialEq)]
pub struct VirtualItem<'a, T> {
    pub index: usize,
    /// Start offset along the scroll axis (`index * size`).
    pub offset: f64,
    pub size: f64,
    pub item: &'a T,
}

impl<T> Clone for VirtualItem<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VirtualItem<'_, T> {}

impl<T> VirtualItem<'_, T> {
    pub fn end(&self) -> f64 {
        self.offset + self.size
    }
}

/// The index-only part of a layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutRanges {
    pub total_extent: f64,
    /// Window covering the viewport, without overscan.
    pub visible_range: IndexRange,
    /// `visible_range` widened by overscan and clamped to the item count.
    pub rendered_range: IndexRange,
}

impl LayoutRanges {
    pub const EMPTY: Self = Self {
        total_extent: 0.0,
        visible_range: IndexRange::EMPTY,
        rendered_range: IndexRange::EMPTY,
    };
}

/// The output of [`crate::compute_layout`]. Owned by the caller and discarded on the next pass.
#[derive(Debug, PartialEq)]
pub struct LayoutResult<'a, T> {
    pub items: Vec<VirtualItem<'a, T>>,
    pub total_extent: f64,
    pub visible_range: IndexRange,
    pub rendered_range: IndexRange,
}

impl<T> Clone for LayoutResult<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            total_extent: self.total_extent,
            visible_range: self.visible_range,
            rendered_range: self.rendered_range,
        }
    }
}

impl<'a, T> LayoutResult<'a, T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_extent: 0.0,
            visible_range: IndexRange::EMPTY,
            rendered_range: IndexRange::EMPTY,
        }
    }

    pub fn ranges(&self) -> LayoutRanges {
        LayoutRanges {
            total_extent: self.total_extent,
            visible_range: self.visible_range,
            rendered_range: self.rendered_range,
        }
    }

    /// Iterates over the items inside the visible window only.
    pub fn visible_items(&self) -> impl Iterator<Item = &VirtualItem<'a, T>> + '_ {
        let visible = self.visible_range;
        self.items.iter().filter(move |it| visible.contains(it.index))
    }
}
