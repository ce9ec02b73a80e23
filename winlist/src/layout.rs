use alloc::vec::Vec;
use core::cmp;

use crate::{Align, IndexRange, LayoutConfig, LayoutRanges, LayoutResult, Viewport, VirtualItem};

/// Computes the render window for a uniformly sized list.
///
/// This is a pure function: identical inputs always produce identical output, and every input
/// (negative offsets, a zero-height viewport, an offset far past the content) maps to a valid
/// result by clamping. Indexes in the result are always `< items.len()`.
///
/// ```
/// use winlist::{LayoutConfig, Viewport, compute_layout};
///
/// let rows: Vec<u32> = (0..100).collect();
/// let layout = compute_layout(&rows, &LayoutConfig::new(48.0, 2), &Viewport::new(480.0, 288.0));
/// assert_eq!(layout.visible_range.start, 10);
/// assert_eq!(layout.rendered_range.end, 18);
/// assert_eq!(layout.items[0].offset, 8.0 * 48.0);
/// ```
pub fn compute_layout<'a, T>(
    items: &'a [T],
    config: &LayoutConfig,
    viewport: &Viewport,
) -> LayoutResult<'a, T> {
    let ranges = compute_ranges(items.len(), config, viewport);
    let mut result = LayoutResult::from_ranges(ranges);
    if !ranges.rendered_range.is_empty() {
        result.items.reserve_exact(ranges.rendered_range.len());
        push_items(items, config.item_size(), ranges.rendered_range, &mut result.items);
    }
    result
}

/// Computes only the ranges and total extent; no allocation, no item access.
pub fn compute_ranges(item_count: usize, config: &LayoutConfig, viewport: &Viewport) -> LayoutRanges {
    if item_count == 0 {
        return LayoutRanges::EMPTY;
    }

    let size = config.item_size();
    let viewport = viewport.sanitized();
    let total_extent = item_count as f64 * size;

    let effective_viewport = viewport.viewport_height.max(size);
    let visible_count = ceil_to_count(effective_viewport / size);

    // Clamped against the item count, not against `total_extent - viewport_height`: an offset past
    // the content yields an empty visible window at the end of the list.
    let visible_start = cmp::min(floor_to_index(viewport.scroll_offset / size), item_count);
    let visible_end = cmp::min(visible_start.saturating_add(visible_count), item_count);

    let overscan = config.overscan;
    let rendered_start = visible_start.saturating_sub(overscan);
    let rendered_end = cmp::min(visible_end.saturating_add(overscan), item_count);

    wl_trace!(
        item_count,
        scroll_offset = viewport.scroll_offset,
        viewport_height = viewport.viewport_height,
        visible_start,
        visible_end,
        rendered_start,
        rendered_end,
        "compute_ranges"
    );

    LayoutRanges {
        total_extent,
        visible_range: IndexRange::new(visible_start, visible_end),
        rendered_range: IndexRange::new(rendered_start, rendered_end),
    }
}

/// Calls `f` for every item in the rendered window, in ascending index order.
///
/// Zero-allocation counterpart of [`compute_layout`]. Returns the ranges of the pass.
pub fn for_each_virtual_item<'a, T>(
    items: &'a [T],
    config: &LayoutConfig,
    viewport: &Viewport,
    mut f: impl FnMut(VirtualItem<'a, T>),
) -> LayoutRanges {
    let ranges = compute_ranges(items.len(), config, viewport);
    let size = config.item_size();
    for index in ranges.rendered_range.indices() {
        f(VirtualItem {
            index,
            offset: index as f64 * size,
            size,
            item: &items[index],
        });
    }
    ranges
}

/// Collects the rendered window into `out` (clears `out` first).
///
/// Prefer this over [`compute_layout`] when the caller keeps a scratch buffer across frames.
pub fn collect_virtual_items<'a, T>(
    items: &'a [T],
    config: &LayoutConfig,
    viewport: &Viewport,
    out: &mut Vec<VirtualItem<'a, T>>,
) -> LayoutRanges {
    out.clear();
    let ranges = compute_ranges(items.len(), config, viewport);
    push_items(items, config.item_size(), ranges.rendered_range, out);
    ranges
}

fn push_items<'a, T>(
    items: &'a [T],
    size: f64,
    range: IndexRange,
    out: &mut Vec<VirtualItem<'a, T>>,
) {
    out.extend(
        items[range.start..range.end]
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let index = range.start + i;
                VirtualItem {
                    index,
                    offset: index as f64 * size,
                    size,
                    item,
                }
            }),
    );
}

/// Start offset of `index` along the scroll axis.
pub fn item_offset(index: usize, config: &LayoutConfig) -> f64 {
    index as f64 * config.item_size()
}

/// Returns the index of the item covering `offset`, clamped into `0..item_count`.
///
/// Returns `None` for an empty list.
pub fn index_at_offset(item_count: usize, config: &LayoutConfig, offset: f64) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    let offset = if offset >= 0.0 { offset } else { 0.0 };
    let index = floor_to_index(offset / config.item_size());
    Some(cmp::min(index, item_count - 1))
}

/// The largest scroll offset that still shows a full viewport of content.
pub fn max_scroll_offset(item_count: usize, config: &LayoutConfig, viewport_height: f64) -> f64 {
    let total = item_count as f64 * config.item_size();
    let view = if viewport_height >= 0.0 { viewport_height } else { 0.0 };
    (total - view).max(0.0)
}

/// Computes the scroll offset that brings `index` into view with the given alignment.
///
/// `index` is clamped to the last item; the result is clamped to `0..=max_scroll_offset`.
/// Returns `0.0` for an empty list.
pub fn scroll_to_index_offset(
    item_count: usize,
    config: &LayoutConfig,
    viewport: &Viewport,
    index: usize,
    align: Align,
) -> f64 {
    if item_count == 0 {
        return 0.0;
    }
    let viewport = viewport.sanitized();
    let index = cmp::min(index, item_count - 1);
    let size = config.item_size();
    let start = index as f64 * size;
    let end = start + size;
    let view = viewport.viewport_height;

    let target = match align {
        Align::Start => start,
        Align::End => end - view,
        Align::Center => start + size / 2.0 - view / 2.0,
        Align::Auto => {
            let cur = viewport.scroll_offset;
            if start >= cur && end <= cur + view {
                cur
            } else if start < cur {
                start
            } else {
                end - view
            }
        }
    };

    let max = max_scroll_offset(item_count, config, view);
    let clamped = target.clamp(0.0, max);
    wl_debug!(index, ?align, offset = clamped, "scroll_to_index_offset");
    clamped
}

impl<T> LayoutResult<'_, T> {
    fn from_ranges(ranges: LayoutRanges) -> Self {
        Self {
            items: Vec::new(),
            total_extent: ranges.total_extent,
            visible_range: ranges.visible_range,
            rendered_range: ranges.rendered_range,
        }
    }
}

// `x` is non-negative here; the saturating float -> int cast truncates, which is floor.
fn floor_to_index(x: f64) -> usize {
    x as usize
}

fn ceil_to_count(x: f64) -> usize {
    let t = x as usize;
    if (t as f64) < x { t.saturating_add(1) } else { t }
}
