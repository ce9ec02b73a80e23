use alloc::string::String;
use alloc::vec::Vec;

use winlist::{Align, ConfigError, IndexRange, LayoutConfig, LayoutResult, Viewport};

use crate::{ControllerState, Controllable, ListOptions, ViewToken, ViewableItems};

/// A framework-neutral controller that sits between a scroll container and the layout engine.
///
/// This type does not hold any UI objects or items. Adapters drive it by calling:
/// - `on_scroll` / `on_resize` / `apply_frame` when UI events occur
/// - `layout(items)` once per frame when `needs_layout()` is true
///
/// Event calls only record the newest viewport snapshot. However many scroll events arrive in a
/// frame, the next `layout` reads the latest values, so a stale computation is never issued
/// after newer input.
///
/// `layout` also runs the notification pass: `on_viewable_items_changed` when the visible index
/// set changes, and the one-shot `on_end_reached` latch.
#[derive(Clone, Debug)]
pub struct ListController<T> {
    options: ListOptions<T>,
    scroll: Controllable<f64>,
    viewport_height: f64,
    threshold: f64,
    dirty: bool,

    item_count: Option<usize>,
    last_visible: Option<IndexRange>,
    end_reached_latched: bool,
}

impl<T> ListController<T> {
    /// Creates a controller that owns its scroll offset.
    ///
    /// Out-of-range thresholds are clamped into `(0, 1]`; use [`Self::try_new`] to reject them.
    pub fn new(options: ListOptions<T>) -> Self {
        let scroll = Controllable::owned(options.initial_offset);
        Self::with_scroll(options, scroll)
    }

    /// Same as [`Self::new`], but validates the options first.
    pub fn try_new(options: ListOptions<T>) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self::new(options))
    }

    /// Creates a controller whose scroll offset is owned by the caller.
    ///
    /// Scroll requests (`on_scroll`, `scroll_to_index`) are forwarded to `on_change` and take
    /// effect only once the caller hands the value back through [`Self::sync_scroll_offset`].
    /// `options.initial_offset` is ignored in favor of `offset`.
    pub fn new_controlled(
        options: ListOptions<T>,
        offset: f64,
        on_change: impl Fn(f64) + Send + Sync + 'static,
    ) -> Self {
        let scroll = Controllable::controlled(offset, on_change);
        Self::with_scroll(options, scroll)
    }

    fn with_scroll(options: ListOptions<T>, scroll: Controllable<f64>) -> Self {
        let threshold = options.effective_threshold();
        if threshold != options.end_reached_threshold {
            wa_warn!(
                requested = options.end_reached_threshold,
                threshold,
                "end_reached_threshold out of range; clamped"
            );
        }
        wa_debug!(
            controlled = scroll.is_controlled(),
            overscan = options.config.overscan,
            threshold,
            "ListController::new"
        );
        Self {
            viewport_height: options.initial_viewport_height,
            scroll,
            threshold,
            dirty: true,
            item_count: None,
            last_visible: None,
            end_reached_latched: false,
            options,
        }
    }

    pub fn options(&self) -> &ListOptions<T> {
        &self.options
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.options.config
    }

    pub fn set_config(&mut self, config: LayoutConfig) {
        if self.options.config == config {
            return;
        }
        self.options.config = config;
        self.dirty = true;
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.set_config(self.options.config.with_overscan(overscan));
    }

    pub fn set_estimated_item_size(&mut self, size: f64) {
        self.set_config(self.options.config.with_estimated_item_size(size));
    }

    pub fn is_controlled(&self) -> bool {
        self.scroll.is_controlled()
    }

    pub fn scroll_offset(&self) -> f64 {
        *self.scroll.get()
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// The snapshot the next `layout` will use.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.scroll_offset(), self.viewport_height)
    }

    /// Returns `true` when inputs changed since the last `layout`.
    pub fn needs_layout(&self) -> bool {
        self.dirty
    }

    /// Call this when the scroll container reports a new offset.
    ///
    /// In controlled mode the offset is forwarded to the caller instead of being stored.
    pub fn on_scroll(&mut self, offset: f64) {
        wa_trace!(offset, "on_scroll");
        if self.scroll.request(offset) {
            self.dirty = true;
        }
    }

    /// Call this when the scroll container's content-box height changes.
    pub fn on_resize(&mut self, viewport_height: f64) {
        wa_trace!(viewport_height, "on_resize");
        if self.viewport_height == viewport_height {
            return;
        }
        self.viewport_height = viewport_height;
        self.dirty = true;
    }

    /// Records a resize and a scroll together.
    pub fn apply_frame(&mut self, viewport_height: f64, offset: f64) {
        self.on_resize(viewport_height);
        self.on_scroll(offset);
    }

    /// Hands back an accepted scroll offset (controlled mode), or overrides it (owned mode).
    pub fn sync_scroll_offset(&mut self, offset: f64) {
        if self.scroll.sync(offset) {
            self.dirty = true;
        }
    }

    /// Computes the layout for `items` from the latest viewport snapshot and runs the
    /// notification pass.
    pub fn layout<'a>(&mut self, items: &'a [T]) -> LayoutResult<'a, T> {
        let viewport = self.viewport();
        let result = winlist::compute_layout(items, &self.options.config, &viewport);
        self.dirty = false;

        self.track_item_count(items.len());
        self.notify_viewable(&result);
        self.check_end_reached(&viewport, result.total_extent);
        result
    }

    /// Derives the render key for `item` at `index`.
    pub fn key_for(&self, item: &T, index: usize) -> String {
        winlist::derive_key(self.options.key_fn.as_ref(), item, index)
    }

    /// Computes the offset that brings `index` into view and requests it.
    ///
    /// Returns the (clamped) target offset. In controlled mode the request goes through the
    /// caller's `on_change`; the returned value is what was requested.
    pub fn scroll_to_index(&mut self, index: usize, item_count: usize, align: Align) -> f64 {
        let target = winlist::scroll_to_index_offset(
            item_count,
            &self.options.config,
            &self.viewport(),
            index,
            align,
        );
        if self.scroll.request(target) {
            self.dirty = true;
        }
        target
    }

    /// Visible range last reported to `on_viewable_items_changed`.
    pub fn last_visible_range(&self) -> Option<IndexRange> {
        self.last_visible
    }

    pub fn is_end_reached_latched(&self) -> bool {
        self.end_reached_latched
    }

    /// Forgets what was reported, so the next `layout` notifies as if it were the first.
    ///
    /// Call this when swapping in an unrelated dataset of the same length.
    pub fn reset_notifications(&mut self) {
        self.last_visible = None;
        self.end_reached_latched = false;
        self.item_count = None;
        self.dirty = true;
    }

    /// Returns a lightweight snapshot of the host-facing state.
    pub fn state(&self) -> ControllerState {
        ControllerState {
            viewport: self.viewport(),
            item_count: self.item_count,
            last_visible: self.last_visible,
            end_reached_latched: self.end_reached_latched,
        }
    }

    /// Restores a previously captured snapshot.
    ///
    /// The scroll offset is written directly (without `on_change`) in both modes.
    pub fn restore_state(&mut self, state: ControllerState) {
        self.viewport_height = state.viewport.viewport_height;
        self.scroll.sync(state.viewport.scroll_offset);
        self.item_count = state.item_count;
        self.last_visible = state.last_visible;
        self.end_reached_latched = state.end_reached_latched;
        self.dirty = true;
    }

    fn track_item_count(&mut self, count: usize) {
        if self.item_count == Some(count) {
            return;
        }
        if self.item_count.is_some() {
            wa_debug!(
                prev = ?self.item_count,
                count,
                "item count changed; end-reached latch re-armed"
            );
        }
        self.item_count = Some(count);
        self.end_reached_latched = false;
    }

    fn notify_viewable(&mut self, result: &LayoutResult<'_, T>) {
        let visible = result.visible_range;
        let prev = self.last_visible.replace(visible);
        match prev {
            Some(prev) if same_index_set(prev, visible) => return,
            // Nothing was visible before and nothing is now.
            None if visible.is_empty() => return,
            _ => {}
        }

        let Some(cb) = &self.options.on_viewable_items_changed else {
            return;
        };
        let visible_items: Vec<ViewToken<'_, T>> = result
            .visible_items()
            .map(|it| ViewToken {
                item: it.item,
                index: it.index,
                key: self.key_for(it.item, it.index),
            })
            .collect();
        wa_trace!(
            start = visible.start,
            end = visible.end,
            "on_viewable_items_changed"
        );
        cb(&ViewableItems { visible_items });
    }

    fn check_end_reached(&mut self, viewport: &Viewport, total_extent: f64) {
        if total_extent <= 0.0 {
            return;
        }
        let progress = viewport.scroll_end() / total_extent;
        if progress < self.threshold {
            self.end_reached_latched = false;
            return;
        }
        if self.end_reached_latched {
            return;
        }
        self.end_reached_latched = true;
        wa_debug!(progress, threshold = self.threshold, "on_end_reached");
        if let Some(cb) = &self.options.on_end_reached {
            cb();
        }
    }
}

fn same_index_set(a: IndexRange, b: IndexRange) -> bool {
    (a.is_empty() && b.is_empty()) || a == b
}
