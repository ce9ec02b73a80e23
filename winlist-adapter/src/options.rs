use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use winlist::{ConfigError, KeyFn, LayoutConfig};

/// Progress ratio at which `on_end_reached` fires unless configured otherwise.
pub const DEFAULT_END_REACHED_THRESHOLD: f64 = 0.8;

/// Fired once per threshold crossing when the viewport nears the end of the list.
pub type EndReachedCallback = Arc<dyn Fn() + Send + Sync>;

/// Fired when the set of visible indexes changes.
pub type ViewableItemsChangedCallback<T> = Arc<dyn Fn(&ViewableItems<'_, T>) + Send + Sync>;

/// One visible entry as reported to `on_viewable_items_changed`.
#[derive(Debug, PartialEq)]
pub struct ViewToken<'a, T> {
    pub item: &'a T,
    pub index: usize,
    pub key: String,
}

/// Payload of `on_viewable_items_changed`: the visible window (no overscan), in index order.
#[derive(Debug, PartialEq)]
pub struct ViewableItems<'a, T> {
    pub visible_items: Vec<ViewToken<'a, T>>,
}

impl<T> ViewableItems<'_, T> {
    pub fn indexes(&self) -> impl Iterator<Item = usize> + '_ {
        self.visible_items.iter().map(|t| t.index)
    }
}

/// Configuration for [`crate::ListController`].
///
/// Cheap to clone: callbacks are stored in `Arc`s.
pub struct ListOptions<T> {
    pub config: LayoutConfig,
    pub initial_offset: f64,
    pub initial_viewport_height: f64,

    /// `(scroll_offset + viewport_height) / total_extent` at which `on_end_reached` fires.
    pub end_reached_threshold: f64,

    /// Render key derivation. `None` keys items by their stringified index.
    pub key_fn: Option<KeyFn<T>>,

    pub on_end_reached: Option<EndReachedCallback>,
    pub on_viewable_items_changed: Option<ViewableItemsChangedCallback<T>>,
}

impl<T> Clone for ListOptions<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            initial_offset: self.initial_offset,
            initial_viewport_height: self.initial_viewport_height,
            end_reached_threshold: self.end_reached_threshold,
            key_fn: self.key_fn.clone(),
            on_end_reached: self.on_end_reached.clone(),
            on_viewable_items_changed: self.on_viewable_items_changed.clone(),
        }
    }
}

impl<T> Default for ListOptions<T> {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl<T> ListOptions<T> {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            initial_offset: 0.0,
            initial_viewport_height: 0.0,
            end_reached_threshold: DEFAULT_END_REACHED_THRESHOLD,
            key_fn: None,
            on_end_reached: None,
            on_viewable_items_changed: None,
        }
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.config.overscan = overscan;
        self
    }

    pub fn with_initial_offset(mut self, offset: f64) -> Self {
        self.initial_offset = offset;
        self
    }

    pub fn with_initial_viewport_height(mut self, height: f64) -> Self {
        self.initial_viewport_height = height;
        self
    }

    pub fn with_end_reached_threshold(mut self, threshold: f64) -> Self {
        self.end_reached_threshold = threshold;
        self
    }

    pub fn with_key_fn(
        mut self,
        key_fn: impl Fn(&T, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.key_fn = Some(Arc::new(key_fn));
        self
    }

    pub fn with_on_end_reached(
        mut self,
        on_end_reached: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_end_reached = on_end_reached.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_viewable_items_changed(
        mut self,
        f: Option<impl Fn(&ViewableItems<'_, T>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_viewable_items_changed = f.map(|f| Arc::new(f) as _);
        self
    }

    /// Checks the item size and the end-reached threshold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.config.validate()?;
        let t = self.end_reached_threshold;
        if !t.is_finite() || t <= 0.0 || t > 1.0 {
            return Err(ConfigError::InvalidThreshold(t));
        }
        Ok(())
    }

    /// The threshold actually used: out-of-range values fall back into `(0, 1]`.
    pub(crate) fn effective_threshold(&self) -> f64 {
        let t = self.end_reached_threshold;
        if !t.is_finite() || t <= 0.0 {
            DEFAULT_END_REACHED_THRESHOLD
        } else {
            t.min(1.0)
        }
    }
}

impl<T> core::fmt::Debug for ListOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("config", &self.config)
            .field("initial_offset", &self.initial_offset)
            .field("initial_viewport_height", &self.initial_viewport_height)
            .field("end_reached_threshold", &self.end_reached_threshold)
            .field("has_key_fn", &self.key_fn.is_some())
            .finish_non_exhaustive()
    }
}
