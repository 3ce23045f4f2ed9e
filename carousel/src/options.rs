use alloc::sync::Arc;

use crate::{Size, ViewId};

/// A callback fired when the settled selection changes.
///
/// The stream starts with one delivery of the construction-time value.
pub type OnSelectCallback<V> = Arc<dyn Fn(&V) + Send + Sync>;

/// Populates a recycled or freshly created page view for a value.
///
/// Must be idempotent and side-effect-free beyond visual configuration: the engine invokes it
/// whenever a view is (re)keyed to a value, and never for pages that stay in the window across
/// an update.
pub type ConfigureCell<V> = Arc<dyn Fn(ViewId, &V) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// This type is designed to be cheap to clone: callbacks are stored in `Arc`s.
pub struct CarouselOptions<V> {
    /// The construction-time selected value, which is also the initial center anchor.
    pub initial: V,

    /// Radius of the materialized window around the center anchor, and the recentering
    /// trigger threshold. Values below 1 are treated as 1.
    pub buffer_size: usize,

    /// The initial viewport geometry, when known at construction.
    ///
    /// When absent, all offset-dependent behavior waits for the first layout pass.
    pub initial_size: Option<Size>,

    /// Fills a page view with content for a value (see [`ConfigureCell`]).
    pub configure_cell: Option<ConfigureCell<V>>,

    /// Optional first subscriber for the selection stream.
    pub on_select: Option<OnSelectCallback<V>>,
}

impl<V> CarouselOptions<V> {
    pub fn new(initial: V) -> Self {
        Self {
            initial,
            buffer_size: 2,
            initial_size: None,
            configure_cell: None,
            on_select: None,
        }
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    pub fn with_initial_size(mut self, initial_size: Option<Size>) -> Self {
        self.initial_size = initial_size;
        self
    }

    pub fn with_configure_cell(
        mut self,
        configure_cell: Option<impl Fn(ViewId, &V) + Send + Sync + 'static>,
    ) -> Self {
        self.configure_cell = configure_cell.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_select(
        mut self,
        on_select: Option<impl Fn(&V) + Send + Sync + 'static>,
    ) -> Self {
        self.on_select = on_select.map(|f| Arc::new(f) as _);
        self
    }
}

impl<V: Clone> Clone for CarouselOptions<V> {
    fn clone(&self) -> Self {
        Self {
            initial: self.initial.clone(),
            buffer_size: self.buffer_size,
            initial_size: self.initial_size,
            configure_cell: self.configure_cell.clone(),
            on_select: self.on_select.clone(),
        }
    }
}

impl<V: core::fmt::Debug> core::fmt::Debug for CarouselOptions<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("initial", &self.initial)
            .field("buffer_size", &self.buffer_size)
            .field("initial_size", &self.initial_size)
            .finish_non_exhaustive()
    }
}
