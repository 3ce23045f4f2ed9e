use alloc::vec::Vec;

use crate::options::ConfigureCell;
use crate::value::{PageValue, ViewMap};
use crate::{ViewId, Viewport};

/// A pool of reusable page views, keyed by the page value each view currently renders.
///
/// The pool is the exclusive owner of view handles. The rendering surface only ever receives
/// attach/detach/place instructions; it never reaches back into paging state.
#[derive(Debug)]
pub struct ViewPool<V> {
    views: ViewMap<V>,
    next_id: u64,
}

impl<V: PageValue> ViewPool<V> {
    pub fn new() -> Self {
        Self {
            views: ViewMap::<V>::new(),
            next_id: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// The view currently keyed to `value`, if the value is materialized.
    pub fn view_for(&self, value: &V) -> Option<ViewId> {
        self.views.get(value).copied()
    }

    /// Reconciles the pool against `pages` with minimal churn.
    ///
    /// Views whose value is still in `pages` are kept untouched — no re-keying and no
    /// `configure` call, so pages that stay visible across an update never flicker. Views
    /// whose value left `pages` form a reuse stack (last vacated, first reused); each missing
    /// page pops from the stack and is re-keyed, or attaches a fresh view when the stack runs
    /// dry. Stack leftovers are detached.
    ///
    /// Returns `true` when anything changed, i.e. view frames are now stale and a relayout
    /// pass is required.
    pub fn reconcile<P: Viewport>(
        &mut self,
        pages: &[V],
        viewport: &mut P,
        configure: Option<&ConfigureCell<V>>,
    ) -> bool {
        let vacated: Vec<V> = self
            .views
            .keys()
            .filter(|value| !pages.contains(*value))
            .cloned()
            .collect();

        let mut reuse: Vec<ViewId> = Vec::with_capacity(vacated.len());
        for value in &vacated {
            if let Some(id) = self.views.remove(value) {
                reuse.push(id);
            }
        }

        let mut changed = !vacated.is_empty();
        for value in pages {
            if self.views.contains_key(value) {
                continue;
            }
            let id = match reuse.pop() {
                Some(id) => {
                    ctrace!(view = id.0, value = ?value, "reusing view");
                    id
                }
                None => {
                    let id = ViewId(self.next_id);
                    self.next_id += 1;
                    ctrace!(view = id.0, value = ?value, "attaching view");
                    viewport.attach(id);
                    id
                }
            };
            self.views.insert(value.clone(), id);
            if let Some(configure) = configure {
                configure(id, value);
            }
            changed = true;
        }

        for id in reuse {
            ctrace!(view = id.0, "detaching unused view");
            viewport.detach(id);
        }

        debug_assert_eq!(self.views.len(), pages.len(), "pool must mirror the window");
        changed
    }

    /// Detaches every pooled view; used at teardown.
    pub fn release_all<P: Viewport>(&mut self, viewport: &mut P) {
        for (_, id) in core::mem::take(&mut self.views) {
            viewport.detach(id);
        }
    }
}

impl<V: PageValue> Default for ViewPool<V> {
    fn default() -> Self {
        Self::new()
    }
}
