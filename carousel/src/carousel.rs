use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::emitter::SelectionEmitter;
use crate::pool::ViewPool;
use crate::window::compute_window;
use crate::{CarouselOptions, PageValue, Phase, Size, ViewId, Viewport};

/// A headless paging engine over an unbounded ordered dimension.
///
/// Exactly one page is "selected" at a time. The engine materializes a small constant-size
/// window of page views around a center anchor, recycles views as the window moves, and
/// reconciles user scrolling and programmatic jumps into one settled selection.
///
/// This type is intentionally UI-agnostic:
/// - It owns all paging state (window, pool, selection) and a [`Viewport`] implementation.
/// - The adapter drives it by routing surface events into [`Carousel::on_layout`],
///   [`Carousel::on_drag_will_begin`], [`Carousel::on_deceleration_end`] and
///   [`Carousel::on_animation_end`].
/// - The settled selection is re-exported through [`Carousel::subscribe`], with delivery
///   deferred to the unwind of the outermost event handler so subscribers never observe the
///   state machine mid-mutation.
///
/// All state mutations happen synchronously inside these handlers; there is no internal
/// threading and no blocking.
#[derive(Debug)]
pub struct Carousel<V, P> {
    options: CarouselOptions<V>,
    viewport: P,

    /// The anchor the steady window is computed around. Changed only by recentering.
    center: V,
    selected: V,
    /// Pending programmatic jump target; present exactly while a jump is unconfirmed.
    next_value: Option<V>,
    pages: Vec<V>,
    pool: ViewPool<V>,
    emitter: SelectionEmitter<V>,

    size: Size,
    needs_layout: bool,
    /// Count of in-flight programmatic scroll animations; settling only finalizes at zero.
    animations: usize,
}

impl<V: PageValue, P: Viewport> Carousel<V, P> {
    pub fn new(options: CarouselOptions<V>, viewport: P) -> Self {
        let selected = options.initial.clone();
        cdebug!(
            selected = ?selected,
            buffer_size = options.buffer_size,
            "Carousel::new"
        );

        let mut emitter = SelectionEmitter::new(selected.clone());
        if let Some(on_select) = &options.on_select {
            emitter.subscribe(Arc::clone(on_select));
        }

        let size = options.initial_size.unwrap_or_default();
        let mut carousel = Self {
            center: selected.clone(),
            selected,
            next_value: None,
            pages: Vec::new(),
            pool: ViewPool::new(),
            emitter,
            size,
            needs_layout: true,
            animations: 0,
            options,
            viewport,
        };
        carousel.rebuild_window(false);
        if carousel.size.main > 0.0 {
            let offset = carousel.offset_of(&carousel.selected);
            carousel.viewport.set_offset(offset);
        }
        carousel
    }

    pub fn options(&self) -> &CarouselOptions<V> {
        &self.options
    }

    /// The externally visible, settled current page.
    pub fn selection(&self) -> &V {
        &self.selected
    }

    /// The pending programmatic jump target, while one is in flight.
    pub fn next_value(&self) -> Option<&V> {
        self.next_value.as_ref()
    }

    pub fn phase(&self) -> Phase {
        if self.next_value.is_some() || self.animations > 0 {
            Phase::Transitioning
        } else {
            Phase::Idle
        }
    }

    /// The currently materialized page values, strictly increasing.
    pub fn pages(&self) -> &[V] {
        &self.pages
    }

    pub fn center(&self) -> &V {
        &self.center
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The width of one page along the paging axis.
    pub fn page_width(&self) -> f64 {
        self.size.main
    }

    pub fn animations_in_flight(&self) -> usize {
        self.animations
    }

    /// Number of pooled page views (equals `pages().len()` after any reconcile).
    pub fn view_count(&self) -> usize {
        self.pool.len()
    }

    /// The view currently rendering `value`, if materialized.
    pub fn view_for(&self, value: &V) -> Option<ViewId> {
        self.pool.view_for(value)
    }

    pub fn viewport(&self) -> &P {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut P {
        &mut self.viewport
    }

    /// Releases every pooled view and returns the viewport.
    pub fn into_viewport(mut self) -> P {
        self.pool.release_all(&mut self.viewport);
        self.viewport
    }

    /// Registers a subscriber for the settled selection.
    ///
    /// The subscriber immediately receives the current value, then one delivery per actual
    /// change, deferred to the unwind of the event handler that caused it.
    pub fn subscribe(&mut self, subscriber: impl Fn(&V) + Send + Sync + 'static) {
        self.emitter.subscribe(Arc::new(subscriber));
    }

    /// Programmatically jumps to `value` with an animated scroll.
    ///
    /// The target is published to subscribers eagerly — intent is already determined — before
    /// the animation completes. No-op when `value` is already the pending target, or already
    /// settled with no jump in flight.
    pub fn select(&mut self, value: V) {
        self.with_scope(|carousel| carousel.select_inner(value));
    }

    fn select_inner(&mut self, value: V) {
        if self.next_value.as_ref() == Some(&value) {
            return;
        }
        if self.next_value.is_none() && value == self.selected {
            return;
        }
        cdebug!(target_value = ?value, "select");

        self.next_value = Some(value.clone());
        self.emitter.publish(value.clone());
        self.rebuild_window(true);
        self.animations += 1;
        let target = self.offset_of(&value);
        self.viewport.animate_to(target);
    }

    /// Invoked when the user takes manual control of the scroll surface.
    ///
    /// Any pending programmatic target is abandoned; the gesture now drives selection.
    pub fn on_drag_will_begin(&mut self) {
        self.with_scope(|carousel| {
            if carousel.next_value.take().is_some() {
                ctrace!("drag cancelled pending target");
            }
        });
    }

    /// Invoked when a user-driven scroll finishes decelerating.
    pub fn on_deceleration_end(&mut self) {
        self.with_scope(|carousel| carousel.finalize());
    }

    /// Invoked when an animated scroll requested via [`Viewport::animate_to`] completes.
    ///
    /// While overlapping programmatic animations are still outstanding nothing is finalized,
    /// so the selection can never settle on a stale intermediate position.
    pub fn on_animation_end(&mut self) {
        self.with_scope(|carousel| {
            carousel.animations = carousel.animations.saturating_sub(1);
            if carousel.animations > 0 {
                ctrace!(
                    outstanding = carousel.animations,
                    "animation end with animations outstanding"
                );
                return;
            }
            carousel.finalize();
        });
    }

    /// Invoked on every layout pass of the surface.
    ///
    /// Cheap when nothing changed: proceeds only when `new_size` differs from the recorded
    /// size or a reconcile flagged stale frames. The first real layout jumps straight to the
    /// selected page; later resizes preserve the visual scroll fraction
    /// (`old_offset / old_width * new_width`) so the same page stays centered through
    /// rotations or size-class changes.
    pub fn on_layout(&mut self, new_size: Size) {
        self.with_scope(|carousel| carousel.on_layout_inner(new_size));
    }

    fn on_layout_inner(&mut self, new_size: Size) {
        if new_size == self.size && !self.needs_layout {
            return;
        }
        let old_size = self.size;
        let old_offset = self.viewport.offset();
        self.size = new_size;
        self.apply_layout();

        if old_size.main == 0.0 {
            let target = self.offset_of(&self.selected);
            self.viewport.set_offset(target);
        } else if new_size.main != old_size.main {
            self.viewport
                .set_offset(old_offset / old_size.main * new_size.main);
        }

        self.update_selection_inner(false);
        self.recenter(false);
    }

    /// Reconciles the selection from the viewport's physical offset.
    ///
    /// Unless `force` is set, only proceeds once the offset has drifted at least one full
    /// page-width from the selected page — sub-page jitter during a drag never recomputes
    /// anything.
    pub fn update_selection(&mut self, force: bool) {
        self.with_scope(|carousel| carousel.update_selection_inner(force));
    }

    fn update_selection_inner(&mut self, force: bool) {
        let width = self.size.main;
        if width <= 0.0 {
            return;
        }
        let offset = self.viewport.offset();
        if !force && drift(offset, self.offset_of(&self.selected)) < width {
            return;
        }

        let index = round_index(offset / width);
        if index < 0 || index as usize >= self.pages.len() {
            // Transient, self-correcting scroll state; keep the prior selection.
            ctrace!(index, "selection candidate outside window");
            return;
        }
        let candidate = self.pages[index as usize].clone();
        if let Some(next) = &self.next_value {
            if *next != candidate {
                return;
            }
        }

        if candidate != self.selected {
            cdebug!(selected = ?candidate, "selection committed");
            self.selected = candidate;
            self.emitter.publish(self.selected.clone());
        }
        self.next_value = None;
    }

    /// The settle sequence shared by animation end and deceleration end.
    fn finalize(&mut self) {
        self.update_selection_inner(true);
        self.ensure_paging();
        self.recenter(true);
    }

    /// Snaps the viewport exactly onto the selected page when rounding drift crept in.
    fn ensure_paging(&mut self) {
        if self.size.main <= 0.0 {
            return;
        }
        let target = self.offset_of(&self.selected);
        if drift(self.viewport.offset(), target) > 1.0 {
            ctrace!(offset = target, "snapping offset onto selected page");
            self.viewport.set_offset(target);
        }
    }

    /// Re-anchors the window's center to the selection.
    ///
    /// This is what bounds the window under arbitrarily long unidirectional scrolling: each
    /// recenter discards far-side pages and reclaims their views. Because page indexes shift
    /// when the window re-anchors, the physical offset is corrected by the selected page's
    /// index delta so the visible content does not jump.
    fn recenter(&mut self, force: bool) {
        let width = self.size.main;
        if width <= 0.0 {
            return;
        }
        if self.center == self.selected {
            return;
        }
        let drift_pages =
            drift(self.offset_of(&self.center), self.offset_of(&self.selected)) / width;
        if !force && drift_pages < (self.buffer() - 1) as f64 {
            return;
        }
        cdebug!(center = ?self.selected, "recentering window");

        let old_offset = self.offset_of(&self.selected);
        self.center = self.selected.clone();
        self.rebuild_window(false);

        let delta = self.offset_of(&self.selected) - old_offset;
        if delta != 0.0 {
            let offset = self.viewport.offset();
            self.viewport.set_offset(offset + delta);
        }
    }

    /// Pixel offset of `value` in the current window.
    ///
    /// A value outside the window falls back to the first page's offset. That miss is
    /// expected transiently (e.g. mid-transition layout) but can also mask the selection
    /// drifting outside the window, so it is logged.
    pub fn offset_of(&self, value: &V) -> f64 {
        match self.pages.iter().position(|page| page == value) {
            Some(index) => index as f64 * self.size.main,
            None => {
                cwarn!(value = ?value, "offset_of: value not in window, using first page");
                0.0
            }
        }
    }

    fn rebuild_window(&mut self, with_next: bool) {
        let next = if with_next { self.next_value.clone() } else { None };
        self.pages = compute_window(&self.center, next.as_ref(), self.buffer());
        let changed = self.pool.reconcile(
            &self.pages,
            &mut self.viewport,
            self.options.configure_cell.as_ref(),
        );
        if changed {
            self.needs_layout = true;
        }
        self.relayout_if_needed();
    }

    fn relayout_if_needed(&mut self) {
        if self.needs_layout && self.size.main > 0.0 {
            self.apply_layout();
        }
    }

    /// Recomputes the content extent and positions every page view at `index * width`.
    fn apply_layout(&mut self) {
        let width = self.size.main;
        self.viewport
            .set_content_extent(width * self.pages.len() as f64);
        for (index, value) in self.pages.iter().enumerate() {
            if let Some(id) = self.pool.view_for(value) {
                self.viewport.place(id, index as f64 * width, width);
            }
        }
        self.needs_layout = false;
    }

    fn buffer(&self) -> usize {
        self.options.buffer_size.max(1)
    }

    /// Runs `f` inside an emitter scope: selection values published during `f` are delivered
    /// to subscribers only when the outermost scope unwinds, coalesced to the latest value.
    fn with_scope<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.emitter.enter();
        let out = f(self);
        self.emitter.exit();
        out
    }
}

fn drift(a: f64, b: f64) -> f64 {
    if a >= b { a - b } else { b - a }
}

// Nearest page index; `f64::round` is not available in `core`.
fn round_index(x: f64) -> i64 {
    if x >= 0.0 { (x + 0.5) as i64 } else { (x - 0.5) as i64 }
}
