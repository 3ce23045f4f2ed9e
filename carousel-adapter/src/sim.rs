use alloc::collections::{BTreeMap, BTreeSet};

use carousel::{ViewId, Viewport};

use crate::{Easing, Tween};

/// A simulated scroll surface driven by a caller-owned millisecond clock.
///
/// Offsets animate with a [`Tween`]; the engine's `animate_to` requests are queued as owed
/// completions and reported back by [`tick`](Self::tick), which returns how many animations
/// finished since the last call. The caller forwards each one as an
/// `on_animation_end` notification, preserving the engine's one-completion-per-request
/// contract even across retargets and cancellations.
#[derive(Clone, Debug)]
pub struct SimViewport {
    offset: f64,
    extent: f64,
    now_ms: u64,
    duration_ms: u64,
    easing: Easing,
    tween: Option<Tween>,
    pending_completions: usize,
    attached: BTreeSet<u64>,
    placements: BTreeMap<u64, (f64, f64)>,
}

impl SimViewport {
    pub fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            offset: 0.0,
            extent: 0.0,
            now_ms: 0,
            duration_ms: duration_ms.max(1),
            easing,
            tween: None,
            pending_completions: 0,
            attached: BTreeSet::new(),
            placements: BTreeMap::new(),
        }
    }

    pub fn content_extent(&self) -> f64 {
        self.extent
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn view_count(&self) -> usize {
        self.attached.len()
    }

    /// The last placed frame for `view` as `(offset, width)`.
    pub fn placement(&self, view: ViewId) -> Option<(f64, f64)> {
        self.placements.get(&view.0).copied()
    }

    /// Advances the clock, sampling any active tween into the offset.
    ///
    /// Returns the number of animations that finished this step; the caller must report each
    /// one to the engine.
    pub fn tick(&mut self, now_ms: u64) -> usize {
        self.now_ms = now_ms;
        let Some(tween) = self.tween else {
            return 0;
        };
        self.offset = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.tween = None;
            core::mem::take(&mut self.pending_completions)
        } else {
            0
        }
    }

    /// Stops the active tween at its current sample, e.g. when a drag grabs the surface.
    ///
    /// Returns the owed completions; the caller must still report each one to the engine.
    pub fn cancel_animation(&mut self) -> usize {
        self.tween = None;
        core::mem::take(&mut self.pending_completions)
    }
}

impl Viewport for SimViewport {
    fn offset(&self) -> f64 {
        self.offset
    }

    fn set_content_extent(&mut self, extent: f64) {
        self.extent = extent;
    }

    fn set_offset(&mut self, offset: f64) {
        // An instantaneous jump during an animation shifts the tween by the same delta, so a
        // recentering correction does not visibly disturb the motion.
        if let Some(tween) = &mut self.tween {
            let delta = offset - self.offset;
            tween.from += delta;
            tween.to += delta;
        }
        self.offset = offset;
    }

    fn animate_to(&mut self, offset: f64) {
        self.pending_completions += 1;
        match &mut self.tween {
            Some(tween) => tween.retarget(self.now_ms, offset, self.duration_ms),
            None => {
                self.tween = Some(Tween::new(
                    self.offset,
                    offset,
                    self.now_ms,
                    self.duration_ms,
                    self.easing,
                ));
            }
        }
    }

    fn attach(&mut self, view: ViewId) {
        self.attached.insert(view.0);
    }

    fn detach(&mut self, view: ViewId) {
        self.attached.remove(&view.0);
        self.placements.remove(&view.0);
    }

    fn place(&mut self, view: ViewId, offset: f64, width: f64) {
        self.placements.insert(view.0, (offset, width));
    }
}
