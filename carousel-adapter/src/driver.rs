use carousel::{Carousel, CarouselOptions, PageValue, Size, Viewport};

use crate::{Easing, SimViewport};

/// A framework-neutral driver that wraps a `carousel::Carousel` over a [`SimViewport`] and
/// translates gesture and frame events into the engine's notifications.
///
/// Adapters drive it by calling:
/// - `tick(now_ms)` each frame/timer tick (advances tweens and reports animation ends)
/// - `drag_to` / `release` when pointer events occur
/// - `select` for programmatic paging, `resize` when the surface geometry changes
#[derive(Debug)]
pub struct Driver<V> {
    carousel: Carousel<V, SimViewport>,
    dragging: bool,
}

impl<V: PageValue> Driver<V> {
    pub fn new(options: CarouselOptions<V>, duration_ms: u64, easing: Easing) -> Self {
        Self {
            carousel: Carousel::new(options, SimViewport::new(duration_ms, easing)),
            dragging: false,
        }
    }

    pub fn carousel(&self) -> &Carousel<V, SimViewport> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<V, SimViewport> {
        &mut self.carousel
    }

    pub fn into_carousel(self) -> Carousel<V, SimViewport> {
        self.carousel
    }

    pub fn selection(&self) -> &V {
        self.carousel.selection()
    }

    pub fn is_animating(&self) -> bool {
        self.carousel.viewport().is_animating()
    }

    pub fn select(&mut self, value: V) {
        self.carousel.select(value);
    }

    pub fn resize(&mut self, size: Size) {
        self.carousel.on_layout(size);
    }

    /// Advances the simulated clock by one frame.
    ///
    /// While the surface is moving freely (not dragged), each step also runs the debounced
    /// selection scan, mirroring a scroll-event stream.
    pub fn tick(&mut self, now_ms: u64) {
        let ended = self.carousel.viewport_mut().tick(now_ms);
        if !self.dragging {
            self.carousel.update_selection(false);
        }
        for _ in 0..ended {
            self.carousel.on_animation_end();
        }
    }

    /// Moves the surface under a drag gesture, grabbing it out of any active animation first.
    pub fn drag_to(&mut self, offset: f64) {
        if !self.dragging {
            self.dragging = true;
            self.carousel.on_drag_will_begin();
            // The grabbed animation stops where it is, but its completion is still owed.
            let owed = self.carousel.viewport_mut().cancel_animation();
            for _ in 0..owed {
                self.carousel.on_animation_end();
            }
        }
        self.carousel.viewport_mut().set_offset(offset);
    }

    /// Ends the drag gesture; the simulated surface has no momentum, so release settles
    /// immediately.
    pub fn release(&mut self) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        self.carousel.on_deceleration_end();
    }
}
