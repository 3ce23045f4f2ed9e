use crate::ViewId;

/// The physical scrollable surface the engine drives.
///
/// This is the seam to the UI layer: the engine owns all paging state and only ever sends
/// instructions down this trait; the surface must never reach back into engine state from
/// inside these calls. Offsets are scalar positions along the paging axis.
///
/// Event flow back into the engine (drag-begin, deceleration-end, animation-end, layout passes)
/// happens outside this trait: the adapter observes its surface and calls the corresponding
/// [`crate::Carousel`] methods.
pub trait Viewport {
    /// The current scroll offset along the paging axis.
    fn offset(&self) -> f64;

    /// Sets the scrollable content extent along the paging axis.
    fn set_content_extent(&mut self, extent: f64);

    /// Moves the scroll position immediately, without animation.
    fn set_offset(&mut self, offset: f64);

    /// Starts an animated scroll to `offset`.
    ///
    /// Every call must eventually be answered by exactly one
    /// [`crate::Carousel::on_animation_end`], even when a later `animate_to` retargets the
    /// animation mid-flight.
    fn animate_to(&mut self, offset: f64);

    /// Attaches a freshly created page view to the surface.
    fn attach(&mut self, view: ViewId);

    /// Detaches a page view that left the pool.
    fn detach(&mut self, view: ViewId);

    /// Positions an attached page view at `offset` with the given width.
    fn place(&mut self, view: ViewId, offset: f64, width: f64);
}
