/// Viewport geometry along the paging axis.
///
/// `main` is the paging axis size (the page width for horizontal paging); `cross` is the
/// perpendicular size. One page always spans exactly `main`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub main: f64,
    pub cross: f64,
}

impl Size {
    pub fn new(main: f64, cross: f64) -> Self {
        Self { main, cross }
    }
}

/// An opaque handle for a pooled page view.
///
/// Handles are minted by [`crate::ViewPool`] and stay stable while a view is recycled between
/// page values; the rendering surface only ever sees attach/detach/place instructions for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewId(pub u64);

/// The selection state machine's externally visible phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No pending programmatic target and no in-flight scroll animation.
    Idle,
    /// A programmatic jump is pending or at least one scroll animation is in flight.
    Transitioning,
}
