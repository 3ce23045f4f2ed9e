//! A headless infinite paging engine for value-indexed carousels.
//!
//! For adapter-level utilities (simulated viewports, tweens), see the `carousel-adapter` crate.
//!
//! This crate focuses on the core algorithms needed to page over an unbounded, strictly ordered
//! dimension (day indexes, page numbers, ...) while materializing only a small constant-size
//! window of page views: window computation around a center anchor, view recycling with minimal
//! churn, selection settling with debouncing and animation-reentrancy control, and periodic
//! recentering so the window never grows under unbounded scrolling.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a [`Viewport`]: the physical scrollable surface (offset, content extent, animated scrolling)
//! - a cell configuration callback that fills a recycled view for a page value
//! - layout/drag/settle events routed into [`Carousel`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod emitter;
mod options;
mod pool;
mod types;
mod value;
mod viewport;
mod window;


pub use carousel::Carousel;
pub use emitter::SelectionEmitter;
pub use options::{CarouselOptions, ConfigureCell, OnSelectCallback};
pub use pool::ViewPool;
pub use types::{Phase, Size, ViewId};
pub use value::PageValue;
pub use viewport::Viewport;
pub use window::compute_window;
