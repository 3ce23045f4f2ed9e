//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the core paging math and state. This
//! crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A simulated scroll surface ([`SimViewport`]) that animates with tweens under a caller-driven
//!   clock, useful for headless adapters and tests
//! - A [`Driver`] that wraps a `Carousel` over that surface and turns gesture/frame events into
//!   the engine's notifications
//!
//! This crate is intentionally framework-agnostic (no winit/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod driver;
mod sim;
mod tween;

#[cfg(test)]
mod tests;

pub use driver::Driver;
pub use sim::SimViewport;
pub use tween::{Easing, Tween};
