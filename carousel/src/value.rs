#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::ViewId;

#[cfg(feature = "std")]
pub(crate) type ViewMap<V> = HashMap<V, ViewId>;
#[cfg(not(feature = "std"))]
pub(crate) type ViewMap<V> = BTreeMap<V, ViewId>;

/// The ordered, integer-strideable dimension pages are indexed by.
///
/// Anything with a total order and a constant stride works: page numbers, day indexes, epoch
/// timestamps at a fixed granularity. The engine only ever moves by whole steps; `advanced_by`
/// must satisfy `v.advanced_by(a).advanced_by(b) == v.advanced_by(a + b)` over the range the
/// adapter exposes.
///
/// The `Debug` bound provides a stable description for diagnostics.
#[cfg(feature = "std")]
pub trait PageValue: Clone + Ord + core::hash::Hash + core::fmt::Debug {
    /// Returns the value `steps` strides away (negative steps go backward).
    fn advanced_by(&self, steps: i64) -> Self;
}

/// The ordered, integer-strideable dimension pages are indexed by.
///
/// Anything with a total order and a constant stride works: page numbers, day indexes, epoch
/// timestamps at a fixed granularity. The engine only ever moves by whole steps; `advanced_by`
/// must satisfy `v.advanced_by(a).advanced_by(b) == v.advanced_by(a + b)` over the range the
/// adapter exposes.
///
/// The `Debug` bound provides a stable description for diagnostics.
#[cfg(not(feature = "std"))]
pub trait PageValue: Clone + Ord + core::fmt::Debug {
    /// Returns the value `steps` strides away (negative steps go backward).
    fn advanced_by(&self, steps: i64) -> Self;
}

macro_rules! impl_page_value_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl PageValue for $t {
                fn advanced_by(&self, steps: i64) -> Self {
                    (*self as i64).saturating_add(steps) as $t
                }
            }
        )*
    };
}

impl_page_value_for_int!(i16, i32, i64, isize);
