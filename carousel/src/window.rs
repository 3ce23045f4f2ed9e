use alloc::vec::Vec;

use crate::PageValue;

/// Computes the currently materialized window of page values.
///
/// With no transition in flight the window is the contiguous range
/// `[center - buffer, center + buffer]`. While a programmatic jump to `next` is in flight the
/// window is dual-anchored: both the origin and the destination keep a margin of already
/// rendered pages on their *outer* sides so nothing blank is revealed mid-animation, while the
/// inner sides (toward each other) carry no margin because the animation passes over them in a
/// single page-width. The result always has length `2 * buffer + 1`.
///
/// The returned sequence is strictly increasing (gap-free only in the steady case).
pub fn compute_window<V: PageValue>(center: &V, next: Option<&V>, buffer: usize) -> Vec<V> {
    let buffer = buffer.max(1);
    let b = buffer as i64;
    let mut out = Vec::with_capacity(2 * buffer + 1);

    match next {
        Some(next) if next < center => {
            out.extend(((1 - b)..=0).map(|step| next.advanced_by(step)));
            out.extend((0..=b).map(|step| center.advanced_by(step)));
        }
        Some(next) if next > center => {
            out.extend((-b..=0).map(|step| center.advanced_by(step)));
            out.extend((0..b).map(|step| next.advanced_by(step)));
        }
        _ => {
            out.extend((-b..=b).map(|step| center.advanced_by(step)));
        }
    }

    debug_assert!(
        out.windows(2).all(|pair| pair[0] < pair[1]),
        "compute_window produced a non-increasing sequence"
    );
    out
}
