use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::Mutex;

use carousel::{CarouselOptions, Size, Viewport};

const W: f64 = 100.0;

fn driver_at(initial: i64) -> Driver<i64> {
    Driver::new(
        CarouselOptions::new(initial).with_initial_size(Some(Size::new(W, 50.0))),
        240,
        Easing::SmoothStep,
    )
}

fn run_until_idle(driver: &mut Driver<i64>, mut now_ms: u64) -> u64 {
    let mut guard = 0;
    while driver.is_animating() {
        now_ms += 16;
        driver.tick(now_ms);
        guard += 1;
        assert!(guard < 1_000, "animation never settled");
    }
    now_ms
}

#[test]
fn tween_samples_endpoints_exactly() {
    let tween = Tween::new(200.0, 300.0, 0, 240, Easing::Linear);
    assert_eq!(tween.sample(0), 200.0);
    assert_eq!(tween.sample(120), 250.0);
    assert_eq!(tween.sample(240), 300.0);
    assert_eq!(tween.sample(10_000), 300.0);
    assert!(!tween.is_done(239));
    assert!(tween.is_done(240));
}

#[test]
fn tween_retarget_is_continuous() {
    let mut tween = Tween::new(0.0, 100.0, 0, 200, Easing::SmoothStep);
    let before = tween.sample(80);
    tween.retarget(80, 50.0, 200);
    assert_eq!(tween.sample(80), before);
    assert_eq!(tween.sample(280), 50.0);
}

#[test]
fn easing_is_anchored_and_monotonic() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
        let mut prev = 0.0;
        for step in 1..=100 {
            let t = step as f64 / 100.0;
            let v = easing.sample(t);
            assert!(v >= prev, "{easing:?} not monotonic at t={t}");
            prev = v;
        }
    }
}

#[test]
fn select_settles_through_simulated_time() {
    let mut driver = driver_at(0);
    assert_eq!(driver.carousel().viewport().offset(), 200.0);

    driver.select(10);
    assert!(driver.is_animating());
    run_until_idle(&mut driver, 0);

    assert_eq!(*driver.selection(), 10);
    assert_eq!(driver.carousel().pages(), [8, 9, 10, 11, 12]);
    assert_eq!(driver.carousel().viewport().offset(), 200.0);
    assert_eq!(driver.carousel().animations_in_flight(), 0);
}

#[test]
fn overlapping_selects_retarget_and_finalize_to_last() {
    let mut driver = driver_at(0);
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    driver
        .carousel_mut()
        .subscribe(move |value: &i64| sink.lock().unwrap().push(*value));

    driver.select(5);
    driver.tick(16);
    driver.tick(32);
    driver.select(9);
    assert_eq!(driver.carousel().animations_in_flight(), 2);
    run_until_idle(&mut driver, 32);

    assert_eq!(*driver.selection(), 9);
    assert_eq!(driver.carousel().pages(), [7, 8, 9, 10, 11]);
    assert_eq!(driver.carousel().viewport().offset(), 200.0);
    assert_eq!(*log.lock().unwrap(), [0, 5, 9]);
}

#[test]
fn drag_and_release_commits_the_dragged_page() {
    let mut driver = driver_at(0);
    driver.drag_to(250.0);
    driver.drag_to(400.0);
    driver.release();

    assert_eq!(*driver.selection(), 2);
    assert_eq!(driver.carousel().pages(), [0, 1, 2, 3, 4]);
    assert_eq!(driver.carousel().viewport().offset(), 200.0);
}

#[test]
fn grab_during_animation_cancels_the_pending_target() {
    let mut driver = driver_at(0);
    driver.select(10);
    driver.tick(16);
    driver.tick(32);

    // Grab close to the origin page, then release without moving a full page.
    driver.drag_to(180.0);
    assert!(!driver.is_animating());
    assert!(driver.carousel().next_value().is_none());
    driver.release();

    assert_eq!(*driver.selection(), 0);
    assert_eq!(driver.carousel().animations_in_flight(), 0);
}

#[test]
fn resize_keeps_scroll_fraction_under_the_driver() {
    let mut driver = Driver::new(
        CarouselOptions::new(0i64)
            .with_buffer_size(1)
            .with_initial_size(Some(Size::new(300.0, 50.0))),
        240,
        Easing::Linear,
    );
    assert_eq!(driver.carousel().viewport().offset(), 300.0);

    driver.resize(Size::new(400.0, 50.0));
    assert_eq!(driver.carousel().viewport().offset(), 400.0);
    assert_eq!(*driver.selection(), 0);
}

#[test]
fn recentering_shifts_an_active_tween_without_a_jump() {
    let mut viewport = SimViewport::new(240, Easing::Linear);
    viewport.tick(0);
    viewport.set_offset(200.0);
    viewport.animate_to(300.0);
    viewport.tick(120);
    let mid = viewport.offset();

    viewport.set_offset(mid - 100.0);
    assert_eq!(viewport.offset(), mid - 100.0);
    let ended = viewport.tick(240);
    assert_eq!(ended, 1);
    assert_eq!(viewport.offset(), 200.0);
}
