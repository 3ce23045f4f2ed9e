use carousel::{CarouselOptions, Size, Viewport};
use carousel_adapter::{Driver, Easing};

fn main() {
    // Example: a headless date picker paging over days, driven by simulated time.
    //
    // An adapter would:
    // - call tick(now_ms) in a frame loop / timer
    // - forward pointer events as drag_to/release
    // - render the materialized pages each frame
    let mut driver = Driver::new(
        CarouselOptions::new(0i64)
            .with_initial_size(Some(Size::new(320.0, 200.0)))
            .with_on_select(Some(|value: &i64| println!("selected={value}"))),
        240,
        Easing::SmoothStep,
    );

    driver.select(30);
    let mut now_ms = 0u64;
    while driver.is_animating() {
        now_ms += 16;
        driver.tick(now_ms);
        if now_ms.is_multiple_of(80) {
            println!(
                "t={now_ms} offset={} pages={:?}",
                driver.carousel().viewport().offset(),
                driver.carousel().pages()
            );
        }
    }
    println!("settled on {}", driver.selection());

    // One page back by gesture.
    driver.drag_to(driver.carousel().viewport().offset() - 320.0);
    driver.release();
    println!(
        "after drag: selection={} pages={:?}",
        driver.selection(),
        driver.carousel().pages()
    );
}
