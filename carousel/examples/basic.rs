// Example: minimal usage with a logging scroll surface.
use carousel::{Carousel, CarouselOptions, Size, ViewId, Viewport};

#[derive(Debug, Default)]
struct LogViewport {
    offset: f64,
}

impl Viewport for LogViewport {
    fn offset(&self) -> f64 {
        self.offset
    }

    fn set_content_extent(&mut self, extent: f64) {
        println!("extent={extent}");
    }

    fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
        println!("offset={offset}");
    }

    fn animate_to(&mut self, offset: f64) {
        println!("animate_to={offset}");
    }

    fn attach(&mut self, view: ViewId) {
        println!("attach={}", view.0);
    }

    fn detach(&mut self, view: ViewId) {
        println!("detach={}", view.0);
    }

    fn place(&mut self, view: ViewId, offset: f64, width: f64) {
        println!("place view={} offset={offset} width={width}", view.0);
    }
}

fn main() {
    let options = CarouselOptions::new(2_024i64)
        .with_initial_size(Some(Size::new(320.0, 200.0)))
        .with_on_select(Some(|value: &i64| println!("selected={value}")));
    let mut c = Carousel::new(options, LogViewport::default());
    println!("pages={:?}", c.pages());

    // Jump far ahead: the window splits around the target so only one page-width animates.
    c.select(2_030);
    println!("pages={:?}", c.pages());

    // The surface reports the animation end; the engine settles and recenters.
    c.viewport_mut().offset = 3.0 * 320.0;
    c.on_animation_end();
    println!("pages={:?} selection={}", c.pages(), c.selection());
}
