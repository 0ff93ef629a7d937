// Example: mount/update/unmount lifecycle of a single sticky element.
use std::sync::{Arc, Mutex};

use sticky::{
    BoundingBox, ContainerHandle, ElementHandle, NullEventSource, Position, StickyEngine,
    StickyOffset, StickyOptions, Viewport,
};
use sticky_adapter::{Sticky, StickyWatchers};

#[derive(Default)]
struct Page {
    scroll: Mutex<f64>,
    element_height: Mutex<f64>,
    element_position: Mutex<Position>,
}

impl Viewport for Page {
    fn page_y_offset(&self) -> f64 {
        *self.scroll.lock().unwrap()
    }
}

impl ElementHandle for Page {
    fn bounding_box(&self) -> BoundingBox {
        let scroll = *self.scroll.lock().unwrap();
        BoundingBox::new(120.0 - scroll, 0.0, 480.0, *self.element_height.lock().unwrap())
    }

    fn position(&self) -> Position {
        *self.element_position.lock().unwrap()
    }

    fn set_position(&self, position: Position) {
        *self.element_position.lock().unwrap() = position;
    }
}

impl ContainerHandle for Page {
    fn bounding_box(&self) -> BoundingBox {
        let scroll = *self.scroll.lock().unwrap();
        BoundingBox::new(120.0 - scroll, 0.0, 480.0, 900.0)
    }

    fn update_top_correction(&self, offset: f64) {
        println!("  container top correction -> {offset}");
    }
}

fn main() {
    let page = Arc::new(Page::default());
    *page.element_height.lock().unwrap() = 48.0;

    // No physical window in this demo; cycles are forced through the watchers directly.
    let watchers = StickyWatchers::new(Arc::new(NullEventSource) as _);

    let mut element = Sticky::new(StickyEngine::new(
        Arc::clone(&page) as _,
        Arc::clone(&page) as _,
        Arc::clone(&page) as _,
        StickyOffset::default(),
        StickyOptions::new().with_class_name("toc"),
    ));

    // Mount.
    element.attach(&watchers);
    println!("mounted: {:?}", element.snapshot());

    // Scroll past the origin.
    *page.scroll.lock().unwrap() = 200.0;
    watchers.scroll.notify_all();
    println!("scrolled: {:?}", element.snapshot());

    // New content arrives: taller element, new class.
    *page.element_height.lock().unwrap() = 96.0;
    element.reconfigure(
        StickyOptions::new()
            .with_class_name("toc")
            .with_sticky_class_name("toc--pinned"),
    );
    println!("reconfigured: {:?}", element.snapshot());

    // Unmount: the correction is released and the watchers drain.
    element.detach();
    println!(
        "unmounted: scroll subscribers={}",
        watchers.scroll.subscriber_count()
    );
}
