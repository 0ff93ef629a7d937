// Example: the pinned `top` gives way as the container bottom scrolls past.
use std::sync::{Arc, Mutex};

use sticky::{
    BoundingBox, ContainerHandle, ElementHandle, Position, StickyEngine, StickyOffset,
    StickyOptions, Viewport,
};

const CONTAINER_TOP: f64 = 100.0;
const CONTAINER_HEIGHT: f64 = 400.0;
const ELEMENT_HEIGHT: f64 = 60.0;
const HEADER_OFFSET: f64 = 30.0;

#[derive(Default)]
struct Page {
    scroll: Mutex<f64>,
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
        BoundingBox::new(CONTAINER_TOP - scroll, 0.0, 600.0, ELEMENT_HEIGHT)
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
        BoundingBox::new(CONTAINER_TOP - scroll, 0.0, 600.0, CONTAINER_HEIGHT)
    }

    fn update_top_correction(&self, _offset: f64) {}
}

fn main() {
    let page = Arc::new(Page::default());

    // A fixed 30px application header sits above the viewport content; the element pins
    // just below it.
    let mut engine = StickyEngine::new(
        Arc::clone(&page) as _,
        Arc::clone(&page) as _,
        Arc::clone(&page) as _,
        StickyOffset::Value(HEADER_OFFSET),
        StickyOptions::new(),
    );
    engine.attach();

    for offset in [50.0, 70.0, 200.0, 350.0, 400.0, 430.0, 470.0] {
        *page.scroll.lock().unwrap() = offset;
        engine.evaluate();
        let bottom = ContainerHandle::bounding_box(page.as_ref()).bottom();
        println!(
            "scroll={offset:>5}: sticky={} top={:?} (container bottom at {bottom})",
            engine.is_sticky(),
            engine.computed_style().top
        );
    }
}
