// Example: drive a sticky engine directly with simulated page geometry.
use std::sync::{Arc, Mutex};

use sticky::{
    BoundingBox, ContainerHandle, ElementHandle, Position, StickyEngine, StickyOffset,
    StickyOptions, Viewport,
};

const ELEMENT_TOP: f64 = 200.0;
const ELEMENT_HEIGHT: f64 = 50.0;
const CONTAINER_HEIGHT: f64 = 600.0;

/// A tiny simulated DOM: one element at the top of one container.
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
        BoundingBox::new(ELEMENT_TOP - scroll, 40.0, 720.0, ELEMENT_HEIGHT)
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
        BoundingBox::new(ELEMENT_TOP - scroll, 40.0, 720.0, CONTAINER_HEIGHT)
    }

    fn update_top_correction(&self, offset: f64) {
        println!("  container top correction -> {offset}");
    }
}

fn main() {
    let page = Arc::new(Page::default());

    let options = StickyOptions::new()
        .with_class_name("header")
        .with_on_state_change(Some(|sticky| println!("  state change -> sticky={sticky}")));

    let mut engine = StickyEngine::new(
        Arc::clone(&page) as _,
        Arc::clone(&page) as _,
        Arc::clone(&page) as _,
        StickyOffset::default(),
        options,
    );
    engine.attach();
    println!(
        "origin={} height={} (sticky while scroll in [{}, {}))",
        engine.origin(),
        engine.height(),
        engine.origin(),
        engine.origin() + CONTAINER_HEIGHT
    );

    for offset in [0.0, 150.0, 200.0, 450.0, 799.0, 800.0, 0.0] {
        *page.scroll.lock().unwrap() = offset;
        engine.evaluate();
        let snapshot = engine.snapshot();
        println!(
            "scroll={offset:>5}: class={:?} style={:?}",
            snapshot.class_name, snapshot.style
        );
    }
}
