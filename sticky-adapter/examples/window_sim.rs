// Example: two sticky elements sharing one watcher pair over a simulated window.
use std::sync::{Arc, Mutex};

use sticky::{
    BoundingBox, ContainerHandle, ElementHandle, EventSource, Position, StickyEngine,
    StickyOffset, StickyOptions, Viewport, ViewportEvent, WatchHandler,
};
use sticky_adapter::{Sticky, StickyWatchers};

/// A simulated window: keeps the installed physical listeners and fires them like a real
/// event loop would.
#[derive(Default)]
struct Window {
    scroll: Mutex<f64>,
    listeners: Mutex<Vec<(ViewportEvent, WatchHandler)>>,
}

impl Window {
    fn fire(&self, event: ViewportEvent) {
        let listeners: Vec<WatchHandler> = self
            .listeners
            .lock()
            .unwrap()
            .iter()
            .filter(|(e, _)| *e == event)
            .map(|(_, h)| Arc::clone(h))
            .collect();
        for listener in listeners {
            listener();
        }
    }

    fn scroll_to(&self, offset: f64) {
        *self.scroll.lock().unwrap() = offset;
        self.fire(ViewportEvent::Scroll);
    }
}

impl EventSource for Window {
    fn install(&self, event: ViewportEvent, on_fire: WatchHandler) {
        println!("window: install {event:?} listener");
        self.listeners.lock().unwrap().push((event, on_fire));
    }

    fn remove(&self, event: ViewportEvent) {
        println!("window: remove {event:?} listener");
        self.listeners.lock().unwrap().retain(|(e, _)| *e != event);
    }
}

impl Viewport for Window {
    fn page_y_offset(&self) -> f64 {
        *self.scroll.lock().unwrap()
    }
}

/// One sticky element at the top of its own container section.
struct Section {
    window: Arc<Window>,
    top: Mutex<f64>,
    height: f64,
    container_height: f64,
    element_position: Mutex<Position>,
    correction: Mutex<f64>,
}

impl Section {
    fn new(window: &Arc<Window>, top: f64, height: f64, container_height: f64) -> Arc<Self> {
        Arc::new(Self {
            window: Arc::clone(window),
            top: Mutex::new(top),
            height,
            container_height,
            element_position: Mutex::new(Position::Static),
            correction: Mutex::new(0.0),
        })
    }
}

impl ElementHandle for Section {
    fn bounding_box(&self) -> BoundingBox {
        let scroll = self.window.page_y_offset();
        BoundingBox::new(*self.top.lock().unwrap() - scroll, 0.0, 640.0, self.height)
    }

    fn position(&self) -> Position {
        *self.element_position.lock().unwrap()
    }

    fn set_position(&self, position: Position) {
        *self.element_position.lock().unwrap() = position;
    }
}

impl ContainerHandle for Section {
    fn bounding_box(&self) -> BoundingBox {
        let scroll = self.window.page_y_offset();
        BoundingBox::new(
            *self.top.lock().unwrap() - scroll,
            0.0,
            640.0,
            self.container_height,
        )
    }

    fn update_top_correction(&self, offset: f64) {
        *self.correction.lock().unwrap() = offset;
    }
}

fn sticky_section(window: &Arc<Window>, section: &Arc<Section>, name: &str) -> Sticky {
    let name = name.to_owned();
    Sticky::new(StickyEngine::new(
        Arc::clone(window) as _,
        Arc::clone(section) as _,
        Arc::clone(section) as _,
        StickyOffset::default(),
        StickyOptions::new()
            .with_class_name(name.clone())
            .with_on_state_change(Some(move |sticky| {
                println!("  {name}: sticky={sticky}");
            })),
    ))
}

fn main() {
    let window = Arc::new(Window::default());
    let watchers = StickyWatchers::new(Arc::clone(&window) as _);

    let news = Section::new(&window, 300.0, 40.0, 800.0);
    let sports = Section::new(&window, 1100.0, 40.0, 800.0);

    let mut first = sticky_section(&window, &news, "news");
    let mut second = sticky_section(&window, &sports, "sports");

    // Only the first attach installs physical listeners; the second one shares them.
    first.attach(&watchers);
    second.attach(&watchers);
    println!(
        "scroll subscribers={} resize subscribers={}",
        watchers.scroll.subscriber_count(),
        watchers.resize.subscriber_count()
    );

    for offset in [0.0, 350.0, 1200.0, 2000.0] {
        println!("scroll -> {offset}");
        window.scroll_to(offset);
        println!(
            "  corrections: news={} sports={}",
            news.correction.lock().unwrap(),
            sports.correction.lock().unwrap()
        );
    }

    // A reflow moves the sections; resize re-measures and re-evaluates everything.
    *news.top.lock().unwrap() = 500.0;
    *sports.top.lock().unwrap() = 1300.0;
    println!("resize after reflow");
    window.fire(ViewportEvent::Resize);
    println!(
        "  news origin now {}",
        first.with_engine(|engine| engine.origin())
    );

    // The last detach removes the physical listeners again.
    first.detach();
    second.detach();
}
