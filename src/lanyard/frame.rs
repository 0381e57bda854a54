use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop that stops when dropped.
///
/// The callback receives the wall time since the previous frame in seconds.
pub struct FrameLoop {
    tick: Tick,
    handle: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

fn request(tick: &Tick, handle: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        handle.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f32) + 'static) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(true));

        let tick_clone = tick.clone();
        let handle_clone = handle.clone();
        let running_clone = running.clone();
        let mut last = Instant::now();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_clone.set(None);
            if !running_clone.get() {
                return;
            }
            let now = Instant::now();
            let dt = (now - last).as_secs_f32();
            last = now;
            on_frame(dt);
            if running_clone.get() {
                request(&tick_clone, &handle_clone);
            }
        }) as Box<dyn FnMut()>));
        request(&tick, &handle);

        Self {
            tick,
            handle,
            running,
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference to itself.
        self.tick.borrow_mut().take();
    }
}
