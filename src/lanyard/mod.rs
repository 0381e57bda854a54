//! Interactive lanyard badge drawn on a full-viewport canvas over the home
//! view. The chain is rebuilt every time the badge is shown; the WebGPU
//! device is created once and reused.

mod frame;
mod render;

use crate::constants::*;
use crate::dom::{self, Listener};
use crate::input::{self, CanvasRect};
use folio_core::BandRig;
use frame::FrameLoop;
use glam::Vec2;
use render::GpuState;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

enum GpuSlot {
    Uninit,
    Pending,
    Ready(Box<GpuState>),
    Failed,
}

struct Inner {
    canvas: web::HtmlCanvasElement,
    rig: BandRig,
    gpu: GpuSlot,
    frame: Option<FrameLoop>,
    listeners: Vec<Listener>,
    visible: bool,
}

#[derive(Clone)]
pub struct Lanyard {
    inner: Rc<RefCell<Inner>>,
}

fn set_body_cursor(css: &str) {
    if let Some(body) = dom::window_document().and_then(|d| d.body()) {
        _ = body.style().set_property("cursor", css);
    }
}

fn pointer_ndc(canvas: &web::HtmlCanvasElement, ev: &web::Event) -> Option<Vec2> {
    let ev = ev.dyn_ref::<web::PointerEvent>()?;
    let r = canvas.get_bounding_client_rect();
    let rect = CanvasRect {
        left: r.left() as f32,
        top: r.top() as f32,
        width: r.width() as f32,
        height: r.height() as f32,
    };
    input::client_to_ndc(ev.client_x() as f32, ev.client_y() as f32, rect)
}

fn pointer_id(ev: &web::Event) -> Option<i32> {
    ev.dyn_ref::<web::PointerEvent>().map(|p| p.pointer_id())
}

/// Run `f` against the rig and mirror the resulting cursor onto the body.
fn with_rig(weak: &Weak<RefCell<Inner>>, ev: &web::Event, f: impl FnOnce(&mut BandRig, &web::HtmlCanvasElement, &web::Event)) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let mut inner = shared.borrow_mut();
    let Inner { rig, canvas, .. } = &mut *inner;
    f(rig, canvas, ev);
    set_body_cursor(rig.cursor().as_css());
}

fn pointer_listeners(shared: &Rc<RefCell<Inner>>, canvas: &web::HtmlCanvasElement) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = Vec::with_capacity(5);

    let weak = Rc::downgrade(shared);
    listeners.push(Listener::new(canvas, "pointermove", move |ev| {
        with_rig(&weak, &ev, |rig, canvas, ev| {
            if let Some(ndc) = pointer_ndc(canvas, ev) {
                rig.pointer_move(ndc);
            }
        });
    })?);

    let weak = Rc::downgrade(shared);
    listeners.push(Listener::new(canvas, "pointerdown", move |ev| {
        with_rig(&weak, &ev, |rig, canvas, ev| {
            let Some(ndc) = pointer_ndc(canvas, ev) else {
                return;
            };
            if rig.pointer_down(ndc) {
                ev.prevent_default();
                if let Some(id) = pointer_id(ev) {
                    _ = canvas.set_pointer_capture(id);
                }
            }
        });
    })?);

    for event in ["pointerup", "pointercancel"] {
        let weak = Rc::downgrade(shared);
        listeners.push(Listener::new(canvas, event, move |ev| {
            with_rig(&weak, &ev, |rig, canvas, ev| {
                if rig.pointer_up() {
                    if let Some(id) = pointer_id(ev) {
                        _ = canvas.release_pointer_capture(id);
                    }
                }
            });
        })?);
    }

    let weak = Rc::downgrade(shared);
    listeners.push(Listener::new(canvas, "pointerleave", move |ev| {
        with_rig(&weak, &ev, |rig, _, _| rig.pointer_leave());
    })?);

    Ok(listeners)
}

fn start_gpu(shared: &Rc<RefCell<Inner>>) {
    let canvas = {
        let mut inner = shared.borrow_mut();
        if !matches!(inner.gpu, GpuSlot::Uninit) {
            return;
        }
        inner.gpu = GpuSlot::Pending;
        inner.canvas.clone()
    };
    let weak = Rc::downgrade(shared);
    spawn_local(async move {
        let result = GpuState::new(canvas).await;
        let Some(shared) = weak.upgrade() else {
            return;
        };
        shared.borrow_mut().gpu = match result {
            Ok(gpu) => GpuSlot::Ready(Box::new(gpu)),
            Err(e) => {
                log::error!("[lanyard] WebGPU unavailable, badge will not render: {:?}", e);
                GpuSlot::Failed
            }
        };
    });
}

fn frame_loop(shared: &Rc<RefCell<Inner>>) -> FrameLoop {
    let weak = Rc::downgrade(shared);
    FrameLoop::start(move |dt| {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let mut inner = shared.borrow_mut();
        let Inner {
            rig, gpu, canvas, ..
        } = &mut *inner;
        rig.frame(dt);
        if let GpuSlot::Ready(gpu) = gpu {
            gpu.resize(canvas.width(), canvas.height());
            gpu.render(rig);
        }
    })
}

impl Lanyard {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(dom::js_err)?
            .dyn_into()
            .map_err(|_| anyhow::anyhow!("canvas element has unexpected type"))?;
        canvas.set_id(LANYARD_CANVAS_ID);
        canvas.set_class_name(LANYARD_WRAPPER_CLASS);
        Ok(Self {
            inner: Rc::new(RefCell::new(Inner {
                canvas,
                rig: BandRig::default(),
                gpu: GpuSlot::Uninit,
                frame: None,
                listeners: Vec::new(),
                visible: false,
            })),
        })
    }

    pub fn is_visible(&self) -> bool {
        self.inner.borrow().visible
    }

    /// Show or hide the badge. Showing rebuilds the chain from its rest pose.
    pub fn set_visible(&self, visible: bool) {
        if visible == self.is_visible() {
            return;
        }
        if visible {
            if let Err(e) = self.show() {
                log::error!("[lanyard] show failed: {:?}", e);
                self.hide();
            }
        } else {
            self.hide();
        }
    }

    /// Match the canvas backing store and camera to the current layout.
    pub fn on_resize(&self) {
        let mut inner = self.inner.borrow_mut();
        if !inner.visible {
            return;
        }
        dom::sync_canvas_backing_size(&inner.canvas);
        let aspect = input::aspect(inner.canvas.width(), inner.canvas.height());
        inner.rig.set_aspect(aspect);
    }

    fn show(&self) -> anyhow::Result<()> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
        let canvas = self.inner.borrow().canvas.clone();
        body.append_child(&canvas).map_err(dom::js_err)?;

        let listeners = pointer_listeners(&self.inner, &canvas)?;
        {
            let mut inner = self.inner.borrow_mut();
            inner.visible = true;
            inner.listeners = listeners;
            inner.rig.build();
        }
        self.on_resize();
        start_gpu(&self.inner);
        let frame = frame_loop(&self.inner);
        self.inner.borrow_mut().frame = Some(frame);
        log::info!("[lanyard] shown");
        Ok(())
    }

    fn hide(&self) {
        let (frame, listeners, canvas) = {
            let mut inner = self.inner.borrow_mut();
            inner.visible = false;
            (
                inner.frame.take(),
                std::mem::take(&mut inner.listeners),
                inner.canvas.clone(),
            )
        };
        drop(frame);
        drop(listeners);
        canvas.remove();
        set_body_cursor(folio_core::Cursor::Auto.as_css());
        log::info!("[lanyard] hidden");
    }
}
