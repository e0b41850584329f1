//! The hero banner: a draggable hang glider drifting over the page header.
//!
//! [`HeroScene`] owns everything the banner registers with the browser (the
//! animation frame callback, the idle interval and the pointer listeners).
//! Dropping it detaches all of them.

use crate::dom;
use crate::input;
use crate::render::{self, GpuState};
use glam::Vec2;
use gloo_timers::callback::Interval;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::{
    hits_glider, ndc_to_pixels, pointer_on_drag_plane, Camera, GliderController, Pose,
    SceneUniforms, DRAG_PLANE_Z, IDLE_TICK_MS,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct HeroState {
    controller: GliderController<StdRng>,
    canvas: web::HtmlCanvasElement,
    gpu: Option<GpuState<'static>>,
    fallback: Option<web::HtmlElement>,
    started: Instant,
}

impl HeroState {
    fn camera(&self) -> Camera {
        Camera::hero(input::canvas_aspect(&self.canvas))
    }

    fn frame(&mut self) {
        let (w, h) = dom::sync_canvas_backing_size(&self.canvas);
        self.controller.on_frame(self.started.elapsed().as_secs_f32());
        let pose = self.controller.pose();
        let camera = self.camera();
        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize_if_needed(w, h);
            match gpu.render(&SceneUniforms::new(&camera, &pose)) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
                Err(e) => log::warn!("frame skipped: {:?}", e),
            }
        } else if let Some(el) = self.fallback.as_ref() {
            place_fallback(el, &self.canvas, &camera, &pose);
        }
    }

    fn pointer_down(&mut self, ndc: Vec2) -> bool {
        let camera = self.camera();
        if !hits_glider(&camera, ndc, self.controller.pose().translation) {
            return false;
        }
        match pointer_on_drag_plane(&camera, ndc) {
            Some(p) => {
                self.controller.on_drag_start(p);
                true
            }
            None => false,
        }
    }

    fn pointer_move(&mut self, ndc: Vec2) {
        let camera = self.camera();
        if self.controller.is_dragging() {
            if let Some(p) = pointer_on_drag_plane(&camera, ndc) {
                self.controller.on_drag_move(p);
            }
            return;
        }
        let over = hits_glider(&camera, ndc, self.controller.pose().translation);
        set_cursor(&self.canvas, if over { "grab" } else { "" });
    }
}

/// Moves the DOM stand-in to where the glider would be drawn.
fn place_fallback(
    el: &web::HtmlElement,
    canvas: &web::HtmlCanvasElement,
    camera: &Camera,
    pose: &Pose,
) {
    let Some(ndc) = camera.project(pose.translation.extend(DRAG_PLANE_Z)) else {
        return;
    };
    let rect = canvas.get_bounding_client_rect();
    let (w, h) = (rect.width() as f32, rect.height() as f32);
    let px = ndc_to_pixels(ndc, w, h);
    let transform = format!(
        "translate({:.1}px, {:.1}px) rotate({:.3}rad)",
        px.x - w * 0.5,
        px.y - h * 0.5,
        -pose.roll
    );
    let _ = el.style().set_property("transform", &transform);
}

fn set_cursor(canvas: &web::HtmlCanvasElement, cursor: &str) {
    let _ = canvas.style().set_property("cursor", cursor);
}

fn request_frame(tick: &FrameCallback) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let callback = tick.as_ref()?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::PointerEvent)>,
}

pub struct HeroScene {
    state: Rc<RefCell<HeroState>>,
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: FrameCallback,
    interval: Option<Interval>,
    listeners: Vec<Listener>,
}

impl HeroScene {
    /// Size the canvas, try WebGPU, then start the frame loop, the idle timer
    /// and pointer handling. Without WebGPU the `fallback` element is shown
    /// and moved instead.
    pub async fn mount(canvas: web::HtmlCanvasElement, fallback: Option<web::HtmlElement>) -> Self {
        dom::sync_canvas_backing_size(&canvas);
        let gpu = render::init_gpu(&canvas).await;
        if let Some(el) = fallback.as_ref() {
            if gpu.is_none() {
                log::warn!("WebGPU unavailable; using the DOM glider");
                let _ = el.remove_attribute("hidden");
            } else {
                let _ = el.set_attribute("hidden", "");
            }
        }
        let state = HeroState {
            controller: GliderController::new(StdRng::from_entropy()),
            canvas,
            gpu,
            fallback,
            started: Instant::now(),
        };

        let mut scene = Self {
            state: Rc::new(RefCell::new(state)),
            running: Rc::new(Cell::new(true)),
            raf_id: Rc::new(Cell::new(None)),
            tick: Rc::new(RefCell::new(None)),
            interval: None,
            listeners: Vec::new(),
        };
        scene.start_loop();
        scene.start_idle_timer();
        scene.wire_pointer();
        log::info!("hero scene mounted");
        scene
    }

    fn start_loop(&self) {
        let tick = self.tick.clone();
        let state = self.state.clone();
        let running = self.running.clone();
        let raf_id = self.raf_id.clone();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !running.get() {
                return;
            }
            state.borrow_mut().frame();
            raf_id.set(request_frame(&tick));
        }) as Box<dyn FnMut()>));
        self.raf_id.set(request_frame(&self.tick));
    }

    fn start_idle_timer(&mut self) {
        let state = self.state.clone();
        self.interval = Some(Interval::new(IDLE_TICK_MS, move || {
            state.borrow_mut().controller.on_idle_tick();
        }));
    }

    fn listen(&mut self, event: &'static str, handler: impl FnMut(web::PointerEvent) + 'static) {
        let target: web::EventTarget = self.state.borrow().canvas.clone().into();
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>);
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        self.listeners.push(Listener {
            target,
            event,
            closure,
        });
    }

    fn wire_pointer(&mut self) {
        let state = self.state.clone();
        self.listen("pointerdown", move |ev| {
            let mut st = state.borrow_mut();
            let ndc = input::pointer_ndc(&ev, &st.canvas);
            if st.pointer_down(ndc) {
                let _ = st.canvas.set_pointer_capture(ev.pointer_id());
                set_cursor(&st.canvas, "grabbing");
                ev.prevent_default();
            }
        });

        let state = self.state.clone();
        self.listen("pointermove", move |ev| {
            let mut st = state.borrow_mut();
            let ndc = input::pointer_ndc(&ev, &st.canvas);
            st.pointer_move(ndc);
        });

        let state = self.state.clone();
        self.listen("pointerup", move |ev| {
            let mut st = state.borrow_mut();
            if !st.controller.is_dragging() {
                return;
            }
            st.controller.on_drag_end();
            let _ = st.canvas.release_pointer_capture(ev.pointer_id());
            set_cursor(&st.canvas, "");
        });

        for &event in input::DRAG_CANCEL_EVENTS {
            let state = self.state.clone();
            self.listen(event, move |_ev| {
                let mut st = state.borrow_mut();
                if st.controller.is_dragging() {
                    st.controller.on_drag_cancel();
                    set_cursor(&st.canvas, "");
                }
            });
        }
    }
}

impl Drop for HeroScene {
    fn drop(&mut self) {
        self.running.set(false);
        if let (Some(window), Some(id)) = (web::window(), self.raf_id.take()) {
            let _ = window.cancel_animation_frame(id);
        }
        // Breaks the frame callback's reference to itself.
        self.tick.borrow_mut().take();
        // Dropping an Interval clears it.
        drop(self.interval.take());
        for l in self.listeners.drain(..) {
            let _ = l
                .target
                .remove_event_listener_with_callback(l.event, l.closure.as_ref().unchecked_ref());
        }
        log::info!("hero scene stopped");
    }
}
