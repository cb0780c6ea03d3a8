use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use folio_core::config::ParticleConfig;
use folio_core::{MotionPolicy, ParticleField, Surface, SurfaceScale};
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use js_sys::{Date, Math};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::input::{device_pixel_ratio, viewport_size};

pub(crate) const CANVAS_ID: &str = "bg-particles";

struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl Surface for CanvasSurface<'_> {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, alpha: f64) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&particle_fill(alpha));
        if self.ctx.arc(x, y, radius, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
    }
}

pub(crate) fn particle_fill(alpha: f64) -> String {
    format!("rgba(255,255,255,{:.3})", alpha.clamp(0.0, 1.0))
}

pub(crate) struct ParticleView {
    window: Window,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    field: RefCell<ParticleField>,
    rng: RefCell<SmallRng>,
    frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl ParticleView {
    /// Returns `None` when the page has no particle canvas.
    pub(crate) fn mount(
        window: &Window,
        document: &Document,
        config: &ParticleConfig,
        motion: MotionPolicy,
    ) -> Option<Rc<Self>> {
        let Some(element) = document.get_element_by_id(CANVAS_ID) else {
            gloo::console::log!("particles: no canvas, skipping");
            return None;
        };
        let canvas = match element.dyn_into::<HtmlCanvasElement>() {
            Ok(canvas) => canvas,
            Err(_) => {
                gloo::console::warn!("particles: element is not a canvas");
                return None;
            }
        };
        let ctx = match context_2d(&canvas) {
            Ok(ctx) => ctx,
            Err(err) => {
                gloo::console::warn!("particles: no 2d context", err);
                return None;
            }
        };
        let mut field = ParticleField::new(config.clone());
        field.set_time_scale(motion.time_scale);
        let view = Rc::new(Self {
            window: window.clone(),
            canvas,
            ctx,
            field: RefCell::new(field),
            rng: RefCell::new(SmallRng::seed_from_u64(entropy_seed())),
            frame: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        view.resize();
        view.install_listeners();
        view.schedule_frame();
        gloo::console::log!("particles: mounted", view.field.borrow().len() as u32);
        Some(view)
    }

    fn install_listeners(self: &Rc<Self>) {
        let view = Rc::clone(self);
        let listener = EventListener::new(&self.window, "resize", move |_event| {
            view.resize();
        });
        self.listeners.borrow_mut().push(listener);
    }

    /// Rescales the backing store for the current viewport and regenerates
    /// the particles. The pixel-ratio transform is set here and nowhere else.
    fn resize(&self) {
        let (width, height) = viewport_size(&self.window);
        let scale = SurfaceScale::new(width, height, device_pixel_ratio(&self.window));
        self.canvas.set_width(scale.pixel_width);
        self.canvas.set_height(scale.pixel_height);
        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", scale.css_width));
        let _ = style.set_property("height", &format!("{}px", scale.css_height));
        let _ = self
            .ctx
            .set_transform(scale.ratio, 0.0, 0.0, scale.ratio, 0.0, 0.0);
        let mut rng = self.rng.borrow_mut();
        self.field
            .borrow_mut()
            .configure(scale.css_width, scale.css_height, &mut *rng);
    }

    fn schedule_frame(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let view = Rc::clone(self);
        let handle = request_animation_frame(move |_timestamp| {
            view.frame.borrow_mut().take();
            view.tick();
            view.schedule_frame();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn tick(&self) {
        let mut surface = CanvasSurface { ctx: &self.ctx };
        self.field.borrow_mut().advance_frame(&mut surface);
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

fn entropy_seed() -> u64 {
    let random = (Math::random() * u32::MAX as f64) as u64;
    let now = Date::now().max(0.0) as u64;
    (random << 32) ^ now
}
