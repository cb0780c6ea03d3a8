use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::config::PointerConfig;
use folio_core::pointer::{magnetic_offset, parallax, tilt, MagneticOffset, Tilt};
use folio_core::{Glow, MotionPolicy};
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::{Document, Element, Window};

use crate::dom::{query, query_all, set_style};
use crate::input::{element_rect, viewport_size, PointerSample, INTERACTIVE_SELECTOR};

pub(crate) const GLOW_ID: &str = "cursor-glow";
pub(crate) const MAGNETIC_SELECTOR: &str = ".magnetic";
pub(crate) const TILT_SELECTOR: &str = ".tilt-card";
pub(crate) const HERO_CARD_SELECTOR: &str = ".hero-card";

const EASE_OUT: &str = "cubic-bezier(0.215, 0.61, 0.355, 1)";
const EASE_OVERSHOOT: &str = "cubic-bezier(0.34, 1.56, 0.64, 1)";
const MAGNETIC_MOVE_MS: u32 = 250;
const MAGNETIC_RETURN_MS: u32 = 400;
const TILT_MOVE_MS: u32 = 360;
const TILT_RETURN_MS: u32 = 600;
const PARALLAX_MS: u32 = 900;
const TILT_SHADOW_ACTIVE: &str = "0 18px 40px rgba(2,6,23,0.6)";
const TILT_SHADOW_REST: &str = "0 6px 18px rgba(2,6,23,0.38)";
const MAX_FRAME_DT_MS: f64 = 50.0;

fn transition(property: &str, ms: u32, easing: &str) -> String {
    format!("{property} {ms}ms {easing}")
}

pub(crate) struct PointerView {
    window: Window,
    config: PointerConfig,
    motion: MotionPolicy,
    glow_element: Option<Element>,
    glow: RefCell<Glow>,
    last_tick_ms: Cell<Option<f64>>,
    frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl PointerView {
    pub(crate) fn mount(
        window: &Window,
        document: &Document,
        config: &PointerConfig,
        motion: MotionPolicy,
    ) -> Rc<Self> {
        let (width, height) = viewport_size(window);
        let smoothing_ms = if motion.smooth_glow() {
            config.glow_smoothing_ms
        } else {
            0.0
        };
        let glow_element = document.get_element_by_id(GLOW_ID);
        if glow_element.is_none() {
            gloo::console::log!("pointer: no glow marker");
        }
        let view = Rc::new(Self {
            window: window.clone(),
            config: config.clone(),
            motion,
            glow_element,
            glow: RefCell::new(Glow::new(width * 0.5, height * 0.5, smoothing_ms)),
            last_tick_ms: Cell::new(None),
            frame: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        view.render_glow();
        view.install_glow_listeners(document);
        if motion.hover_effects() {
            view.install_magnetic(document);
            view.install_tilt(document);
            view.install_parallax(document);
        }
        view
    }

    fn install_glow_listeners(self: &Rc<Self>, document: &Document) {
        if self.glow_element.is_none() {
            return;
        }
        let mut listeners = Vec::new();

        let view = Rc::clone(self);
        listeners.push(EventListener::new(&self.window, "mousemove", move |event| {
            let Some(sample) = PointerSample::from_event(event) else {
                return;
            };
            view.glow
                .borrow_mut()
                .pointer_move(sample.client_x, sample.client_y);
            view.wake_glow();
        }));

        let view = Rc::clone(self);
        listeners.push(EventListener::new(&self.window, "mousedown", move |_event| {
            view.glow.borrow_mut().press();
            view.wake_glow();
        }));

        let view = Rc::clone(self);
        listeners.push(EventListener::new(&self.window, "mouseup", move |_event| {
            view.glow.borrow_mut().release();
            view.wake_glow();
        }));

        for element in query_all(document, INTERACTIVE_SELECTOR) {
            let view = Rc::clone(self);
            listeners.push(EventListener::new(&element, "mouseenter", move |_event| {
                view.glow.borrow_mut().hover(true);
                view.wake_glow();
            }));
            let view = Rc::clone(self);
            listeners.push(EventListener::new(&element, "mouseleave", move |_event| {
                view.glow.borrow_mut().hover(false);
                view.wake_glow();
            }));
        }

        self.listeners.borrow_mut().extend(listeners);
    }

    fn install_magnetic(self: &Rc<Self>, document: &Document) {
        let mut listeners = Vec::new();
        for element in query_all(document, MAGNETIC_SELECTOR) {
            let config = self.config.clone();
            let target = element.clone();
            listeners.push(EventListener::new(&element, "mousemove", move |event| {
                let Some(sample) = PointerSample::from_event(event) else {
                    return;
                };
                let offset = magnetic_offset(
                    element_rect(&target),
                    sample.client_x,
                    sample.client_y,
                    &config,
                );
                apply_magnetic(&target, &offset, MAGNETIC_MOVE_MS, EASE_OUT);
            }));
            let target = element.clone();
            listeners.push(EventListener::new(&element, "mouseleave", move |_event| {
                apply_magnetic(&target, &MagneticOffset::REST, MAGNETIC_RETURN_MS, EASE_OVERSHOOT);
            }));
        }
        self.listeners.borrow_mut().extend(listeners);
    }

    fn install_tilt(self: &Rc<Self>, document: &Document) {
        let mut listeners = Vec::new();
        for card in query_all(document, TILT_SELECTOR) {
            let config = self.config.clone();
            let target = card.clone();
            listeners.push(EventListener::new(&card, "mousemove", move |event| {
                let Some(sample) = PointerSample::from_event(event) else {
                    return;
                };
                let angles = tilt(element_rect(&target), sample.client_x, sample.client_y, &config);
                apply_tilt(&target, &angles, TILT_SHADOW_ACTIVE, TILT_MOVE_MS, EASE_OUT);
            }));
            let neutral = Tilt::neutral(&self.config);
            let target = card.clone();
            listeners.push(EventListener::new(&card, "mouseleave", move |_event| {
                apply_tilt(&target, &neutral, TILT_SHADOW_REST, TILT_RETURN_MS, EASE_OVERSHOOT);
            }));
        }
        self.listeners.borrow_mut().extend(listeners);
    }

    fn install_parallax(self: &Rc<Self>, document: &Document) {
        let Some(card) = query(document, HERO_CARD_SELECTOR) else {
            return;
        };
        set_style(&card, "transition", &transition("transform", PARALLAX_MS, EASE_OUT));
        let window = self.window.clone();
        let listener = EventListener::new(&self.window, "mousemove", move |event| {
            let Some(sample) = PointerSample::from_event(event) else {
                return;
            };
            let (width, height) = viewport_size(&window);
            let shift = parallax(sample.client_x, sample.client_y, width, height);
            set_style(&card, "transform", &shift.to_css());
        });
        self.listeners.borrow_mut().push(listener);
    }

    fn wake_glow(self: &Rc<Self>) {
        if !self.motion.smooth_glow() {
            self.glow.borrow_mut().snap();
            self.render_glow();
            return;
        }
        if self.frame.borrow().is_some() {
            return;
        }
        let view = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| {
            view.glow_frame(timestamp);
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn glow_frame(self: &Rc<Self>, timestamp: f64) {
        self.frame.borrow_mut().take();
        let dt_ms = match self.last_tick_ms.get() {
            Some(prev) => (timestamp - prev).clamp(0.0, MAX_FRAME_DT_MS),
            None => 16.0,
        };
        self.last_tick_ms.set(Some(timestamp));
        let settled = {
            let mut glow = self.glow.borrow_mut();
            glow.step(dt_ms);
            if glow.is_settled() {
                glow.snap();
                true
            } else {
                false
            }
        };
        self.render_glow();
        if settled {
            self.last_tick_ms.set(None);
        } else {
            self.wake_glow();
        }
    }

    fn render_glow(&self) {
        let Some(element) = self.glow_element.as_ref() else {
            return;
        };
        set_style(element, "transform", &self.glow.borrow().to_css());
    }
}

fn apply_magnetic(element: &Element, offset: &MagneticOffset, ms: u32, easing: &str) {
    set_style(element, "transition", &transition("transform", ms, easing));
    set_style(element, "transform", &offset.to_css());
}

fn apply_tilt(element: &Element, angles: &Tilt, shadow: &str, ms: u32, easing: &str) {
    let timing = format!(
        "{}, {}",
        transition("transform", ms, easing),
        transition("box-shadow", ms, easing)
    );
    set_style(element, "transition", &timing);
    set_style(element, "transform", &angles.to_css());
    set_style(element, "box-shadow", shadow);
}
