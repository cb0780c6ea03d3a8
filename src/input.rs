use folio_core::Rect;
use wasm_bindgen::JsCast;
use web_sys::{DomRect, Element, Event, MouseEvent, Window};

/// Selector for elements that grow the glow marker on hover.
pub(crate) const INTERACTIVE_SELECTOR: &str = "button, a, .magnetic, .btn";

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PointerSample {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerSample {
    pub(crate) fn from_event(event: &Event) -> Option<Self> {
        let event = event.dyn_ref::<MouseEvent>()?;
        Some(Self {
            client_x: event.client_x() as f64,
            client_y: event.client_y() as f64,
        })
    }
}

pub(crate) fn rect_from_dom(rect: &DomRect) -> Rect {
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

pub(crate) fn element_rect(element: &Element) -> Rect {
    rect_from_dom(&element.get_bounding_client_rect())
}

pub(crate) fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    (width.max(0.0), height.max(0.0))
}

pub(crate) fn device_pixel_ratio(window: &Window) -> f64 {
    let ratio = window.device_pixel_ratio();
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}
