use folio_core::config::MotionConfig;
use folio_core::MotionPolicy;
use js_sys::{Function, Reflect};
use wasm_bindgen::JsCast;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub(crate) fn load_motion_policy(config: &MotionConfig) -> MotionPolicy {
    let reduced = prefers_reduced_motion();
    if reduced {
        gloo::console::log!("motion: reduced");
    }
    MotionPolicy::new(reduced, config)
}

fn prefers_reduced_motion() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(match_media) = Reflect::get(&window, &"matchMedia".into()) else {
        return false;
    };
    let Ok(match_media) = match_media.dyn_into::<Function>() else {
        return false;
    };
    let Ok(query) = match_media.call1(&window, &REDUCED_MOTION_QUERY.into()) else {
        return false;
    };
    Reflect::get(&query, &"matches".into())
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
}
