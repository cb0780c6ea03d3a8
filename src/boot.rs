use std::cell::Cell;

pub(crate) const LOADED_CLASS: &str = "is-loaded";

thread_local! {
    static READY_SENT: Cell<bool> = Cell::new(false);
}

/// Marks the body as loaded once so CSS can start the hero entrance.
pub(crate) fn ready() {
    let already_sent = READY_SENT.with(|flag| flag.replace(true));
    if already_sent {
        return;
    }
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let _ = body.class_list().add_1(LOADED_CLASS);
    gloo::console::log!("portfolio loaded");
}
