use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{ContactDraft, ContactError};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, Window};

pub(crate) const FORM_ID: &str = "contact-form";

pub(crate) struct ContactView {
    window: Window,
    form: HtmlFormElement,
    recipient: String,
    listeners: RefCell<Vec<EventListener>>,
}

impl ContactView {
    pub(crate) fn mount(window: &Window, document: &Document, recipient: &str) -> Option<Rc<Self>> {
        let form = document
            .get_element_by_id(FORM_ID)
            .and_then(|element| element.dyn_into::<HtmlFormElement>().ok());
        let Some(form) = form else {
            gloo::console::log!("contact: no form, skipping");
            return None;
        };
        if recipient.trim().is_empty() {
            gloo::console::warn!("contact: no recipient configured");
        }
        let view = Rc::new(Self {
            window: window.clone(),
            form,
            recipient: recipient.trim().to_string(),
            listeners: RefCell::new(Vec::new()),
        });
        view.install_listeners();
        Some(view)
    }

    fn install_listeners(self: &Rc<Self>) {
        let view = Rc::clone(self);
        let listener = EventListener::new_with_options(
            &self.form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                view.submit();
            },
        );
        self.listeners.borrow_mut().push(listener);
    }

    fn read_draft(&self) -> ContactDraft {
        ContactDraft {
            name: field_value(&self.form, "name"),
            email: field_value(&self.form, "email"),
            message: field_value(&self.form, "message"),
        }
    }

    fn submit(&self) {
        let result = self
            .read_draft()
            .validate()
            .and_then(|message| message.mailto_href(&self.recipient));
        match result {
            Ok(href) => {
                if self.window.location().set_href(&href).is_err() {
                    gloo::console::warn!("contact: mail handoff failed");
                    return;
                }
                self.form.reset();
            }
            Err(err) => self.notify(&err),
        }
    }

    fn notify(&self, err: &ContactError) {
        let _ = self.window.alert_with_message(&err.to_string());
    }
}

/// Value of the named control, looked up by `name` then by `id`.
pub(crate) fn field_value(form: &HtmlFormElement, name: &str) -> String {
    let selector = format!("[name=\"{name}\"], #{name}");
    let Some(element) = form.query_selector(&selector).ok().flatten() else {
        return String::new();
    };
    control_value(&element)
}

fn control_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}
