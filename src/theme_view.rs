use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{Theme, ThemePreference};
use gloo::events::EventListener;
use web_sys::{Document, Element};

use crate::persisted_store::LocalStore;

pub(crate) const TOGGLE_ID: &str = "theme-toggle";

pub(crate) struct ThemeView {
    document: Document,
    toggle: Option<Element>,
    preference: RefCell<ThemePreference<LocalStore>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl ThemeView {
    /// Applies the saved theme right away; the toggle button is optional.
    pub(crate) fn mount(document: &Document) -> Rc<Self> {
        let preference = ThemePreference::load(LocalStore::open());
        let view = Rc::new(Self {
            document: document.clone(),
            toggle: document.get_element_by_id(TOGGLE_ID),
            preference: RefCell::new(preference),
            listeners: RefCell::new(Vec::new()),
        });
        view.apply(view.current());
        view.install_listeners();
        view
    }

    pub(crate) fn current(&self) -> Theme {
        self.preference.borrow().current()
    }

    fn install_listeners(self: &Rc<Self>) {
        let Some(toggle) = self.toggle.as_ref() else {
            gloo::console::log!("theme: no toggle button");
            return;
        };
        let view = Rc::clone(self);
        let listener = EventListener::new(toggle, "click", move |_event| {
            view.toggle();
        });
        self.listeners.borrow_mut().push(listener);
    }

    fn toggle(&self) {
        let result = self.preference.borrow_mut().toggle();
        if let Err(err) = result {
            gloo::console::warn!("theme: persist failed", err);
        }
        self.apply(self.current());
    }

    fn apply(&self, theme: Theme) {
        apply_theme(&self.document, self.toggle.as_ref(), theme);
    }
}

pub(crate) fn apply_theme(document: &Document, toggle: Option<&Element>, theme: Theme) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Some(body) = document.body() {
        let classes = body.class_list();
        let _ = classes.remove_1(theme.toggled().as_str());
        let _ = classes.add_1(theme.as_str());
    }
    if let Some(toggle) = toggle {
        let pressed = if theme.is_dark() { "true" } else { "false" };
        let _ = toggle.set_attribute("aria-pressed", pressed);
    }
}
