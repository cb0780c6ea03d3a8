use std::cell::RefCell;
use std::rc::Rc;

use folio_core::config::ScrollConfig;
use folio_core::scroll_spy::nav_states;
use folio_core::{MotionPolicy, RevealTracker, ScrollSpy};
use gloo::events::EventListener;
use web_sys::{Document, Element, Window};

use crate::dom::{query_all, set_class};
use crate::input::viewport_size;

pub(crate) const SECTION_SELECTOR: &str = "header[id], section[id]";
pub(crate) const NAV_LINK_SELECTOR: &str = ".nav-links a, nav ul li a";
pub(crate) const REVEAL_SELECTOR: &str = ".glass, .project-card, .card, .showcase";
pub(crate) const ACTIVE_CLASS: &str = "active";
pub(crate) const REVEALED_CLASS: &str = "is-revealed";

struct NavLink {
    element: Element,
    href: String,
}

pub(crate) struct ScrollView {
    window: Window,
    spy: ScrollSpy,
    sections: Vec<(Element, String)>,
    links: Vec<NavLink>,
    reveal_targets: Vec<Element>,
    reveal: RefCell<RevealTracker>,
    listeners: RefCell<Vec<EventListener>>,
}

impl ScrollView {
    pub(crate) fn mount(
        window: &Window,
        document: &Document,
        config: &ScrollConfig,
        motion: MotionPolicy,
    ) -> Rc<Self> {
        let sections = query_all(document, SECTION_SELECTOR)
            .into_iter()
            .map(|element| {
                let id = element.id();
                (element, id)
            })
            .collect();
        let links = query_all(document, NAV_LINK_SELECTOR)
            .into_iter()
            .map(|element| NavLink {
                href: element.get_attribute("href").unwrap_or_default(),
                element,
            })
            .collect();
        let reveal_targets = query_all(document, REVEAL_SELECTOR);
        let reveal = RevealTracker::new(config.reveal_ratio, reveal_targets.len());
        let view = Rc::new(Self {
            window: window.clone(),
            spy: ScrollSpy::new(config.active_ratio),
            sections,
            links,
            reveal_targets,
            reveal: RefCell::new(reveal),
            listeners: RefCell::new(Vec::new()),
        });
        if !motion.staged_reveal() {
            view.reveal_all();
        }
        view.on_scroll();
        view.install_listeners();
        view
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();
        for event in ["scroll", "resize"] {
            let view = Rc::clone(self);
            listeners.push(EventListener::new(&self.window, event, move |_event| {
                view.on_scroll();
            }));
        }
        *self.listeners.borrow_mut() = listeners;
    }

    fn on_scroll(&self) {
        let (_, viewport_height) = viewport_size(&self.window);
        self.update_active_link(viewport_height);
        self.update_reveals(viewport_height);
    }

    fn update_active_link(&self, viewport_height: f64) {
        if self.sections.is_empty() || self.links.is_empty() {
            return;
        }
        let tops: Vec<f64> = self
            .sections
            .iter()
            .map(|(element, _)| element.get_bounding_client_rect().top())
            .collect();
        let Some(index) = self.spy.active_index(&tops, viewport_height) else {
            return;
        };
        let active_id = &self.sections[index].1;
        let hrefs: Vec<&str> = self.links.iter().map(|link| link.href.as_str()).collect();
        for (link, active) in self.links.iter().zip(nav_states(&hrefs, active_id)) {
            set_class(&link.element, ACTIVE_CLASS, active);
        }
    }

    fn update_reveals(&self, viewport_height: f64) {
        if self.reveal.borrow().all_revealed() {
            return;
        }
        let tops: Vec<f64> = self
            .reveal_targets
            .iter()
            .map(|element| element.get_bounding_client_rect().top())
            .collect();
        let newly = self.reveal.borrow_mut().update(&tops, viewport_height);
        for index in newly {
            set_class(&self.reveal_targets[index], REVEALED_CLASS, true);
        }
    }

    fn reveal_all(&self) {
        for index in self.reveal.borrow_mut().reveal_all() {
            set_class(&self.reveal_targets[index], REVEALED_CLASS, true);
        }
    }
}
