use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{BlobMorph, MotionPolicy};
use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::{Document, Element};

pub(crate) const BLOB_PATH_ID: &str = "blob-path";

pub(crate) struct BlobView {
    path: Element,
    time_scale: f64,
    morph: RefCell<BlobMorph>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl BlobView {
    pub(crate) fn mount(document: &Document, motion: MotionPolicy) -> Option<Rc<Self>> {
        let Some(path) = document.get_element_by_id(BLOB_PATH_ID) else {
            gloo::console::log!("blob: no path, skipping");
            return None;
        };
        let view = Rc::new(Self {
            path,
            time_scale: motion.time_scale,
            morph: RefCell::new(BlobMorph::new(0.0)),
            frame: RefCell::new(None),
        });
        view.render();
        if view.time_scale > 0.0 {
            view.schedule_frame();
        }
        Some(view)
    }

    fn schedule_frame(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let view = Rc::clone(self);
        let handle = request_animation_frame(move |_timestamp| {
            view.frame.borrow_mut().take();
            view.morph.borrow_mut().advance(view.time_scale);
            view.render();
            view.schedule_frame();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn render(&self) {
        let d = self.morph.borrow().path();
        let _ = self.path.set_attribute("d", &d);
    }
}
