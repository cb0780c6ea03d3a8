use std::cell::RefCell;
use std::rc::Rc;

use crate::app_config::load_site_config;
use crate::blob_view::BlobView;
use crate::boot;
use crate::contact_view::ContactView;
use crate::links::harden_external_links;
use crate::motion::load_motion_policy;
use crate::particle_view::ParticleView;
use crate::pointer_view::PointerView;
use crate::scroll_view::ScrollView;
use crate::theme_view::ThemeView;

/// Every mounted component. Dropping it detaches all listeners and frames.
#[allow(dead_code)]
pub(crate) struct Page {
    theme: Rc<ThemeView>,
    scroll: Rc<ScrollView>,
    pointer: Rc<PointerView>,
    particles: Option<Rc<ParticleView>>,
    blob: Option<Rc<BlobView>>,
    contact: Option<Rc<ContactView>>,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = RefCell::new(None);
}

pub(crate) fn run() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let config = load_site_config(&document);
    let motion = load_motion_policy(&config.motion);

    let theme = ThemeView::mount(&document);
    let external = harden_external_links(&window, &document);
    if external > 0 {
        gloo::console::log!("links: hardened", external as u32);
    }
    let page = Page {
        theme,
        scroll: ScrollView::mount(&window, &document, &config.scroll, motion),
        pointer: PointerView::mount(&window, &document, &config.pointer, motion),
        particles: ParticleView::mount(&window, &document, &config.particles, motion),
        blob: BlobView::mount(&document, motion),
        contact: ContactView::mount(&window, &document, &config.contact.recipient),
    };
    PAGE.with(|slot| {
        *slot.borrow_mut() = Some(page);
    });
    boot::ready();
}
