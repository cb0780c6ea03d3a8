use folio_core::links::{is_external, EXTERNAL_REL, EXTERNAL_TARGET};
use web_sys::{Document, Window};

use crate::dom::query_all;

/// Opens off-site links in a new tab without leaking opener or referrer.
pub(crate) fn harden_external_links(window: &Window, document: &Document) -> usize {
    let host = window.location().host().unwrap_or_default();
    let mut count = 0;
    for anchor in query_all(document, "a[href]") {
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };
        if !is_external(&href, &host) {
            continue;
        }
        let _ = anchor.set_attribute("target", EXTERNAL_TARGET);
        let _ = anchor.set_attribute("rel", EXTERNAL_REL);
        count += 1;
    }
    count
}
