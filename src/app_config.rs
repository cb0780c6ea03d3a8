use folio_core::SiteConfig;
use web_sys::Document;

pub(crate) const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Page config: the JSON island in the document, then the build-time contact
/// address if the page did not set one.
pub(crate) fn load_site_config(document: &Document) -> SiteConfig {
    let mut config = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
        .map(|raw| parse_site_config(&raw))
        .unwrap_or_default();
    if config.contact.recipient.trim().is_empty() {
        if let Some(recipient) = default_contact_recipient() {
            config.contact.recipient = recipient;
        }
    }
    config
}

pub(crate) fn parse_site_config(raw: &str) -> SiteConfig {
    if raw.trim().is_empty() {
        return SiteConfig::default();
    }
    match SiteConfig::from_json(raw) {
        Ok(config) => config,
        Err(err) => {
            gloo::console::warn!("config: falling back to defaults", err.to_string());
            SiteConfig::default()
        }
    }
}

fn default_contact_recipient() -> Option<String> {
    let raw = option_env!("FOLIO_CONTACT_EMAIL")
        .or(option_env!("TRUNK_PUBLIC_FOLIO_CONTACT_EMAIL"))?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}
