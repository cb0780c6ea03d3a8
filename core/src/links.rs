use url::Url;

pub const EXTERNAL_TARGET: &str = "_blank";
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// True for absolute http(s) links that leave `site_host`.
pub fn is_external(href: &str, site_host: &str) -> bool {
    let Ok(url) = Url::parse(href.trim()) else {
        return false;
    };
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    let Some(host) = url.host_str() else {
        return false;
    };
    let site_host = site_host.trim();
    let site_host = site_host.split(':').next().unwrap_or(site_host);
    !host.eq_ignore_ascii_case(site_host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_links() {
        assert!(is_external("https://github.com/someone", "folio.dev"));
        assert!(!is_external("https://folio.dev/about", "folio.dev"));
        assert!(!is_external("https://FOLIO.dev/about", "folio.dev:8080"));
        assert!(!is_external("#contact", "folio.dev"));
        assert!(!is_external("/cv.pdf", "folio.dev"));
        assert!(!is_external("mailto:me@folio.dev", "folio.dev"));
    }
}
