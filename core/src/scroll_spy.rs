/// Picks the section currently in view from section tops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSpy {
    ratio: f64,
}

impl ScrollSpy {
    pub fn new(ratio: f64) -> Self {
        Self { ratio }
    }

    pub fn threshold(&self, viewport_height: f64) -> f64 {
        viewport_height * self.ratio
    }

    /// `tops` are viewport-relative, in document order. Returns the last
    /// section whose top has crossed the threshold line.
    pub fn active_index(&self, tops: &[f64], viewport_height: f64) -> Option<usize> {
        let threshold = self.threshold(viewport_height);
        tops.iter().rposition(|top| *top <= threshold)
    }

    /// Same as [`ScrollSpy::active_index`] but from document offsets.
    pub fn active_for_offsets(
        &self,
        offsets: &[f64],
        scroll_y: f64,
        viewport_height: f64,
    ) -> Option<usize> {
        let tops: Vec<f64> = offsets.iter().map(|offset| offset - scroll_y).collect();
        self.active_index(&tops, viewport_height)
    }
}

pub fn section_href(id: &str) -> String {
    format!("#{id}")
}

/// Active flag per link href; true only for the link pointing at `active_id`.
pub fn nav_states<S: AsRef<str>>(hrefs: &[S], active_id: &str) -> Vec<bool> {
    let target = section_href(active_id);
    hrefs
        .iter()
        .map(|href| !active_id.is_empty() && href.as_ref() == target)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_active_above_first_section() {
        let spy = ScrollSpy::new(0.32);
        assert_eq!(spy.active_index(&[400.0, 900.0], 1000.0), None);
    }

    #[test]
    fn nav_states_marks_single_link() {
        let hrefs = ["#home", "#work", "#contact", "https://example.com"];
        assert_eq!(nav_states(&hrefs, "work"), vec![false, true, false, false]);
        assert_eq!(nav_states(&hrefs, ""), vec![false; 4]);
    }
}
