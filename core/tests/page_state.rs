use folio_core::config::PointerConfig;
use folio_core::pointer::{magnetic_offset, parallax, tilt};
use folio_core::scroll_spy::nav_states;
use folio_core::{
    ContactDraft, ContactError, ContactField, Glow, MagneticOffset, MemoryStore, MotionPolicy,
    PreferenceStore, Rect, ScrollSpy, Theme, ThemePreference, THEME_KEY,
};

fn assert_close(actual: f64, expected: f64) {
    let delta = (actual - expected).abs();
    assert!(
        delta <= 1e-9,
        "expected {:.6} got {:.6} (delta {:.6})",
        expected,
        actual,
        delta
    );
}

#[test]
fn theme_toggle_twice_round_trips() {
    for initial in [None, Some("light"), Some("dark")] {
        let mut store = MemoryStore::new();
        if let Some(value) = initial {
            store.set(THEME_KEY, value).unwrap();
        }
        let mut pref = ThemePreference::load(store);
        let start = pref.current();
        pref.toggle().unwrap();
        assert_ne!(pref.current(), start);
        pref.toggle().unwrap();
        assert_eq!(pref.current(), start);
        assert_eq!(pref.store().get(THEME_KEY).as_deref(), Some(start.as_str()));
    }
}

#[test]
fn theme_reload_sees_persisted_value() {
    let mut pref = ThemePreference::load(MemoryStore::new());
    assert_eq!(pref.current(), Theme::Dark);
    pref.toggle().unwrap();
    let reloaded = ThemePreference::load(pref.store().clone());
    assert_eq!(reloaded.current(), Theme::Light);
}

#[test]
fn scroll_spy_follows_threshold_line() {
    let spy = ScrollSpy::new(0.32);
    let offsets = [0.0, 500.0, 1200.0];
    assert_eq!(spy.active_for_offsets(&offsets, 600.0, 1000.0), Some(1));
    assert_eq!(spy.active_for_offsets(&offsets, 0.0, 1000.0), Some(0));
    // 1200 - 900 = 300 is under the 320 line
    assert_eq!(spy.active_for_offsets(&offsets, 900.0, 1000.0), Some(2));
    assert_eq!(spy.active_for_offsets(&offsets, 879.0, 1000.0), Some(1));
}

#[test]
fn scroll_spy_drives_single_active_link() {
    let spy = ScrollSpy::new(0.32);
    let ids = ["home", "projects", "contact"];
    let hrefs = ["#home", "#projects", "#contact"];
    let active = spy
        .active_for_offsets(&[0.0, 500.0, 1200.0], 600.0, 1000.0)
        .map(|index| ids[index])
        .unwrap();
    let states = nav_states(&hrefs, active);
    assert_eq!(states, vec![false, true, false]);
}

#[test]
fn empty_email_blocks_submission_without_touching_fields() {
    let draft = ContactDraft::new("Ada Lovelace", "   ", "Hello there");
    let before = draft.clone();
    assert_eq!(
        draft.validate(),
        Err(ContactError::MissingField(ContactField::Email))
    );
    assert_eq!(draft, before);
    assert_eq!(draft.name, "Ada Lovelace");
    assert_eq!(draft.message, "Hello there");
}

#[test]
fn mailto_encodes_subject_and_body() {
    let message = ContactDraft::new(" Ada ", "ada@example.com", "Hi & bye?\nThanks")
        .validate()
        .unwrap();
    let href = message.mailto_href("me@folio.dev").unwrap();
    assert_eq!(
        href,
        "mailto:me@folio.dev?subject=Portfolio%20contact%20from%20Ada\
         &body=Name%3A%20Ada%0AEmail%3A%20ada%40example.com%0A%0AHi%20%26%20bye%3F%0AThanks"
    );
}

#[test]
fn magnetic_pull_scales_with_element_size() {
    let config = PointerConfig::default();
    let bounds = Rect::new(100.0, 100.0, 200.0, 80.0);
    // strength = 80 / 4 = 20, center = (200, 140)
    let offset = magnetic_offset(bounds, 220.0, 130.0, &config);
    assert_close(offset.x, 10.0);
    assert_close(offset.y, -4.0);
    assert_close(offset.scale, 1.03);
    let centered = magnetic_offset(bounds, 200.0, 140.0, &config);
    assert_close(centered.x, 0.0);
    assert_close(centered.y, 0.0);
    assert_eq!(MagneticOffset::REST.to_css(), "translate(0.000px, 0.000px) scale(1.000)");
}

#[test]
fn tilt_follows_normalized_pointer() {
    let config = PointerConfig::default();
    let bounds = Rect::new(0.0, 0.0, 400.0, 200.0);
    let corner = tilt(bounds, 400.0, 0.0, &config);
    assert_close(corner.rotate_x_deg, 4.0);
    assert_close(corner.rotate_y_deg, 5.0);
    assert_close(corner.lift_px, 12.0);
    let center = tilt(bounds, 200.0, 100.0, &config);
    assert_close(center.rotate_x_deg, 0.0);
    assert_close(center.rotate_y_deg, 0.0);
}

#[test]
fn parallax_opposes_pointer() {
    let shift = parallax(1000.0, 0.0, 1000.0, 800.0);
    assert_close(shift.x, -9.0);
    assert_close(shift.y, 5.0);
    assert_close(shift.rotate_deg, -1.5);
}

#[test]
fn glow_converges_and_snaps_without_smoothing() {
    let mut glow = Glow::new(0.0, 0.0, 120.0);
    glow.pointer_move(300.0, 200.0);
    glow.press();
    for _ in 0..200 {
        glow.step(16.0);
    }
    assert!(glow.is_settled());
    assert_close(glow.target_scale(), 0.6);

    let policy = MotionPolicy::new(true, &Default::default());
    let mut glow = Glow::new(0.0, 0.0, if policy.smooth_glow() { 120.0 } else { 0.0 });
    glow.pointer_move(50.0, 60.0);
    glow.step(16.0);
    assert_eq!((glow.x, glow.y), (50.0, 60.0));
}
