// Host-side tests for scroll-spy and the nav indicator bubbles.

use folio_core::nav::*;

const VH: f64 = 1000.0;

fn tops() -> SectionTops {
    SectionTops {
        about: Some(800.0),
        projects: Some(1600.0),
        contact: Some(2600.0),
    }
}

fn link() -> LinkBounds {
    LinkBounds {
        left: 120.0,
        width: 64.0,
    }
}

#[test]
fn above_about_trigger_is_home_with_hidden_bubble() {
    let about_trigger = trigger_offset(800.0, VH);
    assert_eq!(about_trigger, 500.0);
    let mut nav = NavState::new();
    let mut y = 0.0;
    while y < about_trigger {
        nav.on_scroll(y, VH, &tops());
        nav.sync_active_indicator(Some(link()));
        assert_eq!(nav.active(), Section::Home, "scroll {y}");
        assert_eq!(nav.active_indicator().opacity, 0.0);
        y += 7.5;
    }
}

#[test]
fn each_section_owns_its_trigger_band() {
    let t = tops();
    let bands = [
        (trigger_offset(800.0, VH), trigger_offset(1600.0, VH), Section::About),
        (trigger_offset(1600.0, VH), trigger_offset(2600.0, VH), Section::Projects),
        (trigger_offset(2600.0, VH), 5000.0, Section::Contact),
    ];
    for (start, end, section) in bands {
        let mut y = start;
        while y < end {
            assert_eq!(active_section(y, VH, &t), section, "scroll {y}");
            y += 10.0;
        }
        assert_ne!(active_section(start - 0.5, VH, &t), section);
    }
}

#[test]
fn missing_sections_are_skipped() {
    let t = SectionTops {
        about: Some(800.0),
        projects: None,
        contact: None,
    };
    assert_eq!(active_section(3000.0, VH, &t), Section::About);
    assert_eq!(active_section(0.0, VH, &SectionTops::default()), Section::Home);
}

#[test]
fn on_scroll_reports_changes_only() {
    let mut nav = NavState::new();
    assert!(!nav.on_scroll(0.0, VH, &tops()));
    assert!(nav.on_scroll(600.0, VH, &tops()));
    assert!(!nav.on_scroll(650.0, VH, &tops()));
    assert_eq!(nav.active(), Section::About);
}

#[test]
fn active_bubble_follows_link_and_fades_on_home() {
    let mut nav = NavState::new();
    nav.on_scroll(1400.0, VH, &tops());
    nav.sync_active_indicator(Some(link()));
    let shown = nav.active_indicator();
    assert_eq!(shown, Indicator::at(link()));
    assert!(shown.is_visible());

    // unmeasurable link leaves the bubble where it was
    nav.sync_active_indicator(None);
    assert_eq!(nav.active_indicator(), shown);

    nav.on_scroll(0.0, VH, &tops());
    nav.sync_active_indicator(Some(link()));
    let hidden = nav.active_indicator();
    assert!(!hidden.is_visible());
    assert_eq!(hidden.left, shown.left);
}

#[test]
fn hover_bubble_shows_and_hides() {
    let mut nav = NavState::new();
    assert!(!nav.hover_indicator().is_visible());
    nav.hover_enter(link());
    assert!(nav.hover_indicator().is_visible());
    assert_eq!(
        nav.hover_indicator().css(),
        "left: 120px; width: 64px; opacity: 1"
    );
    nav.hover_leave();
    assert!(!nav.hover_indicator().is_visible());
    assert_eq!(nav.hover_indicator().width, 64.0);
}

#[test]
fn menu_toggles_and_closes() {
    let mut nav = NavState::new();
    assert!(!nav.menu_open());
    assert!(nav.toggle_menu());
    assert!(!nav.toggle_menu());
    nav.toggle_menu();
    nav.close_menu();
    assert!(!nav.menu_open());
}

#[test]
fn section_ids_round_trip() {
    for s in [Section::Home, Section::About, Section::Projects, Section::Contact] {
        assert_eq!(Section::from_id(s.id()), Some(s));
        assert_eq!(s.to_string(), s.id());
    }
    assert_eq!(Section::from_id("footer"), None);
}
