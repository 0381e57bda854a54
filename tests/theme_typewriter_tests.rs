// Host-side tests for the theme toggle and the AI summary typewriter.

use folio_core::theme::*;
use folio_core::typewriter::*;

#[test]
fn stored_theme_parsing() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
    assert_eq!(Theme::from_stored(None), Theme::Light);
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Light.as_str(), "light");
}

#[test]
fn toggle_alternates_and_reports_value_to_persist() {
    let mut toggle = ThemeToggle::new(Theme::Light);
    let mut seen = Vec::new();
    for _ in 0..4 {
        assert!(toggle.begin());
        seen.push(toggle.finish().as_str());
    }
    assert_eq!(seen, ["dark", "light", "dark", "light"]);
}

#[test]
fn toggle_ignored_while_switching() {
    let mut toggle = ThemeToggle::new(Theme::Dark);
    assert!(toggle.begin());
    assert!(toggle.is_switching());
    assert!(!toggle.begin());
    assert!(!toggle.begin());
    // the theme only changes when the switch completes, and only once
    assert_eq!(toggle.current(), Theme::Dark);
    assert_eq!(toggle.finish(), Theme::Light);
    assert!(!toggle.is_switching());
    // finishing without a running switch changes nothing
    assert_eq!(toggle.finish(), Theme::Light);
}

#[test]
fn switch_without_target_leaves_toggle_free() {
    let mut toggle = ThemeToggle::new(Theme::Light);
    assert_eq!(toggle.begin_with(None::<()>), None);
    assert!(!toggle.is_switching());
    // the next request with somewhere to apply it goes through
    assert_eq!(toggle.begin_with(Some("doc")), Some("doc"));
    assert!(toggle.is_switching());
    assert_eq!(toggle.begin_with(Some("doc")), None);
    assert_eq!(toggle.finish(), Theme::Dark);
}

#[test]
fn typewriter_reveals_one_char_per_tick() {
    let mut tw = Typewriter::new("abc");
    assert_eq!(tw.state(), TypingState::Waiting);
    assert!(!tw.tick());
    assert_eq!(tw.visible(), "");

    assert!(tw.start());
    assert!(tw.is_typing());
    let mut frames = Vec::new();
    while tw.tick() {
        frames.push(tw.visible().to_string());
    }
    assert_eq!(frames, ["a", "ab", "abc"]);
    assert_eq!(tw.state(), TypingState::Done);
    assert!(!tw.is_typing());
}

#[test]
fn typewriter_ignores_repeat_requests() {
    let mut tw = Typewriter::new("hello");
    assert!(tw.start());
    tw.tick();
    assert!(!tw.start());
    assert_eq!(tw.visible(), "h");
    while tw.tick() {}
    assert!(!tw.start());
    assert_eq!(tw.visible(), "hello");
}

#[test]
fn typewriter_handles_multibyte_text() {
    let mut tw = Typewriter::new("é•✓");
    tw.start();
    tw.tick();
    assert_eq!(tw.visible(), "é");
    tw.tick();
    assert_eq!(tw.visible(), "é•");
    tw.tick();
    assert_eq!(tw.visible(), "é•✓");
    assert!(!tw.tick());
}

#[test]
fn typewriter_falls_back_for_missing_analysis() {
    let mut tw = Typewriter::new("  ");
    tw.start();
    while tw.tick() {}
    assert_eq!(tw.visible(), UNAVAILABLE_TEXT);
}
