// Host-side tests for the page markup builders.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
#[path = "../src/html.rs"]
mod html;

use constants::*;
use folio_core::catalog::{Catalog, ALL_TECH};
use html::*;

#[test]
fn escape_covers_markup_characters() {
    assert_eq!(
        escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
    assert_eq!(escape("plain"), "plain");
}

#[test]
fn app_links_are_marked_for_routing() {
    let link = app_link("/project/a", "btn", "View");
    assert!(link.contains(r#"href="/project/a""#));
    assert!(link.contains(&format!(r#"{DATA_LINK}="/project/a""#)));
}

#[test]
fn live_project_card_links_to_detail_page() {
    let catalog = Catalog::builtin();
    let card = project_card(catalog.find("asset-compass").unwrap());
    assert!(card.contains("Asset Compass"));
    assert!(card.contains(r#"data-link="/project/asset-compass""#));
    assert!(!card.contains("Coming Soon"));
}

#[test]
fn placeholder_project_card_is_disabled() {
    let catalog = Catalog::builtin();
    let card = project_card(catalog.find("project-6").unwrap());
    assert!(card.contains("Coming Soon"));
    assert!(card.contains("disabled"));
    assert!(!card.contains(DATA_LINK));
}

#[test]
fn empty_grid_shows_message() {
    let grid = project_grid(std::iter::empty::<&folio_core::catalog::Project>());
    assert!(grid.contains("No projects found matching that filter."));
}

#[test]
fn home_page_has_sections_and_form() {
    let catalog = Catalog::builtin();
    let page = home_page(catalog.featured(3));
    for id in ["home", "about", "projects", "contact"] {
        assert!(page.contains(&format!(r#"id="{id}""#)), "missing #{id}");
    }
    for id in [
        NAV_ID,
        LOGO_ID,
        ACTIVE_BUBBLE_ID,
        HOVER_BUBBLE_ID,
        CONTACT_FORM_ID,
        CONTACT_EMAIL_ID,
        CONTACT_MESSAGE_ID,
        CONTACT_SUBMIT_ID,
        THEME_TOGGLE_ID,
        MOBILE_THEME_TOGGLE_ID,
    ] {
        assert!(page.contains(&format!(r#"id="{id}""#)), "missing #{id}");
    }
    assert!(page.contains("Asset Compass"));
    assert!(!page.contains("Humble Coffee"));
    assert!(page.contains(r#"data-link="/all-projects""#));
}

#[test]
fn project_page_prefers_modal_image() {
    let catalog = Catalog::builtin();
    let page = project_page(catalog.find("asset-compass").unwrap());
    assert!(page.contains("/assets/projects/asset-compass-screen.webp"));
    assert!(page.contains(&format!(r#"id="{BACK_LINK_ID}""#)));
    assert!(page.contains(&format!(r#"id="{AI_BUTTON_ID}""#)));
    assert!(page.contains("Technologies Used"));
    assert!(page.contains("GitHub Repo"));
}

#[test]
fn not_found_page_shows_message() {
    let page = not_found_page("Project not found");
    assert!(page.contains("<h1>Project not found</h1>"));
    assert!(page.contains(r#"data-link="/""#));
}

#[test]
fn typewriter_output_has_cursor_only_while_typing() {
    assert!(ai_output("Ana", true).contains("cursor-blink"));
    assert_eq!(ai_output("A<b>", false), "A&lt;b&gt;");
}

#[test]
fn submit_class_adds_modifier() {
    assert_eq!(submit_class(""), SUBMIT_BASE_CLASS);
    assert_eq!(submit_class("loading"), format!("{SUBMIT_BASE_CLASS} loading"));
}

#[test]
fn filter_pills_mark_active() {
    let pills = filter_pills(&[ALL_TECH, "Java"], "Java");
    assert!(pills.contains(r#"class="btn sm-btn outline-btn" data-filter="All""#));
    assert!(pills.contains(r#"class="btn sm-btn active-filter" data-filter="Java""#));

    let page = all_projects_page(&[ALL_TECH], ALL_TECH, "<p>cards</p>");
    assert!(page.contains(&format!(r#"id="{SEARCH_INPUT_ID}""#)));
    assert!(page.contains(&format!(r#"id="{FILTER_BAR_ID}""#)));
    assert!(page.contains("<p>cards</p>"));
}
