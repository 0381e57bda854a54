/// DOM hooks shared by the views and their event wiring.
///
/// Markup is generated in `html.rs` and looked up again by id from the
/// wiring code, so both sides read the names from here.
// Mount points
pub const APP_ROOT_ID: &str = "app";
pub const LANYARD_CANVAS_ID: &str = "lanyard-canvas";
pub const LANYARD_WRAPPER_CLASS: &str = "lanyard-wrapper";

// Header and navigation
pub const LOGO_ID: &str = "logo";
pub const NAV_ID: &str = "nav";
pub const NAV_WRAP_ID: &str = "nav-wrap";
pub const MENU_TOGGLE_ID: &str = "mobile-menu-icon";
pub const ACTIVE_BUBBLE_ID: &str = "bubble-active";
pub const HOVER_BUBBLE_ID: &str = "bubble-hover";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const MOBILE_THEME_TOGGLE_ID: &str = "mobile-theme-toggle";

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_EMAIL_ID: &str = "contact-email";
pub const CONTACT_MESSAGE_ID: &str = "contact-message";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";
pub const SUBMIT_BASE_CLASS: &str = "kk-submit-container";

// Project detail
pub const PROJECT_PAGE_ID: &str = "project-page";
pub const BACK_LINK_ID: &str = "back-link";
pub const AI_BUTTON_ID: &str = "ai-generate";
pub const AI_OUTPUT_ID: &str = "ai-output";

// All projects
pub const SEARCH_INPUT_ID: &str = "project-search";
pub const FILTER_BAR_ID: &str = "filter-bar";
pub const PROJECT_GRID_ID: &str = "project-grid";

// Attributes used for event delegation
pub const DATA_LINK: &str = "data-link"; // in-app navigation, value is the href
pub const DATA_SECTION: &str = "data-section"; // nav link target section id
pub const DATA_FILTER: &str = "data-filter"; // tech filter pill value
pub const DATA_THEME_TOGGLE: &str = "data-theme-toggle";

// CSS classes toggled at runtime
pub const ACTIVE_CLASS: &str = "active";
pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const THEME_SWITCHING_CLASS: &str = "theme-switching";
pub const SLIDE_OUT_CLASS: &str = "slide-out";
pub const ICON_MOON_CLASS: &str = "fa-moon";
pub const ICON_SUN_CLASS: &str = "fa-sun";

// External links
pub const GITHUB_URL: &str = "https://github.com/Lwazi-M";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/nhlamhlongo";
pub const CONTACT_MAIL: &str = "nhlamhlongo.work@gmail.com";
pub const RESUME_URL: &str = "/assets/Lwazi_Mhlongo_CV.pdf";
pub const QUALIFICATION_URL: &str = "/assets/CompletionLetter.pdf";
pub const PROFILE_IMAGE: &str = "/assets/Me-Profile.jpeg";
