use glam::Vec3;

// Shared tuning constants for the page logic and the lanyard badge.

// Scroll-spy
pub const SECTION_LOOKAHEAD: f64 = 0.3; // fraction of viewport height added to the scroll offset

// Page shell
pub const LANYARD_MIN_VIEWPORT_WIDTH: f64 = 1200.0; // CSS px; narrower viewports hide the badge
pub const HOME_FEATURED_PROJECTS: usize = 3;
pub const PROJECT_EXIT_MS: i32 = 500; // slide-out before leaving a project page
pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_SWITCH_MS: i32 = 1000;

// Contact form
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/xdaneony";
pub const SUCCESS_DISPLAY_MS: u64 = 3000;

// AI summary typewriter
pub const TYPEWRITER_TICK_MS: i32 = 20;

// Lanyard camera
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 10.0);
pub const CAMERA_FOV_DEG: f32 = 20.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const UNPROJECT_DEPTH: f32 = 0.5; // NDC depth used when turning the pointer into a world point

// Physics world
pub const GRAVITY: Vec3 = Vec3::new(0.0, -40.0, 0.0);
pub const PHYSICS_TIMESTEP: f32 = 1.0 / 60.0;
pub const MAX_SUBSTEPS: u32 = 4; // fixed steps per frame; backlog beyond this is dropped

// Lanyard chain layout
pub const MAX_FRAME_DT: f32 = 0.1; // clamp for delayed frames
pub const ANCHOR_POSITION: Vec3 = Vec3::new(-1.52, 4.3, 0.0);
pub const SEGMENT_SPACING: f32 = 0.5; // initial vertical gap between chain bodies
pub const ROPE_LENGTH: f32 = 1.0;
pub const JOINT_RADIUS: f32 = 0.1;
pub const CARD_DROP: f32 = 2.0; // card starts this far below the anchor
pub const CARD_HALF_EXTENTS: Vec3 = Vec3::new(0.8, 1.125, 0.01);
pub const CARD_JOINT_ANCHOR: Vec3 = Vec3::new(0.0, 1.45, 0.0); // card-local point held by the last joint
pub const BODY_LINEAR_DAMPING: f32 = 4.0;
pub const BODY_ANGULAR_DAMPING: f32 = 4.0;

// Strap smoothing and shape
pub const STRAP_MAX_SPEED: f32 = 50.0;
pub const STRAP_MIN_SPEED: f32 = 0.0;
pub const LERP_DISTANCE_MIN: f32 = 0.1;
pub const LERP_DISTANCE_MAX: f32 = 1.0;
pub const STRAP_DIVISIONS: usize = 32;
pub const STRAP_HALF_WIDTH: f32 = 0.16;
pub const YAW_CORRECTION: f32 = 0.25; // angular velocity removed per unit of quaternion y

// Picking
pub const CARD_PICK_PADDING: f32 = 0.05; // extra margin around the card box for pointer hits
