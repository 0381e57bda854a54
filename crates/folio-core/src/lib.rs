pub mod band;
pub mod catalog;
pub mod constants;
pub mod contact;
pub mod curve;
pub mod nav;
pub mod route;
pub mod state;
pub mod theme;
pub mod typewriter;

pub use band::*;
pub use constants::*;
pub use state::*;
