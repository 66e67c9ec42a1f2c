pub mod engine;
pub mod footer;
pub mod render;

pub use engine::{Binder, Section, CONFIG_ATTR};
pub use footer::update_footer;
