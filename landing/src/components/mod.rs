//! DOM-building page components.

pub mod background;
pub mod image_wall;
pub mod marquee;
