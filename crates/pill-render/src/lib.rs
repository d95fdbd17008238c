pub mod hit;
pub mod svg;
pub mod theme;
