pub mod bounds;
pub mod color;
