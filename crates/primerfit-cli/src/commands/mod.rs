pub mod curve;
pub mod score;
pub mod select;
