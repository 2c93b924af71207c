//! Plain data types shared by the formica simulation crates.

pub mod data;

pub use data::food::FoodSource;
pub use data::position::Position;
