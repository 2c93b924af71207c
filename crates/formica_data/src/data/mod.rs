//! Core data structures for the formica simulation.

pub mod food;
pub mod position;
