//! Ant-colony foraging environment.
//!
//! `model` re-exports the engine crates under one roof; `app` drives a
//! world headlessly for a fixed number of ticks.

pub mod app;
pub mod model;
