pub use formica_core::{AntWorld, DispersalPolicy, PheromoneSense};
pub mod config {
    pub use formica_core::config::*;
}
pub mod dispersal {
    pub use formica_core::dispersal::*;
}
pub mod error {
    pub use formica_core::error::*;
}
pub mod food {
    pub use formica_core::food::*;
    pub use formica_data::FoodSource;
}
pub mod metrics {
    pub use formica_core::metrics::*;
}
pub mod pheromone {
    pub use formica_core::pheromone::*;
}
pub mod position {
    pub use formica_data::Position;
}
pub mod shared {
    pub use formica_core::shared::*;
}
pub mod snapshot {
    pub use formica_core::snapshot::*;
}
pub mod world {
    pub use formica_core::world::*;
}
