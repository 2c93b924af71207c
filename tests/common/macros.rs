/// Asserts that two pheromone strengths agree within `1e-5`.
#[macro_export]
macro_rules! assert_strength {
    ($actual:expr, $expected:expr) => {
        let actual: f32 = $actual;
        let expected: f32 = $expected;
        assert!(
            (actual - expected).abs() < 1e-5,
            "Pheromone strength {} differs from expected {}",
            actual,
            expected
        );
    };
}

/// Asserts that `contains_food` agrees with disk coverage by the active
/// sources at every cell of the world.
#[macro_export]
macro_rules! assert_occupancy_consistent {
    ($world:expr) => {
        let radius = $world.food_radius();
        for y in 0..$world.height() {
            for x in 0..$world.width() {
                let p = formica_lib::model::position::Position::new(x, y);
                let covered = $world
                    .food_sources()
                    .iter()
                    .any(|s| p.is_within_radius(&s.position(), radius));
                assert_eq!(
                    $world.contains_food(p),
                    covered,
                    "Occupancy mismatch at {}",
                    p
                );
            }
        }
    };
}
