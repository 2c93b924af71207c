mod common;

use common::WorldBuilder;
use formica_lib::model::food::FoodPickup;
use formica_lib::model::position::Position;

#[test]
fn test_small_source_depletes_and_is_replaced() {
    let mut world = WorldBuilder::new()
        .with_size(20, 20)
        .with_config(|c| c.food.radius = 3)
        .with_source(10, 10, 3)
        .build();
    let center = Position::new(10, 10);

    assert!(world.contains_food(center));
    assert!(world.contains_food(Position::new(13, 10)));
    assert!(!world.contains_food(Position::new(14, 10)));
    assert!(!world.contains_food(Position::new(13, 13)));

    assert_eq!(
        world.pick_up_food(Position::new(12, 11)),
        FoodPickup::Taken { remaining: 2 }
    );
    assert_eq!(
        world.pick_up_food(center),
        FoodPickup::Taken { remaining: 1 }
    );

    let FoodPickup::Depleted { at, replacement } = world.pick_up_food(center) else {
        panic!("third pickup should deplete the source");
    };
    assert_eq!(at, center);
    assert_eq!(world.food_sources().len(), 1);
    assert_eq!(world.food_sources()[0].position(), replacement);
    assert_eq!(world.food_sources()[0].remaining(), world.food_sources()[0].capacity());
    assert!(world.contains_food(replacement));
    assert_eq!(world.depleted_sources(), 1);
    assert_occupancy_consistent!(world);
}

#[test]
fn test_exact_capacity_pickups_before_depletion() {
    let capacity = 7;
    let mut world = WorldBuilder::new()
        .with_size(40, 40)
        .with_source(20, 20, capacity)
        .build();
    let p = Position::new(20, 20);

    for taken in 1..capacity {
        assert_eq!(
            world.pick_up_food(p),
            FoodPickup::Taken {
                remaining: capacity - taken
            }
        );
    }
    assert!(matches!(world.pick_up_food(p), FoodPickup::Depleted { .. }));
}

#[test]
fn test_occupancy_matches_disks_after_construction() {
    let world = WorldBuilder::new()
        .with_size(80, 60)
        .with_seed(3)
        .with_config(|c| {
            c.world.food_sources = 8;
            c.food.radius = 4;
        })
        .build();
    assert_eq!(world.food_sources().len(), 8);
    assert_occupancy_consistent!(world);
}

#[test]
fn test_source_count_is_stable_under_foraging() {
    let mut world = WorldBuilder::new()
        .with_size(60, 60)
        .with_seed(11)
        .with_config(|c| {
            c.world.food_sources = 4;
            c.food.amount = 2;
        })
        .build();

    for _ in 0..20 {
        let target = world.food_sources()[0].position();
        world.pick_up_food(target);
        assert_eq!(world.food_sources().len(), 4);
    }
    assert!(world.depleted_sources() >= 10);
    assert_occupancy_consistent!(world);
}

#[test]
fn test_pickup_outside_any_disk_misses() {
    let mut world = WorldBuilder::new()
        .with_size(30, 30)
        .with_source(5, 5, 10)
        .build();
    assert_eq!(world.pick_up_food(Position::new(25, 25)), FoodPickup::Missed);
    assert_eq!(world.pick_up_food(Position::new(-1, 5)), FoodPickup::Missed);
    assert_eq!(world.food_sources()[0].remaining(), 10);
}
