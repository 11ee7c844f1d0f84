#![allow(missing_docs)]

use ants::simulation::ant::{Ant, FALLBACK, Mode, Outcome};
use ants::simulation::config::Config;
use ants::simulation::direction::{Direction, Point};
use ants::simulation::field::{Field, Pheromone, Terrain};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// No random sensing or wandering, so movement is fully determined.
fn steady_config() -> Config {
    Config {
        sense_chance: 0.0,
        wander_chance: 0.0,
        home_size: 10,
        ..Config::default()
    }
}

#[test]
fn test_forager_picks_up_food() {
    let config = steady_config();
    let mut field = Field::with_home(20, 20, 10).unwrap();
    field.set_food(Point::new(6, 5), 15).unwrap();
    let mut ant = Ant::new(Point::new(5, 5), Direction::E, &config);
    let mut rng = StdRng::seed_from_u64(1);

    let outcome = ant.update(&field, &config, &mut rng);

    assert_eq!(outcome, Outcome::Alive { banked: 0 });
    assert_eq!(ant.pos, Point::new(6, 5));
    assert_eq!(ant.carried_food, 10);
    assert_eq!(ant.mode(), Mode::Returning);
    assert_eq!(ant.heading, Direction::W);
    assert_eq!(field.get(Point::new(6, 5)).unwrap().food, 5);
    // Carrying ants lay food trail on the pickup cell.
    assert_eq!(field.pheromone(Point::new(6, 5), Pheromone::Food), config.fresh_marker);
}

#[test]
fn test_exhausted_ant_dies_without_acting() {
    let config = steady_config();
    let field = Field::new(10, 10).unwrap();
    let mut ant = Ant::new(Point::new(4, 4), Direction::S, &config);
    ant.energy = 1;
    let mut rng = StdRng::seed_from_u64(2);

    assert_eq!(ant.update(&field, &config, &mut rng), Outcome::Died);
    assert!(!ant.is_alive());
    assert_eq!(ant.pos, Point::new(4, 4));
    assert_eq!(field.pheromone(Point::new(4, 4), Pheromone::Home), 0);
}

#[test]
fn test_home_banks_carried_food() {
    let config = steady_config();
    let field = Field::with_home(20, 20, 10).unwrap();
    let mut ant = Ant::new(Point::new(2, 2), Direction::E, &config);
    ant.carried_food = 3;
    ant.marker = 12;
    let mut rng = StdRng::seed_from_u64(3);

    let outcome = ant.update(&field, &config, &mut rng);

    assert_eq!(
        outcome,
        Outcome::Alive {
            banked: 3 * config.food_life_value
        }
    );
    assert_eq!(ant.carried_food, 0);
    assert_eq!(ant.mode(), Mode::Foraging);
    // The marker was recharged at home before laying home trail.
    assert_eq!(field.pheromone(Point::new(3, 2), Pheromone::Home), config.fresh_marker);
}

#[test]
fn test_marker_picks_up_stronger_trail() {
    let config = steady_config();
    let field = Field::new(20, 20).unwrap();
    let ahead = Point::new(11, 10);
    field.deposit_home_pheromone(ahead, 6000, config.pheromone_max);
    let mut ant = Ant::new(Point::new(10, 10), Direction::E, &config);
    let mut rng = StdRng::seed_from_u64(4);

    ant.update(&field, &config, &mut rng);

    assert_eq!(ant.marker, 6000);
    assert_eq!(field.pheromone(ahead, Pheromone::Home), 6000);
}

#[test]
fn test_marker_tracks_rising_trail() {
    let config = steady_config();
    let field = Field::new(30, 20).unwrap();
    let start = Point::new(5, 10);
    for i in 1..=20 {
        let ambient = config.fresh_marker - 500 + 100 * i as u32;
        field.deposit_home_pheromone(start.step_by(Direction::E, i), ambient, config.pheromone_max);
    }
    let mut ant = Ant::new(start, Direction::E, &config);
    let mut rng = StdRng::seed_from_u64(10);

    for step in 1..=20 {
        let ambient = field.pheromone(ant.pos.step(Direction::E), Pheromone::Home);
        ant.update(&field, &config, &mut rng);

        assert_eq!(ant.pos, start.step_by(Direction::E, step));
        assert!(ant.marker >= ambient, "step {step}: marker {} below trail {ambient}", ant.marker);
        assert!(field.pheromone(ant.pos, Pheromone::Home) >= ambient);
    }
}

#[test]
fn test_marker_fades_after_deposit() {
    let config = steady_config();
    let field = Field::new(20, 20).unwrap();
    let mut ant = Ant::new(Point::new(10, 10), Direction::E, &config);
    let mut rng = StdRng::seed_from_u64(5);

    ant.update(&field, &config, &mut rng);

    assert_eq!(field.pheromone(Point::new(11, 10), Pheromone::Home), 5000);
    assert_eq!(ant.marker, 5000 - (5000 / config.fade_ant_divisor + 1));
}

#[test]
fn test_wall_forces_turn() {
    let config = steady_config();
    let mut field = Field::new(20, 20).unwrap();
    field.set_terrain(Point::new(11, 10), Terrain::Wall).unwrap();
    let mut ant = Ant::new(Point::new(10, 10), Direction::E, &config);
    let mut rng = StdRng::seed_from_u64(6);

    for _ in 0..20 {
        ant.update(&field, &config, &mut rng);
        assert!(field.is_passable(ant.pos));
    }
}

#[test]
fn test_grid_edge_forces_turn() {
    let config = steady_config();
    let field = Field::new(6, 6).unwrap();
    let mut ant = Ant::new(Point::new(0, 0), Direction::N, &config);
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        ant.update(&field, &config, &mut rng);
        assert!(field.contains(ant.pos));
    }
}

#[test]
fn test_boxed_in_ant_teleports_to_fallback() {
    let config = steady_config();
    let mut field = Field::new(5, 5).unwrap();
    let centre = Point::new(2, 2);
    for dir in Direction::ALL {
        field.set_terrain(centre.step(dir), Terrain::Wall).unwrap();
    }
    let mut ant = Ant::new(centre, Direction::N, &config);
    let mut rng = StdRng::seed_from_u64(8);

    let outcome = ant.update(&field, &config, &mut rng);

    assert!(matches!(outcome, Outcome::Alive { .. }));
    assert_eq!(ant.pos, FALLBACK);
}

#[test]
fn test_fallback_is_clamped_to_tiny_field() {
    let config = steady_config();
    let field = Field::new(1, 1).unwrap();
    let mut ant = Ant::new(Point::new(0, 0), Direction::E, &config);
    let mut rng = StdRng::seed_from_u64(9);

    ant.update(&field, &config, &mut rng);

    assert_eq!(ant.pos, Point::new(0, 0));
}

#[test]
fn test_forager_turns_toward_food_trail() {
    let config = steady_config();
    let field = Field::new(30, 30).unwrap();
    let origin = Point::new(15, 15);
    for i in 1..=5 {
        field.deposit_food_pheromone(origin.step_by(Direction::NE, i), 4000, config.pheromone_max);
    }
    let mut ant = Ant::new(origin, Direction::N, &config);

    ant.sense_and_turn(&field, &config);

    assert_eq!(ant.heading, Direction::NE);
}

#[test]
fn test_returning_ant_turns_toward_home() {
    let config = steady_config();
    let field = Field::with_home(40, 40, 10).unwrap();
    let mut ant = Ant::new(Point::new(15, 15), Direction::W, &config);
    ant.carried_food = 1;

    ant.sense_and_turn(&field, &config);

    assert_eq!(ant.heading, Direction::NW);
}
