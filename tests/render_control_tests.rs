#![allow(missing_docs)]

use ants::simulation::colony::Colony;
use ants::simulation::config::Config;
use ants::simulation::control::{ControlEvent, Resume, RunState, Session};
use ants::simulation::direction::Point;
use ants::simulation::field::{CellView, Field, Terrain};
use ants::simulation::render::{
    FOOD_COLOR, HOME_COLOR, RenderOptions, Visual, WALL_COLOR, field_pixels,
};
use ants::simulation::scheduler::Scheduler;

fn show_trails() -> RenderOptions {
    RenderOptions {
        pheromones: true,
        ..RenderOptions::default()
    }
}

#[test]
fn test_classify_priority() {
    let opts = show_trails();
    let wall = CellView {
        terrain: Terrain::Wall,
        food_pheromone: 500,
        ..CellView::default()
    };
    let food = CellView {
        food: 3,
        home_pheromone: 500,
        ..CellView::default()
    };
    let home = CellView {
        terrain: Terrain::Home,
        food_pheromone: 500,
        ..CellView::default()
    };

    assert_eq!(Visual::classify(&wall, &opts, 8191), Visual::Wall);
    assert_eq!(Visual::classify(&food, &opts, 8191), Visual::Food);
    assert_eq!(Visual::classify(&home, &opts, 8191), Visual::Home);
    assert_eq!(Visual::Wall.argb(), WALL_COLOR);
    assert_eq!(Visual::Food.argb(), FOOD_COLOR);
    assert_eq!(Visual::Home.argb(), HOME_COLOR);
}

#[test]
fn test_pheromone_channels() {
    let cell = CellView {
        food_pheromone: 1000,
        home_pheromone: 500,
        ..CellView::default()
    };

    assert_eq!(
        Visual::classify(&cell, &RenderOptions::default(), 1000),
        Visual::Empty
    );
    assert_eq!(
        Visual::classify(&cell, &show_trails(), 1000),
        Visual::Pheromone { food: 255, home: 127 }
    );

    let food_only = RenderOptions {
        home_channel: false,
        ..show_trails()
    };
    let visual = Visual::classify(&cell, &food_only, 1000);
    assert_eq!(visual, Visual::Pheromone { food: 255, home: 0 });
    assert_eq!(visual.argb(), 0xFF00_FF00);
    assert_eq!(Visual::Empty.argb(), 0);
}

#[test]
fn test_field_pixels_layout() {
    let mut field = Field::new(4, 3).unwrap();
    field.set_terrain(Point::new(3, 0), Terrain::Wall).unwrap();
    field.set_food(Point::new(0, 2), 1).unwrap();

    let pixels = field_pixels(&field, &RenderOptions::default(), 8191);

    assert_eq!(pixels.len(), 12);
    assert_eq!(pixels[3], WALL_COLOR);
    assert_eq!(pixels[8], FOOD_COLOR);
    assert_eq!(pixels[0], 0);
}

#[test]
fn test_run_state_transitions() {
    let running = RunState::Running;
    assert_eq!(running.on(ControlEvent::TogglePause), RunState::Paused);
    assert_eq!(RunState::Paused.on(ControlEvent::TogglePause), RunState::Running);

    let menu = running.on(ControlEvent::OpenMenu);
    assert_eq!(menu, RunState::Menu { resume: Resume::Running });
    assert_eq!(menu.on(ControlEvent::TogglePause), menu);
    assert_eq!(menu.on(ControlEvent::CloseMenu), RunState::Running);

    let paused_menu = RunState::Paused.on(ControlEvent::OpenMenu);
    assert_eq!(paused_menu.on(ControlEvent::CloseMenu), RunState::Paused);
    assert_eq!(running.on(ControlEvent::CloseMenu), running);
}

#[test]
fn test_session_only_advances_while_running() {
    let config = Config {
        initial_population: 10,
        max_population: 20,
        home_size: 4,
        log_interval: 0,
        ..Config::default()
    };
    let colony = Colony::new(16, 16, &config).unwrap();
    let mut session = Session::new(colony, config, Scheduler::with_workers(2).unwrap());

    assert!(session.advance().is_some());
    assert_eq!(session.colony.tick, 1);

    session.handle(ControlEvent::TogglePause);
    assert!(session.advance().is_none());

    session.handle(ControlEvent::OpenMenu);
    session.handle(ControlEvent::TogglePause);
    assert!(session.advance().is_none());

    session.handle(ControlEvent::CloseMenu);
    assert_eq!(session.state, RunState::Paused);
    session.handle(ControlEvent::TogglePause);
    assert_eq!(session.advance().map(|r| r.tick), Some(2));
    assert_eq!(session.scheduler().workers(), 2);
}
