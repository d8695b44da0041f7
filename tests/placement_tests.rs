use battleship_solo::{
    build_fleet, fleet_cells, ship_fits, ship_overlaps, BattleError, Coord, Grid, Orientation,
    Placement, PlacementEngine, EMPTY_CHAR, MAX_TIMEOUT,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_fit_boundaries_per_orientation() {
    let fits = |x, y, orientation| Placement::new(Coord::new(x, y), orientation, 5).fits(10, 10);
    assert!(fits(1, 5, Orientation::North));
    assert!(!fits(1, 4, Orientation::North));
    assert!(fits(1, 6, Orientation::South));
    assert!(!fits(1, 7, Orientation::South));
    assert!(fits(5, 1, Orientation::West));
    assert!(!fits(4, 1, Orientation::West));
    assert!(fits(6, 1, Orientation::East));
    assert!(!fits(7, 1, Orientation::East));
}

#[test]
fn test_cells_extend_from_origin() {
    let placement = Placement::new(Coord::new(3, 3), Orientation::West, 3);
    let cells: Vec<_> = placement.cells().collect();
    assert_eq!(cells, vec![Coord::new(3, 3), Coord::new(2, 3), Coord::new(1, 3)]);
    assert!(placement.contains(Coord::new(1, 3)));
    assert!(!placement.contains(Coord::new(4, 3)));

    let placement = Placement::new(Coord::new(2, 4), Orientation::North, 2);
    let cells: Vec<_> = placement.cells().collect();
    assert_eq!(cells, vec![Coord::new(2, 4), Coord::new(2, 3)]);
}

#[test]
fn test_overlap_detection() {
    let mut grid = Grid::new(5, 5, EMPTY_CHAR);
    grid.set(Coord::new(2, 3), 'A');
    let crossing = Placement::new(Coord::new(2, 1), Orientation::South, 3);
    let beside = Placement::new(Coord::new(3, 1), Orientation::South, 3);
    assert!(ship_overlaps(&grid, &crossing));
    assert!(!ship_fits(&grid, &crossing));
    assert!(!ship_overlaps(&grid, &beside));
    assert!(ship_fits(&grid, &beside));
}

#[test]
fn test_classic_fleet_places_without_overlap() {
    let mut rng = SmallRng::seed_from_u64(42);
    let fleet = build_fleet(1);
    let result = PlacementEngine::new(10, 10).place_fleet(&mut rng, &fleet);
    assert!(!result.timed_out);
    assert_eq!(result.ships.len(), fleet.len());
    assert_eq!(
        result.grid.area() - result.grid.count(EMPTY_CHAR),
        fleet_cells(&fleet),
        "all ships should be placed without overlap"
    );
    for placed in &result.ships {
        assert!(placed.placement.fits(10, 10));
        for cell in placed.placement.cells() {
            assert_eq!(result.grid.get(cell), placed.ship.marker());
        }
    }
}

#[test]
fn test_placement_reproducible_with_seed() {
    let fleet = build_fleet(2);
    let engine = PlacementEngine::new(12, 9);
    let a = engine.place_fleet(&mut SmallRng::seed_from_u64(7), &fleet);
    let b = engine.place_fleet(&mut SmallRng::seed_from_u64(7), &fleet);
    assert_eq!(a.grid, b.grid);
    assert_eq!(a.ships, b.ships);
    assert_eq!(a.attempts, b.attempts);
}

#[test]
fn test_one_by_one_grid_times_out() {
    let mut rng = SmallRng::seed_from_u64(1);
    let result = PlacementEngine::new(1, 1).place_fleet(&mut rng, &build_fleet(1));
    assert!(result.timed_out);
    assert!(result.ships.is_empty());
    assert_eq!(result.attempts, MAX_TIMEOUT);
    assert_eq!(
        result.check().unwrap_err(),
        BattleError::PlacementTimeout {
            attempts: MAX_TIMEOUT
        }
    );
}

#[test]
fn test_attempt_budget_is_shared_by_fleet() {
    let mut rng = SmallRng::seed_from_u64(3);
    let engine = PlacementEngine::new(3, 3).with_max_attempts(10);
    let result = engine.place_fleet(&mut rng, &build_fleet(1));
    assert!(result.timed_out);
    assert_eq!(result.attempts, 10);
}

#[test]
fn test_single_row_forces_horizontal_carrier() {
    let mut rng = SmallRng::seed_from_u64(11);
    let result = PlacementEngine::new(5, 1).place_fleet(&mut rng, &build_fleet(0));
    assert!(!result.timed_out);
    assert_eq!(result.grid.to_string(), "AAAAA");
    let orientation = result.ships[0].placement.orientation;
    assert!(matches!(orientation, Orientation::East | Orientation::West));
}
