use battleship_solo::{BattleError, Coord, Grid, Orientation, EMPTY_CHAR};

#[test]
fn test_new_fills_every_cell() {
    let grid = Grid::new(3, 2, EMPTY_CHAR);
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.area(), 6);
    assert_eq!(grid.count(EMPTY_CHAR), 6);
    assert_eq!(grid.get(Coord::new(3, 2)), EMPTY_CHAR);
}

#[test]
fn test_set_and_get() {
    let mut grid = Grid::new(4, 4, EMPTY_CHAR);
    grid.set(Coord::new(2, 3), 'B');
    assert_eq!(grid.get(Coord::new(2, 3)), 'B');
    assert_eq!(grid.try_get(2, 3), Ok('B'));
    assert_eq!(grid.count('B'), 1);
    assert_eq!(grid.coords_with('B').collect::<Vec<_>>(), vec![Coord::new(2, 3)]);
}

#[test]
fn test_try_get_out_of_bounds() {
    let grid = Grid::new(3, 3, EMPTY_CHAR);
    assert_eq!(grid.try_get(0, 1), Err(BattleError::OutOfBounds { x: 0, y: 1 }));
    assert_eq!(grid.try_get(4, 1), Err(BattleError::OutOfBounds { x: 4, y: 1 }));
    assert_eq!(grid.try_get(1, 4), Err(BattleError::OutOfBounds { x: 1, y: 4 }));
}

#[test]
#[should_panic]
fn test_get_out_of_bounds_panics() {
    let grid = Grid::new(3, 3, EMPTY_CHAR);
    let _ = grid.get(Coord::new(4, 1));
}

#[test]
#[should_panic]
fn test_set_row_zero_panics() {
    let mut grid = Grid::new(3, 3, EMPTY_CHAR);
    grid.set(Coord::new(1, 0), 'A');
}

#[test]
#[should_panic]
fn test_oversized_grid_panics() {
    let _ = Grid::new(27, 10, EMPTY_CHAR);
}

#[test]
fn test_coords_row_major() {
    let grid = Grid::new(2, 2, EMPTY_CHAR);
    let coords: Vec<_> = grid.coords().collect();
    assert_eq!(
        coords,
        vec![
            Coord::new(1, 1),
            Coord::new(2, 1),
            Coord::new(1, 2),
            Coord::new(2, 2)
        ]
    );
}

#[test]
fn test_neighbors_stop_at_edges() {
    let grid = Grid::new(2, 2, EMPTY_CHAR);
    let corner = Coord::new(1, 1);
    assert_eq!(grid.neighbor(corner, Orientation::North), None);
    assert_eq!(grid.neighbor(corner, Orientation::West), None);
    assert_eq!(grid.neighbor(corner, Orientation::East), Some(Coord::new(2, 1)));
    assert_eq!(grid.neighbor(corner, Orientation::South), Some(Coord::new(1, 2)));
    assert_eq!(grid.neighbor(Coord::new(2, 2), Orientation::East), None);
    assert_eq!(grid.neighbor(Coord::new(2, 2), Orientation::South), None);
}

#[test]
fn test_display_rows() {
    let mut grid = Grid::new(2, 2, EMPTY_CHAR);
    grid.set(Coord::new(2, 1), 'A');
    assert_eq!(grid.to_string(), ".A\n..");
}

#[test]
fn test_coord_display_and_parity() {
    assert_eq!(Coord::new(2, 7).to_string(), "B7");
    assert_eq!(Coord::new(26, 26).to_string(), "Z26");
    assert_eq!(Coord::new(1, 1).parity(), 0);
    assert_eq!(Coord::new(1, 2).parity(), 1);
}
