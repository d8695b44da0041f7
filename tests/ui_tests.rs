use battleship_solo::{
    render_grid, render_summary, run_game, Coord, GameConfig, Grid, Strategy, EMPTY_CHAR,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_render_grid_headings() {
    let mut grid = Grid::new(3, 2, EMPTY_CHAR);
    grid.set(Coord::new(3, 2), 'D');
    assert_eq!(render_grid(&grid), "__ A B C\n01 . . .\n02 . . D\n");
}

#[test]
fn test_summary_and_json_report() {
    let mut rng = SmallRng::seed_from_u64(8);
    let report = run_game(GameConfig::new(10, 10, 0, Strategy::RandomEven), &mut rng).unwrap();
    let summary = render_summary(&report);
    assert!(summary.contains("Strategy: random_even"));
    assert!(summary.contains(&format!("Shots fired: {}", report.shots)));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["strategy"], "random_even");
    assert_eq!(json["hits"], 5);
    assert_eq!(json["ship_grid"].as_array().unwrap().len(), 10);
    assert_eq!(json["history"].as_array().unwrap().len(), report.shots);
}
