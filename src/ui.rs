//! Text rendering of grids and game summaries.

use std::fmt::Write as _;
use std::string::String;

use crate::core::{GameReport, Grid, COLUMN_HEADINGS};

/// Render `grid` with a heading row of column letters and two-digit row
/// numbers down the left side.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::from("__");
    for heading in COLUMN_HEADINGS.chars().take(grid.width()) {
        let _ = write!(out, " {}", heading);
    }
    out.push('\n');
    for (i, row) in grid.rows().enumerate() {
        let _ = write!(out, "{:02}", i + 1);
        for &cell in row {
            let _ = write!(out, " {}", cell);
        }
        out.push('\n');
    }
    out
}

/// One-paragraph statistics for a finished game.
pub fn render_summary(report: &GameReport) -> String {
    format!(
        "Strategy: {}\nShots fired: {}\nHits: {}  Misses: {}  Accuracy: {:.1}%\nShips sunk: {}",
        report.strategy,
        report.shots,
        report.hits,
        report.misses,
        report.accuracy() * 100.0,
        report.ships_sunk
    )
}

/// Print both final grids followed by the summary.
pub fn print_report(report: &GameReport) {
    println!("Ship grid:");
    println!("{}", render_grid(&report.ship_grid));
    println!("Shot grid:");
    println!("{}", render_grid(&report.shot_grid));
    println!("{}", render_summary(report));
}
