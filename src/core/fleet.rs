use alloc::vec;
use alloc::vec::Vec;

use crate::core::ship::ShipType;

pub const NUM_CLASSIC_SHIPS: usize = 5;

/// The classic group, largest first.
pub const CLASSIC_FLEET: [ShipType; NUM_CLASSIC_SHIPS] = [
    ShipType::new("aircraft carrier", 'A', 5),
    ShipType::new("battleship", 'B', 4),
    ShipType::new("cruiser", 'C', 3),
    ShipType::new("submarine", 'S', 3),
    ShipType::new("destroyer", 'D', 2),
];

/// Ship cells in one classic group.
pub const CLASSIC_FLEET_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Ships to place for `multiplier` classic groups, ordered by descending
/// length so the larger ships are placed first.
///
/// A multiplier of `0` yields a lone aircraft carrier. Copies share marker
/// characters; callers clamp the multiplier.
pub fn build_fleet(multiplier: usize) -> Vec<ShipType> {
    if multiplier == 0 {
        return vec![CLASSIC_FLEET[0]];
    }
    CLASSIC_FLEET
        .iter()
        .flat_map(|&ship| core::iter::repeat(ship).take(multiplier))
        .collect()
}

/// Total number of cells the fleet occupies once placed.
pub fn fleet_cells(fleet: &[ShipType]) -> usize {
    fleet.iter().map(ShipType::length).sum()
}
