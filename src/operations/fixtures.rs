//! Small identity fields shared by the operation tests.
#![allow(clippy::unwrap_used)]

use crate::grid::HexGrid;

fn label<F>(rings: u32, f: F) -> (HexGrid, Vec<u32>)
where
    F: Fn(i32, i32) -> u32,
{
    let grid = HexGrid::hexagon(rings, 1.0).unwrap();
    let ids = grid.cells().map(|c| f(c.q, c.r)).collect();
    (grid, ids)
}

/// One ring: the centre cell is 1, its east neighbour is 2, the rest are 0.
pub(crate) fn island() -> (HexGrid, Vec<u32>) {
    label(1, |q, r| match (q, r) {
        (0, 0) => 1,
        (1, 0) => 2,
        _ => 0,
    })
}

/// Two rings split along `q = 0`: cells with `q < 0` are 0, the rest are 1.
pub(crate) fn diagonal_split() -> (HexGrid, Vec<u32>) {
    label(2, |q, _| u32::from(q >= 0))
}

/// Two rings with a band of 1 along `q = 0` between two regions of 0.
pub(crate) fn bands() -> (HexGrid, Vec<u32>) {
    label(2, |q, _| u32::from(q == 0))
}

/// Three sectors labelled by the largest cube coordinate (q, r, s); ties go
/// to the lower label.
pub(crate) fn three_sectors(rings: u32) -> (HexGrid, Vec<u32>) {
    label(rings, |q, r| {
        let s = -q - r;
        if q >= r && q >= s {
            0
        } else if r >= s {
            1
        } else {
            2
        }
    })
}
