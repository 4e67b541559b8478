use std::f64::consts::{FRAC_PI_3, FRAC_PI_6};

/// One of the six neighbour directions of a hexagonal cell, in
/// anticlockwise order starting from east.
///
/// The same type names the six corners of a cell: corner `d` lies between
/// neighbour directions `d` and `d.next()`. Side `d` (the side facing
/// direction `d`) therefore runs from corner `d.prev()` to corner `d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dir {
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

impl Dir {
    /// All directions in anticlockwise order.
    pub const ALL: [Dir; 6] = [
        Dir::East,
        Dir::NorthEast,
        Dir::NorthWest,
        Dir::West,
        Dir::SouthWest,
        Dir::SouthEast,
    ];

    /// Index in `0..6`, east being 0.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction for an index, wrapping modulo 6.
    #[must_use]
    pub fn from_index(index: usize) -> Dir {
        Self::ALL[index % 6]
    }

    /// The anticlockwise successor.
    #[must_use]
    pub fn next(self) -> Dir {
        self.rotate(1)
    }

    /// The clockwise predecessor.
    #[must_use]
    pub fn prev(self) -> Dir {
        self.rotate(5)
    }

    #[must_use]
    pub fn opposite(self) -> Dir {
        self.rotate(3)
    }

    /// Rotates anticlockwise by `steps` sixths of a turn.
    #[must_use]
    pub fn rotate(self, steps: usize) -> Dir {
        Self::from_index(self.index() + steps % 6)
    }

    /// Axial `(q, r)` offset of the neighbour in this direction.
    #[must_use]
    pub fn axial_offset(self) -> (i32, i32) {
        match self {
            Dir::East => (1, 0),
            Dir::NorthEast => (0, 1),
            Dir::NorthWest => (-1, 1),
            Dir::West => (-1, 0),
            Dir::SouthWest => (0, -1),
            Dir::SouthEast => (1, -1),
        }
    }

    /// Angle in radians of corner `self`, measured from the cell centre.
    #[must_use]
    pub fn corner_angle(self) -> f64 {
        FRAC_PI_6 + f64::from(self as u8) * FRAC_PI_3
    }

    /// Name of this corner as seen from the neighbour in direction `across`.
    ///
    /// Only the two neighbours flanking corner `self` share it, so any other
    /// `across` yields `None`.
    #[must_use]
    pub fn corner_seen_from(self, across: Dir) -> Option<Dir> {
        if across == self {
            Some(self.rotate(2))
        } else if across == self.next() {
            Some(self.rotate(4))
        } else {
            None
        }
    }
}

/// Sense in which a walk advances around its pivot cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    Anticlockwise,
}

impl Rotation {
    /// The side crossed next when leaving `corner` in this rotation.
    #[must_use]
    pub fn leading_side(self, corner: Dir) -> Dir {
        match self {
            Rotation::Clockwise => corner,
            Rotation::Anticlockwise => corner.next(),
        }
    }

    /// The corner reached after traversing the leading side of `corner`.
    #[must_use]
    pub fn advance(self, corner: Dir) -> Dir {
        match self {
            Rotation::Clockwise => corner.prev(),
            Rotation::Anticlockwise => corner.next(),
        }
    }

    /// Name of `corner` on the neighbour across the leading side.
    #[must_use]
    pub fn pivot_corner(self, corner: Dir) -> Dir {
        match self {
            Rotation::Clockwise => corner.rotate(2),
            Rotation::Anticlockwise => corner.rotate(4),
        }
    }
}
