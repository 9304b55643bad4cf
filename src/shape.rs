use strum::VariantArray;

use crate::location::Location;

/// The axis a bridge runs along.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Orientation {
    /// Along a row, left to right.
    Horizontal,
    /// Along a column, top to bottom.
    Vertical,
}

impl Orientation {
    /// The orientation of the straight line from `a` to `b`, if the two share exactly one of row or column.
    pub fn between(a: Location, b: Location) -> Option<Self> {
        match (a.0 == b.0, a.1 == b.1) {
            (false, true) => Some(Self::Horizontal),
            (true, false) => Some(Self::Vertical),
            // identical or diagonal
            _ => None,
        }
    }

    /// The step leading away from the lower-indexed end of a line of this orientation.
    pub(crate) fn forward(&self) -> SquareStep {
        match self {
            Self::Horizontal => SquareStep::Right,
            Self::Vertical => SquareStep::Down,
        }
    }
}

/// A single step on the square grid.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum SquareStep {
    /// Toward row 0.
    Up,
    /// Away from row 0.
    Down,
    /// Toward column 0.
    Left,
    /// Away from column 0.
    Right,
}

impl SquareStep {
    /// Forward directions are those which, upon stepping, cause the destination location to be indexed higher than the origin.
    pub(crate) const FORWARD_VARIANTS: &'static [Self] = &[Self::Right, Self::Down];

    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// Stepping off the top or left edge wraps to a location outside every board.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((1, 0)),
        }
    }

    /// The axis a bridge leaving an island in this direction runs along.
    pub fn orientation(&self) -> Orientation {
        match self {
            Self::Up | Self::Down => Orientation::Vertical,
            Self::Left | Self::Right => Orientation::Horizontal,
        }
    }

    /// Get all neighbors of a [`Location`] in "theory", by attempting every step direction.
    pub fn neighbors_of(location: Location) -> impl Iterator<Item=(Self, Location)> {
        Self::VARIANTS.iter().map(move |dir| (*dir, dir.attempt_from(location)))
    }
}
