use std::fmt::{Display, Formatter};

use unordered_pair::UnorderedPair;

use crate::cell::BridgeWidth;
use crate::location::Location;
use crate::shape::Orientation;

/// A straight line between two cells sharing a row or a column, normalized so that it runs left to right or top to bottom.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Span {
    start: Location,
    end: Location,
    orientation: Orientation,
}

impl Span {
    /// Normalize the line between `a` and `b`.
    ///
    /// Returns [`None`] when the points are identical or share neither row nor column.
    pub fn between(a: Location, b: Location) -> Option<Self> {
        let orientation = Orientation::between(a, b)?;
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Some(Self { start, end, orientation })
    }

    /// The upper or left endpoint.
    pub fn start(&self) -> Location {
        self.start
    }

    /// The lower or right endpoint.
    pub fn end(&self) -> Location {
        self.end
    }

    /// The axis shared by both endpoints.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of cells strictly between the endpoints.
    pub fn interior_len(&self) -> usize {
        match self.orientation {
            Orientation::Horizontal => self.end.0 - self.start.0 - 1,
            Orientation::Vertical => self.end.1 - self.start.1 - 1,
        }
    }

    /// Every cell strictly between the endpoints, in order from `start`.
    pub fn interior(&self) -> impl Iterator<Item=Location> {
        let step = self.orientation.forward();
        let mut at = self.start;
        (0..self.interior_len()).map(move |_| {
            at = step.attempt_from(at);
            at
        })
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// What lies on the line between two locations, as reported by [`Board::validate_bridge`](crate::Board::validate_bridge).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BridgeStatus {
    /// The line cannot hold a bridge: bad coordinates, a non-island endpoint, or an obstructed or crossed path.
    Invalid,
    /// A bridge may be built; none exists yet.
    Absent,
    /// A bridge of this width already spans the line.
    Present(BridgeWidth),
}

impl BridgeStatus {
    /// Whether the line can hold a bridge at all.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }

    /// The width currently on a valid line; [`None`] both for [`Self::Absent`] and [`Self::Invalid`].
    pub fn width(&self) -> Option<BridgeWidth> {
        match self {
            Self::Present(width) => Some(*width),
            _ => None,
        }
    }
}

/// A mutation applied to one line of the board.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BridgeChange {
    /// The line that changed.
    pub span: Span,
    /// The bridge on the line before the change; [`None`] for no bridge.
    pub before: Option<BridgeWidth>,
    /// The bridge on the line after the change.
    pub after: Option<BridgeWidth>,
}

/// The bridges of a known-good solution, as endpoint pairs in file order.
///
/// A pair listed twice stands for a double bridge.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Solution(Vec<UnorderedPair<Location>>);

impl Solution {
    /// The endpoint pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item=&UnorderedPair<Location>> {
        self.0.iter()
    }

    /// Number of listed bridges, counting a double bridge twice.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no bridges are listed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<UnorderedPair<Location>> for Solution {
    fn from_iter<T: IntoIterator<Item=UnorderedPair<Location>>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
