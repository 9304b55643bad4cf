use std::fmt::{Display, Formatter};

use crate::shape::Orientation;

/// The largest number an island may carry: two bridges in each of four directions.
pub const MAX_ISLAND: u8 = 8;

/// How many bridges run side by side along a line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum BridgeWidth {
    /// One bridge, drawn `-` or `|`.
    Single,
    /// Two bridges, drawn `=` or `H`.
    Double,
}

impl BridgeWidth {
    /// Bridge endpoints this width contributes to each island it touches.
    pub fn count(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::Double => 2,
        }
    }

    /// The next state of the toggle cycle none → single → double → none.
    pub fn cycle(width: Option<Self>) -> Option<Self> {
        match width {
            None => Some(Self::Single),
            Some(Self::Single) => Some(Self::Double),
            Some(Self::Double) => None,
        }
    }

    /// Add one bridge to `width`, saturating at double.
    pub fn widen(width: Option<Self>) -> Self {
        match width {
            None => Self::Single,
            Some(_) => Self::Double,
        }
    }
}

/// A single grid cell.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Cell {
    /// An island requiring exactly this many bridge endpoints, `1..=8`.
    Island(u8),
    /// One segment of a bridge between two islands.
    Bridge {
        /// The axis the bridge runs along.
        orientation: Orientation,
        /// Single or double.
        width: BridgeWidth,
    },
    /// Open water.
    #[default]
    Empty,
}

impl Cell {
    /// The island number, if this is an island.
    pub fn island(&self) -> Option<u8> {
        match self {
            Self::Island(n) => Some(*n),
            _ => None,
        }
    }

    /// Whether this cell is an island of any number.
    pub fn is_island(&self) -> bool {
        self.island().is_some()
    }

    /// The bridge segment held by this cell, if any.
    pub fn bridge(&self) -> Option<(Orientation, BridgeWidth)> {
        match self {
            Self::Bridge { orientation, width } => Some((*orientation, *width)),
            _ => None,
        }
    }

    /// Width of a bridge segment running along `orientation`; [`None`] for anything else, including crossing segments.
    pub(crate) fn bridge_along(&self, orientation: Orientation) -> Option<BridgeWidth> {
        self.bridge()
            .filter(|(o, _)| *o == orientation)
            .map(|(_, width)| width)
    }

    /// The cell stored on the interior of a line of `orientation` carrying `width`.
    pub(crate) fn segment(orientation: Orientation, width: Option<BridgeWidth>) -> Self {
        match width {
            Some(width) => Self::Bridge { orientation, width },
            None => Self::Empty,
        }
    }

    /// The integer encoding used by snapshots: `0` empty, `1..=8` islands, `10`/`11` horizontal single/double, `12`/`13` vertical single/double.
    pub fn code(&self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Island(n) => *n,
            Self::Bridge { orientation, width } => {
                let base = match orientation {
                    Orientation::Horizontal => 10,
                    Orientation::Vertical => 12,
                };
                base + match width {
                    BridgeWidth::Single => 0,
                    BridgeWidth::Double => 1,
                }
            }
        }
    }

    /// Inverse of [`Self::code`]. Codes outside the encoding (`9`, `14` and above) yield [`None`].
    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => Self::Empty,
            1..=MAX_ISLAND => Self::Island(code),
            10 => Self::Bridge { orientation: Orientation::Horizontal, width: BridgeWidth::Single },
            11 => Self::Bridge { orientation: Orientation::Horizontal, width: BridgeWidth::Double },
            12 => Self::Bridge { orientation: Orientation::Vertical, width: BridgeWidth::Single },
            13 => Self::Bridge { orientation: Orientation::Vertical, width: BridgeWidth::Double },
            _ => return None,
        })
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Self::Empty => '.',
            Self::Island(n) => char::from(b'0' + n),
            Self::Bridge { orientation: Orientation::Horizontal, width: BridgeWidth::Single } => '-',
            Self::Bridge { orientation: Orientation::Horizontal, width: BridgeWidth::Double } => '=',
            Self::Bridge { orientation: Orientation::Vertical, width: BridgeWidth::Single } => '|',
            Self::Bridge { orientation: Orientation::Vertical, width: BridgeWidth::Double } => 'H',
        })
    }
}
