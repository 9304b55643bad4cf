use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::{Array2, ArrayView2};
use petgraph::algo::connected_components;
use petgraph::graphmap::UnGraphMap;
use tracing::{debug, info, trace, warn};

use crate::bridge::{BridgeChange, BridgeStatus, Solution, Span};
use crate::cell::{BridgeWidth, Cell};
use crate::error::BoardError;
use crate::history::UndoHistory;
use crate::location::{Dimension, Location};
use crate::shape::SquareStep;

/// How an island's bridges compare to its number.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum IslandStatus {
    /// Fewer bridges than required.
    Open,
    /// Exactly as many bridges as required.
    Complete,
    /// More bridges than required.
    Overfull,
}

/// Result of one click of the two-click bridge gesture, see [`Board::click`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Click {
    /// The click was outside the board; nothing changed.
    Ignored,
    /// First click: this location now awaits a second click.
    Armed(Location),
    /// Second click completed a toggle.
    Bridged(BridgeChange),
    /// Second click did not describe a legal bridge; the selection was dropped anyway.
    Rejected,
}

/// Successful outcomes of [`Board::replay_solution`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Replay {
    /// No solution was loaded, the board is untouched.
    NoSolution,
    /// The solution was built and solves the board.
    Solved,
}

/// A Hashiwokakero board: islands, the bridges built between them so far, and the player's undo history.
///
/// [`Board`]s should be built using a [`BoardBuilder`](crate::builder::BoardBuilder).
/// Islands never change once built; every mutation goes through the bridge operations below.
pub struct Board {
    pub(crate) cells: Array2<Cell>,
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) history: UndoHistory,
    pub(crate) solution: Option<Solution>,
    pub(crate) selection: Option<Location>,
}

impl Board {
    /// `(width, height)`.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.dims.0.get()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.dims.1.get()
    }

    /// The cell at `location`, or [`None`] if it lies outside the board.
    pub fn cell(&self, location: Location) -> Option<Cell> {
        self.cells.get(location.as_index()).copied()
    }

    /// Read-only view of every cell, indexed `[row, column]`.
    pub fn cells(&self) -> ArrayView2<'_, Cell> {
        self.cells.view()
    }

    /// Every cell in its integer encoding, see [`Cell::code`].
    pub fn codes(&self) -> Array2<u8> {
        self.cells.map(Cell::code)
    }

    /// All islands with their numbers, in row-major order.
    pub fn islands(&self) -> impl Iterator<Item=(Location, u8)> + '_ {
        self.cells.indexed_iter()
            .filter_map(|(index, cell)| cell.island().map(|n| (Location::from(index), n)))
    }

    /// The solution bundled at build time, if any.
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Toggles that [`Self::undo`] can still revert.
    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// The armed first click of a pending two-click gesture.
    pub fn selection(&self) -> Option<Location> {
        self.selection
    }

    /// Drop an armed first click, if any.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Check whether the line between `a` and `b` can hold a bridge, and which bridge already spans it.
    ///
    /// The endpoints may be given in either order. The line is [`BridgeStatus::Invalid`] if the points coincide or are not aligned,
    /// if either lies outside the board or is not an island, if the islands are adjacent,
    /// or if the cells between them are not all empty or all the same bridge running along the line.
    pub fn validate_bridge(&self, a: Location, b: Location) -> BridgeStatus {
        self.inspect(a, b).map_or(BridgeStatus::Invalid, |(_, status)| status)
    }

    fn inspect(&self, a: Location, b: Location) -> Option<(Span, BridgeStatus)> {
        let span = Span::between(a, b)?;
        for end in [span.start(), span.end()] {
            if !self.cell(end)?.is_island() {
                return None;
            }
        }

        // an empty interior (adjacent islands) has no common value either
        let interior = span.interior()
            .map(|location| self.cells[location.as_index()])
            .all_equal_value()
            .ok()?;

        match interior {
            Cell::Empty => Some((span, BridgeStatus::Absent)),
            cell => cell.bridge_along(span.orientation()).map(|width| (span, BridgeStatus::Present(width))),
        }
    }

    fn apply(&mut self, span: Span, before: Option<BridgeWidth>, after: Option<BridgeWidth>) -> BridgeChange {
        let segment = Cell::segment(span.orientation(), after);
        for location in span.interior() {
            self.cells[location.as_index()] = segment;
        }

        BridgeChange { span, before, after }
    }

    /// Advance the bridge between `a` and `b` one step through the cycle none → single → double → none, and record the step for [`Self::undo`].
    ///
    /// Illegal lines, as judged by [`Self::validate_bridge`], leave the board untouched and yield [`BoardError::InvalidBridgeRequest`].
    pub fn toggle_bridge(&mut self, a: Location, b: Location) -> Result<BridgeChange, BoardError> {
        let Some((span, status)) = self.inspect(a, b) else {
            trace!(%a, %b, "ignoring bridge request");
            return Err(BoardError::InvalidBridgeRequest);
        };

        let before = status.width();
        let change = self.apply(span, before, BridgeWidth::cycle(before));
        self.history.record(change);
        debug!(%span, before = ?change.before, after = ?change.after, "toggled bridge");

        Ok(change)
    }

    /// Bridge endpoints touching the island at `location`.
    ///
    /// Zero for anything that is not an island, including locations outside the board.
    pub fn count_bridges(&self, location: Location) -> usize {
        if !self.cell(location).is_some_and(|cell| cell.is_island()) {
            return 0;
        }

        SquareStep::neighbors_of(location)
            .filter_map(|(direction, neighbor)| self.cell(neighbor)?.bridge_along(direction.orientation()))
            .map(|width| width.count())
            .sum()
    }

    /// Compare the bridges at `location` to its island number; [`None`] if there is no island there.
    pub fn island_status(&self, location: Location) -> Option<IslandStatus> {
        let required = self.cell(location)?.island()?;
        Some(match self.count_bridges(location).cmp(&usize::from(required)) {
            Ordering::Less => IslandStatus::Open,
            Ordering::Equal => IslandStatus::Complete,
            Ordering::Greater => IslandStatus::Overfull,
        })
    }

    /// Whether every island carries exactly as many bridges as its number.
    pub fn is_solved(&self) -> bool {
        self.islands().all(|(location, n)| self.count_bridges(location) == usize::from(n))
    }

    /// Remove every bridge and forget the undo history.
    pub fn reset(&mut self) {
        self.cells.map_inplace(|cell| {
            if cell.bridge().is_some() {
                *cell = Cell::Empty;
            }
        });
        self.history.clear();
        self.selection = None;
        info!("board reset");
    }

    /// Revert the most recent recorded toggle, restoring its line to the bridge it held before.
    ///
    /// Yields [`BoardError::EmptyHistory`] when nothing is recorded.
    pub fn undo(&mut self) -> Result<BridgeChange, BoardError> {
        let entry = self.history.pop().ok_or(BoardError::EmptyHistory)?;
        // entries are reverted newest first, so the line still holds what the entry left there
        debug_assert_eq!(self.validate_bridge(entry.span.start(), entry.span.end()).width(), entry.after);

        let change = self.apply(entry.span, entry.after, entry.before);
        debug!(span = %change.span, before = ?change.before, after = ?change.after, "undid bridge");

        Ok(change)
    }

    /// Clear the board and build every bridge of the loaded solution.
    ///
    /// Each solution pair adds one bridge to its line: a pair listed twice yields a double bridge, and a double bridge is never removed.
    /// Pairs that cannot hold a bridge are skipped. Nothing is recorded for [`Self::undo`].
    ///
    /// Yields [`BoardError::SolutionMismatch`] if the resulting board is not solved; the bridges stay in place so they can be inspected.
    pub fn replay_solution(&mut self) -> Result<Replay, BoardError> {
        let Some(pairs) = self.solution.as_ref().map(|solution| solution.iter().map(|pair| (pair.0, pair.1)).collect_vec()) else {
            return Ok(Replay::NoSolution);
        };

        self.reset();
        for (a, b) in pairs {
            match self.inspect(a, b) {
                Some((span, status)) => {
                    let before = status.width();
                    self.apply(span, before, Some(BridgeWidth::widen(before)));
                }
                None => warn!(%a, %b, "skipping solution bridge that cannot be built"),
            }
        }

        if self.is_solved() {
            info!("solution replayed");
            Ok(Replay::Solved)
        } else {
            warn!("replayed solution does not solve the puzzle");
            Err(BoardError::SolutionMismatch)
        }
    }

    /// Feed one click of the two-click bridge gesture.
    ///
    /// A click inside the board arms the selection if none is armed; otherwise it disarms the selection and toggles the bridge between the two clicks.
    /// Clicks outside the board are ignored and keep any armed selection.
    pub fn click(&mut self, location: Location) -> Click {
        if !location.within(self.dims) {
            return Click::Ignored;
        }

        match self.selection.take() {
            None => {
                self.selection = Some(location);
                Click::Armed(location)
            }
            Some(armed) => match self.toggle_bridge(armed, location) {
                Ok(change) => Click::Bridged(change),
                Err(_) => Click::Rejected,
            },
        }
    }

    /// Walk from the island at `from` across a bridge in `step` direction, returning the island on the other side.
    fn follow_bridge(&self, from: Location, step: SquareStep) -> Option<(Location, BridgeWidth)> {
        let orientation = step.orientation();
        let mut at = step.attempt_from(from);
        let width = self.cell(at)?.bridge_along(orientation)?;

        loop {
            match self.cell(at)? {
                Cell::Island(_) => return Some((at, width)),
                cell if cell.bridge_along(orientation) == Some(width) => at = step.attempt_from(at),
                _ => return None,
            }
        }
    }

    /// The islands as nodes and built bridges as edges, weighted by width.
    pub fn island_graph(&self) -> UnGraphMap<Location, BridgeWidth> {
        let islands = self.islands().map(|(location, _)| location).collect_vec();
        let mut graph = UnGraphMap::with_capacity(islands.len(), islands.len() * 2);

        for location in &islands {
            graph.add_node(*location);
        }
        // forward steps only, so each bridge is found once from its upper or left end
        for (location, step) in islands.iter().cartesian_product(SquareStep::FORWARD_VARIANTS) {
            if let Some((other, width)) = self.follow_bridge(*location, *step) {
                graph.add_edge(*location, other, width);
            }
        }

        graph
    }

    /// Whether the bridges built so far join every island into one group.
    ///
    /// Not part of [`Self::is_solved`]; boards without islands count as connected.
    pub fn islands_connected(&self) -> bool {
        connected_components(&self.island_graph()) <= 1
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
