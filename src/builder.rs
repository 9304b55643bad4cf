//! Assembling [`Board`]s.

use std::num::NonZero;

use ndarray::Array2;

use crate::board::Board;
use crate::bridge::Solution;
use crate::cell::{Cell, MAX_ISLAND};
use crate::config::DEFAULT_UNDO_LIMIT;
use crate::history::UndoHistory;
use crate::location::{Dimension, Location};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// An island was placed or removed outside the bounds specified by `dims` on a builder.
    FeatureOutOfBounds,
    /// An island number outside `1..=8`.
    IslandNumberOutOfRange,
}

/// Assembles the starting position of a [`Board`]: its islands, an optional solution and the undo limit.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once a builder turns invalid, it ignores every further island change.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    // width, height
    dims: (Dimension, Dimension),
    cells: Array2<Cell>,
    invalid_reasons: Vec<BuilderInvalidReason>,
    solution: Option<Solution>,
    undo_limit: usize,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::with_dims((NonZero::<usize>::MIN, NonZero::<usize>::MIN))
    }
}

impl BoardBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(width, height)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            // row major
            cells: Array2::from_shape_simple_fn((dims.1.get(), dims.0.get()), Cell::default),
            invalid_reasons: Default::default(),
            solution: None,
            undo_limit: DEFAULT_UNDO_LIMIT,
        }
    }

    /// Place an island requiring `number` bridges at `location`, replacing whatever island was there.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is out of bounds,
    /// or an [`IslandNumberOutOfRange`](BuilderInvalidReason::IslandNumberOutOfRange) invalid state if `number` is not in `1..=8`.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_island(&mut self, location: Location, number: u8) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !location.within(self.dims) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        if !(1..=MAX_ISLAND).contains(&number) {
            self.invalid_reasons.push(BuilderInvalidReason::IslandNumberOutOfRange);
            return self;
        }

        self.cells[location.as_index()] = Cell::Island(number);
        self
    }

    /// Clear `location` back to water.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn remove_island(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !location.within(self.dims) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        self.cells[location.as_index()] = Cell::Empty;
        self
    }

    /// Bundle a solution to replay on demand. An empty solution counts as none.
    pub fn with_solution(&mut self, solution: Solution) -> &mut Self {
        self.solution = Some(solution).filter(|solution| !solution.is_empty());
        self
    }

    /// Number of toggles kept for undo. Defaults to [`DEFAULT_UNDO_LIMIT`].
    pub fn undo_limit(&mut self, limit: usize) -> &mut Self {
        self.undo_limit = limit;
        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`] with no bridges.
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Board, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(Board {
            cells: self.cells.clone(),
            dims: self.dims,
            history: UndoHistory::with_capacity(self.undo_limit),
            solution: self.solution.clone(),
            selection: None,
        })
    }
}
