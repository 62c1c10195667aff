use crate::{Cell, Cost};
use std::fmt;

/// The ways a search on a [`Level`](crate::Level) can fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
	/// `destination` cannot be reached from `source`.
	///
	/// This is a regular Outcome of a search, for example when the destination is a Wall or lies
	/// in a Pocket that is cut off by Walls.
	NotFound {
		/// the Cell the search started at
		source: Cell,
		/// the Cell that was searched for
		destination: Cell,
	},
	/// No Waypoint with the given Label exists on the Level.
	UnknownWaypoint(String),
}

impl fmt::Display for SearchError {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		match self {
			SearchError::NotFound {
				source,
				destination,
			} => write!(fmt, "no path from {:?} to {:?}", source, destination),
			SearchError::UnknownWaypoint(label) => write!(fmt, "unknown waypoint {:?}", label),
		}
	}
}

impl std::error::Error for SearchError {}

/// The ways the contents of a [`Level`](crate::Level) can be inconsistent.
#[derive(Clone, Debug, PartialEq)]
pub enum LevelError {
	/// The Cell was given both as a Space and as a Wall.
	Overlap(Cell),
	/// The Waypoint refers to a Cell that is not a Space.
	MissingWaypoint {
		/// the Label of the Waypoint
		label: String,
		/// the Cell the Waypoint refers to
		cell: Cell,
	},
	/// The intrinsic Cost of a Space is negative, infinite or NaN.
	InvalidCost {
		/// the Space with the invalid Cost
		cell: Cell,
		/// the invalid Cost
		cost: Cost,
	},
}

impl fmt::Display for LevelError {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		match self {
			LevelError::Overlap(cell) => write!(fmt, "{:?} is both a space and a wall", cell),
			LevelError::MissingWaypoint { label, cell } => {
				write!(fmt, "waypoint {:?} at {:?} is not a space", label, cell)
			}
			LevelError::InvalidCost { cell, cost } => {
				write!(fmt, "space {:?} has invalid cost {}", cell, cost)
			}
		}
	}
}

impl std::error::Error for LevelError {}
