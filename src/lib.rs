#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find minimum-cost Paths across a Level.
//!
//! ## Introduction
//! A Level is a two-dimensional Grid made of walkable Spaces, impassable Walls and named
//! Waypoints. Every Space has an intrinsic Cost (think of the difficulty of the Terrain at that
//! Cell), and moving between two neighboring Spaces costs the average of both intrinsic Costs.
//! Diagonal moves are scaled by `√2`, so they are never cheaper than cardinal moves on equal
//! Terrain. Walls are not expensive Spaces, they are holes in the Graph.
//!
//! This crate answers two questions about a Level:
//! - what is the cheapest Path between two Cells (or two Waypoints)?
//! - what is the cheapest Cost from one Cell to every other Cell?
//!
//! Both are answered with [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
//! The Level itself is never modified by a search, so a single Level can be shared between as
//! many queries (and threads) as needed.
//!
//! ## Examples
//! Creating a Level:
//! ```
//! use level_pathfinding::prelude::*;
//!
//! // a . .
//! // . X .
//! // . . b
//! let level = Level::builder()
//!     .spaces((0..3).flat_map(|y| (0..3).map(move |x| (x, y))).filter(|&c| c != (1, 1)), 1.0)
//!     .wall((1, 1))
//!     .waypoint('a', (0, 0))
//!     .waypoint('b', (2, 2))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(level.extent(), (2, 2));
//! ```
//! Note that this crate does not read Levels from files. Any format can be used, as long as the
//! Spaces, Walls and Waypoints can be handed to the [`LevelBuilder`] or to [`Level::new`].
//!
//! ### Pathfinding
//! Finding the Path between two Waypoints:
//! ```
//! # use level_pathfinding::prelude::*;
//! #
//! # let level = Level::builder()
//! #     .spaces((0..3).flat_map(|y| (0..3).map(move |x| (x, y))).filter(|&c| c != (1, 1)), 1.0)
//! #     .wall((1, 1))
//! #     .waypoint('a', (0, 0))
//! #     .waypoint('b', (2, 2))
//! #     .build()
//! #     .unwrap();
//! #
//! // route returns Ok(Path) on success
//! let path = level.route("a", "b").unwrap();
//!
//! assert_eq!(path.first(), Some(&(0, 0)));
//! assert_eq!(path.last(), Some(&(2, 2)));
//!
//! // the Wall in the middle forces a detour over one of the corners
//! assert_eq!(path.len(), 4);
//! ```
//!
//! Finding the Cost to every Cell:
//! ```
//! # use level_pathfinding::prelude::*;
//! #
//! # let level = Level::builder()
//! #     .spaces((0..3).flat_map(|y| (0..3).map(move |x| (x, y))).filter(|&c| c != (1, 1)), 1.0)
//! #     .wall((1, 1))
//! #     .waypoint('a', (0, 0))
//! #     .waypoint('b', (2, 2))
//! #     .build()
//! #     .unwrap();
//! #
//! let costs = level.cost_to_all((0, 0));
//!
//! assert_eq!(costs[&(0, 0)], 0.0);
//! assert_eq!(costs[&(2, 0)], 2.0);
//!
//! // Walls are never reachable
//! assert_eq!(costs[&(1, 1)], f64::INFINITY);
//! ```
//!
//! ### Custom Adjacency
//! The search functions in [`dijkstra`] receive the Adjacency Function as an explicit Parameter.
//! [`NavigationEdges`](neighbors::NavigationEdges) is the canonical one, but any closure works:
//! ```
//! # use level_pathfinding::prelude::*;
//! let level = Level::builder()
//!     .spaces([(0, 0), (1, 0), (2, 0)], 1.0)
//!     .build()
//!     .unwrap();
//!
//! // every step costs 10, regardless of the Terrain
//! let flat = |level: &Level, (x, y): Cell| {
//!     let right = (x + 1, y);
//!     level.is_space(right).then(|| (right, 10.0))
//! };
//!
//! let path = dijkstra::shortest_path(&level, (0, 0), (2, 0), &flat).unwrap();
//! assert_eq!(path.cost, 20.0);
//! ```
//!
//! ### Configuration
//! [`NavigationConfig`] controls which moves [`NavigationEdges`](neighbors::NavigationEdges)
//! produces:
//! ```
//! use level_pathfinding::prelude::*;
//! let level = Level::builder()
//!     .spaces([(0, 0), (1, 0), (0, 1), (1, 1)], 1.0)
//!     .build()
//!     .unwrap();
//!
//! let edges = NavigationEdges::new(NavigationConfig::CARDINAL_ONLY);
//! let path = dijkstra::shortest_path(&level, (0, 0), (1, 1), &edges).unwrap();
//!
//! assert_eq!(path.len(), 3);
//! assert_eq!(path.cost, 2.0);
//! ```

/// A Position on the Level
pub type Cell = (usize, usize);

/// The Type used for intrinsic and accumulated Costs
pub type Cost = f64;

/// A [`HashMap`](hashbrown::HashMap) keyed by [`Cell`]s
pub type CellMap<V> = hashbrown::HashMap<Cell, V>;
/// A [`HashSet`](hashbrown::HashSet) of [`Cell`]s
pub type CellSet = hashbrown::HashSet<Cell>;

#[cfg(feature = "log")]
macro_rules! start_timer {
	($timer: ident) => {
		let $timer = std::time::Instant::now();
	};
}
#[cfg(not(feature = "log"))]
macro_rules! start_timer {
	($timer: ident) => {};
}

#[cfg(feature = "log")]
macro_rules! trace_timing {
	($msg: literal, $timer: ident) => {
		let now = std::time::Instant::now();
		log::trace!(concat!("time to ", $msg, ": {:?}"), now - $timer);
		#[allow(unused_variables)]
		let $timer = now;
	};
}
#[cfg(not(feature = "log"))]
macro_rules! trace_timing {
	($msg: literal, $timer: ident) => {};
}

mod error;
pub use self::error::{LevelError, SearchError};

mod level;
pub use self::level::{Level, LevelBuilder};

mod navigation_config;
pub use self::navigation_config::NavigationConfig;

pub mod neighbors;
pub use self::neighbors::neighbors;

pub mod dijkstra;

mod path;
pub use self::path::Path;

/// The most commonly used Types and Functions
pub mod prelude {
	pub use crate::{
		dijkstra,
		neighbors::{Adjacency, NavigationEdges},
		Cell, CellMap, Cost, Level, LevelError, NavigationConfig, Path, SearchError,
	};
}

use std::cmp::Ordering;

/// An Entry in the Frontier of a search.
///
/// Ordered so that a [`BinaryHeap`](std::collections::BinaryHeap) pops the lowest Cost first,
/// and among equal Costs the Entry that was pushed first.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Element<Id>(pub Id, pub Cost, pub usize);

impl<Id> PartialEq for Element<Id> {
	fn eq(&self, rhs: &Self) -> bool {
		self.cmp(rhs) == Ordering::Equal
	}
}
impl<Id> Eq for Element<Id> {}
impl<Id> PartialOrd for Element<Id> {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl<Id> Ord for Element<Id> {
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.1.total_cmp(&self.1).then_with(|| rhs.2.cmp(&self.2))
	}
}
