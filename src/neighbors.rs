//! Adjacency Functions that describe how a Path can move across a [`Level`]

use crate::{Cell, Cost, Level, NavigationConfig};

/// Defines which Cells can be reached from a Cell in a single step, and how much that step costs.
///
/// The search functions in [`dijkstra`](crate::dijkstra) never look at a [`Level`] directly.
/// Everything they know about the Level comes from an Adjacency. This makes it possible to swap
/// out the movement rules, or to test the search with a stub.
///
/// Any closure of the form `Fn(&Level, Cell) -> impl IntoIterator<Item = (Cell, Cost)>` is an
/// Adjacency:
/// ```
/// # use level_pathfinding::prelude::*;
/// let level = Level::builder().spaces([(0, 0), (1, 0)], 1.0).build().unwrap();
///
/// let only_right = |_: &Level, (x, y): Cell| [((x + 1, y), 1.0)];
///
/// let mut target = vec![];
/// only_right.neighbors(&level, (0, 0), &mut target);
/// assert_eq!(target, vec![((1, 0), 1.0)]);
/// ```
pub trait Adjacency {
	/// Appends every Neighbor of `cell` together with the Cost of the Edge to it to `target`.
	///
	/// The order of the Neighbors does not matter. Edge Costs must be non-negative.
	fn neighbors(&self, level: &Level, cell: Cell, target: &mut Vec<(Cell, Cost)>);
}

impl<F, I> Adjacency for F
where
	F: Fn(&Level, Cell) -> I,
	I: IntoIterator<Item = (Cell, Cost)>,
{
	fn neighbors(&self, level: &Level, cell: Cell, target: &mut Vec<(Cell, Cost)>) {
		target.extend(self(level, cell));
	}
}

/// The canonical Adjacency: up to 8 Neighbors with Costs blended between both Cells.
///
/// Moving between two neighboring Spaces costs the average of their intrinsic Costs. Diagonal
/// moves are additionally multiplied with [`diagonal_factor`](NavigationConfig::diagonal_factor)
/// (`√2` by default). This means that the Cost of a step depends on both the Cell that is left
/// and the Cell that is entered, so a Space with Cost `0` is still expensive to enter from a
/// costly Neighbor.
///
/// Walls and Cells outside of the Level are never Neighbors.
///
/// ```no_code
/// A: Agent, o: reachable in one step
/// o o o
///  \|/
/// o-A-o
///  /|\
/// o o o
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavigationEdges {
	config: NavigationConfig,
}

/// clockwise, starting at "up"
const DIRECTIONS: [(isize, isize); 8] = [
	(0, -1),
	(1, -1),
	(1, 0),
	(1, 1),
	(0, 1),
	(-1, 1),
	(-1, 0),
	(-1, -1),
];

impl NavigationEdges {
	/// Creates new NavigationEdges with the given Config.
	pub fn new(config: NavigationConfig) -> NavigationEdges {
		debug_assert!(
			config.diagonal_factor >= 1.0,
			"diagonal_factor has to be at least 1, got {}",
			config.diagonal_factor
		);
		NavigationEdges { config }
	}

	/// The Config these Edges were created with
	pub fn config(&self) -> NavigationConfig {
		self.config
	}

	/// The Cost of a single step from `from` to `to`.
	///
	/// Returns `None` if the two Cells are not Neighbors under this Config, or if either of them
	/// is not a Space.
	///
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use level_pathfinding::prelude::*;
	/// let level = Level::builder()
	///     .space((0, 0), 1.0)
	///     .space((1, 0), 3.0)
	///     .space((0, 1), 1.0)
	///     .build()
	///     .unwrap();
	/// let edges = NavigationEdges::default();
	///
	/// assert_eq!(edges.edge_cost(&level, (0, 0), (1, 0)), Some(2.0));
	/// assert_eq!(edges.edge_cost(&level, (1, 0), (0, 0)), Some(2.0));
	/// assert_eq!(edges.edge_cost(&level, (1, 0), (0, 1)), Some(2.0 * std::f64::consts::SQRT_2));
	/// assert_eq!(edges.edge_cost(&level, (0, 0), (0, 0)), None);
	/// ```
	pub fn edge_cost(&self, level: &Level, from: Cell, to: Cell) -> Option<Cost> {
		let from_cost = level.cost(from)?;
		let to_cost = level.cost(to)?;
		match (from.0.abs_diff(to.0), from.1.abs_diff(to.1)) {
			(0, 1) | (1, 0) => Some(self.blend(from_cost, to_cost, false)),
			(1, 1) if self.config.diagonal_moves => Some(self.blend(from_cost, to_cost, true)),
			_ => None,
		}
	}

	fn blend(&self, from_cost: Cost, to_cost: Cost, diagonal: bool) -> Cost {
		if diagonal {
			0.5 * self.config.diagonal_factor * (from_cost + to_cost)
		} else {
			0.5 * (from_cost + to_cost)
		}
	}
}

impl Adjacency for NavigationEdges {
	fn neighbors(&self, level: &Level, cell: Cell, target: &mut Vec<(Cell, Cost)>) {
		let own_cost = match level.cost(cell) {
			Some(cost) => cost,
			None => return,
		};
		let (max_x, max_y) = level.extent();
		let (x, y) = cell;

		for &(dx, dy) in DIRECTIONS.iter() {
			let diagonal = dx != 0 && dy != 0;
			if diagonal && !self.config.diagonal_moves {
				continue;
			}
			if (dx < 0 && x == 0)
				|| (dy < 0 && y == 0)
				|| (dx > 0 && x >= max_x)
				|| (dy > 0 && y >= max_y)
			{
				continue;
			}
			let other = ((x as isize + dx) as usize, (y as isize + dy) as usize);
			if let Some(other_cost) = level.cost(other) {
				target.push((other, self.blend(own_cost, other_cost, diagonal)));
			}
		}
	}
}

/// Lists the Neighbors of `cell` and the Cost of moving there, using the default
/// [`NavigationEdges`].
///
/// ## Examples
/// Basic usage:
/// ```
/// # use level_pathfinding::prelude::*;
/// let level = Level::builder()
///     .spaces([(0, 0), (1, 0), (0, 1), (1, 1)], 1.0)
///     .build()
///     .unwrap();
///
/// let neighbors = level_pathfinding::neighbors(&level, (0, 0));
/// assert_eq!(
///     neighbors,
///     vec![((1, 0), 1.0), ((1, 1), std::f64::consts::SQRT_2), ((0, 1), 1.0)],
/// );
/// ```
pub fn neighbors(level: &Level, cell: Cell) -> Vec<(Cell, Cost)> {
	let mut target = Vec::with_capacity(DIRECTIONS.len());
	NavigationEdges::default().neighbors(level, cell, &mut target);
	target
}

#[cfg(test)]
fn open_level(width: usize, height: usize, cost: Cost) -> Level {
	Level::builder()
		.spaces(
			(0..height).flat_map(|y| (0..width).map(move |x| (x, y))),
			cost,
		)
		.build()
		.unwrap()
}

#[test]
fn test_interior_neighbors() {
	let level = open_level(3, 3, 1.0);
	let cells: Vec<Cell> = neighbors(&level, (1, 1)).into_iter().map(|(c, _)| c).collect();
	assert_eq!(
		cells,
		vec![(1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2), (0, 1), (0, 0)],
	);
}

#[test]
fn test_boundary_neighbors_stay_in_range() {
	let level = open_level(4, 3, 1.0);
	let (max_x, max_y) = level.extent();
	assert_eq!((max_x, max_y), (3, 2));

	for y in 0..=max_y {
		for x in 0..=max_x {
			let found = neighbors(&level, (x, y));
			assert!(found.iter().all(|&(cell, _)| level.contains(cell)));

			let on_x_edge = x == 0 || x == max_x;
			let on_y_edge = y == 0 || y == max_y;
			let expected = match (on_x_edge, on_y_edge) {
				(true, true) => 3,
				(true, false) | (false, true) => 5,
				(false, false) => 8,
			};
			assert_eq!(found.len(), expected, "neighbors of {:?}", (x, y));
		}
	}
}

#[test]
fn test_walls_are_excluded() {
	let level = Level::builder()
		.spaces([(0, 0), (2, 0), (0, 1), (1, 1), (2, 1)], 1.0)
		.wall((1, 0))
		.build()
		.unwrap();

	let cells: Vec<Cell> = neighbors(&level, (0, 0)).into_iter().map(|(c, _)| c).collect();
	assert_eq!(cells, vec![(1, 1), (0, 1)]);
}

#[test]
fn test_non_space_has_no_neighbors() {
	let level = Level::builder()
		.spaces([(0, 0), (2, 0)], 1.0)
		.wall((1, 0))
		.build()
		.unwrap();

	assert!(neighbors(&level, (1, 0)).is_empty());
	assert!(neighbors(&level, (7, 7)).is_empty());
}

#[test]
fn test_cardinal_and_diagonal_costs() {
	for &cost in [0.5, 1.0, 3.0].iter() {
		let level = open_level(2, 2, cost);
		for (cell, edge) in neighbors(&level, (0, 0)) {
			if cell == (1, 1) {
				assert!((edge - cost * std::f64::consts::SQRT_2).abs() < 1e-12);
			} else {
				assert_eq!(edge, cost);
			}
		}
	}
}

#[test]
fn test_costs_are_blended() {
	let level = Level::builder()
		.space((0, 0), 0.0)
		.space((1, 0), 4.0)
		.build()
		.unwrap();

	assert_eq!(neighbors(&level, (0, 0)), vec![((1, 0), 2.0)]);
	assert_eq!(neighbors(&level, (1, 0)), vec![((0, 0), 2.0)]);
}

#[test]
fn test_edges_are_symmetric() {
	let level = Level::builder()
		.space((0, 0), 1.0)
		.space((1, 0), 7.25)
		.space((0, 1), 0.1)
		.space((1, 1), 3.0)
		.build()
		.unwrap();

	for &from in level.spaces().keys() {
		for (to, cost) in neighbors(&level, from) {
			let back = neighbors(&level, to)
				.into_iter()
				.find(|&(cell, _)| cell == from)
				.map(|(_, cost)| cost);
			assert_eq!(back, Some(cost));
		}
	}
}

#[test]
fn test_cardinal_only() {
	let level = open_level(3, 3, 1.0);
	let edges = NavigationEdges::new(NavigationConfig::CARDINAL_ONLY);

	let mut target = vec![];
	edges.neighbors(&level, (1, 1), &mut target);
	let cells: Vec<Cell> = target.iter().map(|&(c, _)| c).collect();
	assert_eq!(cells, vec![(1, 0), (2, 1), (1, 2), (0, 1)]);

	assert_eq!(edges.edge_cost(&level, (0, 0), (1, 1)), None);
	assert_eq!(edges.config(), NavigationConfig::CARDINAL_ONLY);
}

#[test]
fn test_closure_adjacency_appends() {
	let level = open_level(2, 1, 1.0);
	let stub = |_: &Level, _: Cell| vec![((9, 9), 0.25)];

	let mut target = vec![((0, 0), 1.0)];
	stub.neighbors(&level, (0, 0), &mut target);
	assert_eq!(target, vec![((0, 0), 1.0), ((9, 9), 0.25)]);
}
