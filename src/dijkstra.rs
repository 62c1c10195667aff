//! Searches on a [`Level`] using [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
//!
//! All functions in this Module take the [`Adjacency`] as an explicit Parameter. The search
//! never looks at the Level itself, it only hands it to the Adjacency.
//!
//! Every call creates its own search State (Frontier, best known Costs and Predecessors) and
//! drops it before returning, so concurrent searches on the same Level never interfere.
//!
//! ## Ties
//! Frontier entries with the same accumulated Cost are expanded in the order they were added to
//! the Frontier. Combined with the rule that a Cell's best known Cost is only replaced by a
//! *strictly* smaller one, this makes every search fully deterministic for a given Adjacency.

use crate::{neighbors::Adjacency, Cell, CellMap, Cost, Element, Level, Path, SearchError};

use hashbrown::hash_map::Entry;
use std::collections::BinaryHeap;

/// Calculates the cheapest Path from `source` to `destination`.
///
/// The returned Path starts with `source` and ends with `destination`. If `source` and
/// `destination` are the same Cell, the Path consists of only that Cell and costs nothing. In
/// that case the Adjacency is never asked.
///
/// ## Errors
/// [`SearchError::NotFound`] if every Cell reachable from `source` was expanded without reaching
/// `destination`. This includes a `destination` that is a Wall or lies outside the Level, as
/// well as a `source` that is not a Space (it has no Neighbors).
///
/// ## Examples
/// Basic usage:
/// ```
/// # use level_pathfinding::prelude::*;
/// // a X b
/// let level = Level::builder()
///     .spaces([(0, 0), (2, 0)], 1.0)
///     .wall((1, 0))
///     .build()
///     .unwrap();
///
/// let edges = NavigationEdges::default();
///
/// let result = dijkstra::shortest_path(&level, (0, 0), (2, 0), &edges);
/// assert_eq!(
///     result,
///     Err(SearchError::NotFound { source: (0, 0), destination: (2, 0) })
/// );
///
/// let path = dijkstra::shortest_path(&level, (2, 0), (2, 0), &edges).unwrap();
/// assert_eq!(path.path, vec![(2, 0)]);
/// assert_eq!(path.cost, 0.0);
/// ```
pub fn shortest_path<A: Adjacency + ?Sized>(
	level: &Level,
	source: Cell,
	destination: Cell,
	adjacency: &A,
) -> Result<Path<Cell>, SearchError> {
	if source == destination {
		return Ok(Path::new(vec![source], 0.0));
	}

	let (visited, reached) = search(level, source, Some(destination), adjacency);
	if !reached {
		return Err(SearchError::NotFound {
			source,
			destination,
		});
	}

	start_timer!(timer);

	let steps = {
		let mut steps = vec![];
		let mut current = destination;

		while current != source {
			steps.push(current);
			let (_, prev) = visited[&current];
			current = prev;
		}
		steps.push(source);
		steps.reverse();
		steps
	};

	trace_timing!("reconstruct the path", timer);

	Ok(Path::new(steps, visited[&destination].0))
}

/// Calculates the cheapest Cost from `source` to every Cell of the Level.
///
/// Runs a single search that only stops once the Frontier is empty.
///
/// The result contains every Space and every Wall of the Level. Cells that cannot be reached
/// (Walls, or Spaces in a Pocket that is cut off by Walls) map to [`f64::INFINITY`].
/// `source` itself always maps to `0`. Cells outside of the Level only show up if the
/// Adjacency leads there.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use level_pathfinding::prelude::*;
/// // a . X .
/// let level = Level::builder()
///     .spaces([(0, 0), (1, 0), (3, 0)], 1.0)
///     .wall((2, 0))
///     .build()
///     .unwrap();
///
/// let costs = dijkstra::cost_to_all(&level, (0, 0), &NavigationEdges::default());
///
/// assert_eq!(costs.len(), 4);
/// assert_eq!(costs[&(0, 0)], 0.0);
/// assert_eq!(costs[&(1, 0)], 1.0);
/// assert_eq!(costs[&(2, 0)], f64::INFINITY);
/// assert_eq!(costs[&(3, 0)], f64::INFINITY);
/// ```
pub fn cost_to_all<A: Adjacency + ?Sized>(
	level: &Level,
	source: Cell,
	adjacency: &A,
) -> CellMap<Cost> {
	let (visited, _) = search(level, source, None, adjacency);

	let mut costs: CellMap<Cost> = level
		.spaces()
		.keys()
		.chain(level.walls().iter())
		.map(|&cell| (cell, Cost::INFINITY))
		.collect();

	costs.extend(visited.into_iter().map(|(cell, (cost, _))| (cell, cost)));
	costs
}

/// Calls [`cost_to_all`] once for every Cell in `sources`.
///
/// The result at index `i` belongs to `sources[i]`. With the `parallel` feature (enabled by
/// default) the searches run in parallel, each with its own search State.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use level_pathfinding::prelude::*;
/// let level = Level::builder()
///     .spaces([(0, 0), (1, 0), (2, 0)], 1.0)
///     .build()
///     .unwrap();
///
/// let costs = dijkstra::cost_to_many(&level, &[(0, 0), (2, 0)], &NavigationEdges::default());
///
/// assert_eq!(costs[0][&(2, 0)], 2.0);
/// assert_eq!(costs[1][&(2, 0)], 0.0);
/// ```
pub fn cost_to_many<A: Adjacency + Sync + ?Sized>(
	level: &Level,
	sources: &[Cell],
	adjacency: &A,
) -> Vec<CellMap<Cost>> {
	#[cfg(feature = "parallel")]
	{
		use rayon::prelude::*;
		sources
			.par_iter()
			.map(|&source| cost_to_all(level, source, adjacency))
			.collect()
	}
	#[cfg(not(feature = "parallel"))]
	{
		sources
			.iter()
			.map(|&source| cost_to_all(level, source, adjacency))
			.collect()
	}
}

/// Expands Cells from `source` until `destination` is settled or the Frontier runs empty.
///
/// Returns the best known `(Cost, Predecessor)` of every discovered Cell and whether
/// `destination` was settled.
fn search<A: Adjacency + ?Sized>(
	level: &Level,
	source: Cell,
	destination: Option<Cell>,
	adjacency: &A,
) -> (CellMap<(Cost, Cell)>, bool) {
	start_timer!(timer);

	let mut visited = CellMap::default();
	let mut next = BinaryHeap::new();
	let mut pushed = 0;
	next.push(Element(source, 0.0, pushed));
	pushed += 1;
	visited.insert(source, (0.0, source));

	let mut reached = false;
	let mut all_neighbors = vec![];

	while let Some(Element(current_id, current_cost, _)) = next.pop() {
		if current_cost > visited[&current_id].0 {
			// outdated entry, the Cell was already settled with a lower Cost
			continue;
		}

		if Some(current_id) == destination {
			reached = true;
			break;
		}

		all_neighbors.clear();
		adjacency.neighbors(level, current_id, &mut all_neighbors);
		for &(other_id, delta_cost) in all_neighbors.iter() {
			if delta_cost < 0.0 {
				continue;
			}
			let other_cost = current_cost + delta_cost;
			if !other_cost.is_finite() {
				continue;
			}

			match visited.entry(other_id) {
				Entry::Occupied(mut entry) => {
					if other_cost < entry.get().0 {
						entry.insert((other_cost, current_id));
					} else {
						continue;
					}
				}
				Entry::Vacant(entry) => {
					entry.insert((other_cost, current_id));
				}
			}

			next.push(Element(other_id, other_cost, pushed));
			pushed += 1;
		}
	}

	trace_timing!("search the level", timer);

	#[cfg(feature = "log")]
	log::debug!(
		"search from {:?}: {} cells discovered, {} frontier entries, destination {}",
		source,
		visited.len(),
		pushed,
		match (destination, reached) {
			(None, _) => "none",
			(Some(_), true) => "reached",
			(Some(_), false) => "unreachable",
		}
	);

	(visited, reached)
}
