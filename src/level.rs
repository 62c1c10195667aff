use crate::{
	dijkstra, neighbors::NavigationEdges, Cell, CellMap, CellSet, Cost, LevelError, Path,
	SearchError,
};
use hashbrown::HashMap;

/// A two-dimensional Grid of Spaces, Walls and Waypoints.
///
/// - Spaces are walkable and have an intrinsic Cost (`>= 0`).
/// - Walls are never walkable. They are not part of the searched Graph at all.
/// - Waypoints are named Spaces. They are only a convenience for looking up Cells by name.
///
/// The extent of the Level (the largest `x` and `y` of any Space or Wall) is calculated once
/// when the Level is created. A Level cannot be modified afterwards, which means that it can be
/// shared freely between any number of searches.
#[derive(Clone, Debug, Default)]
pub struct Level {
	spaces: CellMap<Cost>,
	walls: CellSet,
	waypoints: HashMap<String, Cell>,
	max_x: usize,
	max_y: usize,
}

impl Level {
	/// Creates a new Level from its parts.
	///
	/// ## Errors
	/// - [`LevelError::InvalidCost`] if a Space has a negative, infinite or NaN Cost
	/// - [`LevelError::Overlap`] if a Cell is both a Space and a Wall
	/// - [`LevelError::MissingWaypoint`] if a Waypoint does not refer to a Space
	///
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use level_pathfinding::{prelude::*, CellSet};
	/// # use hashbrown::HashMap;
	/// let spaces: CellMap<Cost> = [((0, 0), 1.0), ((1, 0), 2.0)].into_iter().collect();
	/// let walls: CellSet = [(0, 1), (1, 1)].into_iter().collect();
	/// let waypoints: HashMap<String, Cell> = [("a".to_string(), (0, 0))].into_iter().collect();
	///
	/// let level = Level::new(spaces, walls, waypoints).unwrap();
	/// assert_eq!(level.extent(), (1, 1));
	/// assert_eq!(level.waypoint("a"), Some((0, 0)));
	/// ```
	pub fn new(
		spaces: CellMap<Cost>,
		walls: CellSet,
		waypoints: HashMap<String, Cell>,
	) -> Result<Level, LevelError> {
		for (&cell, &cost) in spaces.iter() {
			if !cost.is_finite() || cost < 0.0 {
				return Err(LevelError::InvalidCost { cell, cost });
			}
		}
		if let Some(&cell) = walls.iter().find(|cell| spaces.contains_key(*cell)) {
			return Err(LevelError::Overlap(cell));
		}
		for (label, &cell) in waypoints.iter() {
			if !spaces.contains_key(&cell) {
				return Err(LevelError::MissingWaypoint {
					label: label.clone(),
					cell,
				});
			}
		}

		let (max_x, max_y) = spaces
			.keys()
			.chain(walls.iter())
			.fold((0, 0), |(max_x, max_y), &(x, y)| (max_x.max(x), max_y.max(y)));

		Ok(Level {
			spaces,
			walls,
			waypoints,
			max_x,
			max_y,
		})
	}

	/// Creates a [`LevelBuilder`] to assemble a Level step by step.
	pub fn builder() -> LevelBuilder {
		LevelBuilder::default()
	}

	/// The intrinsic Cost of a Space, or `None` if `cell` is not a Space.
	pub fn cost(&self, cell: Cell) -> Option<Cost> {
		self.spaces.get(&cell).copied()
	}

	/// Returns `true` if `cell` can be walked on.
	pub fn is_space(&self, cell: Cell) -> bool {
		self.spaces.contains_key(&cell)
	}

	/// Returns `true` if `cell` is a Wall.
	pub fn is_wall(&self, cell: Cell) -> bool {
		self.walls.contains(&cell)
	}

	/// Looks up the Cell of a Waypoint.
	pub fn waypoint(&self, label: &str) -> Option<Cell> {
		self.waypoints.get(label).copied()
	}

	/// All Spaces with their intrinsic Cost
	pub fn spaces(&self) -> &CellMap<Cost> {
		&self.spaces
	}

	/// All Walls
	pub fn walls(&self) -> &CellSet {
		&self.walls
	}

	/// All Waypoints by Label
	pub fn waypoints(&self) -> &HashMap<String, Cell> {
		&self.waypoints
	}

	/// The largest `x` and `y` of any Space or Wall. `(0, 0)` for an empty Level.
	pub fn extent(&self) -> (usize, usize) {
		(self.max_x, self.max_y)
	}

	/// Returns `true` if `cell` lies within `[0, max_x] × [0, max_y]`.
	pub fn contains(&self, (x, y): Cell) -> bool {
		x <= self.max_x && y <= self.max_y
	}

	/// Calculates the cheapest Path from `source` to `destination`.
	///
	/// Uses the default [`NavigationEdges`]. See [`dijkstra::shortest_path`] for details and for
	/// using a different Adjacency.
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
	/// let path = level.shortest_path((0, 0), (2, 0)).unwrap();
	/// assert_eq!(path.path, vec![(0, 0), (1, 0), (2, 0)]);
	/// assert_eq!(path.cost, 2.0);
	/// ```
	pub fn shortest_path(&self, source: Cell, destination: Cell) -> Result<Path<Cell>, SearchError> {
		dijkstra::shortest_path(self, source, destination, &NavigationEdges::default())
	}

	/// Calculates the cheapest Cost from `source` to every Space and Wall of the Level.
	///
	/// Uses the default [`NavigationEdges`]. See [`dijkstra::cost_to_all`] for details.
	pub fn cost_to_all(&self, source: Cell) -> CellMap<Cost> {
		dijkstra::cost_to_all(self, source, &NavigationEdges::default())
	}

	/// Calculates the cheapest Path between two Waypoints.
	///
	/// ## Errors
	/// [`SearchError::UnknownWaypoint`] if either Label is not a Waypoint of this Level,
	/// [`SearchError::NotFound`] if the Waypoints are not connected.
	///
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use level_pathfinding::prelude::*;
	/// let level = Level::builder()
	///     .spaces([(0, 0), (1, 0), (2, 0)], 1.0)
	///     .waypoint('a', (0, 0))
	///     .waypoint('d', (2, 0))
	///     .build()
	///     .unwrap();
	///
	/// let path = level.route("a", "d").unwrap();
	/// assert_eq!(path.len(), 3);
	///
	/// assert_eq!(level.route("a", "x"), Err(SearchError::UnknownWaypoint("x".into())));
	/// ```
	pub fn route(&self, from: &str, to: &str) -> Result<Path<Cell>, SearchError> {
		let source = self
			.waypoint(from)
			.ok_or_else(|| SearchError::UnknownWaypoint(from.to_string()))?;
		let destination = self
			.waypoint(to)
			.ok_or_else(|| SearchError::UnknownWaypoint(to.to_string()))?;

		self.shortest_path(source, destination)
	}

	/// Sums up the Edge Costs along a sequence of Cells.
	///
	/// Returns `None` if any two consecutive Cells are not connected by an Edge of the default
	/// [`NavigationEdges`]. A single Cell (or no Cell at all) costs nothing.
	pub fn path_cost(&self, cells: &[Cell]) -> Option<Cost> {
		let edges = NavigationEdges::default();
		cells
			.windows(2)
			.map(|step| edges.edge_cost(self, step[0], step[1]))
			.sum()
	}
}

/// A Builder for [`Level`]s.
///
/// Obtained through [`Level::builder`]. The consistency of the Level is only checked once
/// [`build`](LevelBuilder::build) is called.
#[derive(Clone, Debug, Default)]
pub struct LevelBuilder {
	spaces: CellMap<Cost>,
	walls: CellSet,
	waypoints: HashMap<String, Cell>,
}

impl LevelBuilder {
	/// Adds a Space. A Space added twice keeps the last Cost.
	pub fn space(mut self, cell: Cell, cost: Cost) -> Self {
		self.spaces.insert(cell, cost);
		self
	}

	/// Adds several Spaces that share the same Cost.
	pub fn spaces(mut self, cells: impl IntoIterator<Item = Cell>, cost: Cost) -> Self {
		self.spaces.extend(cells.into_iter().map(|cell| (cell, cost)));
		self
	}

	/// Adds a Wall.
	pub fn wall(mut self, cell: Cell) -> Self {
		self.walls.insert(cell);
		self
	}

	/// Adds several Walls.
	pub fn walls(mut self, cells: impl IntoIterator<Item = Cell>) -> Self {
		self.walls.extend(cells);
		self
	}

	/// Names a Cell. The Cell has to be a Space by the time the Level is built.
	pub fn waypoint(mut self, label: impl Into<String>, cell: Cell) -> Self {
		self.waypoints.insert(label.into(), cell);
		self
	}

	/// Creates the Level. See [`Level::new`] for the possible Errors.
	pub fn build(self) -> Result<Level, LevelError> {
		Level::new(self.spaces, self.walls, self.waypoints)
	}
}
