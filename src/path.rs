use crate::Cost;

/// A Path across a Level
///
/// Stores a sequence of Cells in `path` and the total Cost of traversing these Cells in `cost`.
/// The first Cell is always where the search started and the last one is the destination.
/// Note that the individual costs of the steps within the Path cannot be retrieved through this struct.
/// Use [`Level::path_cost`](crate::Level::path_cost) on a prefix of the Path for that.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
	/// the Path
	pub path: Vec<P>,
	/// the total Cost of the Path
	pub cost: Cost,
}

impl<P> Path<P> {
	/// creates a new Path with the given sequence of Cells and total Cost
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use level_pathfinding::Path;
	/// let path = Path::new(vec!['a', 'b', 'c'], 4.5);
	///
	/// assert_eq!(path.path, vec!['a', 'b', 'c']);
	/// assert_eq!(path.cost, 4.5);
	/// ```
	pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
		Path { path, cost }
	}

	/// appends a Cell to the Path, adding the Cost of the step to the total Cost
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use level_pathfinding::Path;
	/// let mut path = Path::new(vec!['a', 'b', 'c'], 4.5);
	/// path.append('d', 0.5);
	///
	/// assert_eq!(path.path, vec!['a', 'b', 'c', 'd']);
	/// assert_eq!(path.cost, 5.0);
	/// ```
	pub fn append(&mut self, node: P, cost: Cost) -> &mut Self {
		self.path.push(node);
		self.cost += cost;
		self
	}

	/// Returns a reversed copy of the Path.
	///
	/// Edges on a Level cost the same in both directions, so the Cost stays the same.
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use level_pathfinding::Path;
	/// let path = Path::new(vec!['a', 'b', 'c'], 4.5);
	/// let reversed = path.reversed();
	///
	/// assert_eq!(reversed.path, vec!['c', 'b', 'a']);
	/// assert_eq!(reversed.cost, 4.5);
	/// ```
	pub fn reversed(&self) -> Path<P>
	where
		P: Clone,
	{
		let mut path = self.path.clone();
		path.reverse();
		Path::new(path, self.cost)
	}
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
	type Output = P;
	fn index(&self, index: usize) -> &P {
		&self.path[index]
	}
}

impl<P> Deref for Path<P> {
	type Target = [P];
	fn deref(&self) -> &[P] {
		&self.path
	}
}

use std::cmp::Ordering;

impl<P: PartialEq> PartialOrd for Path<P> {
	fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
		self.cost.partial_cmp(&other.cost)
	}
}

use std::fmt;
impl<P: fmt::Debug> fmt::Display for Path<P> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		if self.path.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{:?}", self.path[0])?;
			for p in self.path.iter().skip(1) {
				write!(fmt, " -> {:?}", p)?;
			}
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {

	use super::Path;
	#[test]
	fn path_index() {
		let path = Path::new(vec![(0, 0), (1, 0), (2, 1)], 2.5);

		assert_eq!(path[0], (0, 0));
		assert_eq!(path[1], (1, 0));
		assert_eq!(path[2], (2, 1));
	}

	#[test]
	fn path_display() {
		let path = Path::new(vec![(0, 0), (1, 0), (2, 0)], 2.0);

		assert_eq!(
			&format!("{}", path),
			"Path[Cost = 2]: (0, 0) -> (1, 0) -> (2, 0)"
		);
	}

	#[test]
	fn path_display_single() {
		let path = Path::new(vec![(3, 4)], 0.0);

		assert_eq!(&format!("{}", path), "Path[Cost = 0]: (3, 4)");
	}

	#[test]
	fn path_display_empty() {
		let path = Path::new(Vec::<(usize, usize)>::new(), 0.0);

		assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
	}

	#[test]
	fn path_ordering_by_cost() {
		let short = Path::new(vec![1, 2], 1.0);
		let long = Path::new(vec![1, 3, 2], 2.0);

		assert!(short < long);
	}
}
