use crate::Cost;

/// Options for configuring [`NavigationEdges`](crate::neighbors::NavigationEdges)
///
/// Default options:
/// ```
/// # use level_pathfinding::NavigationConfig;
/// assert_eq!(
/// 	NavigationConfig {
/// 		diagonal_moves: true,
/// 		diagonal_factor: std::f64::consts::SQRT_2,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationConfig {
	/// `true` (default): Agents may move along the 4 diagonals as well as the 4 cardinal
	/// directions.
	///
	/// `false`: only the 4 cardinal directions are used.
	pub diagonal_moves: bool,
	/// The factor that the averaged Cost of a diagonal move is multiplied with (defaults to `√2`).
	///
	/// Has to be at least `1.0`, otherwise diagonal moves would be cheaper than cardinal moves.
	pub diagonal_factor: Cost,
}

impl NavigationConfig {
	/// The canonical 8-way movement, where diagonals cost `√2` times as much
	///
	/// Values:
	/// ```
	/// # use level_pathfinding::NavigationConfig;
	/// assert_eq!(
	/// 	NavigationConfig {
	/// 		diagonal_moves: true,
	/// 		diagonal_factor: std::f64::consts::SQRT_2,
	/// 	},
	/// 	NavigationConfig::EIGHT_WAY
	/// );
	/// ```
	pub const EIGHT_WAY: NavigationConfig = NavigationConfig {
		diagonal_moves: true,
		diagonal_factor: std::f64::consts::SQRT_2,
	};

	/// Only up, down, left and right
	///
	/// Values:
	/// ```
	/// # use level_pathfinding::NavigationConfig;
	/// assert_eq!(
	/// 	NavigationConfig {
	/// 		diagonal_moves: false,
	/// 		diagonal_factor: std::f64::consts::SQRT_2,
	/// 	},
	/// 	NavigationConfig::CARDINAL_ONLY
	/// );
	/// ```
	pub const CARDINAL_ONLY: NavigationConfig = NavigationConfig {
		diagonal_moves: false,
		..Self::EIGHT_WAY
	};
}

impl Default for NavigationConfig {
	fn default() -> NavigationConfig {
		NavigationConfig::EIGHT_WAY
	}
}
