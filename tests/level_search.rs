use level_pathfinding::prelude::*;
use nanorand::{Rng, WyRand};
use std::f64::consts::SQRT_2;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// 0 = empty, 1 = swamp, 2 = wall
const COST_MAP: [Option<Cost>; 3] = [Some(1.0), Some(5.0), None];

fn level_from_grid<const W: usize, const H: usize>(grid: &[[usize; W]; H]) -> Level {
    let mut builder = Level::builder();
    for (y, row) in grid.iter().enumerate() {
        for (x, &tile) in row.iter().enumerate() {
            builder = match COST_MAP[tile] {
                Some(cost) => builder.space((x, y), cost),
                None => builder.wall((x, y)),
            };
        }
    }
    builder.build().unwrap()
}

fn random_level(rng: &mut WyRand, width: usize, height: usize) -> Level {
    const COSTS: [Cost; 5] = [0.0, 0.5, 1.0, 2.0, 5.0];
    let mut builder = Level::builder();
    for y in 0..height {
        for x in 0..width {
            if rng.generate_range(0_usize..4) == 0 {
                builder = builder.wall((x, y));
            } else {
                builder = builder.space((x, y), COSTS[rng.generate_range(0..COSTS.len())]);
            }
        }
    }
    builder.build().unwrap()
}

fn assert_close(a: Cost, b: Cost) {
    assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
}

#[test]
fn straight_row() {
    init();
    let level = Level::builder()
        .spaces([(0, 0), (1, 0), (2, 0)], 1.0)
        .build()
        .unwrap();

    let path = level.shortest_path((0, 0), (2, 0)).unwrap();

    assert_eq!(path.path, vec![(0, 0), (1, 0), (2, 0)]);
    assert_eq!(path.cost, 2.0);
}

#[test]
fn blocked_row() {
    init();
    let level = Level::builder()
        .spaces([(0, 0), (2, 0)], 1.0)
        .wall((1, 0))
        .build()
        .unwrap();

    let result = level.shortest_path((0, 0), (2, 0));

    assert_eq!(
        result,
        Err(SearchError::NotFound {
            source: (0, 0),
            destination: (2, 0)
        })
    );
}

#[test]
fn square_prefers_diagonal() {
    init();
    let level = Level::builder()
        .spaces([(0, 0), (1, 0), (0, 1), (1, 1)], 1.0)
        .build()
        .unwrap();

    let direct = level.path_cost(&[(0, 0), (1, 1)]).unwrap();
    let around = level.path_cost(&[(0, 0), (1, 0), (1, 1)]).unwrap();
    assert_eq!(direct, SQRT_2);
    assert_eq!(around, 2.0);

    let path = level.shortest_path((0, 0), (1, 1)).unwrap();
    assert_eq!(path.path, vec![(0, 0), (1, 1)]);
    assert_eq!(path.cost, SQRT_2);
}

#[test]
fn grid_with_swamp_and_pocket() {
    init();
    let grid = [
        [0, 2, 0, 0, 0],
        [0, 2, 2, 2, 2],
        [0, 1, 0, 0, 0],
        [0, 1, 0, 2, 0],
        [0, 0, 0, 2, 0],
    ];
    let level = level_from_grid(&grid);
    assert_eq!(level.extent(), (4, 4));

    let path = level.shortest_path((0, 0), (4, 4)).unwrap();
    assert_eq!(path.first(), Some(&(0, 0)));
    assert_eq!(path.last(), Some(&(4, 4)));
    assert_close(path.cost, level.path_cost(&path).unwrap());
    assert!(path.iter().all(|&cell| level.is_space(cell)));

    // the top right corner is cut off by Walls
    assert!(matches!(
        level.shortest_path((0, 0), (2, 0)),
        Err(SearchError::NotFound { .. })
    ));

    let costs = level.cost_to_all((0, 0));
    assert_eq!(costs.len(), 25);
    for cell in [(2, 0), (3, 0), (4, 0)] {
        assert_eq!(costs[&cell], Cost::INFINITY);
    }
    assert_close(costs[&(4, 4)], path.cost);
}

#[test]
fn same_cell_is_a_single_step_path() {
    init();
    let level = level_from_grid(&[[0, 1], [2, 0]]);

    for &cell in level.spaces().keys() {
        let path = level.shortest_path(cell, cell).unwrap();
        assert_eq!(path.path, vec![cell]);
        assert_eq!(path.cost, 0.0);
    }
}

#[test]
fn routes_between_waypoints() {
    init();
    let level = Level::builder()
        .spaces((0..4).flat_map(|y| (0..4).map(move |x| (x, y))), 1.0)
        .waypoint('a', (0, 0))
        .waypoint('d', (3, 3))
        .build()
        .unwrap();

    let path = level.route("a", "d").unwrap();
    assert_eq!(path.path, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    assert_close(path.cost, 3.0 * SQRT_2);

    let back = level.route("d", "a").unwrap();
    assert_close(back.cost, path.cost);
    assert_eq!(back.reversed().path, path.path);

    assert_eq!(
        level.route("a", "z"),
        Err(SearchError::UnknownWaypoint("z".into()))
    );
    assert_eq!(
        level.route("y", "a"),
        Err(SearchError::UnknownWaypoint("y".into()))
    );
}

#[test]
fn shortest_paths_agree_with_cost_to_all() {
    init();
    let mut rng = WyRand::new_seed(42);

    for _ in 0..8 {
        let level = random_level(&mut rng, 10, 8);
        let spaces: Vec<Cell> = level.spaces().keys().copied().collect();
        if spaces.is_empty() {
            continue;
        }
        let source = spaces[rng.generate_range(0..spaces.len())];

        let costs = level.cost_to_all(source);
        assert_eq!(costs[&source], 0.0);
        assert_eq!(costs.len(), level.spaces().len() + level.walls().len());

        for &wall in level.walls().iter() {
            assert_eq!(costs[&wall], Cost::INFINITY);
        }

        for &destination in spaces.iter() {
            match level.shortest_path(source, destination) {
                Ok(path) => {
                    assert_eq!(path.first(), Some(&source));
                    assert_eq!(path.last(), Some(&destination));
                    assert_close(path.cost, costs[&destination]);
                    assert_close(path.cost, level.path_cost(&path).unwrap());
                }
                Err(SearchError::NotFound { .. }) => {
                    assert_eq!(costs[&destination], Cost::INFINITY);
                }
                Err(err) => panic!("unexpected error: {}", err),
            }
        }
    }
}

#[test]
fn costs_are_symmetric() {
    init();
    let mut rng = WyRand::new_seed(7);
    let level = random_level(&mut rng, 9, 9);
    let spaces: Vec<Cell> = level.spaces().keys().copied().collect();

    let all = dijkstra::cost_to_many(&level, &spaces, &NavigationEdges::default());

    for (i, &a) in spaces.iter().enumerate() {
        for (j, &b) in spaces.iter().enumerate() {
            let (ab, ba) = (all[i][&b], all[j][&a]);
            if ab.is_infinite() {
                assert!(ba.is_infinite());
            } else {
                assert_close(ab, ba);
            }
        }
    }
}

#[test]
fn cardinal_only_never_beats_eight_way() {
    init();
    let mut rng = WyRand::new_seed(1234);
    let level = random_level(&mut rng, 8, 8);
    let Some(&source) = level.spaces().keys().next() else {
        return;
    };

    let eight = level.cost_to_all(source);
    let four = dijkstra::cost_to_all(
        &level,
        source,
        &NavigationEdges::new(NavigationConfig::CARDINAL_ONLY),
    );

    for (cell, cost) in eight.iter() {
        assert!(four[cell] + 1e-9 >= *cost, "{:?}", cell);
    }
}

#[test]
fn concurrent_queries_share_the_level() {
    init();
    let mut rng = WyRand::new_seed(99);
    let level = random_level(&mut rng, 16, 16);
    let sources: Vec<Cell> = level.spaces().keys().copied().take(4).collect();

    let expected: Vec<_> = sources.iter().map(|&s| level.cost_to_all(s)).collect();

    let shared = &level;
    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = sources
            .iter()
            .map(|&source| scope.spawn(move || shared.cost_to_all(source)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(results, expected);
}
