//! Generated mazes always contain a start-to-target route.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wavefront_core::{Cell, CellKind};
use wavefront_maze::{generate_maze, generate_maze_with, MazeConfig};
use wavefront_test_utils::oracle_distance;

proptest! {
    #[test]
    fn target_reachable_for_any_seed(
        rows in 3u32..40,
        cols in 4u32..40,
        p in 0.0f64..0.999,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = generate_maze_with(rows, cols, p, &mut rng).unwrap();
        let start = Cell::new(1, 1);
        let target = Cell::new(rows - 2, cols - 2);
        prop_assert_eq!(grid.endpoints(), Ok((start, target)));
        prop_assert!(grid.has_wall_border());
        // The carved route is monotone, so it is as short as any route can be.
        let d = oracle_distance(&grid, start, target);
        prop_assert_eq!(d, Some(start.manhattan(target)), "no direct route in\n{}", grid);
    }

    #[test]
    fn seeded_config_is_reproducible(seed in any::<u64>(), p in 0.0f64..0.9) {
        let cfg = MazeConfig::new(11, 17).with_wall_probability(p).with_seed(seed);
        prop_assert_eq!(cfg.generate().unwrap(), cfg.generate().unwrap());
    }
}

#[test]
fn dense_walls_still_connect() {
    for seed in 0..50 {
        let grid = MazeConfig::new(25, 25)
            .with_wall_probability(0.99)
            .with_seed(seed)
            .generate()
            .unwrap();
        assert_eq!(
            oracle_distance(&grid, Cell::new(1, 1), Cell::new(23, 23)),
            Some(44),
            "seed {seed}"
        );
    }
}

#[test]
fn unseeded_generation_keeps_layout() {
    let grid = generate_maze(12, 16, Some(0.5)).unwrap();
    assert_eq!(grid.kind(Cell::new(1, 1)), Some(CellKind::Start));
    assert_eq!(grid.kind(Cell::new(10, 14)), Some(CellKind::Target));
    assert_eq!(grid.count(CellKind::Start), 1);
    assert_eq!(grid.count(CellKind::Target), 1);
    assert!(grid.has_wall_border());
}
