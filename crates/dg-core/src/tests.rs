//! Unit tests for dg-core primitives.

#[cfg(test)]
mod cell {
    use crate::{Cell, Direction};

    #[test]
    fn manhattan_is_symmetric() {
        let a = Cell::new(1, 7);
        let b = Cell::new(4, 2);
        assert_eq!(a.manhattan(b), 8);
        assert_eq!(b.manhattan(a), 8);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn step_deltas() {
        let c = Cell::new(3, 3);
        assert_eq!(c.step(Direction::Down), Cell::new(3, 4));
        assert_eq!(c.step(Direction::Right), Cell::new(4, 3));
        assert_eq!(c.step(Direction::Up), Cell::new(3, 2));
        assert_eq!(c.step(Direction::Left), Cell::new(2, 3));
        assert_eq!(c.step(Direction::Stay), c);
    }

    #[test]
    fn neighbors_exclude_stay() {
        let c = Cell::ORIGIN;
        let n = c.neighbors();
        assert_eq!(n.len(), 4);
        assert!(!n.contains(&c));
        assert!(n.contains(&Cell::new(-1, 0)));
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Cell::new(0, 9) < Cell::new(1, 0));
        assert!(Cell::new(2, 1) < Cell::new(2, 3));
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(2, 5).to_string(), "(2, 5)");
    }
}

#[cfg(test)]
mod grid {
    use crate::{Cell, Grid};

    #[test]
    fn in_bounds_edges() {
        let g = Grid::new(10);
        assert!(g.in_bounds(Cell::new(0, 0)));
        assert!(g.in_bounds(Cell::new(9, 9)));
        assert!(!g.in_bounds(Cell::new(10, 0)));
        assert!(!g.in_bounds(Cell::new(0, -1)));
    }

    #[test]
    fn empty_grid_has_no_legal_cell() {
        let g = Grid::new(0);
        assert_eq!(g.cell_count(), 0);
        assert!(!g.in_bounds(Cell::ORIGIN));
        assert_eq!(g.cells().count(), 0);
    }

    #[test]
    fn index_is_dense_and_unique() {
        let g = Grid::new(4);
        let mut seen: Vec<usize> = g.cells().map(|c| g.index(c).unwrap()).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..16).collect::<Vec<_>>());
        assert_eq!(g.index(Cell::new(4, 0)), None);
    }
}

#[cfg(test)]
mod config {
    use crate::{Cell, CoreError, SimConfig};

    #[test]
    fn default_is_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_grid_rejected() {
        let cfg = SimConfig { grid_size: 0, ..SimConfig::default() };
        assert_eq!(cfg.validate(), Err(CoreError::EmptyGrid));
    }

    #[test]
    fn start_outside_grid_rejected() {
        let cfg = SimConfig { start: Cell::new(10, 0), ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::OutOfBounds { .. })));
    }

    #[test]
    fn counts_must_fit_free_cells() {
        // 3×3 grid has 8 cells besides the start.
        let fits = SimConfig {
            grid_size:        3,
            static_obstacles: 4,
            moving_obstacles: 2,
            deliveries:       2,
            ..SimConfig::default()
        };
        assert_eq!(fits.validate(), Ok(()));

        let crowded = SimConfig { deliveries: 3, ..fits };
        assert_eq!(
            crowded.validate(),
            Err(CoreError::TooCrowded { requested: 9, available: 8 })
        );
    }
}

#[cfg(test)]
mod rng {
    use crate::{ObstacleRng, SimRng};

    #[test]
    fn obstacle_streams_are_reproducible() {
        let mut a = ObstacleRng::new(7, 3);
        let mut b = ObstacleRng::new(7, 3);
        let xs: Vec<u32> = (0..16).map(|_| a.gen_range(0..1000)).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.gen_range(0..1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn obstacle_streams_differ_by_index() {
        let mut a = ObstacleRng::new(7, 0);
        let mut b = ObstacleRng::new(7, 1);
        let xs: Vec<u32> = (0..16).map(|_| a.gen_range(0..1000)).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.gen_range(0..1000)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn take_sample_partitions_pool() {
        let mut rng = SimRng::new(1);
        let mut pool: Vec<u32> = (0..20).collect();
        let picked = rng.take_sample(&mut pool, 5).unwrap();
        assert_eq!(picked.len(), 5);
        assert_eq!(pool.len(), 15);
        for p in &picked {
            assert!(!pool.contains(p));
        }
        let mut all: Vec<u32> = picked.into_iter().chain(pool).collect();
        all.sort_unstable();
        assert_eq!(all, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_is_seeded_permutation() {
        let mut a: Vec<u32> = (0..32).collect();
        let mut b = a.clone();
        SimRng::new(9).shuffle(&mut a);
        SimRng::new(9).shuffle(&mut b);
        assert_eq!(a, b);
        assert_ne!(a, (0..32).collect::<Vec<_>>());
        a.sort_unstable();
        assert_eq!(a, (0..32).collect::<Vec<_>>());
    }

    #[test]
    fn take_sample_follows_shuffle() {
        let mut shuffled: Vec<u32> = (0..10).collect();
        SimRng::new(4).shuffle(&mut shuffled);

        let mut pool: Vec<u32> = (0..10).collect();
        let picked = SimRng::new(4).take_sample(&mut pool, 3).unwrap();
        assert_eq!(picked, shuffled[..3]);
        assert_eq!(pool, shuffled[3..]);
    }

    #[test]
    fn take_sample_too_many_leaves_pool() {
        let mut rng = SimRng::new(1);
        let mut pool = vec![1, 2, 3];
        assert!(rng.take_sample(&mut pool, 4).is_none());
        assert_eq!(pool, vec![1, 2, 3]);
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(4).next(), Tick(5));
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(3).to_string(), "T3");
    }
}
