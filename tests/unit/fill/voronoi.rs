//! Tests for weighted Voronoi partitioning

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use spectrafill::fill::voronoi::{
        Seed, fill_voronoi, fill_voronoi_ambient, fill_voronoi_seeded, lattice_shape,
        nearest_seed, place_seeds, seed_count,
    };
    use spectrafill::io::configuration::{VORONOI_WEIGHT_MAX, VORONOI_WEIGHT_MIN};

    fn seed(row: f64, col: f64, weight: f64, color: u32) -> Seed<u32> {
        Seed {
            row,
            col,
            weight,
            color,
        }
    }

    // Tests the seed count bounds across palette sizes
    // Verified by dividing by 3 instead of 20
    #[test]
    fn test_seed_count() {
        assert_eq!(seed_count(100), 5);
        assert_eq!(seed_count(0), 1);
        assert_eq!(seed_count(1), 1);
        assert_eq!(seed_count(3), 3);
        assert_eq!(seed_count(4), 4);
        assert_eq!(seed_count(79), 4);
        assert_eq!(seed_count(1000), 50);
    }

    // Tests lattice dimensions cover every seed
    // Verified by flooring the square root
    #[test]
    fn test_lattice_shape() {
        assert_eq!(lattice_shape(1), (1, 1));
        assert_eq!(lattice_shape(4), (2, 2));
        assert_eq!(lattice_shape(5), (3, 2));
        assert_eq!(lattice_shape(50), (8, 7));
    }

    // Tests seeds stay inside the grid with weights in range and cycled colors
    // Verified by skipping the clamp after jitter
    #[test]
    fn test_place_seeds_bounds() {
        let colors: Vec<u32> = (0..200).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let seeds = place_seeds(&colors, 16, &mut rng);

        assert_eq!(seeds.len(), 10);
        for (i, s) in seeds.iter().enumerate() {
            assert!((0.0..=15.0).contains(&s.row), "row {}", s.row);
            assert!((0.0..=15.0).contains(&s.col), "col {}", s.col);
            assert!(s.weight >= VORONOI_WEIGHT_MIN && s.weight < VORONOI_WEIGHT_MAX);
            assert_eq!(s.color, colors[i]);
        }
    }

    // Tests jitter keeps each seed near its lattice cell center
    // Verified by jittering across the full cell width
    #[test]
    fn test_jitter_stays_within_cell() {
        let colors: Vec<u32> = (0..4).collect();
        let mut rng = StdRng::seed_from_u64(99);
        let seeds = place_seeds(&colors, 40, &mut rng);

        // 2x2 lattice of 20-cell squares; centers at 10 and 30, jitter at most ±6
        for (i, s) in seeds.iter().enumerate() {
            let center_col = if i % 2 == 0 { 10.0 } else { 30.0 };
            let center_row = if i / 2 == 0 { 10.0 } else { 30.0 };
            assert!((s.col - center_col).abs() <= 6.0);
            assert!((s.row - center_row).abs() <= 6.0);
        }
    }

    // Tests weights scale distance so heavier seeds win farther away
    // Verified by multiplying distance by the weight
    #[test]
    fn test_weighted_distance() {
        let light = seed(0.0, 0.0, 1.0, 1);
        let heavy = seed(0.0, 0.0, 2.0, 2);
        assert!((light.weighted_distance(3, 4) - 25.0).abs() < 1e-12);
        assert!((heavy.weighted_distance(3, 4) - 6.25).abs() < 1e-12);

        let seeds = [seed(0.0, 0.0, 0.6, 1), seed(0.0, 10.0, 1.4, 2)];
        // Cell 4 is closer to the first seed but the second outweighs it
        assert_eq!(nearest_seed(&seeds, 0, 4), Some(1));
    }

    // Tests ties go to the first seed in iteration order
    // Verified by using <= when tracking the minimum
    #[test]
    fn test_nearest_seed_tie_break() {
        let seeds = [seed(0.0, 0.0, 1.0, 1), seed(0.0, 2.0, 1.0, 2)];
        assert_eq!(nearest_seed(&seeds, 0, 1), Some(0));
        assert_eq!(nearest_seed::<u32>(&[], 0, 0), None);
    }

    // Tests every cell is placed with a color drawn from the input
    // Verified by skipping the last grid row
    #[test]
    fn test_fills_every_cell_from_input() {
        let colors: Vec<u32> = (1..=120).collect();
        let grid = fill_voronoi_seeded(&colors, 24, 3).unwrap();
        assert_eq!(grid.placed_count(), 24 * 24);
        assert!(grid.iter().all(|(_, c)| colors.contains(c)));
        // 120 colors give 6 seeds, so at most six distinct regions
        let mut distinct: Vec<u32> = grid.iter().map(|(_, &c)| c).collect();
        distinct.sort_unstable();
        distinct.dedup();
        assert!(!distinct.is_empty() && distinct.len() <= 6);
    }

    // Tests identical seeds give identical grids
    // Verified by reseeding from entropy inside fill_voronoi_seeded
    #[test]
    fn test_seeded_fill_is_reproducible() {
        let colors: Vec<u32> = (0..64).collect();
        let first = fill_voronoi_seeded(&colors, 20, 1234).unwrap();
        let second = fill_voronoi_seeded(&colors, 20, 1234).unwrap();
        assert_eq!(first, second);

        let mut rng = StdRng::seed_from_u64(1234);
        let injected = fill_voronoi(&colors, 20, &mut rng).unwrap();
        assert_eq!(first, injected);
    }

    // Tests a single color floods the grid
    // Verified by cycling colors with the seed index unreduced
    #[test]
    fn test_single_color() {
        let grid = fill_voronoi_ambient(&[9u32], 5).unwrap();
        assert_eq!(grid.placed_count(), 25);
        assert!(grid.iter().all(|(_, &c)| c == 9));
    }

    // Tests an empty palette leaves the grid untouched
    // Verified by indexing colors[0] for the first seed
    #[test]
    fn test_empty_colors() {
        let grid = fill_voronoi_seeded::<u32>(&[], 4, 0).unwrap();
        assert_eq!(grid.placed_count(), 0);
        assert!(grid.iter().all(|(_, &c)| c == 0));
    }

    // Tests size validation applies to the randomized strategy
    // Verified by skipping validation when colors are empty
    #[test]
    fn test_zero_size_rejected() {
        assert!(fill_voronoi_seeded(&[1u32], 0, 0).is_err());
    }
}
