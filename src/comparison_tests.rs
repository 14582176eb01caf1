//! Comparison tests between `KdTree` (2d-tree) and `BruteForce` (linear scan)

#[cfg(test)]
mod tests {
    use crate::{BruteForce, KdTree, Point, PointTable, Rect};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Helper to add the same points to both tables
    fn setup_tables(points: &[Point]) -> (KdTree<usize>, BruteForce<usize>) {
        let mut tree = KdTree::with_capacity(points.len());
        let mut brute = BruteForce::new();
        for (i, &pt) in points.iter().enumerate() {
            let a = tree.put(pt, i).unwrap();
            let b = brute.put(pt, i).unwrap();
            assert_eq!(a, b, "Both tables report the same previous value");
        }
        (tree, brute)
    }

    fn random_points(rng: &mut StdRng, n: usize) -> Vec<Point> {
        (0..n)
            .map(|_| Point::new(rng.random_range(0.0..=1.0), rng.random_range(0.0..=1.0)))
            .collect()
    }

    /// Points snapped to a coarse grid, so split ties and duplicates are common
    fn grid_points(rng: &mut StdRng, n: usize) -> Vec<Point> {
        (0..n)
            .map(|_| {
                let x = rng.random_range(0..=16) as f64 / 16.0;
                let y = rng.random_range(0..=16) as f64 / 16.0;
                Point::new(x, y)
            })
            .collect()
    }

    fn random_rect(rng: &mut StdRng) -> Rect {
        let x0: f64 = rng.random_range(-0.1..1.1);
        let x1: f64 = rng.random_range(-0.1..1.1);
        let y0: f64 = rng.random_range(-0.1..1.1);
        let y1: f64 = rng.random_range(-0.1..1.1);
        Rect::new(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1)).unwrap()
    }

    fn sorted(mut points: Vec<Point>) -> Vec<Point> {
        points.sort();
        points
    }

    fn sorted_distances(points: &[Point], query: &Point) -> Vec<f64> {
        let mut d: Vec<f64> = points.iter().map(|p| p.distance_squared_to(query)).collect();
        d.sort_by(|a, b| a.total_cmp(b));
        d
    }

    fn check_consistency<T: PointTable<usize>, U: PointTable<usize>>(
        a: &T,
        b: &U,
        rng: &mut StdRng,
        queries: usize,
    ) {
        assert_eq!(a.len(), b.len());
        assert_eq!(sorted(a.points()), sorted(b.points()));

        for _ in 0..queries {
            let rect = random_rect(rng);
            assert_eq!(sorted(a.range(&rect)), sorted(b.range(&rect)), "range {}", rect);

            let q = Point::new(rng.random_range(-0.2..1.2), rng.random_range(-0.2..1.2));
            let na = a.nearest(&q).unwrap();
            let nb = b.nearest(&q).unwrap();
            assert_eq!(
                na.distance_squared_to(&q),
                nb.distance_squared_to(&q),
                "nearest {}",
                q
            );

            let k = rng.random_range(1..=12);
            let ka = a.nearest_k(&q, k).unwrap();
            let kb = b.nearest_k(&q, k).unwrap();
            assert_eq!(ka.len(), k.min(a.len()));
            assert_eq!(sorted_distances(&ka, &q), sorted_distances(&kb, &q), "nearest_k {} k={}", q, k);
        }
    }

    #[test]
    fn test_basic_query_consistency() {
        let points = vec![
            Point::new(0.1, 0.2),
            Point::new(0.5, 0.5),
            Point::new(0.9, 0.1),
            Point::new(0.3, 0.8),
            Point::new(0.6, 0.3),
        ];
        let (tree, brute) = setup_tables(&points);
        let rect = Rect::new(0.2, 0.2, 0.7, 0.9).unwrap();
        assert_eq!(sorted(tree.range(&rect)), sorted(brute.range(&rect)));
        assert_eq!(
            tree.nearest(&Point::new(0.55, 0.35)),
            brute.nearest(&Point::new(0.55, 0.35))
        );
    }

    #[test]
    fn test_random_dataset_consistency() {
        let mut rng = StdRng::seed_from_u64(42);
        let points = random_points(&mut rng, 2_000);
        let (tree, brute) = setup_tables(&points);
        check_consistency(&tree, &brute, &mut rng, 300);
    }

    #[test]
    fn test_grid_dataset_consistency() {
        let mut rng = StdRng::seed_from_u64(95756739);
        let points = grid_points(&mut rng, 1_000);
        let (tree, brute) = setup_tables(&points);
        assert!(tree.len() < points.len(), "Grid sampling produced duplicates");
        check_consistency(&tree, &brute, &mut rng, 300);
        for (pt, value) in brute.iter() {
            assert_eq!(tree.get(&pt), Some(value), "Latest value wins for {}", pt);
        }
    }

    #[test]
    fn test_small_dataset_consistency() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 1..=12 {
            let points = random_points(&mut rng, n);
            let (tree, brute) = setup_tables(&points);
            check_consistency(&tree, &brute, &mut rng, 20);
        }
    }

    #[test]
    fn test_nearest_k_is_optimal() {
        let mut rng = StdRng::seed_from_u64(1234);
        let points = random_points(&mut rng, 500);
        let (tree, _) = setup_tables(&points);

        for _ in 0..100 {
            let q = Point::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0));
            let k = rng.random_range(1..=20);
            let chosen = tree.nearest_k(&q, k).unwrap();
            assert_eq!(chosen.len(), k);

            let worst_chosen = chosen
                .iter()
                .map(|p| p.distance_squared_to(&q))
                .fold(0.0, f64::max);
            for p in tree.points() {
                if !chosen.contains(&p) {
                    assert!(
                        p.distance_squared_to(&q) >= worst_chosen,
                        "{} is closer than a returned point",
                        p
                    );
                }
            }
        }
    }
}
