//! Build-time benchmark: random insertion order vs. sorted (degenerate) order

use kdmap::KdTree;
use kdmap::Point;
use rand::Rng;
use rand::SeedableRng;
use std::time::Instant;

fn main() {
    println!("kdmap Build Benchmark");
    println!("=====================\n");

    let seed = 95756739_u64;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    for &num_items in &[10_000_usize, 100_000, 1_000_000] {
        let points: Vec<Point> = (0..num_items)
            .map(|_| Point::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)))
            .collect();

        let build_start = Instant::now();
        let mut tree = KdTree::with_capacity(num_items);
        for (i, &p) in points.iter().enumerate() {
            tree.put(p, i).unwrap();
        }
        let elapsed = build_start.elapsed();
        println!(
            "build random {:>8} items: {:>12.2}ms  (height {})",
            num_items,
            elapsed.as_secs_f64() * 1000.0,
            tree.height()
        );
    }

    // Sorted input turns the tree into a path; keep it small
    let num_items = 10_000;
    let build_start = Instant::now();
    let mut tree = KdTree::with_capacity(num_items);
    for i in 0..num_items {
        let t = i as f64 / num_items as f64;
        tree.put(Point::new(t, t), i).unwrap();
    }
    let elapsed = build_start.elapsed();
    println!(
        "build sorted {:>8} items: {:>12.2}ms  (height {})",
        num_items,
        elapsed.as_secs_f64() * 1000.0,
        tree.height()
    );
}
