//! Find the K nearest points to a query point.
use kdmap::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), KdTreeError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut st = KdTree::new();
    for i in 0..10 {
        let t = i as f64 / 10.0;
        st.put(Point::new(t, (t * 7.0).fract()), i)?;
    }

    let query = Point::new(0.5, 0.5);
    let k = 3;
    println!("st.nearest({}, {}):", query, k);
    for p in st.nearest_k(&query, k)? {
        println!("  {} at distance {:.4}", p, p.distance_to(&query));
    }
    Ok(())
}
