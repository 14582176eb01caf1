//! Find the nearest point, and its value, to a query point.
use kdmap::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), KdTreeError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut st = KdTree::new();
    for (i, &(x, y)) in [(0.2, 0.2), (0.8, 0.3), (0.6, 0.9), (0.1, 0.7)].iter().enumerate() {
        st.put(Point::new(x, y), i)?;
    }

    let query = Point::new(0.7, 0.4);
    match st.nearest_entry(&query) {
        Some((p, value)) => println!("st.nearest({}) = {} (value {})", query, p, value),
        None => println!("st.nearest({}) = none", query),
    }
    Ok(())
}
