//! Find all points inside a rectangle.
use kdmap::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), KdTreeError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut st = KdTree::new();
    st.put(Point::new(0.1, 0.2), "a")?;
    st.put(Point::new(0.5, 0.5), "b")?;
    st.put(Point::new(0.9, 0.1), "c")?;
    st.put(Point::new(0.4, 0.7), "d")?;

    let rect = Rect::new(0.3, 0.3, 0.8, 0.8)?;
    println!("st.range({}):", rect);
    for p in st.range(&rect) {
        println!("  {} -> {:?}", p, st.get(&p));
    }
    Ok(())
}
