// File: crates/skycast-chart/src/grid.rs
// Summary: Simple grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![(start + end) * 0.5],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            (0..steps).map(|i| start + step * i as f64).collect()
        }
    }
}
