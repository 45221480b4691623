//! Per-category report example: builds a synthetic evaluator result and prints
//! the resulting metric table.
//!
//! Run with `RUST_LOG=debug` to see one evaluator-style line per metric.

use coco_class_metrics::{class_metrics, EvaluationResult, Params, TableStats, SENTINEL};
use ndarray::{Array4, Array5, Axis};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Per-Category COCO Metrics ===\n");

    // Three categories; category 2 has no ground truth at IoU=0.75.
    let params = Params::coco_default(vec![1, 2, 3]);
    let mut precision = Array5::from_elem((10, 101, 3, 4, 3), 0.0);
    for (k, base) in [0.82, 0.64, 0.47].iter().enumerate() {
        for t in 0..10 {
            let decay = 1.0 - 0.06 * t as f64;
            precision
                .index_axis_mut(Axis(0), t)
                .index_axis_mut(Axis(1), k)
                .fill(base * decay);
        }
    }
    precision
        .index_axis_mut(Axis(0), 5)
        .index_axis_mut(Axis(1), 1)
        .fill(SENTINEL);
    let mut recall = Array4::from_elem((10, 3, 4, 3), 0.0);
    for (k, r) in [0.71, 0.58, 0.40].iter().enumerate() {
        recall.index_axis_mut(Axis(1), k).fill(*r);
    }

    let result = EvaluationResult::new(params, precision.into_dyn(), recall.into_dyn())?;
    let table = class_metrics(&result)?;

    let header: Vec<String> = table.columns().iter().map(|c| format!("{:>18}", c)).collect();
    println!("{}", header.join(""));
    for row in table.rows() {
        let values: Vec<String> = row.values.iter().map(|v| format!("{:>18.4}", v)).collect();
        println!("{:>18}{}", row.category_id, values.join(""));
    }
    println!();

    println!("{}", TableStats::from_table(&table).summary_string());
    println!("\nJSON:\n{}", table.to_json()?);

    Ok(())
}
