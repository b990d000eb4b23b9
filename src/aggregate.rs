/// Arithmetic mean. Empty input is not guarded and yields NaN.
pub fn calculate_average_score<V: AsRef<[f64]>>(values: V) -> f64 {
    let values = values.as_ref();
    let sum: f64 = values.iter().sum();
    sum / values.len() as f64
}
