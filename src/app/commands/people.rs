use crate::domain::Datasets;

/// Names from the profile table's key column, in file order.
pub fn execute(datasets: &Datasets) -> Vec<String> {
    datasets.people().into_iter().map(str::to_string).collect()
}
