pub mod error;
pub mod loader;
pub mod table;

pub use error::LoadError;
pub use loader::{Datasets, load_datasets};
pub use table::{Row, Table, TableKind};
