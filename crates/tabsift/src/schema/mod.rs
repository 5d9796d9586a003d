//! Column metadata: types and per-column descriptors.

mod column;
mod types;

pub use column::Column;
pub use types::ColumnType;
