//! Column catalog for colchip.
//!
//! The catalog holds the ordered set of columns (flat fields and groups of
//! sub-fields) that a consumer can select from.

mod catalog;
mod chip;
mod column;
mod reference;
mod types;

pub use catalog::Catalog;
pub use chip::{ChipData, PATH_SEPARATOR};
pub use column::{Column, Walk};
pub use reference::{reference_catalog, reference_columns};
pub use types::ColumnType;
