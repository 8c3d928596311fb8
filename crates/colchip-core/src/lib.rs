//! colchip Core - Column catalog and chip selection model.
//!
//! This crate provides the column definitions a downstream consumer can pick
//! from, along with the record type describing a single selection.

pub mod catalog;
pub mod error;

pub use catalog::{
    reference_catalog, reference_columns, Catalog, ChipData, Column, ColumnType, Walk,
    PATH_SEPARATOR,
};
pub use error::Error;
