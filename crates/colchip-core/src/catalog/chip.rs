//! Chip selection records.

use super::column::Column;
use serde::{Deserialize, Serialize};

/// Separator between segments of a chip path.
pub const PATH_SEPARATOR: &str = ".";

/// A consumer's selection of a column (or a group's sub-column) bound to a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipData {
    /// Chip instance identifier.
    pub id: String,
    /// Owning top-level column.
    pub column: Column,
    /// Selected child, when the chip points into a group.
    #[serde(
        rename = "subColumn",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sub_column: Option<Column>,
    /// Bound value.
    pub value: String,
    /// Dotted path to the selected column, e.g. `col5.col5-2`.
    pub path: String,
}

impl ChipData {
    /// Create a chip selecting a top-level column.
    pub fn new(id: impl Into<String>, column: Column, value: impl Into<String>) -> Self {
        let path = column.id.clone();
        Self {
            id: id.into(),
            column,
            sub_column: None,
            value: value.into(),
            path,
        }
    }

    /// Create a chip selecting a sub-column of a group.
    pub fn with_sub_column(
        id: impl Into<String>,
        column: Column,
        sub_column: Column,
        value: impl Into<String>,
    ) -> Self {
        let path = format!("{}{}{}", column.id, PATH_SEPARATOR, sub_column.id);
        Self {
            id: id.into(),
            column,
            sub_column: Some(sub_column),
            value: value.into(),
            path,
        }
    }

    /// Get the column this chip actually refers to.
    pub fn selected(&self) -> &Column {
        self.sub_column.as_ref().unwrap_or(&self.column)
    }
}
