//! Column definitions.

use super::types::ColumnType;
use serde::{Deserialize, Serialize};

/// A column definition: either a flat field or a group of sub-columns.
///
/// Groups own their children exclusively. The type does not cap nesting
/// depth, even though the reference catalog only nests one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column identifier (unique within a catalog, including sub-columns).
    pub id: String,
    /// Human-readable label.
    pub name: String,
    /// Semantic type tag.
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Ordered children; present only for group columns.
    #[serde(
        rename = "subColumns",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sub_columns: Option<Vec<Column>>,
}

impl Column {
    /// Create a flat column.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        column_type: impl Into<ColumnType>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            column_type: column_type.into(),
            sub_columns: None,
        }
    }

    /// Create a group column owning the given sub-columns.
    pub fn group(
        id: impl Into<String>,
        name: impl Into<String>,
        sub_columns: impl IntoIterator<Item = Column>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            column_type: ColumnType::Group,
            sub_columns: Some(sub_columns.into_iter().collect()),
        }
    }

    /// Check if this column is a group.
    pub fn is_group(&self) -> bool {
        self.column_type.is_group()
    }

    /// Get the sub-columns, empty for flat columns.
    pub fn sub_columns(&self) -> &[Column] {
        self.sub_columns.as_deref().unwrap_or_default()
    }

    /// Get a direct child by id.
    pub fn sub_column(&self, id: &str) -> Option<&Column> {
        self.sub_columns().iter().find(|c| c.id == id)
    }

    /// Iterate over this column and all of its descendants, depth first.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }
}

/// Depth-first pre-order iterator over a column tree.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<&'a Column>,
}

impl<'a> Walk<'a> {
    pub(crate) fn over(columns: &'a [Column]) -> Self {
        Self {
            stack: columns.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Column;

    fn next(&mut self) -> Option<Self::Item> {
        let column = self.stack.pop()?;
        self.stack.extend(column.sub_columns().iter().rev());
        Some(column)
    }
}
