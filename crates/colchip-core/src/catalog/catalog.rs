//! Catalog of column definitions.

use super::chip::PATH_SEPARATOR;
use super::column::{Column, Walk};
use crate::error::Error;
use serde::{Deserialize, Serialize};

/// An immutable, ordered collection of top-level columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    columns: Vec<Column>,
}

impl Catalog {
    /// Create a catalog from top-level columns.
    pub fn new(columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
        }
    }

    /// Get the top-level columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Consume the catalog and return its top-level columns.
    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }

    /// Number of top-level columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the catalog has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate over top-level columns.
    pub fn iter(&self) -> std::slice::Iter<'_, Column> {
        self.columns.iter()
    }

    /// Iterate over every column at every depth, depth first.
    pub fn walk(&self) -> Walk<'_> {
        Walk::over(&self.columns)
    }

    /// Iterate over every column id at every depth, depth first.
    pub fn all_ids(&self) -> impl Iterator<Item = &str> {
        self.walk().map(|c| c.id.as_str())
    }

    /// Find a column by id at any depth.
    pub fn get(&self, id: &str) -> Option<&Column> {
        self.walk().find(|c| c.id == id)
    }

    /// Resolve a dotted chip path such as `col5.col5-2`.
    ///
    /// The first segment names a top-level column; every following segment
    /// names a direct child of the previous one.
    pub fn resolve_path(&self, path: &str) -> Option<&Column> {
        let mut segments = path.split(PATH_SEPARATOR);
        let first = segments.next()?;
        let mut current = self.columns.iter().find(|c| c.id == first)?;
        for segment in segments {
            current = current.sub_column(segment)?;
        }
        Some(current)
    }

    /// Resolve a dotted chip path, failing if it does not exist.
    pub fn require_path(&self, path: &str) -> Result<&Column, Error> {
        self.resolve_path(path)
            .ok_or_else(|| Error::UnknownPath(path.to_string()))
    }

    /// Build the dotted chip path for a column id.
    pub fn path_of(&self, id: &str) -> Option<String> {
        let mut trail = Vec::new();
        if find_trail(&self.columns, id, &mut trail) {
            Some(trail.join(PATH_SEPARATOR))
        } else {
            None
        }
    }
}

fn find_trail<'a>(columns: &'a [Column], id: &str, trail: &mut Vec<&'a str>) -> bool {
    for column in columns {
        trail.push(&column.id);
        if column.id == id || find_trail(column.sub_columns(), id, trail) {
            return true;
        }
        trail.pop();
    }
    false
}

impl From<Vec<Column>> for Catalog {
    fn from(columns: Vec<Column>) -> Self {
        Self { columns }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new([
            Column::new("a", "A", "string"),
            Column::group(
                "g",
                "G",
                [
                    Column::new("g-1", "G1", "number"),
                    Column::group("g-2", "G2", [Column::new("g-2-1", "Deep", "date")]),
                ],
            ),
            Column::new("b", "B", "url"),
        ])
    }

    #[test]
    fn test_basic_accessors() {
        let catalog = sample();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
        assert!(Catalog::default().is_empty());
        assert_eq!(catalog.columns()[2].id, "b");
    }

    #[test]
    fn test_get_at_any_depth() {
        let catalog = sample();
        assert_eq!(catalog.get("a").unwrap().name, "A");
        assert_eq!(catalog.get("g-2-1").unwrap().name, "Deep");
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_all_ids_order() {
        let catalog = sample();
        let ids: Vec<&str> = catalog.all_ids().collect();
        assert_eq!(ids, vec!["a", "g", "g-1", "g-2", "g-2-1", "b"]);
    }

    #[test]
    fn test_resolve_path() {
        let catalog = sample();
        assert_eq!(catalog.resolve_path("a").unwrap().id, "a");
        assert_eq!(catalog.resolve_path("g.g-1").unwrap().id, "g-1");
        assert_eq!(catalog.resolve_path("g.g-2.g-2-1").unwrap().id, "g-2-1");

        // Segments must follow the tree.
        assert!(catalog.resolve_path("g-1").is_none());
        assert!(catalog.resolve_path("a.g-1").is_none());
        assert!(catalog.resolve_path("").is_none());
    }

    #[test]
    fn test_require_path() {
        let catalog = sample();
        assert!(catalog.require_path("g.g-1").is_ok());
        assert_eq!(
            catalog.require_path("g.nope").unwrap_err(),
            Error::UnknownPath("g.nope".to_string())
        );
    }

    #[test]
    fn test_path_of() {
        let catalog = sample();
        assert_eq!(catalog.path_of("b").as_deref(), Some("b"));
        assert_eq!(catalog.path_of("g-2-1").as_deref(), Some("g.g-2.g-2-1"));
        assert!(catalog.path_of("zzz").is_none());

        for id in catalog.all_ids() {
            let path = catalog.path_of(id).unwrap();
            assert_eq!(catalog.resolve_path(&path).unwrap().id, id);
        }
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.is_array());
        assert_eq!(json[1]["subColumns"][1]["subColumns"][0]["id"], "g-2-1");
    }
}
