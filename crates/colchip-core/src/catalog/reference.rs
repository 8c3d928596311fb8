//! Reference column catalog.
//!
//! Fixed sample data standing in for a real backend: flat person fields,
//! five groups of sub-fields, then trailing flat fields.

use super::catalog::Catalog;
use super::column::Column;
use super::types::ColumnType;
use std::sync::OnceLock;

static REFERENCE: OnceLock<Catalog> = OnceLock::new();

/// Get the process-wide reference catalog, built on first use.
pub fn reference_catalog() -> &'static Catalog {
    REFERENCE.get_or_init(|| Catalog::new(reference_columns()))
}

/// Build the reference columns.
///
/// Every call returns a freshly built, value-equal sequence.
pub fn reference_columns() -> Vec<Column> {
    use ColumnType::*;

    // Leading flat fields
    let mut columns = vec![
        Column::new("col1", "First Name", String),
        Column::new("col2", "Last Name", String),
        Column::new("col3", "Email", Email),
        Column::new("col4", "Phone", Phone),
    ];

    // Groups
    columns.push(group(
        "col5",
        "Contact",
        [
            ("Email", Email),
            ("Phone", Phone),
            ("LinkedIn", Url),
            ("Website", Url),
        ],
    ));
    columns.push(group(
        "col6",
        "Address",
        [
            ("Street", String),
            ("City", String),
            ("State", String),
            ("Country", String),
            ("ZipCode", String),
        ],
    ));
    columns.push(group(
        "col7",
        "Professional",
        [
            ("Company", String),
            ("Title", String),
            ("Department", String),
            ("Manager", String),
            ("StartDate", Date),
            ("Salary", Number),
        ],
    ));
    columns.push(group(
        "col8",
        "Personal",
        [
            ("Age", Number),
            ("Gender", String),
            ("MaritalStatus", String),
            ("Languages", String),
        ],
    ));
    columns.push(group(
        "col9",
        "Skills",
        [
            ("Programming", String),
            ("Frameworks", String),
            ("Tools", String),
            ("Databases", String),
        ],
    ));

    // Trailing flat fields
    columns.extend([
        Column::new("col10", "Company", String),
        Column::new("col11", "Job Title", String),
        Column::new("col12", "City", String),
        Column::new("col13", "State", String),
        Column::new("col14", "Country", String),
        Column::new("col15", "Experience", String),
        Column::new("col16", "Education", String),
        Column::new("col17", "Summary", Text),
        Column::new("col18", "LinkedIn Profile URL", Url),
        Column::new("col19", "Website", Url),
        Column::new("col20", "GitHub", Url),
    ]);

    columns
}

/// Build a group whose children are numbered `<id>-1`, `<id>-2`, ...
fn group<const N: usize>(id: &str, name: &str, fields: [(&str, ColumnType); N]) -> Column {
    let sub_columns = fields
        .into_iter()
        .enumerate()
        .map(|(i, (field, column_type))| {
            Column::new(format!("{}-{}", id, i + 1), field, column_type)
        });
    Column::group(id, name, sub_columns)
}
