//! Column type tags.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Semantic type of a column.
///
/// The tag set is open: any tag that is not one of the known variants is kept
/// verbatim in [`ColumnType::Other`]. The `group` tag is reserved for columns
/// that own sub-columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnType {
    /// Free-form short string.
    String,
    /// Email address.
    Email,
    /// Phone number.
    Phone,
    /// URL.
    Url,
    /// Numeric value.
    Number,
    /// Calendar date.
    Date,
    /// Long-form text.
    Text,
    /// Container of sub-columns.
    Group,
    /// Any other tag.
    Other(String),
}

impl ColumnType {
    /// Get the string tag for this type.
    pub fn as_str(&self) -> &str {
        match self {
            ColumnType::String => "string",
            ColumnType::Email => "email",
            ColumnType::Phone => "phone",
            ColumnType::Url => "url",
            ColumnType::Number => "number",
            ColumnType::Date => "date",
            ColumnType::Text => "text",
            ColumnType::Group => "group",
            ColumnType::Other(tag) => tag,
        }
    }

    /// Check if this is the reserved group tag.
    pub fn is_group(&self) -> bool {
        matches!(self, ColumnType::Group)
    }
}

impl From<&str> for ColumnType {
    fn from(tag: &str) -> Self {
        match tag {
            "string" => ColumnType::String,
            "email" => ColumnType::Email,
            "phone" => ColumnType::Phone,
            "url" => ColumnType::Url,
            "number" => ColumnType::Number,
            "date" => ColumnType::Date,
            "text" => ColumnType::Text,
            "group" => ColumnType::Group,
            other => ColumnType::Other(other.to_string()),
        }
    }
}

impl From<String> for ColumnType {
    fn from(tag: String) -> Self {
        match ColumnType::from(tag.as_str()) {
            ColumnType::Other(_) => ColumnType::Other(tag),
            known => known,
        }
    }
}

impl From<ColumnType> for String {
    fn from(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for ColumnType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ColumnType::from(s))
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
