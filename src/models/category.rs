// src/models/category.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// Represents the 'categories' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,

    /// Display label, e.g. "Science".
    /// Mapped from the database column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub category_type: String,
}

/// Formats categories as the `{id: type}` map every endpoint returns.
pub fn category_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories
        .iter()
        .map(|c| (c.id, c.category_type.clone()))
        .collect()
}

/// A category id as clients send it: either `1` or `"1"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Id(i64),
    Text(String),
}

impl CategoryRef {
    pub fn to_id(&self) -> Option<i64> {
        match self {
            CategoryRef::Id(id) => Some(*id),
            CategoryRef::Text(raw) => raw.trim().parse().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ref_accepts_numbers_and_numeric_strings() {
        let n: CategoryRef = serde_json::from_str("3").unwrap();
        let s: CategoryRef = serde_json::from_str("\" 4 \"").unwrap();
        let bad: CategoryRef = serde_json::from_str("\"science\"").unwrap();

        assert_eq!(n.to_id(), Some(3));
        assert_eq!(s.to_id(), Some(4));
        assert_eq!(bad.to_id(), None);
    }

    #[test]
    fn category_map_serializes_ids_as_keys() {
        let categories = vec![
            Category { id: 2, category_type: "Art".to_string() },
            Category { id: 1, category_type: "Science".to_string() },
        ];

        let json = serde_json::to_value(category_map(&categories)).unwrap();
        assert_eq!(json, serde_json::json!({"1": "Science", "2": "Art"}));
    }
}
