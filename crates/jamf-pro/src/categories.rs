//! Category types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl Category {
    pub fn new(name: impl Into<String>, priority: i32) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            priority: Some(priority),
        }
    }
}

/// One page of categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryList {
    #[serde(default)]
    pub total_count: Option<i64>,
    #[serde(default)]
    pub results: Vec<Category>,
}

/// Body of `201 Created` responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct HrefResponse {
    pub id: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DeleteMultiple<'a> {
    pub ids: &'a [String],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serialization_skips_id() {
        let body = serde_json::to_value(Category::new("Apps", 9)).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Apps", "priority": 9}));
    }

    #[test]
    fn test_list_deserialization() {
        let list: CategoryList = serde_json::from_str(
            r#"{"totalCount": 2, "results": [
                {"id": "1", "name": "Apps", "priority": 9},
                {"id": "2", "name": "Utilities", "priority": 5}
            ]}"#,
        )
        .unwrap();
        assert_eq!(list.total_count, Some(2));
        assert_eq!(list.results[1].name.as_deref(), Some("Utilities"));

        let empty: CategoryList = serde_json::from_str("{}").unwrap();
        assert!(empty.results.is_empty());
    }
}
