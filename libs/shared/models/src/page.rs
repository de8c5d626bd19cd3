use std::fmt;

use serde::{Deserialize, Serialize};

/// One page of a paginated collection, as the backend serializes it:
/// `{ "content": [...], "totalElements": n, "totalPages": n }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

impl fmt::Display for SortDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDir::Asc => write!(f, "asc"),
            SortDir::Desc => write!(f, "desc"),
        }
    }
}

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Query parameters for list endpoints. `page` is 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort_by: String,
    pub sort_dir: SortDir,
}

impl PageRequest {
    pub fn new(sort_by: impl Into<String>, sort_dir: SortDir) -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort_by: sort_by.into(),
            sort_dir,
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sortBy", self.sort_by.clone()),
            ("sortDir", self.sort_dir.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_renders_backend_query_params() {
        let request = PageRequest::new("createdAt", SortDir::Desc);
        let pairs = request.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page", "0".to_string()),
                ("size", "10".to_string()),
                ("sortBy", "createdAt".to_string()),
                ("sortDir", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn page_deserializes_with_missing_totals() {
        let page: Page<String> = serde_json::from_str(r#"{"content":["a"]}"#).unwrap();
        assert_eq!(page.content, vec!["a".to_string()]);
        assert_eq!(page.total_elements, 0);
        assert_eq!(page.total_pages, 0);
    }
}
