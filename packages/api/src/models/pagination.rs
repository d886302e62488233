use serde::Deserialize;

/// Pagination envelope returned alongside listings. Listings that omit it
/// decode to a single-page default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_users: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_users: 0,
            has_next_page: false,
            has_prev_page: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_use_single_page_default() {
        let pagination: Pagination = serde_json::from_value(json!({})).unwrap();
        assert_eq!(pagination, Pagination::default());
        assert_eq!(pagination.current_page, 1);
    }

    #[test]
    fn test_full_envelope() {
        let pagination: Pagination = serde_json::from_value(json!({
            "currentPage": 2,
            "totalPages": 5,
            "totalUsers": 43,
            "hasNextPage": true,
            "hasPrevPage": true
        }))
        .unwrap();
        assert_eq!(pagination.total_users, 43);
        assert!(pagination.has_next_page);
    }
}
