use serde::{Deserialize, Serialize};

/// Spring-style page envelope returned by the list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub pageable: Pageable,
    pub total_elements: u64,
    pub total_pages: u64,
    pub first: bool,
    pub last: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    pub page_number: u32,
    pub page_size: u32,
    pub sort: SortInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortInfo {
    pub sorted: bool,
}
