//! Paginated list envelopes and list query parameters.

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use martianpay_core::types::Timestamp;

/// One page of resources as returned by every list endpoint.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List<T> {
    /// Always `"list"`.
    pub object: Option<String>,
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    pub total: Option<u64>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub url: Option<String>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List {
            object: Some("list".to_string()),
            data: Vec::new(),
            has_more: false,
            total: None,
            page: None,
            page_size: None,
            url: None,
        }
    }
}

impl<T> List<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The page to request next, when the server reported one.
    pub fn next_page(&self) -> Option<u32> {
        if self.has_more {
            self.page.and_then(|p| p.checked_add(1))
        } else {
            None
        }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// Query parameters shared by list endpoints.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    #[builder(into)]
    pub starting_after: Option<String>,
    #[builder(into)]
    pub ending_before: Option<String>,
    #[builder(into)]
    pub created_gte: Option<Timestamp>,
    #[builder(into)]
    pub created_lte: Option<Timestamp>,
}

impl ListParams {
    /// Renders the set parameters as query pairs, in a stable order.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            query.push(("page_size", page_size.to_string()));
        }
        if let Some(id) = &self.starting_after {
            query.push(("starting_after", id.clone()));
        }
        if let Some(id) = &self.ending_before {
            query.push(("ending_before", id.clone()));
        }
        if let Some(ts) = self.created_gte {
            query.push(("created[gte]", ts.to_string()));
        }
        if let Some(ts) = self.created_lte {
            query.push(("created[lte]", ts.to_string()));
        }
        query
    }
}
