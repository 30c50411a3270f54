//! Lucene query parameters for the list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size when no positive limit is given.
pub const DEFAULT_LIMIT: i64 = 10;

/// Default offset when no positive offset is given.
pub const DEFAULT_OFFSET: i64 = 0;

/// Search options for `query_transactions` and `query_contracts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct QueryOptions {
    /// Lucene query string, sent as `q`.
    pub query_string: String,

    /// Sort expression, sent as `sort`.
    pub sort: String,

    /// Number of results to skip. Values `<= 0` mean 0.
    pub offset: i64,

    /// Page size. Values `<= 0` mean 10.
    pub limit: i64,
}

impl QueryOptions {
    pub fn new(query_string: impl Into<String>) -> Self {
        Self {
            query_string: query_string.into(),
            ..Default::default()
        }
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = sort.into();
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }
}

/// Render options as a query string without a leading `?`.
///
/// Parameter order is not part of the contract.
pub fn build_params(options: &QueryOptions) -> String {
    let limit = if options.limit > 0 {
        options.limit
    } else {
        DEFAULT_LIMIT
    };
    let offset = if options.offset > 0 {
        options.offset
    } else {
        DEFAULT_OFFSET
    };

    let mut query = url::form_urlencoded::Serializer::new(String::new());
    if !options.query_string.is_empty() {
        query.append_pair("q", &options.query_string);
    }
    if !options.sort.is_empty() {
        query.append_pair("sort", &options.sort);
    }
    query.append_pair("offset", &offset.to_string());
    query.append_pair("limit", &limit.to_string());
    query.finish()
}

/// Join a collection path with the rendered options.
pub(crate) fn resource_with_params(path: &str, options: &QueryOptions) -> String {
    let params = build_params(options);
    if params.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, params)
    }
}
