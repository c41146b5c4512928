use serde::Deserialize;

use crate::data_models::{Method, SearchQuery, trim_input};

/// Raw `/query` parameters. Everything is optional; validation happens in
/// [`QueryParams::into_search_query`].
#[derive(Debug, Default, Deserialize)]
pub struct QueryParams {
    pub keyword: Option<String>,
    pub method: Option<String>,
    pub page: Option<String>,
}

impl QueryParams {
    /// Returns `None` when the request must be bounced back to the home page.
    pub fn into_search_query(self) -> Option<SearchQuery> {
        let keyword = trim_input(&self.keyword?).to_string();
        let method = self.method?;

        if keyword.is_empty() || trim_input(&method).is_empty() {
            return None;
        }

        let method: Method = method.parse().ok()?;

        Some(SearchQuery {
            keyword,
            method,
            page: parse_page(self.page.as_deref()),
        })
    }
}

/// Reads the leading integer of `raw` (`"2abc"` is 2). Anything that does not
/// yield a positive page number falls back to 1.
pub fn parse_page(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return 1;
    };

    let raw = raw.trim_start();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<u32>() {
        Ok(page) if page > 0 && !negative => page,
        _ => 1,
    }
}
