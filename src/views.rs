use axum::response::Html;
use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::Value;

use crate::data_models::{Method, ResultPage, SearchPage, SearchQuery};

pub const INDEX_TEMPLATE: &str = "index.html";
pub const QUERY_TEMPLATE: &str = "query.html";
pub const ERROR_TEMPLATE: &str = "error.html";

/// Sentinel hit count shown when the backend reported an error.
pub const ERROR_HITS: i64 = -1;

/// Pages linked on either side of the current one in the pagination bar.
const PAGE_WINDOW_RADIUS: u32 = 4;

/// Templates embedded by `build.rs`.
static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    minijinja_embed::load_templates!(&mut env);
    env
});

pub fn render_template<T>(template_name: &str, context: &T) -> Result<Html<String>, minijinja::Error>
where
    T: Serialize,
{
    let tmpl = TEMPLATES.get_template(template_name)?;
    let context = minijinja::Value::from_serialize(context);
    let output = tmpl.render(context)?;

    Ok(output.into())
}

#[derive(Serialize, Debug)]
pub struct IndexView {
    pub title: String,
    pub site_name: String,
    pub methods: Vec<&'static str>,
}

impl IndexView {
    pub fn new(site_name: &str) -> Self {
        IndexView {
            title: site_name.to_string(),
            site_name: site_name.to_string(),
            methods: method_names(),
        }
    }
}

/// Model behind `query.html`. Carries either `error` (with `hits == -1`) or
/// the paging fields.
#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueryView {
    pub title: String,
    #[serde(rename = "site_name")]
    pub site_name: String,
    pub methods: Vec<&'static str>,
    pub keyword: String,
    pub method: Method,
    pub hits: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_no: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_url_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<ResultPage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub page_window: Vec<u32>,
}

impl QueryView {
    pub fn failed(site_name: &str, query: &SearchQuery, error: &Value) -> Self {
        QueryView {
            title: page_title(&query.keyword, site_name),
            site_name: site_name.to_string(),
            methods: method_names(),
            keyword: query.keyword.clone(),
            method: query.method,
            hits: ERROR_HITS,
            error: Some(describe_error(error)),
            page_no: None,
            page_url_suffix: None,
            total_pages: None,
            pages: None,
            time: None,
            page_window: Vec::new(),
        }
    }

    pub fn found(site_name: &str, query: &SearchQuery, page: SearchPage) -> Self {
        QueryView {
            title: page_title(&query.keyword, site_name),
            site_name: site_name.to_string(),
            methods: method_names(),
            keyword: query.keyword.clone(),
            method: query.method,
            hits: page.hits,
            error: None,
            page_no: Some(page.page_no),
            page_url_suffix: Some(page_url_suffix(query.method, &query.keyword)),
            total_pages: Some(page.total_pages),
            time: Some(page.elapsed_seconds()),
            page_window: page_window(page.page_no, page.total_pages),
            pages: Some(page.pages),
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct ErrorView {
    pub title: String,
    pub site_name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorView {
    pub fn new(site_name: &str, message: impl Into<String>, detail: Option<String>) -> Self {
        ErrorView {
            title: format!("Error - {site_name}"),
            site_name: site_name.to_string(),
            message: message.into(),
            detail,
        }
    }
}

fn method_names() -> Vec<&'static str> {
    Method::ALL.iter().map(Method::as_str).collect()
}

pub fn page_title(keyword: &str, site_name: &str) -> String {
    format!("{keyword} - {site_name}")
}

/// Link prefix for the pagination bar; the page number is appended by the template.
pub fn page_url_suffix(method: Method, keyword: &str) -> String {
    let keyword: String = url::form_urlencoded::byte_serialize(keyword.as_bytes()).collect();
    format!("/query?method={method}&keyword={keyword}&page=")
}

pub fn page_window(page_no: u32, total_pages: u32) -> Vec<u32> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = page_no.clamp(1, total_pages);
    let first = current.saturating_sub(PAGE_WINDOW_RADIUS).max(1);
    let last = current.saturating_add(PAGE_WINDOW_RADIUS).min(total_pages);
    (first..=last).collect()
}

pub fn describe_error(error: &Value) -> String {
    match error {
        Value::String(message) => message.clone(),
        other => other.to_string(),
    }
}
