use serde_json::json;
use wikisearch_web::data_models::{Method, SearchPage, SearchQuery};
use wikisearch_web::views::*;

fn lucene_query(keyword: &str) -> SearchQuery {
    SearchQuery {
        keyword: keyword.to_string(),
        method: Method::Lucene,
        page: 1,
    }
}

#[test]
fn test_page_url_suffix() {
    assert_eq!(
        page_url_suffix(Method::Lucene, "test"),
        "/query?method=lucene&keyword=test&page="
    );
    assert_eq!(
        page_url_suffix(Method::MixerPr, "rock & roll"),
        "/query?method=mixerpr&keyword=rock+%26+roll&page="
    );
}

#[test]
fn test_page_window() {
    assert_eq!(page_window(1, 3), vec![1, 2, 3]);
    assert_eq!(page_window(10, 20), vec![6, 7, 8, 9, 10, 11, 12, 13, 14]);
    assert_eq!(page_window(2, 20), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(page_window(50, 20), vec![16, 17, 18, 19, 20]);
    assert!(page_window(0, 0).is_empty());
}

#[test]
fn test_describe_error() {
    assert_eq!(describe_error(&json!("no results")), "no results");
    assert_eq!(describe_error(&json!({"code": 7})), r#"{"code":7}"#);
}

#[test]
fn test_failed_view() {
    let view = QueryView::failed("WikiSearch", &lucene_query("test"), &json!("no results"));
    assert_eq!(view.title, "test - WikiSearch");
    assert_eq!(view.hits, -1);
    assert_eq!(view.error.as_deref(), Some("no results"));
    assert!(view.pages.is_none());
    assert_eq!(view.methods, vec!["lucene", "mixer", "mixerpr"]);
    assert_eq!(view.site_name, "WikiSearch");
    assert!(view.time.is_none());
}

#[test]
fn test_found_view() {
    let page = SearchPage {
        page_no: 1,
        total_pages: 3,
        hits: 42,
        pages: Vec::new(),
        elapsed_time: 1500,
    };
    let view = QueryView::found("WikiSearch", &lucene_query("test"), page);
    assert_eq!(view.hits, 42);
    assert_eq!(view.page_no, Some(1));
    assert_eq!(view.total_pages, Some(3));
    assert_eq!(view.time, Some(1.5));
    assert_eq!(
        view.page_url_suffix.as_deref(),
        Some("/query?method=lucene&keyword=test&page=")
    );
    assert_eq!(view.page_window, vec![1, 2, 3]);
    assert!(view.error.is_none());
}

#[test]
fn test_found_view_serializes_camel_case() {
    let page = SearchPage {
        page_no: 2,
        total_pages: 2,
        hits: 11,
        pages: Vec::new(),
        elapsed_time: 250,
    };
    let value = serde_json::to_value(QueryView::found("WikiSearch", &lucene_query("x"), page)).unwrap();
    assert_eq!(value["pageNo"], 2);
    assert_eq!(value["totalPages"], 2);
    assert_eq!(value["method"], "lucene");
    assert_eq!(value["time"], 0.25);
    assert!(value.get("error").is_none());
    assert_eq!(value["site_name"], "WikiSearch");
    assert_eq!(value["methods"], json!(["lucene", "mixer", "mixerpr"]));
}

#[test]
fn test_render_templates() {
    let index = render_template(INDEX_TEMPLATE, &IndexView::new("WikiSearch")).unwrap();
    assert!(index.0.contains("<title>WikiSearch</title>"));
    assert!(index.0.contains(r#"value="mixerpr""#));

    let failed = QueryView::failed("WikiSearch", &lucene_query("<script>"), &json!("no results"));
    let html = render_template(QUERY_TEMPLATE, &failed).unwrap();
    assert!(html.0.contains("no results"));
    assert!(!html.0.contains("<script>"));

    let error = ErrorView::new("WikiSearch", "connection refused", Some("{}".to_string()));
    let html = render_template(ERROR_TEMPLATE, &error).unwrap();
    assert!(html.0.contains("connection refused"));
    assert!(html.0.contains(r#"<a class="brand" href="/">WikiSearch</a>"#));
}

#[test]
fn test_unknown_template_is_an_error() {
    assert!(render_template("missing.html", &IndexView::new("WikiSearch")).is_err());
}
