use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::data_models::BackendReply;
use crate::error::AppError;
use crate::views::{
    ERROR_TEMPLATE, ErrorView, INDEX_TEMPLATE, IndexView, QUERY_TEMPLATE, QueryView,
    render_template,
};

use super::AppState;
use super::models::QueryParams;

pub async fn index_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let view = IndexView::new(&state.site_name);
    Ok(render_template(INDEX_TEMPLATE, &view)?.into_response())
}

pub async fn query_handler(
    State(state): State<AppState>,
    params: Result<Query<QueryParams>, QueryRejection>,
) -> Result<Response, AppError> {
    // Unparsable query strings (e.g. a repeated `keyword`) are invalid input like any other.
    let params = match params {
        Ok(Query(params)) => params,
        Err(e) => {
            log::info!("rejected query string: {e}");
            return Ok(Redirect::to("/").into_response());
        }
    };

    let Some(query) = params.into_search_query() else {
        return Ok(Redirect::to("/").into_response());
    };

    let body = match state
        .backend
        .query(query.method, &query.keyword, query.page)
        .await
    {
        Ok(body) => body,
        Err(e) => {
            log::warn!("search backend unavailable: {:#}", e);
            let view = ErrorView::new(&state.site_name, e.to_string(), None);
            let page = render_template(ERROR_TEMPLATE, &view)?;
            return Ok((StatusCode::BAD_GATEWAY, page).into_response());
        }
    };

    match BackendReply::classify(body) {
        BackendReply::Found(page) => {
            log::info!(
                "search {:?} via {} returned {} hits in {}ms",
                query.keyword,
                query.method,
                page.hits,
                page.elapsed_time
            );
            let view = QueryView::found(&state.site_name, &query, page);
            Ok(render_template(QUERY_TEMPLATE, &view)?.into_response())
        }
        BackendReply::Failed(data) => {
            let view = QueryView::failed(&state.site_name, &query, &data);
            Ok(render_template(QUERY_TEMPLATE, &view)?.into_response())
        }
        BackendReply::Malformed(body) => {
            log::warn!("search backend returned an unexpected body: {body}");
            let view = ErrorView::new(
                &state.site_name,
                "The search service returned an unexpected response.",
                Some(body.to_string()),
            );
            let page = render_template(ERROR_TEMPLATE, &view)?;
            Ok((StatusCode::BAD_GATEWAY, page).into_response())
        }
    }
}
