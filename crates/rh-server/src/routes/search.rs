//! Title search route.

use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use rh_core::{Listing, Page};
use serde::Deserialize;

use super::{ensure_configured, parse_kind, serve_page, PageQuery};
use crate::context::AppContext;
use crate::error::AppError;
use crate::middleware::request_id::RequestId;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
    #[serde(flatten)]
    pub paging: PageQuery,
}

/// GET /api/search/{kind}?query=
pub async fn search(
    State(ctx): State<AppContext>,
    Extension(request_id): Extension<RequestId>,
    Path(kind): Path<String>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Page>, AppError> {
    let tag = AppError::tagged(&request_id);
    ensure_configured(&ctx).map_err(&tag)?;
    let kind = parse_kind(&kind).map_err(&tag)?;
    // A blank query is rejected by discovery.
    let listing = Listing::Search(params.query.unwrap_or_default());
    serve_page(&ctx, &request_id, kind, listing, &params.paging).await
}
