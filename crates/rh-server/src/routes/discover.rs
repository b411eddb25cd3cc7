//! Discovery routes: popular, top rated, and by-genre pages.

use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use rh_core::{Listing, Page};

use super::{ensure_configured, parse_id, parse_kind, serve_page, PageQuery};
use crate::context::AppContext;
use crate::error::AppError;
use crate::middleware::request_id::RequestId;

/// GET /api/discover/{kind}/popular
pub async fn popular(
    State(ctx): State<AppContext>,
    Extension(request_id): Extension<RequestId>,
    Path(kind): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page>, AppError> {
    let tag = AppError::tagged(&request_id);
    ensure_configured(&ctx).map_err(&tag)?;
    let kind = parse_kind(&kind).map_err(&tag)?;
    serve_page(&ctx, &request_id, kind, Listing::Popular, &query).await
}

/// GET /api/discover/{kind}/top_rated
pub async fn top_rated(
    State(ctx): State<AppContext>,
    Extension(request_id): Extension<RequestId>,
    Path(kind): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page>, AppError> {
    let tag = AppError::tagged(&request_id);
    ensure_configured(&ctx).map_err(&tag)?;
    let kind = parse_kind(&kind).map_err(&tag)?;
    serve_page(&ctx, &request_id, kind, Listing::TopRated, &query).await
}

/// GET /api/discover/{kind}/genre/{genre_id}
pub async fn by_genre(
    State(ctx): State<AppContext>,
    Extension(request_id): Extension<RequestId>,
    Path((kind, genre_id)): Path<(String, String)>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page>, AppError> {
    let tag = AppError::tagged(&request_id);
    ensure_configured(&ctx).map_err(&tag)?;
    let kind = parse_kind(&kind).map_err(&tag)?;
    let genre_id = parse_id(&genre_id).map_err(&tag)?;
    serve_page(&ctx, &request_id, kind, Listing::Genre(genre_id), &query).await
}
