//! Single-entity routes and the per-title similar/recommendations pages.

use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use rh_core::{Entity, Listing, Page};
use serde_json::Value;

use super::{ensure_configured, parse_id, parse_kind, serve_page, PageQuery};
use crate::context::AppContext;
use crate::error::AppError;
use crate::middleware::request_id::RequestId;

/// GET /api/details/{kind}/{id}
pub async fn title(
    State(ctx): State<AppContext>,
    Extension(request_id): Extension<RequestId>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<Json<Value>, AppError> {
    let tag = AppError::tagged(&request_id);
    ensure_configured(&ctx).map_err(&tag)?;
    let kind = parse_kind(&kind).map_err(&tag)?;
    let id = parse_id(&id).map_err(&tag)?;

    let value = ctx.catalog.entity(Entity::from(kind), id).await.map_err(&tag)?;
    Ok(Json(value))
}

/// GET /api/person/{id}
pub async fn person(
    State(ctx): State<AppContext>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let tag = AppError::tagged(&request_id);
    ensure_configured(&ctx).map_err(&tag)?;
    let id = parse_id(&id).map_err(&tag)?;

    let value = ctx.catalog.entity(Entity::Person, id).await.map_err(&tag)?;
    Ok(Json(value))
}

/// GET /api/details/{kind}/{id}/similar
pub async fn similar(
    State(ctx): State<AppContext>,
    Extension(request_id): Extension<RequestId>,
    Path((kind, id)): Path<(String, String)>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page>, AppError> {
    let tag = AppError::tagged(&request_id);
    ensure_configured(&ctx).map_err(&tag)?;
    let kind = parse_kind(&kind).map_err(&tag)?;
    let id = parse_id(&id).map_err(&tag)?;
    serve_page(&ctx, &request_id, kind, Listing::Similar(id), &query).await
}

/// GET /api/details/{kind}/{id}/recommendations
pub async fn recommendations(
    State(ctx): State<AppContext>,
    Extension(request_id): Extension<RequestId>,
    Path((kind, id)): Path<(String, String)>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page>, AppError> {
    let tag = AppError::tagged(&request_id);
    ensure_configured(&ctx).map_err(&tag)?;
    let kind = parse_kind(&kind).map_err(&tag)?;
    let id = parse_id(&id).map_err(&tag)?;
    serve_page(&ctx, &request_id, kind, Listing::Recommendations(id), &query).await
}
