//! Genre catalogue route.

use axum::extract::{Path, State};
use axum::{Extension, Json};
use rh_core::Genre;
use serde::Serialize;

use super::{ensure_configured, parse_kind};
use crate::context::AppContext;
use crate::error::AppError;
use crate::middleware::request_id::RequestId;

#[derive(Debug, Serialize)]
pub struct GenresResponse {
    pub genres: Vec<Genre>,
}

/// GET /api/genres/{kind}
pub async fn list_genres(
    State(ctx): State<AppContext>,
    Extension(request_id): Extension<RequestId>,
    Path(kind): Path<String>,
) -> Result<Json<GenresResponse>, AppError> {
    let tag = AppError::tagged(&request_id);
    ensure_configured(&ctx).map_err(&tag)?;
    let kind = parse_kind(&kind).map_err(&tag)?;

    let genres = ctx.catalog.genres(kind).await.map_err(&tag)?;
    Ok(Json(GenresResponse { genres }))
}
