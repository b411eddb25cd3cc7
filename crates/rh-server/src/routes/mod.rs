//! Route handlers for the HTTP API.

pub mod details;
pub mod discover;
pub mod genres;
pub mod health;
pub mod search;

use axum::Json;
use rh_core::{Error, Listing, MediaKind, Page, SortSpec};
use serde::Deserialize;

use crate::context::AppContext;
use crate::error::AppError;
use crate::middleware::request_id::RequestId;

/// Query parameters accepted by every aggregate (paged) route.
///
/// Values are taken as strings so malformed input yields our own 400 body
/// rather than the extractor's plain-text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl PageQuery {
    /// Requested page, defaulting to 1.
    pub fn page(&self) -> Result<u32, Error> {
        match self.page.as_deref().map(str::trim) {
            None | Some("") => Ok(1),
            Some(raw) => raw
                .parse()
                .map_err(|_| Error::Validation(format!("Invalid page: {raw}"))),
        }
    }

    pub fn sort(&self) -> SortSpec {
        SortSpec::from_query(self.sort_by.as_deref(), self.sort_order.as_deref())
    }
}

/// A missing credential outranks malformed parameters, so every catalog
/// route calls this before parsing anything.
pub(crate) fn ensure_configured(ctx: &AppContext) -> Result<(), Error> {
    if ctx.catalog.is_configured() {
        Ok(())
    } else {
        Err(Error::missing_credential())
    }
}

pub(crate) fn parse_kind(raw: &str) -> Result<MediaKind, Error> {
    raw.parse()
}

pub(crate) fn parse_id(raw: &str) -> Result<u64, Error> {
    raw.parse()
        .map_err(|_| Error::Validation(format!("Invalid id: {raw}")))
}

/// Shared body of every aggregate route: discovery, enrichment, respond.
pub(crate) async fn serve_page(
    ctx: &AppContext,
    request_id: &RequestId,
    kind: MediaKind,
    listing: Listing,
    query: &PageQuery,
) -> Result<Json<Page>, AppError> {
    let tag = AppError::tagged(request_id);
    let page = query.page().map_err(&tag)?;

    let page = ctx
        .catalog
        .page(kind, &listing, page, query.sort())
        .await
        .map_err(&tag)?;
    Ok(Json(page))
}
