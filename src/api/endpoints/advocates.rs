//! Advocate endpoints.
//!
//! Four methods on one resource:
//! - `GET /api/advocates`: every advocate, optionally narrowed by `?search=`
//! - `POST /api/advocates`: create with specialties
//! - `PUT /api/advocates`: replace fields and specialties by body `id`
//! - `DELETE /api/advocates?id=N`: delete

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{
    AdvocatePayload, ApiContext, DataResponse, DeleteQuery, ListQuery, SuccessResponse,
};
use crate::db::{self, DatabaseError};
use crate::models::Advocate;
use crate::search;

/// `GET /api/advocates`
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(query): Query<ListQuery>,
) -> Result<Json<DataResponse<Vec<Advocate>>>, ApiError> {
    let conn = ctx.core.open_db()?;

    let advocates = db::list_advocates(&conn)
        .map_err(|e| ApiError::internal("Failed to fetch advocates", e))?;

    let advocates = match query.search.as_deref() {
        Some(term) => search::filter_advocates(&advocates, term),
        None => advocates,
    };

    Ok(Json(DataResponse::new(advocates)))
}

/// `POST /api/advocates`
pub async fn create(
    State(ctx): State<ApiContext>,
    payload: Result<Json<AdvocatePayload>, JsonRejection>,
) -> Result<Json<DataResponse<Advocate>>, ApiError> {
    let conn = ctx.core.open_db()?;
    let Json(payload) = payload?;
    let (_, fields, specialties) = payload.into_parts()?;

    let advocate = db::create_advocate(&conn, fields, &specialties)
        .map_err(|e| ApiError::internal("Failed to create advocate", e))?;

    Ok(Json(DataResponse::new(advocate)))
}

/// `PUT /api/advocates`
pub async fn update(
    State(ctx): State<ApiContext>,
    payload: Result<Json<AdvocatePayload>, JsonRejection>,
) -> Result<Json<DataResponse<Advocate>>, ApiError> {
    let conn = ctx.core.open_db()?;
    let Json(payload) = payload?;
    let (id, fields, specialties) = payload.into_parts()?;
    let id = id.ok_or_else(|| ApiError::BadRequest("Advocate ID is required".into()))?;

    let advocate = db::update_advocate(&conn, id, fields, &specialties).map_err(|e| match e {
        DatabaseError::NotFound { .. } => ApiError::NotFound("Advocate not found".into()),
        other => ApiError::internal("Failed to update advocate", other),
    })?;

    Ok(Json(DataResponse::new(advocate)))
}

/// `DELETE /api/advocates?id=N`
///
/// Deleting an id that does not exist still reports success.
pub async fn remove(
    State(ctx): State<ApiContext>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let conn = ctx.core.open_db()?;
    let id = query.advocate_id()?;

    db::delete_advocate(&conn, id)
        .map_err(|e| ApiError::internal("Failed to delete advocate", e))?;

    Ok(Json(SuccessResponse { success: true }))
}
