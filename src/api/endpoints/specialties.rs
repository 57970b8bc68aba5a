//! `GET /api/specialties`: every specialty, ordered by name.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db;
use crate::models::Specialty;

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Specialty>>, ApiError> {
    let conn = ctx.core.open_db()?;

    let specialties = db::list_specialties(&conn)
        .map_err(|e| ApiError::internal("Failed to fetch specialties", e))?;

    Ok(Json(specialties))
}
