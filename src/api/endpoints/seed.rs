//! `POST /api/seed`: load reference specialties and sample advocates.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, DataResponse};
use crate::db::seed::{seed_database, SeedSummary};

pub async fn run(
    State(ctx): State<ApiContext>,
) -> Result<Json<DataResponse<SeedSummary>>, ApiError> {
    let conn = ctx.core.open_db()?;

    let summary = seed_database(&conn, &mut rand::thread_rng())
        .map_err(|e| ApiError::internal("Failed to seed database", e))?;

    Ok(Json(DataResponse::new(summary)))
}
