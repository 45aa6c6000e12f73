//! Person API handlers.
//!
//! Handlers translate HTTP in and out and nothing more; validation lives
//! in [`PersonService`](crate::services::PersonService).

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use chrono::Local;
use serde::Deserialize;

use contacts_core::PersonId;

use crate::error::AppError;
use crate::models::{CreatePersonInput, PersonResponse, UpdatePersonInput};
use crate::state::AppState;

/// Build the person router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/person", post(create_person))
        .route(
            "/api/person/{id}",
            get(get_person)
                .put(update_person)
                .patch(rename_person)
                .delete(delete_person),
        )
}

/// Query parameters for the rename endpoint.
///
/// The rename surface takes the new name as a single request parameter
/// rather than a JSON body.
#[derive(Debug, Deserialize)]
pub struct RenameParams {
    /// The new name.
    pub name: String,
}

/// Fetch a person by ID.
///
/// # Errors
///
/// Returns 404 if the ID has no record.
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PersonResponse>, AppError> {
    let person = state.service().get_person(PersonId::new(id)).await?;
    Ok(Json(PersonResponse::on(person, Local::now().date_naive())))
}

/// Create a person. Responds 201 with no body.
///
/// # Errors
///
/// Returns a generic server error if the name is missing or empty.
pub async fn create_person(
    State(state): State<AppState>,
    Json(input): Json<CreatePersonInput>,
) -> Result<StatusCode, AppError> {
    let person = state.service().create(input).await?;

    let roster = state.store().find_all().await.map_err(AppError::from)?;
    tracing::info!(id = %person.id, roster = roster.len(), "person created");

    Ok(StatusCode::CREATED)
}

/// Full update: overwrite every profile field except the name.
///
/// # Errors
///
/// Returns 400 if the ID has no record or the submitted name differs
/// from the stored one.
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdatePersonInput>,
) -> Result<StatusCode, AppError> {
    state.service().full_update(PersonId::new(id), input).await?;
    Ok(StatusCode::OK)
}

/// Rename a person. The new name arrives as a query parameter.
///
/// # Errors
///
/// Returns 404 if the ID has no record.
pub async fn rename_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<RenameParams>,
) -> Result<StatusCode, AppError> {
    state.service().rename(PersonId::new(id), params.name).await?;
    Ok(StatusCode::OK)
}

/// Soft-delete a person.
///
/// # Errors
///
/// Returns 404 if the ID has no record.
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.service().soft_delete(PersonId::new(id)).await?;
    Ok(StatusCode::OK)
}
