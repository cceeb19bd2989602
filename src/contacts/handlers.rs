use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{error, instrument, warn};

use crate::{error::ApiError, state::AppState};

use super::dto::{ContactRequest, ContactResponse, CreatedContactResponse};
use super::{repo, services};

// --- public routers ---

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/contacts", get(list_contacts))
        .route("/contacts/:id", get(get_contact))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/contacts", post(create_contact))
        .route("/contacts/:id", put(update_contact).delete(delete_contact))
}

// --- handlers ---

#[instrument(skip(state))]
pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactResponse>>, ApiError> {
    let contacts = repo::list_all(&state.db).await.map_err(|e| {
        error!(error = %e, "list contacts failed");
        ApiError::Query(e)
    })?;
    Ok(Json(contacts.into_iter().map(ContactResponse::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ContactResponse>, ApiError> {
    let oid = services::parse_object_id(&id, "Must use a valid contact id to find a contact.")?;

    let found = repo::find_by_id(&state.db, oid).await.map_err(|e| {
        error!(error = %e, %id, "get contact failed");
        ApiError::Query(e)
    })?;

    match found {
        Some(contact) => Ok(Json(ContactResponse::from(contact))),
        None => {
            warn!(%id, "contact not found");
            Err(ApiError::NotFound)
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn create_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> Result<(StatusCode, Json<CreatedContactResponse>), ApiError> {
    let contact = match services::validate_contact(payload) {
        Ok(contact) => contact,
        Err(e) => {
            warn!(error = %e, "create contact rejected");
            return Err(e);
        }
    };

    let result = repo::insert(&state.db, &contact).await.map_err(|e| {
        error!(error = %e, "insert contact failed");
        ApiError::Write("Database error while creating contact.")
    })?;

    let Some(inserted_id) = result.inserted_id.as_object_id() else {
        error!(inserted_id = %result.inserted_id, "insert acknowledged without an object id");
        return Err(ApiError::Write(
            "Some error occurred while creating the contact.",
        ));
    };

    Ok((
        StatusCode::CREATED,
        Json(CreatedContactResponse {
            acknowledged: true,
            inserted_id: inserted_id.to_hex(),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ContactRequest>,
) -> Result<StatusCode, ApiError> {
    let oid = services::parse_object_id(&id, "Must use a valid contact id to update a contact.")?;

    let contact = match services::validate_contact(payload) {
        Ok(contact) => contact,
        Err(e) => {
            warn!(error = %e, %id, "update contact rejected");
            return Err(e);
        }
    };

    let result = repo::replace(&state.db, oid, &contact).await.map_err(|e| {
        error!(error = %e, %id, "replace contact failed");
        ApiError::Write("Database error while updating contact.")
    })?;

    if result.modified_count > 0 {
        Ok(StatusCode::NO_CONTENT)
    } else {
        warn!(%id, "replace modified nothing");
        Err(ApiError::NothingUpdated)
    }
}

#[instrument(skip(state))]
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let oid = services::parse_object_id(&id, "Must use a valid contact id to delete a contact.")?;

    let result = repo::delete(&state.db, oid).await.map_err(|e| {
        error!(error = %e, %id, "delete contact failed");
        ApiError::Write("Database error while deleting contact.")
    })?;

    if result.deleted_count > 0 {
        Ok(StatusCode::NO_CONTENT)
    } else {
        warn!(%id, "delete matched no contact");
        Err(ApiError::NothingDeleted)
    }
}
