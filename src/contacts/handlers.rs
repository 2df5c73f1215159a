use super::error::{ContactError, IdOperation};
use super::store::ContactRepository;
use super::types::{Contact, ContactQuery};

use axum::body::Bytes;
use axum::extract::{Extension, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;

// Bodies are decoded by hand rather than through the `Json` extractor: the directory
// accepts a contact regardless of the request `Content-Type`, and every decode failure
// is a 400. A JSON `null` decodes to an all-zero contact.
fn decode_contact(body: &[u8]) -> Result<Contact, serde_json::Error> {
    serde_json::from_slice::<Option<Contact>>(body).map(Option::unwrap_or_default)
}

/// `GET /contacts` lists every contact; `GET /contacts?id=N` fetches one.
pub async fn handle_get_contacts<R>(
    Extension(store): Extension<Arc<R>>,
    Query(query): Query<ContactQuery>,
) -> Result<Response, ContactError>
where
    R: ContactRepository,
{
    match query.contact_id() {
        Some(id) => {
            let contact = store.get(id).await?;
            Ok(Json(contact).into_response())
        }
        None => {
            let contacts = store.list().await;
            tracing::debug!("Listing {} contacts", contacts.len());
            Ok(Json(contacts).into_response())
        }
    }
}

pub async fn handle_create_contact<R>(
    Extension(store): Extension<Arc<R>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Contact>), ContactError>
where
    R: ContactRepository,
{
    let contact = decode_contact(&body).map_err(|e| {
        tracing::warn!("Rejected contact body: {}", e);
        ContactError::Decode(e.to_string())
    })?;

    let stored = store.create(contact).await;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// `PUT /contacts?id=N` replaces the contact stored under `N`.
///
/// A body that fails to decode stops the request before the store is touched.
pub async fn handle_update_contact<R>(
    Extension(store): Extension<Arc<R>>,
    Query(query): Query<ContactQuery>,
    body: Bytes,
) -> Result<StatusCode, ContactError>
where
    R: ContactRepository,
{
    let id = query.contact_id().ok_or_else(|| {
        tracing::warn!("Update without id");
        ContactError::MissingId(IdOperation::Update)
    })?;

    let contact = decode_contact(&body).map_err(|e| {
        tracing::warn!("Rejected update body for contact {}: {}", id, e);
        ContactError::InvalidUpdate
    })?;

    store.update(id, contact).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn handle_delete_contact<R>(
    Extension(store): Extension<Arc<R>>,
    Query(query): Query<ContactQuery>,
) -> Result<StatusCode, ContactError>
where
    R: ContactRepository,
{
    let id = query.contact_id().ok_or_else(|| {
        tracing::warn!("Delete without id");
        ContactError::MissingId(IdOperation::Delete)
    })?;

    store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn handle_method_not_allowed() -> ContactError {
    ContactError::MethodNotAllowed
}
