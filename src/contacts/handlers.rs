use crate::app_context::AppContext;
use crate::contacts::requests::SaveContactRequest;
use crate::contacts::responses::{
    ContactListResponse, ContactResponse, ContactResponseError, DeleteContactResponse,
};
use crate::storage::contacts::HashMapContactsStorage;
use crate::storage::interface::ContactsRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

#[axum::debug_handler]
pub async fn index(
    State(app_context): State<AppContext<HashMapContactsStorage>>,
) -> Json<ContactListResponse> {
    let contacts = app_context.contacts.all().await;
    Json(ContactListResponse {
        error: false,
        contacts,
    })
}

#[axum::debug_handler]
pub async fn create(
    State(app_context): State<AppContext<HashMapContactsStorage>>,
    Json(request): Json<SaveContactRequest>,
) -> (StatusCode, Json<ContactResponse>) {
    let contact = app_context.contacts.create(request).await;
    (
        StatusCode::CREATED,
        Json(ContactResponse {
            error: false,
            error_code: None,
            contact: Some(contact),
        }),
    )
}

#[axum::debug_handler]
pub async fn show(
    Path(contact_id): Path<u64>,
    State(app_context): State<AppContext<HashMapContactsStorage>>,
) -> (StatusCode, Json<ContactResponse>) {
    match app_context.contacts.get(contact_id).await {
        Some(contact) => (
            StatusCode::OK,
            Json(ContactResponse {
                error: false,
                error_code: None,
                contact: Some(contact),
            }),
        ),
        None => contact_not_found(),
    }
}

#[axum::debug_handler]
pub async fn update(
    Path(contact_id): Path<u64>,
    State(app_context): State<AppContext<HashMapContactsStorage>>,
    Json(request): Json<SaveContactRequest>,
) -> (StatusCode, Json<ContactResponse>) {
    match app_context.contacts.update(contact_id, request).await {
        Some(contact) => (
            StatusCode::OK,
            Json(ContactResponse {
                error: false,
                error_code: None,
                contact: Some(contact),
            }),
        ),
        None => contact_not_found(),
    }
}

#[axum::debug_handler]
pub async fn destroy(
    Path(contact_id): Path<u64>,
    State(app_context): State<AppContext<HashMapContactsStorage>>,
) -> (StatusCode, Json<DeleteContactResponse>) {
    if app_context.contacts.delete(contact_id).await {
        (
            StatusCode::OK,
            Json(DeleteContactResponse {
                error: false,
                error_code: None,
            }),
        )
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(DeleteContactResponse {
                error: true,
                error_code: Some(ContactResponseError::ContactNotFound),
            }),
        )
    }
}

fn contact_not_found() -> (StatusCode, Json<ContactResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ContactResponse {
            error: true,
            error_code: Some(ContactResponseError::ContactNotFound),
            contact: None,
        }),
    )
}
