use crate::contacts::models::Contact;
use crate::contacts::requests::SaveContactRequest;
use crate::contacts::responses::{
    ContactListResponse, ContactResponse, ContactResponseError, DeleteContactResponse,
};
use crate::http::tests::test_server;
use http::StatusCode;

fn alice() -> SaveContactRequest {
    SaveContactRequest {
        first_name: String::from("Alice"),
        last_name: String::from("Johnson"),
        email: String::from("alice.johnson@example.com"),
        phone: String::from("+1-202-555-0117"),
    }
}

fn bob() -> SaveContactRequest {
    SaveContactRequest {
        first_name: String::from("Bob"),
        last_name: String::from("Miller"),
        email: String::from("bob.miller@example.com"),
        phone: String::from("+1-202-555-0143"),
    }
}

#[tokio::test]
async fn test_list_is_empty_at_startup() {
    let server = test_server();

    let response = server.get("/contacts").await;

    response.assert_status_ok();
    response.assert_json(&ContactListResponse {
        error: false,
        contacts: vec![],
    });
}

#[tokio::test]
async fn test_create_then_show_contact() {
    let server = test_server();

    let response = server.post("/contacts").json(&alice()).await;

    response.assert_status(StatusCode::CREATED);
    let expected = Contact {
        id: 1,
        first_name: String::from("Alice"),
        last_name: String::from("Johnson"),
        email: String::from("alice.johnson@example.com"),
        phone: String::from("+1-202-555-0117"),
    };
    response.assert_json(&ContactResponse {
        error: false,
        error_code: None,
        contact: Some(expected.clone()),
    });

    let response = server.get("/contacts/1").await;

    response.assert_status_ok();
    response.assert_json(&ContactResponse {
        error: false,
        error_code: None,
        contact: Some(expected),
    });
}

#[tokio::test]
async fn test_list_returns_contacts_in_creation_order() {
    let server = test_server();
    server.post("/contacts").json(&alice()).await;
    server.post("/contacts").json(&bob()).await;

    let response = server.get("/contacts").await;

    response.assert_status_ok();
    let listing: ContactListResponse = response.json();
    assert!(!listing.error);
    let ids: Vec<u64> = listing.contacts.iter().map(|contact| contact.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(listing.contacts[0].first_name, "Alice");
    assert_eq!(listing.contacts[1].first_name, "Bob");
}

#[tokio::test]
async fn test_show_unknown_contact() {
    let server = test_server();

    let response = server.get("/contacts/42").await;

    response.assert_status_not_found();
    response.assert_json(&ContactResponse {
        error: true,
        error_code: Some(ContactResponseError::ContactNotFound),
        contact: None,
    });
}

#[tokio::test]
async fn test_show_non_numeric_contact_id() {
    let server = test_server();

    let response = server.get("/contacts/not-an-id").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_update_contact() {
    let server = test_server();
    server.post("/contacts").json(&alice()).await;

    let response = server
        .put("/contacts/1")
        .json(&serde_json::json!({
            "firstName": "Alice",
            "lastName": "Smith",
            "email": "alice.johnson@example.com",
            "phone": "+1-202-555-0117",
        }))
        .await;

    response.assert_status_ok();
    let updated: ContactResponse = response.json();
    let contact = updated.contact.expect("Expected the updated contact in the response.");
    assert_eq!(contact.id, 1);
    assert_eq!(contact.last_name, "Smith");

    let response = server.get("/contacts/1").await;
    let fetched: ContactResponse = response.json();
    let contact = fetched.contact.expect("Expected the stored contact in the response.");
    assert_eq!(contact.last_name, "Smith");
}

#[tokio::test]
async fn test_update_unknown_contact() {
    let server = test_server();

    let response = server.put("/contacts/42").json(&alice()).await;

    response.assert_status_not_found();
    response.assert_json(&ContactResponse {
        error: true,
        error_code: Some(ContactResponseError::ContactNotFound),
        contact: None,
    });
}

#[tokio::test]
async fn test_delete_contact() {
    let server = test_server();
    server.post("/contacts").json(&alice()).await;

    let response = server.delete("/contacts/1").await;

    response.assert_status_ok();
    response.assert_json(&DeleteContactResponse {
        error: false,
        error_code: None,
    });

    let response = server.get("/contacts/1").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_unknown_contact() {
    let server = test_server();

    let response = server.delete("/contacts/42").await;

    response.assert_status_not_found();
    response.assert_json(&DeleteContactResponse {
        error: true,
        error_code: Some(ContactResponseError::ContactNotFound),
    });
}

#[tokio::test]
async fn test_deleted_id_is_not_reused() {
    let server = test_server();
    server.post("/contacts").json(&alice()).await;
    server.delete("/contacts/1").await;

    let response = server.post("/contacts").json(&bob()).await;

    let created: ContactResponse = response.json();
    let contact = created.contact.expect("Expected the created contact in the response.");
    assert_eq!(contact.id, 2);
}
