//! End-to-end conformance tests for the contactbook HTTP API.
//!
//! Each test spawns an ephemeral in-process server (real TCP, real HTTP) via
//! [`contactbook_conformance::spawn_server`] and exercises the API with a
//! `reqwest` client.
//!
//! # Coverage
//!
//! | Test | Behaviour |
//! |------|-----------|
//! | `create_then_get_roundtrip` | create response equals later GET |
//! | `ids_unique_and_never_reused` | id assignment across deletes |
//! | `update_without_email_keeps_email` | omitted `email` is left alone |
//! | `update_with_email_overwrites_it` | present `email` replaces |
//! | `update_with_null_email_clears_it` | explicit `null` clears |
//! | `bad_country_rejected_on_create` | 400 + nothing stored |
//! | `bad_country_rejected_on_update` | 400 + nothing changed |
//! | `missing_required_fields_rejected` | 400 message lists options |
//! | `unknown_field_rejected` | 400 on undefined option |
//! | `invalid_email_rejected` | 400 on email format |
//! | `unknown_id_is_404_for_every_method` | 404 precedes validation |
//! | `delete_then_get_is_404` | delete lifecycle |
//! | `non_numeric_id_is_404` | `{id}` must be digits |
//! | `swagger_document_served` | `/api/doc.json` |

use contactbook::Contact;
use contactbook_api::ErrorResponse;
use contactbook_conformance::spawn_server;
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .unwrap()
}

async fn create(client: &reqwest::Client, base: &str, body: Value) -> Contact {
    let resp = client
        .post(format!("{base}/api/contacts"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200, "create should return 200");
    resp.json().await.unwrap()
}

async fn fetch(client: &reqwest::Client, base: &str, id: i64) -> reqwest::Response {
    client
        .get(format!("{base}/api/contacts/{id}"))
        .send()
        .await
        .unwrap()
}

async fn put(client: &reqwest::Client, base: &str, id: i64, body: Value) -> reqwest::Response {
    client
        .put(format!("{base}/api/contacts/{id}"))
        .json(&body)
        .send()
        .await
        .unwrap()
}

async fn expect_validation_error(resp: reqwest::Response) -> ErrorResponse {
    assert_eq!(resp.status(), 400);
    let err: ErrorResponse = resp.json().await.unwrap();
    assert_eq!(err.status, 400);
    assert!(!err.message.is_empty());
    err
}

// ---------------------------------------------------------------------------
// Create / get
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_then_get_roundtrip() {
    let (base, _storage) = spawn_server().await;
    let client = make_client();

    let resp = client
        .post(format!("{base}/api/contacts"))
        .json(&json!({ "name": "Mia Muster", "country": "AT" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let created: Value = resp.json().await.unwrap();

    assert!(created["id"].is_i64(), "id must be an integer");
    assert_eq!(created["name"], "Mia Muster");
    assert_eq!(created["country"], "AT");
    assert!(created.get("email").map_or(true, Value::is_null));

    let id = created["id"].as_i64().unwrap();
    let resp = fetch(&client, &base, id).await;
    assert_eq!(resp.status(), 200);
    let fetched: Value = resp.json().await.unwrap();
    assert_eq!(fetched, created, "GET must return the identical object");
}

#[tokio::test]
async fn ids_unique_and_never_reused() {
    let (base, _storage) = spawn_server().await;
    let client = make_client();

    let mut ids = Vec::new();
    for name in ["Ada", "Bob", "Cy"] {
        ids.push(create(&client, &base, json!({ "name": name, "country": "AT" })).await.id);
    }

    let resp = client
        .delete(format!("{base}/api/contacts/{}", ids[2]))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);

    let next = create(&client, &base, json!({ "name": "Dee", "country": "AT" })).await;
    assert!(!ids.contains(&next.id), "id {} was reused", next.id);

    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3, "ids must be unique");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_without_email_keeps_email() {
    let (base, _storage) = spawn_server().await;
    let client = make_client();

    let c = create(
        &client,
        &base,
        json!({ "name": "Mia", "email": "mia@x.com", "country": "AT" }),
    )
    .await;

    let resp = put(&client, &base, c.id, json!({ "name": "Mia2", "country": "DE" })).await;
    assert_eq!(resp.status(), 200);

    let got: Contact = fetch(&client, &base, c.id).await.json().await.unwrap();
    assert_eq!(got.email.as_deref(), Some("mia@x.com"));
    assert_eq!(got.name, "Mia2");
    assert_eq!(got.country, "DE");
}

#[tokio::test]
async fn update_with_email_overwrites_it() {
    let (base, _storage) = spawn_server().await;
    let client = make_client();

    let c = create(
        &client,
        &base,
        json!({ "name": "Mia", "email": "mia@x.com", "country": "AT" }),
    )
    .await;

    let resp = put(
        &client,
        &base,
        c.id,
        json!({ "name": "Mia", "email": "mia@y.org", "country": "AT" }),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let updated: Contact = resp.json().await.unwrap();
    assert_eq!(updated.email.as_deref(), Some("mia@y.org"));
}

#[tokio::test]
async fn update_with_null_email_clears_it() {
    let (base, _storage) = spawn_server().await;
    let client = make_client();

    let c = create(
        &client,
        &base,
        json!({ "name": "Mia", "email": "mia@x.com", "country": "AT" }),
    )
    .await;

    let resp = put(
        &client,
        &base,
        c.id,
        json!({ "name": "Mia", "email": null, "country": "AT" }),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let got: Contact = fetch(&client, &base, c.id).await.json().await.unwrap();
    assert_eq!(got.email, None);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_country_rejected_on_create() {
    let (base, storage) = spawn_server().await;
    let client = make_client();

    for country in ["us", "USA", "1A"] {
        let resp = client
            .post(format!("{base}/api/contacts"))
            .json(&json!({ "name": "Mia", "country": country }))
            .send()
            .await
            .unwrap();
        let err = expect_validation_error(resp).await;
        assert!(err.message.contains("country"), "message: {}", err.message);
    }

    assert!(storage.is_empty(), "rejected creates must not store anything");
}

#[tokio::test]
async fn bad_country_rejected_on_update() {
    let (base, _storage) = spawn_server().await;
    let client = make_client();

    let c = create(&client, &base, json!({ "name": "Mia", "country": "AT" })).await;

    for country in ["us", "USA", "1A"] {
        let resp = put(&client, &base, c.id, json!({ "name": "Changed", "country": country })).await;
        expect_validation_error(resp).await;
    }

    let got: Contact = fetch(&client, &base, c.id).await.json().await.unwrap();
    assert_eq!(got, c, "rejected updates must not change the contact");
}

#[tokio::test]
async fn missing_required_fields_rejected() {
    let (base, _storage) = spawn_server().await;
    let client = make_client();

    let resp = client
        .post(format!("{base}/api/contacts"))
        .json(&json!({ "email": "mia@x.com" }))
        .send()
        .await
        .unwrap();
    let err = expect_validation_error(resp).await;
    assert_eq!(
        err.message,
        "The required options \"country\", \"name\" are missing."
    );
}

#[tokio::test]
async fn unknown_field_rejected() {
    let (base, _storage) = spawn_server().await;
    let client = make_client();

    let resp = client
        .post(format!("{base}/api/contacts"))
        .json(&json!({ "name": "Mia", "country": "AT", "phone": "123" }))
        .send()
        .await
        .unwrap();
    let err = expect_validation_error(resp).await;
    assert!(err.message.contains("\"phone\" does not exist"));
}

#[tokio::test]
async fn invalid_email_rejected() {
    let (base, _storage) = spawn_server().await;
    let client = make_client();

    let resp = client
        .post(format!("{base}/api/contacts"))
        .json(&json!({ "name": "Mia", "country": "AT", "email": "not-an-email" }))
        .send()
        .await
        .unwrap();
    let err = expect_validation_error(resp).await;
    assert!(err.message.contains("not a valid email address"));
}

// ---------------------------------------------------------------------------
// Not found / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_id_is_404_for_every_method() {
    let (base, _storage) = spawn_server().await;
    let client = make_client();
    let url = format!("{base}/api/contacts/4242");

    assert_eq!(client.get(&url).send().await.unwrap().status(), 404);
    assert_eq!(client.delete(&url).send().await.unwrap().status(), 404);

    // Not-found wins over an invalid body.
    let resp = client
        .put(&url)
        .json(&json!({ "country": "usa" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    assert!(resp.bytes().await.unwrap().is_empty(), "404 has an empty body");
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let (base, _storage) = spawn_server().await;
    let client = make_client();

    let c = create(&client, &base, json!({ "name": "Mia", "country": "AT" })).await;

    let resp = client
        .delete(format!("{base}/api/contacts/{}", c.id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);
    assert!(resp.bytes().await.unwrap().is_empty());

    assert_eq!(fetch(&client, &base, c.id).await.status(), 404);
}

#[tokio::test]
async fn non_numeric_id_is_404() {
    let (base, _storage) = spawn_server().await;
    let client = make_client();

    for id in ["abc", "-1", "1.5"] {
        let resp = client
            .get(format!("{base}/api/contacts/{id}"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404, "id {id:?}");
    }
}

// ---------------------------------------------------------------------------
// Documentation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn swagger_document_served() {
    let (base, _storage) = spawn_server().await;
    let client = make_client();

    let resp = client
        .get(format!("{base}/api/doc.json"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let doc: Value = resp.json().await.unwrap();
    assert_eq!(doc["swagger"], "2.0");
    assert!(doc["paths"]["/api/contacts/{id}"]["put"].is_object());
}
