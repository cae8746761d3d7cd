#![allow(dead_code)]

use okta::{Client, Config};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use wiremock::{MockServer, ResponseTemplate};

pub const TOKEN: &str = "00test-token";

pub async fn setup() -> (MockServer, Client) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let server = MockServer::start().await;
    let config = Config::new(TOKEN, &format!("{}/api/v1/", server.uri())).unwrap();
    (server, Client::new(config))
}

/// A `200` page whose `Link` header points at `next_query` on `collection`.
pub fn page(
    server: &MockServer,
    collection: &str,
    items: Value,
    next_query: Option<&str>,
) -> ResponseTemplate {
    let base = format!("{}/api/v1/{}", server.uri(), collection);
    let mut link = format!("<{}?limit=100>; rel=\"self\"", base);
    if let Some(query) = next_query {
        link.push_str(&format!(", <{}?{}>; rel=\"next\"", base, query));
    }
    ResponseTemplate::new(200)
        .set_body_json(items)
        .insert_header("link", link.as_str())
}

pub fn group(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "created": "2015-02-06T10:11:28.000Z",
        "lastUpdated": "2015-10-05T19:16:43.000Z",
        "lastMembershipUpdated": "2015-11-28T19:15:32.000Z",
        "objectClass": ["okta:user_group"],
        "type": "OKTA_GROUP",
        "profile": { "name": name }
    })
}

pub fn user(id: &str, login: &str) -> Value {
    json!({
        "id": id,
        "status": "ACTIVE",
        "created": "2013-06-24T16:39:18.000Z",
        "profile": {
            "login": login,
            "email": login,
            "firstName": "Isaac",
            "lastName": "Brock"
        }
    })
}

pub fn not_found(resource: &str) -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({
        "errorCode": "E0000007",
        "errorSummary": format!("Not found: Resource not found: {}", resource),
        "errorLink": "E0000007",
        "errorId": "oaeIk5n3HF7TbWrv2x9H0bWyw",
        "errorCauses": []
    }))
}
