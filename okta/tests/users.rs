mod common;

use common::{not_found, page, setup, user};
use okta::{models::id::UserId, Error, RateLimitCategory};
use serde_json::{json, value::RawValue};
use wiremock::{
    matchers::{method, path, query_param, query_param_is_missing},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn test_get_by_id() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/00u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user("00u1", "isaac@example.com")))
        .expect(1)
        .mount(&server)
        .await;

    let (user, response) = client.users().get_by_id(&UserId::from("00u1")).await.unwrap();

    assert_eq!(user.id.as_str(), "00u1");
    assert_eq!(user.status.as_deref(), Some("ACTIVE"));
    assert_eq!(user.profile.email.as_deref(), Some("isaac@example.com"));
    assert_eq!(response.category, RateLimitCategory::UsersGetById);
}

#[tokio::test]
async fn test_get_by_id_surfaces_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/nobody"))
        .respond_with(not_found("nobody (User)"))
        .mount(&server)
        .await;

    let err = client
        .users()
        .get_by_id(&UserId::from("nobody"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::APIError(ref response, _) if response.status.as_u16() == 404));
}

#[tokio::test]
async fn test_update_profile_delta_forwards_fragment_verbatim() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/users/00u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user("00u1", "isaac@example.com")))
        .expect(1)
        .mount(&server)
        .await;

    let fragment = r#"{"nickName": "Izzy",  "costCenter":"12"}"#;
    let raw = RawValue::from_string(fragment.to_string()).unwrap();
    let (_, response) = client
        .users()
        .update_profile_delta(&UserId::from("00u1"), &raw)
        .await
        .unwrap();

    assert_eq!(response.category, RateLimitCategory::UsersCreateUpdateDeleteById);
    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        String::from_utf8(requests[0].body.clone()).unwrap(),
        format!("{{\"profile\":{}}}", fragment)
    );
}

#[tokio::test]
async fn test_list_paginates() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .and(query_param("limit", "200"))
        .and(query_param_is_missing("after"))
        .respond_with(page(
            &server,
            "users",
            json!([user("u1", "a@example.com")]),
            Some("after=u1&limit=200"),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .and(query_param("after", "u1"))
        .respond_with(page(&server, "users", json!([user("u2", "b@example.com")]), None))
        .expect(1)
        .mount(&server)
        .await;

    let (users, response) = client.users().list().await.unwrap();

    let ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["u1", "u2"]);
    assert_eq!(response.category, RateLimitCategory::Core);
}

#[tokio::test]
async fn test_list_filter_escapes_expression() {
    let (server, client) = setup().await;

    let filter = r#"status eq "ACTIVE""#;
    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .and(query_param("limit", "100"))
        .and(query_param("filter", filter))
        .respond_with(page(&server, "users", json!([user("u1", "a@example.com")]), None))
        .expect(1)
        .mount(&server)
        .await;

    let (users, response) = client.users().list_filter(filter).await.unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(response.category, RateLimitCategory::GroupsCreateList);
    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("limit=100&filter=status%20eq%20%22ACTIVE%22")
    );
}
