//
//  bitbucket-repos
//  tests/http_transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Integration tests for the default reqwest-backed transport, driven through
//! the public binding against a mockito server.

use bitbucket_repos::{
    Credentials, Error, HttpTransport, Repositories, RepositoryDescriptor, StateFilter, Transport,
};
use mockito::Matcher;
use serde_json::json;

fn transport_for(server: &mockito::Server) -> HttpTransport {
    HttpTransport::new(&server.url()).expect("mock server URL parses")
}

#[tokio::test]
async fn pull_request_states_are_serialized_in_order() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/repositories/acme/widget/pullrequests")
        .match_query(Matcher::Regex("state=OPEN&state=MERGED".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"values": [{"id": 1}]}"#)
        .create_async()
        .await;

    let repos = Repositories::new(transport_for(&server));
    let filter = StateFilter::from(vec!["OPEN", "MERGED"]);
    let body = repos
        .pull_requests("acme", "widget", Some(filter))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(body["values"][0]["id"], 1);
}

#[tokio::test]
async fn create_posts_the_json_body_to_the_slug_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/repositories/acme/backend-service")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "name": "Backend Service",
            "is_private": true,
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"slug": "backend-service"}"#)
        .create_async()
        .await;

    let repos = Repositories::new(transport_for(&server));
    let created = repos
        .create(&RepositoryDescriptor::new("acme", "Backend Service", true))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(created["slug"], "backend-service");
}

#[tokio::test]
async fn error_bodies_surface_as_api_errors_with_the_cloud_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/repositories/acme/missing")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"type": "error", "error": {"message": "Repository missing not found"}}"#)
        .create_async()
        .await;

    let repos = Repositories::new(transport_for(&server));
    let err = repos.get("acme", "missing").await.unwrap_err();

    match err {
        Error::Api { status, message } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(message, "Repository missing not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn prebuilt_urls_are_dereferenced_verbatim() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/elsewhere/forks")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"values": []}"#)
        .create_async()
        .await;

    // The link points wherever the response said, not relative to the base.
    let repos = Repositories::new(transport_for(&server));
    let repo_body = json!({
        "links": {"forks": {"href": format!("{}/elsewhere/forks", server.url())}}
    });
    let forks = repos.forks(&repo_body).await.unwrap();

    mock.assert_async().await;
    assert!(forks["values"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn a_garbage_prebuilt_url_fails_before_dispatch() {
    let server = mockito::Server::new_async().await;
    let transport = transport_for(&server);

    let err = transport.send_prebuilt("not a url at all").await.unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[tokio::test]
async fn bearer_credentials_become_an_authorization_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/repositories/acme")
        .match_header("authorization", "Bearer sekrit")
        .match_header("user-agent", Matcher::Regex("^bitbucket-repos/".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let transport = transport_for(&server).with_credentials(Credentials::bearer("sekrit"));
    Repositories::new(transport).list("acme").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn basic_credentials_become_an_authorization_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/repositories/acme")
        // base64("user:pass")
        .match_header("authorization", "Basic dXNlcjpwYXNz")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let transport = transport_for(&server).with_credentials(Credentials::basic("user", "pass"));
    Repositories::new(transport).list("acme").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn non_json_success_bodies_surface_as_network_errors() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/repositories/acme")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let repos = Repositories::new(transport_for(&server));
    let err = repos.list("acme").await.unwrap_err();

    assert!(matches!(err, Error::Network(_)));
}
