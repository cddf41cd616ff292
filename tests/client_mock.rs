//! Integration tests for CmsClient against a mock backend.
//!
//! Covers the wire contract: query normalization as received by the server,
//! header defaults and merging, the error taxonomy, and envelope
//! passthrough.

use desa_cms_client::{CmsClient, Error, RequestOptions};
use mockito::Matcher;
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("desa_cms_client=debug")
        .try_init();
}

fn client_for(server: &mockito::ServerGuard) -> CmsClient {
    CmsClient::builder()
        .base_url(server.url())
        .build()
        .expect("failed to build client")
}

#[tokio::test]
async fn articles_page_two_end_to_end() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;

    let items: Vec<_> = (1..=6)
        .map(|i| {
            json!({
                "id": i,
                "title": format!("Berita {}", i),
                "slug": format!("berita-{}", i),
                "datePublished": "2025-11-02"
            })
        })
        .collect();
    let body = json!({
        "data": items,
        "meta": {"pagination": {"page": 2, "pageSize": 6, "pageCount": 3, "total": 18}}
    });

    let mock = server
        .mock("GET", "/api/beritas")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("pagination[page]".into(), "2".into()),
            Matcher::UrlEncoded("pagination[pageSize]".into(), "6".into()),
            Matcher::UrlEncoded("sort[datePublished]".into(), "desc".into()),
            Matcher::UrlEncoded("populate".into(), "*".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let page = client.articles(2).await.expect("articles page 2");

    mock.assert_async().await;
    assert_eq!(page.data.len(), 6);
    assert_eq!(page.data[0].title, "Berita 1");
    let pagination = page.meta.pagination.expect("pagination meta");
    assert_eq!(pagination.page, 2);
    assert_eq!(pagination.page_count, 3);
    assert_eq!(pagination.total, 18);
    assert_eq!(pagination.expected_page_count(), pagination.page_count);
}

#[tokio::test]
async fn raw_request_returns_payload_unchanged() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({"data": {"id": 1, "nested": {"deep": [1, 2, 3]}}, "meta": {}});

    server
        .mock("GET", "/api/profil-desa")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let payload = client.request("/api/profil-desa", &json!({})).await.unwrap();
    assert_eq!(payload, body);
}

#[tokio::test]
async fn slug_filter_reaches_the_server_bracketed() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/beritas")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("filters[slug][$eq]".into(), "kerja-bakti".into()),
            Matcher::UrlEncoded("populate".into(), "*".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({"data": [{"id": 4, "title": "Kerja Bakti", "slug": "kerja-bakti"}]})
                .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let article = client.article_by_slug("kerja-bakti").await.unwrap();

    mock.assert_async().await;
    assert_eq!(article.unwrap().id, 4);
}

#[tokio::test]
async fn missing_slug_yields_none() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/beritas")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"data": []}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let article = client.article_by_slug("tidak-ada").await.unwrap();
    assert!(article.is_none());
}

#[tokio::test]
async fn not_found_carries_status_and_body() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/beritas")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body("Not Found")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .request("/api/beritas", &json!({}))
        .await
        .expect_err("expected an HTTP error");

    assert!(matches!(err, Error::Http { status: 404, .. }));
    assert!(err.is_not_found());
    let message = err.to_string();
    assert!(message.contains("404"), "message: {message}");
    assert!(message.contains("Not Found"), "message: {message}");
}

#[tokio::test]
async fn server_error_body_is_preserved() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/gallery")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body(r#"{"error": "maintenance"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.gallery().await.expect_err("expected an HTTP error");
    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().contains("maintenance"));
}

#[tokio::test]
async fn bearer_token_is_attached_when_configured() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/gallery")
        .match_query(Matcher::Any)
        .match_header("authorization", "Bearer rahasia-desa")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body(json!({"data": {"id": 1, "photos": []}}).to_string())
        .create_async()
        .await;

    let client = CmsClient::builder()
        .base_url(server.url())
        .api_token("rahasia-desa")
        .build()
        .unwrap();
    client.gallery().await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn caller_headers_override_defaults() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/profil-desa")
        .match_header("x-preview", "1")
        .match_header("content-type", "text/plain")
        .with_status(200)
        .with_body(json!({"data": {}}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let options = RequestOptions::new()
        .header("x-preview", "1")
        .header("content-type", "text/plain");
    client
        .request_with("/api/profil-desa", &json!({}), &options)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn gallery_parses_document_envelope() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/gallery")
        .match_query(Matcher::UrlEncoded("populate".into(), "photos".into()))
        .with_status(200)
        .with_body(
            json!({
                "data": {
                    "id": 1,
                    "photos": [
                        {"id": 7, "url": "/uploads/pantai.jpg", "alternativeText": "Pantai"},
                        {"id": 8, "url": "https://cdn.example.com/sawah.jpg"}
                    ]
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let gallery = client.gallery().await.unwrap();

    assert_eq!(gallery.photos.len(), 2);
    assert_eq!(
        gallery.photos[0].resolved_url(client.base_url()),
        format!("{}/uploads/pantai.jpg", client.base_url())
    );
    // absolute media URLs pass through untouched
    assert_eq!(
        gallery.photos[1].resolved_url(client.base_url()),
        "https://cdn.example.com/sawah.jpg"
    );
}

#[tokio::test]
async fn home_fetches_profile_and_gallery() {
    let mut server = mockito::Server::new_async().await;
    let profile_mock = server
        .mock("GET", "/api/profil-desa")
        .match_query(Matcher::UrlEncoded("populate".into(), "heroImage".into()))
        .with_status(200)
        .with_body(json!({"data": {"namaDesa": "Gaya Baru"}}).to_string())
        .create_async()
        .await;
    let gallery_mock = server
        .mock("GET", "/api/gallery")
        .match_query(Matcher::UrlEncoded("populate".into(), "*".into()))
        .with_status(200)
        .with_body(json!({"data": {"id": 1, "photos": []}}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let home = client.home().await.unwrap();

    profile_mock.assert_async().await;
    gallery_mock.assert_async().await;
    assert_eq!(home.profile["namaDesa"], "Gaya Baru");
    assert!(home.gallery.photos.is_empty());
}

#[tokio::test]
async fn infographics_fetches_both_documents() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/infographic")
        .with_status(200)
        .with_body(json!({"data": {"totalPenduduk": 1280}}).to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/api/infographic2")
        .with_status(200)
        .with_body(json!({"data": {"SD": 200, "SMP": 150}}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let infographics = client.infographics().await.unwrap();
    assert_eq!(infographics.population["totalPenduduk"], 1280);
    assert_eq!(infographics.education["SMP"], 150);
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    // nothing listens on this port
    let client = CmsClient::builder()
        .base_url("http://127.0.0.1:9")
        .build()
        .unwrap();
    let err = client
        .request("/api/beritas", &json!({}))
        .await
        .expect_err("expected a transport error");
    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.status(), None);
}
