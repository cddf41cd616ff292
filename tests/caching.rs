//! Integration tests for the cache-first request path.

use desa_cms_client::{CmsClient, RequestOptions};
use mockito::Matcher;
use serde_json::json;
use std::time::Duration;

fn client_for(server: &mockito::ServerGuard) -> CmsClient {
    CmsClient::builder()
        .base_url(server.url())
        .build()
        .expect("failed to build client")
}

#[tokio::test]
async fn cache_hit_skips_the_network() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({"data": {"id": 1, "photos": []}});
    let mock = server
        .mock("GET", "/api/gallery")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(body.to_string())
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let params = json!({"populate": "photos"});

    let first = client
        .request_cached("/api/gallery", &params, None)
        .await
        .unwrap();
    let second = client
        .request_cached("/api/gallery", &params, None)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(first, second);
    assert_eq!(first, body);

    let stats = client.cache().stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.sets, 1);
}

#[tokio::test]
async fn expired_entry_is_refetched() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/infographic")
        .with_status(200)
        .with_body(json!({"data": {"totalPenduduk": 1280}}).to_string())
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    let params = json!({});
    let options = RequestOptions::new().revalidate(Duration::from_millis(30));

    client
        .request_cached("/api/infographic", &params, Some(&options))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(60)).await;
    client
        .request_cached("/api/infographic", &params, Some(&options))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn different_params_do_not_share_entries() {
    let mut server = mockito::Server::new_async().await;
    let page_one = server
        .mock("GET", "/api/beritas")
        .match_query(Matcher::UrlEncoded("pagination[page]".into(), "1".into()))
        .with_status(200)
        .with_body(json!({"data": [], "meta": {}}).to_string())
        .expect(1)
        .create_async()
        .await;
    let page_two = server
        .mock("GET", "/api/beritas")
        .match_query(Matcher::UrlEncoded("pagination[page]".into(), "2".into()))
        .with_status(200)
        .with_body(json!({"data": [], "meta": {}}).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .request_cached("/api/beritas", &json!({"pagination": {"page": 1}}), None)
        .await
        .unwrap();
    client
        .request_cached("/api/beritas", &json!({"pagination": {"page": 2}}), None)
        .await
        .unwrap();

    page_one.assert_async().await;
    page_two.assert_async().await;
}

#[tokio::test]
async fn failures_are_never_cached() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/gallery")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("boom")
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    let params = json!({});

    assert!(client
        .request_cached("/api/gallery", &params, None)
        .await
        .is_err());
    // the failure did not populate the cache; the next call goes out again
    assert!(client
        .request_cached("/api/gallery", &params, None)
        .await
        .is_err());

    mock.assert_async().await;
    assert_eq!(client.cache().stats().sets, 0);
}

#[tokio::test]
async fn clear_forces_a_refetch() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/profil-desa")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"data": {}}).to_string())
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    let params = json!({});

    client
        .request_cached("/api/profil-desa", &params, None)
        .await
        .unwrap();
    client.cache().clear().await.unwrap();
    client
        .request_cached("/api/profil-desa", &params, None)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn disabled_cache_always_fetches() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/gallery")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"data": {}}).to_string())
        .expect(2)
        .create_async()
        .await;

    let client = CmsClient::builder()
        .base_url(server.url())
        .cache_disabled()
        .build()
        .unwrap();
    let params = json!({});

    client
        .request_cached("/api/gallery", &params, None)
        .await
        .unwrap();
    client
        .request_cached("/api/gallery", &params, None)
        .await
        .unwrap();

    mock.assert_async().await;
}
