mod common;

use common::mock_api::{MockDogApi, MockResponse};
use dog_gallery::api::{ApiError, DogApi, DogApiClient, Identifier};
use dog_gallery::config::ApiConfig;

fn client_for(base_url: String, api_key: Option<&str>) -> DogApiClient {
    DogApiClient::new(&ApiConfig {
        base_url,
        page_size: 10,
        api_key: api_key.map(str::to_string),
    })
    .expect("client should build")
}

#[tokio::test]
async fn list_breeds_hits_breeds_endpoint() {
    let server = MockDogApi::start().await;
    server
        .enqueue(MockResponse::json(
            r#"[{"id":1,"name":"Pug","temperament":"Playful"}]"#,
        ))
        .await;

    let client = client_for(server.base_url(), None);
    let breeds = client.list_breeds().await.expect("breeds should decode");

    assert_eq!(breeds.len(), 1);
    assert_eq!(breeds[0].id, Identifier::Number(1));
    assert_eq!(breeds[0].name, "Pug");
    assert_eq!(breeds[0].detail("temperament"), Some("Playful"));

    let requests = server.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/v1/breeds");
    assert_eq!(requests[0].query, None);
    assert!(requests[0].header("x-api-key").is_none());
}

#[tokio::test]
async fn search_by_breed_sends_limit_and_breed_ids() {
    let server = MockDogApi::start().await;
    server
        .enqueue(MockResponse::json(
            r#"[{"id":"abc","url":"https://cdn2.thedogapi.com/images/abc.jpg","width":640,"height":480}]"#,
        ))
        .await;

    let client = client_for(server.base_url(), Some("secret"));
    let images = client
        .search_images_by_breed(&Identifier::Number(1))
        .await
        .expect("images should decode");

    assert_eq!(images.len(), 1);
    assert_eq!(images[0].id, Identifier::Text("abc".into()));
    assert_eq!(images[0].dimensions(), Some((640, 480)));

    let requests = server.captured_requests().await;
    assert_eq!(requests[0].path, "/v1/images/search");
    assert_eq!(requests[0].query.as_deref(), Some("limit=10&breed_ids=1"));
    assert_eq!(requests[0].header("x-api-key"), Some("secret"));
}

#[tokio::test]
async fn random_search_sends_only_limit() {
    let server = MockDogApi::start().await;
    let client = client_for(server.base_url(), None);

    let images = client.search_random_images().await.expect("empty list decodes");
    assert!(images.is_empty());

    let requests = server.captured_requests().await;
    assert_eq!(requests[0].path, "/v1/images/search");
    assert_eq!(requests[0].query.as_deref(), Some("limit=10"));
}

#[tokio::test]
async fn non_json_body_is_parse_error_with_status() {
    let server = MockDogApi::start().await;
    server
        .enqueue(MockResponse::html(502, "<html>bad gateway</html>"))
        .await;

    let client = client_for(server.base_url(), None);
    let err = client.list_breeds().await.unwrap_err();

    match &err {
        ApiError::Parse {
            endpoint, status, ..
        } => {
            assert_eq!(endpoint, "/breeds");
            assert_eq!(*status, 502);
        }
        other => panic!("expected parse error, got {:?}", other),
    }
    assert_eq!(err.kind(), "parse");
}

#[tokio::test]
async fn missing_url_field_is_parse_error() {
    let server = MockDogApi::start().await;
    server.enqueue(MockResponse::json(r#"[{"id":"abc"}]"#)).await;

    let client = client_for(server.base_url(), None);
    let err = client.search_random_images().await.unwrap_err();
    assert_eq!(err.kind(), "parse");
}

#[tokio::test]
async fn closed_port_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(format!("http://{}/v1", addr), None);
    let err = client.list_breeds().await.unwrap_err();

    assert_eq!(err.kind(), "network");
    assert_eq!(err.endpoint(), "/breeds");
}
