use super::*;
use crate::config::Timeouts;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, token: Option<&str>) -> CmsClient {
    CmsClient::new(&CmsConfig {
        base_url: server.uri(),
        api_token: token.map(str::to_owned),
        timeouts: Timeouts { request_secs: 5, connect_secs: 2 },
    })
    .unwrap()
}

// =============================================================================
// pure helpers
// =============================================================================

#[test]
fn collection_url_trims_trailing_slash() {
    assert_eq!(collection_url("https://cms.test/", "banks"), "https://cms.test/api/banks");
}

#[test]
fn slug_filter_uses_eq_operator() {
    assert_eq!(slug_filter("avanse"), vec![("filters[slug][$eq]".to_owned(), "avanse".to_owned())]);
}

#[test]
fn parse_list_rejects_wrong_shape() {
    let err = parse_list::<Service>(r#"{"data": {"title": 1}}"#).unwrap_err();
    assert!(matches!(err, CmsError::Parse(_)));
}

#[test]
fn parsed_list_resolves_media_and_yields_first_entry() {
    let mut list = parse_list::<Gallery>(
        r#"{"data": [
            {"title": "Convocation", "images": [{"url": "/uploads/a.jpg"}]},
            {"title": "Visa day", "images": [{"url": "/uploads/b.jpg"}]}
        ]}"#,
    )
    .unwrap();
    list.resolve_media("https://cms.test");
    assert_eq!(list.data[1].images[0].url, "https://cms.test/uploads/b.jpg");
    let first = list.into_first().unwrap();
    assert_eq!(first.title, "Convocation");
    assert_eq!(first.images[0].url, "https://cms.test/uploads/a.jpg");
}

// =============================================================================
// HTTP
// =============================================================================

#[tokio::test]
async fn bank_layout_filters_by_slug_and_populates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/banks"))
        .and(query_param("filters[slug][$eq]", "avanse"))
        .and(query_param("populate[0]", "hero_image"))
        .and(query_param("populate[2]", "eligibility"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "name": "Avanse",
                "slug": "avanse",
                "hero_image": { "url": "/uploads/avanse-hero.jpg" },
                "eligibility": [{ "title": "Indian citizen" }]
            }],
            "meta": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let bank = client.bank_layout("avanse").await.unwrap();
    assert_eq!(bank.name, "Avanse");
    assert_eq!(bank.eligibility.len(), 1);
    assert_eq!(
        bank.hero_image.unwrap().url,
        format!("{}/uploads/avanse-hero.jpg", server.uri())
    );
}

#[tokio::test]
async fn bearer_token_is_sent_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/services"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "title": "Visa Assistance", "slug": "visa-assistance", "body": "## Steps" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("secret-token"));
    let service = client.service("visa-assistance").await.unwrap();
    assert_eq!(service.body, "## Steps");
}

#[tokio::test]
async fn empty_result_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/banks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let err = client_for(&server, None).bank_layout("ghost").await.unwrap_err();
    assert!(matches!(err, CmsError::NotFound { collection: "banks", ref slug } if slug == "ghost"));
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/galleries"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client_for(&server, None).galleries().await.unwrap_err();
    assert!(matches!(err, CmsError::Status { status: 503, ref body } if body == "maintenance"));
}

#[tokio::test]
async fn landing_page_requests_home_with_dynamic_zone() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/landing-pages"))
        .and(query_param("filters[slug][$eq]", HOME_SLUG))
        .and(query_param("populate[blocks][populate]", "*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "title": "Home",
                "blocks": [{ "__component": "blocks.faq", "items": [{ "question": "Q", "answer": "A" }] }]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server, None).landing_page().await.unwrap();
    assert_eq!(page.title, "Home");
    assert_eq!(page.known_blocks().count(), 1);
}

#[tokio::test]
async fn galleries_are_sorted_newest_first() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/galleries"))
        .and(query_param("sort", "createdAt:desc"))
        .and(query_param("populate[0]", "images"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "title": "Fall 2025 departures", "images": [{ "url": "/uploads/a.jpg", "caption": "Mumbai airport" }] },
                { "title": "Webinars" }
            ]
        })))
        .mount(&server)
        .await;

    let galleries = client_for(&server, None).galleries().await.unwrap();
    assert_eq!(galleries.len(), 2);
    assert_eq!(galleries[0].images[0].caption.as_deref(), Some("Mumbai airport"));
    assert!(galleries[1].images.is_empty());
}

#[tokio::test]
async fn unreachable_cms_is_request_error() {
    let client = CmsClient::new(&CmsConfig {
        base_url: "http://127.0.0.1:9".into(),
        api_token: None,
        timeouts: Timeouts { request_secs: 2, connect_secs: 1 },
    })
    .unwrap();
    let err = client.galleries().await.unwrap_err();
    assert!(matches!(err, CmsError::Request(_)));
}
