//! Request-shape and error-path tests against a mock server.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use s2_recommendations::{
    Error, ForPaperParam, PapersParam, RecommendationClient, RecommendationPool,
};

fn sample_recs() -> serde_json::Value {
    json!({
        "recommendedPapers": [
            {
                "paperId": "649def34f8be52c8b66281af98ae884c09aef38b",
                "title": "Construction of the Literature Graph in Semantic Scholar",
                "url": "https://www.semanticscholar.org/paper/649def34f8be52c8b66281af98ae884c09aef38b"
            }
        ]
    })
}

async fn mock_client() -> (MockServer, RecommendationClient) {
    let server = MockServer::start().await;
    let client = RecommendationClient::new().with_base_url(&server.uri());
    (server, client)
}

#[tokio::test]
async fn single_seed_defaults_hit_the_expected_url() {
    let (server, client) = mock_client().await;

    Mock::given(method("GET"))
        .and(path("/papers/forpaper/ABC123"))
        .and(query_param("from", "all-cs"))
        .and(query_param("limit", "5"))
        .and(query_param("fields", "title,url"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_recs()))
        .expect(1)
        .mount(&server)
        .await;

    let recs = client.recommendations_for_paper("ABC123").await.unwrap();
    assert_eq!(recs, sample_recs());
}

#[tokio::test]
async fn single_seed_forwards_overridden_parameters() {
    let (server, client) = mock_client().await;

    Mock::given(method("GET"))
        .and(path("/papers/forpaper/DOI:10.18653/v1/N18-3011"))
        .and(query_param("from", "recent"))
        .and(query_param("limit", "20"))
        .and(query_param("fields", "title,abstract,year"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_recs()))
        .expect(1)
        .mount(&server)
        .await;

    let mut param = ForPaperParam::new("DOI:10.18653/v1/N18-3011");
    param
        .pool(RecommendationPool::Recent)
        .limit(20)
        .fields("title,abstract,year");
    client.query(&param).await.unwrap();
}

#[tokio::test]
async fn single_seed_404_yields_http_status_error() {
    let (server, client) = mock_client().await;

    Mock::given(method("GET"))
        .and(path("/papers/forpaper/UNKNOWN"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Paper not found"))
        .mount(&server)
        .await;

    let err = client.recommendations_for_paper("UNKNOWN").await.unwrap_err();
    assert_eq!(
        err,
        Error::HttpStatus {
            status: 404,
            text: "Paper not found".to_owned()
        }
    );
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn single_seed_malformed_body_yields_deserialization_error() {
    let (server, client) = mock_client().await;

    Mock::given(method("GET"))
        .and(path("/papers/forpaper/ABC123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("not json at all", "application/json"),
        )
        .mount(&server)
        .await;

    let err = client.recommendations_for_paper("ABC123").await.unwrap_err();
    assert!(matches!(err, Error::Deserialization(_)));
}

#[tokio::test]
async fn unreachable_host_yields_network_error() {
    // Nothing listens on port 1.
    let client = RecommendationClient::new().with_base_url("http://127.0.0.1:1");
    let err = client.recommendations_for_paper("ABC123").await.unwrap_err();
    assert!(matches!(err, Error::Network(_)));
}

#[tokio::test]
async fn multi_seed_posts_ids_in_caller_order() {
    let (server, client) = mock_client().await;

    Mock::given(method("POST"))
        .and(path("/papers"))
        .and(query_param("limit", "5"))
        .and(query_param("fields", "title,url"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "positivePaperIds": ["X"],
            "negativePaperIds": ["Y"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_recs()))
        .expect(1)
        .mount(&server)
        .await;

    let recs = client
        .recommendations_for_seeds(["X"], ["Y"])
        .await
        .unwrap();
    assert_eq!(recs, sample_recs());
}

#[tokio::test]
async fn multi_seed_with_no_negatives_sends_empty_array() {
    let (server, client) = mock_client().await;

    Mock::given(method("POST"))
        .and(path("/papers"))
        .and(body_json(json!({
            "positivePaperIds": ["X"],
            "negativePaperIds": []
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_recs()))
        .expect(1)
        .mount(&server)
        .await;

    client.query(&PapersParam::new(["X"])).await.unwrap();
}

#[tokio::test]
async fn multi_seed_error_body_is_carried_in_the_error() {
    let (server, client) = mock_client().await;

    Mock::given(method("POST"))
        .and(path("/papers"))
        .respond_with(ResponseTemplate::new(400).set_body_string("at least one positive id"))
        .mount(&server)
        .await;

    let err = client
        .query(&PapersParam::new(Vec::<String>::new()))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        Error::HttpStatus {
            status: 400,
            text: "at least one positive id".to_owned()
        }
    );
}

#[tokio::test]
async fn api_key_is_sent_when_configured() {
    let server = MockServer::start().await;
    let client = RecommendationClient::with_api_key("TEST_TOKEN").with_base_url(&server.uri());

    Mock::given(method("GET"))
        .and(path("/papers/forpaper/ABC123"))
        .and(header("x-api-key", "TEST_TOKEN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_recs()))
        .expect(1)
        .mount(&server)
        .await;

    client.recommendations_for_paper("ABC123").await.unwrap();
}
