//! End-to-end tests for [`HttpUpstreamSource`] against stub HTTP services.

use std::time::Duration;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use forkcast_core::{Coordinate, Menu, MenuItem, Restaurant};
use forkcast_data::{HttpUpstreamConfig, HttpUpstreamSource, UpstreamError, UpstreamSource};
use rstest::rstest;
use serde_json::{Value, json};
use tokio::net::TcpListener;

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });
    format!("http://{addr}")
}

async fn profile(Path(user_id): Path<String>) -> impl IntoResponse {
    match user_id.as_str() {
        "42" => (
            StatusCode::OK,
            Json(json!([{
                "geoLocation": "21.0285,105.8542",
                "defaultCuisine": "Pho, Bun Cha",
                "addressLine": "Hoan Kiem"
            }])),
        ),
        "a/b" => (
            StatusCode::OK,
            Json(json!([{"geoLocation": "1.0,2.0", "defaultCuisine": "Sushi"}])),
        ),
        "ghost" => (StatusCode::OK, Json(json!([]))),
        "lost" => (
            StatusCode::OK,
            Json(json!([{"geoLocation": "somewhere", "defaultCuisine": "Pho"}])),
        ),
        _ => (StatusCode::NOT_FOUND, Json(json!({"title": "Not Found"}))),
    }
}

async fn catalog() -> Json<Value> {
    Json(json!([
        {
            "user_id": 1,
            "user_name": "Pho Thin",
            "address": {"geoLocation": "21.0245,105.8412"},
            "menus": [{
                "menu_id": 11,
                "menu_name": "Noodles",
                "menu_items": [{"item_id": 111, "item_name": "Pho", "price": 50000}]
            }]
        },
        {"user_id": 2, "user_name": "Ghost Kitchen", "address": null},
        {"user_id": 3, "user_name": "Pin Drop", "address": {"geoLocation": [21.03, 105.85]}}
    ]))
}

async fn stub_services() -> String {
    serve(
        Router::new()
            .route(
                "/api/Patron/GetUserAddressesAndDefaultCuisine/{user_id}",
                get(profile),
            )
            .route("/api/Meals/GeoLocation", get(catalog)),
    )
    .await
}

fn source_for(base: &str) -> HttpUpstreamSource {
    HttpUpstreamSource::new(format!("{base}/api/Patron"), format!("{base}/api/Meals"))
        .expect("source should build")
}

#[rstest]
#[tokio::test]
async fn fetches_profile() {
    let base = stub_services().await;

    let profile = source_for(&base)
        .user_profile("42")
        .await
        .expect("profile");

    assert_eq!(profile.coordinate(), Coordinate::new(21.0285, 105.8542));
    assert_eq!(profile.cuisines(), ["Pho", "Bun Cha"]);
}

#[rstest]
#[tokio::test]
async fn user_id_travels_as_one_path_segment() {
    let base = stub_services().await;

    let profile = source_for(&base)
        .user_profile("a/b")
        .await
        .expect("profile");

    assert_eq!(profile.cuisines(), ["Sushi"]);
}

#[rstest]
#[tokio::test]
async fn fetches_catalog() {
    let base = stub_services().await;

    let catalog = source_for(&base).catalog().await.expect("catalog");

    assert_eq!(
        catalog,
        [
            Restaurant::new(1, "Pho Thin", Some("21.0245,105.8412".into())).with_menu(Menu::new(
                11,
                "Noodles",
                vec![MenuItem::new(111, "Pho", 50_000)],
            )),
            Restaurant::new(2, "Ghost Kitchen", None),
            Restaurant::new(3, "Pin Drop", Some("[21.03,105.85]".into())),
        ]
    );
}

#[rstest]
#[case::empty("ghost")]
#[case::invalid_location("lost")]
#[case::not_found("nobody")]
#[tokio::test]
async fn unusable_profiles_fail(#[case] user_id: &str) {
    let base = stub_services().await;

    let err = source_for(&base)
        .user_profile(user_id)
        .await
        .expect_err("should fail");

    match (user_id, err) {
        ("ghost", UpstreamError::EmptyProfile { user_id: id }) => assert_eq!(id, "ghost"),
        ("lost", UpstreamError::InvalidProfile { user_id: id, .. }) => assert_eq!(id, "lost"),
        ("nobody", UpstreamError::Http { status, .. }) => assert_eq!(status, 404),
        (_, other) => panic!("unexpected error for {user_id}: {other:?}"),
    }
}

#[rstest]
#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let base = serve(Router::new().route("/GeoLocation", get(|| async { "[{not json" }))).await;
    let source = HttpUpstreamSource::new(base.as_str(), base.as_str()).expect("source");

    let err = source.catalog().await.expect_err("should fail");

    assert!(matches!(err, UpstreamError::Decode { .. }), "got {err:?}");
}

#[rstest]
#[tokio::test]
async fn slow_service_times_out() {
    let base = serve(Router::new().route(
        "/GeoLocation",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!([]))
        }),
    ))
    .await;
    let config = HttpUpstreamConfig::new(base.as_str(), base.as_str())
        .with_timeout(Duration::from_millis(200));
    let source = HttpUpstreamSource::with_config(config).expect("source");

    let err = source.catalog().await.expect_err("should time out");

    assert!(matches!(err, UpstreamError::Timeout { .. }), "got {err:?}");
}

#[rstest]
#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("address");
    drop(listener);
    let base = format!("http://{addr}");

    let err = source_for(&base).catalog().await.expect_err("should fail");

    assert!(matches!(err, UpstreamError::Network { .. }), "got {err:?}");
}
