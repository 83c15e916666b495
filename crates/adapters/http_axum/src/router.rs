//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use cafeshop_app::ports::CafeShopRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the cafe shop API at `/` next to a `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: CafeShopRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use cafeshop_app::services::cafe_shop_service::CafeShopService;
    use cafeshop_domain::cafe_shop::{CafeShop, CafeShopDetails, FieldUpdate};
    use cafeshop_domain::error::CafeShopError;
    use cafeshop_domain::id::CafeShopId;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    /// Stores nothing: every lookup misses, every write succeeds with id 1.
    struct StubCafeShopRepo;

    #[derive(Debug)]
    struct Unreachable;

    impl std::fmt::Display for Unreachable {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("database unreachable")
        }
    }

    impl std::error::Error for Unreachable {}

    /// Every call fails as if the database were down.
    struct FailingCafeShopRepo;

    impl CafeShopRepository for StubCafeShopRepo {
        async fn create(&self, details: CafeShopDetails) -> Result<CafeShop, CafeShopError> {
            Ok(CafeShop {
                id: CafeShopId::from_i64(1),
                details,
            })
        }
        async fn get_by_id(&self, _id: CafeShopId) -> Result<Option<CafeShop>, CafeShopError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<CafeShop>, CafeShopError> {
            Ok(vec![])
        }
        async fn update(&self, _shop: CafeShop) -> Result<Option<CafeShop>, CafeShopError> {
            Ok(None)
        }
        async fn update_field(
            &self,
            _id: CafeShopId,
            _update: &FieldUpdate,
        ) -> Result<bool, CafeShopError> {
            Ok(false)
        }
        async fn delete(&self, _id: CafeShopId) -> Result<bool, CafeShopError> {
            Ok(false)
        }
    }

    impl CafeShopRepository for FailingCafeShopRepo {
        async fn create(&self, _details: CafeShopDetails) -> Result<CafeShop, CafeShopError> {
            Err(CafeShopError::Storage(Box::new(Unreachable)))
        }
        async fn get_by_id(&self, _id: CafeShopId) -> Result<Option<CafeShop>, CafeShopError> {
            Err(CafeShopError::Storage(Box::new(Unreachable)))
        }
        async fn get_all(&self) -> Result<Vec<CafeShop>, CafeShopError> {
            Err(CafeShopError::Storage(Box::new(Unreachable)))
        }
        async fn update(&self, _shop: CafeShop) -> Result<Option<CafeShop>, CafeShopError> {
            Err(CafeShopError::Storage(Box::new(Unreachable)))
        }
        async fn update_field(
            &self,
            _id: CafeShopId,
            _update: &FieldUpdate,
        ) -> Result<bool, CafeShopError> {
            Err(CafeShopError::Storage(Box::new(Unreachable)))
        }
        async fn delete(&self, _id: CafeShopId) -> Result<bool, CafeShopError> {
            Err(CafeShopError::Storage(Box::new(Unreachable)))
        }
    }

    fn stub_app() -> Router {
        build(AppState::new(CafeShopService::new(StubCafeShopRepo)))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = stub_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_not_found_envelope_when_listing_empty_table() {
        let (status, body) = send(
            stub_app(),
            Request::builder().uri("/").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "error": "cafe_shops not found." }));
    }

    #[tokio::test]
    async fn should_return_bad_request_when_id_is_not_numeric() {
        let (status, body) = send(
            stub_app(),
            Request::builder()
                .uri("/search/cafe-shop/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid cafe shop id: abc");
    }

    #[tokio::test]
    async fn should_return_field_details_when_create_body_is_incomplete() {
        let (status, body) = send(
            stub_app(),
            json_request("POST", "/add/cafe-shop/alice", r#"{"cafe":"Blue Bottle"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let fields: Vec<&str> = body["details"]
            .as_array()
            .unwrap()
            .iter()
            .map(|detail| detail["field"].as_str().unwrap())
            .collect();
        assert_eq!(
            fields,
            vec![
                "location",
                "open",
                "close",
                "coffee_rating",
                "wifi_rating",
                "power_rating"
            ]
        );
    }

    #[tokio::test]
    async fn should_reject_create_when_body_username_differs_from_path() {
        let (status, body) = send(
            stub_app(),
            json_request(
                "POST",
                "/add/cafe-shop/alice",
                r#"{"cafe_username":"mallory"}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let details: Vec<(&str, &str)> = body["details"]
            .as_array()
            .unwrap()
            .iter()
            .map(|detail| {
                (
                    detail["field"].as_str().unwrap(),
                    detail["code"].as_str().unwrap(),
                )
            })
            .collect();
        assert_eq!(
            details,
            vec![
                ("cafe_username", "mismatch"),
                ("cafe", "required"),
                ("location", "required"),
                ("open", "required"),
                ("close", "required"),
                ("coffee_rating", "required"),
                ("wifi_rating", "required"),
                ("power_rating", "required"),
            ]
        );
    }

    #[tokio::test]
    async fn should_wrap_malformed_json_in_error_envelope() {
        let (status, body) = send(
            stub_app(),
            json_request("POST", "/add/cafe-shop/alice", "{not json"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn should_reject_update_of_field_outside_allow_list() {
        let (status, body) = send(
            stub_app(),
            json_request("PATCH", "/update/cafe-shop/1/id", r#"{"id":"2"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "unknown field: id");
    }

    #[tokio::test]
    async fn should_return_not_found_when_patching_missing_row() {
        let (status, body) = send(
            stub_app(),
            json_request(
                "PATCH",
                "/update/cafe-shop/9/wifi-rating",
                r#"{"wifi_rating":"8"}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Cafe shop with ID 9 not found.");
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_row() {
        let (status, body) = send(
            stub_app(),
            Request::builder()
                .method("DELETE")
                .uri("/delete/cafe-shop/3")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Cafe shop with ID 3 not found.");
    }

    #[tokio::test]
    async fn should_hide_storage_failure_details() {
        let app = build(AppState::new(CafeShopService::new(FailingCafeShopRepo)));
        let (status, body) = send(
            app,
            Request::builder().uri("/").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "internal server error" }));
    }
}
