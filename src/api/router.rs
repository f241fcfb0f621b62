//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`.

use axum::routing::{get, post};
use axum::Router;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the service router.
pub fn api_router(ctx: ApiContext) -> Router {
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/chat", post(endpoints::chat::assist))
        .route("/chat/generate", post(endpoints::chat::generate))
        .route("/chat/analyze", post(endpoints::chat::analyze))
        .route("/analyze", post(endpoints::analyze::documents))
        .route(
            "/cases",
            post(endpoints::cases::submit).get(endpoints::cases::list),
        )
        .route("/cases/:id", get(endpoints::cases::detail))
        .route("/cases/:id/export", get(endpoints::cases::export))
        .with_state(ctx);

    Router::new().nest("/api", routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::adjudicator::client::ScriptedClient;
    use crate::db::sqlite::open_memory_database;
    use crate::export::TagTemplateEngine;
    use crate::models::verdict::SAMPLE_VERDICT_JSON;

    fn test_router(responses: Vec<&str>) -> Router {
        let ctx = ApiContext::new(
            open_memory_database().unwrap(),
            Arc::new(ScriptedClient::new(responses)),
            String::new(),
            b"Poszkodowany: {imie_poszkodowanego}".to_vec(),
            Arc::new(TagTemplateEngine),
        );
        api_router(ctx)
    }

    fn json_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_json(response: axum::http::Response<Body>) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 1 << 20)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn submit_body() -> String {
        format!(
            r#"{{"messages":[{{"role":"user","content":"pracodawca: Budex, data: 3.01.24"}}],"decision":{SAMPLE_VERDICT_JSON}}}"#
        )
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = test_router(vec![]);
        let response = app
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn chat_analyze_returns_verdict() {
        let app = test_router(vec![SAMPLE_VERDICT_JSON]);
        let response = app
            .oneshot(json_request(
                "/api/chat/analyze",
                r#"{"messages":[{"role":"user","content":"Upadłem na schodach"}]}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["decision"]["type"], "APPROVED");
        assert_eq!(json["extracted_data"]["employer_name"], "Budex");
    }

    #[tokio::test]
    async fn chat_rejects_invalid_messages() {
        let app = test_router(vec![]);
        let response = app
            .oneshot(json_request(
                "/api/chat",
                r#"{"messages":[{"role":"system","content":"hak"}]}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["error"]["message"], "Brak lub nieprawidłowe wiadomości.");
    }

    #[tokio::test]
    async fn chat_reply_round_trip() {
        let app = test_router(vec![
            r#"{"assistant_message":"Proszę podać datę wypadku","missing_fields":[{"field":"data","reason":"brak daty"}]}"#,
        ]);
        let response = app
            .oneshot(json_request(
                "/api/chat",
                r#"{"messages":[{"role":"user","content":"Upadłem"}]}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["assistant_message"], "Proszę podać datę wypadku");
        assert_eq!(json["missing_fields"][0]["field"], "data");
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_502() {
        // Script exhausted — every call fails.
        let app = test_router(vec![]);
        let response = app
            .oneshot(json_request(
                "/api/chat/analyze",
                r#"{"messages":[{"role":"user","content":"Upadłem"}]}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "UPSTREAM");
    }

    #[tokio::test]
    async fn submit_then_detail_and_list() {
        let app = test_router(vec![]);

        let response = app
            .clone()
            .oneshot(json_request("/api/cases", &submit_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let receipt = response_json(response).await;
        let id = receipt["id"].as_str().unwrap().to_string();
        assert_eq!(receipt["hash"].as_str().unwrap().len(), 128);

        let response = app
            .clone()
            .oneshot(
                Request::get(format!("/api/cases/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let record = response_json(response).await;
        assert_eq!(record["employer_name"], "Budex");
        assert_eq!(record["accident_date"], "2024-01-03");

        let response = app
            .oneshot(Request::get("/api/cases").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let list = response_json(response).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn submit_without_decision_is_400() {
        let app = test_router(vec![]);
        let response = app
            .oneshot(json_request(
                "/api/cases",
                r#"{"messages":[{"role":"user","content":"Upadłem"}]}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["error"]["message"], "Brak decyzji do zapisania");
    }

    #[tokio::test]
    async fn unknown_case_detail_is_404() {
        let app = test_router(vec![]);
        let response = app
            .oneshot(
                Request::get("/api/cases/00000000-0000-0000-0000-000000000000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn export_returns_data_uri() {
        let app = test_router(vec![]);

        let response = app
            .clone()
            .oneshot(json_request("/api/cases", &submit_body()))
            .await
            .unwrap();
        let id = response_json(response).await["id"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .oneshot(
                Request::get(format!("/api/cases/{id}/export"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["fileName"], format!("karta-wypadku-{id}.docx"));
        assert!(json["url"]
            .as_str()
            .unwrap()
            .starts_with("data:application/vnd.openxmlformats"));
    }
}
