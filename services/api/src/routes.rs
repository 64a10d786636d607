use crate::infra::AppState;
use ancient_harvest::catalog::{Blend, CatalogStore};
use ancient_harvest::error::AppError;
use ancient_harvest::storefront::quiz::{
    AnswerMap, Question, RecommendationEngine, ScoredBlend,
};
use ancient_harvest::storefront::shop::{filter_blends, FilterSelection};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub(crate) struct FilterResponse {
    pub(crate) total: usize,
    pub(crate) blends: Vec<Blend>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationRequest {
    pub(crate) answers: AnswerMap,
}

/// Ranked output of the quiz engine. Consumers read `top_match` and
/// `runners_up`; `ranked` carries the full list for diagnostics.
#[derive(Debug, Serialize)]
pub(crate) struct RecommendationResponse {
    pub(crate) top_match: Option<ScoredBlend>,
    pub(crate) runners_up: Vec<ScoredBlend>,
    pub(crate) ranked: Vec<ScoredBlend>,
}

pub(crate) fn with_storefront_routes(catalog: Arc<dyn CatalogStore>) -> axum::Router {
    axum::Router::new()
        .route("/api/v1/catalog", axum::routing::get(catalog_endpoint))
        .route("/api/v1/shop/filter", axum::routing::post(filter_endpoint))
        .route(
            "/api/v1/quiz/questions",
            axum::routing::get(questions_endpoint),
        )
        .route(
            "/api/v1/quiz/recommendations",
            axum::routing::post(recommendations_endpoint),
        )
        .with_state(catalog)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn catalog_endpoint(
    State(catalog): State<Arc<dyn CatalogStore>>,
) -> Result<Json<Vec<Blend>>, AppError> {
    Ok(Json(catalog.all_blends()?))
}

pub(crate) async fn filter_endpoint(
    State(catalog): State<Arc<dyn CatalogStore>>,
    Json(selection): Json<FilterSelection>,
) -> Result<Json<FilterResponse>, AppError> {
    let blends = catalog.all_blends()?;
    let filtered = filter_blends(&blends, &selection);

    Ok(Json(FilterResponse {
        total: filtered.len(),
        blends: filtered,
    }))
}

pub(crate) async fn questions_endpoint() -> Json<Vec<Question>> {
    Json(Question::standard_set())
}

pub(crate) async fn recommendations_endpoint(
    State(catalog): State<Arc<dyn CatalogStore>>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let blends = catalog.all_blends()?;
    let ranked = RecommendationEngine::default().score(&blends, &request.answers);

    let top_match = ranked.first().cloned();
    let runners_up = ranked.iter().skip(1).take(2).cloned().collect();

    Ok(Json(RecommendationResponse {
        top_match,
        runners_up,
        ranked,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{demo_catalog, InMemoryCatalog};
    use ancient_harvest::storefront::quiz::{AnswerValue, QuestionId};
    use ancient_harvest::storefront::shop::FilterCategory;
    use tower::ServiceExt;

    fn catalog() -> Arc<dyn CatalogStore> {
        Arc::new(InMemoryCatalog::new(demo_catalog()))
    }

    #[tokio::test]
    async fn filter_endpoint_respects_the_selection() {
        let mut selection = FilterSelection::default();
        selection.toggle(FilterCategory::Diet, "gluten");

        let Json(body) = filter_endpoint(State(catalog()), Json(selection))
            .await
            .expect("filter succeeds");

        assert_eq!(body.total, body.blends.len());
        assert!(body.blends.iter().all(|blend| {
            blend
                .certifications
                .to_lowercase()
                .contains("gluten-free")
                || blend.segment.to_lowercase().contains("celiac")
        }));
    }

    #[tokio::test]
    async fn recommendations_endpoint_returns_a_ranked_payload() {
        let mut answers = AnswerMap::new();
        answers.insert(QuestionId::Goal, AnswerValue::Single("diabetes".to_string()));
        answers.insert(
            QuestionId::Diet,
            AnswerValue::Multiple(vec!["glutenfree".to_string()]),
        );

        let Json(body) =
            recommendations_endpoint(State(catalog()), Json(RecommendationRequest { answers }))
                .await
                .expect("scoring succeeds");

        let top = body.top_match.expect("non-empty catalog has a top match");
        assert_eq!(top.blend.name, "Diabetic Care Atta");
        assert_eq!(body.runners_up.len(), 2);
        assert_eq!(body.ranked.len(), demo_catalog().len());
        assert!(body
            .ranked
            .windows(2)
            .all(|w| w[0].score >= w[1].score));
    }

    #[tokio::test]
    async fn answer_map_accepts_mixed_single_and_multi_values() {
        let payload = json!({
            "answers": {
                "goal": "diabetes",
                "diet": ["glutenfree", "vegan"],
            }
        });

        let request: RecommendationRequest =
            serde_json::from_value(payload).expect("mixed answer shapes deserialize");

        assert_eq!(
            request.answers.get(&QuestionId::Goal),
            Some(&AnswerValue::Single("diabetes".to_string()))
        );
        assert!(request
            .answers
            .get(&QuestionId::Diet)
            .expect("diet present")
            .contains("vegan"));
    }

    #[tokio::test]
    async fn questions_endpoint_serves_the_production_bank() {
        let Json(questions) = questions_endpoint().await;
        assert_eq!(questions.len(), 5);
    }

    #[tokio::test]
    async fn readiness_flips_from_unavailable_to_ok() {
        use std::sync::atomic::{AtomicBool, Ordering};

        let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(recorder.handle()),
        };

        let response = readiness_endpoint(Extension(state.clone()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        state.readiness.store(true, Ordering::Release);

        let response = readiness_endpoint(Extension(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_route_answers_through_the_router() {
        let app = with_storefront_routes(catalog());

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/health")
                    .body(axum::body::Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
    }
}
