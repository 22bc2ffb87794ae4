use std::net::SocketAddr;
use std::sync::Arc;
use std::thread;

use geocore::analysis::{AnalysisClient, ChatCompletion};
use geocore::charts;
use geocore::imaging;
use geocore::prelude::ModuleKind;
use geocore::scenario::ScenarioInputs;
use serde_json::json;
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter, Reply};

use crate::bridge::payload::{AnalyzeRequest, ModuleEntry, SimulateQuery, StatusPayload};
use crate::session::orchestrator::PageOrchestrator;

fn bridge_bind_address(port: u16) -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], port))
}

/// Bridge that hosts the dashboard HTTP surface consumed by the display
/// client: module listing, page dispatch, chart catalog, scenario
/// simulation, image analysis, and a status snapshot.
pub struct DashboardBridge;

impl DashboardBridge {
    pub fn serve<T>(
        orchestrator: Arc<PageOrchestrator>,
        client: Arc<AnalysisClient<T>>,
        port: u16,
    ) -> Self
    where
        T: ChatCompletion + Send + Sync + 'static,
    {
        let routes = routes(orchestrator, client);
        thread::spawn(move || {
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(bridge_bind_address(port)).await;
            });
        });
        Self
    }

    pub fn publish_status(&self, message: &str) {
        println!("[bridge] {}", message);
    }
}

pub fn routes<T>(
    orchestrator: Arc<PageOrchestrator>,
    client: Arc<AnalysisClient<T>>,
) -> impl Filter<Extract = impl Reply, Error = warp::Rejection> + Clone
where
    T: ChatCompletion + Send + Sync + 'static,
{
    let orchestrator_filter = warp::any().map(move || orchestrator.clone());
    let client_filter = warp::any().map(move || client.clone());

    let modules_route = warp::path("modules")
        .and(warp::get())
        .and(orchestrator_filter.clone())
        .map(|orchestrator: Arc<PageOrchestrator>| {
            let entries: Vec<ModuleEntry> = orchestrator
                .kinds()
                .iter()
                .map(|kind| ModuleEntry {
                    slug: kind.slug().to_string(),
                    label: kind.label().to_string(),
                })
                .collect();
            warp::reply::json(&entries)
        });

    let page_route = warp::path("page")
        .and(warp::path::param::<String>())
        .and(warp::get())
        .and(orchestrator_filter)
        .map(|slug: String, orchestrator: Arc<PageOrchestrator>| {
            match ModuleKind::from_slug(&slug).and_then(|kind| orchestrator.dispatch(kind)) {
                Some(view) => warp::reply::with_status(warp::reply::json(&view), StatusCode::OK),
                None => warp::reply::with_status(
                    warp::reply::json(&json!({
                        "status": "error",
                        "message": format!("unknown module {}", slug)
                    })),
                    StatusCode::NOT_FOUND,
                ),
            }
        });

    let chart_route = warp::path("charts")
        .and(warp::path::param::<String>())
        .and(warp::get())
        .map(|name: String| match charts::by_name(&name) {
            Some(spec) => warp::reply::with_status(warp::reply::json(&spec), StatusCode::OK),
            None => warp::reply::with_status(
                warp::reply::json(&json!({
                    "status": "error",
                    "message": format!("unknown chart {}", name)
                })),
                StatusCode::NOT_FOUND,
            ),
        });

    let simulate_route = warp::path("simulate")
        .and(warp::get())
        .and(warp::query::<SimulateQuery>())
        .map(|query: SimulateQuery| {
            let inputs = ScenarioInputs::clamped(query.conservation, query.emission_reduction);
            warp::reply::json(&inputs.project())
        });

    let analyze_route = warp::path("analyze")
        .and(warp::post())
        .and(warp::body::json())
        .and(client_filter.clone())
        .and_then(
            |request: AnalyzeRequest, client: Arc<AnalysisClient<T>>| async move {
                let image = match imaging::decode_base64_upload(&request.image_base64) {
                    Ok(image) => image,
                    Err(err) => {
                        return Ok::<_, warp::Rejection>(warp::reply::with_status(
                            warp::reply::json(&json!({
                                "status": "error",
                                "message": err.to_string()
                            })),
                            StatusCode::BAD_REQUEST,
                        ));
                    }
                };

                // The remote call blocks until it returns or times out.
                match tokio::task::spawn_blocking(move || client.analyze(&image)).await {
                    Ok(outcome) => Ok(warp::reply::with_status(
                        warp::reply::json(&outcome),
                        StatusCode::OK,
                    )),
                    Err(err) => Ok(warp::reply::with_status(
                        warp::reply::json(&json!({
                            "status": "error",
                            "message": format!("analysis task failed: {}", err)
                        })),
                        StatusCode::INTERNAL_SERVER_ERROR,
                    )),
                }
            },
        );

    let status_route = warp::path("status")
        .and(warp::get())
        .and(client_filter)
        .map(|client: Arc<AnalysisClient<T>>| {
            let (analyses_completed, fallbacks_served) = client.metrics().snapshot();
            warp::reply::json(&StatusPayload {
                model: client.model().to_string(),
                analyses_completed,
                fallbacks_served,
            })
        });

    modules_route
        .or(page_route)
        .or(chart_route)
        .or(simulate_route)
        .or(analyze_route)
        .or(status_route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geocore::analysis::wire::{ChatRequest, ChatResponse};
    use geocore::analysis::{TransportError, FALLBACK_TEXT};
    use geocore::scenario::RecoveryProjection;

    struct FailingTransport;

    impl ChatCompletion for FailingTransport {
        fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, TransportError> {
            Err(TransportError::Request("connection refused".into()))
        }
    }

    fn test_routes() -> impl Filter<Extract = impl Reply, Error = warp::Rejection> + Clone {
        let client = Arc::new(AnalysisClient::new(FailingTransport, "test-vision", 64));
        routes(Arc::new(PageOrchestrator::new()), client)
    }

    // 1x1 PNG, used as a minimal valid upload.
    const TINY_PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+P+/HgAFhAJ/wlseKgAAAABJRU5ErkJggg==";

    #[tokio::test]
    async fn modules_route_lists_three_entries() {
        let response = warp::test::request()
            .path("/modules")
            .reply(&test_routes())
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let entries: Vec<ModuleEntry> = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].slug, "image-classification");
    }

    #[tokio::test]
    async fn page_route_dispatches_known_slugs() {
        let response = warp::test::request()
            .path("/page/climate-change")
            .reply(&test_routes())
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let missing = warp::test::request()
            .path("/page/weather")
            .reply(&test_routes())
            .await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn chart_route_serves_the_catalog() {
        let response = warp::test::request()
            .path("/charts/emissions")
            .reply(&test_routes())
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let spec: geocore::charts::ChartSpec = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(spec.rows.len(), 5);
    }

    #[tokio::test]
    async fn simulate_route_clamps_out_of_range_values() {
        let response = warp::test::request()
            .path("/simulate?conservation=400&emission_reduction=-2")
            .reply(&test_routes())
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let projection: RecoveryProjection = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(projection.potential, 50.0);
    }

    #[tokio::test]
    async fn analyze_route_masks_transport_failure() {
        let body = serde_json::json!({ "image_base64": TINY_PNG_BASE64 });
        let response = warp::test::request()
            .method("POST")
            .path("/analyze")
            .json(&body)
            .reply(&test_routes())
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let value: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(value["status"], "fallback");
        assert_eq!(value["text"], FALLBACK_TEXT);
    }

    #[tokio::test]
    async fn analyze_route_rejects_undecodable_uploads() {
        let body = serde_json::json!({ "image_base64": "!!not-base64!!" });
        let response = warp::test::request()
            .method("POST")
            .path("/analyze")
            .json(&body)
            .reply(&test_routes())
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
