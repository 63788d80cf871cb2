//! HTTP interface: generation and conversion endpoints.

use std::num::NonZeroU16;
use std::sync::Arc;

use axum::Router;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use url::Url;

use crate::error::ProphecyError;
use crate::gemini::GeminiClient;
use crate::prophecy::{self, ProphecyRequest};
use crate::raster;

/// Shared per-process state. Requests themselves are stateless and fully
/// independent; nothing here is mutated after startup.
#[derive(Clone, Debug)]
pub struct AppState {
    model: String,
    public_url: Option<String>,
    gemini: Arc<GeminiClient>,
}

impl AppState {
    /// Builds state against the production Gemini API.
    pub fn new(model: String, public_url: Option<String>) -> Self {
        Self::with_gemini(model, public_url, GeminiClient::new(reqwest::Client::new()))
    }

    /// Builds state with a caller-supplied client, used by tests.
    pub fn with_gemini(model: String, public_url: Option<String>, gemini: GeminiClient) -> Self {
        Self {
            model,
            public_url,
            gemini: Arc::new(gemini),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateQuery {
    #[serde(rename = "apiKey", default)]
    api_key: String,
    #[serde(default)]
    style: String,
    #[serde(default)]
    source: String,
    #[serde(default)]
    mode: String,
    #[serde(default)]
    format: String,
}

#[derive(Debug, Serialize)]
struct GenerateResponse {
    svg: String,
    quote: String,
}

#[derive(Debug, Deserialize)]
struct ConvertBody {
    #[serde(default)]
    svg: Option<String>,
}

#[derive(Debug, Serialize)]
struct ServiceInfo {
    service: &'static str,
    endpoints: [&'static str; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    shortcut: Option<String>,
}

/// Builds a PNG download response with the dated attachment filename.
fn png_response(png: Vec<u8>) -> Result<Response, ProphecyError> {
    let filename = format!("prophecy-{}.png", Utc::now().timestamp_millis());
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "image/png")
        .header(
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .header(CONTENT_LENGTH, png.len())
        .body(axum::body::Body::from(png))
        .map_err(ProphecyError::from)
}

/// handles the /generate GET
async fn generate_handler(
    State(state): State<AppState>,
    Query(params): Query<GenerateQuery>,
) -> Result<Response, ProphecyError> {
    if params.api_key.is_empty() {
        return Err(ProphecyError::MissingApiKey);
    }

    let request = ProphecyRequest {
        api_key: params.api_key,
        style: params.style,
        source: params.source,
        mode: params.mode,
    };
    let prophecy = prophecy::generate(&state.gemini, &state.model, &request).await;

    // JSON is for frontend preview; the default is a PNG download suited
    // to automation shortcuts.
    if params.format == "json" {
        return Ok(Json(GenerateResponse {
            svg: prophecy.svg,
            quote: prophecy.quote,
        })
        .into_response());
    }

    let png = raster::svg_to_png(&prophecy.svg)?;
    png_response(png)
}

/// handles the /convert POST
///
/// The body is taken as a `Result` so a missing or unparseable request body
/// still gets the JSON error envelope instead of the extractor's plain-text
/// rejection.
async fn convert_handler(
    body: Result<Json<ConvertBody>, JsonRejection>,
) -> Result<Response, ProphecyError> {
    let Json(body) = body.map_err(|_| ProphecyError::MissingSvg)?;
    let svg = body
        .svg
        .filter(|svg| !svg.is_empty())
        .ok_or(ProphecyError::MissingSvg)?;
    let png = raster::svg_to_png(&svg)?;
    png_response(png)
}

/// handles the / GET: a small service descriptor, with a ready-to-edit
/// generate link when a public base URL is configured.
async fn root_handler(State(state): State<AppState>) -> Result<Json<ServiceInfo>, ProphecyError> {
    let shortcut = match state.public_url.as_deref() {
        Some(base) => {
            let mut url = Url::parse(base)?;
            url.set_path("/generate");
            url.set_query(Some(
                "apiKey=YOUR_API_KEY&style=mystic&source=Bible&mode=Prophecy&format=png",
            ));
            Some(url.to_string())
        }
        None => None,
    };

    Ok(Json(ServiceInfo {
        service: "prophecy",
        endpoints: ["GET /generate", "POST /convert"],
        shortcut,
    }))
}

fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::get(root_handler))
        .route("/generate", axum::routing::get(generate_handler))
        .route("/convert", axum::routing::post(convert_handler))
}

/// Binds the listener and serves the application until shutdown.
pub async fn setup_server(
    listen_addr: &str,
    port: NonZeroU16,
    state: AppState,
) -> Result<(), anyhow::Error> {
    let app = create_router().with_state(state);

    let addr = format!("{}:{}", listen_addr, port);
    info!("Starting server on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server error: {}", err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    const TINY_SVG: &str = "<svg width='10' height='10' xmlns='http://www.w3.org/2000/svg'></svg>";

    /// State whose Gemini client points at an unroutable address, so every
    /// generation exercises the fallback path without the network.
    fn setup_state() -> AppState {
        AppState::with_gemini(
            "test-model".to_string(),
            Some("https://prophecy.example.org".to_string()),
            GeminiClient::with_base_url(reqwest::Client::new(), "http://127.0.0.1:1"),
        )
    }

    async fn read_body(response: Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .expect("collect body")
            .to_bytes()
            .to_vec()
    }

    async fn read_json(response: Response) -> serde_json::Value {
        let bytes = read_body(response).await;
        serde_json::from_slice(&bytes).expect("parse body as JSON")
    }

    #[tokio::test]
    async fn generate_without_api_key_is_a_400_envelope() {
        let app = create_router().with_state(setup_state());

        let request = Request::builder()
            .method("GET")
            .uri("/generate")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["error"], "API key is required");
    }

    #[tokio::test]
    async fn generate_json_format_returns_fallback_on_upstream_failure() {
        let app = create_router().with_state(setup_state());

        let request = Request::builder()
            .method("GET")
            .uri("/generate?apiKey=test&style=obsidian&format=json")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["quote"], crate::constants::FALLBACK_QUOTE);
        let svg = body["svg"].as_str().expect("svg string");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("JOHN 1:5"));
    }

    #[tokio::test]
    async fn generate_defaults_to_a_png_download() {
        let app = create_router().with_state(setup_state());

        let request = Request::builder()
            .method("GET")
            .uri("/generate?apiKey=test")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "image/png"
        );
        let disposition = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment; filename=\"prophecy-"));
        assert!(disposition.ends_with(".png\""));
        let body = read_body(response).await;
        assert_eq!(&body[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn convert_returns_a_png() {
        let app = create_router().with_state(setup_state());

        let request = Request::builder()
            .method("POST")
            .uri("/convert")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::json!({ "svg": TINY_SVG }).to_string(),
            ))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "image/png"
        );
        let body = read_body(response).await;
        assert_eq!(&body[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn convert_without_svg_is_a_400_envelope() {
        let app = create_router().with_state(setup_state());

        let request = Request::builder()
            .method("POST")
            .uri("/convert")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["error"], "SVG content is required");
    }

    #[tokio::test]
    async fn convert_with_empty_body_is_a_400_envelope() {
        let app = create_router().with_state(setup_state());

        let request = Request::builder()
            .method("POST")
            .uri("/convert")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["error"], "SVG content is required");
    }

    #[tokio::test]
    async fn convert_with_unparseable_body_is_a_400_envelope() {
        let app = create_router().with_state(setup_state());

        let request = Request::builder()
            .method("POST")
            .uri("/convert")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["error"], "SVG content is required");
    }

    #[tokio::test]
    async fn convert_with_broken_markup_is_a_500_envelope() {
        let app = create_router().with_state(setup_state());

        let request = Request::builder()
            .method("POST")
            .uri("/convert")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::json!({ "svg": "<svg width='10'" }).to_string(),
            ))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("SVG parse error"));
    }

    #[tokio::test]
    async fn root_describes_the_service_with_shortcut_link() {
        let app = create_router().with_state(setup_state());

        let request = Request::builder()
            .method("GET")
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["service"], "prophecy");
        let shortcut = body["shortcut"].as_str().expect("shortcut link");
        assert!(shortcut.starts_with("https://prophecy.example.org/generate?"));
        assert!(shortcut.contains("apiKey=YOUR_API_KEY"));
    }

    #[tokio::test]
    async fn root_omits_shortcut_without_public_url() {
        let state = AppState::with_gemini(
            "test-model".to_string(),
            None,
            GeminiClient::with_base_url(reqwest::Client::new(), "http://127.0.0.1:1"),
        );
        let app = create_router().with_state(state);

        let request = Request::builder()
            .method("GET")
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let body = read_json(response).await;
        assert!(body.get("shortcut").is_none());
    }
}
