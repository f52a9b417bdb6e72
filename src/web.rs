use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State},
    http::{HeaderValue, Method, StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
};
use tracing::{error, warn};

use crate::generation::{DesignGenerator, DesignRequest};

const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn json_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// `/api` routes for generating designs and listing the history.
pub fn api_router(generator: Arc<DesignGenerator>, allowed_origins: Vec<String>) -> Router {
    Router::new()
        .route(
            "/api/generate-designs",
            post(generate_designs).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/api/generations", get(list_generations))
        .layer(cors_layer(allowed_origins))
        .with_state(generator)
}

/// Serves stored images to any origin, nested under the stored-image route.
pub fn stored_image_router(images_dir: PathBuf) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(images_dir))
        .layer(CorsLayer::new().allow_origin(Any))
}

pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _request: &Parts| {
                origin.to_str().is_ok_and(|origin| {
                    is_vercel_origin(origin) || allowed_origins.iter().any(|allowed| allowed == origin)
                })
            },
        ))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// `https://<subdomain>.vercel.app` where the subdomain is ASCII alphanumerics and dashes.
fn is_vercel_origin(origin: &str) -> bool {
    origin
        .strip_prefix("https://")
        .and_then(|rest| rest.strip_suffix(".vercel.app"))
        .is_some_and(|subdomain| {
            !subdomain.is_empty()
                && subdomain
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

pub async fn generate_designs(
    State(generator): State<Arc<DesignGenerator>>,
    mut multipart: Multipart,
) -> Response {
    let mut request = DesignRequest::default();
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let name = field.name().unwrap_or("").to_string();
                match name.as_str() {
                    "image" => match field.bytes().await {
                        Ok(data) => request.image = Some(data.to_vec()),
                        Err(err) => {
                            return json_error(
                                StatusCode::BAD_REQUEST,
                                &format!("Failed to read image: {err}"),
                            );
                        }
                    },
                    "style" | "roomType" => match field.text().await {
                        Ok(text) if name == "style" => request.style = Some(text),
                        Ok(text) => request.room_type = Some(text),
                        Err(err) => {
                            return json_error(
                                StatusCode::BAD_REQUEST,
                                &format!("Failed to read field {name}: {err}"),
                            );
                        }
                    },
                    _ => {}
                }
            }
            Ok(None) => break,
            Err(err) => {
                return json_error(
                    StatusCode::BAD_REQUEST,
                    &format!("Failed to read form: {err}"),
                );
            }
        }
    }

    match generator.generate(request).await {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(err) if err.is_client_error() => {
            warn!(error = %err, "rejected design request");
            json_error(StatusCode::BAD_REQUEST, &err.to_string())
        }
        Err(err) => {
            error!(error = %err, "design generation failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }
}

pub async fn list_generations(State(generator): State<Arc<DesignGenerator>>) -> Response {
    match generator.list_generations().await {
        Ok(generations) => (StatusCode::OK, Json(generations)).into_response(),
        Err(err) => {
            error!(error = %format!("{err:#}"), "error fetching generations");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }
}
