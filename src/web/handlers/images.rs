//! Image rendering handler

use axum::{
    extract::{Path, State},
    http::{HeaderMap, Uri, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::ImageRequest;
use crate::renderer::RenderSpec;
use crate::utils::{now_millis, validate_image_params};
use crate::web::{AppState, ImageQuery};

/// `GET /img/{width}/{height}?square=&text=`
///
/// Parameters are validated before anything else happens, so a rejected
/// request never reaches the renderer or the stats store. Stats are
/// recorded once the image has been produced.
pub async fn serve_image(
    State(state): State<AppState>,
    Path((width, height)): Path<(String, String)>,
    query: ImageQuery,
    uri: Uri,
    headers: HeaderMap,
) -> AppResult<Response> {
    let params = validate_image_params(
        &width,
        &height,
        query.square.as_deref(),
        state.config.imaging.max_dimension,
    )?;

    let spec = RenderSpec {
        width: params.size.width(),
        height: params.size.height(),
        square: params.square,
        text: query.text.clone(),
    };
    let renderer = state.renderer.clone();
    let content_type = renderer.content_type();
    let image = tokio::task::spawn_blocking(move || renderer.render(&spec))
        .await
        .map_err(|e| AppError::internal(format!("render task failed: {e}")))??;

    let referrer = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let request = ImageRequest {
        path: uri.path().to_string(),
        size: params.size,
        square: query.square,
        text: query.text,
        referrer,
    };
    state.stats.record_request(&request, now_millis()).await;

    debug!(size = %params.size, bytes = image.len(), "Served image");

    Ok(([(header::CONTENT_TYPE, content_type)], image).into_response())
}
