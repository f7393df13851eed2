//! Usage statistics handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::models::{HitCount, PopularSize, ReferrerCount, SizePair};
use crate::utils::now_millis;
use crate::web::AppState;

/// `GET /stats/paths/recent`
pub async fn recent_paths(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.stats.recent_paths().await)
}

/// `GET /stats/sizes/recent`
pub async fn recent_sizes(State(state): State<AppState>) -> Json<Vec<SizePair>> {
    Json(state.stats.recent_sizes().await)
}

/// `GET /stats/texts/recent`
pub async fn recent_texts(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.stats.recent_texts().await)
}

/// `GET /stats/sizes/top`
pub async fn top_sizes(State(state): State<AppState>) -> Json<Vec<PopularSize>> {
    Json(state.stats.top_sizes().await)
}

/// `GET /stats/referrers/top`
pub async fn top_referrers(State(state): State<AppState>) -> Json<Vec<ReferrerCount>> {
    Json(state.stats.top_referrers().await)
}

/// `GET /stats/hits`, counted against the time of the query
pub async fn hit_counts(State(state): State<AppState>) -> Json<Vec<HitCount>> {
    Json(state.stats.hit_counts(now_millis()).await)
}

/// `DELETE /stats`
pub async fn reset_stats(State(state): State<AppState>) -> StatusCode {
    state.stats.reset_all().await;
    StatusCode::OK
}
