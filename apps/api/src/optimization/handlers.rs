use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::analytics::engagement::PostMetrics;
use crate::errors::AppError;
use crate::models::content::{default_content_type, ContentDraft};
use crate::optimization::ab_testing::{select_winner, AbTestResult};
use crate::optimization::factors::{analyze_factors, EngagementFactorAnalysis};
use crate::optimization::hashtags::{
    optimize_for_engagement, optimize_hashtags, ContentOptimization, HashtagOptimization,
};
use crate::optimization::timing::{optimal_posting_time, PostingTime};
use crate::optimization::tone::{tone_suggestions, ToneSuggestions};
use crate::profile::analysis::{analyze_user_profile, content_preferences};
use crate::profile::handlers::fetch_user;
use crate::state::AppState;

/// POST /api/v1/optimization/factors
pub async fn handle_analyze_factors(
    Json(draft): Json<ContentDraft>,
) -> Json<EngagementFactorAnalysis> {
    Json(analyze_factors(&draft))
}

#[derive(Deserialize)]
pub struct HashtagRequest {
    #[serde(default)]
    pub hashtags: Vec<String>,
}

/// POST /api/v1/optimization/hashtags
///
/// Accepts (and ignores) an engagement snapshot alongside the tags for wire
/// compatibility; only the tag count drives the result.
pub async fn handle_optimize_hashtags(
    Json(req): Json<HashtagRequest>,
) -> Json<HashtagOptimization> {
    Json(optimize_hashtags(&req.hashtags))
}

#[derive(Deserialize)]
pub struct OptimizeContentRequest {
    #[serde(default)]
    pub content: ContentDraft,
    #[serde(default)]
    pub analytics: PostMetrics,
}

/// POST /api/v1/optimization/content
pub async fn handle_optimize_content(
    Json(req): Json<OptimizeContentRequest>,
) -> Json<ContentOptimization> {
    Json(optimize_for_engagement(&req.content, &req.analytics))
}

#[derive(Deserialize)]
pub struct PostingTimeQuery {
    #[serde(default = "default_content_type")]
    pub content_type: String,
}

/// GET /api/v1/optimization/user/:user_id/posting-time
pub async fn handle_posting_time(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(params): Query<PostingTimeQuery>,
) -> Result<Json<PostingTime>, AppError> {
    let user = fetch_user(&state, user_id).await?;
    let preferences = content_preferences(&user);
    Ok(Json(optimal_posting_time(&preferences, &params.content_type)))
}

#[derive(Deserialize)]
pub struct ToneRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub content: ContentDraft,
    #[serde(default)]
    pub analytics: PostMetrics,
}

/// POST /api/v1/optimization/tone
///
/// The current tone comes from the user's profile analysis; the detected
/// tone from the draft body.
pub async fn handle_tone_suggestions(
    State(state): State<AppState>,
    Json(req): Json<ToneRequest>,
) -> Result<Json<ToneSuggestions>, AppError> {
    let user = fetch_user(&state, req.user_id).await?;
    let analysis = analyze_user_profile(&user);
    Ok(Json(tone_suggestions(
        &req.content,
        &analysis.content_tone,
        &req.analytics,
    )))
}

#[derive(Deserialize)]
pub struct AbTestRequest {
    #[serde(default)]
    pub variants: Vec<ContentDraft>,
    #[serde(default)]
    pub engagement_data: Vec<PostMetrics>,
}

/// POST /api/v1/optimization/ab-test
pub async fn handle_ab_test(Json(req): Json<AbTestRequest>) -> Json<AbTestResult> {
    Json(select_winner(&req.variants, &req.engagement_data))
}
