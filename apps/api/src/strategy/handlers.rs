use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::content::default_content_type;
use crate::profile::analysis::{analyze_user_profile, content_preferences};
use crate::profile::handlers::fetch_user;
use crate::state::AppState;
use crate::strategy::calendar::{create_content_calendar, optimize_posting_schedule, ScheduledDay};
use crate::strategy::prediction::{predict_engagement, EngagementPrediction};
use crate::strategy::themes::suggest_content_themes;

#[derive(Deserialize)]
pub struct PredictRequest {
    #[serde(default = "default_content_type")]
    pub content_type: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

/// POST /api/v1/strategy/predict
pub async fn handle_predict_engagement(
    Json(req): Json<PredictRequest>,
) -> Json<EngagementPrediction> {
    Json(predict_engagement(&req.content_type, &req.hashtags))
}

#[derive(Deserialize)]
pub struct IndustryQuery {
    #[serde(default = "default_industry")]
    pub industry: String,
}

fn default_industry() -> String {
    "Technology".to_string()
}

/// GET /api/v1/strategy/user/:user_id/themes
pub async fn handle_suggest_themes(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(params): Query<IndustryQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    let user = fetch_user(&state, user_id).await?;
    let analysis = analyze_user_profile(&user);
    let trends = state
        .trends
        .trending_topics(&params.industry, &user.skills)
        .await;
    Ok(Json(suggest_content_themes(&analysis, &trends)))
}

/// GET /api/v1/strategy/user/:user_id/calendar
///
/// A seven-day plan with posting times already assigned.
pub async fn handle_content_calendar(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(params): Query<IndustryQuery>,
) -> Result<Json<Vec<ScheduledDay>>, AppError> {
    let user = fetch_user(&state, user_id).await?;
    let preferences = content_preferences(&user);
    let trends = state
        .trends
        .trending_topics(&params.industry, &user.skills)
        .await;

    let calendar = create_content_calendar(&trends, &preferences);
    Ok(Json(optimize_posting_schedule(&preferences, &calendar)))
}

#[derive(Deserialize)]
pub struct HashtagSuggestionQuery {
    #[serde(default = "default_industry")]
    pub industry: String,
    #[serde(default)]
    pub theme: String,
}

/// GET /api/v1/strategy/user/:user_id/hashtags
pub async fn handle_hashtag_suggestions(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(params): Query<HashtagSuggestionQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    let user = fetch_user(&state, user_id).await?;
    let tags = state
        .trends
        .hashtag_suggestions(&params.industry, &user.skills, &params.theme)
        .await;
    Ok(Json(tags))
}
