use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::analytics::engagement::performance_metrics;
use crate::errors::AppError;
use crate::models::analytics::AnalyticsRow;
use crate::models::content::{ContentCreate, ContentDraft, ContentRow, ContentUpdate};
use crate::models::Pagination;
use crate::state::AppState;
use crate::strategy::improvements::recommend_improvements;

/// POST /api/v1/content
pub async fn handle_create_content(
    State(state): State<AppState>,
    Json(req): Json<ContentCreate>,
) -> Result<(StatusCode, Json<ContentRow>), AppError> {
    let row: ContentRow = sqlx::query_as(
        r#"
        INSERT INTO content
            (id, user_id, title, body, content_type, hashtags, scheduled_time,
             posted, linkedin_post_id, engagement_score, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, now())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(req.user_id)
    .bind(&req.title)
    .bind(&req.body)
    .bind(&req.content_type)
    .bind(&req.hashtags)
    .bind(req.scheduled_time)
    .bind(req.posted)
    .bind(&req.linkedin_post_id)
    .bind(req.engagement_score)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/content/:id
pub async fn handle_get_content(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ContentRow>, AppError> {
    let row = fetch_content(&state, id).await?;
    Ok(Json(row))
}

/// PUT /api/v1/content/:id — full replace, matching create semantics.
pub async fn handle_update_content(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ContentUpdate>,
) -> Result<Json<ContentRow>, AppError> {
    let row: Option<ContentRow> = sqlx::query_as(
        r#"
        UPDATE content
        SET user_id = $1, title = $2, body = $3, content_type = $4,
            hashtags = $5, scheduled_time = $6, posted = $7,
            linkedin_post_id = $8, engagement_score = $9, updated_at = now()
        WHERE id = $10
        RETURNING *
        "#,
    )
    .bind(req.user_id)
    .bind(&req.title)
    .bind(&req.body)
    .bind(&req.content_type)
    .bind(&req.hashtags)
    .bind(req.scheduled_time)
    .bind(req.posted)
    .bind(&req.linkedin_post_id)
    .bind(req.engagement_score)
    .bind(id)
    .fetch_optional(&state.db)
    .await?;

    let row = row.ok_or_else(|| AppError::NotFound(format!("Content {id} not found")))?;
    Ok(Json(row))
}

/// GET /api/v1/content
pub async fn handle_list_content(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<ContentRow>>, AppError> {
    let rows: Vec<ContentRow> =
        sqlx::query_as("SELECT * FROM content ORDER BY created_at LIMIT $1 OFFSET $2")
            .bind(page.limit)
            .bind(page.skip)
            .fetch_all(&state.db)
            .await?;
    Ok(Json(rows))
}

/// GET /api/v1/content/user/:user_id
pub async fn handle_list_user_content(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<ContentRow>>, AppError> {
    let rows: Vec<ContentRow> =
        sqlx::query_as("SELECT * FROM content WHERE user_id = $1 ORDER BY created_at")
            .bind(user_id)
            .fetch_all(&state.db)
            .await?;
    Ok(Json(rows))
}

/// GET /api/v1/content/:id/recommendations
///
/// Improvement recommendations for a stored content record. Content with no
/// analytics yet is scored against zeroed counters rather than rejected.
pub async fn handle_content_recommendations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<String>>, AppError> {
    let content = fetch_content(&state, id).await?;

    let analytics: Option<AnalyticsRow> =
        sqlx::query_as("SELECT * FROM analytics WHERE content_id = $1")
            .bind(id)
            .fetch_optional(&state.db)
            .await?;

    let metrics = performance_metrics(&content, analytics.as_ref());
    let draft = ContentDraft::from(&content);
    Ok(Json(recommend_improvements(&draft, &metrics)))
}

pub(crate) async fn fetch_content(state: &AppState, id: Uuid) -> Result<ContentRow, AppError> {
    let row: Option<ContentRow> = sqlx::query_as("SELECT * FROM content WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?;
    row.ok_or_else(|| AppError::NotFound(format!("Content {id} not found")))
}
