use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use sqlx::FromRow;
use uuid::Uuid;

use crate::analytics::benchmarks::{compare_to_benchmark, BenchmarkComparison};
use crate::analytics::engagement::{engagement_rate, performance_metrics, PostMetrics};
use crate::analytics::insights::{
    audience_insights, generate_insights, AudienceInsights, PerformanceInsights,
};
use crate::content::handlers::fetch_content;
use crate::errors::AppError;
use crate::models::analytics::{AnalyticsCreate, AnalyticsRow, AnalyticsUpdate};
use crate::models::Pagination;
use crate::state::AppState;

/// POST /api/v1/analytics
pub async fn handle_create_analytics(
    State(state): State<AppState>,
    Json(req): Json<AnalyticsCreate>,
) -> Result<(StatusCode, Json<AnalyticsRow>), AppError> {
    let row: AnalyticsRow = sqlx::query_as(
        r#"
        INSERT INTO analytics
            (id, content_id, likes, comments, shares, impressions,
             engagement_rate, reach, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, now())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(req.content_id)
    .bind(req.likes)
    .bind(req.comments)
    .bind(req.shares)
    .bind(req.impressions)
    .bind(req.engagement_rate)
    .bind(req.reach)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/analytics/:id
pub async fn handle_get_analytics(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalyticsRow>, AppError> {
    let row: Option<AnalyticsRow> = sqlx::query_as("SELECT * FROM analytics WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?;
    let row = row.ok_or_else(|| AppError::NotFound(format!("Analytics {id} not found")))?;
    Ok(Json(row))
}

/// PUT /api/v1/analytics/:id
pub async fn handle_update_analytics(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AnalyticsUpdate>,
) -> Result<Json<AnalyticsRow>, AppError> {
    let row: Option<AnalyticsRow> = sqlx::query_as(
        r#"
        UPDATE analytics
        SET content_id = $1, likes = $2, comments = $3, shares = $4,
            impressions = $5, engagement_rate = $6, reach = $7, updated_at = now()
        WHERE id = $8
        RETURNING *
        "#,
    )
    .bind(req.content_id)
    .bind(req.likes)
    .bind(req.comments)
    .bind(req.shares)
    .bind(req.impressions)
    .bind(req.engagement_rate)
    .bind(req.reach)
    .bind(id)
    .fetch_optional(&state.db)
    .await?;

    let row = row.ok_or_else(|| AppError::NotFound(format!("Analytics {id} not found")))?;
    Ok(Json(row))
}

/// GET /api/v1/analytics
pub async fn handle_list_analytics(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<AnalyticsRow>>, AppError> {
    let rows: Vec<AnalyticsRow> =
        sqlx::query_as("SELECT * FROM analytics ORDER BY created_at LIMIT $1 OFFSET $2")
            .bind(page.limit)
            .bind(page.skip)
            .fetch_all(&state.db)
            .await?;
    Ok(Json(rows))
}

/// GET /api/v1/analytics/content/:content_id
pub async fn handle_get_content_analytics(
    State(state): State<AppState>,
    Path(content_id): Path<Uuid>,
) -> Result<Json<AnalyticsRow>, AppError> {
    let row: Option<AnalyticsRow> = sqlx::query_as("SELECT * FROM analytics WHERE content_id = $1")
        .bind(content_id)
        .fetch_optional(&state.db)
        .await?;
    let row = row
        .ok_or_else(|| AppError::NotFound("Analytics not found for this content".to_string()))?;
    Ok(Json(row))
}

/// GET /api/v1/analytics/content/:content_id/performance
pub async fn handle_content_performance(
    State(state): State<AppState>,
    Path(content_id): Path<Uuid>,
) -> Result<Json<PostMetrics>, AppError> {
    let metrics = load_performance(&state, content_id).await?;
    Ok(Json(metrics))
}

/// GET /api/v1/analytics/content/:content_id/benchmark
pub async fn handle_content_benchmark(
    State(state): State<AppState>,
    Path(content_id): Path<Uuid>,
) -> Result<Json<BenchmarkComparison>, AppError> {
    let metrics = load_performance(&state, content_id).await?;
    Ok(Json(compare_to_benchmark(&metrics)))
}

/// GET /api/v1/analytics/user/:user_id/insights
///
/// Batch insights across everything the user has published. Content without
/// analytics contributes zeroed counters.
pub async fn handle_user_insights(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<PerformanceInsights>, AppError> {
    let rows: Vec<ContentAnalyticsJoin> = sqlx::query_as(
        r#"
        SELECT c.id, c.content_type, a.likes, a.comments, a.shares,
               a.impressions, a.reach
        FROM content c
        LEFT JOIN analytics a ON a.content_id = c.id
        WHERE c.user_id = $1
        ORDER BY c.created_at
        "#,
    )
    .bind(user_id)
    .fetch_all(&state.db)
    .await?;

    let batch: Vec<PostMetrics> = rows.into_iter().map(ContentAnalyticsJoin::into_metrics).collect();
    Ok(Json(generate_insights(&batch)))
}

/// GET /api/v1/analytics/audience
pub async fn handle_audience_insights() -> Json<AudienceInsights> {
    Json(audience_insights())
}

#[derive(FromRow)]
struct ContentAnalyticsJoin {
    id: Uuid,
    content_type: String,
    likes: Option<i64>,
    comments: Option<i64>,
    shares: Option<i64>,
    impressions: Option<i64>,
    reach: Option<i64>,
}

impl ContentAnalyticsJoin {
    fn into_metrics(self) -> PostMetrics {
        let likes = self.likes.unwrap_or(0);
        let comments = self.comments.unwrap_or(0);
        let shares = self.shares.unwrap_or(0);
        let impressions = self.impressions.unwrap_or(0);

        PostMetrics {
            likes,
            comments,
            shares,
            impressions,
            reach: self.reach.unwrap_or(0),
            engagement_rate: engagement_rate(likes, comments, shares, impressions),
            content_id: Some(self.id),
            content_type: self.content_type,
        }
    }
}

async fn load_performance(state: &AppState, content_id: Uuid) -> Result<PostMetrics, AppError> {
    let content = fetch_content(state, content_id).await?;
    let analytics: Option<AnalyticsRow> =
        sqlx::query_as("SELECT * FROM analytics WHERE content_id = $1")
            .bind(content_id)
            .fetch_optional(&state.db)
            .await?;
    Ok(performance_metrics(&content, analytics.as_ref()))
}
