use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::{UserCreate, UserRow, UserUpdate};
use crate::models::Pagination;
use crate::profile::analysis::{
    analyze_user_profile, content_preferences, extract_skills_and_interests, ContentPreferences,
    ProfileAnalysis, SkillsAndInterests,
};
use crate::state::AppState;

/// POST /api/v1/users
pub async fn handle_create_user(
    State(state): State<AppState>,
    Json(req): Json<UserCreate>,
) -> Result<(StatusCode, Json<UserRow>), AppError> {
    let row: UserRow = sqlx::query_as(
        r#"
        INSERT INTO users
            (id, linkedin_profile_url, name, headline, about, skills,
             experience, education, interests, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, now())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&req.linkedin_profile_url)
    .bind(&req.name)
    .bind(&req.headline)
    .bind(&req.about)
    .bind(&req.skills)
    .bind(&req.experience)
    .bind(&req.education)
    .bind(&req.interests)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/users/:id
pub async fn handle_get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserRow>, AppError> {
    let row = fetch_user(&state, id).await?;
    Ok(Json(row))
}

/// PUT /api/v1/users/:id
pub async fn handle_update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UserUpdate>,
) -> Result<Json<UserRow>, AppError> {
    let row: Option<UserRow> = sqlx::query_as(
        r#"
        UPDATE users
        SET linkedin_profile_url = $1, name = $2, headline = $3, about = $4,
            skills = $5, experience = $6, education = $7, interests = $8,
            updated_at = now()
        WHERE id = $9
        RETURNING *
        "#,
    )
    .bind(&req.linkedin_profile_url)
    .bind(&req.name)
    .bind(&req.headline)
    .bind(&req.about)
    .bind(&req.skills)
    .bind(&req.experience)
    .bind(&req.education)
    .bind(&req.interests)
    .bind(id)
    .fetch_optional(&state.db)
    .await?;

    let row = row.ok_or_else(|| AppError::NotFound(format!("User {id} not found")))?;
    Ok(Json(row))
}

/// GET /api/v1/users
pub async fn handle_list_users(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<UserRow>>, AppError> {
    let rows: Vec<UserRow> =
        sqlx::query_as("SELECT * FROM users ORDER BY created_at LIMIT $1 OFFSET $2")
            .bind(page.limit)
            .bind(page.skip)
            .fetch_all(&state.db)
            .await?;
    Ok(Json(rows))
}

/// GET /api/v1/users/:id/analysis
pub async fn handle_user_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileAnalysis>, AppError> {
    let user = fetch_user(&state, id).await?;
    Ok(Json(analyze_user_profile(&user)))
}

/// GET /api/v1/users/:id/preferences
pub async fn handle_user_preferences(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ContentPreferences>, AppError> {
    let user = fetch_user(&state, id).await?;
    Ok(Json(content_preferences(&user)))
}

/// GET /api/v1/users/:id/skills
pub async fn handle_user_skills(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SkillsAndInterests>, AppError> {
    let user = fetch_user(&state, id).await?;
    Ok(Json(extract_skills_and_interests(&user)))
}

pub(crate) async fn fetch_user(state: &AppState, id: Uuid) -> Result<UserRow, AppError> {
    let row: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?;
    row.ok_or_else(|| AppError::NotFound(format!("User {id} not found")))
}
