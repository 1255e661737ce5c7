pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{analytics, content, optimization, profile, strategy};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Users
        .route(
            "/api/v1/users",
            post(profile::handlers::handle_create_user).get(profile::handlers::handle_list_users),
        )
        .route(
            "/api/v1/users/:id",
            get(profile::handlers::handle_get_user).put(profile::handlers::handle_update_user),
        )
        .route(
            "/api/v1/users/:id/analysis",
            get(profile::handlers::handle_user_analysis),
        )
        .route(
            "/api/v1/users/:id/preferences",
            get(profile::handlers::handle_user_preferences),
        )
        .route(
            "/api/v1/users/:id/skills",
            get(profile::handlers::handle_user_skills),
        )
        // Content
        .route(
            "/api/v1/content",
            post(content::handlers::handle_create_content)
                .get(content::handlers::handle_list_content),
        )
        .route(
            "/api/v1/content/:id",
            get(content::handlers::handle_get_content)
                .put(content::handlers::handle_update_content),
        )
        .route(
            "/api/v1/content/user/:user_id",
            get(content::handlers::handle_list_user_content),
        )
        .route(
            "/api/v1/content/:id/recommendations",
            get(content::handlers::handle_content_recommendations),
        )
        // Analytics
        .route(
            "/api/v1/analytics",
            post(analytics::handlers::handle_create_analytics)
                .get(analytics::handlers::handle_list_analytics),
        )
        .route(
            "/api/v1/analytics/:id",
            get(analytics::handlers::handle_get_analytics)
                .put(analytics::handlers::handle_update_analytics),
        )
        .route(
            "/api/v1/analytics/content/:content_id",
            get(analytics::handlers::handle_get_content_analytics),
        )
        .route(
            "/api/v1/analytics/content/:content_id/performance",
            get(analytics::handlers::handle_content_performance),
        )
        .route(
            "/api/v1/analytics/content/:content_id/benchmark",
            get(analytics::handlers::handle_content_benchmark),
        )
        .route(
            "/api/v1/analytics/user/:user_id/insights",
            get(analytics::handlers::handle_user_insights),
        )
        .route(
            "/api/v1/analytics/audience",
            get(analytics::handlers::handle_audience_insights),
        )
        // Strategy
        .route(
            "/api/v1/strategy/predict",
            post(strategy::handlers::handle_predict_engagement),
        )
        .route(
            "/api/v1/strategy/user/:user_id/themes",
            get(strategy::handlers::handle_suggest_themes),
        )
        .route(
            "/api/v1/strategy/user/:user_id/calendar",
            get(strategy::handlers::handle_content_calendar),
        )
        .route(
            "/api/v1/strategy/user/:user_id/hashtags",
            get(strategy::handlers::handle_hashtag_suggestions),
        )
        // Optimization
        .route(
            "/api/v1/optimization/factors",
            post(optimization::handlers::handle_analyze_factors),
        )
        .route(
            "/api/v1/optimization/hashtags",
            post(optimization::handlers::handle_optimize_hashtags),
        )
        .route(
            "/api/v1/optimization/content",
            post(optimization::handlers::handle_optimize_content),
        )
        .route(
            "/api/v1/optimization/user/:user_id/posting-time",
            get(optimization::handlers::handle_posting_time),
        )
        .route(
            "/api/v1/optimization/tone",
            post(optimization::handlers::handle_tone_suggestions),
        )
        .route(
            "/api/v1/optimization/ab-test",
            post(optimization::handlers::handle_ab_test),
        )
        .with_state(state)
}
