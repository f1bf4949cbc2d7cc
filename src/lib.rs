pub mod config;
pub mod crud;
pub mod db;
pub mod entities;
pub mod error;
pub mod extract;
pub mod routes;
pub mod schemas;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get},
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route(
            "/api/movies/",
            get(routes::read_movies).post(routes::create_movie).put(routes::update_movie),
        )
        .route("/api/movies/{movie_id}", delete(routes::delete_movie))
        .route("/api/movies/byId/{movie_id}", get(routes::read_movie))
        .route("/api/movies/byTitle", get(routes::read_movies_by_title))
        .route("/api/movies/byTitleYear", get(routes::read_movies_by_title_year))
        .route("/api/movies/byYearRange", get(routes::read_movies_by_year_range))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
