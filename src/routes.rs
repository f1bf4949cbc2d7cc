use std::sync::Arc;

use axum::extract::State;
use sea_orm::TransactionTrait;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, crud,
    crud::YearRange,
    error::{AppError, AppResult},
    extract::{Json, Path, Query},
    schemas::{Movie, MovieCreate, MovieFields},
};

#[derive(Debug, Deserialize)]
pub struct Page {
    #[serde(default)]
    skip: u32,
    #[serde(default = "default_limit")]
    limit: u32,
}

fn default_limit() -> u32 {
    100
}

#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    t: String,
}

#[derive(Debug, Deserialize)]
pub struct TitleYearQuery {
    t: String,
    y: i16,
}

#[derive(Debug, Deserialize)]
pub struct YearRangeQuery {
    ymi: Option<i16>,
    yma: Option<i16>,
}

#[derive(Debug, Serialize)]
pub struct Health {
    status: &'static str,
}

pub async fn health(State(state): State<Arc<AppState>>) -> AppResult<Json<Health>> {
    state.db.ping().await?;
    Ok(Json(Health { status: "ok" }))
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    Json(movie): Json<MovieCreate>,
) -> AppResult<Json<Movie>> {
    movie.validate()?;
    let session = state.db.begin().await?;
    let created = crud::create_movie(&session, movie).await?;
    session.commit().await?;
    Ok(Json(created))
}

pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    Json(movie): Json<Movie>,
) -> AppResult<Json<Movie>> {
    movie.validate()?;
    let session = state.db.begin().await?;
    let updated = crud::update_movie(&session, movie)
        .await?
        .ok_or_else(|| AppError::NotFound("Movie to update not found".to_string()))?;
    session.commit().await?;
    Ok(Json(updated))
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i32>,
) -> AppResult<Json<Movie>> {
    let session = state.db.begin().await?;
    let deleted = crud::delete_movie(&session, movie_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Movie to delete not found".to_string()))?;
    session.commit().await?;
    Ok(Json(deleted))
}

pub async fn read_movies(
    State(state): State<Arc<AppState>>,
    Query(page): Query<Page>,
) -> AppResult<Json<Vec<Movie>>> {
    let session = state.db.begin().await?;
    let movies = crud::get_movies(&session, page.skip.into(), page.limit.into()).await?;
    session.commit().await?;
    Ok(Json(movies))
}

pub async fn read_movie(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i32>,
) -> AppResult<Json<Movie>> {
    let session = state.db.begin().await?;
    let movie = crud::get_movie(&session, movie_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Movie to read not found".to_string()))?;
    session.commit().await?;
    Ok(Json(movie))
}

pub async fn read_movies_by_title(
    State(state): State<Arc<AppState>>,
    Query(q): Query<TitleQuery>,
) -> AppResult<Json<Vec<Movie>>> {
    let session = state.db.begin().await?;
    let movies = crud::get_movies_by_title_part(&session, &q.t).await?;
    session.commit().await?;
    Ok(Json(movies))
}

pub async fn read_movies_by_title_year(
    State(state): State<Arc<AppState>>,
    Query(q): Query<TitleYearQuery>,
) -> AppResult<Json<Vec<Movie>>> {
    let session = state.db.begin().await?;
    let movies = crud::get_movies_by_title_year(&session, &q.t, q.y).await?;
    session.commit().await?;
    Ok(Json(movies))
}

pub async fn read_movies_by_year_range(
    State(state): State<Arc<AppState>>,
    Query(q): Query<YearRangeQuery>,
) -> AppResult<Json<Vec<Movie>>> {
    let range = YearRange::new(q.ymi, q.yma).ok_or(AppError::RangeSelection)?;
    let session = state.db.begin().await?;
    let movies = crud::get_movies_by_year_range(&session, range).await?;
    session.commit().await?;
    Ok(Json(movies))
}
