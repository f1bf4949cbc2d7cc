//! Queries against the `movies` table.
//!
//! Every function takes any [`ConnectionTrait`], so callers decide whether a
//! call runs on the pool or inside a request-scoped transaction. A missing
//! row is `Ok(None)`; only store failures are errors.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    ModelTrait, QueryFilter, QueryOrder, QuerySelect, Select,
    sea_query::{Expr, LikeExpr},
};
use tracing::debug;

use crate::{
    entities::movie,
    schemas::{Movie, MovieCreate},
};

/// Bounds of a year search. At least one side is always present.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum YearRange {
    From(i16),
    Until(i16),
    Between(i16, i16),
}

impl YearRange {
    /// `None` when neither bound is given.
    pub fn new(min: Option<i16>, max: Option<i16>) -> Option<Self> {
        match (min, max) {
            (Some(min), Some(max)) => Some(YearRange::Between(min, max)),
            (Some(min), None) => Some(YearRange::From(min)),
            (None, Some(max)) => Some(YearRange::Until(max)),
            (None, None) => None,
        }
    }

    fn apply(self, query: Select<movie::Entity>) -> Select<movie::Entity> {
        match self {
            YearRange::From(min) => query.filter(movie::Column::Year.gte(min)),
            YearRange::Until(max) => query.filter(movie::Column::Year.lte(max)),
            YearRange::Between(min, max) => query.filter(movie::Column::Year.between(min, max)),
        }
    }
}

pub async fn create_movie<C: ConnectionTrait>(db: &C, movie: MovieCreate) -> Result<Movie, DbErr> {
    let row = movie.into_active_model().insert(db).await?;
    debug!(id = row.id, title = %row.title, "movie created");
    Ok(row.into())
}

pub async fn update_movie<C: ConnectionTrait>(
    db: &C,
    movie: Movie,
) -> Result<Option<Movie>, DbErr> {
    let Some(row) = movie::Entity::find_by_id(movie.id).one(db).await? else {
        debug!(id = movie.id, "movie to update not found");
        return Ok(None);
    };
    let row = movie.apply_to(row.into_active_model()).update(db).await?;
    debug!(id = row.id, "movie updated");
    Ok(Some(row.into()))
}

/// Returns the row as it was just before deletion.
pub async fn delete_movie<C: ConnectionTrait>(
    db: &C,
    movie_id: i32,
) -> Result<Option<Movie>, DbErr> {
    let Some(row) = movie::Entity::find_by_id(movie_id).one(db).await? else {
        debug!(id = movie_id, "movie to delete not found");
        return Ok(None);
    };
    row.clone().delete(db).await?;
    debug!(id = movie_id, "movie deleted");
    Ok(Some(row.into()))
}

pub async fn get_movie<C: ConnectionTrait>(db: &C, movie_id: i32) -> Result<Option<Movie>, DbErr> {
    let row = movie::Entity::find_by_id(movie_id).one(db).await?;
    Ok(row.map(Movie::from))
}

/// One page in store order.
pub async fn get_movies<C: ConnectionTrait>(
    db: &C,
    skip: u64,
    limit: u64,
) -> Result<Vec<Movie>, DbErr> {
    debug!(skip, limit, "listing movies");
    let rows = movie::Entity::find().offset(skip).limit(limit).all(db).await?;
    Ok(into_movies(rows))
}

/// Exact title match, most recent first.
pub async fn get_movies_by_title<C: ConnectionTrait>(
    db: &C,
    title: &str,
) -> Result<Vec<Movie>, DbErr> {
    debug!(title, "movies by exact title");
    let rows = movie::Entity::find()
        .filter(movie::Column::Title.eq(title))
        .order_by_desc(movie::Column::Year)
        .all(db)
        .await?;
    Ok(into_movies(rows))
}

/// Titles containing `fragment`, ordered by title then year.
pub async fn get_movies_by_title_part<C: ConnectionTrait>(
    db: &C,
    fragment: &str,
) -> Result<Vec<Movie>, DbErr> {
    debug!(fragment, "movies by partial title");
    let rows = movie::Entity::find()
        .filter(
            Expr::col((movie::Entity, movie::Column::Title))
                .like(LikeExpr::new(substring_pattern(fragment)).escape('\\')),
        )
        .order_by_asc(movie::Column::Title)
        .order_by_asc(movie::Column::Year)
        .all(db)
        .await?;
    Ok(into_movies(rows))
}

pub async fn get_movies_by_title_year<C: ConnectionTrait>(
    db: &C,
    title: &str,
    year: i16,
) -> Result<Vec<Movie>, DbErr> {
    debug!(title, year, "movies by title and year");
    let rows = movie::Entity::find()
        .filter(movie::Column::Title.eq(title))
        .filter(movie::Column::Year.eq(year))
        .all(db)
        .await?;
    Ok(into_movies(rows))
}

/// Inclusive on both ends.
pub async fn get_movies_by_year_range<C: ConnectionTrait>(
    db: &C,
    range: YearRange,
) -> Result<Vec<Movie>, DbErr> {
    debug!(?range, "movies by year range");
    let rows = range.apply(movie::Entity::find()).all(db).await?;
    Ok(into_movies(rows))
}

/// `%fragment%` with LIKE wildcards in `fragment` escaped by `\`.
fn substring_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn into_movies(rows: Vec<movie::Model>) -> Vec<Movie> {
    rows.into_iter().map(Movie::from).collect()
}
