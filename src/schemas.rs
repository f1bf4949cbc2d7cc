//! JSON shapes of a movie record at the HTTP boundary, and the mapping
//! between them and the `movies` row.

use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
};

pub const TITLE_MAX_LEN: usize = 250;
pub const SYNOPSIS_MAX_LEN: usize = 4000;
pub const POSTER_URI_MAX_LEN: usize = 500;

/// Fields every movie record carries, with or without an id.
pub trait MovieFields {
    fn title(&self) -> &str;
    fn year(&self) -> i16;
    fn duration(&self) -> Option<i16>;
    fn synopsis(&self) -> Option<&str>;
    fn poster_uri(&self) -> Option<&str>;

    /// Length checks serde cannot express. Types and presence are already
    /// enforced by deserialization.
    fn validate(&self) -> AppResult<()> {
        if self.title().trim().is_empty() {
            return Err(AppError::Validation("title must not be empty".to_string()));
        }
        check_len("title", Some(self.title()), TITLE_MAX_LEN)?;
        check_len("synopsis", self.synopsis(), SYNOPSIS_MAX_LEN)?;
        check_len("posterUri", self.poster_uri(), POSTER_URI_MAX_LEN)?;
        Ok(())
    }
}

fn check_len(field: &str, value: Option<&str>, max: usize) -> AppResult<()> {
    match value {
        Some(v) if v.chars().count() > max => Err(AppError::Validation(format!(
            "{field} must be at most {max} characters"
        ))),
        _ => Ok(()),
    }
}

/// Inbound create payload: no id.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MovieCreate {
    pub title: String,
    pub year: i16,
    pub duration: Option<i16>,
    pub synopsis: Option<String>,
    pub poster_uri: Option<String>,
}

/// Persisted record: inbound update payload and every response body.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub year: i16,
    pub duration: Option<i16>,
    pub synopsis: Option<String>,
    pub poster_uri: Option<String>,
}

impl MovieFields for MovieCreate {
    fn title(&self) -> &str {
        &self.title
    }
    fn year(&self) -> i16 {
        self.year
    }
    fn duration(&self) -> Option<i16> {
        self.duration
    }
    fn synopsis(&self) -> Option<&str> {
        self.synopsis.as_deref()
    }
    fn poster_uri(&self) -> Option<&str> {
        self.poster_uri.as_deref()
    }
}

impl MovieFields for Movie {
    fn title(&self) -> &str {
        &self.title
    }
    fn year(&self) -> i16 {
        self.year
    }
    fn duration(&self) -> Option<i16> {
        self.duration
    }
    fn synopsis(&self) -> Option<&str> {
        self.synopsis.as_deref()
    }
    fn poster_uri(&self) -> Option<&str> {
        self.poster_uri.as_deref()
    }
}

impl MovieCreate {
    /// New row with the id left to the store.
    pub fn into_active_model(self) -> movie::ActiveModel {
        movie::ActiveModel {
            id: NotSet,
            title: Set(self.title),
            year: Set(self.year),
            duration: Set(self.duration),
            synopsis: Set(self.synopsis),
            poster_uri: Set(self.poster_uri),
        }
    }
}

impl Movie {
    /// Overwrites every mutable column of `row`; the id is never touched.
    pub fn apply_to(self, mut row: movie::ActiveModel) -> movie::ActiveModel {
        row.title = Set(self.title);
        row.year = Set(self.year);
        row.duration = Set(self.duration);
        row.synopsis = Set(self.synopsis);
        row.poster_uri = Set(self.poster_uri);
        row
    }
}

impl From<movie::Model> for Movie {
    fn from(row: movie::Model) -> Self {
        Self {
            id: row.id,
            title: row.title,
            year: row.year,
            duration: row.duration,
            synopsis: row.synopsis,
            poster_uri: row.poster_uri,
        }
    }
}
