use std::net::SocketAddr;

use anyhow::Context;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Profile {
    Production,
    Test,
}

impl Profile {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "test" => Profile::Test,
            _ => Profile::Production,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    pub database_test_url: String,
    pub profile: Profile,
    pub sql_echo: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "8000".to_string()).parse().context("PORT")?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://dbmovie.db?mode=rwc".to_string());
        let database_test_url = std::env::var("DATABASE_TEST_URL")
            .unwrap_or_else(|_| "sqlite://dbmovietest.db?mode=rwc".to_string());

        let profile =
            std::env::var("APP_ENV").map(|s| Profile::parse(&s)).unwrap_or(Profile::Production);

        let sql_echo = match std::env::var("SQL_ECHO") {
            Ok(s) => parse_bool(&s).with_context(|| format!("SQL_ECHO: invalid value {s:?}"))?,
            Err(_) => false,
        };

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            database_url,
            database_test_url,
            profile,
            sql_echo,
        })
    }

    /// Connection string for the store selected by `APP_ENV`.
    pub fn active_database_url(&self) -> &str {
        match self.profile {
            Profile::Production => &self.database_url,
            Profile::Test => &self.database_test_url,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
