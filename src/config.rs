// src/config.rs
use crate::domain::archive::{
    ArchiveSettings, DEFAULT_PAGE_SIZE, DEFAULT_RADIO_STATIONS_CATEGORY_ID,
    DEFAULT_UPCOMING_SHOWS_CATEGORY_ID,
};
use std::{env, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    archive: ArchiveSettings,
    graphql_endpoint: Option<String>,
    posts_seed_file: Option<PathBuf>,
    music_library_dir: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_music_library_dir() -> PathBuf {
    PathBuf::from("music_uploads")
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a number, got {raw:?}"))),
        None => Ok(default),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl AppConfig {
    /// Build configuration from environment variables, loading a `.env` file
    /// first when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr = non_empty(lookup("LISTEN_ADDR")).unwrap_or_else(default_listen_addr);

        let page_size: u32 = parse_var(&lookup, "ARCHIVE_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            return Err(ConfigError::Invalid(
                "ARCHIVE_PAGE_SIZE must be greater than zero".into(),
            ));
        }

        let archive = ArchiveSettings {
            page_size,
            radio_stations_category_id: parse_var(
                &lookup,
                "RADIO_STATIONS_CATEGORY_ID",
                DEFAULT_RADIO_STATIONS_CATEGORY_ID,
            )?,
            upcoming_shows_category_id: parse_var(
                &lookup,
                "UPCOMING_SHOWS_CATEGORY_ID",
                DEFAULT_UPCOMING_SHOWS_CATEGORY_ID,
            )?,
        };

        let graphql_endpoint = non_empty(lookup("GRAPHQL_ENDPOINT"));
        if let Some(endpoint) = graphql_endpoint
            .as_deref()
            .filter(|url| !url.starts_with("http://") && !url.starts_with("https://"))
        {
            return Err(ConfigError::Invalid(format!(
                "GRAPHQL_ENDPOINT must be an http(s) URL, got {endpoint:?}"
            )));
        }

        let posts_seed_file = non_empty(lookup("POSTS_SEED_FILE")).map(PathBuf::from);
        let music_library_dir = non_empty(lookup("MUSIC_LIBRARY_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(default_music_library_dir);

        Ok(Self {
            listen_addr,
            archive,
            graphql_endpoint,
            posts_seed_file,
            music_library_dir,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn archive(&self) -> &ArchiveSettings {
        &self.archive
    }

    pub fn graphql_endpoint(&self) -> Option<&str> {
        self.graphql_endpoint.as_deref()
    }

    pub fn posts_seed_file(&self) -> Option<&std::path::Path> {
        self.posts_seed_file.as_deref()
    }

    pub fn music_library_dir(&self) -> &std::path::Path {
        &self.music_library_dir
    }
}
