// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::archives::browse_archive,
        crate::presentation::http::controllers::archives::apply_filters,
        crate::presentation::http::controllers::archives::list_sort_options,
        crate::presentation::http::controllers::music::list_artists,
        crate::presentation::http::controllers::music::artist_songs,
        crate::presentation::http::controllers::music::artists_with_songs,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::archives::FilterPatchRequest,
            crate::application::dto::ArchivePageDto,
            crate::application::dto::ArchiveMetaDto,
            crate::application::dto::PostDto,
            crate::application::dto::PageInfoDto,
            crate::application::dto::QueryStateDto,
            crate::application::dto::SortOptionDto,
            crate::application::dto::NavigationDto,
            crate::application::dto::ArtistListDto,
            crate::application::dto::ArtistSongsDto,
            crate::application::dto::SongDto,
            crate::application::dto::ArtistSummaryDto,
            crate::application::dto::ArtistSummaryListDto
        )
    ),
    tags(
        (name = "Archives", description = "Filterable, cursor-paged archive listings"),
        (name = "Music", description = "Read-only catalogue of uploaded music"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Airwave Archive API",
        description = "Archive listings for radio stations and upcoming shows, plus the uploaded music catalogue",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let redoc = Redoc::with_url("/redoc", ApiDoc::openapi());
    Router::new()
        .route("/api-docs/openapi.json", get(serve_openapi))
        .merge(redoc)
}

/// Write the OpenAPI document to `OPENAPI_SNAPSHOT_PATH` and return the path
/// that was written.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let document = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(output_path)
}
