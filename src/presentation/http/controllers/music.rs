// src/presentation/http/controllers/music.rs
use crate::application::dto::{ArtistListDto, ArtistSongsDto, ArtistSummaryListDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/music/artists",
    responses(
        (status = 200, description = "Artists in the music library, by name.", body = ArtistListDto),
        (status = 502, description = "Music library unreadable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Music"
)]
pub async fn list_artists(Extension(state): Extension<HttpState>) -> HttpResult<Json<ArtistListDto>> {
    state
        .services
        .music_queries
        .list_artists()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/music/artists/{artist}/songs",
    params(
        ("artist" = String, Path, description = "Artist folder name")
    ),
    responses(
        (status = 200, description = "Songs uploaded for the artist.", body = ArtistSongsDto),
        (status = 400, description = "Artist name is not a single folder name.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown artist.", body = crate::presentation::http::error::ErrorResponse),
        (status = 502, description = "Music library unreadable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Music"
)]
pub async fn artist_songs(
    Extension(state): Extension<HttpState>,
    Path(artist): Path<String>,
) -> HttpResult<Json<ArtistSongsDto>> {
    state
        .services
        .music_queries
        .artist_songs(&artist)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/music/artists-with-songs",
    responses(
        (status = 200, description = "The first few artists with their song names.", body = ArtistSummaryListDto),
        (status = 502, description = "Music library unreadable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Music"
)]
pub async fn artists_with_songs(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ArtistSummaryListDto>> {
    state
        .services
        .music_queries
        .artists_with_songs()
        .await
        .into_http()
        .map(Json)
}
