use airwave_archive::application::services::ApplicationServices;
use airwave_archive::config::AppConfig;
use airwave_archive::domain::post::PostConnectionRepository;
use airwave_archive::infrastructure::repositories::{
    FsMusicLibrary, GraphqlPostRepository, InMemoryPostRepository,
};
use airwave_archive::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let post_repo = build_post_repository(&config)?;
    let music_library = Arc::new(FsMusicLibrary::open(config.music_library_dir()).await?);

    let services = Arc::new(ApplicationServices::new(
        post_repo,
        music_library,
        config.archive().clone(),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn build_post_repository(config: &AppConfig) -> Result<Arc<dyn PostConnectionRepository>> {
    if let Some(endpoint) = config.graphql_endpoint() {
        tracing::info!(endpoint, "serving archives from the GraphQL backend");
        return Ok(Arc::new(GraphqlPostRepository::new(endpoint)?));
    }

    if let Some(path) = config.posts_seed_file() {
        return Ok(Arc::new(InMemoryPostRepository::load_seed_file(path)?));
    }

    tracing::warn!("no GRAPHQL_ENDPOINT or POSTS_SEED_FILE set, serving the sample catalogue");
    let archive = config.archive();
    Ok(Arc::new(InMemoryPostRepository::with_sample_catalogue(
        archive.radio_stations_category_id,
        archive.upcoming_shows_category_id,
    )))
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,reqwest=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
