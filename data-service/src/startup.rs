//! Application startup and lifecycle management.

use axum::{Router, middleware, routing::get};
use service_core::error::AppError;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::DataConfig;
use crate::handlers;
use crate::middleware::auth::require_api_key;
use crate::services::RecordStore;

/// Shared application state: configuration and the immutable record store.
#[derive(Clone)]
pub struct AppState {
    pub config: DataConfig,
    pub store: Arc<RecordStore>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// Loads the record store once; a missing data file leaves the store
    /// empty without failing startup. Binds the listener immediately so
    /// tests can pass port 0 and read the assigned port back.
    pub async fn build(config: DataConfig) -> Result<Self, AppError> {
        let store = Arc::new(RecordStore::load(Path::new(&config.data_file))?);
        if store.is_empty() {
            tracing::warn!("Serving in degraded mode: data-dependent endpoints will report 503");
        }

        let state = AppState {
            config: config.clone(),
            store,
        };
        let router = build_router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

/// Assemble the router.
///
/// The root path is public; every other path, including unknown ones, sits
/// behind the access gate so the 404 fallback only answers to valid keys.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/schema", get(handlers::schema))
        .route("/api/data", get(handlers::query_data))
        .route("/api/stats", get(handlers::stats))
        .route("/api/ai/basket-analysis", get(handlers::insights::basket_analysis))
        .route("/api/ai/customer-segments", get(handlers::insights::customer_segments))
        .route("/api/ai/insights", get(handlers::insights::strategic_insights))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    Router::new()
        .route("/", get(handlers::root))
        .merge(protected)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
