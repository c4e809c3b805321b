use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::{Filter, Rejection, Reply};
use serde_json::json;
use crate::config::constants::{INDEX_FILE_NAME, SERVER_SHUTDOWN_GRACE_PERIOD_MS, sleep_duration_millis};
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::services::content_analyzer::ContentAnalyzer;
use crate::structs::config::server_config::ServerConfig;
use crate::structs::health_status::HealthStatus;

pub struct AnalysisServer {
    analyzer: Arc<ContentAnalyzer>,
    server_config: ServerConfig,
    shutdown_tx: Option<oneshot::Sender<()>>,
    server_handle: Option<JoinHandle<()>>,
}

impl AnalysisServer {
    pub fn new(analyzer: Arc<ContentAnalyzer>, server_config: ServerConfig) -> Self {
        Self {
            analyzer,
            server_config,
            shutdown_tx: None,
            server_handle: None,
        }
    }

    /// Binds and spawns the server; returns the bound address (useful with port 0).
    pub async fn start(&mut self) -> AnalyzerResult<SocketAddr> {
        let ip: IpAddr = self.server_config.host.parse().map_err(|_| {
            AnalyzerError::config_error(
                &format!("'{}' is not an IP address", self.server_config.host),
                Some("server.host"),
                None,
            )
        })?;
        let addr = SocketAddr::new(ip, self.server_config.port);

        let static_dir = PathBuf::from(&self.server_config.static_dir);
        if !static_dir.join(INDEX_FILE_NAME).exists() {
            log::warn!("⚠️ {} not found in '{}', GET / will return 404", INDEX_FILE_NAME, static_dir.display());
        }

        let routes = routes(Arc::clone(&self.analyzer), static_dir);

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let (bound_addr, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| AnalyzerError::system_error(&format!("binding {}", addr), &e.to_string()))?;

        self.shutdown_tx = Some(shutdown_tx);
        self.server_handle = Some(tokio::spawn(server));

        log::info!("🌐 Content analyzer listening on http://{}", bound_addr);
        Ok(bound_addr)
    }

    pub async fn shutdown(&mut self) -> AnalyzerResult<()> {
        log::info!("🛑 Shutting down analysis server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|_|
                AnalyzerError::system_error("shutdown", "Failed to send shutdown signal")
            )?;
        }

        if let Some(handle) = self.server_handle.take() {
            match timeout(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS), handle).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => return Err(AnalyzerError::system_error("shutdown", &e.to_string())),
                Err(_) => log::warn!(
                    "⏰ In-flight requests still running after {}ms, exiting anyway",
                    SERVER_SHUTDOWN_GRACE_PERIOD_MS
                ),
            }
        }

        log::info!("✅ Analysis server shutdown complete");
        Ok(())
    }
}

/// Full route table. Never rejects: unmatched requests get a JSON error body.
pub fn routes(
    analyzer: Arc<ContentAnalyzer>,
    static_dir: PathBuf,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    let analyzer_filter = warp::any().map(move || Arc::clone(&analyzer));

    let analyze = warp::path!("analyze")
        .and(warp::post())
        .and(warp::body::bytes())
        .and(analyzer_filter)
        .and_then(analyze_handler);

    let health = warp::path!("health")
        .and(warp::get())
        .and_then(health_handler);

    let index = warp::path::end()
        .and(warp::get())
        .and(warp::fs::file(static_dir.join(INDEX_FILE_NAME)));

    let static_files = warp::path("static")
        .and(warp::fs::dir(static_dir));

    analyze
        .or(health)
        .or(index)
        .or(static_files)
        .recover(handle_rejection)
        .with(warp::log("content_analyzer::http"))
}

async fn analyze_handler(body: Bytes, analyzer: Arc<ContentAnalyzer>) -> Result<impl warp::Reply, Infallible> {
    let reply = analyzer.handle_request(&body).await;
    Ok(warp::reply::with_status(warp::reply::json(&reply.body), reply.status))
}

async fn health_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&HealthStatus::healthy()))
}

async fn handle_rejection(rejection: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found")
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
    } else {
        log::error!("❌ Unhandled rejection: {:?}", rejection);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&json!({ "error": message })),
        status,
    ))
}
