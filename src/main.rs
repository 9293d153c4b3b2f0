//! CRM backend - customer management API with a cached property listing
//!
//! Serves the CRM endpoints, keeps the property listing behind a TTL cache
//! and runs the recurring maintenance jobs.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crm_backend::api::create_router;
use crm_backend::tasks::{jobs, spawn_job, JobLog, JobSpec};
use crm_backend::{AppState, Config};

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crm_backend=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CRM Backend");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, cache_ttl={}s, job_log_dir={}",
        config.server_port,
        config.cache_ttl,
        config.job_log_dir.display()
    );

    // Create application state with the CRM store and property cache
    let state = AppState::from_config(&config);
    info!("Stores initialized");

    // Start the recurring maintenance jobs
    let job_handles = spawn_jobs(&config, state.clone());
    info!("Background jobs started");

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(job_handles))
        .await
        .unwrap();

    info!("Server shutdown complete");
}

/// Spawns the four recurring jobs and returns their handles so the shutdown
/// path can abort them.
fn spawn_jobs(config: &Config, state: AppState) -> Vec<JoinHandle<()>> {
    vec![
        spawn_job(
            JobSpec {
                name: "heartbeat",
                interval: Duration::from_secs(config.heartbeat_interval),
                log: JobLog::compact(config.job_log_dir.join("crm_heartbeat_log.txt")),
                error_label: "Error checking CRM status",
            },
            state.clone(),
            jobs::heartbeat,
        ),
        spawn_job(
            JobSpec {
                name: "low_stock_restock",
                interval: Duration::from_secs(config.restock_interval),
                log: JobLog::compact(config.job_log_dir.join("low_stock_updates_log.txt")),
                error_label: "Error updating low stock",
            },
            state.clone(),
            jobs::restock_low_stock,
        ),
        spawn_job(
            JobSpec {
                name: "order_reminders",
                interval: Duration::from_secs(config.reminder_interval),
                log: JobLog::compact(config.job_log_dir.join("order_reminders_log.txt")),
                error_label: "Error processing order reminders",
            },
            state.clone(),
            jobs::order_reminders,
        ),
        spawn_job(
            JobSpec {
                name: "crm_report",
                interval: Duration::from_secs(config.report_interval),
                log: JobLog::report(config.job_log_dir.join("crm_report_log.txt")),
                error_label: "Error generating CRM report",
            },
            state,
            jobs::crm_report,
        ),
    ]
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the background jobs and allows graceful
/// shutdown of in-flight requests.
async fn shutdown_signal(job_handles: Vec<JoinHandle<()>>) {
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
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    for handle in job_handles {
        handle.abort();
    }
    warn!("Background jobs aborted");
}
