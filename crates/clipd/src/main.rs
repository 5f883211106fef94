//! Clipcast daemon entry point
//!
//! Run with:
//! ```bash
//! cargo run -p clipd
//! ```
//!
//! Wires the PostgreSQL store, the service layer, and the two periodic
//! tasks (accrual engine and retention sweeper), then waits for Ctrl-C.
//! Configuration is loaded from environment variables (`.env` supported).

use std::sync::Arc;

use tracing::{error, info};

use clip_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use clip_db::{
    create_pool, run_migrations, PgActivityLogRepository, PgBanRepository, PgCampaignRepository,
    PgPayoutRepository, PgProfileRepository, PgSubmissionRepository, PgTrackingRepository,
    PgUserRepository, PgViewHistoryRepository,
};
use clip_service::ServiceContext;
use clip_tracker::{spawn_periodic, AccrualEngine, RetentionSweeper, SimulatedViewSource};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "Daemon failed");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    let tracing_config = if config.app.env.is_production() {
        TracingConfig::production()
    } else {
        TracingConfig::development()
    };
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(app = %config.app.name, env = ?config.app.env, "Starting clipcast daemon");

    info!("Connecting to PostgreSQL...");
    let db_config = clip_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;
    info!("PostgreSQL connection established, migrations applied");

    // Repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let profile_repo = Arc::new(PgProfileRepository::new(pool.clone()));
    let ban_repo = Arc::new(PgBanRepository::new(pool.clone()));
    let campaign_repo = Arc::new(PgCampaignRepository::new(pool.clone()));
    let submission_repo = Arc::new(PgSubmissionRepository::new(pool.clone()));
    let tracking_repo = Arc::new(PgTrackingRepository::new(pool.clone()));
    let payout_repo = Arc::new(PgPayoutRepository::new(pool.clone()));
    let activity_repo = Arc::new(PgActivityLogRepository::new(pool.clone()));
    let view_history_repo = Arc::new(PgViewHistoryRepository::new(pool.clone()));

    let view_source = Arc::new(SimulatedViewSource::new());

    // The surface (bot front-end) consumes this context; building it here
    // keeps the whole dependency graph in one place
    let _service_context = ServiceContext::new(
        user_repo,
        profile_repo,
        ban_repo,
        campaign_repo,
        submission_repo,
        tracking_repo.clone(),
        payout_repo,
        activity_repo.clone(),
        view_history_repo.clone(),
        view_source.clone(),
        config.surface.clone(),
    );

    // Periodic tasks
    let engine = Arc::new(AccrualEngine::new(
        tracking_repo,
        activity_repo.clone(),
        view_source,
        config.tracking.view_fetch_timeout(),
    ));
    let engine_task = spawn_periodic("accrual-engine", config.tracking.interval(), move || {
        let engine = engine.clone();
        async move {
            engine.tick().await;
        }
    });

    let sweeper = Arc::new(RetentionSweeper::new(
        activity_repo,
        view_history_repo,
        config.retention.activity_log_days,
        config.retention.view_history_days,
    ));
    let sweeper_task = spawn_periodic("retention-sweeper", config.retention.interval(), move || {
        let sweeper = sweeper.clone();
        async move {
            sweeper.sweep().await;
        }
    });

    info!(
        accrual_interval_mins = config.tracking.interval_minutes,
        sweep_interval_hours = config.retention.cleanup_interval_hours,
        "Periodic tasks running"
    );

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, draining tasks...");

    engine_task.shutdown().await;
    sweeper_task.shutdown().await;
    info!("Daemon stopped");
    Ok(())
}
