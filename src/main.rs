use groundwork::config::Config;
use groundwork::orchestrator::Orchestrator;
use mimalloc::MiMalloc;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        supabase_url = %cfg.supabase_url,
        patch_target = %cfg.patch_target.display(),
        loglevel = %cfg.loglevel,
        "starting infrastructure bootstrap"
    );

    let orchestrator = match Orchestrator::new(&cfg) {
        Ok(orchestrator) => orchestrator,
        Err(e) => {
            error!(error = %e, "failed to build HTTP client");
            return ExitCode::FAILURE;
        }
    };

    let summary = orchestrator.run().await;
    if summary.is_success() {
        info!("bootstrap completed");
    } else {
        error!("bootstrap finished with failed steps");
    }
    summary.exit_code()
}
