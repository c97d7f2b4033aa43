use anyhow::Context;

use mitigate_config::MitigateConfig;
use mitigate_db::service::MitigateService;
use mitigate_server::cli::Cli;

/// Load layered configuration, then apply command-line overrides.
pub fn load_config(cli: &Cli) -> anyhow::Result<MitigateConfig> {
    let mut config = MitigateConfig::load_with_dotenv().context("failed to load configuration")?;
    cli.apply(&mut config);
    config
        .validate()
        .context("invalid command-line override")?;
    Ok(config)
}

pub async fn open_store(config: &MitigateConfig) -> anyhow::Result<MitigateService> {
    if config.store.is_in_memory() {
        tracing::warn!("using an in-memory store; records are lost on exit");
    }
    let service = MitigateService::new_local(&config.store.path)
        .await
        .with_context(|| format!("failed to open store at {}", config.store.path))?;
    tracing::info!(path = %config.store.path, "store opened");
    Ok(service)
}

/// Run the one-time citizen identifier normalization pass.
pub async fn normalize(service: &MitigateService) -> anyhow::Result<()> {
    let report = service
        .normalize_citizen_ids()
        .await
        .context("failed to read citizens for normalization")?;
    tracing::info!(
        converted = report.converted,
        unchanged = report.unchanged,
        skipped = report.skipped,
        "citizen_id normalization complete"
    );
    Ok(())
}
