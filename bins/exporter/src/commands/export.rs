//! `export` command.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use tracing::info;

use simucredito_core::export::{Artifact, Exporter};
use simucredito_core::reports::ReportContext;
use simucredito_core::simulation::SimulationResult;
use simucredito_core::storage::{ArtifactStore, StorageProvider};
use simucredito_gateway::{HttpSimulationGateway, load_for_report};
use simucredito_shared::AppConfig;
use simucredito_shared::config::ReportLocale;
use simucredito_shared::types::SimulationId;

/// Where the simulation result comes from.
pub enum Source {
    /// Fetched from the API, full schedule included.
    Api(SimulationId),
    /// Read from a JSON file.
    File(PathBuf),
}

/// Per-run settings after CLI overrides.
pub struct ExportOptions {
    /// Directory the PDF is written to.
    pub output_dir: PathBuf,
    /// Label language.
    pub locale: ReportLocale,
    /// Date printed on the report and used in the filename.
    pub date: NaiveDate,
}

/// Loads the simulation, exports it and writes the PDF. Returns the file path.
pub async fn run(
    config: &AppConfig,
    source: Source,
    options: ExportOptions,
) -> anyhow::Result<PathBuf> {
    let result = load(config, source).await?;
    let context = ReportContext::new(options.date, options.locale);

    let artifact = if result.payments().len() > config.report.background_threshold_rows {
        info!(
            rows = result.payments().len(),
            "Large schedule, composing on a blocking worker"
        );
        tokio::task::spawn_blocking(move || {
            Exporter::default().export_simulation(&result, &context)
        })
        .await
        .context("report worker stopped unexpectedly")??
    } else {
        Exporter::default().export_simulation(&result, &context)?
    };

    save(&options.output_dir, &artifact).await
}

async fn load(config: &AppConfig, source: Source) -> anyhow::Result<SimulationResult> {
    match source {
        Source::Api(id) => {
            let gateway = HttpSimulationGateway::from_config(&config.gateway)?;
            Ok(load_for_report(&gateway, &id, config.gateway.page_size).await?)
        }
        Source::File(path) => {
            let raw = tokio::fs::read(&path)
                .await
                .with_context(|| format!("cannot read {}", path.display()))?;
            serde_json::from_slice(&raw)
                .with_context(|| format!("{} is not a simulation result", path.display()))
        }
    }
}

async fn save(output_dir: &Path, artifact: &Artifact) -> anyhow::Result<PathBuf> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("cannot create {}", output_dir.display()))?;
    let root = tokio::fs::canonicalize(output_dir).await?;

    let store = ArtifactStore::from_provider(StorageProvider::local_fs(&root))?;
    let stored = store.save(artifact).await?;
    Ok(root.join(stored.key))
}
