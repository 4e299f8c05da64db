//! Paloma CLI entrypoint for the delivery comments panel.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use ortho_config::OrthoConfig;

use paloma::panel::{self, PanelContext};
use paloma::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};
use paloma::{mount, OperationMode, PalomaConfig, RestCommentStore, StoreError};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StoreError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::SinglePanel => run_single_panel(&config).await,
        OperationMode::BulkMount => run_bulk_mount(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`StoreError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<PalomaConfig, StoreError> {
    PalomaConfig::load().map_err(|error| StoreError::Configuration {
        message: error.to_string(),
    })
}

/// Mounts one panel for the configured record.
async fn run_single_panel(config: &PalomaConfig) -> Result<(), StoreError> {
    let record_id = config.require_record_id()?;
    let endpoint = config.resolve_endpoint()?;
    let key = config.resolve_service_key()?;
    let page_size = config.resolve_page_size()?;

    let store = RestCommentStore::new(endpoint, record_id, key);
    let context =
        PanelContext::new(Arc::new(store), page_size).with_telemetry(telemetry_sink(config));

    panel::set_panel_context(context);
    panel::run_panel().await
}

/// Scans the host document and mounts one panel per flagged element,
/// sequentially, sharing endpoint, credential, and page size.
async fn run_bulk_mount(config: &PalomaConfig) -> Result<(), StoreError> {
    let document_path = config.require_host_document()?;
    let endpoint = config.resolve_endpoint()?;
    let key = config.resolve_service_key()?;
    let page_size = config.resolve_page_size()?;

    let document = std::fs::read_to_string(&document_path).map_err(|error| StoreError::Io {
        message: format!("cannot read host document '{document_path}': {error}"),
    })?;

    let specs = mount::panel_specs(&document, &endpoint, &key, page_size)?;
    if specs.is_empty() {
        return Err(StoreError::Configuration {
            message: format!("host document '{document_path}' contains no mount targets"),
        });
    }

    for spec in specs {
        let context = PanelContext::new(Arc::new(spec.into_store()), page_size)
            .with_telemetry(telemetry_sink(config));
        panel::set_panel_context(context);
        panel::run_panel().await?;
    }

    Ok(())
}

fn telemetry_sink(config: &PalomaConfig) -> Arc<dyn TelemetrySink> {
    if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    }
}
