//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.paloma.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `PALOMA_RECORD_ID`, `PALOMA_SERVICE_KEY`,
//!    or legacy `SUPABASE_KEY`
//! 4. **Command-line arguments** – `--record-id`/`-d`, `--base-url`/`-b`,
//!    and friends
//!
//! # Configuration File
//!
//! Place `.paloma.toml` in the current directory, home directory, or XDG
//! config directory with:
//!
//! ```toml
//! record_id = "entrega-42"
//! base_url = "https://store.example.com"
//! service_key = "service-role-key"
//! page_size = 5
//! ```

use std::env;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::store::{CollectionEndpoint, PageSize, RecordId, ServiceKey, StoreError};

/// Operation mode determined by provided configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Mount a single panel for one delivery record.
    SinglePanel,
    /// Scan a host document and mount a panel per flagged element.
    BulkMount,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `PALOMA_RECORD_ID` or `--record-id`: Delivery record identifier
/// - `PALOMA_BASE_URL` or `--base-url`: Comment store base URL
/// - `PALOMA_SERVICE_KEY`, `SUPABASE_KEY` (legacy), or `--service-key`
/// - `PALOMA_PAGE_SIZE` or `--page-size`: Comments per page
/// - `PALOMA_HOST_DOCUMENT` or `--host-document`: Host document to scan
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PALOMA",
    discovery(
        dotfile_name = ".paloma.toml",
        config_file_name = "paloma.toml",
        app_name = "paloma"
    )
)]
pub struct PalomaConfig {
    /// Identifier of the delivery record whose comments are shown.
    ///
    /// Can be provided via:
    /// - CLI: `--record-id <ID>` or `-d <ID>`
    /// - Environment: `PALOMA_RECORD_ID`
    /// - Config file: `record_id = "..."`
    #[ortho_config(cli_short = 'd')]
    pub record_id: Option<String>,

    /// Base URL of the remote comment store.
    ///
    /// Can be provided via:
    /// - CLI: `--base-url <URL>` or `-b <URL>`
    /// - Environment: `PALOMA_BASE_URL`
    /// - Config file: `base_url = "..."`
    #[ortho_config(cli_short = 'b')]
    pub base_url: Option<String>,

    /// Access credential carried on every store request.
    ///
    /// Can be provided via:
    /// - CLI: `--service-key <KEY>` or `-k <KEY>`
    /// - Environment: `PALOMA_SERVICE_KEY` or `SUPABASE_KEY` (legacy)
    /// - Config file: `service_key = "..."`
    #[ortho_config(cli_short = 'k')]
    pub service_key: Option<String>,

    /// Number of comments fetched per page. Defaults to 5.
    ///
    /// Can be provided via:
    /// - CLI: `--page-size <N>` or `-p <N>`
    /// - Environment: `PALOMA_PAGE_SIZE`
    /// - Config file: `page_size = 5`
    #[ortho_config(cli_short = 'p')]
    pub page_size: Option<u32>,

    /// Host document scanned for bulk mount targets.
    ///
    /// When set, Paloma scans the document for elements flagged with
    /// `data-delivery-comments` and mounts one panel per match, sharing the
    /// base URL, credential, and page size.
    ///
    /// Can be provided via:
    /// - CLI: `--host-document <PATH>`
    /// - Environment: `PALOMA_HOST_DOCUMENT`
    /// - Config file: `host_document = "page.html"`
    #[ortho_config()]
    pub host_document: Option<String>,

    /// Emits JSONL telemetry events to stderr.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry`
    /// - Config file: `telemetry = true`
    #[ortho_config()]
    pub telemetry: bool,
}

impl PalomaConfig {
    /// Determines the operation mode based on provided configuration.
    ///
    /// Returns `BulkMount` when a host document is configured, otherwise
    /// `SinglePanel`.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.host_document.is_some() {
            OperationMode::BulkMount
        } else {
            OperationMode::SinglePanel
        }
    }

    /// Returns the validated record identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingRecordId`] when no identifier is
    /// configured or the configured value is blank.
    pub fn require_record_id(&self) -> Result<RecordId, StoreError> {
        self.record_id
            .as_deref()
            .ok_or(StoreError::MissingRecordId)
            .and_then(RecordId::new)
    }

    /// Resolves the comment collection endpoint from the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Configuration`] when no base URL is configured
    /// and [`StoreError::InvalidBaseUrl`] when it cannot be parsed.
    pub fn resolve_endpoint(&self) -> Result<CollectionEndpoint, StoreError> {
        let base = self
            .base_url
            .as_deref()
            .ok_or_else(|| StoreError::Configuration {
                message: "comment store base URL is required (use --base-url or -b)".to_owned(),
            })?;
        CollectionEndpoint::from_base(base)
    }

    /// Resolves the service key from configuration or the legacy
    /// `SUPABASE_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingServiceKey`] when no source provides a
    /// usable value.
    pub fn resolve_service_key(&self) -> Result<ServiceKey, StoreError> {
        self.service_key
            .clone()
            .or_else(|| env::var("SUPABASE_KEY").ok())
            .ok_or(StoreError::MissingServiceKey)
            .and_then(ServiceKey::new)
    }

    /// Resolves the page size, applying the default when unset.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPageSize`] when a configured value is
    /// zero.
    pub fn resolve_page_size(&self) -> Result<PageSize, StoreError> {
        self.page_size.map_or(Ok(PageSize::default()), PageSize::new)
    }

    /// Returns the host document path for bulk mounting.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Configuration`] when no host document is
    /// configured.
    pub fn require_host_document(&self) -> Result<Utf8PathBuf, StoreError> {
        self.host_document
            .as_deref()
            .map(Utf8PathBuf::from)
            .ok_or_else(|| StoreError::Configuration {
                message: "host document path is required (use --host-document)".to_owned(),
            })
    }
}

#[cfg(test)]
mod tests;
