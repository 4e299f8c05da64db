//! Tests for configuration accessors.
//!
//! These cover the pure resolution methods; layered loading itself belongs
//! to ortho-config.

use rstest::rstest;

use super::{OperationMode, PalomaConfig};
use crate::store::StoreError;

fn config_with(record_id: Option<&str>) -> PalomaConfig {
    PalomaConfig {
        record_id: record_id.map(ToOwned::to_owned),
        ..PalomaConfig::default()
    }
}

#[test]
fn missing_record_id_is_a_validation_error() {
    let config = config_with(None);
    assert_eq!(
        config.require_record_id(),
        Err(StoreError::MissingRecordId)
    );
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_record_id_is_a_validation_error(#[case] value: &str) {
    let config = config_with(Some(value));
    assert_eq!(
        config.require_record_id(),
        Err(StoreError::MissingRecordId)
    );
}

#[test]
fn record_id_is_trimmed() {
    let config = config_with(Some("  entrega-42 "));
    let record = config.require_record_id().expect("record id should parse");
    assert_eq!(record.as_str(), "entrega-42");
}

#[test]
fn page_size_defaults_to_five() {
    let config = PalomaConfig::default();
    let size = config.resolve_page_size().expect("default should resolve");
    assert_eq!(size.get(), 5);
}

#[test]
fn zero_page_size_is_rejected() {
    let config = PalomaConfig {
        page_size: Some(0),
        ..PalomaConfig::default()
    };
    assert_eq!(config.resolve_page_size(), Err(StoreError::InvalidPageSize));
}

#[test]
fn missing_base_url_is_a_configuration_error() {
    let config = PalomaConfig::default();
    assert!(matches!(
        config.resolve_endpoint(),
        Err(StoreError::Configuration { .. })
    ));
}

#[test]
fn endpoint_resolves_from_base_url() {
    let config = PalomaConfig {
        base_url: Some("https://store.example.com/".to_owned()),
        ..PalomaConfig::default()
    };
    let endpoint = config.resolve_endpoint().expect("endpoint should resolve");
    assert_eq!(
        endpoint.as_str(),
        "https://store.example.com/rest/v1/delivery_comments"
    );
}

#[test]
fn host_document_switches_to_bulk_mount() {
    let config = PalomaConfig {
        host_document: Some("page.html".to_owned()),
        ..PalomaConfig::default()
    };
    assert_eq!(config.operation_mode(), OperationMode::BulkMount);
    assert_eq!(
        PalomaConfig::default().operation_mode(),
        OperationMode::SinglePanel
    );
}
