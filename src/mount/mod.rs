//! Bulk mounting of panels from a host document.
//!
//! The host page flags elements with a `data-delivery-comments` attribute
//! and names the record in `data-delivery-id`. Scanning the document yields
//! one panel specification per flagged element, all sharing the collection
//! endpoint, credential, and page size. A flagged element without a usable
//! record id fails with the same validation error as direct construction.

use crate::store::{CollectionEndpoint, PageSize, RecordId, RestCommentStore, ServiceKey, StoreError};

/// Attribute flagging an element as a comments mount target.
const MOUNT_FLAG_ATTRIBUTE: &str = "data-delivery-comments";

/// Attribute naming the delivery record for a mount target.
const RECORD_ID_ATTRIBUTE: &str = "data-delivery-id";

/// A flagged element found in the host document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountTarget {
    /// Raw record id attribute value, if present.
    pub record_id: Option<String>,
}

/// Everything needed to mount one panel for one record.
#[derive(Debug, Clone)]
pub struct PanelSpec {
    record_id: RecordId,
    endpoint: CollectionEndpoint,
    key: ServiceKey,
    page_size: PageSize,
}

impl PanelSpec {
    /// Record the panel is scoped to.
    #[must_use]
    pub const fn record_id(&self) -> &RecordId {
        &self.record_id
    }

    /// Comments fetched per page.
    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Builds the REST store for this panel.
    #[must_use]
    pub fn into_store(self) -> RestCommentStore {
        RestCommentStore::new(self.endpoint, self.record_id, self.key)
    }
}

/// Scans a host document for flagged mount targets.
///
/// Only the flag and record-id attributes are interpreted; the rest of the
/// markup passes through unexamined. Attribute values must be quoted with
/// single or double quotes.
#[must_use]
pub fn scan_host_document(document: &str) -> Vec<MountTarget> {
    let mut targets = Vec::new();
    for tag in tags(document) {
        if !has_attribute(tag, MOUNT_FLAG_ATTRIBUTE) {
            continue;
        }
        targets.push(MountTarget {
            record_id: attribute_value(tag, RECORD_ID_ATTRIBUTE),
        });
    }
    targets
}

/// Builds one panel spec per mount target, sharing the given configuration.
///
/// # Errors
///
/// Returns [`StoreError::MissingRecordId`] when a flagged element has no
/// usable record id.
pub fn panel_specs(
    document: &str,
    endpoint: &CollectionEndpoint,
    key: &ServiceKey,
    page_size: PageSize,
) -> Result<Vec<PanelSpec>, StoreError> {
    scan_host_document(document)
        .into_iter()
        .map(|target| {
            let record_id = target
                .record_id
                .ok_or(StoreError::MissingRecordId)
                .and_then(RecordId::new)?;
            Ok(PanelSpec {
                record_id,
                endpoint: endpoint.clone(),
                key: key.clone(),
                page_size,
            })
        })
        .collect()
}

/// Yields the contents of each element tag (between `<` and `>`).
fn tags(document: &str) -> impl Iterator<Item = &str> {
    document
        .split('<')
        .skip(1)
        .filter_map(|chunk| chunk.split('>').next())
}

fn has_attribute(tag: &str, name: &str) -> bool {
    tag.split_whitespace().any(|token| {
        token == name || token.strip_prefix(name).is_some_and(|rest| rest.starts_with('='))
    })
}

/// Extracts a quoted attribute value from a tag body.
fn attribute_value(tag: &str, name: &str) -> Option<String> {
    let start = tag.find(name)?;
    let rest = tag.get(start + name.len()..)?;
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|ch| *ch == '"' || *ch == '\'')?;
    let inner = rest.get(1..)?;
    let end = inner.find(quote)?;
    inner.get(..end).map(ToOwned::to_owned)
}
