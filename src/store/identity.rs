//! Validated identity wrappers for the comment store.
//!
//! These newtypes keep record identifiers, credentials, and paging
//! parameters from being passed around as bare strings and integers, and
//! concentrate the construction-time validation required by the panel.

use url::Url;

use super::error::StoreError;

/// Path of the comment collection relative to the store base URL.
const COLLECTION_PATH: &str = "rest/v1/delivery_comments";

/// Default number of comments fetched per page.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Identifier of the delivery record the comments are attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordId(String);

impl RecordId {
    /// Validates that the identifier is non-blank and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingRecordId`] when the supplied value is
    /// blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, StoreError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(StoreError::MissingRecordId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the identifier value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Access credential sent with every store request.
///
/// The same value is carried as both the `apikey` header and the bearer
/// token, matching the store's authentication convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceKey(String);

impl ServiceKey {
    /// Validates that the credential is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingServiceKey`] when the supplied string is
    /// blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, StoreError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(StoreError::MissingServiceKey);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the credential value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ServiceKey {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Number of comments requested per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(u32);

impl PageSize {
    /// Creates a page size, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPageSize`] when `value` is zero.
    pub const fn new(value: u32) -> Result<Self, StoreError> {
        if value == 0 {
            return Err(StoreError::InvalidPageSize);
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

/// Resolved location of the remote comment collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionEndpoint(Url);

impl CollectionEndpoint {
    /// Derives the collection URL from the store base location.
    ///
    /// Trailing slashes on the base are ignored, mirroring how the store
    /// publishes its REST root.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidBaseUrl`] when the base cannot be parsed
    /// or cannot serve as a base URL.
    pub fn from_base(base: &str) -> Result<Self, StoreError> {
        let trimmed = base.trim_end_matches('/');
        let parsed = Url::parse(&format!("{trimmed}/{COLLECTION_PATH}"))
            .map_err(|error| StoreError::InvalidBaseUrl(error.to_string()))?;
        if !parsed.has_host() {
            return Err(StoreError::InvalidBaseUrl(
                "URL must include a host".to_owned(),
            ));
        }
        Ok(Self(parsed))
    }

    /// Returns the full collection URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.0
    }

    /// Returns the collection URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("entrega-42", "entrega-42")]
    #[case("  entrega-42  ", "entrega-42")]
    fn record_id_trims_whitespace(#[case] input: &str, #[case] expected: &str) {
        let record = RecordId::new(input).expect("record id should be accepted");
        assert_eq!(record.as_str(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_record_id_is_rejected(#[case] input: &str) {
        assert_eq!(RecordId::new(input), Err(StoreError::MissingRecordId));
    }

    #[test]
    fn blank_service_key_is_rejected() {
        assert_eq!(ServiceKey::new("  "), Err(StoreError::MissingServiceKey));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert_eq!(PageSize::new(0), Err(StoreError::InvalidPageSize));
    }

    #[test]
    fn default_page_size_is_five() {
        assert_eq!(PageSize::default().get(), 5);
    }

    #[rstest]
    #[case("https://store.example.com")]
    #[case("https://store.example.com/")]
    #[case("https://store.example.com///")]
    fn endpoint_ignores_trailing_slashes(#[case] base: &str) {
        let endpoint = CollectionEndpoint::from_base(base).expect("base should parse");
        assert_eq!(
            endpoint.as_str(),
            "https://store.example.com/rest/v1/delivery_comments"
        );
    }

    #[test]
    fn endpoint_rejects_unparseable_base() {
        assert!(matches!(
            CollectionEndpoint::from_base("not a url"),
            Err(StoreError::InvalidBaseUrl(_))
        ));
    }
}
