use crate::catalog::{ErrorCatalog, ErrorCatalogEntry, ErrorCode};

/// An anticipated business-rule violation.
///
/// Holds a reference to a catalog identifier, not a copy of the entry; the
/// status, code and message are resolved when the failure is translated.
/// `detail` is for server-side logs only and never reaches a response body.
#[derive(thiserror::Error, Debug, Clone)]
#[error("Domain failure: {code}")]
pub struct DomainFailure {
    code: ErrorCode,
    detail: Option<String>,
}

impl DomainFailure {
    pub fn new(code: ErrorCode) -> Self {
        Self { code, detail: None }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Resolves the referenced entry in the process-wide catalog.
    pub fn entry(&self) -> &'static ErrorCatalogEntry {
        ErrorCatalog::global().lookup(self.code)
    }
}

impl From<ErrorCode> for DomainFailure {
    fn from(code: ErrorCode) -> Self {
        Self::new(code)
    }
}

// Identity is the identifier; context does not participate.
impl PartialEq for DomainFailure {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for DomainFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_detail() {
        let plain = DomainFailure::new(ErrorCode::NotExistUser);
        let detailed = DomainFailure::new(ErrorCode::NotExistUser).with_detail("user_id=7");
        assert_eq!(plain, detailed);
        assert_ne!(plain, DomainFailure::new(ErrorCode::CheckUser));
    }

    #[test]
    fn test_entry_resolves_through_catalog() {
        let failure = DomainFailure::from(ErrorCode::NotExistUser);
        let entry = failure.entry();
        assert_eq!(entry.code, "1000");
        assert_eq!(entry.message, "사용자가 없습니다.");
    }

    #[test]
    fn test_display_hides_detail() {
        let failure = DomainFailure::new(ErrorCode::CheckUser).with_detail("secret row 42");
        let shown = failure.to_string();
        assert!(shown.contains("CHECK_USER"));
        assert!(!shown.contains("secret"));
        assert_eq!(failure.detail(), Some("secret row 42"));
    }
}
