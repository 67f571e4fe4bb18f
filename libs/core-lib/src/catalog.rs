//! Process-wide table of known failures.
//!
//! Every anticipated failure has one `ErrorCode` identifier and exactly one
//! catalog entry holding the HTTP status, the published numeric code and the
//! client-facing message. The table is built once and never mutated.

use http::StatusCode;
use once_cell::sync::Lazy;
use std::fmt;

// --- Identifiers ---

/// Symbolic failure identifier. Used as the lookup key, never sent to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // user 1XXX
    NotExistUser,
    CheckUser,
    // post 2XXX
    // comment 3XXX
    // admin 4XXX
    // global
    NotLogin,
    InvalidRequest,
    NotFoundApi,
    MethodNotAllowed,
    InternalServerError,
}

impl ErrorCode {
    /// Every identifier the catalog must register. Table slots follow this order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::NotExistUser,
        ErrorCode::CheckUser,
        ErrorCode::NotLogin,
        ErrorCode::InvalidRequest,
        ErrorCode::NotFoundApi,
        ErrorCode::MethodNotAllowed,
        ErrorCode::InternalServerError,
    ];

    /// Slot of this identifier in the table; `None` if it is missing from `ALL`.
    fn ordinal(self) -> Option<usize> {
        Self::ALL.iter().position(|code| *code == self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NotExistUser => "NOT_EXIST_USER",
            ErrorCode::CheckUser => "CHECK_USER",
            ErrorCode::NotLogin => "NOT_LOGIN",
            ErrorCode::InvalidRequest => "INVALID_REQUEST",
            ErrorCode::NotFoundApi => "NOT_FOUND_API",
            ErrorCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ErrorCode::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Domains ---

/// Functional area owning a block of numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorDomain {
    User,
    Post,
    Comment,
    Admin,
    Global,
}

impl ErrorDomain {
    /// Inclusive numeric code range reserved for this domain.
    pub fn range(self) -> (u32, u32) {
        match self {
            ErrorDomain::User => (1000, 1999),
            ErrorDomain::Post => (2000, 2999),
            ErrorDomain::Comment => (3000, 3999),
            ErrorDomain::Admin => (4000, 4999),
            ErrorDomain::Global => (5000, 9999),
        }
    }

    pub fn contains(self, numeric: u32) -> bool {
        let (low, high) = self.range();
        (low..=high).contains(&numeric)
    }
}

// --- Entries ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCatalogEntry {
    pub identifier: ErrorCode,
    pub domain: ErrorDomain,
    pub status: StatusCode,
    pub code: &'static str,
    pub message: &'static str,
}

const fn entry(
    identifier: ErrorCode,
    domain: ErrorDomain,
    status: StatusCode,
    code: &'static str,
    message: &'static str,
) -> ErrorCatalogEntry {
    ErrorCatalogEntry {
        identifier,
        domain,
        status,
        code,
        message,
    }
}

/// The published table. Codes are a client contract; never renumber them.
pub const ENTRIES: &[ErrorCatalogEntry] = &[
    // user 1XXX
    entry(
        ErrorCode::NotExistUser,
        ErrorDomain::User,
        StatusCode::BAD_REQUEST,
        "1000",
        "사용자가 없습니다.",
    ),
    entry(
        ErrorCode::CheckUser,
        ErrorDomain::User,
        StatusCode::BAD_REQUEST,
        "1001",
        "본인이 아닙니다.",
    ),
    // global
    entry(
        ErrorCode::NotLogin,
        ErrorDomain::Global,
        StatusCode::UNAUTHORIZED,
        "5000",
        "로그인이 필요합니다.",
    ),
    entry(
        ErrorCode::InvalidRequest,
        ErrorDomain::Global,
        StatusCode::BAD_REQUEST,
        "5001",
        "잘못된 요청입니다.",
    ),
    entry(
        ErrorCode::NotFoundApi,
        ErrorDomain::Global,
        StatusCode::NOT_FOUND,
        "5002",
        "존재하지 않는 API입니다.",
    ),
    entry(
        ErrorCode::MethodNotAllowed,
        ErrorDomain::Global,
        StatusCode::METHOD_NOT_ALLOWED,
        "5004",
        "지원하지 않는 HTTP 메서드입니다.",
    ),
    entry(
        ErrorCode::InternalServerError,
        ErrorDomain::Global,
        StatusCode::INTERNAL_SERVER_ERROR,
        "5003",
        "서버 오류가 발생했습니다.",
    ),
];

/// Code and message of every successful response.
pub const SUCCESS_CODE: &str = "200";
pub const SUCCESS_MESSAGE: &str = "성공했습니다.";

// --- Errors ---

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Identifier {0} registered more than once")]
    DuplicateIdentifier(ErrorCode),
    #[error("Code {code} used by both {first} and {second}")]
    DuplicateCode {
        code: &'static str,
        first: ErrorCode,
        second: ErrorCode,
    },
    #[error("Identifier {0} is referenced but never registered")]
    Unregistered(ErrorCode),
    #[error("Identifier {0} is missing from ErrorCode::ALL")]
    Unlisted(ErrorCode),
    #[error("Code {code} of {identifier} is not numeric")]
    NonNumericCode {
        identifier: ErrorCode,
        code: &'static str,
    },
    #[error("Code {code} of {identifier} is outside the {domain:?} range")]
    OutOfRange {
        identifier: ErrorCode,
        domain: ErrorDomain,
        code: &'static str,
    },
    #[error("Identifier {0} has an empty message")]
    EmptyMessage(ErrorCode),
    #[error("Identifier {identifier} maps to non-error status {status}")]
    NonErrorStatus {
        identifier: ErrorCode,
        status: StatusCode,
    },
}

// --- Catalog ---

/// Immutable identifier -> entry table, indexed by `ErrorCode` ordinal.
#[derive(Debug)]
pub struct ErrorCatalog {
    entries: Vec<ErrorCatalogEntry>,
}

static GLOBAL: Lazy<Result<ErrorCatalog, CatalogError>> =
    Lazy::new(|| ErrorCatalog::build(ENTRIES));

impl ErrorCatalog {
    /// Validates `entries` and builds the lookup table.
    pub fn build(entries: &[ErrorCatalogEntry]) -> Result<Self, CatalogError> {
        let mut slots: Vec<Option<ErrorCatalogEntry>> = vec![None; ErrorCode::ALL.len()];

        for candidate in entries {
            let id = candidate.identifier;
            let slot = id.ordinal().ok_or(CatalogError::Unlisted(id))?;
            if slots[slot].is_some() {
                return Err(CatalogError::DuplicateIdentifier(id));
            }
            if candidate.message.trim().is_empty() {
                return Err(CatalogError::EmptyMessage(id));
            }
            if !(candidate.status.is_client_error() || candidate.status.is_server_error()) {
                return Err(CatalogError::NonErrorStatus {
                    identifier: id,
                    status: candidate.status,
                });
            }
            let numeric: u32 = candidate.code.parse().map_err(|_| CatalogError::NonNumericCode {
                identifier: id,
                code: candidate.code,
            })?;
            if !candidate.domain.contains(numeric) {
                return Err(CatalogError::OutOfRange {
                    identifier: id,
                    domain: candidate.domain,
                    code: candidate.code,
                });
            }
            if let Some(clash) = slots.iter().flatten().find(|e| e.code == candidate.code) {
                return Err(CatalogError::DuplicateCode {
                    code: candidate.code,
                    first: clash.identifier,
                    second: id,
                });
            }
            slots[slot] = Some(candidate.clone());
        }

        let entries = ErrorCode::ALL
            .iter()
            .zip(slots)
            .map(|(id, slot)| slot.ok_or(CatalogError::Unregistered(*id)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    /// The process-wide catalog.
    ///
    /// Panics if the static table is invalid. Binaries call [`verify`] before
    /// serving so that this surfaces at start-up rather than on a request.
    pub fn global() -> &'static ErrorCatalog {
        match &*GLOBAL {
            Ok(catalog) => catalog,
            Err(e) => panic!("error catalog is invalid: {e}"),
        }
    }

    /// Total over every identifier listed in `ErrorCode::ALL`.
    ///
    /// Panics only for an identifier left out of `ALL`, which a catalog test
    /// rules out for every declared variant.
    pub fn lookup(&self, identifier: ErrorCode) -> &ErrorCatalogEntry {
        match identifier.ordinal().and_then(|slot| self.entries.get(slot)) {
            Some(entry) => entry,
            None => panic!("{identifier} is missing from ErrorCode::ALL"),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &ErrorCatalogEntry> {
        self.entries.iter()
    }
}

/// Forces construction of the global catalog and reports a broken table.
pub fn verify() -> Result<&'static ErrorCatalog, CatalogError> {
    match &*GLOBAL {
        Ok(catalog) => Ok(catalog),
        Err(e) => Err(e.clone()),
    }
}
