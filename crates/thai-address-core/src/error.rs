// crates/thai-address-core/src/error.rs
use thiserror::Error;

/// Errors raised by the dataset loader and the address provider.
#[derive(Debug, Error)]
pub enum AddressError {
    #[error("Dataset not found: {0}")]
    NotFound(String),

    #[error("Address data is not initialized yet")]
    NotInitialized,

    #[error("Invalid dataset: {0}")]
    InvalidData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binary cache error: {0}")]
    Bincode(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, AddressError>;

/// Failures surfaced by the query router and the search session.
///
/// Every variant is recoverable: the caller shows [`SearchError::user_message`]
/// and an empty result list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("query is empty")]
    EmptyQuery,

    #[error("address data is still loading")]
    ProviderNotInitialized,

    #[error("address data failed to load: {0}")]
    ProviderInitFailed(String),

    #[error("search failed: {0}")]
    SearchFailed(String),
}

impl SearchError {
    /// Thai status line shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::EmptyQuery => "กรุณากรอกคำค้นหา",
            SearchError::ProviderNotInitialized => "กำลังเตรียมข้อมูล โปรดลองอีกครั้ง",
            SearchError::ProviderInitFailed(_) => "โหลดข้อมูลที่อยู่ไม่สำเร็จ",
            SearchError::SearchFailed(_) => "ค้นหาไม่สำเร็จ ลองอีกครั้ง",
        }
    }

    /// `true` for failures the user can clear by searching again.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, SearchError::ProviderInitFailed(_))
    }
}

impl From<AddressError> for SearchError {
    fn from(err: AddressError) -> Self {
        SearchError::SearchFailed(err.to_string())
    }
}
