/// Convenience result type used across the crate.
pub type CarouselResult<T> = Result<T, CarouselError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum CarouselError {
    /// Invalid user-provided configuration or geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised by the host while measuring layout.
    #[error("layout error: {0}")]
    Layout(String),

    /// The external pager could not be reached or refused a snap request.
    #[error("navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CarouselError {
    /// Build a [`CarouselError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CarouselError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`CarouselError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

/// Failure modes of a [`PagerHandle`](crate::PagerHandle) snap request.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The pager behind the handle is gone (unmounted or never attached).
    #[error("pager handle is detached")]
    Detached,

    /// The pager has no page at the requested index.
    #[error("page index {index} is out of range for {len} pages")]
    IndexOutOfRange {
        /// Requested page index.
        index: usize,
        /// Number of pages the pager currently holds.
        len: usize,
    },

    /// The pager refused the request for its own reasons.
    #[error("pager rejected snap request: {0}")]
    Rejected(String),
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
