//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

/// Top-level error for billing operations.
#[derive(Debug, thiserror::Error)]
pub enum BillingError {
    #[error("unsupported variant")]
    UnsupportedVariant(#[from] UnsupportedVariantError),

    /// The id allocator has no identifier left to hand out.
    #[error("record ids exhausted")]
    IdsExhausted,
}

/// A service type tag outside the closed set, or a variant the active fee
/// schedule has no rule for.
///
/// This is a programming or configuration error and is never worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported service variant: {tag}")]
pub struct UnsupportedVariantError {
    pub tag: String,
}

impl UnsupportedVariantError {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}
