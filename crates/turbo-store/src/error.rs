//! Store error types.

use thiserror::Error;
use turbo_commerce::CommerceError;

/// Errors returned by store operations that the caller must surface.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Domain rule rejected the request (unknown promo code, bad checkout form).
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}

/// Errors raised inside an effect.
///
/// Effects never propagate these to the dispatcher; they are logged and, for
/// precondition violations, stop the offending effect.
#[derive(Error, Debug)]
pub enum EffectError {
    /// An added product had no usable title to announce.
    #[error("Invalid product title for product {0}")]
    InvalidProductTitle(turbo_commerce::ProductId),

    /// Reading or writing the persisted cart failed.
    #[error("Cart persistence failed: {0}")]
    Persistence(#[from] turbo_cache::CacheError),

    /// Converting a persisted cart line failed.
    #[error("Cart snapshot invalid: {0}")]
    Snapshot(#[from] CommerceError),
}
