//! Shopping cart module.
//!
//! Contains cart lines, their persisted snapshot form, and promo codes.

mod line;
mod promo;

pub use line::{CartLine, PersistedLine};
pub use promo::{PromoQuote, PromoTable, MERRY_CHRISTMAS};
