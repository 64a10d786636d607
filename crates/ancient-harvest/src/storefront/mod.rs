//! The two decision engines behind the storefront: shop-page filtering and
//! the recommendation quiz. Both are pure functions of (catalog, parameters)
//! and own no state between invocations.

pub mod quiz;
pub mod shop;
