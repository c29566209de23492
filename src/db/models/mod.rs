//! Database Models
//!
//! Documents are stored with camelCase field names, matching the JSON
//! the storefront frontends exchange with the API.

pub mod serde_helpers;

pub mod banner;
pub mod order;
pub mod product;
pub mod user;

// Re-exports
pub use banner::{Banner, BannerCreate, BannerUpdate};
pub use order::{CustomerInfo, Order, OrderCreate, OrderStats, OrderStatus};
pub use product::{Product, ProductCreate};
pub use user::{User, UserRolePatch, UserUpsert};
