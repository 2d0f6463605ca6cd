//! Domain Layer - Market data records returned by the client
//!
//! Pure value types with no external dependencies:
//! - `PriceInfo`: current price of one token
//! - `TokenOverview`: market metadata snapshot for one token

pub mod price;
pub mod token_overview;

pub use price::PriceInfo;
pub use token_overview::TokenOverview;
