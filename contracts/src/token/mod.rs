//! Token standards.
pub mod currency;
pub mod erc20;
