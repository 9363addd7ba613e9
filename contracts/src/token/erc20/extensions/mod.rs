//! Common extensions to the ERC-20 standard.
pub mod metadata;

pub use metadata::IErc20Metadata;
