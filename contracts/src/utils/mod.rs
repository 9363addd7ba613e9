//! Common Smart Contracts utilities.
pub mod account;
pub mod storage_slot;

pub use account::AccountAccessExt;
pub use storage_slot::StorageSlot;
